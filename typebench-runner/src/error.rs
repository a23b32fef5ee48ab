// Typebench Runner Error Handling

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while invoking the external compiler
#[derive(Error, Diagnostic, Debug)]
pub enum RunnerError {
    #[error("failed to spawn compiler {}", compiler.display())]
    #[diagnostic(
        code(typebench::runner::compiler_spawn),
        help("check that the compiler executable exists and is executable")
    )]
    CompilerSpawn {
        compiler: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for runner operations
pub type RunnerResult<T> = Result<T, RunnerError>;
