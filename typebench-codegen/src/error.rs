// Typebench Codegen Error Handling

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while generating the synthetic source file
#[derive(Error, Diagnostic, Debug)]
pub enum CodegenError {
    #[error("failed to write generated source to {}", path.display())]
    #[diagnostic(
        code(typebench::codegen::write_failed),
        help("the parent directory must already exist and be writable")
    )]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for codegen operations
pub type CodegenResult<T> = Result<T, CodegenError>;
