// Compiler invocation and timing

use std::path::Path;
use std::process::{Command, ExitStatus};
use std::time::{Duration, Instant};

use crate::error::{RunnerError, RunnerResult};

/// Captured result of one compiler invocation.
#[derive(Debug)]
pub struct CheckReport {
    /// Everything the compiler wrote to its standard output.
    pub stdout: Vec<u8>,
    /// Everything the compiler wrote to its standard error.
    pub stderr: Vec<u8>,
    /// The compiler's exit status, reported but never interpreted here.
    pub status: ExitStatus,
    /// Wall-clock time from just before spawn until the compiler exited.
    pub elapsed: Duration,
}

/// Run `compiler` with `source` as its sole argument, blocking until it
/// exits, and capture both output streams in full.
///
/// A compiler that runs and exits nonzero (a compile error in the generated
/// file, say) is still `Ok`: its complaints end up in [`CheckReport::stderr`]
/// and the caller decides what to do with the status. Only failing to spawn
/// the compiler at all is an `Err`.
pub fn check_file(compiler: &Path, source: &Path) -> RunnerResult<CheckReport> {
    let started = Instant::now();
    let output = Command::new(compiler)
        .arg(source)
        .output()
        .map_err(|err| RunnerError::CompilerSpawn {
            compiler: compiler.to_path_buf(),
            source: err,
        })?;
    let elapsed = started.elapsed();

    Ok(CheckReport {
        stdout: output.stdout,
        stderr: output.stderr,
        status: output.status,
        elapsed,
    })
}
