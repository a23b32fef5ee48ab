use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::io::{self, Write};
use std::path::Path;
use typebench_codegen::generate_source_file;
use typebench_runner::check_file;

/// Functions generated per numeric type.
const FUNCTION_COUNT: usize = 10;

/// Target language identifier; also names the output subdirectory and,
/// lowercased, the file extension.
const LANGUAGE: &str = "d";

/// Output root directory. Must exist before the run.
const OUTPUT_ROOT: &str = "generated";

/// The compiler the generated file is handed to.
const COMPILER: &str = "/usr/bin/dmd";

#[derive(Parser)]
#[command(
    name = "typebench",
    version,
    about = "Generate a synthetic source file and time an external compiler type-checking it",
    long_about = "typebench writes a fixed synthetic D program (a block of tiny arithmetic \
functions per numeric type plus a summing driver) and measures how long the D compiler \
takes to process it. The benchmark parameters are fixed; there is nothing to configure."
)]
struct Cli {}

fn main() -> Result<()> {
    Cli::parse();
    run_benchmark()
}

fn run_benchmark() -> Result<()> {
    let path = generate_source_file(FUNCTION_COUNT, LANGUAGE, Path::new(OUTPUT_ROOT))?;
    println!(
        "Generated {} source file: {}",
        LANGUAGE.to_uppercase(),
        path.display()
    );

    let report = check_file(Path::new(COMPILER), &path)?;

    // Relay the compiler's captured streams verbatim, then the timing line.
    // The exit status is deliberately not inspected: compile errors in the
    // generated file show up on stderr and the run still counts.
    io::stdout().write_all(&report.stdout).into_diagnostic()?;
    io::stderr().write_all(&report.stderr).into_diagnostic()?;
    println!(
        "Checking of {} took {:.3} seconds",
        path.display(),
        report.elapsed.as_secs_f64()
    );

    Ok(())
}
