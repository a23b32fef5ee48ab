// Synthetic source emission
//
// Produces a fixed benchmark program: a block of tiny arithmetic functions
// per numeric type, followed by a driver that calls every one of them.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CodegenError, CodegenResult};

/// The numeric types the synthetic program exercises, in emission order.
pub const NUMERIC_TYPES: [&str; 4] = ["int", "long", "float", "double"];

/// Render the complete synthetic program as source text.
///
/// For each type `T` in [`NUMERIC_TYPES`], emits `f_count` definitions
/// `T add_T_n(T x) { return x * (x + n); }` for `n` in `0..f_count`, then a
/// `main` driver that declares one accumulator per type and adds the result
/// of calling every generated function with `n` as its argument. Ordering is
/// deterministic, so rendering is idempotent for a given `f_count`.
pub fn render_source(f_count: usize) -> String {
    let mut source = String::new();

    for typ in NUMERIC_TYPES {
        for n in 0..f_count {
            source.push_str(&format!(
                "{typ} add_{typ}_{n}({typ} x) {{ return x * (x + {n}); }}\n"
            ));
        }
        source.push('\n');
    }

    source.push_str("int main(string[] args)\n{\n");
    for typ in NUMERIC_TYPES {
        source.push_str(&format!("    {typ} {typ}_sum = 0;\n"));
        for n in 0..f_count {
            source.push_str(&format!("    {typ}_sum += add_{typ}_{n}({n});\n"));
        }
    }
    source.push_str("    return int_sum;\n}\n");

    source
}

/// Path the generated file is written to: `<root>/<language>/foo.<ext>`,
/// where the extension is the language name lowercased. The directory
/// component keeps the language string exactly as given.
pub fn output_path(root: &Path, language: &str) -> PathBuf {
    root.join(language)
        .join(format!("foo.{}", language.to_lowercase()))
}

/// Render the synthetic program and write it to [`output_path`],
/// overwriting any previous file at that location.
///
/// The parent directory must already exist; no directories are created.
pub fn generate_source_file(
    f_count: usize,
    language: &str,
    root: &Path,
) -> CodegenResult<PathBuf> {
    let path = output_path(root, language);
    fs::write(&path, render_source(f_count)).map_err(|err| CodegenError::WriteFailed {
        path: path.clone(),
        source: err,
    })?;
    Ok(path)
}
