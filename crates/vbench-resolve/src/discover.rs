//! Working-directory discovery: which testbenches and modules are here?
//!
//! Non-recursive by design — the toolchain compiles with file names relative
//! to one working directory, so only that directory's `.v` files are
//! candidates.

use std::fs;
use std::path::Path;

use crate::error::ResolveError;

/// List testbench files (`*_tb.v`) in `dir`, sorted by name.
///
/// # Errors
///
/// Returns [`ResolveError::NotADirectory`] when `dir` is not a directory,
/// [`ResolveError::Io`] on listing failures.
pub fn list_testbenches(dir: &Path) -> Result<Vec<String>, ResolveError> {
    verilog_files(dir, |name| name.ends_with("_tb.v"))
}

/// List module files (`*.v` excluding `*_tb.v`) in `dir`, sorted by name.
///
/// # Errors
///
/// Returns [`ResolveError::NotADirectory`] when `dir` is not a directory,
/// [`ResolveError::Io`] on listing failures.
pub fn list_modules(dir: &Path) -> Result<Vec<String>, ResolveError> {
    verilog_files(dir, |name| !name.ends_with("_tb.v"))
}

fn verilog_files(dir: &Path, keep: impl Fn(&str) -> bool) -> Result<Vec<String>, ResolveError> {
    if !dir.is_dir() {
        return Err(ResolveError::NotADirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name.ends_with(".v") && keep(name) {
            files.push(name.to_string());
        }
    }
    files.sort();
    Ok(files)
}
