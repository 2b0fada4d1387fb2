//! Transitive dependency closure over instantiation scans.
//!
//! Starting from one testbench, discovers every `.v` file in the working
//! directory that the testbench (transitively) instantiates, plus the
//! device-under-test implied by the `_tb.v` naming convention. An explicit
//! worklist with a visited set makes the termination bound obvious: each
//! distinct file is read at most once, so resolution terminates even when
//! two files instantiate each other.

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::fs;
use std::path::Path;

use crate::error::ResolveError;
use crate::scan::scan_instantiations;

/// File names (relative to the working directory) a testbench depends on.
///
/// Unique by name; `BTreeSet` gives order-independent equality and a
/// deterministic display order. The testbench itself is never a member, and
/// every member existed on disk at check time.
pub type DependencySet = BTreeSet<String>;

/// Resolve the dependency closure of `testbench` inside `dir`.
///
/// The result is a proposal for the caller to confirm — partial results are
/// acceptable and expected: files that disappear or become unreadable during
/// the closure are skipped with a warning rather than aborting the run. Only
/// a failure to read the testbench itself is an error.
///
/// # Errors
///
/// Returns [`ResolveError::Testbench`] when the testbench file cannot be
/// read.
pub fn resolve(testbench: &str, dir: &Path) -> Result<DependencySet, ResolveError> {
    let text = fs::read_to_string(dir.join(testbench)).map_err(|source| {
        ResolveError::Testbench {
            file: testbench.to_string(),
            source,
        }
    })?;

    let mut set = DependencySet::new();
    let mut worklist: VecDeque<String> = VecDeque::new();

    collect_existing(&text, dir, testbench, &mut set, &mut worklist);

    // A testbench named `x_tb.v` conventionally exercises `x.v`; include it
    // even when the scan never saw an instantiation of it.
    if let Some(base) = testbench.strip_suffix("_tb.v") {
        let dut = format!("{base}.v");
        if dir.join(&dut).is_file() && set.insert(dut.clone()) {
            worklist.push_back(dut);
        }
    }

    let mut visited: HashSet<String> = HashSet::new();
    while let Some(file) = worklist.pop_front() {
        if !visited.insert(file.clone()) {
            continue;
        }
        let text = match fs::read_to_string(dir.join(&file)) {
            Ok(text) => text,
            Err(error) => {
                tracing::warn!(file = %file, error = %error, "skipping unreadable file during closure");
                continue;
            }
        };
        collect_existing(&text, dir, testbench, &mut set, &mut worklist);
    }

    Ok(set)
}

/// Add every scanned candidate whose `.v` file exists in `dir` to the set,
/// queueing newly discovered files for their own scan.
fn collect_existing(
    text: &str,
    dir: &Path,
    testbench: &str,
    set: &mut DependencySet,
    worklist: &mut VecDeque<String>,
) {
    for name in scan_instantiations(text) {
        let file = format!("{name}.v");
        if file != testbench && dir.join(&file).is_file() && set.insert(file.clone()) {
            worklist.push_back(file);
        }
    }
}
