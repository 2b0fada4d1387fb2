//! Resolution error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    /// The testbench itself could not be read. This aborts resolution for
    /// that testbench; files discovered later degrade to warnings instead.
    #[error("failed to read testbench '{file}': {source}")]
    Testbench {
        file: String,
        #[source]
        source: std::io::Error,
    },

    /// Directory listing failure during discovery.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The working directory does not exist or is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
}
