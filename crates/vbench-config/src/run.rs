//! Run-behavior configuration.

use serde::{Deserialize, Serialize};

fn default_compile_flags() -> Vec<String> {
    vec!["-Wall".to_string()]
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RunConfig {
    /// Flags passed to the compiler before `-o`.
    #[serde(default = "default_compile_flags")]
    pub compile_flags: Vec<String>,

    /// Launch the waveform viewer by default (the `--wave` flag also
    /// enables it per run).
    #[serde(default)]
    pub wave: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            compile_flags: default_compile_flags(),
            wave: false,
        }
    }
}
