//! External tool binary names.

use serde::{Deserialize, Serialize};

fn default_compiler() -> String {
    "iverilog".to_string()
}

fn default_simulator() -> String {
    "vvp".to_string()
}

fn default_viewer() -> String {
    "gtkwave".to_string()
}

/// Names (or absolute paths) of the external toolchain binaries.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToolsConfig {
    /// Verilog compiler invoked for the compile stage.
    #[serde(default = "default_compiler")]
    pub compiler: String,

    /// Simulation runtime invoked with the compiled artifact.
    #[serde(default = "default_simulator")]
    pub simulator: String,

    /// Waveform viewer launched on the `.vcd` dump.
    #[serde(default = "default_viewer")]
    pub viewer: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            compiler: default_compiler(),
            simulator: default_simulator(),
            viewer: default_viewer(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::ToolsConfig;

    #[test]
    fn defaults_are_the_icarus_suite() {
        let config = ToolsConfig::default();
        assert_eq!(config.compiler, "iverilog");
        assert_eq!(config.simulator, "vvp");
        assert_eq!(config.viewer, "gtkwave");
    }
}
