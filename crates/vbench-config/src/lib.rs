//! # vbench-config
//!
//! Layered configuration loading for vbench using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VBENCH_*` prefix, `__` as separator)
//! 2. Project-level `.vbench.toml`
//! 3. User-level `~/.config/vbench/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `VBENCH_TOOLS__COMPILER` -> `tools.compiler`,
//! `VBENCH_RUN__WAVE` -> `run.wave`, and so on — the `__` separates nested
//! sections.
//!
//! # Usage
//!
//! ```no_run
//! use vbench_config::VbenchConfig;
//!
//! let config = VbenchConfig::load_with_dotenv().expect("config");
//! let tools = config.toolchain();
//! ```

mod error;
mod run;
mod tools;

pub use error::ConfigError;
pub use run::RunConfig;
pub use tools::ToolsConfig;

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use vbench_toolchain::Toolchain;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VbenchConfig {
    #[serde(default)]
    pub tools: ToolsConfig,
    #[serde(default)]
    pub run: RunConfig,
}

impl VbenchConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` — use [`Self::load_with_dotenv`] if `.env`
    /// files should be honored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source fails to parse or merge.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// The typical entry point for the CLI: loads `.env` from the current
    /// directory first, then layers the remaining sources.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source fails to parse or merge.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can layer additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".vbench.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("VBENCH_").split("__"))
    }

    /// The [`Toolchain`] described by this configuration.
    #[must_use]
    pub fn toolchain(&self) -> Toolchain {
        Toolchain {
            compiler: self.tools.compiler.clone(),
            simulator: self.tools.simulator.clone(),
            viewer: self.tools.viewer.clone(),
            compile_flags: self.run.compile_flags.clone(),
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vbench").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::VbenchConfig;

    #[test]
    fn defaults_describe_the_icarus_toolchain() {
        let config = VbenchConfig::default();
        let tools = config.toolchain();
        assert_eq!(tools.compiler, "iverilog");
        assert_eq!(tools.simulator, "vvp");
        assert_eq!(tools.viewer, "gtkwave");
        assert_eq!(tools.compile_flags, vec!["-Wall".to_string()]);
    }

    #[test]
    fn env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("VBENCH_TOOLS__COMPILER", "my-iverilog");
            jail.set_env("VBENCH_RUN__WAVE", "true");

            let config: VbenchConfig = VbenchConfig::figment().extract()?;
            assert_eq!(config.tools.compiler, "my-iverilog");
            assert!(config.run.wave);
            // Untouched fields keep their defaults.
            assert_eq!(config.tools.simulator, "vvp");
            Ok(())
        });
    }

    #[test]
    fn project_toml_overrides_defaults_and_env_wins() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                ".vbench.toml",
                r#"
                [tools]
                viewer = "surfer"

                [run]
                compile_flags = ["-Wall", "-g2012"]
                "#,
            )?;
            jail.set_env("VBENCH_TOOLS__VIEWER", "gtkwave-custom");

            let config: VbenchConfig = VbenchConfig::figment().extract()?;
            assert_eq!(config.tools.viewer, "gtkwave-custom", "env beats project toml");
            assert_eq!(
                config.run.compile_flags,
                vec!["-Wall".to_string(), "-g2012".to_string()]
            );
            Ok(())
        });
    }
}
