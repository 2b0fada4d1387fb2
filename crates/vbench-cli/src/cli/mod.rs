use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `vbench` binary.
#[derive(Debug, Parser)]
#[command(name = "vbench", version, about = "vbench - Verilog testbench runner")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: text, json
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory containing the .v sources (defaults to the current
    /// directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub dir: Option<std::path::PathBuf>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            dir: self.dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["vbench", "--format", "json", "-C", "/tmp/hdl", "list"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.dir.as_deref(), Some(std::path::Path::new("/tmp/hdl")));
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["vbench", "list", "--format", "json", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["vbench", "--format", "xml", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn run_arguments_parse() {
        let cli = Cli::try_parse_from([
            "vbench", "run", "adder_tb.v", "--dep", "adder.v", "--dep", "full_adder.v", "--wave",
            "--yes",
        ])
        .expect("cli should parse");

        let Commands::Run(args) = cli.command else {
            panic!("expected run command");
        };
        assert_eq!(args.testbench, "adder_tb.v");
        assert_eq!(args.deps, vec!["adder.v", "full_adder.v"]);
        assert!(args.wave);
        assert!(args.yes);
        assert!(!args.no_detect);
    }

    #[test]
    fn deps_requires_a_testbench() {
        assert!(Cli::try_parse_from(["vbench", "deps"]).is_err());
        let cli = Cli::try_parse_from(["vbench", "deps", "counter_tb.v"]).expect("cli should parse");
        let Commands::Deps(args) = cli.command else {
            panic!("expected deps command");
        };
        assert_eq!(args.testbench, "counter_tb.v");
    }
}
