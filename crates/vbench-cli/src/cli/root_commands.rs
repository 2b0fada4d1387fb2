use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List testbenches (*_tb.v) and module files in the working directory
    List,
    /// Show the proposed dependency closure for a testbench
    Deps(DepsArgs),
    /// Compile, simulate, and optionally visualize a testbench
    Run(RunArgs),
}

#[derive(Debug, Args)]
pub struct DepsArgs {
    /// Testbench file name (e.g. adder_tb.v)
    pub testbench: String,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Testbench file name (e.g. adder_tb.v)
    pub testbench: String,

    /// Dependency file to compile with the testbench (repeatable; supplying
    /// any disables auto-detection)
    #[arg(long = "dep", value_name = "FILE")]
    pub deps: Vec<String>,

    /// Skip dependency auto-detection and compile the testbench alone
    #[arg(long)]
    pub no_detect: bool,

    /// Launch the waveform viewer after a successful simulation
    #[arg(long)]
    pub wave: bool,

    /// Accept the proposed dependency set without prompting
    #[arg(short, long)]
    pub yes: bool,
}
