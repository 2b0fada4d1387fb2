use anyhow::Context;
use serde::Serialize;
use vbench_resolve::DependencySet;

use crate::cli::root_commands::DepsArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output;

#[derive(Debug, Serialize)]
struct Proposal<'a> {
    testbench: &'a str,
    dependencies: &'a DependencySet,
}

/// Handle `vbench deps`: print the proposed closure without running anything.
pub fn handle(args: &DepsArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let dir = flags.working_dir();
    let dependencies = vbench_resolve::resolve(&args.testbench, &dir)
        .with_context(|| format!("failed to resolve '{}'", args.testbench))?;

    match flags.format {
        OutputFormat::Json => output::print_json(&Proposal {
            testbench: &args.testbench,
            dependencies: &dependencies,
        }),
        OutputFormat::Text => {
            if dependencies.is_empty() {
                println!("no dependencies detected for {}", args.testbench);
            } else {
                for name in &dependencies {
                    println!("{name}");
                }
            }
            Ok(())
        }
    }
}
