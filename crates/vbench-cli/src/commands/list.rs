use anyhow::Context;
use serde::Serialize;
use vbench_resolve::{list_modules, list_testbenches};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output;

#[derive(Debug, Serialize)]
struct Listing {
    testbenches: Vec<String>,
    modules: Vec<String>,
}

/// Handle `vbench list`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let dir = flags.working_dir();
    let testbenches = list_testbenches(&dir)
        .with_context(|| format!("failed to list '{}'", dir.display()))?;
    let modules = list_modules(&dir)?;

    match flags.format {
        OutputFormat::Json => output::print_json(&Listing {
            testbenches,
            modules,
        }),
        OutputFormat::Text => {
            print_section("testbenches", &testbenches);
            print_section("modules", &modules);
            Ok(())
        }
    }
}

fn print_section(title: &str, names: &[String]) {
    println!("{title}:");
    if names.is_empty() {
        println!("  (none)");
        return;
    }
    for name in names {
        println!("  {name}");
    }
}
