//! The `vbench run` handler: confirm a dependency set, then execute the
//! toolchain pipeline on a worker thread while this thread renders the
//! event stream in emission order.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use anyhow::{Context, anyhow, bail};
use serde::Serialize;
use vbench_config::VbenchConfig;
use vbench_resolve::DependencySet;
use vbench_toolchain::{LogEvent, PipelineRun, RunOutcome, RunReport};

use crate::cli::root_commands::RunArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output;

#[derive(Debug, Serialize)]
struct RunResponse {
    report: RunReport,
    events: Vec<LogEvent>,
}

/// Handle `vbench run`.
pub fn handle(args: &RunArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let dir = flags.working_dir();
    if !dir.join(&args.testbench).is_file() {
        // User-input error: nothing has been executed yet.
        bail!(
            "testbench '{}' not found in '{}'",
            args.testbench,
            dir.display()
        );
    }

    let config = VbenchConfig::load_with_dotenv().context("failed to load configuration")?;
    let dependencies = select_dependencies(args, flags, &dir)?;

    let request = PipelineRun {
        testbench: args.testbench.clone(),
        dependencies,
        dir,
        want_wave: args.wave || config.run.wave,
    };
    let tools = config.toolchain();

    let (tx, rx) = mpsc::channel();
    let worker = thread::spawn(move || vbench_toolchain::run(&tools, &request, &tx));

    let report = match flags.format {
        OutputFormat::Text => {
            for event in rx {
                output::print_event(&event);
            }
            join_worker(worker)?
        }
        OutputFormat::Json => {
            let events: Vec<LogEvent> = rx.iter().collect();
            let report = join_worker(worker)?;
            output::print_json(&RunResponse {
                report: report.clone(),
                events,
            })?;
            report
        }
    };

    tracing::debug!(outcome = ?report.outcome, wave = ?report.wave, "pipeline finished");

    match report.outcome {
        RunOutcome::Completed => Ok(()),
        RunOutcome::ToolMissing { ref tool } => bail!("required tool '{tool}' is not available"),
        RunOutcome::CompileFailed => bail!("compilation failed"),
        RunOutcome::SimulateFailed => bail!("simulation failed"),
    }
}

fn join_worker(worker: thread::JoinHandle<RunReport>) -> anyhow::Result<RunReport> {
    worker
        .join()
        .map_err(|_| anyhow!("pipeline worker thread panicked"))
}

/// Decide the dependency set for this run.
///
/// Explicit `--dep` files win outright; `--no-detect` compiles the testbench
/// alone. Otherwise the resolver's proposal must pass the confirmation
/// boundary: an interactive prompt in text mode, `--yes` elsewhere.
fn select_dependencies(
    args: &RunArgs,
    flags: &GlobalFlags,
    dir: &Path,
) -> anyhow::Result<Vec<String>> {
    if !args.deps.is_empty() {
        return Ok(args.deps.clone());
    }
    if args.no_detect {
        return Ok(Vec::new());
    }

    let proposal = vbench_resolve::resolve(&args.testbench, dir)
        .with_context(|| format!("failed to resolve '{}'", args.testbench))?;

    if !args.yes {
        match flags.format {
            OutputFormat::Text => {
                if !confirm(&args.testbench, &proposal)? {
                    bail!("aborted");
                }
            }
            OutputFormat::Json => {
                bail!(
                    "refusing to auto-apply detected dependencies in json mode; \
                     pass --yes, --dep, or --no-detect"
                );
            }
        }
    }

    Ok(proposal.into_iter().collect())
}

fn confirm(testbench: &str, proposal: &DependencySet) -> anyhow::Result<bool> {
    if proposal.is_empty() {
        println!("no dependencies detected for {testbench}; compiling it alone");
    } else {
        println!("detected dependencies for {testbench}:");
        for name in proposal {
            println!("  {name}");
        }
    }
    print!("proceed? [Y/n] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(!matches!(answer.trim(), "n" | "N" | "no"))
}
