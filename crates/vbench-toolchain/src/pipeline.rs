//! The compile → simulate → visualize pipeline.
//!
//! Three external invocations in order, short-circuiting on failure:
//!
//! 1. `<compiler> -Wall -o <artifact> <testbench> [deps...]` — non-zero exit
//!    aborts the run with the captured stderr.
//! 2. `<simulator> <artifact>` — stdout/stderr are surfaced even on non-zero
//!    exit, because partial simulation output has diagnostic value.
//! 3. `<viewer> <artifact>.vcd` — only when simulate exited 0, the dump file
//!    exists, and the caller opted in; launched detached and never waited.
//!
//! The compiled artifact is removed on every exit path via a drop guard.
//! The pipeline is stateless and reentrant; callers must not run two
//! pipelines that derive the same artifact name in the same directory
//! concurrently, since both would race on that file. No timeout is imposed
//! on any stage — a hung simulator blocks its thread indefinitely.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use serde::Serialize;

use crate::event::{LogEvent, LogSink};

/// External tool names (or paths) and compiler flags for one pipeline.
#[derive(Debug, Clone)]
pub struct Toolchain {
    pub compiler: String,
    pub simulator: String,
    pub viewer: String,
    pub compile_flags: Vec<String>,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            compiler: "iverilog".to_string(),
            simulator: "vvp".to_string(),
            viewer: "gtkwave".to_string(),
            compile_flags: vec!["-Wall".to_string()],
        }
    }
}

/// One end-to-end execution request.
#[derive(Debug, Clone)]
pub struct PipelineRun {
    /// Testbench file name, relative to `dir`.
    pub testbench: String,
    /// Confirmed dependency file names, relative to `dir`.
    pub dependencies: Vec<String>,
    /// Working directory for every tool invocation.
    pub dir: PathBuf,
    /// Whether to launch the waveform viewer after a successful simulation.
    pub want_wave: bool,
}

impl PipelineRun {
    /// Compiled artifact name: the testbench name minus its `_tb.v` suffix
    /// (minus `.v` for unconventionally named inputs).
    #[must_use]
    pub fn artifact(&self) -> &str {
        self.testbench
            .strip_suffix("_tb.v")
            .or_else(|| self.testbench.strip_suffix(".v"))
            .unwrap_or(&self.testbench)
    }
}

/// Terminal state of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunOutcome {
    /// Compile and simulate both exited 0.
    Completed,
    /// An external binary could not be located or launched.
    ToolMissing { tool: String },
    /// Compiler exited non-zero; later stages never ran.
    CompileFailed,
    /// Simulator exited non-zero; its output was still surfaced.
    SimulateFailed,
}

/// What happened to the visualize stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WaveStatus {
    /// Viewer launched detached; its exit is not tracked.
    Launched,
    /// Simulation succeeded but produced no `.vcd` dump. Not an error.
    Missing,
    /// Gating conditions not met (not requested, or an earlier stage failed).
    Skipped,
}

/// Result of one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub outcome: RunOutcome,
    pub wave: WaveStatus,
}

impl RunReport {
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        matches!(self.outcome, RunOutcome::Completed)
    }
}

/// Removes the compiled artifact when dropped, whatever path got us there.
struct CleanupGuard<'a> {
    path: PathBuf,
    name: String,
    sink: &'a dyn LogSink,
}

impl Drop for CleanupGuard<'_> {
    fn drop(&mut self) {
        if !self.path.exists() {
            return;
        }
        match fs::remove_file(&self.path) {
            Ok(()) => self
                .sink
                .emit(LogEvent::info(format!("removed compiled artifact '{}'", self.name))),
            // Never escalated: a leftover artifact must not fail the run.
            Err(error) => self
                .sink
                .emit(LogEvent::error(format!("failed to remove '{}': {error}", self.name))),
        }
    }
}

/// Execute the pipeline for `request` with `tools`, reporting progress to `sink`.
///
/// Never panics and never returns an error value: every stage failure is
/// converted into log events plus the [`RunOutcome`] in the report.
#[must_use]
pub fn run(tools: &Toolchain, request: &PipelineRun, sink: &dyn LogSink) -> RunReport {
    let artifact = request.artifact().to_string();
    let _cleanup = CleanupGuard {
        path: request.dir.join(&artifact),
        name: artifact.clone(),
        sink,
    };

    // Stage 1: compile.
    let mut compile_args: Vec<&str> = tools.compile_flags.iter().map(String::as_str).collect();
    compile_args.extend(["-o", &artifact, &request.testbench]);
    compile_args.extend(request.dependencies.iter().map(String::as_str));
    echo_command(sink, &tools.compiler, &compile_args);

    let output = match Command::new(&tools.compiler)
        .args(&compile_args)
        .current_dir(&request.dir)
        .output()
    {
        Ok(output) => output,
        Err(error) => return tool_missing(sink, &tools.compiler, &error),
    };

    if !output.status.success() {
        sink.emit(LogEvent::error(format!(
            "compile failed:\n{}",
            String::from_utf8_lossy(&output.stderr)
        )));
        return RunReport {
            outcome: RunOutcome::CompileFailed,
            wave: WaveStatus::Skipped,
        };
    }
    sink.emit(LogEvent::success("compile succeeded"));
    surface_stream(sink, &output.stdout);

    // Stage 2: simulate.
    echo_command(sink, &tools.simulator, &[&artifact]);
    let sim = match Command::new(&tools.simulator)
        .arg(&artifact)
        .current_dir(&request.dir)
        .output()
    {
        Ok(output) => output,
        Err(error) => return tool_missing(sink, &tools.simulator, &error),
    };

    // Simulator output is always shown, exit code notwithstanding.
    sink.emit(LogEvent::header("simulation output"));
    surface_stream(sink, &sim.stdout);
    if !sim.stderr.is_empty() {
        sink.emit(LogEvent::warning(
            String::from_utf8_lossy(&sim.stderr).trim_end().to_string(),
        ));
    }

    let sim_ok = sim.status.success();
    if sim_ok {
        sink.emit(LogEvent::success("simulation finished"));
    } else {
        sink.emit(LogEvent::error(format!(
            "simulation exited with {}",
            sim.status
        )));
    }

    let mut outcome = if sim_ok {
        RunOutcome::Completed
    } else {
        RunOutcome::SimulateFailed
    };

    // Stage 3: visualize, gated on opt-in, simulate success, and dump presence.
    let wave = if request.want_wave && sim_ok {
        match launch_viewer(tools, request, &artifact, sink) {
            Ok(status) => status,
            Err(tool) => {
                outcome = RunOutcome::ToolMissing { tool };
                WaveStatus::Skipped
            }
        }
    } else {
        WaveStatus::Skipped
    };

    RunReport { outcome, wave }
}

/// Launch the waveform viewer fire-and-forget. `Err` carries the tool name
/// when the viewer binary cannot be launched.
fn launch_viewer(
    tools: &Toolchain,
    request: &PipelineRun,
    artifact: &str,
    sink: &dyn LogSink,
) -> Result<WaveStatus, String> {
    let vcd = format!("{artifact}.vcd");
    if !request.dir.join(&vcd).is_file() {
        sink.emit(LogEvent::warning(format!(
            "waveform dump '{vcd}' not found; viewer skipped"
        )));
        return Ok(WaveStatus::Missing);
    }

    echo_command(sink, &tools.viewer, &[&vcd]);
    match Command::new(&tools.viewer)
        .arg(&vcd)
        .current_dir(&request.dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        // Deliberately not waited: only launch success is tracked.
        Ok(child) => {
            sink.emit(LogEvent::success(format!(
                "launched {} (pid {})",
                tools.viewer,
                child.id()
            )));
            Ok(WaveStatus::Launched)
        }
        Err(error) => {
            sink.emit(LogEvent::error(format!(
                "failed to launch '{}': {error}",
                tools.viewer
            )));
            Err(tools.viewer.clone())
        }
    }
}

fn tool_missing(sink: &dyn LogSink, tool: &str, error: &std::io::Error) -> RunReport {
    tracing::debug!(tool = %tool, error = %error, "tool launch failed");
    sink.emit(LogEvent::error(format!("failed to launch '{tool}': {error}")));
    RunReport {
        outcome: RunOutcome::ToolMissing {
            tool: tool.to_string(),
        },
        wave: WaveStatus::Skipped,
    }
}

fn echo_command(sink: &dyn LogSink, program: &str, args: &[&str]) {
    sink.emit(LogEvent::info(format!("running: {program} {}", args.join(" "))));
}

fn surface_stream(sink: &dyn LogSink, bytes: &[u8]) {
    if bytes.is_empty() {
        return;
    }
    sink.emit(LogEvent::plain(
        String::from_utf8_lossy(bytes).trim_end().to_string(),
    ));
}
