//! # vbench-toolchain
//!
//! Fail-fast sequential pipeline over the external Verilog tools:
//! compile (`iverilog`) → simulate (`vvp`) → optionally visualize
//! (`gtkwave`), with the compiled artifact removed on every exit path.
//!
//! The pipeline is synchronous and blocking; callers that need a responsive
//! surface run it on a worker thread and consume progress through a
//! [`LogSink`]. No stage failure escapes as a panic or error value — every
//! failure is converted into log events plus a [`RunOutcome`].

mod event;
mod pipeline;

pub use event::{LogEvent, LogSink, MemorySink, Severity};
pub use pipeline::{PipelineRun, RunOutcome, RunReport, Toolchain, WaveStatus, run};
