//! Progress log events and the sink they flow through.
//!
//! Every observable step of a pipeline run is reported as a [`LogEvent`]:
//! the command line about to be executed, captured tool output, stage
//! results, cleanup. Events are delivered to the sink in emission order, and
//! `emit` is infallible — a consumer that went away must never abort a run.

use std::sync::Mutex;
use std::sync::mpsc;

use serde::{Deserialize, Serialize};

/// Classification of a log event for rendering purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
    Header,
    /// Raw tool output, rendered without decoration.
    None,
}

/// One ordered, append-only progress record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    pub text: String,
    pub severity: Severity,
}

impl LogEvent {
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Severity::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Severity::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Severity::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Severity::Error, text)
    }

    pub fn header(text: impl Into<String>) -> Self {
        Self::new(Severity::Header, text)
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(Severity::None, text)
    }
}

/// Destination for pipeline progress.
///
/// Implementations must be cheap (no blocking beyond appending) and safe to
/// call from a worker thread while another thread drains the events.
pub trait LogSink: Send {
    fn emit(&self, event: LogEvent);
}

/// Channel-backed sink: the pipeline runs on a worker thread, the consumer
/// drains the receiver in emission order. Send failures are deliberately
/// ignored — if the receiver is gone there is nobody left to report to.
impl LogSink for mpsc::Sender<LogEvent> {
    fn emit(&self, event: LogEvent) {
        let _ = self.send(event);
    }
}

/// In-memory collecting sink for tests and batch consumers.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<LogEvent>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far, in order.
    #[must_use]
    pub fn events(&self) -> Vec<LogEvent> {
        self.events
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl LogSink for MemorySink {
    fn emit(&self, event: LogEvent) {
        self.events
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(event);
    }
}
