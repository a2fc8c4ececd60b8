//! Step narration for test reports.
//!
//! Every client operation announces a named step and attaches the response
//! metadata it saw. Reporters are a side channel: nothing they do affects
//! control flow or return values.

use serde::Serialize;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// Sink for step narration.
pub trait Reporter: Send + Sync {
    /// A named step has started.
    fn step(&self, name: &str);

    /// Attach a named piece of content to the current step.
    fn attach(&self, name: &str, content: &str);
}

/// Forwards narration to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn step(&self, name: &str) {
        info!(step = name, "step");
    }

    fn attach(&self, name: &str, content: &str) {
        debug!(attachment = name, content, "attach");
    }
}

/// One narrated event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportEntry {
    Step { name: String },
    Attachment { name: String, content: String },
}

/// Keeps every narrated event in order.
///
/// Cloning shares the underlying log, so a clone handed to the client can be
/// inspected afterwards through the original.
#[derive(Debug, Default, Clone)]
pub struct RecordingReporter {
    entries: Arc<Mutex<Vec<ReportEntry>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn entries(&self) -> Vec<ReportEntry> {
        self.lock().clone()
    }

    /// Names of the recorded steps, in order.
    pub fn step_names(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|e| match e {
                ReportEntry::Step { name } => Some(name.clone()),
                ReportEntry::Attachment { .. } => None,
            })
            .collect()
    }

    /// Drop everything recorded so far.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Render the log as a JSON array.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&*self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ReportEntry>> {
        // A poisoned log is still a valid log.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Reporter for RecordingReporter {
    fn step(&self, name: &str) {
        self.lock().push(ReportEntry::Step {
            name: name.to_string(),
        });
    }

    fn attach(&self, name: &str, content: &str) {
        self.lock().push(ReportEntry::Attachment {
            name: name.to_string(),
            content: content.to_string(),
        });
    }
}

/// Fans narration out to several reporters.
#[derive(Default, Clone)]
pub struct TeeReporter {
    sinks: Vec<Arc<dyn Reporter>>,
}

impl TeeReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sink: Arc<dyn Reporter>) -> Self {
        self.sinks.push(sink);
        self
    }
}

impl Reporter for TeeReporter {
    fn step(&self, name: &str) {
        for sink in &self.sinks {
            sink.step(name);
        }
    }

    fn attach(&self, name: &str, content: &str) {
        for sink in &self.sinks {
            sink.attach(name, content);
        }
    }
}
