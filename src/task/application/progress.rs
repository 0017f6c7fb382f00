//! Progress reporting for long-running tasks.

use crate::core::domain::model::task::TaskOutcome;
use std::fmt;

/// Pipeline stage a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ImageImport,
    VmCreation,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::ImageImport => f.write_str("Image copy"),
            Stage::VmCreation => f.write_str("VM create"),
        }
    }
}

/// Receives progress of a task as it is polled.
///
/// `advance` is only ever called with the increase over the last reported
/// percentage, so the deltas of one task sum to at most 100.
pub trait ProgressReporter: Send {
    /// A task for `stage` was submitted and is about to be polled.
    fn begin(&mut self, _stage: Stage) {}

    /// Completion grew by `delta` percentage points.
    fn advance(&mut self, delta: u32);

    /// The task reached 100%.
    fn finish(&mut self, _outcome: &TaskOutcome) {}
}

/// Reporter that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn advance(&mut self, _delta: u32) {}
}

#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingReporter {
    pub stages: Vec<Stage>,
    pub deltas: Vec<u32>,
    pub finished: Vec<bool>,
}

#[cfg(test)]
impl ProgressReporter for RecordingReporter {
    fn begin(&mut self, stage: Stage) {
        self.stages.push(stage);
    }

    fn advance(&mut self, delta: u32) {
        self.deltas.push(delta);
    }

    fn finish(&mut self, outcome: &TaskOutcome) {
        self.finished.push(outcome.is_success());
    }
}
