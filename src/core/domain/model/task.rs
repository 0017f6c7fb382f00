//! Models for asynchronous server-side tasks.

use serde::Deserialize;
use std::fmt;

/// Acknowledgement returned by mutating endpoints that spawn a task.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaskReference {
    pub task_uuid: String,
}

/// `progress_status` of a task.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum TaskStatus {
    Queued,
    Running,
    Succeeded,
    Failed,
    Aborted,
    Suspended,
    #[serde(other)]
    Other,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskStatus::Queued => "Queued",
            TaskStatus::Running => "Running",
            TaskStatus::Succeeded => "Succeeded",
            TaskStatus::Failed => "Failed",
            TaskStatus::Aborted => "Aborted",
            TaskStatus::Suspended => "Suspended",
            TaskStatus::Other => "Other",
        };
        f.write_str(s)
    }
}

/// An entity created or touched by a task.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EntityReference {
    pub entity_id: String,
    #[serde(default)]
    pub entity_type: Option<String>,
}

/// Progress record from `GET /tasks/{id}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaskProgress {
    pub progress_status: TaskStatus,
    pub percentage_complete: u32,
    #[serde(default)]
    pub entity_list: Vec<EntityReference>,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub operation_type: Option<String>,
}

impl TaskProgress {
    /// Completion percentage, clamped to 100.
    pub fn percentage(&self) -> u32 {
        self.percentage_complete.min(100)
    }

    /// First entity the task reports, if any.
    pub fn first_entity_id(&self) -> Option<&str> {
        self.entity_list.first().map(|e| e.entity_id.as_str())
    }
}

/// Terminal state of a task once it reaches 100%.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskOutcome {
    Succeeded(TaskProgress),
    Failed(TaskProgress),
}

impl TaskOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TaskOutcome::Succeeded(_))
    }

    pub fn progress(&self) -> &TaskProgress {
        match self {
            TaskOutcome::Succeeded(p) | TaskOutcome::Failed(p) => p,
        }
    }
}
