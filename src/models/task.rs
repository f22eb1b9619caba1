use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Running,
    Completed,
    NotFound,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkflowSteps {
    pub scan: bool,
    pub recognize: bool,
    pub rename: bool,
    pub metadata: bool,
    #[serde(rename = "move")]
    pub move_files: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkflowConfig {
    pub directory: String,
    pub steps: WorkflowSteps,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TaskRecord {
    pub config: WorkflowConfig,
    pub status: TaskStatus,
    pub progress: u8,
    pub current_file: String,
    pub start_time: DateTime<Utc>,
    pub processed_files: usize,
    pub total_files: usize,
}

// Answer to a status poll: the live record, or the sentinel for unknown ids.
#[derive(Serialize, Debug, Clone)]
#[serde(untagged)]
pub enum TaskSnapshot {
    Found(TaskRecord),
    NotFound {
        status: TaskStatus,
        progress: u8,
        current_file: String,
    },
}

impl TaskSnapshot {
    pub fn not_found() -> Self {
        TaskSnapshot::NotFound {
            status: TaskStatus::NotFound,
            progress: 0,
            current_file: String::new(),
        }
    }

    pub fn status(&self) -> TaskStatus {
        match self {
            TaskSnapshot::Found(record) => record.status,
            TaskSnapshot::NotFound { status, .. } => *status,
        }
    }

    pub fn progress(&self) -> u8 {
        match self {
            TaskSnapshot::Found(record) => record.progress,
            TaskSnapshot::NotFound { progress, .. } => *progress,
        }
    }
}
