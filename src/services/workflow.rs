use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use chrono::{DateTime, Utc};
use crate::models::{TaskRecord, TaskSnapshot, TaskStatus, WorkflowConfig};

/// Files reported as "currently processing" while a workflow advances.
pub const PROCESS_FILES: [&str; 5] = [
    "奥本海默.2023.2160p.BluRay.REMUX.mkv",
    "最后生还者.S01E01.1080p.WEB-DL.mkv",
    "Taylor Swift - 1989 (2014) [FLAC].zip",
    "阿凡达：水之道.2022.1080p.BluRay.mkv",
    "权力的游戏.S08E06.1080p.BluRay.mkv",
];

/// Progress added by each status poll.
pub const POLL_STEP: u8 = 5;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Simulated workflow runner.
///
/// Records live for the lifetime of the manager and only move forward when
/// someone asks for their status: every poll adds [`POLL_STEP`] percent and
/// one processed file until the run reaches 100%.
#[derive(Clone)]
pub struct WorkflowManager {
    tasks: Arc<Mutex<HashMap<String, TaskRecord>>>,
    clock: Arc<dyn Clock>,
}

impl WorkflowManager {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            tasks: Arc::new(Mutex::new(HashMap::new())),
            clock,
        }
    }

    pub fn start(&self, config: WorkflowConfig) -> String {
        let start_time = self.clock.now();
        let base_id = format!("task_{}", start_time.timestamp());

        let mut tasks = self.lock();

        // Ids are second-resolution; a second start within the same second gets a suffix
        let mut task_id = base_id.clone();
        let mut suffix = 1;
        while tasks.contains_key(&task_id) {
            task_id = format!("{}_{}", base_id, suffix);
            suffix += 1;
        }

        tracing::info!("Starting workflow {} for directory {}", task_id, config.directory);
        tracing::debug!("Workflow {} steps: {:?}", task_id, config.steps);

        tasks.insert(task_id.clone(), TaskRecord {
            config,
            status: TaskStatus::Running,
            progress: 0,
            current_file: String::new(),
            start_time,
            processed_files: 0,
            total_files: PROCESS_FILES.len(),
        });

        task_id
    }

    pub fn poll(&self, task_id: &str) -> TaskSnapshot {
        let mut tasks = self.lock();

        let Some(task) = tasks.get_mut(task_id) else {
            tracing::debug!("Status requested for unknown task: {}", task_id);
            return TaskSnapshot::not_found();
        };

        if task.progress < 100 {
            task.progress = task.progress.saturating_add(POLL_STEP).min(100);
            task.processed_files = (task.processed_files + 1).min(task.total_files);

            if let Some(file) = PROCESS_FILES.get(task.processed_files) {
                task.current_file = file.to_string();
            }

            if task.progress >= 100 {
                task.status = TaskStatus::Completed;
                tracing::info!("Workflow {} completed", task_id);
            }
        }

        tracing::trace!("Task {} at {}%", task_id, task.progress);
        TaskSnapshot::Found(task.clone())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    // Records are plain data, so a poisoned lock still holds a usable map
    fn lock(&self) -> MutexGuard<'_, HashMap<String, TaskRecord>> {
        self.tasks.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for WorkflowManager {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}
