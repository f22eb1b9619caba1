mod forms;
mod task;
mod catalog;
mod metrics;

pub use forms::{DownloadForm, ScanForm, ProcessForm};
pub use task::{TaskStatus, WorkflowSteps, WorkflowConfig, TaskRecord, TaskSnapshot};
pub use catalog::{
    DownloaderStatus, PtSite, Recommendation, QueueEntry, ScannedFile, DashboardStats,
};
pub use metrics::{LiveMetrics, FeedEvent};
