mod workflow;
mod catalog;
mod metrics;

pub use workflow::WorkflowManager;
pub use catalog::Catalog;
pub use metrics::{MetricsSource, RandomMetrics};
