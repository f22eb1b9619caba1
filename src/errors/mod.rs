// Error types shared by the HTTP handlers and the live metrics feed.
use axum::extract::rejection::FormRejection;
use thiserror::Error;

pub mod response;
pub mod feed;

pub use feed::{FeedError, FeedResult};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Template error: {0}")]
    Template(#[from] std::io::Error),

    // Raised by `WithRejection<Form<_>, AppError>` when a form body cannot be decoded.
    #[error("Form error: {0}")]
    Form(#[from] FormRejection),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    // A handler panicked; built by `response::panic_response`.
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;
