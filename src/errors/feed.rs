use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Failed to encode feed event: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Feed connection closed: {0}")]
    Send(String),
}

pub type FeedResult<T> = Result<T, FeedError>;
