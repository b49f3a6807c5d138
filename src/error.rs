#[derive(Debug, thiserror::Error)]
pub enum CardwatchError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Listing source error: {0}")]
    Source(String),

    #[error("Sink error: {0}")]
    Sink(String),
}

pub type Result<T> = std::result::Result<T, CardwatchError>;
