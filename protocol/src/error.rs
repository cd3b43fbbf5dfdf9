use launchkit_ranking::RankError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    #[error("Method already registered: {0}")]
    DuplicateMethod(String),

    #[error("Missing argument {index} for method '{method}'")]
    MissingArgument { method: String, index: usize },

    #[error("Argument {index} must be {expected}")]
    InvalidArgument { index: usize, expected: &'static str },

    #[error("Ranking error: {0}")]
    Rank(#[from] RankError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Handler error: {0}")]
    Handler(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ProtocolError>;
