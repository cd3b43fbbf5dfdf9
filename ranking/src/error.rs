use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RankError {
    #[error("Invalid insert position: {position} (list length {len})")]
    InvalidPosition { position: usize, len: usize },

    #[error("Cannot rank against an empty query")]
    EmptyQuery,

    #[error("Unknown sort field: {0}")]
    UnknownSortField(String),

    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

pub type Result<T> = std::result::Result<T, RankError>;
