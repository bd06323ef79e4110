use thiserror::Error;

/// evalcost error types
#[derive(Error, Debug)]
pub enum EvalcostError {
    /// Failed to parse the results JSON document
    #[error("parse error: {0}")]
    Parse(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Scoring configuration could not be decoded
    #[error("score error: {0}")]
    Score(String),
}

/// Result type alias for evalcost
pub type Result<T> = std::result::Result<T, EvalcostError>;
