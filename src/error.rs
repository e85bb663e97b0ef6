use thiserror::Error;

/// Precondition failures raised by the transpose step and the chart generators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Dataset has no entities")]
    EmptyDataset,

    #[error("Dataset has no time buckets")]
    NoBuckets,

    #[error("Entity {entity:?} has {found} counts, expected {expected}")]
    BucketMismatch {
        entity: String,
        expected: usize,
        found: usize,
    },

    #[error("Duplicate time bucket: {0:?}")]
    DuplicateBucket(String),

    #[error("Duplicate entity: {0:?}")]
    DuplicateEntity(String),

    #[error("Unknown entity in chart order: {0:?}")]
    UnknownEntity(String),

    #[error("Chart order is empty")]
    EmptyOrder,
}

#[derive(Error, Debug)]
pub enum TrafficVizError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, TrafficVizError>;

impl TrafficVizError {
    /// The validation failure behind this error, if any
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            TrafficVizError::Validation(e) => Some(e),
            _ => None,
        }
    }
}
