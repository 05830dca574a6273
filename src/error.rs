use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid axis maximum: {max} (must be finite and > 0)")]
    InvalidMaximum { max: f64 },

    #[error("malformed dataset: {0}")]
    MalformedDataset(String),

    #[error("cannot resolve an axis maximum from an empty series")]
    EmptyDomain,

    #[error("serialization error: {0}")]
    Serialization(String),
}
