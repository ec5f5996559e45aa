use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("value out of range for {field}: {value}")]
    OutOfRange { field: String, value: f64 },

    #[error("invalid uuid: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
