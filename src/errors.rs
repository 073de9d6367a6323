use thiserror::Error;

/// Rejections reported when recording an expense from raw form input.
/// A rejected add leaves the collection and durable state unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("all fields are required")]
    MissingField,
    #[error("amount must be a positive number")]
    InvalidAmount,
    #[error("date must be a calendar date in YYYY-MM-DD form")]
    InvalidDate,
}

/// Error type that captures persistence failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
