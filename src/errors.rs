// ABOUTME: Error types for the slidemaster library
// ABOUTME: Provides structured error handling for store, editor and simulated tasks

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlideError {
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Simulated task failed: {0}")]
    SimulationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    UnknownError(String),
}

// Implement conversion from anyhow::Error to our SlideError
impl From<anyhow::Error> for SlideError {
    fn from(err: anyhow::Error) -> Self {
        SlideError::UnknownError(err.to_string())
    }
}

impl SlideError {
    /// Whether this error is the rejection of a user action that leaves state untouched
    pub fn is_rejected_action(&self) -> bool {
        matches!(
            self,
            SlideError::InvalidOperation(_) | SlideError::ValidationError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SlideError>;
