//! Error types for the PS agent crate

use thiserror::Error;

/// Main error type for the PS agent crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("numerical error: {context}")]
    NumericalError { context: String },

    #[error("action {action} is out of range (environment has {num_actions} actions)")]
    InvalidAction { action: usize, num_actions: usize },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn numerical(context: impl Into<String>) -> Self {
        Error::NumericalError {
            context: context.into(),
        }
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
