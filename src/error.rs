use std::io;

use inquire::error::InquireError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} is not defined")]
    MissingVariable(&'static str),
    #[error("request failed: {0}")]
    Upstream(String),
    #[error("Failed to get choices")]
    EmptySuggestions,
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("prompt error: {0}")]
    Prompt(String),
    #[error("operation cancelled by user")]
    Cancelled,
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<InquireError> for AppError {
    fn from(err: InquireError) -> Self {
        match err {
            InquireError::OperationCanceled | InquireError::OperationInterrupted => {
                AppError::Cancelled
            }
            InquireError::IO(err) => AppError::Io(err),
            other => AppError::Prompt(other.to_string()),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
