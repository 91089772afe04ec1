use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for the domain, storage, and CLI layers.
#[derive(Error, Debug)]
pub enum HubError {
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, HubError>;

impl From<std::io::Error> for HubError {
    fn from(err: std::io::Error) -> Self {
        HubError::Storage(err.to_string())
    }
}

impl From<csv::Error> for HubError {
    fn from(err: csv::Error) -> Self {
        HubError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for HubError {
    fn from(err: serde_json::Error) -> Self {
        HubError::Config(err.to_string())
    }
}

impl From<dialoguer::Error> for HubError {
    fn from(err: dialoguer::Error) -> Self {
        HubError::InvalidInput(err.to_string())
    }
}
