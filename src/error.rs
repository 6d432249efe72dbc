use std::result;

use thiserror::Error;

/// Error types for CiNii client operations
#[derive(Error, Debug)]
pub enum CiNiiError {
    /// No appid was supplied and none was configured
    #[error("CiNii appid is not set: pass one explicitly or set the {var} environment variable")]
    MissingAppId { var: String },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The endpoint answered with a non-success HTTP status
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// XML parsing failed
    #[error("XML parsing failed: {0}")]
    XmlError(String),

    /// Record identifier could not be turned into a request URL
    #[error("Invalid record identifier: {id:?}")]
    InvalidIdentifier { id: String },

    /// Invalid query structure or parameters
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

pub type Result<T> = result::Result<T, CiNiiError>;

/// Coarse classification of a [`CiNiiError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// API key required but not available
    Configuration,
    /// The remote endpoint could not be reached or refused the request
    Network,
    /// The response body did not decode into the expected XML shape
    Parse,
    /// Caller input was rejected before any request was made
    InvalidInput,
}

impl CiNiiError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CiNiiError::MissingAppId { .. } => ErrorKind::Configuration,
            CiNiiError::RequestError(_) | CiNiiError::ApiError { .. } => ErrorKind::Network,
            CiNiiError::XmlError(_) => ErrorKind::Parse,
            CiNiiError::InvalidIdentifier { .. } | CiNiiError::InvalidQuery(_) => {
                ErrorKind::InvalidInput
            }
        }
    }

    pub(crate) fn xml(context: &str, err: impl std::fmt::Display) -> Self {
        CiNiiError::XmlError(format!("{}: {}", context, err))
    }
}
