//! Error types for REST API operations
//!
//! Application-level rejections are not represented here. A well-formed
//! response whose result object reports failure comes back as data on the
//! operations that return raw result objects, so callers can branch on the
//! `error`/`success` fields the service sets.

use nicehash_types::AlgorithmError;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Algorithm registry lookup failed
    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),

    /// Missing or incomplete credentials for a private operation
    ///
    /// Raised before any request is made: private calls need both the
    /// account id and the API key.
    #[error("not authenticated: account id and api key are both required")]
    NotAuthenticated,

    /// The HTTP round trip or response handling failed
    #[error("{operation} request failed: {source}")]
    RequestFailed {
        /// Remote method name, or `authorize` for the bare probe
        operation: &'static str,
        /// What went wrong underneath
        #[source]
        source: RequestFailure,
    },

    /// Environment variable not set
    #[error("environment variable not set: {0}")]
    EnvVarNotSet(&'static str),
}

/// Causes behind [`RestError::RequestFailed`]
#[derive(Debug, thiserror::Error)]
pub enum RequestFailure {
    /// Network failure, timeout, non-success HTTP status, or a body that
    /// did not decode as the expected JSON
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Well-formed envelope that lacks the field the operation extracts;
    /// carries the service's error message when one was present
    #[error("unexpected response body: {0}")]
    UnexpectedBody(String),
}

impl RestError {
    /// Wrap a failure with the operation that produced it
    pub(crate) fn request(operation: &'static str, source: impl Into<RequestFailure>) -> Self {
        Self::RequestFailed {
            operation,
            source: source.into(),
        }
    }

    /// The operation name for failed requests, when applicable
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Self::RequestFailed { operation, .. } => Some(operation),
            _ => None,
        }
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
