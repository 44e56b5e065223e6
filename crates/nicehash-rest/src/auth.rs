//! API credentials for private marketplace operations
//!
//! v1 authenticates private calls with the account id and API key sent as
//! query parameters; there is no request signing. Keys are kept out of
//! Debug output.

use crate::error::{RestError, RestResult};

/// Account id + API key pair for private endpoints
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    id: String,
    key: String,
}

impl Credentials {
    /// Create credentials from an explicit id and key pair
    pub fn new(id: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            key: key.into(),
        }
    }

    /// Create credentials from environment variables
    ///
    /// Reads `NICEHASH_API_ID` and `NICEHASH_API_KEY` from the environment.
    pub fn from_env() -> RestResult<Self> {
        let id = std::env::var("NICEHASH_API_ID")
            .map_err(|_| RestError::EnvVarNotSet("NICEHASH_API_ID"))?;
        let key = std::env::var("NICEHASH_API_KEY")
            .map_err(|_| RestError::EnvVarNotSet("NICEHASH_API_KEY"))?;
        Ok(Self::new(id, key))
    }

    /// The account id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The API key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// True when both the id and the key are non-empty
    ///
    /// A blank field counts as absent; private operations refuse to run
    /// without both.
    pub fn is_complete(&self) -> bool {
        !self.id.is_empty() && !self.key.is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("id", &self.id)
            .field("key", &"[REDACTED]")
            .finish()
    }
}
