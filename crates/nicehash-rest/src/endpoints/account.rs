//! Account endpoints
//!
//! These endpoints require authentication.

use crate::auth::Credentials;
use crate::endpoints::{api_get, extract, require_result};
use crate::error::RestResult;
use crate::types::ApiEnvelope;
use reqwest::Client;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Account endpoints
pub struct AccountEndpoints<'a> {
    client: &'a Client,
    base_url: &'a str,
    credentials: &'a Credentials,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(client: &'a Client, base_url: &'a str, credentials: &'a Credentials) -> Self {
        Self {
            client,
            base_url,
            credentials,
        }
    }

    /// Get the confirmed Bitcoin balance
    #[instrument(skip(self))]
    pub async fn balance(&self) -> RestResult<Decimal> {
        let params = [
            ("method", "balance".to_string()),
            ("id", self.credentials.id().to_string()),
            ("key", self.credentials.key().to_string()),
        ];

        debug!("Fetching confirmed balance");

        let envelope: ApiEnvelope<BalancePayload> =
            api_get(self.client, self.base_url, "balance", &params).await?;
        let payload = require_result("balance", envelope)?;
        extract("balance", payload.balance_confirmed, payload.error)
    }
}

// Response types specific to account endpoints

use serde::Deserialize;

/// `result` payload of `balance`
#[derive(Debug, Clone, Deserialize)]
pub struct BalancePayload {
    /// Confirmed balance in BTC
    pub balance_confirmed: Option<Decimal>,
    /// Pending balance in BTC
    pub balance_pending: Option<Decimal>,
    /// Error message when the service rejected the call
    pub error: Option<String>,
}
