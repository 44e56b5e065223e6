//! Public provider (miner) statistics endpoints
//!
//! These endpoints don't require authentication; providers are addressed
//! by their payout address. Results are returned as the service reports
//! them, so an unknown address shows up as an `error` field in the data
//! rather than as a failed call.

use crate::endpoints::{api_get, require_result};
use crate::error::RestResult;
use crate::types::ApiEnvelope;
use nicehash_types::AlgorithmRef;
use reqwest::Client;
use tracing::{debug, instrument};

/// Public provider statistics endpoints
pub struct ProviderEndpoints<'a> {
    client: &'a Client,
    base_url: &'a str,
}

impl<'a> ProviderEndpoints<'a> {
    pub fn new(client: &'a Client, base_url: &'a str) -> Self {
        Self { client, base_url }
    }

    /// Get current stats for a provider across all algorithms
    ///
    /// Refreshed by the service every 30 seconds; also carries the past
    /// payments.
    ///
    /// # Arguments
    /// * `addr` - Provider's payout address
    #[instrument(skip(self))]
    pub async fn stats(&self, addr: &str) -> RestResult<ProviderStats> {
        let params = [
            ("method", "stats.provider".to_string()),
            ("addr", addr.to_string()),
        ];

        debug!("Fetching provider stats for {}", addr);

        let envelope: ApiEnvelope<ProviderStats> =
            api_get(self.client, self.base_url, "stats.provider", &params).await?;
        require_result("stats.provider", envelope)
    }

    /// Get detailed stats for a provider, including history
    ///
    /// # Arguments
    /// * `addr` - Provider's payout address
    /// * `from` - Return history from this UNIX timestamp (complete history when omitted)
    #[instrument(skip(self))]
    pub async fn stats_ex(&self, addr: &str, from: Option<u64>) -> RestResult<ProviderStatsEx> {
        let mut params = vec![
            ("method", "stats.provider.ex".to_string()),
            ("addr", addr.to_string()),
        ];
        if let Some(from) = from {
            params.push(("from", from.to_string()));
        }

        debug!("Fetching extended provider stats for {}", addr);

        let envelope: ApiEnvelope<ProviderStatsEx> =
            api_get(self.client, self.base_url, "stats.provider.ex", &params).await?;
        require_result("stats.provider.ex", envelope)
    }

    /// Get payments for a provider
    ///
    /// # Arguments
    /// * `addr` - Provider's payout address
    /// * `from` - Return payments from this UNIX timestamp (complete history when omitted)
    #[instrument(skip(self))]
    pub async fn payments(&self, addr: &str, from: Option<u64>) -> RestResult<ProviderPayments> {
        let mut params = vec![
            ("method", "stats.provider.payments".to_string()),
            ("addr", addr.to_string()),
        ];
        if let Some(from) = from {
            params.push(("from", from.to_string()));
        }

        debug!("Fetching provider payments for {}", addr);

        let envelope: ApiEnvelope<ProviderPayments> =
            api_get(self.client, self.base_url, "stats.provider.payments", &params).await?;
        require_result("stats.provider.payments", envelope)
    }

    /// Get stats for a provider's workers (rigs) on one algorithm
    ///
    /// # Arguments
    /// * `addr` - Provider's payout address
    /// * `algo` - Algorithm ID or name
    #[instrument(skip(self, algo))]
    pub async fn workers(
        &self,
        addr: &str,
        algo: impl Into<AlgorithmRef>,
    ) -> RestResult<WorkerStats> {
        let algo = algo.into().resolve()?;
        let params = [
            ("method", "stats.provider.workers".to_string()),
            ("addr", addr.to_string()),
            ("algo", algo.to_string()),
        ];

        debug!("Fetching worker stats for {} on algo {}", addr, algo);

        let envelope: ApiEnvelope<WorkerStats> =
            api_get(self.client, self.base_url, "stats.provider.workers", &params).await?;
        require_result("stats.provider.workers", envelope)
    }
}

// Response types specific to provider endpoints

use serde::Deserialize;
use serde_json::{Map, Value};

/// Raw result of `stats.provider`
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderStats {
    /// Echo of the queried payout address
    pub addr: Option<String>,
    /// Current per-algorithm stats
    pub current: Option<Vec<Value>>,
    /// Recent payments
    pub payments: Option<Vec<Value>>,
    /// Application-level rejection, e.g. an invalid address
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Raw result of `stats.provider.ex`
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderStatsEx {
    pub addr: Option<String>,
    /// Current per-algorithm stats
    pub current: Option<Vec<Value>>,
    /// Historical stats since the `from` timestamp
    pub past: Option<Vec<Value>>,
    pub payments: Option<Vec<Value>>,
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Raw result of `stats.provider.payments`
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderPayments {
    pub addr: Option<String>,
    pub payments: Option<Vec<Value>>,
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Raw result of `stats.provider.workers`
#[derive(Debug, Clone, Deserialize)]
pub struct WorkerStats {
    pub addr: Option<String>,
    /// Worker rows in the service's array-of-arrays layout
    pub workers: Option<Vec<Value>>,
    /// Numeric ID of the queried algorithm
    pub algo: Option<u32>,
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
