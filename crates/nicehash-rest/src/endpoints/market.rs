//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use crate::endpoints::{api_get, extract, require_result};
use crate::error::RestResult;
use crate::types::{AlgoStat, ApiEnvelope, MarketOrder, OrdersPayload, RawAlgoStat};
use nicehash_types::{AlgorithmRef, Location};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    client: &'a Client,
    base_url: &'a str,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(client: &'a Client, base_url: &'a str) -> Self {
        Self { client, base_url }
    }

    /// Check that the API root answers
    ///
    /// Issues a bare GET with no method; the service echoes an empty
    /// result object when it is reachable.
    #[instrument(skip(self))]
    pub async fn test_authorization(&self) -> RestResult<bool> {
        debug!("Probing API root");

        let envelope: ApiEnvelope<Value> =
            api_get(self.client, self.base_url, "authorize", &[]).await?;

        Ok(envelope.result.is_some())
    }

    /// Get current price and speed for all algorithms
    ///
    /// Refreshed by the service every 30 seconds. Omitting `location`
    /// returns combined stats for both regions.
    #[instrument(skip(self))]
    pub async fn global_stats_current(
        &self,
        location: Option<Location>,
    ) -> RestResult<Vec<AlgoStat>> {
        let mut params = vec![("method", "stats.global.current".to_string())];
        if let Some(location) = location {
            params.push(("location", location.as_u8().to_string()));
        }

        debug!("Fetching current global stats");
        self.global_stats("stats.global.current", &params).await
    }

    /// Get average price and speed for all algorithms over the past 24 hours
    #[instrument(skip(self))]
    pub async fn global_stats_24h(&self) -> RestResult<Vec<AlgoStat>> {
        let params = [("method", "stats.global.24h".to_string())];

        debug!("Fetching 24h global stats");
        self.global_stats("stats.global.24h", &params).await
    }

    async fn global_stats(
        &self,
        operation: &'static str,
        params: &[(&'static str, String)],
    ) -> RestResult<Vec<AlgoStat>> {
        let envelope: ApiEnvelope<GlobalStatsPayload> =
            api_get(self.client, self.base_url, operation, params).await?;
        let payload = require_result(operation, envelope)?;
        let stats = extract(operation, payload.stats, payload.error)?;

        let mut normalized = Vec::with_capacity(stats.len());
        for stat in stats {
            normalized.push(stat.normalize()?);
        }
        Ok(normalized)
    }

    /// Get all open orders for an algorithm in one region
    ///
    /// # Arguments
    /// * `location` - Order book region
    /// * `algo` - Algorithm ID or name
    #[instrument(skip(self, algo))]
    pub async fn orders_for_algorithm(
        &self,
        location: Location,
        algo: impl Into<AlgorithmRef>,
    ) -> RestResult<Vec<MarketOrder>> {
        let algo = algo.into().resolve()?;
        let params = [
            ("method", "orders.get".to_string()),
            ("location", location.as_u8().to_string()),
            ("algo", algo.to_string()),
        ];

        debug!("Fetching open orders for algo {}", algo);

        let envelope: ApiEnvelope<OrdersPayload> =
            api_get(self.client, self.base_url, "orders.get", &params).await?;
        let payload = require_result("orders.get", envelope)?;
        extract("orders.get", payload.orders, payload.error)
    }

    /// Get multi-algorithm mining information
    #[instrument(skip(self))]
    pub async fn multi_algo_info(&self) -> RestResult<Vec<MultiAlgoInfo>> {
        let params = [("method", "multialgo.info".to_string())];

        debug!("Fetching multi-algo info");

        let envelope: ApiEnvelope<MultiAlgoPayload> =
            api_get(self.client, self.base_url, "multialgo.info", &params).await?;
        let payload = require_result("multialgo.info", envelope)?;
        extract("multialgo.info", payload.multialgo, payload.error)
    }

    /// Get simple multi-algorithm mining information
    ///
    /// Includes the stratum port and current paying rate per algorithm.
    #[instrument(skip(self))]
    pub async fn simple_multi_algo_info(&self) -> RestResult<Vec<SimpleAlgoInfo>> {
        let params = [("method", "simplemultialgo.info".to_string())];

        debug!("Fetching simple multi-algo info");

        let envelope: ApiEnvelope<SimpleMultiAlgoPayload> =
            api_get(self.client, self.base_url, "simplemultialgo.info", &params).await?;
        let payload = require_result("simplemultialgo.info", envelope)?;
        extract("simplemultialgo.info", payload.simplemultialgo, payload.error)
    }

    /// Get the information needed for placing hashpower orders
    ///
    /// Lists per-algorithm price steps, minimal limits and speed units.
    #[instrument(skip(self))]
    pub async fn buy_info(&self) -> RestResult<Vec<BuyAlgoInfo>> {
        let params = [("method", "buy.info".to_string())];

        debug!("Fetching buy info");

        let envelope: ApiEnvelope<BuyInfoPayload> =
            api_get(self.client, self.base_url, "buy.info", &params).await?;
        let payload = require_result("buy.info", envelope)?;
        extract("buy.info", payload.algorithms, payload.error)
    }
}

// Response types specific to market endpoints

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Map;

/// `result` payload of the global stats methods
#[derive(Debug, Clone, Deserialize)]
pub struct GlobalStatsPayload {
    /// Per-algorithm stat entries
    pub stats: Option<Vec<RawAlgoStat>>,
    /// Error message when the service rejected the call
    pub error: Option<String>,
}

/// `result` payload of `multialgo.info`
#[derive(Debug, Clone, Deserialize)]
pub struct MultiAlgoPayload {
    pub multialgo: Option<Vec<MultiAlgoInfo>>,
    pub error: Option<String>,
}

/// Entry of the `multialgo.info` listing
#[derive(Debug, Clone, Deserialize)]
pub struct MultiAlgoInfo {
    pub algo: Option<u32>,
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `result` payload of `simplemultialgo.info`
#[derive(Debug, Clone, Deserialize)]
pub struct SimpleMultiAlgoPayload {
    pub simplemultialgo: Option<Vec<SimpleAlgoInfo>>,
    pub error: Option<String>,
}

/// Entry of the `simplemultialgo.info` listing
#[derive(Debug, Clone, Deserialize)]
pub struct SimpleAlgoInfo {
    pub name: Option<String>,
    pub algo: Option<u32>,
    /// Stratum port for the algorithm
    pub port: Option<u16>,
    /// Current paying rate
    pub paying: Option<Decimal>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `result` payload of `buy.info`
#[derive(Debug, Clone, Deserialize)]
pub struct BuyInfoPayload {
    pub algorithms: Option<Vec<BuyAlgoInfo>>,
    pub error: Option<String>,
}

/// Entry of the `buy.info` listing
#[derive(Debug, Clone, Deserialize)]
pub struct BuyAlgoInfo {
    pub algo: Option<u32>,
    pub name: Option<String>,
    /// Price step when lowering an order's price
    pub down_step: Option<Decimal>,
    /// Minimal speed limit
    pub min_limit: Option<Decimal>,
    /// Human-readable speed unit
    pub speed_text: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_simple_multi_algo_payload_parses() {
        let body = r#"{"simplemultialgo":[{"name":"scrypt","port":3333,"paying":"0.00072","algo":0}]}"#;
        let payload: SimpleMultiAlgoPayload = serde_json::from_str(body).unwrap();
        let entries = payload.simplemultialgo.unwrap();
        assert_eq!(entries[0].name.as_deref(), Some("scrypt"));
        assert_eq!(entries[0].port, Some(3333));
        assert_eq!(entries[0].paying, Some(dec!(0.00072)));
    }

    #[test]
    fn test_buy_info_payload_parses() {
        let body = r#"{"algorithms":[{"algo":24,"name":"Equihash","down_step":"-0.0001","min_limit":"0.4","speed_text":"MSol"}]}"#;
        let payload: BuyInfoPayload = serde_json::from_str(body).unwrap();
        let entries = payload.algorithms.unwrap();
        assert_eq!(entries[0].algo, Some(24));
        assert_eq!(entries[0].down_step, Some(dec!(-0.0001)));
        assert_eq!(entries[0].speed_text.as_deref(), Some("MSol"));
    }
}
