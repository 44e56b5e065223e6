//! Common request and response types
//!
//! Response objects are deserialized tolerantly: fields the service may
//! omit are `Option`, and anything beyond the known shape lands in a
//! flattened `extra` map.

use nicehash_types::{Algorithm, AlgorithmError, AlgorithmRef, Location};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Map, Value};

// ============================================================================
// API Response Envelope
// ============================================================================

/// Envelope every v1 response arrives in
///
/// Application-level failures are reported inside `result` as an object
/// carrying an `error` field; the envelope itself stays well-formed.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Result payload (present even for application-level failures)
    pub result: Option<T>,
    /// Echo of the requested method
    pub method: Option<String>,
}

// ============================================================================
// Market Data Types
// ============================================================================

/// Global stat entry as it appears on the wire, with a numeric algorithm ID
#[derive(Debug, Clone, Deserialize)]
pub struct RawAlgoStat {
    /// Numeric algorithm ID
    pub algo: u32,
    /// Price in BTC/GH/day (BTC/TH/day for some algorithms)
    pub price: Option<Decimal>,
    /// Accepted speed
    pub speed: Option<Decimal>,
    /// Any additional fields the service includes
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawAlgoStat {
    /// Rewrite the numeric algorithm ID into its canonical registry name
    pub fn normalize(self) -> Result<AlgoStat, AlgorithmError> {
        let algo = Algorithm::from_id(self.algo)?.name().to_string();
        Ok(AlgoStat {
            algo,
            price: self.price,
            speed: self.speed,
            extra: self.extra,
        })
    }
}

/// Global stat entry after ID-to-name rewriting
#[derive(Debug, Clone, PartialEq)]
pub struct AlgoStat {
    /// Canonical algorithm name, e.g. "Equihash"
    pub algo: String,
    /// Price in BTC/GH/day (BTC/TH/day for some algorithms)
    pub price: Option<Decimal>,
    /// Accepted speed
    pub speed: Option<Decimal>,
    /// Any additional fields the service includes
    pub extra: Map<String, Value>,
}

/// Open hashpower order in a public or own order book listing
#[derive(Debug, Clone, Deserialize)]
pub struct MarketOrder {
    /// Order id
    pub id: u64,
    /// 0 = standard, 1 = fixed
    #[serde(rename = "type")]
    pub order_type: Option<u8>,
    /// Price in BTC/GH/day
    pub price: Option<Decimal>,
    /// Speed limit, 0 means none
    pub limit_speed: Option<Decimal>,
    /// Whether the order is live
    pub alive: Option<bool>,
    /// Number of workers currently mining for the order
    pub workers: Option<u64>,
    /// Speed the order is being delivered at
    pub accepted_speed: Option<Decimal>,
    /// Any additional fields the service includes
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `result` payload of the order book listings
#[derive(Debug, Clone, Deserialize)]
pub struct OrdersPayload {
    /// Open orders
    pub orders: Option<Vec<MarketOrder>>,
    /// Error message when the service rejected the call
    pub error: Option<String>,
}

// ============================================================================
// Order Management Types
// ============================================================================

/// Raw result of an order mutation
///
/// The service reports outcome through `success` or `error`; both are kept
/// as data so callers can branch the way they would against the service
/// directly.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderResult {
    /// Success message, e.g. "Order #123456 created."
    pub success: Option<String>,
    /// Rejection message, e.g. "Insufficient balance."
    pub error: Option<String>,
    /// Order id when the service includes one
    pub id: Option<u64>,
    /// Any additional fields the service includes
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OrderResult {
    /// True when the service reported success
    pub fn is_success(&self) -> bool {
        self.success.is_some() && self.error.is_none()
    }
}

/// Parameters for creating a hashpower order
///
/// Required inputs are the pool connection details and a price; everything
/// else starts at the marketplace defaults: USA region, Scrypt, 0.005 BTC
/// amount, 0.01 speed limit, pool password "x".
#[derive(Debug, Clone)]
pub struct CreateOrderRequest {
    /// Pool hostname or IP
    pub pool_host: String,
    /// Pool port
    pub pool_port: u16,
    /// Pool username (often wallet.worker)
    pub pool_user: String,
    /// Pool password
    pub pool_pass: String,
    /// Order book region
    pub location: Location,
    /// Algorithm to buy
    pub algo: AlgorithmRef,
    /// BTC amount to fund the order with
    pub amount: Decimal,
    /// Price in BTC/GH/day
    pub price: Decimal,
    /// Speed limit, 0 means none
    pub limit: Decimal,
    /// Two-factor authentication code, omitted from the request when absent
    pub code: Option<String>,
}

impl CreateOrderRequest {
    /// New order request with the marketplace defaults
    pub fn new(
        pool_host: impl Into<String>,
        pool_port: u16,
        pool_user: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            pool_host: pool_host.into(),
            pool_port,
            pool_user: pool_user.into(),
            pool_pass: "x".to_string(),
            location: Location::Usa,
            algo: AlgorithmRef::from(Algorithm::Scrypt),
            amount: Decimal::new(5, 3),
            price,
            limit: Decimal::new(1, 2),
            code: None,
        }
    }

    /// Set the order book region
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// Set the algorithm
    pub fn with_algo(mut self, algo: impl Into<AlgorithmRef>) -> Self {
        self.algo = algo.into();
        self
    }

    /// Set the BTC amount funding the order
    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    /// Set the speed limit
    pub fn with_limit(mut self, limit: Decimal) -> Self {
        self.limit = limit;
        self
    }

    /// Set the pool password
    pub fn with_pool_pass(mut self, pass: impl Into<String>) -> Self {
        self.pool_pass = pass.into();
        self
    }

    /// Attach a two-factor authentication code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_envelope_deserializes() {
        let body = r#"{"result":{"orders":[{"id":1879,"type":0,"price":"0.0505"}]},"method":"orders.get"}"#;
        let envelope: ApiEnvelope<OrdersPayload> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.method.as_deref(), Some("orders.get"));

        let orders = envelope.result.unwrap().orders.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, 1879);
    }

    #[test]
    fn test_envelope_with_error_result() {
        let body = r#"{"result":{"error":"Invalid method"},"method":null}"#;
        let envelope: ApiEnvelope<OrdersPayload> = serde_json::from_str(body).unwrap();
        let payload = envelope.result.unwrap();
        assert!(payload.orders.is_none());
        assert_eq!(payload.error.as_deref(), Some("Invalid method"));
    }

    #[test]
    fn test_stat_normalization_rewrites_ids() {
        let body = r#"[{"algo":0,"price":"0.09"},{"algo":8,"price":"0.011"},{"algo":24,"price":"0.17"}]"#;
        let raw: Vec<RawAlgoStat> = serde_json::from_str(body).unwrap();
        let names: Vec<String> = raw
            .into_iter()
            .map(|s| s.normalize().unwrap().algo)
            .collect();
        assert_eq!(names, vec!["Scrypt", "NeoScrypt", "Equihash"]);
    }

    #[test]
    fn test_stat_normalization_rejects_unknown_id() {
        let raw = RawAlgoStat {
            algo: 99,
            price: None,
            speed: None,
            extra: Map::new(),
        };
        assert!(raw.normalize().is_err());
    }

    #[test]
    fn test_stat_keeps_unknown_fields() {
        let body = r#"{"algo":24,"price":"0.17","speed":"12.5","profitability":"1.02"}"#;
        let raw: RawAlgoStat = serde_json::from_str(body).unwrap();
        let stat = raw.normalize().unwrap();
        assert_eq!(stat.algo, "Equihash");
        assert_eq!(stat.speed, Some(dec!(12.5)));
        assert!(stat.extra.contains_key("profitability"));
    }

    #[test]
    fn test_market_order_deserializes() {
        let body = r#"{"id":1879,"type":0,"price":"0.0505","limit_speed":"1.0","alive":true,"workers":25,"accepted_speed":"0.638"}"#;
        let order: MarketOrder = serde_json::from_str(body).unwrap();
        assert_eq!(order.id, 1879);
        assert_eq!(order.order_type, Some(0));
        assert_eq!(order.alive, Some(true));
        assert_eq!(order.price, Some(dec!(0.0505)));
    }

    #[test]
    fn test_create_request_defaults() {
        let request = CreateOrderRequest::new("mine.pool.com", 3333, "worker1", dec!(1.111));

        assert_eq!(request.location, Location::Usa);
        assert_eq!(request.algo.resolve().unwrap(), 0);
        assert_eq!(request.amount, dec!(0.005));
        assert_eq!(request.limit, dec!(0.01));
        assert_eq!(request.pool_pass, "x");
        assert!(request.code.is_none());
    }

    #[test]
    fn test_create_request_builder() {
        let request = CreateOrderRequest::new("mine.pool.com", 3333, "worker1", dec!(1.111))
            .with_location(Location::Europe)
            .with_algo("equihash")
            .with_amount(dec!(0.01))
            .with_limit(dec!(2.5))
            .with_code("123456");

        assert_eq!(request.location, Location::Europe);
        assert_eq!(request.algo.resolve().unwrap(), 24);
        assert_eq!(request.amount, dec!(0.01));
        assert_eq!(request.limit, dec!(2.5));
        assert_eq!(request.code.as_deref(), Some("123456"));
    }

    #[test]
    fn test_order_result_outcomes() {
        let ok: OrderResult =
            serde_json::from_str(r#"{"success":"Order #123 created.","id":123}"#).unwrap();
        assert!(ok.is_success());
        assert_eq!(ok.id, Some(123));

        let rejected: OrderResult =
            serde_json::from_str(r#"{"error":"Insufficient balance."}"#).unwrap();
        assert!(!rejected.is_success());
        assert_eq!(rejected.error.as_deref(), Some("Insufficient balance."));
    }
}
