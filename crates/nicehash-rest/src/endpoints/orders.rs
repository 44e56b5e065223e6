//! Order management endpoints
//!
//! These endpoints require authentication. The service reports mutation
//! outcomes inside the result object, so a rejected mutation (unknown
//! order id, insufficient balance) is data in the returned [`OrderResult`]
//! rather than an `Err`.

use crate::auth::Credentials;
use crate::endpoints::{api_get, extract, require_result};
use crate::error::RestResult;
use crate::types::{ApiEnvelope, CreateOrderRequest, MarketOrder, OrderResult, OrdersPayload};
use nicehash_types::{AlgorithmError, AlgorithmRef, Location};
use reqwest::Client;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Order management endpoints
pub struct OrderEndpoints<'a> {
    client: &'a Client,
    base_url: &'a str,
    credentials: &'a Credentials,
}

impl<'a> OrderEndpoints<'a> {
    pub fn new(client: &'a Client, base_url: &'a str, credentials: &'a Credentials) -> Self {
        Self {
            client,
            base_url,
            credentials,
        }
    }

    /// Method selector plus the credential pair every private call carries
    fn base_params(&self, method: &'static str) -> Vec<(&'static str, String)> {
        vec![
            ("method", method.to_string()),
            ("id", self.credentials.id().to_string()),
            ("key", self.credentials.key().to_string()),
        ]
    }

    /// Issue an order mutation and hand back the raw result object
    async fn mutate(
        &self,
        operation: &'static str,
        params: &[(&'static str, String)],
    ) -> RestResult<OrderResult> {
        let envelope: ApiEnvelope<OrderResult> =
            api_get(self.client, self.base_url, operation, params).await?;
        require_result(operation, envelope)
    }

    /// List own orders for an algorithm
    ///
    /// # Arguments
    /// * `location` - Order book region (Europe when omitted)
    /// * `algo` - Algorithm ID or name (Scrypt when omitted)
    #[instrument(skip(self))]
    pub async fn my_orders(
        &self,
        location: Option<Location>,
        algo: Option<AlgorithmRef>,
    ) -> RestResult<Vec<MarketOrder>> {
        let algo = resolve_algo(algo)?;
        let params = [
            ("method", "orders.get".to_string()),
            ("my", String::new()),
            ("id", self.credentials.id().to_string()),
            ("key", self.credentials.key().to_string()),
            (
                "location",
                location.unwrap_or(Location::Europe).as_u8().to_string(),
            ),
            ("algo", algo.to_string()),
        ];

        debug!("Fetching own orders for algo {}", algo);

        let envelope: ApiEnvelope<OrdersPayload> =
            api_get(self.client, self.base_url, "orders.get", &params).await?;
        let payload = require_result("orders.get", envelope)?;
        extract("orders.get", payload.orders, payload.error)
    }

    /// Create a new hashpower order
    ///
    /// Only standard orders can be created through the API.
    #[instrument(
        skip(self, order),
        fields(location = ?order.location, algo = ?order.algo, price = %order.price)
    )]
    pub async fn create(&self, order: &CreateOrderRequest) -> RestResult<OrderResult> {
        let algo = order.algo.resolve()?;

        let mut params = self.base_params("orders.create");
        params.push(("location", order.location.as_u8().to_string()));
        params.push(("algo", algo.to_string()));
        params.push(("amount", order.amount.to_string()));
        params.push(("price", order.price.to_string()));
        params.push(("limit", order.limit.to_string()));
        params.push(("pool_host", order.pool_host.clone()));
        params.push(("pool_port", order.pool_port.to_string()));
        params.push(("pool_user", order.pool_user.clone()));
        params.push(("pool_pass", order.pool_pass.clone()));
        if let Some(code) = &order.code {
            params.push(("code", code.clone()));
        }

        debug!("Creating order for {} at {}", order.pool_host, order.price);

        self.mutate("orders.create", &params).await
    }

    /// Add funds to an existing order
    ///
    /// # Arguments
    /// * `order` - Order id
    /// * `amount` - BTC amount to add
    /// * `location` - Order book region (Europe when omitted)
    /// * `algo` - Algorithm ID or name (Scrypt when omitted)
    #[instrument(skip(self))]
    pub async fn refill(
        &self,
        order: u64,
        amount: Decimal,
        location: Option<Location>,
        algo: Option<AlgorithmRef>,
    ) -> RestResult<OrderResult> {
        let algo = resolve_algo(algo)?;

        let mut params = self.base_params("orders.refill");
        params.push((
            "location",
            location.unwrap_or(Location::Europe).as_u8().to_string(),
        ));
        params.push(("algo", algo.to_string()));
        params.push(("order", order.to_string()));
        params.push(("amount", amount.to_string()));

        debug!("Refilling order {} with {}", order, amount);

        self.mutate("orders.refill", &params).await
    }

    /// Remove an existing order
    ///
    /// # Arguments
    /// * `order` - Order id
    /// * `location` - Order book region (USA when omitted)
    /// * `algo` - Algorithm ID or name (Scrypt when omitted)
    #[instrument(skip(self))]
    pub async fn remove(
        &self,
        order: u64,
        location: Option<Location>,
        algo: Option<AlgorithmRef>,
    ) -> RestResult<OrderResult> {
        let algo = resolve_algo(algo)?;

        let mut params = self.base_params("orders.remove");
        params.push((
            "location",
            location.unwrap_or(Location::Usa).as_u8().to_string(),
        ));
        params.push(("algo", algo.to_string()));
        params.push(("order", order.to_string()));

        debug!("Removing order {}", order);

        self.mutate("orders.remove", &params).await
    }

    /// Set a new price for an existing order
    ///
    /// The service only accepts increases here; use
    /// [`decrease_price`](Self::decrease_price) to go down.
    ///
    /// # Arguments
    /// * `order` - Order id
    /// * `price` - New price in BTC/GH/day
    /// * `location` - Order book region (Europe when omitted)
    /// * `algo` - Algorithm ID or name (Scrypt when omitted)
    #[instrument(skip(self))]
    pub async fn set_price(
        &self,
        order: u64,
        price: Decimal,
        location: Option<Location>,
        algo: Option<AlgorithmRef>,
    ) -> RestResult<OrderResult> {
        let algo = resolve_algo(algo)?;

        let mut params = self.base_params("orders.set.price");
        params.push((
            "location",
            location.unwrap_or(Location::Europe).as_u8().to_string(),
        ));
        params.push(("algo", algo.to_string()));
        params.push(("order", order.to_string()));
        params.push(("price", price.to_string()));

        debug!("Setting price for order {} to {}", order, price);

        self.mutate("orders.set.price", &params).await
    }

    /// Decrease the price of an existing order by the service's own step
    ///
    /// The service allows one decrease every 10 minutes.
    ///
    /// # Arguments
    /// * `order` - Order id
    /// * `location` - Order book region (Europe when omitted)
    /// * `algo` - Algorithm ID or name (Scrypt when omitted)
    #[instrument(skip(self))]
    pub async fn decrease_price(
        &self,
        order: u64,
        location: Option<Location>,
        algo: Option<AlgorithmRef>,
    ) -> RestResult<OrderResult> {
        let algo = resolve_algo(algo)?;

        let mut params = self.base_params("orders.set.price.decrease");
        params.push((
            "location",
            location.unwrap_or(Location::Europe).as_u8().to_string(),
        ));
        params.push(("algo", algo.to_string()));
        params.push(("order", order.to_string()));

        debug!("Decreasing price for order {}", order);

        self.mutate("orders.set.price.decrease", &params).await
    }

    /// Set a new speed limit for an existing order
    ///
    /// # Arguments
    /// * `order` - Order id
    /// * `limit` - Speed limit (no limit when omitted)
    /// * `location` - Order book region (Europe when omitted)
    /// * `algo` - Algorithm ID or name (Scrypt when omitted)
    #[instrument(skip(self))]
    pub async fn set_limit(
        &self,
        order: u64,
        limit: Option<Decimal>,
        location: Option<Location>,
        algo: Option<AlgorithmRef>,
    ) -> RestResult<OrderResult> {
        let algo = resolve_algo(algo)?;

        let mut params = self.base_params("orders.set.limit");
        params.push((
            "location",
            location.unwrap_or(Location::Europe).as_u8().to_string(),
        ));
        params.push(("algo", algo.to_string()));
        params.push(("limit", limit.unwrap_or(Decimal::ZERO).to_string()));
        params.push(("order", order.to_string()));

        debug!("Setting limit for order {}", order);

        self.mutate("orders.set.limit", &params).await
    }
}

/// Resolve an optional algorithm reference, falling back to Scrypt's ID
fn resolve_algo(algo: Option<AlgorithmRef>) -> Result<u32, AlgorithmError> {
    match algo {
        Some(algo) => algo.resolve(),
        None => Ok(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_algo_defaults_to_scrypt() {
        assert_eq!(resolve_algo(None).unwrap(), 0);
    }

    #[test]
    fn test_resolve_algo_accepts_names_and_ids() {
        assert_eq!(resolve_algo(Some(AlgorithmRef::from("x11"))).unwrap(), 3);
        assert_eq!(resolve_algo(Some(AlgorithmRef::from(24_u32))).unwrap(), 24);
    }

    #[test]
    fn test_resolve_algo_rejects_unknown_name() {
        assert!(resolve_algo(Some(AlgorithmRef::from("notreal"))).is_err());
    }
}
