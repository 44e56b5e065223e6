//! Main REST client implementation

use crate::auth::Credentials;
use crate::endpoints::{AccountEndpoints, MarketEndpoints, OrderEndpoints, ProviderEndpoints};
use crate::error::{RestError, RestResult};
use crate::types::{AlgoStat, CreateOrderRequest, MarketOrder, OrderResult};
use nicehash_types::{AlgorithmRef, Location};
use reqwest::Client;
use rust_decimal::Decimal;
use std::time::Duration;
use tracing::info;

/// Default API root shared by every operation
const DEFAULT_BASE_URL: &str = "https://api.nicehash.com/api";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// NiceHash v1 REST API client
///
/// Provides access to both public and private endpoints.
///
/// # Example
///
/// ```no_run
/// use nicehash_rest::{Credentials, NiceHashClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = NiceHashClient::new();
///     let stats = client.global_stats_current(None).await?;
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = NiceHashClient::with_credentials(creds);
///     let balance = auth_client.balance().await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct NiceHashClient {
    http_client: Client,
    base_url: String,
    credentials: Option<Credentials>,
}

impl NiceHashClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    ///
    /// All endpoints (public and private) will be available.
    pub fn with_credentials(credentials: Credentials) -> Self {
        let mut config = ClientConfig::default();
        config.credentials = Some(credentials);
        Self::with_config(config)
    }

    /// Create a new client from a raw api key and account id pair
    pub fn with_key_id(key: impl Into<String>, id: impl Into<String>) -> Self {
        Self::with_credentials(Credentials::new(id, key))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_deref().unwrap_or("nicehash-rest/0.1.0"))
            .build()
            .expect("Failed to create HTTP client");

        info!("Created NiceHash REST client");

        Self {
            http_client,
            base_url: config.base_url,
            credentials: config.credentials,
        }
    }

    /// Check if the client holds a complete credential pair
    ///
    /// A pair with a blank key or id does not count; private endpoints
    /// stay unavailable in that state.
    pub fn has_credentials(&self) -> bool {
        self.credentials.as_ref().map_or(false, |c| c.is_complete())
    }

    fn complete_credentials(&self) -> RestResult<&Credentials> {
        self.credentials
            .as_ref()
            .filter(|c| c.is_complete())
            .ok_or(RestError::NotAuthenticated)
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(&self.http_client, &self.base_url)
    }

    /// Check that the API root answers
    pub async fn test_authorization(&self) -> RestResult<bool> {
        self.market().test_authorization().await
    }

    /// Get current price and speed for all algorithms
    ///
    /// # Arguments
    /// * `location` - Region to report on; both regions when omitted
    pub async fn global_stats_current(
        &self,
        location: Option<Location>,
    ) -> RestResult<Vec<AlgoStat>> {
        self.market().global_stats_current(location).await
    }

    /// Get average price and speed for all algorithms over the past 24 hours
    pub async fn global_stats_24h(&self) -> RestResult<Vec<AlgoStat>> {
        self.market().global_stats_24h().await
    }

    /// Get all open orders for an algorithm in one region
    pub async fn orders_for_algorithm(
        &self,
        location: Location,
        algo: impl Into<AlgorithmRef>,
    ) -> RestResult<Vec<MarketOrder>> {
        self.market().orders_for_algorithm(location, algo).await
    }

    /// Get multi-algorithm mining information
    pub async fn multi_algo_info(
        &self,
    ) -> RestResult<Vec<crate::endpoints::market::MultiAlgoInfo>> {
        self.market().multi_algo_info().await
    }

    /// Get simple multi-algorithm mining information
    pub async fn simple_multi_algo_info(
        &self,
    ) -> RestResult<Vec<crate::endpoints::market::SimpleAlgoInfo>> {
        self.market().simple_multi_algo_info().await
    }

    /// Get the information needed for placing hashpower orders
    pub async fn buy_info(&self) -> RestResult<Vec<crate::endpoints::market::BuyAlgoInfo>> {
        self.market().buy_info().await
    }

    // ========================================================================
    // Public Provider Endpoints
    // ========================================================================

    /// Get provider endpoints
    pub fn provider(&self) -> ProviderEndpoints<'_> {
        ProviderEndpoints::new(&self.http_client, &self.base_url)
    }

    /// Get current stats for a provider across all algorithms
    pub async fn provider_stats(
        &self,
        addr: &str,
    ) -> RestResult<crate::endpoints::provider::ProviderStats> {
        self.provider().stats(addr).await
    }

    /// Get detailed stats for a provider, including history
    pub async fn provider_stats_ex(
        &self,
        addr: &str,
        from: Option<u64>,
    ) -> RestResult<crate::endpoints::provider::ProviderStatsEx> {
        self.provider().stats_ex(addr, from).await
    }

    /// Get payments for a provider
    pub async fn provider_payments(
        &self,
        addr: &str,
        from: Option<u64>,
    ) -> RestResult<crate::endpoints::provider::ProviderPayments> {
        self.provider().payments(addr, from).await
    }

    /// Get stats for a provider's workers on one algorithm
    pub async fn worker_stats(
        &self,
        addr: &str,
        algo: impl Into<AlgorithmRef>,
    ) -> RestResult<crate::endpoints::provider::WorkerStats> {
        self.provider().workers(addr, algo).await
    }

    // ========================================================================
    // Private Order Endpoints
    // ========================================================================

    /// Get order management endpoints (requires credentials)
    pub fn orders(&self) -> RestResult<OrderEndpoints<'_>> {
        let creds = self.complete_credentials()?;
        Ok(OrderEndpoints::new(&self.http_client, &self.base_url, creds))
    }

    /// List own orders for an algorithm
    pub async fn my_orders(
        &self,
        location: Option<Location>,
        algo: Option<AlgorithmRef>,
    ) -> RestResult<Vec<MarketOrder>> {
        self.orders()?.my_orders(location, algo).await
    }

    /// Create a new hashpower order
    pub async fn create_order(&self, order: &CreateOrderRequest) -> RestResult<OrderResult> {
        self.orders()?.create(order).await
    }

    /// Add funds to an existing order
    pub async fn refill_order(
        &self,
        order: u64,
        amount: Decimal,
        location: Option<Location>,
        algo: Option<AlgorithmRef>,
    ) -> RestResult<OrderResult> {
        self.orders()?.refill(order, amount, location, algo).await
    }

    /// Remove an existing order
    pub async fn remove_order(
        &self,
        order: u64,
        location: Option<Location>,
        algo: Option<AlgorithmRef>,
    ) -> RestResult<OrderResult> {
        self.orders()?.remove(order, location, algo).await
    }

    /// Set a new price for an existing order (increases only)
    pub async fn set_order_price(
        &self,
        order: u64,
        price: Decimal,
        location: Option<Location>,
        algo: Option<AlgorithmRef>,
    ) -> RestResult<OrderResult> {
        self.orders()?.set_price(order, price, location, algo).await
    }

    /// Decrease the price of an existing order by the service's own step
    pub async fn decrease_order_price(
        &self,
        order: u64,
        location: Option<Location>,
        algo: Option<AlgorithmRef>,
    ) -> RestResult<OrderResult> {
        self.orders()?.decrease_price(order, location, algo).await
    }

    /// Set a new speed limit for an existing order
    pub async fn set_order_limit(
        &self,
        order: u64,
        limit: Option<Decimal>,
        location: Option<Location>,
        algo: Option<AlgorithmRef>,
    ) -> RestResult<OrderResult> {
        self.orders()?.set_limit(order, limit, location, algo).await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> RestResult<AccountEndpoints<'_>> {
        let creds = self.complete_credentials()?;
        Ok(AccountEndpoints::new(
            &self.http_client,
            &self.base_url,
            creds,
        ))
    }

    /// Get the confirmed Bitcoin balance
    pub async fn balance(&self) -> RestResult<Decimal> {
        self.account()?.balance().await
    }
}

impl Default for NiceHashClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NiceHashClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NiceHashClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// API root the client talks to
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_without_credentials() {
        let client = NiceHashClient::new();
        assert!(!client.has_credentials());
    }

    #[test]
    fn test_blank_credentials_do_not_authenticate() {
        let client = NiceHashClient::with_key_id("", "");
        assert!(!client.has_credentials());
        assert!(matches!(client.orders(), Err(RestError::NotAuthenticated)));
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_base_url("http://localhost:8080")
            .with_timeout(60)
            .with_user_agent("test-agent");

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.user_agent, Some("test-agent".to_string()));
    }

    #[test]
    fn test_not_authenticated_error() {
        let client = NiceHashClient::new();
        assert!(matches!(client.account(), Err(RestError::NotAuthenticated)));
    }

    #[test]
    fn test_key_id_pair_authenticates() {
        let client = NiceHashClient::with_key_id("f6e7cd7a-ea84-4164-a82c-e2d4ca205f2f", "12345");
        assert!(client.has_credentials());
        assert!(client.orders().is_ok());
    }
}
