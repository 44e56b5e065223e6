//! API endpoint implementations
//!
//! Every v1 operation is a GET against the API root and dispatches on the
//! `method` query pair, so the transport shared by all groups lives here.

pub mod market;
pub mod provider;
pub mod orders;
pub mod account;

pub use market::MarketEndpoints;
pub use provider::ProviderEndpoints;
pub use orders::OrderEndpoints;
pub use account::AccountEndpoints;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{RequestFailure, RestError, RestResult};
use crate::types::ApiEnvelope;

/// Issue a GET against the API root and decode the response envelope
///
/// `params` go on the query string in order; callers place the `method`
/// pair first since the service dispatches on it.
pub(crate) async fn api_get<T: DeserializeOwned>(
    client: &Client,
    base_url: &str,
    operation: &'static str,
    params: &[(&'static str, String)],
) -> RestResult<ApiEnvelope<T>> {
    let response = client
        .get(base_url)
        .query(params)
        .send()
        .await
        .map_err(|e| RestError::request(operation, e))?
        .error_for_status()
        .map_err(|e| RestError::request(operation, e))?;

    response
        .json()
        .await
        .map_err(|e| RestError::request(operation, e))
}

/// Unwrap the envelope's `result`, failing when the service omitted it
pub(crate) fn require_result<T>(
    operation: &'static str,
    envelope: ApiEnvelope<T>,
) -> RestResult<T> {
    envelope.result.ok_or_else(|| {
        RestError::request(
            operation,
            RequestFailure::UnexpectedBody("result object missing".to_string()),
        )
    })
}

/// Pull the expected field out of a result payload
///
/// When the field is absent the service's own error message, if any, is
/// carried in the failure.
pub(crate) fn extract<T>(
    operation: &'static str,
    field: Option<T>,
    error: Option<String>,
) -> RestResult<T> {
    field.ok_or_else(|| {
        let detail = error.unwrap_or_else(|| "expected payload missing".to_string());
        RestError::request(operation, RequestFailure::UnexpectedBody(detail))
    })
}
