//! Common test utilities and fixtures for integration tests
//!
//! Contains sample JSON bodies shaped like live v1 marketplace responses

use nicehash_rest::{ClientConfig, Credentials, NiceHashClient};

/// Payout address used across provider fixtures
pub const BTC_ADDR: &str = "16dZdWFr6bhy5bxwsyUyunuWED8zWfQiYA";

/// Account id the authenticated test client uses
pub const TEST_API_ID: &str = "12345";

/// Api key the authenticated test client uses
pub const TEST_API_KEY: &str = "f6e7cd7a-ea84-4164-a82c-e2d4ca205f2f";

/// Global stats carrying the numeric IDs of Scrypt, NeoScrypt and Equihash
pub const GLOBAL_STATS_RESPONSE: &str = r#"{
    "result": {
        "stats": [
            {"algo": 0, "price": "0.0919", "speed": "216406.14"},
            {"algo": 8, "price": "0.0111", "speed": "212.55"},
            {"algo": 24, "price": "0.1731", "speed": "1942.05"}
        ]
    },
    "method": "stats.global.current"
}"#;

/// Global stats entry whose algorithm ID is not in the registry
pub const GLOBAL_STATS_UNKNOWN_ALGO_RESPONSE: &str = r#"{
    "result": {
        "stats": [
            {"algo": 99, "price": "0.0919", "speed": "216406.14"}
        ]
    },
    "method": "stats.global.current"
}"#;

/// Open orders listing
pub const ORDERS_RESPONSE: &str = r#"{
    "result": {
        "orders": [
            {"id": 1879, "type": 0, "price": "0.0505", "limit_speed": "1.0", "alive": true, "workers": 25, "accepted_speed": "0.638"},
            {"id": 2017, "type": 0, "price": "0.0491", "limit_speed": "0", "alive": true, "workers": 0, "accepted_speed": "0"}
        ]
    },
    "method": "orders.get"
}"#;

/// Multi-algorithm mining information
pub const MULTI_ALGO_RESPONSE: &str = r#"{
    "result": {
        "multialgo": [
            {"algo": 0, "name": "Scrypt", "profitability_above_ltc": "5.32"},
            {"algo": 20, "name": "DaggerHashimoto", "profitability_above_eth": "0.0"}
        ]
    },
    "method": "multialgo.info"
}"#;

/// Simple multi-algorithm mining information
pub const SIMPLE_MULTI_ALGO_RESPONSE: &str = r#"{
    "result": {
        "simplemultialgo": [
            {"name": "scrypt", "port": 3333, "paying": "0.00072", "algo": 0},
            {"name": "x11", "port": 3336, "paying": "0.00084", "algo": 3}
        ]
    },
    "method": "simplemultialgo.info"
}"#;

/// Buy information listing
pub const BUY_INFO_RESPONSE: &str = r#"{
    "result": {
        "algorithms": [
            {"algo": 24, "name": "Equihash", "down_step": "-0.0001", "min_limit": "0.4", "speed_text": "MSol"},
            {"algo": 20, "name": "DaggerHashimoto", "down_step": "-0.0001", "min_limit": "0.01", "speed_text": "GH"}
        ]
    },
    "method": "buy.info"
}"#;

/// Provider stats for a known payout address
pub const PROVIDER_STATS_RESPONSE: &str = r#"{
    "result": {
        "addr": "16dZdWFr6bhy5bxwsyUyunuWED8zWfQiYA",
        "current": [
            {"algo": 20, "name": "DaggerHashimoto", "suffix": "MH", "data": [{"a": "30.1"}, "0.00045"]}
        ],
        "payments": []
    },
    "method": "stats.provider"
}"#;

/// Provider stats rejection, reported inside the result object
pub const PROVIDER_ERROR_RESPONSE: &str = r#"{
    "result": {
        "error": "Invalid address."
    },
    "method": "stats.provider"
}"#;

/// Worker stats in the service's array-of-arrays layout
pub const WORKERS_RESPONSE: &str = r#"{
    "result": {
        "addr": "16dZdWFr6bhy5bxwsyUyunuWED8zWfQiYA",
        "workers": [
            ["worker1", {"a": "517.7"}, 2, 0, "x", 0, 3],
            ["worker2", {"a": "735.2"}, 2, 0, "x", 0, 3]
        ],
        "algo": 3
    },
    "method": "stats.provider.workers"
}"#;

/// Confirmed and pending balance
pub const BALANCE_RESPONSE: &str = r#"{
    "result": {
        "balance_confirmed": "0.00500000",
        "balance_pending": "0.00000000"
    },
    "method": "balance"
}"#;

/// Balance rejection, reported inside the result object
pub const BALANCE_ERROR_RESPONSE: &str = r#"{
    "result": {
        "error": "Invalid api key."
    },
    "method": "balance"
}"#;

/// Successful order creation
pub const ORDER_CREATED_RESPONSE: &str = r#"{
    "result": {
        "success": "Order #1879 created."
    },
    "method": "orders.create"
}"#;

/// Successful order removal
pub const ORDER_REMOVED_RESPONSE: &str = r#"{
    "result": {
        "success": "Order #1234 removed."
    },
    "method": "orders.remove"
}"#;

/// Rejected order mutation, reported inside the result object
pub const ORDER_ERROR_RESPONSE: &str = r#"{
    "result": {
        "error": "Order #1234 does not exist."
    },
    "method": "orders.remove"
}"#;

/// Bare API root answer used by the authorization probe
pub const EMPTY_RESULT_RESPONSE: &str = r#"{
    "result": {},
    "method": null
}"#;

/// Envelope with no result object at all
pub const NO_RESULT_RESPONSE: &str = r#"{
    "method": null
}"#;

/// Client without credentials pointed at a mock server
pub fn public_client(base_url: &str) -> NiceHashClient {
    NiceHashClient::with_config(ClientConfig::new().with_base_url(base_url))
}

/// Client with the test credential pair pointed at a mock server
pub fn authed_client(base_url: &str) -> NiceHashClient {
    NiceHashClient::with_config(
        ClientConfig::new()
            .with_base_url(base_url)
            .with_credentials(Credentials::new(TEST_API_ID, TEST_API_KEY)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_are_valid_envelopes() {
        let bodies = [
            GLOBAL_STATS_RESPONSE,
            GLOBAL_STATS_UNKNOWN_ALGO_RESPONSE,
            ORDERS_RESPONSE,
            MULTI_ALGO_RESPONSE,
            SIMPLE_MULTI_ALGO_RESPONSE,
            BUY_INFO_RESPONSE,
            PROVIDER_STATS_RESPONSE,
            PROVIDER_ERROR_RESPONSE,
            WORKERS_RESPONSE,
            BALANCE_RESPONSE,
            BALANCE_ERROR_RESPONSE,
            ORDER_CREATED_RESPONSE,
            ORDER_REMOVED_RESPONSE,
            ORDER_ERROR_RESPONSE,
            EMPTY_RESULT_RESPONSE,
        ];

        for body in bodies {
            let value: serde_json::Value = serde_json::from_str(body).unwrap();
            assert!(value.get("result").is_some());
        }

        // The degenerate envelope has no result on purpose
        let value: serde_json::Value = serde_json::from_str(NO_RESULT_RESPONSE).unwrap();
        assert!(value.get("result").is_none());
    }

    #[test]
    fn test_client_helpers_differ_in_credentials() {
        assert!(!public_client("http://localhost:1234").has_credentials());
        assert!(authed_client("http://localhost:1234").has_credentials());
    }
}
