//! REST API client for the NiceHash v1 hashpower marketplace
//!
//! This crate provides a complete client for the v1 marketplace API,
//! including market and provider statistics, order management, and
//! account balance.
//!
//! # Features
//!
//! - **Market Data**: Global stats, order books, algorithm listings
//! - **Provider Stats**: Miner stats, payments, per-rig worker data
//! - **Orders**: Create, refill, remove, reprice hashpower orders
//! - **Account**: Confirmed balance
//!
//! # Authentication
//!
//! Private endpoints require the account id and api key issued by the
//! marketplace; both travel as query parameters on each request. Public
//! endpoints work without credentials.
//!
//! # Example
//!
//! ```no_run
//! use nicehash_rest::{Credentials, NiceHashClient};
//! use nicehash_rest::Location;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = NiceHashClient::new();
//!     let stats = client.global_stats_current(Some(Location::Europe)).await?;
//!     println!("algorithms: {}", stats.len());
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let auth_client = NiceHashClient::with_credentials(creds);
//!     let balance = auth_client.balance().await?;
//!     println!("confirmed: {} BTC", balance);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod auth;
pub mod error;
pub mod endpoints;
pub mod types;

// Re-export main types
pub use client::{ClientConfig, NiceHashClient};
pub use auth::Credentials;
pub use error::{RequestFailure, RestError, RestResult};

// Re-export endpoint-specific types
pub use types::{
    // Market data
    AlgoStat, MarketOrder, RawAlgoStat,
    // Orders
    CreateOrderRequest, OrderResult,
    // Responses
    ApiEnvelope,
};

// Re-export the shared primitives callers need for requests
pub use nicehash_types::{Algorithm, AlgorithmError, AlgorithmRef, Location};
