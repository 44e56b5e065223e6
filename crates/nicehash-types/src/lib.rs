//! Shared types for the NiceHash v1 marketplace API
//!
//! This crate provides the core type definitions used across the SDK.
//! It has minimal dependencies and can be used independently.
//!
//! # Key Types
//!
//! - [`Algorithm`] - The marketplace algorithm registry (wire IDs 0..=42)
//! - [`AlgorithmRef`] - An algorithm referenced by numeric ID or name
//! - [`AlgorithmError`] - Registry lookup failures
//! - [`Location`] - Order book regions (Europe / USA)

pub mod algorithm;
pub mod location;

// Re-export commonly used types
pub use algorithm::*;
pub use location::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
