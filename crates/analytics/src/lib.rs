//! # Sales Analytics Engine
//!
//! This crate turns raw sales data into ranked per-seller performance
//! reports. It is the "unbiased judge" of the system: every seller is scored
//! by the same pass over the same records.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems. It depends only on `core-types` and `strategies`.
//! - **Stateless Calculation:** The `AnalyticsEngine` holds nothing but its
//!   settings. Each `analyze` call owns all of its working state, so
//!   independent calls are safe to run on parallel threads.
//! - **Injected Policy:** Revenue and bonus rules arrive as strategy trait
//!   objects; the engine only orchestrates the aggregation and the ranking.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: the struct that contains the aggregation logic.
//! - `EngineSettings`: behavior options injected at construction.
//! - `SellerReport`: the standardized per-seller result.
//! - `AnalyticsError`: the specific error types that can be returned from
//!   this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{AnalyticsEngine, EngineSettings};
pub use error::AnalyticsError;
pub use report::SellerReport;
