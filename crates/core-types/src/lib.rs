//! # Core Types
//!
//! The Layer 0 data model shared by every crate in the workspace. It defines
//! the input collections a caller supplies (`SalesData` and its parts) and the
//! per-seller running totals (`SellerTotals`) that the aggregation builds and
//! that bonus calculations read.
//!
//! This crate has no knowledge of strategies or the analytics engine; it
//! depends on nothing but serde and the decimal arithmetic stack.

pub mod enums;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::RevenueAccounting;
pub use structs::{
    LineItem, Product, ProductCount, PurchaseRecord, SalesData, Seller, SellerTotals,
};
