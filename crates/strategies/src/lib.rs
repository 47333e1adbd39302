//! # Sales Strategy Library
//!
//! This crate contains the pluggable calculation policies of the system. It
//! defines the `RevenueStrategy` and `BonusStrategy` traits and provides the
//! standard implementations.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   where sales data comes from or where reports go. It depends only on
//!   `core-types`.
//! - **Strategy Agnostic Engine:** By using the two traits, the analytics
//!   engine can aggregate with any revenue or bonus policy without knowing
//!   its internal details.
//! - **Extensibility:** Adding a policy means implementing one trait in a new
//!   module; the engine and its callers are untouched.
//!
//! ## Public API
//!
//! - `RevenueStrategy` / `BonusStrategy`: the traits all policies implement.
//! - `SimpleRevenue` / `ProfitRankBonus`: the standard implementations.
//! - `AnalysisStrategies`: the pair of boxed strategies an analysis run is
//!   handed.
//! - `StrategyError`: the specific error types that can be returned from this
//!   crate.

// Declare all the modules that constitute this crate.
pub mod error;
pub mod profit_rank_bonus;
pub mod simple_revenue;

// Re-export the key components to create a clean, public-facing API.
pub use error::StrategyError;
pub use profit_rank_bonus::ProfitRankBonus;
pub use simple_revenue::SimpleRevenue;

use core_types::{LineItem, Product, SellerTotals};
use rust_decimal::Decimal;

/// Computes the net revenue of a single line item.
///
/// Implementations validate the line item themselves; the engine treats any
/// returned error as fatal for the whole analysis run. Results are returned
/// unrounded, as rounding happens once at final report formatting.
///
/// The `Send + Sync` bounds allow independent analysis runs to execute on
/// parallel threads.
pub trait RevenueStrategy: Send + Sync {
    /// Returns the revenue earned by `item`, given its catalog `product`.
    fn calculate_revenue(
        &self,
        item: &LineItem,
        product: &Product,
    ) -> Result<Decimal, StrategyError>;
}

/// Computes a seller's bonus from their final position in the ranking.
///
/// `rank` is the zero-based position in the profit-descending seller list and
/// `total_sellers` is that list's length. Implementations return zero for any
/// rank outside `[0, total_sellers)`; a malformed rank is not an error, it is
/// simply not worth a bonus.
pub trait BonusStrategy: Send + Sync {
    fn calculate_bonus(
        &self,
        rank: usize,
        total_sellers: usize,
        totals: &SellerTotals,
    ) -> Decimal;
}

/// The pair of strategies an analysis run is parameterized with.
///
/// Both fields are required to construct the bundle, so a run can never start
/// with a missing or ill-typed strategy.
pub struct AnalysisStrategies {
    pub revenue: Box<dyn RevenueStrategy>,
    pub bonus: Box<dyn BonusStrategy>,
}

impl AnalysisStrategies {
    pub fn new(revenue: Box<dyn RevenueStrategy>, bonus: Box<dyn BonusStrategy>) -> Self {
        Self { revenue, bonus }
    }

    /// The standard pairing: discounted line revenue and rank-tiered bonuses.
    pub fn standard() -> Self {
        Self::new(Box::new(SimpleRevenue), Box::new(ProfitRankBonus))
    }
}
