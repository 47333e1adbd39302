use core_types::{ProductCount, SellerTotals};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// How many best-selling products a report lists per seller.
pub(crate) const TOP_PRODUCTS_LIMIT: usize = 10;

/// The final, formatted performance entry for one seller.
///
/// This struct is the output of the `AnalyticsEngine` and serves as the data
/// transfer object for results throughout the system. Monetary fields are
/// rounded to cents here and nowhere else; the aggregation itself runs at
/// full precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerReport {
    pub seller_id: String,
    pub name: String,
    pub revenue: Decimal,
    pub profit: Decimal,
    pub sales_count: usize,
    /// Best sellers by cumulative quantity, descending, at most ten entries.
    pub top_products: Vec<ProductCount>,
    pub bonus: Decimal,
}

impl SellerReport {
    /// Finalizes totals into a report entry: rounds the monetary fields and
    /// trims the product ranking. Called exactly once per accumulator.
    pub(crate) fn from_totals(totals: SellerTotals, bonus: Decimal) -> Self {
        let mut top_products = totals.products_sold;
        // Stable: quantity ties keep first-seen SKU order.
        top_products.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        top_products.truncate(TOP_PRODUCTS_LIMIT);

        Self {
            seller_id: totals.seller_id,
            name: totals.name,
            revenue: round_cents(totals.revenue),
            profit: round_cents(totals.profit),
            sales_count: totals.sales_count,
            top_products,
            bonus: round_cents(bonus),
        }
    }
}

fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
