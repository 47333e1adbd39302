use crate::error::AnalyticsError;
use crate::report::SellerReport;
use core_types::{Product, RevenueAccounting, SalesData, SellerTotals};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strategies::AnalysisStrategies;
use tracing::warn;

/// Behavior options for the engine, injected at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Which headline amount a purchase record credits to seller revenue.
    pub revenue_accounting: RevenueAccounting,
}

/// A stateless calculator that turns raw sales data into ranked per-seller
/// performance reports.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {
    settings: EngineSettings,
}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: EngineSettings) -> Self {
        Self { settings }
    }

    /// The main entry point for computing a seller performance report.
    ///
    /// # Arguments
    ///
    /// * `data` - The sellers, product catalog, and purchase records to
    ///   aggregate. All three collections must be non-empty.
    /// * `strategies` - The revenue and bonus policies for this run.
    ///
    /// # Returns
    ///
    /// A `Result` with one `SellerReport` per input seller, ordered by profit
    /// descending (ties keep seller input order), or an `AnalyticsError`.
    /// Validation failures abort the call before any aggregation happens, and
    /// a revenue strategy error aborts it mid-pass; no partial report is ever
    /// returned.
    ///
    /// Purchase records referencing an unknown seller, and line items
    /// referencing an unknown SKU, are skipped with a warn-level event rather
    /// than failing the run.
    pub fn analyze(
        &self,
        data: &SalesData,
        strategies: &AnalysisStrategies,
    ) -> Result<Vec<SellerReport>, AnalyticsError> {
        self.validate(data)?;

        // One accumulator per seller, in input order. The id map points into
        // the vector so the later profit sort can stay stable on that order.
        let mut totals: Vec<SellerTotals> = data.sellers.iter().map(SellerTotals::new).collect();
        let seller_index: HashMap<&str, usize> = data
            .sellers
            .iter()
            .enumerate()
            .map(|(position, seller)| (seller.id.as_str(), position))
            .collect();
        let product_index: HashMap<&str, &Product> = data
            .products
            .iter()
            .map(|product| (product.sku.as_str(), product))
            .collect();

        for record in &data.purchase_records {
            let Some(&position) = seller_index.get(record.seller_id.as_str()) else {
                warn!(
                    seller_id = %record.seller_id,
                    "purchase record references an unknown seller, skipping record"
                );
                continue;
            };
            let seller = &mut totals[position];

            seller.sales_count += 1;
            seller.revenue += match self.settings.revenue_accounting {
                RevenueAccounting::NetOfDiscount => record.total_amount - record.total_discount,
                RevenueAccounting::GrossAmount => record.total_amount,
            };

            for item in &record.items {
                let Some(product) = product_index.get(item.sku.as_str()).copied() else {
                    warn!(sku = %item.sku, "line item references an unknown product, skipping item");
                    continue;
                };

                let item_revenue = strategies.revenue.calculate_revenue(item, product)?;
                // The revenue strategy has validated the quantity by now.
                let quantity = item.quantity.unwrap_or(0);
                let cost = product.purchase_price * Decimal::from(quantity);

                seller.profit += item_revenue - cost;
                seller.add_product_sale(&item.sku, quantity);
            }
        }

        // Stable: equal profits keep seller input order.
        totals.sort_by(|a, b| b.profit.cmp(&a.profit));

        let total_sellers = totals.len();
        Ok(totals
            .into_iter()
            .enumerate()
            .map(|(rank, seller)| {
                let bonus = strategies.bonus.calculate_bonus(rank, total_sellers, &seller);
                SellerReport::from_totals(seller, bonus)
            })
            .collect())
    }

    fn validate(&self, data: &SalesData) -> Result<(), AnalyticsError> {
        if data.sellers.is_empty() {
            return Err(AnalyticsError::InvalidInputData(
                "sellers collection is empty".to_string(),
            ));
        }
        if data.products.is_empty() {
            return Err(AnalyticsError::InvalidInputData(
                "products collection is empty".to_string(),
            ));
        }
        if data.purchase_records.is_empty() {
            return Err(AnalyticsError::InvalidInputData(
                "purchase_records collection is empty".to_string(),
            ));
        }
        Ok(())
    }
}
