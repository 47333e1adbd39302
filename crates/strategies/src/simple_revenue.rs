use crate::RevenueStrategy;
use crate::error::StrategyError;
use core_types::{LineItem, Product};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// The standard per-line revenue calculation: sale price times quantity with
/// the percentage discount applied.
///
/// No rounding happens here; monetary values are rounded exactly once, at
/// final report formatting. The catalog `product` is part of the trait
/// contract so alternative strategies can price from the catalog, but this
/// implementation reads only the line item.
#[derive(Debug, Default)]
pub struct SimpleRevenue;

impl RevenueStrategy for SimpleRevenue {
    fn calculate_revenue(
        &self,
        item: &LineItem,
        _product: &Product,
    ) -> Result<Decimal, StrategyError> {
        let (Some(sale_price), Some(quantity)) = (item.sale_price, item.quantity) else {
            return Err(StrategyError::InvalidPurchaseData(format!(
                "line item for sku '{}' has no sale price or quantity",
                item.sku
            )));
        };

        if sale_price < Decimal::ZERO || quantity <= 0 {
            return Err(StrategyError::InvalidPriceOrQuantity(format!(
                "sku '{}': sale_price={sale_price}, quantity={quantity}",
                item.sku
            )));
        }

        if item.discount < Decimal::ZERO || item.discount > dec!(100) {
            return Err(StrategyError::InvalidDiscount(format!(
                "sku '{}': discount={}",
                item.sku, item.discount
            )));
        }

        let full_price = sale_price * Decimal::from(quantity);
        Ok(full_price * (Decimal::ONE - item.discount / dec!(100)))
    }
}
