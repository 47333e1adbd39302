use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An entity whose sales performance is being measured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub name: String,
}

/// A catalog item identified by SKU, with a known purchase (cost) price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    pub purchase_price: Decimal,
}

/// One product line within a purchase record.
///
/// `quantity` and `sale_price` are optional on purpose: upstream feeds
/// sometimes omit them, and rejecting such items is the revenue strategy's
/// job, not the deserializer's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: String,
    pub quantity: Option<i64>,
    pub sale_price: Option<Decimal>,
    /// Percentage discount in the 0-100 range.
    #[serde(default)]
    pub discount: Decimal,
}

/// One transaction attributed to a seller, containing one or more line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub seller_id: String,
    pub total_amount: Decimal,
    pub total_discount: Decimal,
    pub items: Vec<LineItem>,
}

/// The full input to an analysis run: reference data plus transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesData {
    pub sellers: Vec<Seller>,
    pub products: Vec<Product>,
    pub purchase_records: Vec<PurchaseRecord>,
}

/// Cumulative quantity sold for one SKU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCount {
    pub sku: String,
    pub quantity: i64,
}

/// Per-seller running totals built during aggregation.
///
/// One instance exists per input seller, created before the fold over
/// purchase records and mutated only by that fold. `products_sold` keeps
/// insertion order so quantity ties later resolve by first-seen SKU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerTotals {
    pub seller_id: String,
    pub name: String,
    pub sales_count: usize,
    pub revenue: Decimal,
    pub profit: Decimal,
    pub products_sold: Vec<ProductCount>,
}

impl SellerTotals {
    /// Creates zeroed totals for a seller.
    pub fn new(seller: &Seller) -> Self {
        Self {
            seller_id: seller.id.clone(),
            name: seller.name.clone(),
            sales_count: 0,
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            products_sold: Vec::new(),
        }
    }

    /// Adds `quantity` to the cumulative count for `sku`, creating the entry
    /// on first occurrence.
    pub fn add_product_sale(&mut self, sku: &str, quantity: i64) {
        if let Some(entry) = self.products_sold.iter_mut().find(|p| p.sku == sku) {
            entry.quantity += quantity;
        } else {
            self.products_sold.push(ProductCount {
                sku: sku.to_string(),
                quantity,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn product_sales_accumulate_per_sku() {
        let seller = Seller {
            id: "s1".to_string(),
            name: "Ana Lopez".to_string(),
        };
        let mut totals = SellerTotals::new(&seller);

        totals.add_product_sale("SKU-B", 2);
        totals.add_product_sale("SKU-A", 1);
        totals.add_product_sale("SKU-B", 3);

        assert_eq!(totals.products_sold.len(), 2);
        // First-seen order is preserved.
        assert_eq!(totals.products_sold[0].sku, "SKU-B");
        assert_eq!(totals.products_sold[0].quantity, 5);
        assert_eq!(totals.products_sold[1].sku, "SKU-A");
        assert_eq!(totals.products_sold[1].quantity, 1);
    }

    #[test]
    fn sales_data_deserializes_from_the_wire_shape() {
        let json = r#"{
            "sellers": [{"id": "s1", "name": "Ana Lopez"}],
            "products": [{"sku": "SKU-A", "purchase_price": "40.00"}],
            "purchase_records": [{
                "seller_id": "s1",
                "total_amount": "180.00",
                "total_discount": "30.00",
                "items": [
                    {"sku": "SKU-A", "quantity": 2, "sale_price": "70.00", "discount": 0}
                ]
            }]
        }"#;

        let data: SalesData = serde_json::from_str(json).unwrap();
        assert_eq!(data.sellers.len(), 1);
        assert_eq!(data.products[0].purchase_price, dec!(40.00));

        let item = &data.purchase_records[0].items[0];
        assert_eq!(item.quantity, Some(2));
        assert_eq!(item.sale_price, Some(dec!(70.00)));
        assert_eq!(item.discount, Decimal::ZERO);
    }

    #[test]
    fn line_item_discount_defaults_to_zero() {
        let json = r#"{"sku": "SKU-A", "quantity": 1, "sale_price": "10.00"}"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.discount, Decimal::ZERO);
    }
}
