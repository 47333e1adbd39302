use serde::{Deserialize, Serialize};

/// How a purchase record's headline amount is attributed to seller revenue.
///
/// The deployed report generators disagreed on whether `total_discount`
/// should be subtracted, so the rule is an explicit setting rather than a
/// hard-coded guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevenueAccounting {
    /// Credit `total_amount - total_discount` per record.
    #[default]
    NetOfDiscount,
    /// Credit `total_amount` per record, ignoring `total_discount`.
    GrossAmount,
}
