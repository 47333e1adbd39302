use thiserror::Error;

#[derive(Error, Debug)]
pub enum StrategyError {
    #[error("Purchase data is missing a sale price or quantity: {0}")]
    InvalidPurchaseData(String),

    #[error("Invalid price or quantity: {0}")]
    InvalidPriceOrQuantity(String),

    #[error("Invalid discount percentage: {0}")]
    InvalidDiscount(String),
}
