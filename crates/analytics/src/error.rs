use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Invalid input data: {0}")]
    InvalidInputData(String),

    #[error("Revenue calculation failed: {0}")]
    Strategy(#[from] strategies::StrategyError),
}
