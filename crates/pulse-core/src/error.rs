use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PulseError {
    #[error("Ticker is empty")]
    EmptyTicker,

    #[error("Too many tickers: {count} (max {max})")]
    TooManyTickers { count: usize, max: usize },

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}
