//! Parse errors for the textual forms of core types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid decimal amount: {0:?}")]
    InvalidAmount(String),

    #[error("too many decimal places in {value:?} (max {max})")]
    TooManyDecimals { value: String, max: u32 },

    #[error("amount {0:?} does not fit in 128 bits")]
    Overflow(String),

    #[error("rate {0:?} is outside [0, 1]")]
    InvalidRate(String),

    #[error("unsupported network: {0}")]
    UnknownNetwork(String),

    #[error("invalid transaction hash: {0:?}")]
    InvalidHash(String),
}
