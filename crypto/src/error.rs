//! Derivation errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DerivationError {
    #[error("unsupported network: {0}")]
    UnsupportedNetwork(String),

    #[error("token symbol must not be empty")]
    EmptySymbol,
}
