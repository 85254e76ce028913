//! Errors returned by the ledger and the bridge service.

use rbridge_crypto::DerivationError;
use rbridge_types::TokenAmount;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("rToken {0} is already deployed")]
    DuplicateSymbol(String),

    #[error("rToken contract not found: {0}")]
    UnknownToken(String),

    #[error("amount {amount} outside allowed range [{min}, {max}]")]
    AmountOutOfRange {
        amount: TokenAmount,
        min: TokenAmount,
        max: TokenAmount,
    },

    #[error("unsupported target network for {symbol}: {network}")]
    UnsupportedTargetNetwork { symbol: String, network: String },

    #[error("rToken {0} is paused")]
    ContractPaused(String),

    #[error("insufficient supply: need {requested}, have {available}")]
    InsufficientSupply {
        requested: TokenAmount,
        available: TokenAmount,
    },

    #[error("supply of {0} would overflow")]
    SupplyOverflow(String),

    #[error("derivation error: {0}")]
    Derivation(#[from] DerivationError),

    #[error("deposit address {address} is not the {network} deposit address for {symbol}")]
    DepositAddressMismatch {
        symbol: String,
        network: String,
        address: String,
    },

    #[error("invalid {network} target address: {address}")]
    InvalidTargetAddress { network: String, address: String },

    #[error("{symbol} wraps {expected}, not {got}")]
    OriginalTokenMismatch {
        symbol: String,
        expected: String,
        got: String,
    },

    #[error("unsupported source network for {symbol}: {network}")]
    UnsupportedSourceNetwork { symbol: String, network: String },

    #[error("bridge minimum {min} exceeds maximum {max}")]
    InvertedBridgeRange { min: TokenAmount, max: TokenAmount },

    #[error("config error: {0}")]
    Config(String),
}
