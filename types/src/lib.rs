//! Fundamental types for the rbridge workspace.
//!
//! This crate defines the values shared by every other crate: supported
//! networks, fixed-point token amounts, fee rates, transaction hashes and
//! timestamps.

pub mod amount;
pub mod error;
pub mod hash;
pub mod network;
pub mod time;

pub use amount::{BridgeRatio, FeeRate, TokenAmount};
pub use error::ParseError;
pub use hash::TxHash;
pub use network::{Network, NetworkFamily};
pub use time::Timestamp;
