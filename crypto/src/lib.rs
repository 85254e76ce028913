//! Cryptographic helpers and deposit-address derivation for rbridge.
//!
//! - **Blake2b-256** is the single hash primitive for every derived value
//! - Deterministic per-(token, network) deposit addresses from a master seed
//! - Structural (prefix/length) address validation per network family
//! - Identifier generation for simulated contracts and transactions

pub mod address;
pub mod derivation;
pub mod error;
pub mod hash;
pub mod ids;

pub use address::{format_address, validate_address, validate_for};
pub use derivation::{
    bridge_contract_address, derivation_index, derivation_path, qr_reference, AddressDeriver,
    DerivedAddress, MasterSeed, DERIVATION_INDEX_RANGE,
};
pub use error::DerivationError;
pub use hash::{blake2b_256, blake2b_256_multi};
pub use ids::{contract_address, random_salt, transaction_hash, TxKind};
