//! Per-family address formatting and structural validation.
//!
//! Formats (all lowercase hex, taken from the front of a 32-byte hash):
//! - EVM:     `0x` + 40 hex                (42 chars)
//! - Solana:  44 hex                       (44 chars)
//! - Bitcoin: `bc1q` + 38 hex              (42 chars)
//!
//! Validation is structural only: prefix and length. No checksum and no
//! on-chain lookup.

use rbridge_types::{Network, NetworkFamily};

const EVM_PREFIX: &str = "0x";
const EVM_LEN: usize = 42;

const SOLANA_LEN: usize = 44;
const SOLANA_MIN_LEN: usize = 32;

const BITCOIN_PREFIX: &str = "bc1q";
const BITCOIN_MIN_LEN: usize = 42;

/// Format 32 hash bytes as an address of the given family.
pub fn format_address(family: NetworkFamily, bytes: &[u8; 32]) -> String {
    let digits = hex::encode(bytes);
    match family {
        NetworkFamily::Evm => format!("{}{}", EVM_PREFIX, &digits[..EVM_LEN - EVM_PREFIX.len()]),
        NetworkFamily::Solana => digits[..SOLANA_LEN].to_string(),
        NetworkFamily::Bitcoin => format!(
            "{}{}",
            BITCOIN_PREFIX,
            &digits[..BITCOIN_MIN_LEN - BITCOIN_PREFIX.len()]
        ),
    }
}

/// Structural validity of `address` on a known network.
pub fn validate_for(address: &str, network: Network) -> bool {
    match network.family() {
        NetworkFamily::Evm => address.starts_with(EVM_PREFIX) && address.len() == EVM_LEN,
        NetworkFamily::Solana => (SOLANA_MIN_LEN..=SOLANA_LEN).contains(&address.len()),
        NetworkFamily::Bitcoin => {
            address.starts_with(BITCOIN_PREFIX) && address.len() >= BITCOIN_MIN_LEN
        }
    }
}

/// Structural validity of `address` on a network given by name.
///
/// Unknown networks are accepted: callers that need a closed set must parse
/// the name into a [`Network`] first and use [`validate_for`].
pub fn validate_address(address: &str, network: &str) -> bool {
    match network.parse::<Network>() {
        Ok(n) => validate_for(address, n),
        Err(_) => true,
    }
}
