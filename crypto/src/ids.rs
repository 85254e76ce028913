//! Identifiers for simulated contracts and transactions.
//!
//! Unlike deposit addresses these are one-time values: each ledger mixes a
//! random salt and a monotonic nonce into the hash, so the same symbol
//! deployed on two ledgers gets two different contract addresses.

use rand::RngCore;
use rbridge_types::{NetworkFamily, TxHash};

use crate::address::format_address;
use crate::hash::blake2b_256_multi;

/// Which kind of simulated transaction a hash identifies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TxKind {
    Mint,
    Burn,
}

impl TxKind {
    fn tag(&self) -> &'static [u8] {
        match self {
            Self::Mint => b"mint",
            Self::Burn => b"burn",
        }
    }
}

/// Generate a fresh 32-byte salt from the thread-local CSPRNG.
pub fn random_salt() -> [u8; 32] {
    let mut salt = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut salt);
    salt
}

/// EVM-style address for a newly deployed wrapped-token contract.
pub fn contract_address(symbol: &str, salt: &[u8; 32], nonce: u64) -> String {
    let bytes = blake2b_256_multi(&[
        b"rtoken_",
        symbol.as_bytes(),
        b"_",
        salt,
        &nonce.to_be_bytes(),
    ]);
    format_address(NetworkFamily::Evm, &bytes)
}

/// Hash for a simulated mint or burn transaction.
pub fn transaction_hash(
    kind: TxKind,
    salt: &[u8; 32],
    nonce: u64,
    symbol: &str,
    counterparty: &str,
) -> TxHash {
    TxHash::new(blake2b_256_multi(&[
        kind.tag(),
        salt,
        &nonce.to_be_bytes(),
        symbol.as_bytes(),
        b"_",
        counterparty.as_bytes(),
    ]))
}
