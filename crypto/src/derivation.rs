//! Deterministic deposit-address derivation.
//!
//! Every (token, network) pair maps to one deposit address under a given
//! master seed, with no counter or external state:
//!
//! 1. index = Blake2b-256("<token>_<network>")[0..4] as big-endian u32, mod 1,000,000
//! 2. path  = `m/44'/<coin type>'/0'/0/<index>`
//! 3. bytes = Blake2b-256(seed "_" index "_" family tag), formatted per family
//! 4. a fixed bridge contract per network (none on bitcoin)
//! 5. a QR reference from Blake2b-256("<network>:<address>")

use std::collections::BTreeMap;
use std::fmt;

use rbridge_types::Network;
use serde::Serialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::address::{format_address, validate_for};
use crate::error::DerivationError;
use crate::hash::{blake2b_256, blake2b_256_multi};

/// Derivation indices are always below this bound.
pub const DERIVATION_INDEX_RANGE: u32 = 1_000_000;

/// BIP44 purpose field.
const BIP44_PURPOSE: u32 = 44;

/// Secret seed every deposit address is derived from. Zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MasterSeed(Vec<u8>);

impl MasterSeed {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for MasterSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MasterSeed(<redacted>)")
    }
}

/// A derived deposit address and everything needed to display or audit it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedAddress {
    pub network: Network,
    pub address: String,
    pub contract_address: Option<&'static str>,
    pub derivation_path: String,
    pub derivation_index: u32,
    pub qr_reference: String,
    pub is_valid: bool,
}

/// Index for a (token, network) pair, in `0..DERIVATION_INDEX_RANGE`.
pub fn derivation_index(token_symbol: &str, network: Network) -> u32 {
    let hash = blake2b_256_multi(&[
        token_symbol.as_bytes(),
        b"_",
        network.as_str().as_bytes(),
    ]);
    let head = u32::from_be_bytes([hash[0], hash[1], hash[2], hash[3]]);
    head % DERIVATION_INDEX_RANGE
}

/// BIP44-style path for a derivation index on a network.
pub fn derivation_path(network: Network, index: u32) -> String {
    format!(
        "m/{}'/{}'/0'/0/{}",
        BIP44_PURPOSE,
        network.family().coin_type(),
        index
    )
}

/// The bridge's receiving contract on each network. Bitcoin has none.
pub fn bridge_contract_address(network: Network) -> Option<&'static str> {
    match network {
        Network::Ethereum => Some("0x1234567890123456789012345678901234567890"),
        Network::Bsc => Some("0x2345678901234567890123456789012345678901"),
        Network::Polygon => Some("0x3456789012345678901234567890123456789012"),
        Network::Avalanche => Some("0x4567890123456789012345678901234567890123"),
        Network::Arbitrum => Some("0x5678901234567890123456789012345678901234"),
        Network::Optimism => Some("0x6789012345678901234567890123456789012345"),
        Network::Base => Some("0x7890123456789012345678901234567890123456"),
        Network::Solana => Some("BridgeContract123456789012345678901234567890"),
        Network::Bitcoin => None,
    }
}

/// Identifier of the QR image for an address. Rendering happens elsewhere.
pub fn qr_reference(network: Network, address: &str) -> String {
    let payload = format!("{}:{}", network, address);
    let hash = blake2b_256(payload.as_bytes());
    format!("qr_{}.png", hex::encode(&hash[..4]))
}

/// Derives deposit addresses from a master seed.
///
/// Holds no mutable state, so one deriver can be shared across threads.
#[derive(Clone, Debug)]
pub struct AddressDeriver {
    seed: MasterSeed,
}

impl AddressDeriver {
    pub fn new(seed: MasterSeed) -> Self {
        Self { seed }
    }

    /// Derive using a network name. Unknown names are rejected.
    pub fn derive_address(
        &self,
        token_symbol: &str,
        network: &str,
    ) -> Result<DerivedAddress, DerivationError> {
        let network = network
            .parse::<Network>()
            .map_err(|_| DerivationError::UnsupportedNetwork(network.to_string()))?;
        self.derive(token_symbol, network)
    }

    pub fn derive(
        &self,
        token_symbol: &str,
        network: Network,
    ) -> Result<DerivedAddress, DerivationError> {
        if token_symbol.is_empty() {
            return Err(DerivationError::EmptySymbol);
        }

        let index = derivation_index(token_symbol, network);
        let family = network.family();
        let index_str = index.to_string();
        let bytes = blake2b_256_multi(&[
            self.seed.as_bytes(),
            b"_",
            index_str.as_bytes(),
            b"_",
            family.tag().as_bytes(),
        ]);
        let address = format_address(family, &bytes);

        Ok(DerivedAddress {
            network,
            contract_address: bridge_contract_address(network),
            derivation_path: derivation_path(network, index),
            derivation_index: index,
            qr_reference: qr_reference(network, &address),
            is_valid: validate_for(&address, network),
            address,
        })
    }

    /// Derive one address per network. Fails on the first unknown network.
    pub fn derive_all<S: AsRef<str>>(
        &self,
        token_symbol: &str,
        networks: &[S],
    ) -> Result<BTreeMap<Network, DerivedAddress>, DerivationError> {
        networks
            .iter()
            .map(|n| {
                let derived = self.derive_address(token_symbol, n.as_ref())?;
                Ok((derived.network, derived))
            })
            .collect()
    }
}
