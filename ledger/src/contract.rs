//! Wrapped-token (rToken) contract metadata.

use std::collections::BTreeMap;

use rbridge_types::{Timestamp, TokenAmount};
use serde::{Deserialize, Serialize};

/// Operational status of an rToken contract.
///
/// Transitions only by operator action; mints and burns are refused while
/// paused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    Active,
    Paused,
}

impl ContractStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// The asset an rToken wraps, as supplied at deployment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginalToken {
    pub symbol: String,
    /// Networks the original asset lives on (also the allowed burn targets).
    #[serde(default)]
    pub networks: Vec<String>,
    /// Original token contract per network.
    #[serde(default)]
    pub contracts: BTreeMap<String, String>,
}

impl OriginalToken {
    pub fn new<S: Into<String>>(
        symbol: impl Into<String>,
        networks: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            networks: networks.into_iter().map(Into::into).collect(),
            contracts: BTreeMap::new(),
        }
    }

    pub fn with_contract(mut self, network: impl Into<String>, address: impl Into<String>) -> Self {
        self.contracts.insert(network.into(), address.into());
        self
    }
}

/// A deployed rToken contract and its supply counters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RTokenContract {
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    pub total_supply: TokenAmount,
    pub circulating_supply: TokenAmount,
    pub deployed_at: Timestamp,
    pub deployer: String,
    pub bridge_enabled: bool,
    pub status: ContractStatus,
    pub original_token: OriginalToken,
}
