//! Bridge mapping: the economic parameters pairing an rToken with its original asset.

use std::collections::{BTreeMap, BTreeSet};

use rbridge_types::{BridgeRatio, FeeRate, Timestamp, TokenAmount};
use serde::{Deserialize, Serialize};

/// Bridge configuration for one rToken.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeMapping {
    pub r_token_symbol: String,
    pub original_symbol: String,
    pub supported_networks: BTreeSet<String>,
    pub contract_addresses: BTreeMap<String, String>,
    pub bridge_ratio: BridgeRatio,
    pub min_bridge_amount: TokenAmount,
    pub max_bridge_amount: TokenAmount,
    pub bridge_fee_rate: FeeRate,
    pub created_at: Timestamp,
}

impl BridgeMapping {
    /// Whether `amount` lies within `[min_bridge_amount, max_bridge_amount]`.
    pub fn accepts(&self, amount: TokenAmount) -> bool {
        self.min_bridge_amount <= amount && amount <= self.max_bridge_amount
    }

    pub fn supports(&self, network: &str) -> bool {
        self.supported_networks.contains(network)
    }

    /// Apply an update; fields left as `None` keep their value.
    pub(crate) fn apply(&mut self, update: &BridgeSettingsUpdate) {
        if let Some(rate) = update.bridge_fee_rate {
            self.bridge_fee_rate = rate;
        }
        if let Some(min) = update.min_bridge_amount {
            self.min_bridge_amount = min;
        }
        if let Some(max) = update.max_bridge_amount {
            self.max_bridge_amount = max;
        }
    }
}

/// The only mapping fields an operator may change after deployment.
///
/// Deserialising ignores unknown keys, so a free-form settings object can
/// be passed straight through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BridgeSettingsUpdate {
    pub bridge_fee_rate: Option<FeeRate>,
    pub min_bridge_amount: Option<TokenAmount>,
    pub max_bridge_amount: Option<TokenAmount>,
}
