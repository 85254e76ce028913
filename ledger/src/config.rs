//! Ledger configuration with TOML file support.

use rbridge_types::{BridgeRatio, FeeRate, TokenAmount};
use serde::{Deserialize, Serialize};

use crate::LedgerError;

/// Defaults applied to every newly deployed rToken and its bridge mapping.
///
/// Can be loaded from a TOML file via [`LedgerConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Address recorded as the deployer of every rToken contract.
    #[serde(default = "default_deployer_address")]
    pub deployer_address: String,

    /// Smallest amount a single mint may bridge.
    #[serde(default = "default_min_bridge_amount")]
    pub default_min_bridge_amount: TokenAmount,

    /// Largest amount a single mint may bridge.
    #[serde(default = "default_max_bridge_amount")]
    pub default_max_bridge_amount: TokenAmount,

    /// Fraction retained on every mint and burn.
    #[serde(default = "default_bridge_fee_rate")]
    pub default_bridge_fee_rate: FeeRate,

    #[serde(default)]
    pub default_bridge_ratio: BridgeRatio,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_deployer_address() -> String {
    "0x1111111111111111111111111111111111111111".to_string()
}

fn default_min_bridge_amount() -> TokenAmount {
    // 0.000001 tokens
    TokenAmount::from_raw(1_000_000_000_000)
}

fn default_max_bridge_amount() -> TokenAmount {
    TokenAmount::from_tokens(1_000_000)
}

fn default_bridge_fee_rate() -> FeeRate {
    // 0.1%
    FeeRate::from_ppm(1_000).unwrap_or(FeeRate::ZERO)
}

// ── Impl ───────────────────────────────────────────────────────────────

impl LedgerConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, LedgerError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| LedgerError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, LedgerError> {
        let config: Self = toml::from_str(s).map_err(|e| LedgerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, LedgerError> {
        toml::to_string_pretty(self).map_err(|e| LedgerError::Config(e.to_string()))
    }

    /// Reject a bridge range that no amount could satisfy.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.default_min_bridge_amount > self.default_max_bridge_amount {
            return Err(LedgerError::Config(format!(
                "default_min_bridge_amount {} exceeds default_max_bridge_amount {}",
                self.default_min_bridge_amount, self.default_max_bridge_amount
            )));
        }
        Ok(())
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            deployer_address: default_deployer_address(),
            default_min_bridge_amount: default_min_bridge_amount(),
            default_max_bridge_amount: default_max_bridge_amount(),
            default_bridge_fee_rate: default_bridge_fee_rate(),
            default_bridge_ratio: BridgeRatio::ONE,
        }
    }
}
