//! Supported deposit networks.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Address format family a network belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkFamily {
    /// Ethereum-compatible chains: `0x` + 40 hex.
    Evm,
    /// Solana.
    Solana,
    /// Bitcoin (segwit `bc1q` addresses).
    Bitcoin,
}

impl NetworkFamily {
    /// BIP44 coin type used in derivation paths.
    pub fn coin_type(&self) -> u32 {
        match self {
            Self::Bitcoin => 0,
            Self::Evm => 60,
            Self::Solana => 501,
        }
    }

    /// Tag mixed into address hashing so families never share bytes.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Evm => "evm",
            Self::Solana => "solana",
            Self::Bitcoin => "bitcoin",
        }
    }
}

/// A network the bridge can take deposits from and withdraw to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Ethereum,
    Bsc,
    Polygon,
    Avalanche,
    Arbitrum,
    Optimism,
    Base,
    Solana,
    Bitcoin,
}

impl Network {
    pub const ALL: [Network; 9] = [
        Self::Ethereum,
        Self::Bsc,
        Self::Polygon,
        Self::Avalanche,
        Self::Arbitrum,
        Self::Optimism,
        Self::Base,
        Self::Solana,
        Self::Bitcoin,
    ];

    pub fn family(&self) -> NetworkFamily {
        match self {
            Self::Solana => NetworkFamily::Solana,
            Self::Bitcoin => NetworkFamily::Bitcoin,
            _ => NetworkFamily::Evm,
        }
    }

    /// Lowercase canonical name, as used in derivation inputs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ethereum => "ethereum",
            Self::Bsc => "bsc",
            Self::Polygon => "polygon",
            Self::Avalanche => "avalanche",
            Self::Arbitrum => "arbitrum",
            Self::Optimism => "optimism",
            Self::Base => "base",
            Self::Solana => "solana",
            Self::Bitcoin => "bitcoin",
        }
    }
}

impl FromStr for Network {
    type Err = ParseError;

    /// Names are matched exactly; `"Ethereum"` is not `ethereum`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|n| n.as_str() == s)
            .ok_or_else(|| ParseError::UnknownNetwork(s.to_string()))
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
