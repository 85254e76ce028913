//! Append-only mint and burn records.

use rbridge_types::{Timestamp, TokenAmount, TxHash};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Confirmed,
}

/// A deposit credited as freshly minted rTokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintRecord {
    pub tx_hash: TxHash,
    pub r_token_symbol: String,
    pub recipient: String,
    /// Gross deposit amount.
    pub amount: TokenAmount,
    pub fee: TokenAmount,
    /// `amount - fee`; what supply grew by.
    pub credited_amount: TokenAmount,
    pub source_network: String,
    pub source_tx_hash: String,
    pub block_number: u64,
    pub timestamp: Timestamp,
    pub status: RecordStatus,
}

/// A withdrawal debited by burning rTokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BurnRecord {
    pub tx_hash: TxHash,
    pub r_token_symbol: String,
    pub holder: String,
    /// Gross burned amount; what supply shrank by.
    pub amount: TokenAmount,
    pub fee: TokenAmount,
    /// `amount - fee`; what the holder receives on the target network.
    pub withdraw_amount: TokenAmount,
    pub target_network: String,
    pub target_address: String,
    pub block_number: u64,
    pub timestamp: Timestamp,
    pub status: RecordStatus,
}
