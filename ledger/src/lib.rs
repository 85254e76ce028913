//! rToken bridge ledger.
//!
//! Owns the registry of wrapped-token contracts and their bridge mappings.
//! Mints credit supply net of the bridge fee; burns debit the gross amount.
//! Every mint and burn is appended to a per-token audit log.
//!
//! [`BridgeService`] ties the ledger to deposit-address derivation for the
//! full deposit and withdrawal flow.

pub mod bridge;
pub mod config;
pub mod contract;
pub mod error;
pub mod ledger;
pub mod mapping;
pub mod record;

pub use bridge::{BridgeService, DepositEvent, WithdrawRequest};
pub use config::LedgerConfig;
pub use contract::{ContractStatus, OriginalToken, RTokenContract};
pub use error::LedgerError;
pub use ledger::{BridgeLedger, LedgerSummary};
pub use mapping::{BridgeMapping, BridgeSettingsUpdate};
pub use record::{BurnRecord, MintRecord, RecordStatus};
