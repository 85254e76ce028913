//! The bridge ledger: rToken registry plus fee-adjusted mint/burn accounting.
//!
//! Each symbol's contract, mapping and audit log live behind their own
//! mutex. Operations on one symbol are serialized; operations on different
//! symbols run concurrently. The outer map lock is only held long enough to
//! look up (or insert) a symbol's entry.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use rbridge_crypto::{contract_address, random_salt, transaction_hash, TxKind};
use rbridge_types::{Timestamp, TokenAmount};

use crate::config::LedgerConfig;
use crate::contract::{ContractStatus, OriginalToken, RTokenContract};
use crate::error::LedgerError;
use crate::mapping::{BridgeMapping, BridgeSettingsUpdate};
use crate::record::{BurnRecord, MintRecord, RecordStatus};

/// Everything the ledger holds for one rToken symbol.
#[derive(Debug)]
struct TokenEntry {
    contract: RTokenContract,
    mapping: BridgeMapping,
    mints: Vec<MintRecord>,
    burns: Vec<BurnRecord>,
}

/// Counts across the whole ledger.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LedgerSummary {
    pub contracts: usize,
    pub paused: usize,
    pub mints: usize,
    pub burns: usize,
}

/// Registry of rToken contracts with mint/burn supply accounting.
///
/// An owned value: tests and services each create their own ledger.
pub struct BridgeLedger {
    config: LedgerConfig,
    /// Mixed into contract addresses and tx hashes so they are unique per ledger.
    salt: [u8; 32],
    tokens: RwLock<HashMap<String, Arc<Mutex<TokenEntry>>>>,
    /// Monotonic nonce for generated identifiers.
    nonce: AtomicU64,
    /// Simulated chain height; each mint or burn lands in the next block.
    block_height: AtomicU64,
}

impl BridgeLedger {
    pub fn new(config: LedgerConfig) -> Self {
        Self::with_salt(config, random_salt())
    }

    /// A ledger whose generated identifiers are reproducible.
    pub fn with_salt(config: LedgerConfig, salt: [u8; 32]) -> Self {
        Self {
            config,
            salt,
            tokens: RwLock::new(HashMap::new()),
            nonce: AtomicU64::new(0),
            block_height: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    fn entry(&self, symbol: &str) -> Result<Arc<Mutex<TokenEntry>>, LedgerError> {
        self.tokens
            .read()
            .get(symbol)
            .cloned()
            .ok_or_else(|| LedgerError::UnknownToken(symbol.to_string()))
    }

    fn next_nonce(&self) -> u64 {
        self.nonce.fetch_add(1, Ordering::Relaxed)
    }

    fn next_block(&self) -> u64 {
        self.block_height.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Deploy a new rToken and its bridge mapping.
    pub fn deploy_rtoken(
        &self,
        symbol: &str,
        name: &str,
        decimals: u8,
        original: OriginalToken,
    ) -> Result<RTokenContract, LedgerError> {
        let mut tokens = self.tokens.write();
        if tokens.contains_key(symbol) {
            return Err(LedgerError::DuplicateSymbol(symbol.to_string()));
        }

        let now = Timestamp::now();
        let address = contract_address(symbol, &self.salt, self.next_nonce());

        let mapping = BridgeMapping {
            r_token_symbol: symbol.to_string(),
            original_symbol: original.symbol.clone(),
            supported_networks: original.networks.iter().cloned().collect(),
            contract_addresses: original.contracts.clone(),
            bridge_ratio: self.config.default_bridge_ratio,
            min_bridge_amount: self.config.default_min_bridge_amount,
            max_bridge_amount: self.config.default_max_bridge_amount,
            bridge_fee_rate: self.config.default_bridge_fee_rate,
            created_at: now,
        };
        let contract = RTokenContract {
            address,
            symbol: symbol.to_string(),
            name: name.to_string(),
            decimals,
            total_supply: TokenAmount::ZERO,
            circulating_supply: TokenAmount::ZERO,
            deployed_at: now,
            deployer: self.config.deployer_address.clone(),
            bridge_enabled: true,
            status: ContractStatus::Active,
            original_token: original,
        };

        tracing::info!(
            symbol,
            address = %contract.address,
            original = %mapping.original_symbol,
            "rToken deployed"
        );

        tokens.insert(
            symbol.to_string(),
            Arc::new(Mutex::new(TokenEntry {
                contract: contract.clone(),
                mapping,
                mints: Vec::new(),
                burns: Vec::new(),
            })),
        );
        Ok(contract)
    }

    /// Credit a deposit: supply grows by `amount` minus the bridge fee.
    pub fn mint(
        &self,
        symbol: &str,
        recipient: &str,
        amount: TokenAmount,
        source_network: &str,
        source_tx_hash: &str,
    ) -> Result<MintRecord, LedgerError> {
        let entry = self.entry(symbol)?;
        let mut guard = entry.lock();
        let entry = &mut *guard;

        if !entry.contract.status.is_active() {
            return Err(LedgerError::ContractPaused(symbol.to_string()));
        }
        if !entry.mapping.accepts(amount) {
            return Err(LedgerError::AmountOutOfRange {
                amount,
                min: entry.mapping.min_bridge_amount,
                max: entry.mapping.max_bridge_amount,
            });
        }

        let fee = entry.mapping.bridge_fee_rate.fee_on(amount);
        let credited = amount.saturating_sub(fee);
        let overflow = || LedgerError::SupplyOverflow(symbol.to_string());
        let total = entry.contract.total_supply.checked_add(credited).ok_or_else(overflow)?;
        let circulating = entry
            .contract
            .circulating_supply
            .checked_add(credited)
            .ok_or_else(overflow)?;
        entry.contract.total_supply = total;
        entry.contract.circulating_supply = circulating;

        let record = MintRecord {
            tx_hash: transaction_hash(TxKind::Mint, &self.salt, self.next_nonce(), symbol, recipient),
            r_token_symbol: symbol.to_string(),
            recipient: recipient.to_string(),
            amount,
            fee,
            credited_amount: credited,
            source_network: source_network.to_string(),
            source_tx_hash: source_tx_hash.to_string(),
            block_number: self.next_block(),
            timestamp: Timestamp::now(),
            status: RecordStatus::Confirmed,
        };
        entry.mints.push(record.clone());

        tracing::debug!(
            symbol,
            recipient,
            %amount,
            %fee,
            %credited,
            tx = %record.tx_hash,
            "minted"
        );
        Ok(record)
    }

    /// Debit a withdrawal: supply shrinks by the full `amount`; the holder
    /// receives `amount` minus the bridge fee on the target network.
    pub fn burn(
        &self,
        symbol: &str,
        holder: &str,
        amount: TokenAmount,
        target_network: &str,
        target_address: &str,
    ) -> Result<BurnRecord, LedgerError> {
        let entry = self.entry(symbol)?;
        let mut guard = entry.lock();
        let entry = &mut *guard;

        if !entry.contract.status.is_active() {
            return Err(LedgerError::ContractPaused(symbol.to_string()));
        }
        if !entry.mapping.supports(target_network) {
            return Err(LedgerError::UnsupportedTargetNetwork {
                symbol: symbol.to_string(),
                network: target_network.to_string(),
            });
        }

        let insufficient = |available| LedgerError::InsufficientSupply {
            requested: amount,
            available,
        };
        let circulating = entry
            .contract
            .circulating_supply
            .checked_sub(amount)
            .ok_or_else(|| insufficient(entry.contract.circulating_supply))?;
        let total = entry
            .contract
            .total_supply
            .checked_sub(amount)
            .ok_or_else(|| insufficient(entry.contract.total_supply))?;

        let fee = entry.mapping.bridge_fee_rate.fee_on(amount);
        let withdraw = amount.saturating_sub(fee);
        entry.contract.total_supply = total;
        entry.contract.circulating_supply = circulating;

        let record = BurnRecord {
            tx_hash: transaction_hash(TxKind::Burn, &self.salt, self.next_nonce(), symbol, holder),
            r_token_symbol: symbol.to_string(),
            holder: holder.to_string(),
            amount,
            fee,
            withdraw_amount: withdraw,
            target_network: target_network.to_string(),
            target_address: target_address.to_string(),
            block_number: self.next_block(),
            timestamp: Timestamp::now(),
            status: RecordStatus::Confirmed,
        };
        entry.burns.push(record.clone());

        tracing::debug!(
            symbol,
            holder,
            %amount,
            %fee,
            %withdraw,
            tx = %record.tx_hash,
            "burned"
        );
        Ok(record)
    }

    /// Change the fee rate and/or bridge range of a mapping.
    ///
    /// An update that would leave the minimum above the maximum is rejected
    /// and the mapping is left as it was.
    pub fn update_bridge_settings(
        &self,
        symbol: &str,
        update: BridgeSettingsUpdate,
    ) -> Result<(), LedgerError> {
        let entry = self.entry(symbol)?;
        let mut entry = entry.lock();

        let mut mapping = entry.mapping.clone();
        mapping.apply(&update);
        if mapping.min_bridge_amount > mapping.max_bridge_amount {
            return Err(LedgerError::InvertedBridgeRange {
                min: mapping.min_bridge_amount,
                max: mapping.max_bridge_amount,
            });
        }
        entry.mapping = mapping;
        tracing::info!(
            symbol,
            fee_rate = %entry.mapping.bridge_fee_rate,
            min = %entry.mapping.min_bridge_amount,
            max = %entry.mapping.max_bridge_amount,
            "bridge settings updated"
        );
        Ok(())
    }

    pub fn set_pause_status(&self, symbol: &str, paused: bool) -> Result<(), LedgerError> {
        let entry = self.entry(symbol)?;
        let mut entry = entry.lock();
        entry.contract.status = if paused {
            ContractStatus::Paused
        } else {
            ContractStatus::Active
        };
        tracing::info!(symbol, paused, "pause status changed");
        Ok(())
    }

    pub fn get_contract(&self, symbol: &str) -> Option<RTokenContract> {
        self.entry(symbol).ok().map(|e| e.lock().contract.clone())
    }

    pub fn get_bridge_mapping(&self, symbol: &str) -> Option<BridgeMapping> {
        self.entry(symbol).ok().map(|e| e.lock().mapping.clone())
    }

    /// Snapshot of every contract, ordered by symbol.
    pub fn list_contracts(&self) -> Vec<RTokenContract> {
        let entries: Vec<_> = self.tokens.read().values().cloned().collect();
        let mut contracts: Vec<_> = entries.iter().map(|e| e.lock().contract.clone()).collect();
        contracts.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        contracts
    }

    /// Mint records for a symbol, oldest first.
    pub fn mint_history(&self, symbol: &str) -> Result<Vec<MintRecord>, LedgerError> {
        Ok(self.entry(symbol)?.lock().mints.clone())
    }

    /// Burn records for a symbol, oldest first.
    pub fn burn_history(&self, symbol: &str) -> Result<Vec<BurnRecord>, LedgerError> {
        Ok(self.entry(symbol)?.lock().burns.clone())
    }

    pub fn summary(&self) -> LedgerSummary {
        let entries: Vec<_> = self.tokens.read().values().cloned().collect();
        entries.iter().fold(LedgerSummary::default(), |mut acc, e| {
            let e = e.lock();
            acc.contracts += 1;
            if !e.contract.status.is_active() {
                acc.paused += 1;
            }
            acc.mints += e.mints.len();
            acc.burns += e.burns.len();
            acc
        })
    }
}

impl Default for BridgeLedger {
    fn default() -> Self {
        Self::new(LedgerConfig::default())
    }
}
