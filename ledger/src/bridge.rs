//! Deposit and withdrawal flow across derivation and the ledger.
//!
//! A deposit is only minted if it is the rToken's original asset, arrived on
//! a supported network, and landed at the address the deriver assigns to
//! (original token, network). A withdrawal is only burned if its
//! target address is well-formed for a supported network.

use std::collections::BTreeMap;

use rbridge_crypto::{validate_for, AddressDeriver, DerivationError, DerivedAddress};
use rbridge_types::{Network, TokenAmount};
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::ledger::BridgeLedger;
use crate::record::{BurnRecord, MintRecord};

/// An observed deposit of an original token on some network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositEvent {
    pub r_token_symbol: String,
    pub original_symbol: String,
    pub network: String,
    /// Where the deposit was received.
    pub deposit_address: String,
    /// Who gets the minted rTokens.
    pub recipient: String,
    pub amount: TokenAmount,
    pub source_tx_hash: String,
}

/// A request to redeem rTokens on an original network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawRequest {
    pub r_token_symbol: String,
    pub holder: String,
    pub amount: TokenAmount,
    pub target_network: String,
    pub target_address: String,
}

/// Derivation plus ledger, wired together.
pub struct BridgeService {
    deriver: AddressDeriver,
    ledger: BridgeLedger,
}

impl BridgeService {
    pub fn new(deriver: AddressDeriver, ledger: BridgeLedger) -> Self {
        Self { deriver, ledger }
    }

    pub fn deriver(&self) -> &AddressDeriver {
        &self.deriver
    }

    pub fn ledger(&self) -> &BridgeLedger {
        &self.ledger
    }

    /// Deposit addresses for every network an rToken can be bridged from.
    pub fn deposit_addresses(
        &self,
        r_token_symbol: &str,
    ) -> Result<BTreeMap<Network, DerivedAddress>, LedgerError> {
        let mapping = self
            .ledger
            .get_bridge_mapping(r_token_symbol)
            .ok_or_else(|| LedgerError::UnknownToken(r_token_symbol.to_string()))?;
        let networks: Vec<&String> = mapping.supported_networks.iter().collect();
        Ok(self.deriver.derive_all(&mapping.original_symbol, &networks)?)
    }

    /// Mint for a deposit of the rToken's original asset, received on one of
    /// its supported networks at the derived deposit address.
    pub fn deposit(&self, event: &DepositEvent) -> Result<MintRecord, LedgerError> {
        let mapping = self
            .ledger
            .get_bridge_mapping(&event.r_token_symbol)
            .ok_or_else(|| LedgerError::UnknownToken(event.r_token_symbol.clone()))?;
        if event.original_symbol != mapping.original_symbol {
            return Err(LedgerError::OriginalTokenMismatch {
                symbol: event.r_token_symbol.clone(),
                expected: mapping.original_symbol,
                got: event.original_symbol.clone(),
            });
        }
        if !mapping.supports(&event.network) {
            return Err(LedgerError::UnsupportedSourceNetwork {
                symbol: event.r_token_symbol.clone(),
                network: event.network.clone(),
            });
        }

        let expected = self
            .deriver
            .derive_address(&event.original_symbol, &event.network)?;
        if expected.address != event.deposit_address {
            return Err(LedgerError::DepositAddressMismatch {
                symbol: event.original_symbol.clone(),
                network: event.network.clone(),
                address: event.deposit_address.clone(),
            });
        }

        self.ledger.mint(
            &event.r_token_symbol,
            &event.recipient,
            event.amount,
            &event.network,
            &event.source_tx_hash,
        )
    }

    pub fn withdraw(&self, request: &WithdrawRequest) -> Result<BurnRecord, LedgerError> {
        let network = request
            .target_network
            .parse::<Network>()
            .map_err(|_| DerivationError::UnsupportedNetwork(request.target_network.clone()))?;
        if !validate_for(&request.target_address, network) {
            return Err(LedgerError::InvalidTargetAddress {
                network: request.target_network.clone(),
                address: request.target_address.clone(),
            });
        }

        self.ledger.burn(
            &request.r_token_symbol,
            &request.holder,
            request.amount,
            &request.target_network,
            &request.target_address,
        )
    }
}
