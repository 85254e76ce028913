//! End-to-end bridge flows across derivation and the ledger.

use std::sync::Arc;
use std::thread;

use rbridge_crypto::{AddressDeriver, MasterSeed};
use rbridge_ledger::{
    BridgeLedger, BridgeService, BridgeSettingsUpdate, ContractStatus, DepositEvent,
    LedgerConfig, LedgerError, OriginalToken, WithdrawRequest,
};
use rbridge_types::{Network, TokenAmount};

fn amt(s: &str) -> TokenAmount {
    s.parse().unwrap()
}

fn deploy_rtst(ledger: &BridgeLedger) {
    ledger
        .deploy_rtoken(
            "rTST",
            "Test",
            18,
            OriginalToken::new("TST", ["ethereum"]),
        )
        .unwrap();
}

#[test]
fn deploy_mint_burn_scenario() {
    let ledger = BridgeLedger::new(LedgerConfig::default());
    deploy_rtst(&ledger);

    let mint = ledger
        .mint("rTST", "0xabc", amt("100"), "ethereum", "0xsrc")
        .unwrap();
    assert_eq!(mint.fee, amt("0.1"));
    assert_eq!(mint.credited_amount, amt("99.9"));
    assert_eq!(ledger.get_contract("rTST").unwrap().total_supply, amt("99.9"));

    let burn = ledger
        .burn("rTST", "0xabc", amt("50"), "ethereum", "0xdest")
        .unwrap();
    assert_eq!(burn.fee, amt("0.05"));
    assert_eq!(burn.withdraw_amount, amt("49.95"));
    assert_eq!(ledger.get_contract("rTST").unwrap().total_supply, amt("49.9"));

    let summary = ledger.summary();
    assert_eq!((summary.contracts, summary.mints, summary.burns), (1, 1, 1));
}

#[test]
fn settings_update_scoping() {
    let ledger = BridgeLedger::default();
    deploy_rtst(&ledger);
    let before = ledger.get_bridge_mapping("rTST").unwrap();

    let update: BridgeSettingsUpdate =
        serde_json::from_str(r#"{"bridgeFeeRate": "0.002", "notAField": 1}"#).unwrap();
    ledger.update_bridge_settings("rTST", update).unwrap();

    let after = ledger.get_bridge_mapping("rTST").unwrap();
    assert_eq!(after.bridge_fee_rate.ppm(), 2_000);
    assert_eq!(after.min_bridge_amount, before.min_bridge_amount);
    assert_eq!(after.max_bridge_amount, before.max_bridge_amount);
    assert_eq!(after.bridge_ratio, before.bridge_ratio);

    let json = serde_json::to_value(&after).unwrap();
    assert!(json.get("notAField").is_none());
    assert_eq!(json["bridgeFeeRate"], "0.002");
}

#[test]
fn range_update_is_enforced_by_mint() {
    let ledger = BridgeLedger::default();
    deploy_rtst(&ledger);

    let update: BridgeSettingsUpdate =
        serde_json::from_str(r#"{"minBridgeAmount": "5", "maxBridgeAmount": "20"}"#).unwrap();
    ledger.update_bridge_settings("rTST", update).unwrap();
    let mapping = ledger.get_bridge_mapping("rTST").unwrap();
    assert_eq!(mapping.min_bridge_amount, amt("5"));
    assert_eq!(mapping.max_bridge_amount, amt("20"));

    assert_eq!(
        ledger.mint("rTST", "0xabc", amt("100"), "ethereum", "0xsrc"),
        Err(LedgerError::AmountOutOfRange {
            amount: amt("100"),
            min: amt("5"),
            max: amt("20"),
        })
    );
    assert!(matches!(
        ledger.mint("rTST", "0xabc", amt("4.99"), "ethereum", "0xsrc"),
        Err(LedgerError::AmountOutOfRange { .. })
    ));
    let mint = ledger.mint("rTST", "0xabc", amt("20"), "ethereum", "0xsrc").unwrap();
    assert_eq!(mint.credited_amount, amt("19.98"));

    let inverted: BridgeSettingsUpdate =
        serde_json::from_str(r#"{"minBridgeAmount": "30"}"#).unwrap();
    assert!(matches!(
        ledger.update_bridge_settings("rTST", inverted),
        Err(LedgerError::InvertedBridgeRange { .. })
    ));
    assert_eq!(ledger.get_bridge_mapping("rTST").unwrap(), mapping);
}

#[test]
fn pause_round_trip() {
    let ledger = BridgeLedger::default();
    deploy_rtst(&ledger);

    ledger.set_pause_status("rTST", true).unwrap();
    assert_eq!(ledger.get_contract("rTST").unwrap().status, ContractStatus::Paused);
    assert!(matches!(
        ledger.mint("rTST", "0xabc", amt("1"), "ethereum", "0xsrc"),
        Err(LedgerError::ContractPaused(_))
    ));

    ledger.set_pause_status("rTST", false).unwrap();
    assert_eq!(ledger.get_contract("rTST").unwrap().status, ContractStatus::Active);
}

#[test]
fn concurrent_mints_on_one_symbol_sum_exactly() {
    let ledger = Arc::new(BridgeLedger::default());
    deploy_rtst(&ledger);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let ledger = Arc::clone(&ledger);
            thread::spawn(move || {
                for j in 0..25 {
                    ledger
                        .mint("rTST", &format!("0x{i}"), amt("10"), "ethereum", &format!("0x{i}{j}"))
                        .unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    // 200 mints of 10, each crediting 9.99
    let contract = ledger.get_contract("rTST").unwrap();
    assert_eq!(contract.total_supply, amt("1998"));
    assert_eq!(contract.circulating_supply, amt("1998"));

    let history = ledger.mint_history("rTST").unwrap();
    assert_eq!(history.len(), 200);
    let mut blocks: Vec<_> = history.iter().map(|r| r.block_number).collect();
    blocks.sort_unstable();
    blocks.dedup();
    assert_eq!(blocks.len(), 200, "block numbers must be unique");
}

#[test]
fn concurrent_symbols_are_independent() {
    let ledger = Arc::new(BridgeLedger::default());
    for sym in ["rA", "rB", "rC"] {
        ledger
            .deploy_rtoken(sym, sym, 18, OriginalToken::new(&sym[1..], ["ethereum"]))
            .unwrap();
    }

    thread::scope(|s| {
        for sym in ["rA", "rB", "rC"] {
            let ledger = &ledger;
            s.spawn(move || {
                for _ in 0..50 {
                    ledger.mint(sym, "0xabc", amt("2"), "ethereum", "0xsrc").unwrap();
                }
                for _ in 0..10 {
                    ledger.burn(sym, "0xabc", amt("1"), "ethereum", "0xdest").unwrap();
                }
            });
        }
    });

    for contract in ledger.list_contracts() {
        // 50 * 1.998 - 10
        assert_eq!(contract.total_supply, amt("89.9"), "{}", contract.symbol);
    }
}

#[test]
fn full_bridge_round_trip_through_service() {
    let deriver = AddressDeriver::new(MasterSeed::new(b"integration seed".to_vec()));
    let service = BridgeService::new(deriver, BridgeLedger::default());
    service
        .ledger()
        .deploy_rtoken(
            "rSOL",
            "Wrapped SOL",
            9,
            OriginalToken::new("SOL", ["solana"]),
        )
        .unwrap();

    let addresses = service.deposit_addresses("rSOL").unwrap();
    let sol = &addresses[&Network::Solana];
    assert!(sol.is_valid);
    assert_eq!(sol.contract_address, Some("BridgeContract123456789012345678901234567890"));

    let mint = service
        .deposit(&DepositEvent {
            r_token_symbol: "rSOL".into(),
            original_symbol: "SOL".into(),
            network: "solana".into(),
            deposit_address: sol.address.clone(),
            recipient: "0xuser".into(),
            amount: amt("20"),
            source_tx_hash: "5xSolanaSig".into(),
        })
        .unwrap();
    assert_eq!(mint.credited_amount, amt("19.98"));

    let burn = service
        .withdraw(&WithdrawRequest {
            r_token_symbol: "rSOL".into(),
            holder: "0xuser".into(),
            amount: amt("19.98"),
            target_network: "solana".into(),
            target_address: "a".repeat(44),
        })
        .unwrap();
    assert_eq!(burn.withdraw_amount, amt("19.96002"));
    assert_eq!(
        service.ledger().get_contract("rSOL").unwrap().circulating_supply,
        TokenAmount::ZERO
    );
}
