use proptest::prelude::*;

use rbridge_ledger::{BridgeLedger, BridgeSettingsUpdate, LedgerConfig, LedgerError, OriginalToken};
use rbridge_types::{FeeRate, TokenAmount};

const SCALE: u128 = 1_000_000_000_000_000_000;

fn ledger(fee_ppm: u32) -> BridgeLedger {
    let ledger = BridgeLedger::with_salt(LedgerConfig::default(), [1u8; 32]);
    ledger
        .deploy_rtoken("rTST", "Test", 18, OriginalToken::new("TST", ["ethereum"]))
        .unwrap();
    ledger
        .update_bridge_settings(
            "rTST",
            BridgeSettingsUpdate {
                bridge_fee_rate: FeeRate::from_ppm(fee_ppm),
                ..Default::default()
            },
        )
        .unwrap();
    ledger
}

/// Amounts within the default bridge range [0.000001, 1_000_000].
fn in_range_amount() -> impl Strategy<Value = TokenAmount> {
    (SCALE / 1_000_000..=1_000_000 * SCALE).prop_map(TokenAmount::from_raw)
}

proptest! {
    /// Supply grows by exactly amount - fee on every mint.
    #[test]
    fn mint_conserves_supply(fee_ppm in 0u32..=1_000_000, amounts in prop::collection::vec(in_range_amount(), 1..8)) {
        let ledger = ledger(fee_ppm);
        let rate = FeeRate::from_ppm(fee_ppm).unwrap();
        for amount in amounts {
            let before = ledger.get_contract("rTST").unwrap();
            let record = ledger.mint("rTST", "0xabc", amount, "ethereum", "0xsrc").unwrap();
            let after = ledger.get_contract("rTST").unwrap();

            let expected = amount.checked_sub(rate.fee_on(amount)).unwrap();
            prop_assert_eq!(record.credited_amount, expected);
            prop_assert_eq!(record.fee.checked_add(record.credited_amount), Some(amount));
            prop_assert_eq!(after.total_supply, before.total_supply.checked_add(expected).unwrap());
            prop_assert_eq!(after.circulating_supply, before.circulating_supply.checked_add(expected).unwrap());
        }
    }

    /// Supply shrinks by the gross amount on every burn; the holder gets amount - fee.
    #[test]
    fn burn_conserves_supply(fee_ppm in 0u32..=1_000_000, deposit in in_range_amount(), frac in 0u128..=100) {
        let ledger = ledger(fee_ppm);
        let rate = FeeRate::from_ppm(fee_ppm).unwrap();
        ledger.mint("rTST", "0xabc", deposit, "ethereum", "0xsrc").unwrap();

        let before = ledger.get_contract("rTST").unwrap();
        let amount = TokenAmount::from_raw(before.circulating_supply.raw() / 100 * frac);
        let record = ledger.burn("rTST", "0xabc", amount, "ethereum", "0xdest").unwrap();
        let after = ledger.get_contract("rTST").unwrap();

        prop_assert_eq!(record.withdraw_amount, amount.checked_sub(rate.fee_on(amount)).unwrap());
        prop_assert_eq!(after.total_supply, before.total_supply.checked_sub(amount).unwrap());
        prop_assert_eq!(after.circulating_supply, before.circulating_supply.checked_sub(amount).unwrap());
    }

    /// Out-of-range mints fail and change nothing.
    #[test]
    fn out_of_range_mint_rejected(raw in prop_oneof![0u128..SCALE / 1_000_000, (1_000_000 * SCALE + 1)..u128::MAX]) {
        let ledger = ledger(1_000);
        let err = ledger.mint("rTST", "0xabc", TokenAmount::from_raw(raw), "ethereum", "0xsrc").unwrap_err();
        let is_out_of_range = matches!(err, LedgerError::AmountOutOfRange { .. });
        prop_assert!(is_out_of_range);
        prop_assert_eq!(ledger.get_contract("rTST").unwrap().total_supply, TokenAmount::ZERO);
        prop_assert_eq!(ledger.summary().mints, 0);
    }

    /// Burning more than the circulating supply always fails cleanly.
    #[test]
    fn overdraw_rejected(deposit in in_range_amount(), extra in 1u128..SCALE) {
        let ledger = ledger(1_000);
        ledger.mint("rTST", "0xabc", deposit, "ethereum", "0xsrc").unwrap();
        let supply = ledger.get_contract("rTST").unwrap().circulating_supply;
        let amount = TokenAmount::from_raw(supply.raw() + extra);

        let err = ledger.burn("rTST", "0xabc", amount, "ethereum", "0xdest").unwrap_err();
        prop_assert_eq!(err, LedgerError::InsufficientSupply { requested: amount, available: supply });
        prop_assert_eq!(ledger.get_contract("rTST").unwrap().circulating_supply, supply);
    }
}
