#![no_main]

use libfuzzer_sys::fuzz_target;
use rbridge_types::{BridgeRatio, FeeRate, TokenAmount};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    // Anything that parses must print back to a string that parses to the same value.
    if let Ok(amount) = s.parse::<TokenAmount>() {
        let printed = amount.to_string();
        assert_eq!(printed.parse::<TokenAmount>().ok(), Some(amount));

        if let Ok(rate) = s.parse::<FeeRate>() {
            assert!(rate.fee_on(amount) <= amount);
        }
    }
    let _ = s.parse::<FeeRate>();
    let _ = s.parse::<BridgeRatio>();

    // JSON decoding goes through the same string parser.
    let _ = serde_json::from_slice::<TokenAmount>(data);
});
