#![no_main]

use libfuzzer_sys::fuzz_target;
use rbridge_types::Network;

fuzz_target!(|data: &[u8]| {
    // First byte picks the network, the rest is the candidate address.
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let Ok(address) = std::str::from_utf8(rest) else {
        return;
    };

    let network = Network::ALL[selector as usize % Network::ALL.len()];
    let typed = rbridge_crypto::validate_for(address, network);
    assert_eq!(typed, rbridge_crypto::validate_address(address, network.as_str()));

    // Must never panic on arbitrary network names either.
    let _ = rbridge_crypto::validate_address(address, address);
    let _ = address.parse::<rbridge_types::TxHash>();
});
