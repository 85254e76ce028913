use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rbridge_crypto::{validate_address, AddressDeriver, MasterSeed};
use rbridge_types::Network;

fn derive_evm_bench(c: &mut Criterion) {
    let deriver = AddressDeriver::new(MasterSeed::new(b"bench seed".to_vec()));

    c.bench_function("derive_evm", |b| {
        b.iter(|| deriver.derive(black_box("USDT"), black_box(Network::Ethereum)))
    });
}

fn derive_all_bench(c: &mut Criterion) {
    let deriver = AddressDeriver::new(MasterSeed::new(b"bench seed".to_vec()));
    let networks: Vec<&str> = Network::ALL.iter().map(|n| n.as_str()).collect();

    c.bench_function("derive_all_networks", |b| {
        b.iter(|| deriver.derive_all(black_box("USDT"), &networks))
    });
}

fn validate_bench(c: &mut Criterion) {
    c.bench_function("validate_evm", |b| {
        b.iter(|| {
            validate_address(
                black_box("0x1234567890123456789012345678901234567890"),
                black_box("ethereum"),
            )
        })
    });
}

criterion_group!(benches, derive_evm_bench, derive_all_bench, validate_bench);
criterion_main!(benches);
