use criterion::{criterion_group, BatchSize, Criterion};
use rand::thread_rng;
use sawtooth_signing::{ed25519::Ed25519, Context as _};
use std::hint::black_box;

fn benchmark_public_key_derivation(c: &mut Criterion) {
    c.bench_function(module_path!(), |b| {
        b.iter_batched(
            || Ed25519.random_private_key(&mut thread_rng()).unwrap(),
            |private_key| {
                black_box(Ed25519.public_key(&private_key).unwrap());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, benchmark_public_key_derivation);
