use criterion::{criterion_group, BatchSize, Criterion};
use rand::{thread_rng, Rng};
use sawtooth_signing::{secp256r1::Secp256r1, Context as _};
use std::hint::black_box;

fn benchmark_signature_generation(c: &mut Criterion) {
    for msg_len in [32, 1024] {
        let mut msg = vec![0u8; msg_len];
        thread_rng().fill(msg.as_mut_slice());
        c.bench_function(&format!("{}/msg_len={}", module_path!(), msg_len), |b| {
            b.iter_batched(
                || Secp256r1.random_private_key(&mut thread_rng()).unwrap(),
                |private_key| {
                    black_box(Secp256r1.sign(&msg, &private_key).unwrap());
                },
                BatchSize::SmallInput,
            );
        });
    }
}

criterion_group!(benches, benchmark_signature_generation);
