use criterion::{criterion_group, BatchSize, Criterion};
use rand::{thread_rng, Rng};
use sawtooth_signing::{secp256r1::Secp256r1, Context as _};
use std::hint::black_box;

fn benchmark_signature_verification(c: &mut Criterion) {
    let mut msg = [0u8; 32];
    thread_rng().fill(&mut msg);
    c.bench_function(&format!("{}/msg_len={}", module_path!(), msg.len()), |b| {
        b.iter_batched(
            || {
                let private_key = Secp256r1.random_private_key(&mut thread_rng()).unwrap();
                let public_key = Secp256r1.public_key(&private_key).unwrap();
                let signature = Secp256r1.sign(&msg, &private_key).unwrap();
                (public_key, signature)
            },
            |(public_key, signature)| {
                black_box(Secp256r1.verify(&signature, &msg, &public_key).unwrap());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = benchmark_signature_verification
}
