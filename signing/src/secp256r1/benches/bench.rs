use criterion::criterion_main;

mod public_key_derivation;
mod signature_generation;
mod signature_verification;

criterion_main!(
    signature_generation::benches,
    signature_verification::benches,
    public_key_derivation::benches,
);
