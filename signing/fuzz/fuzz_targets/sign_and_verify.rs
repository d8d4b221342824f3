#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rand::{rngs::StdRng, SeedableRng};
use sawtooth_signing::{Config, Registry};

#[derive(Debug, Arbitrary)]
pub struct FuzzInput {
    pub seed: u64,
    pub algorithm: u8,
    pub message: Vec<u8>,
    pub flip: (usize, u8),
}

fn fuzz(input: FuzzInput) {
    let registry = Registry::from_config(Config::default()).unwrap();
    let algorithms: Vec<_> = registry.algorithms().map(str::to_string).collect();
    let name = &algorithms[input.algorithm as usize % algorithms.len()];
    let context = registry.context(name).unwrap();

    let mut rng = StdRng::seed_from_u64(input.seed);
    let private_key = context.random_private_key(&mut rng).unwrap();
    let signer = registry.signer(Some(name), private_key).unwrap();

    // Signing is deterministic
    let signature = signer.sign(&input.message).unwrap();
    assert_eq!(signature, signer.sign(&input.message).unwrap());
    assert!(signer.verify(&signature, &input.message).unwrap());

    // Any single-bit change to the signature invalidates it
    let (index, bit) = input.flip;
    let mut tampered = signature.to_vec();
    let index = index % tampered.len();
    tampered[index] ^= 1 << (bit % 8);
    assert!(!signer.verify(&tampered, &input.message).unwrap());
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
