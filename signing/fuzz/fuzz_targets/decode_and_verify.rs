#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sawtooth_signing::{ed25519, secp256k1, secp256r1, Context, Error};

#[derive(Debug, Arbitrary)]
pub struct FuzzInput {
    pub algorithm: u8,
    pub private_key: Vec<u8>,
    pub public_key: Vec<u8>,
    pub signature: Vec<u8>,
    pub message: Vec<u8>,
    pub hex: String,
}

fn context(selector: u8) -> &'static dyn Context {
    match selector % 3 {
        0 => &secp256k1::Secp256k1,
        1 => &secp256r1::Secp256r1,
        _ => &ed25519::Ed25519,
    }
}

fn fuzz(input: FuzzInput) {
    let context = context(input.algorithm);

    // Hex import must fail cleanly on arbitrary text
    let _ = context.private_key_from_hex(&input.hex);
    let _ = context.public_key_from_hex(&input.hex);

    if let Ok(private_key) = context.private_key_from_bytes(&input.private_key) {
        assert_eq!(private_key.as_ref(), input.private_key.as_slice());
        let public_key = context.public_key(&private_key).unwrap();
        let signature = context.sign(&input.message, &private_key).unwrap();
        assert!(context
            .verify(&signature, &input.message, &public_key)
            .unwrap());
    }

    let Ok(public_key) = context.public_key_from_bytes(&input.public_key) else {
        return;
    };
    match context.verify(&input.signature, &input.message, &public_key) {
        Ok(_) => {}
        Err(Error::MalformedSignature(_)) => {}
        Err(err) => panic!("unexpected error: {err}"),
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
