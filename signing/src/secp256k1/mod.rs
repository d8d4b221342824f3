//! ECDSA over secp256k1, the default [crate::Context].
//!
//! This implementation operates over public keys in compressed form (SEC 1, Version 2.0, Section 2.3.3), hashes
//! messages with SHA-256 before signing, generates deterministic signatures as specified in
//! [RFC 6979](https://datatracker.ietf.org/doc/html/rfc6979), and enforces signatures are normalized according to
//! [BIP 62](https://github.com/bitcoin/bips/blob/master/bip-0062.mediawiki#low-s-values-in-signatures).
//!
//! Signatures are encoded as 64-byte compact `r || s` (not DER).
//!
//! # Example
//! ```rust
//! use sawtooth_signing::{secp256k1::Secp256k1, Context};
//!
//! // Generate a new private key
//! let context = Secp256k1;
//! let private_key = context.new_random_private_key().unwrap();
//! let public_key = context.public_key(&private_key).unwrap();
//!
//! // Sign a message
//! let msg = b"hello, world!";
//! let signature = context.sign(msg, &private_key).unwrap();
//!
//! // Verify the signature
//! assert!(context.verify(&signature, msg, &public_key).unwrap());
//! ```

mod scheme;

pub use scheme::{
    Secp256k1, ALGORITHM_NAME, PRIVATE_KEY_LENGTH, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH,
};
