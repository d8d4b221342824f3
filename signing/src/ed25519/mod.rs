//! Ed25519 implementation of the [crate::Context] trait.
//!
//! This implementation uses the `ed25519-consensus` crate to adhere to a strict
//! set of validation rules for Ed25519 signatures (which is necessary for
//! stability when signatures are checked by many independent verifiers). You can
//! read more about this [here](https://hdevalence.ca/blog/2020-10-04-its-25519am).
//!
//! Unlike the ECDSA contexts, messages are passed to the scheme unhashed (Ed25519
//! hashes internally with SHA-512) and every 32-byte seed is a valid private key.

mod scheme;

pub use scheme::{
    Ed25519, ALGORITHM_NAME, PRIVATE_KEY_LENGTH, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH,
};
