//! ECDSA over secp256r1 (NIST P-256).
//!
//! Follows the same rules as [crate::secp256k1]: compressed SEC 1 public keys, SHA-256 message digests,
//! [RFC 6979](https://datatracker.ietf.org/doc/html/rfc6979) nonces, and low-S normalized 64-byte `r || s`
//! signatures.

mod scheme;

pub use scheme::{
    Secp256r1, ALGORITHM_NAME, PRIVATE_KEY_LENGTH, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH,
};
