//! SHA-256 message digest applied by the ECDSA contexts before signing and verification.

use sha2::{Digest as _, Sha256};

/// Size of a SHA-256 digest in bytes.
pub const DIGEST_LENGTH: usize = 32;

/// Hash a message with SHA-256.
pub fn hash(message: &[u8]) -> [u8; DIGEST_LENGTH] {
    Sha256::digest(message).into()
}
