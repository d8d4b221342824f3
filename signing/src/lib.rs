//! Generate keys, sign arbitrary messages, and deterministically verify signatures.
//!
//! Every supported algorithm is exposed as a [Context]: a stateless object that generates
//! [PrivateKey]s, derives [PublicKey]s, produces [Signature]s, and verifies them. Contexts are
//! selected by name through a [Registry] (which always has a default, `secp256k1`) and can be bound
//! to a single key with a [Signer].
//!
//! # Example
//! ```rust
//! use sawtooth_signing::{Config, Registry};
//!
//! // Build a registry with the built-in algorithms
//! let registry = Registry::from_config(Config::default()).unwrap();
//!
//! // Generate a new private key with the default algorithm (secp256k1)
//! let context = registry.default_context();
//! let private_key = context.new_random_private_key().unwrap();
//!
//! // Sign a message
//! let signer = registry.signer(None, private_key).unwrap();
//! let msg = b"hello, world!";
//! let signature = signer.sign(msg).unwrap();
//!
//! // Verify the signature
//! assert!(context.verify(&signature, msg, signer.public_key()).unwrap());
//! ```

use rand::{rngs::OsRng, RngCore};
use sawtooth_utils::from_hex;
use thiserror::Error;

pub mod ed25519;
mod keys;
pub use keys::{PrivateKey, PublicKey, Signature};
mod registry;
pub use registry::{Config, Registry};
mod sec1;
pub mod secp256k1;
pub mod secp256r1;
pub mod sha256;
mod signer;
pub use signer::Signer;

/// Errors that can occur when generating keys, signing, or verifying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid {0} private key")]
    InvalidKey(&'static str),
    #[error("malformed {0} public key")]
    MalformedKey(&'static str),
    #[error("malformed {0} signature")]
    MalformedSignature(&'static str),
    #[error("algorithm {0} is not registered")]
    UnknownAlgorithm(String),
    #[error("algorithm {0} is already registered")]
    DuplicateAlgorithm(String),
    #[error("entropy unavailable: {0}")]
    EntropyUnavailable(String),
    #[error("invalid hex")]
    InvalidHex,
    #[error("key for {found} used with {expected} context")]
    AlgorithmMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

/// Maximum number of candidates drawn from an entropy source before giving up on
/// finding a valid private key.
pub(crate) const MAX_KEY_GENERATION_ATTEMPTS: usize = 64;

/// An algorithm-specific implementation of key generation, signing, and verification.
///
/// Implementations hold no mutable state and are safe to share across threads (usually as
/// `Arc<dyn Context>`). Keys carry the name of the algorithm that created them and are rejected
/// (with [Error::AlgorithmMismatch]) by any other context.
pub trait Context: Send + Sync + 'static {
    /// Stable identifier used for registry lookup and persisted alongside signatures so that a
    /// future verifier can select the matching context.
    fn algorithm_name(&self) -> &'static str;

    /// Import a [PrivateKey] from its raw encoding, validating it for this algorithm.
    fn private_key_from_bytes(&self, bytes: &[u8]) -> Result<PrivateKey, Error>;

    /// Import a [PublicKey] from its raw encoding, validating it for this algorithm.
    fn public_key_from_bytes(&self, bytes: &[u8]) -> Result<PublicKey, Error>;

    /// Create a fresh [PrivateKey] from the supplied source of randomness.
    ///
    /// The source must be cryptographically secure outside of tests. If it fails (or never yields a
    /// valid key), [Error::EntropyUnavailable] is returned.
    fn random_private_key(&self, rng: &mut dyn RngCore) -> Result<PrivateKey, Error>;

    /// Derive the [PublicKey] corresponding to a [PrivateKey].
    ///
    /// Derivation is deterministic: the same private key always yields the same public key.
    fn public_key(&self, private_key: &PrivateKey) -> Result<PublicKey, Error>;

    /// Sign a message with the given [PrivateKey].
    ///
    /// The message should not be hashed prior to calling this function. If a particular scheme
    /// requires a payload to be hashed before it is signed, it will be done internally.
    ///
    /// Signing is deterministic: signing the same message with the same key always produces
    /// the same [Signature].
    fn sign(&self, message: &[u8], private_key: &PrivateKey) -> Result<Signature, Error>;

    /// Verify that a signature is valid over a given message for the given [PublicKey].
    ///
    /// Returns `Ok(false)` if the signature is well-formed but does not match. Returns an error only
    /// if the signature cannot be decoded at all (or the key belongs to another algorithm).
    fn verify(
        &self,
        signature: &[u8],
        message: &[u8],
        public_key: &PublicKey,
    ) -> Result<bool, Error>;

    /// Create a fresh [PrivateKey] using the operating system's source of randomness.
    fn new_random_private_key(&self) -> Result<PrivateKey, Error> {
        self.random_private_key(&mut OsRng)
    }

    /// Import a [PrivateKey] from a hex string.
    fn private_key_from_hex(&self, hex: &str) -> Result<PrivateKey, Error> {
        let bytes = zeroize::Zeroizing::new(from_hex(hex).ok_or(Error::InvalidHex)?);
        self.private_key_from_bytes(&bytes)
    }

    /// Import a [PublicKey] from a hex string.
    fn public_key_from_hex(&self, hex: &str) -> Result<PublicKey, Error> {
        let bytes = from_hex(hex).ok_or(Error::InvalidHex)?;
        self.public_key_from_bytes(&bytes)
    }
}

/// Ensure a key was produced by the context identified by `expected`.
pub(crate) fn check_algorithm(expected: &'static str, found: &'static str) -> Result<(), Error> {
    if expected != found {
        return Err(Error::AlgorithmMismatch { expected, found });
    }
    Ok(())
}

/// Draw candidate private keys from `rng` until `accept` returns one, giving up after
/// [MAX_KEY_GENERATION_ATTEMPTS].
pub(crate) fn generate_with<const N: usize>(
    algorithm: &'static str,
    rng: &mut dyn RngCore,
    mut accept: impl FnMut(&[u8; N]) -> bool,
) -> Result<PrivateKey, Error> {
    let mut candidate = zeroize::Zeroizing::new([0u8; N]);
    for attempt in 0..MAX_KEY_GENERATION_ATTEMPTS {
        rng.try_fill_bytes(&mut candidate[..])
            .map_err(|err| Error::EntropyUnavailable(err.to_string()))?;
        if accept(&candidate) {
            return Ok(PrivateKey::new(algorithm, candidate.to_vec()));
        }
        tracing::trace!(algorithm, attempt, "rejected private key candidate");
    }
    Err(Error::EntropyUnavailable(format!(
        "no valid {algorithm} key after {MAX_KEY_GENERATION_ATTEMPTS} attempts"
    )))
}
