//! Operations behind the `keytool` binary.
//!
//! Every function takes hex-encoded keys and signatures and returns hex, so the binary only needs
//! to parse arguments and print results.

use sawtooth_signing::{Context, Registry, Signature, Signer};
use sawtooth_utils::from_hex;
use std::{fmt, sync::Arc};
use thiserror::Error;
use tracing::debug;
use zeroize::Zeroizing;

pub const ALGORITHMS_CMD: &str = "algorithms";
pub const KEYGEN_CMD: &str = "keygen";
pub const PUBKEY_CMD: &str = "pubkey";
pub const SIGN_CMD: &str = "sign";
pub const VERIFY_CMD: &str = "verify";

/// Errors that can occur while running a command.
#[derive(Error, Debug)]
pub enum Error {
    #[error("signing error: {0}")]
    Signing(#[from] sawtooth_signing::Error),
    #[error("invalid hex for {0}")]
    InvalidHex(&'static str),
}

/// A freshly generated key pair, hex encoded.
///
/// The private key hex is cleared from memory when the pair is dropped.
pub struct KeyPair {
    pub algorithm: &'static str,
    pub private_key: Zeroizing<String>,
    pub public_key: String,
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("algorithm", &self.algorithm)
            .field("private_key", &"[REDACTED]")
            .field("public_key", &self.public_key)
            .finish()
    }
}

/// Decode a message argument, either as UTF-8 text or (when `hex` is set) as hex.
pub fn message_bytes(message: &str, hex: bool) -> Result<Vec<u8>, Error> {
    if !hex {
        return Ok(message.as_bytes().to_vec());
    }
    from_hex(message).ok_or(Error::InvalidHex("message"))
}

fn context(registry: &Registry, algorithm: Option<&str>) -> Result<Arc<dyn Context>, Error> {
    Ok(match algorithm {
        Some(name) => registry.context(name)?,
        None => registry.default_context(),
    })
}

/// Names of every algorithm the registry knows about.
pub fn algorithms(registry: &Registry) -> Vec<String> {
    registry.algorithms().map(str::to_string).collect()
}

/// Generate a random key pair for `algorithm` (or the registry default).
pub fn keygen(registry: &Registry, algorithm: Option<&str>) -> Result<KeyPair, Error> {
    let context = context(registry, algorithm)?;
    let private_key = context.new_random_private_key()?;
    let public_key = context.public_key(&private_key)?;
    debug!(algorithm = context.algorithm_name(), "generated key pair");
    Ok(KeyPair {
        algorithm: context.algorithm_name(),
        private_key: private_key.to_hex(),
        public_key: public_key.to_hex(),
    })
}

/// Derive the hex public key for a hex private key.
pub fn pubkey(
    registry: &Registry,
    algorithm: Option<&str>,
    private_key: &str,
) -> Result<String, Error> {
    let context = context(registry, algorithm)?;
    let private_key = context.private_key_from_hex(private_key)?;
    Ok(context.public_key(&private_key)?.to_hex())
}

/// Sign `message` with a hex private key, returning the hex signature.
pub fn sign(
    registry: &Registry,
    algorithm: Option<&str>,
    private_key: &str,
    message: &[u8],
) -> Result<String, Error> {
    let context = context(registry, algorithm)?;
    let private_key = context.private_key_from_hex(private_key)?;
    let signer = Signer::new(context, private_key)?;
    debug!(
        algorithm = signer.algorithm_name(),
        public_key = %signer.public_key(),
        len = message.len(),
        "signing message"
    );
    Ok(signer.sign(message)?.to_hex())
}

/// Check a hex signature over `message` against a hex public key.
pub fn verify(
    registry: &Registry,
    algorithm: Option<&str>,
    public_key: &str,
    signature: &str,
    message: &[u8],
) -> Result<bool, Error> {
    let context = context(registry, algorithm)?;
    let public_key = context.public_key_from_hex(public_key)?;
    let signature = Signature::from_hex(signature).ok_or(Error::InvalidHex("signature"))?;
    Ok(context.verify(&signature, message, &public_key)?)
}
