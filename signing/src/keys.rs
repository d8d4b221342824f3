//! Algorithm-tagged key and signature values.
//!
//! Keys are created by a [crate::Context], which validates the raw encoding before handing one
//! out. Each value remembers the name of the algorithm it belongs to so that a context can reject
//! keys produced by another algorithm.

use sawtooth_utils::{from_hex, hex};
use std::{
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher},
    ops::Deref,
};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Constant-time equality comparison for byte slices.
///
/// XORs all bytes together and checks if the result is zero.
#[inline]
fn ct_eq_bytes(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

/// Secret key material for a single algorithm.
///
/// The raw bytes are zeroized when the key is dropped and are never printed by [Debug].
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    #[zeroize(skip)]
    algorithm: &'static str,
    raw: Vec<u8>,
}

impl PrivateKey {
    /// Wrap raw key material for `algorithm`.
    ///
    /// This does not validate `raw`: it is intended for [crate::Context] implementations, which
    /// must check the encoding before calling it (and again whenever the key is used).
    pub fn new(algorithm: &'static str, raw: Vec<u8>) -> Self {
        Self { algorithm, raw }
    }

    /// Name of the algorithm this key belongs to.
    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm
    }

    /// Lower-case hex encoding of the raw key, cleared from memory when dropped.
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex(&self.raw))
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.algorithm == other.algorithm && ct_eq_bytes(&self.raw, &other.raw)
    }
}

impl Eq for PrivateKey {}

impl AsRef<[u8]> for PrivateKey {
    fn as_ref(&self) -> &[u8] {
        &self.raw
    }
}

impl Deref for PrivateKey {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.raw
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("algorithm", &self.algorithm)
            .field("raw", &"[REDACTED]")
            .finish()
    }
}

/// A compressed public key for a single algorithm.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PublicKey {
    algorithm: &'static str,
    raw: Vec<u8>,
}

impl PublicKey {
    /// Wrap a raw (compressed) public key for `algorithm`.
    ///
    /// Like [PrivateKey::new], this is intended for [crate::Context] implementations that have
    /// already checked that `raw` decodes to a valid point.
    pub fn new(algorithm: &'static str, raw: Vec<u8>) -> Self {
        Self { algorithm, raw }
    }

    /// Name of the algorithm this key belongs to.
    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm
    }

    /// Lower-case hex encoding of the raw key.
    pub fn to_hex(&self) -> String {
        hex(&self.raw)
    }
}

impl Hash for PublicKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.algorithm.hash(state);
        self.raw.hash(state);
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.raw
    }
}

impl Deref for PublicKey {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.raw
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.algorithm, hex(&self.raw))
    }
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex(&self.raw))
    }
}

/// A signature in its algorithm's canonical encoding.
///
/// Signatures are opaque: they are only interpreted by the [crate::Context] that verifies them.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    raw: Vec<u8>,
}

impl Signature {
    /// Decode a signature from a hex string.
    ///
    /// Only the hex encoding is checked here; the layout is checked during verification.
    pub fn from_hex(hex: &str) -> Option<Self> {
        from_hex(hex).map(Self::from)
    }

    /// Lower-case hex encoding of the signature.
    pub fn to_hex(&self) -> String {
        hex(&self.raw)
    }
}

impl From<Vec<u8>> for Signature {
    fn from(raw: Vec<u8>) -> Self {
        Self { raw }
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.raw
    }
}

impl Deref for Signature {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.raw
    }
}

impl Debug for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex(&self.raw))
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex(&self.raw))
    }
}
