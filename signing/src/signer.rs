use crate::{Context, Error, PrivateKey, PublicKey, Signature};
use std::{fmt, sync::Arc};

/// A [PrivateKey] bound to the [Context] that understands it.
///
/// The public key is derived once, when the signer is created.
#[derive(Clone)]
pub struct Signer {
    context: Arc<dyn Context>,
    private_key: PrivateKey,
    public_key: PublicKey,
}

impl Signer {
    /// Bind `private_key` to `context`.
    ///
    /// Fails if the key was produced by a different algorithm or is not valid for `context`.
    pub fn new(context: Arc<dyn Context>, private_key: PrivateKey) -> Result<Self, Error> {
        let public_key = context.public_key(&private_key)?;
        Ok(Self {
            context,
            private_key,
            public_key,
        })
    }

    /// Sign `message` with the bound key.
    pub fn sign(&self, message: &[u8]) -> Result<Signature, Error> {
        self.context.sign(message, &self.private_key)
    }

    /// Verify a signature over `message` against the bound key.
    pub fn verify(&self, signature: &[u8], message: &[u8]) -> Result<bool, Error> {
        self.context.verify(signature, message, &self.public_key)
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn algorithm_name(&self) -> &'static str {
        self.context.algorithm_name()
    }

    pub fn context(&self) -> &Arc<dyn Context> {
        &self.context
    }
}

impl fmt::Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("algorithm", &self.algorithm_name())
            .field("public_key", &self.public_key)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ed25519, secp256k1, secp256r1};
    use test_case::test_case;

    fn context(name: &str) -> Arc<dyn Context> {
        match name {
            secp256k1::ALGORITHM_NAME => Arc::new(secp256k1::Secp256k1),
            secp256r1::ALGORITHM_NAME => Arc::new(secp256r1::Secp256r1),
            ed25519::ALGORITHM_NAME => Arc::new(ed25519::Ed25519),
            _ => unreachable!(),
        }
    }

    #[test_case(secp256k1::ALGORITHM_NAME; "secp256k1")]
    #[test_case(secp256r1::ALGORITHM_NAME; "secp256r1")]
    #[test_case(ed25519::ALGORITHM_NAME; "ed25519")]
    fn test_sign_and_verify(name: &str) {
        let context = context(name);
        let private_key = context.new_random_private_key().unwrap();
        let signer = Signer::new(context.clone(), private_key.clone()).unwrap();
        assert_eq!(signer.algorithm_name(), name);
        assert_eq!(
            signer.public_key(),
            &context.public_key(&private_key).unwrap()
        );
        assert_eq!(signer.context().algorithm_name(), name);

        let message = b"Hello, world!";
        let signature = signer.sign(message).unwrap();
        assert_eq!(signature, context.sign(message, &private_key).unwrap());
        assert!(signer.verify(&signature, message).unwrap());
        assert!(context
            .verify(&signature, message, signer.public_key())
            .unwrap());
        assert!(!signer.verify(&signature, b"Goodbye, world!").unwrap());
    }

    #[test]
    fn test_algorithm_mismatch() {
        let private_key = secp256k1::Secp256k1.new_random_private_key().unwrap();
        let result = Signer::new(context(ed25519::ALGORITHM_NAME), private_key);
        assert_eq!(
            result.err().unwrap(),
            Error::AlgorithmMismatch {
                expected: ed25519::ALGORITHM_NAME,
                found: secp256k1::ALGORITHM_NAME,
            }
        );
    }

    #[test]
    fn test_invalid_private_key() {
        let private_key = PrivateKey::new(secp256k1::ALGORITHM_NAME, vec![0; 32]);
        let result = Signer::new(context(secp256k1::ALGORITHM_NAME), private_key);
        assert_eq!(
            result.err().unwrap(),
            Error::InvalidKey(secp256k1::ALGORITHM_NAME)
        );
    }

    #[test]
    fn test_clone() {
        let context = context(secp256r1::ALGORITHM_NAME);
        let signer = Signer::new(context.clone(), context.new_random_private_key().unwrap()).unwrap();
        let cloned = signer.clone();
        assert_eq!(signer.public_key(), cloned.public_key());
        let message = b"clone";
        assert_eq!(signer.sign(message).unwrap(), cloned.sign(message).unwrap());
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let context = context(secp256k1::ALGORITHM_NAME);
        let private_key = context.new_random_private_key().unwrap();
        let secret = private_key.to_hex();
        let signer = Signer::new(context, private_key).unwrap();
        let debug = format!("{signer:?}");
        assert!(debug.contains(secp256k1::ALGORITHM_NAME));
        assert!(debug.contains(&signer.public_key().to_hex()));
        assert!(!debug.contains(secret.as_str()));
    }
}
