use crate::{check_algorithm, generate_with, Context, Error, PrivateKey, PublicKey, Signature};
use ed25519_consensus::{SigningKey, VerificationKey};
use rand::RngCore;

/// Name used to select this context from a [crate::Registry].
pub const ALGORITHM_NAME: &str = "ed25519";
pub const PRIVATE_KEY_LENGTH: usize = 32;
pub const PUBLIC_KEY_LENGTH: usize = 32;
pub const SIGNATURE_LENGTH: usize = 64;

/// Ed25519 implementation of the [Context] trait.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ed25519;

impl Ed25519 {
    fn signing_key(bytes: &[u8]) -> Result<SigningKey, Error> {
        let seed: [u8; PRIVATE_KEY_LENGTH] = bytes
            .try_into()
            .map_err(|_| Error::InvalidKey(ALGORITHM_NAME))?;
        Ok(SigningKey::from(seed))
    }

    fn verification_key(bytes: &[u8]) -> Result<VerificationKey, Error> {
        let raw: [u8; PUBLIC_KEY_LENGTH] = bytes
            .try_into()
            .map_err(|_| Error::MalformedKey(ALGORITHM_NAME))?;
        VerificationKey::try_from(raw).map_err(|_| Error::MalformedKey(ALGORITHM_NAME))
    }
}

impl Context for Ed25519 {
    fn algorithm_name(&self) -> &'static str {
        ALGORITHM_NAME
    }

    fn private_key_from_bytes(&self, bytes: &[u8]) -> Result<PrivateKey, Error> {
        Self::signing_key(bytes)?;
        Ok(PrivateKey::new(ALGORITHM_NAME, bytes.to_vec()))
    }

    fn public_key_from_bytes(&self, bytes: &[u8]) -> Result<PublicKey, Error> {
        Self::verification_key(bytes)?;
        Ok(PublicKey::new(ALGORITHM_NAME, bytes.to_vec()))
    }

    fn random_private_key(&self, rng: &mut dyn RngCore) -> Result<PrivateKey, Error> {
        generate_with::<PRIVATE_KEY_LENGTH>(ALGORITHM_NAME, rng, |_| true)
    }

    fn public_key(&self, private_key: &PrivateKey) -> Result<PublicKey, Error> {
        check_algorithm(ALGORITHM_NAME, private_key.algorithm_name())?;
        let signing_key = Self::signing_key(private_key)?;
        let verification_key = signing_key.verification_key();
        Ok(PublicKey::new(
            ALGORITHM_NAME,
            verification_key.to_bytes().to_vec(),
        ))
    }

    fn sign(&self, message: &[u8], private_key: &PrivateKey) -> Result<Signature, Error> {
        check_algorithm(ALGORITHM_NAME, private_key.algorithm_name())?;
        let signing_key = Self::signing_key(private_key)?;
        let signature = signing_key.sign(message);
        Ok(Signature::from(signature.to_bytes().to_vec()))
    }

    fn verify(
        &self,
        signature: &[u8],
        message: &[u8],
        public_key: &PublicKey,
    ) -> Result<bool, Error> {
        check_algorithm(ALGORITHM_NAME, public_key.algorithm_name())?;
        let verification_key = Self::verification_key(public_key)?;
        let signature: [u8; SIGNATURE_LENGTH] = signature
            .try_into()
            .map_err(|_| Error::MalformedSignature(ALGORITHM_NAME))?;
        let signature = ed25519_consensus::Signature::from(signature);
        Ok(verification_key.verify(&signature, message).is_ok())
    }
}
