use crate::{
    check_algorithm, generate_with, sec1, sha256, Context, Error, PrivateKey, PublicKey, Signature,
};
use p256::{
    ecdsa::{
        signature::hazmat::{PrehashSigner, PrehashVerifier},
        Signature as EcdsaSignature, SigningKey, VerifyingKey,
    },
    elliptic_curve::scalar::IsHigh,
    FieldBytes,
};
use rand::RngCore;

/// Name used to select this context from a [crate::Registry].
pub const ALGORITHM_NAME: &str = "secp256r1";
pub const PRIVATE_KEY_LENGTH: usize = 32;
pub const PUBLIC_KEY_LENGTH: usize = sec1::COMPRESSED_POINT_LENGTH; // Y-Parity || X
pub const SIGNATURE_LENGTH: usize = sec1::COMPACT_SIGNATURE_LENGTH; // R || S

/// Secp256r1 implementation of the [Context] trait.
#[derive(Clone, Copy, Debug, Default)]
pub struct Secp256r1;

impl Secp256r1 {
    fn signing_key(bytes: &[u8]) -> Result<SigningKey, Error> {
        if bytes.len() != PRIVATE_KEY_LENGTH {
            return Err(Error::InvalidKey(ALGORITHM_NAME));
        }
        SigningKey::from_bytes(FieldBytes::from_slice(bytes))
            .map_err(|_| Error::InvalidKey(ALGORITHM_NAME))
    }

    fn verifying_key(bytes: &[u8]) -> Result<VerifyingKey, Error> {
        sec1::check_compressed_point(ALGORITHM_NAME, bytes)?;
        VerifyingKey::from_sec1_bytes(bytes).map_err(|_| Error::MalformedKey(ALGORITHM_NAME))
    }
}

impl Context for Secp256r1 {
    fn algorithm_name(&self) -> &'static str {
        ALGORITHM_NAME
    }

    fn private_key_from_bytes(&self, bytes: &[u8]) -> Result<PrivateKey, Error> {
        Self::signing_key(bytes)?;
        Ok(PrivateKey::new(ALGORITHM_NAME, bytes.to_vec()))
    }

    fn public_key_from_bytes(&self, bytes: &[u8]) -> Result<PublicKey, Error> {
        Self::verifying_key(bytes)?;
        Ok(PublicKey::new(ALGORITHM_NAME, bytes.to_vec()))
    }

    fn random_private_key(&self, rng: &mut dyn RngCore) -> Result<PrivateKey, Error> {
        generate_with::<PRIVATE_KEY_LENGTH>(ALGORITHM_NAME, rng, |candidate| {
            Self::signing_key(candidate).is_ok()
        })
    }

    fn public_key(&self, private_key: &PrivateKey) -> Result<PublicKey, Error> {
        check_algorithm(ALGORITHM_NAME, private_key.algorithm_name())?;
        let signing_key = Self::signing_key(private_key)?;
        let encoded = signing_key.verifying_key().to_encoded_point(true);
        Ok(PublicKey::new(ALGORITHM_NAME, encoded.as_bytes().to_vec()))
    }

    fn sign(&self, message: &[u8], private_key: &PrivateKey) -> Result<Signature, Error> {
        check_algorithm(ALGORITHM_NAME, private_key.algorithm_name())?;
        let signing_key = Self::signing_key(private_key)?;
        let digest = sha256::hash(message);
        let signature: EcdsaSignature = signing_key
            .sign_prehash(&digest)
            .map_err(|_| Error::InvalidKey(ALGORITHM_NAME))?;
        let signature = match signature.normalize_s() {
            Some(normalized) => normalized,
            None => signature,
        };
        Ok(Signature::from(signature.to_bytes().to_vec()))
    }

    fn verify(
        &self,
        signature: &[u8],
        message: &[u8],
        public_key: &PublicKey,
    ) -> Result<bool, Error> {
        check_algorithm(ALGORITHM_NAME, public_key.algorithm_name())?;
        let verifying_key = Self::verifying_key(public_key)?;
        sec1::check_compact_signature(ALGORITHM_NAME, signature)?;
        let signature = match EcdsaSignature::from_slice(signature) {
            Ok(signature) => signature,
            Err(_) => return Ok(false),
        };
        if bool::from(signature.s().is_high()) {
            // Reject any signatures with a `s` value in the upper half of the curve order.
            return Ok(false);
        }
        let digest = sha256::hash(message);
        Ok(verifying_key.verify_prehash(&digest, &signature).is_ok())
    }
}
