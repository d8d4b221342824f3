//! Select a [Context] by algorithm name.
//!
//! A [Registry] is populated once (registration requires `&mut self`) and then shared read-only,
//! usually behind an `Arc`, so lookups never take a lock. The default context is held directly
//! rather than resolved by name, which is why [Registry::default_context] cannot fail.

use crate::{ed25519, secp256k1, secp256r1, Context, Error, PrivateKey, Signer};
use std::{collections::BTreeMap, sync::Arc};
use tracing::debug;

/// Configuration for [Registry::from_config].
#[derive(Clone, Debug)]
pub struct Config {
    /// Name of the algorithm returned by [Registry::default_context].
    ///
    /// Must be one of the built-in algorithms (`secp256k1`, `secp256r1`, or `ed25519`).
    pub default_algorithm: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_algorithm: secp256k1::ALGORITHM_NAME.to_string(),
        }
    }
}

/// Maps algorithm names to [Context]s.
#[derive(Clone)]
pub struct Registry {
    contexts: BTreeMap<String, Arc<dyn Context>>,
    default: Arc<dyn Context>,
}

impl Registry {
    /// Create a registry containing only `default` (registered under its algorithm name).
    pub fn new(default: Arc<dyn Context>) -> Self {
        let mut contexts = BTreeMap::new();
        contexts.insert(default.algorithm_name().to_string(), default.clone());
        debug!(algorithm = default.algorithm_name(), "initialized registry");
        Self { contexts, default }
    }

    /// Create a registry with every built-in [Context], using the configured default.
    pub fn from_config(cfg: Config) -> Result<Self, Error> {
        let mut registry = Self::new(Arc::new(secp256k1::Secp256k1));
        registry.register(secp256r1::ALGORITHM_NAME, Arc::new(secp256r1::Secp256r1))?;
        registry.register(ed25519::ALGORITHM_NAME, Arc::new(ed25519::Ed25519))?;
        registry.set_default(&cfg.default_algorithm)?;
        Ok(registry)
    }

    /// Add a [Context] under `name`.
    ///
    /// Registration is expected to happen once, during initialization.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        context: Arc<dyn Context>,
    ) -> Result<(), Error> {
        let name = name.into();
        if self.contexts.contains_key(&name) {
            return Err(Error::DuplicateAlgorithm(name));
        }
        debug!(
            name = name.as_str(),
            algorithm = context.algorithm_name(),
            "registered context"
        );
        self.contexts.insert(name, context);
        Ok(())
    }

    /// Select the [Context] returned by [Registry::default_context].
    pub fn set_default(&mut self, name: &str) -> Result<(), Error> {
        self.default = self.context(name)?;
        debug!(name, "set default context");
        Ok(())
    }

    /// Look up the [Context] registered under `name`.
    pub fn context(&self, name: &str) -> Result<Arc<dyn Context>, Error> {
        self.contexts
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UnknownAlgorithm(name.to_string()))
    }

    /// The default [Context].
    pub fn default_context(&self) -> Arc<dyn Context> {
        self.default.clone()
    }

    /// Names of all registered algorithms, in sorted order.
    pub fn algorithms(&self) -> impl Iterator<Item = &str> {
        self.contexts.keys().map(String::as_str)
    }

    /// Bind `private_key` to the [Context] registered under `name` (or the default).
    pub fn signer(&self, name: Option<&str>, private_key: PrivateKey) -> Result<Signer, Error> {
        let context = match name {
            Some(name) => self.context(name)?,
            None => self.default_context(),
        };
        Signer::new(context, private_key)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(Arc::new(secp256k1::Secp256k1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_default_registry() {
        let registry = Registry::default();
        assert_eq!(
            registry.default_context().algorithm_name(),
            secp256k1::ALGORITHM_NAME
        );
        assert_eq!(
            registry.algorithms().collect::<Vec<_>>(),
            vec![secp256k1::ALGORITHM_NAME]
        );
    }

    #[test]
    fn test_from_config() {
        let registry = Registry::from_config(Config::default()).unwrap();
        assert_eq!(
            registry.algorithms().collect::<Vec<_>>(),
            vec![
                ed25519::ALGORITHM_NAME,
                secp256k1::ALGORITHM_NAME,
                secp256r1::ALGORITHM_NAME
            ]
        );
        assert_eq!(
            registry.default_context().algorithm_name(),
            secp256k1::ALGORITHM_NAME
        );
        for name in [
            ed25519::ALGORITHM_NAME,
            secp256k1::ALGORITHM_NAME,
            secp256r1::ALGORITHM_NAME,
        ] {
            assert_eq!(registry.context(name).unwrap().algorithm_name(), name);
        }
    }

    #[test]
    fn test_from_config_custom_default() {
        let registry = Registry::from_config(Config {
            default_algorithm: ed25519::ALGORITHM_NAME.to_string(),
        })
        .unwrap();
        assert_eq!(
            registry.default_context().algorithm_name(),
            ed25519::ALGORITHM_NAME
        );
    }

    #[test]
    fn test_from_config_unknown_default() {
        let result = Registry::from_config(Config {
            default_algorithm: "rsa".to_string(),
        });
        assert_eq!(
            result.err().unwrap(),
            Error::UnknownAlgorithm("rsa".to_string())
        );
    }

    #[test]
    fn test_unknown_algorithm() {
        let registry = Registry::default();
        assert_eq!(
            registry.context("unknown-algo").err().unwrap(),
            Error::UnknownAlgorithm("unknown-algo".to_string())
        );
    }

    #[test]
    fn test_duplicate_algorithm() {
        let mut registry = Registry::default();
        let result = registry.register(secp256k1::ALGORITHM_NAME, Arc::new(secp256k1::Secp256k1));
        assert_eq!(
            result.unwrap_err(),
            Error::DuplicateAlgorithm(secp256k1::ALGORITHM_NAME.to_string())
        );

        // The existing entry is untouched
        assert!(registry.context(secp256k1::ALGORITHM_NAME).is_ok());
    }

    #[test]
    fn test_register_alias() {
        let mut registry = Registry::default();
        registry
            .register("p256", Arc::new(secp256r1::Secp256r1))
            .unwrap();
        let context = registry.context("p256").unwrap();
        assert_eq!(context.algorithm_name(), secp256r1::ALGORITHM_NAME);
    }

    #[test]
    fn test_set_default_unknown() {
        let mut registry = Registry::default();
        assert_eq!(
            registry.set_default("ed25519").unwrap_err(),
            Error::UnknownAlgorithm("ed25519".to_string())
        );

        // Default is unchanged after a failed update
        assert_eq!(
            registry.default_context().algorithm_name(),
            secp256k1::ALGORITHM_NAME
        );
    }

    #[test]
    fn test_signer_by_name() {
        let registry = Registry::from_config(Config::default()).unwrap();
        let context = registry.context(secp256r1::ALGORITHM_NAME).unwrap();
        let private_key = context.new_random_private_key().unwrap();
        let signer = registry
            .signer(Some(secp256r1::ALGORITHM_NAME), private_key.clone())
            .unwrap();
        assert_eq!(signer.algorithm_name(), secp256r1::ALGORITHM_NAME);

        // Default context cannot use a key from another algorithm
        let result = registry.signer(None, private_key);
        assert_eq!(
            result.err().unwrap(),
            Error::AlgorithmMismatch {
                expected: secp256k1::ALGORITHM_NAME,
                found: secp256r1::ALGORITHM_NAME,
            }
        );
    }

    #[test]
    fn test_concurrent_lookups() {
        let registry = Arc::new(Registry::from_config(Config::default()).unwrap());
        thread::scope(|s| {
            for i in 0..8u8 {
                let registry = registry.clone();
                s.spawn(move || {
                    for name in registry.algorithms().collect::<Vec<_>>() {
                        let context = registry.context(name).unwrap();
                        let private_key = context.new_random_private_key().unwrap();
                        let public_key = context.public_key(&private_key).unwrap();
                        let message = [i; 16];
                        let signature = context.sign(&message, &private_key).unwrap();
                        assert!(context.verify(&signature, &message, &public_key).unwrap());
                    }
                });
            }
        });
    }
}
