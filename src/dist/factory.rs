//! Name-keyed registry of distribution engines.
//!
//! The registry is meant to be built once at startup (the built-ins are
//! registered by `with_builtins`) and read thereafter; concurrent
//! registration at runtime must be synchronized externally.

use std::collections::BTreeMap;

use super::binomial::BinomialDistribution;
use super::engine::DistributionEngine;
use super::error::DistError;
use super::hypergeometric::HypergeometricDistribution;

/// Constructor for a registered engine.
pub type EngineConstructor = fn() -> Box<dyn DistributionEngine>;

/// Case-insensitive name → constructor registry.
pub struct DistributionFactory {
    registry: BTreeMap<String, EngineConstructor>,
}

impl DistributionFactory {
    /// An empty registry with no engines.
    pub fn empty() -> Self {
        Self {
            registry: BTreeMap::new(),
        }
    }

    /// A registry with the binomial and hypergeometric engines registered.
    pub fn with_builtins() -> Self {
        let mut factory = Self::empty();
        factory.register("binomial", || Box::new(BinomialDistribution));
        factory.register("hypergeometric", || Box::new(HypergeometricDistribution));
        factory
    }

    /// Register an engine constructor under a name. Registration is
    /// additive only; re-registering a name replaces its constructor.
    pub fn register(&mut self, name: &str, constructor: EngineConstructor) {
        self.registry.insert(name.to_lowercase(), constructor);
    }

    /// Instantiate the engine registered under `name` (case-insensitive).
    ///
    /// Fails with [`DistError::UnknownDistribution`] listing the registered
    /// names when the name is unrecognized.
    pub fn create(&self, name: &str) -> Result<Box<dyn DistributionEngine>, DistError> {
        match self.registry.get(&name.to_lowercase()) {
            Some(constructor) => Ok(constructor()),
            None => Err(DistError::UnknownDistribution {
                name: name.to_string(),
                available: self.available().join(", "),
            }),
        }
    }

    /// Registered names in stable sorted order.
    pub fn available(&self) -> Vec<String> {
        self.registry.keys().cloned().collect()
    }
}

impl Default for DistributionFactory {
    fn default() -> Self {
        Self::with_builtins()
    }
}
