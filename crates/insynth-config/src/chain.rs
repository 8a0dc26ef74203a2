//! Perturbator chains built from suites.
//!
//! # Example
//!
//! ```rust
//! use insynth_config::{PerturbatorChain, PerturbatorConfig, Suite};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let suite = Suite::new("loud echo")
//!     .with_perturbator(PerturbatorConfig::new("volume").with_p(1.0))
//!     .with_perturbator(PerturbatorConfig::new("echo").with_p(1.0));
//!
//! let chain = PerturbatorChain::from_suite(&suite).unwrap();
//! let mut rng = StdRng::seed_from_u64(1);
//! let out = chain.apply(&[0.1; 1600], 16000, &mut rng).unwrap();
//! assert_eq!(out.len(), 1600);
//! ```

use insynth_core::AudioSignal;
use insynth_perturb::{PerturbError, Perturbator, PerturbatorRegistry};
use rand::RngCore;
use std::path::Path;

use crate::error::ConfigError;
use crate::perturbator_config::PerturbatorConfig;
use crate::suite::Suite;
use crate::validation::validate_suite;

/// Perturbators applied in sequence, each with its own gate.
pub struct PerturbatorChain {
    perturbators: Vec<Box<dyn Perturbator>>,
    registry: PerturbatorRegistry,
}

impl Default for PerturbatorChain {
    fn default() -> Self {
        Self::new()
    }
}

impl PerturbatorChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            perturbators: Vec::new(),
            registry: PerturbatorRegistry::new(),
        }
    }

    /// Validate `suite` and build every perturbator in it, in order.
    ///
    /// Sound banks are resolved under the suite's data root.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if any entry is invalid.
    pub fn from_suite(suite: &Suite) -> Result<Self, ConfigError> {
        let mut chain = Self::new();
        validate_suite(&chain.registry, suite)?;

        let data_root = suite.data_root_or_default();
        for config in suite.iter() {
            chain.push_config(config, &data_root)?;
        }

        tracing::info!(suite = %suite.name, perturbators = chain.len(), "built perturbator chain");
        Ok(chain)
    }

    /// Build a perturbator from `config` and append it.
    pub fn push_config(&mut self, config: &PerturbatorConfig, data_root: &Path) -> Result<(), ConfigError> {
        let id = config.perturbator_type.as_str();
        if self.registry.get(id).is_none() {
            return Err(ConfigError::UnknownPerturbator(id.to_string()));
        }

        let options = config.options(data_root)?;
        let perturbator = self.registry.create(id, &options)?;
        self.perturbators.push(perturbator);
        Ok(())
    }

    /// Append an already-built perturbator.
    pub fn push(&mut self, perturbator: Box<dyn Perturbator>) {
        self.perturbators.push(perturbator);
    }

    /// Perturbators in application order.
    pub fn perturbators(&self) -> &[Box<dyn Perturbator>] {
        &self.perturbators
    }

    /// Ids in application order.
    pub fn ids(&self) -> Vec<&'static str> {
        self.perturbators.iter().map(|p| p.id()).collect()
    }

    /// Number of perturbators.
    pub fn len(&self) -> usize {
        self.perturbators.len()
    }

    /// Whether the chain holds no perturbators.
    pub fn is_empty(&self) -> bool {
        self.perturbators.is_empty()
    }

    /// Thread `samples` through every perturbator in order.
    ///
    /// An empty chain returns a copy of the input. The first failure aborts
    /// the chain with no partial output.
    pub fn apply(
        &self,
        samples: &[f32],
        sample_rate: u32,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<f32>, PerturbError> {
        let mut current = samples.to_vec();
        for perturbator in &self.perturbators {
            current = perturbator.apply(&current, sample_rate, rng)?;
        }
        Ok(current)
    }

    /// Like [`apply`](Self::apply), keeping the signal's sample rate.
    pub fn apply_signal(
        &self,
        signal: &AudioSignal,
        rng: &mut dyn RngCore,
    ) -> Result<AudioSignal, PerturbError> {
        let samples = self.apply(signal.samples(), signal.sample_rate(), rng)?;
        Ok(signal.with_samples(samples))
    }
}

impl std::fmt::Debug for PerturbatorChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerturbatorChain")
            .field("perturbators", &self.ids())
            .finish()
    }
}
