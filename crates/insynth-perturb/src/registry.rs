//! Perturbator registry and factory.
//!
//! The registry lists every built-in perturbator with the metadata needed to
//! configure it (default distribution, parameter domain, bank kind) and
//! builds instances by id.
//!
//! # Example
//!
//! ```rust
//! use insynth_perturb::{PerturbatorOptions, PerturbatorRegistry};
//!
//! let registry = PerturbatorRegistry::new();
//! for descriptor in registry.all_perturbators() {
//!     println!("{}: {}", descriptor.id, descriptor.description);
//! }
//!
//! let volume = registry.create("volume", &PerturbatorOptions::default().with_p(0.8)).unwrap();
//! assert_eq!(volume.id(), "volume");
//! ```

use crate::domain::{
    CLIPPING_DOMAIN, COMPRESSION_DOMAIN, ECHO_DOMAIN, EffectDomain, PITCH_DOMAIN, VOLUME_DOMAIN,
    WHITE_NOISE_DOMAIN,
};
use crate::error::PerturbError;
use crate::perturbator::Perturbator;
use crate::perturbators::{
    BackgroundNoisePerturbator, ClippingPerturbator, CompressionPerturbator, EchoPerturbator,
    ImpulseResponsePerturbator, PitchPerturbator, ShortNoisePerturbator, VolumePerturbator,
    WhiteNoisePerturbator, clipping, compression, echo, pitch, volume, white_noise,
};
use crate::sampler::Distribution;
use insynth_io::{BankKind, DEFAULT_DATA_ROOT};
use std::path::PathBuf;

/// Default gate probability for perturbators built through the registry.
pub const DEFAULT_PROBABILITY: f64 = 0.5;

/// How a perturbator chooses its effect strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PerturbatorKind {
    /// Draws one value and maps it into an effect domain.
    Parametric,
    /// Draws a recording from a sound bank of the given kind.
    Banked(BankKind),
}

impl PerturbatorKind {
    /// Human-readable name.
    pub const fn name(&self) -> &'static str {
        match self {
            PerturbatorKind::Parametric => "parametric",
            PerturbatorKind::Banked(_) => "banked",
        }
    }
}

/// Describes a perturbator in the registry.
#[derive(Debug, Clone)]
pub struct PerturbatorDescriptor {
    /// Unique identifier (lowercase, underscores).
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Brief description.
    pub description: &'static str,
    /// Parametric or banked.
    pub kind: PerturbatorKind,
    /// Distribution used when none is configured (parametric only).
    pub default_distribution: Option<Distribution>,
    /// Domain the raw draw is mapped into (parametric only).
    pub domain: Option<EffectDomain>,
}

/// Construction options shared by every perturbator.
#[derive(Debug, Clone, PartialEq)]
pub struct PerturbatorOptions {
    /// Gate probability.
    pub p: f64,
    /// Overrides the default distribution; ignored by banked perturbators.
    pub distribution: Option<Distribution>,
    /// Sound bank categories; ignored by parametric perturbators.
    pub categories: Vec<String>,
    /// Root directory holding the sound banks.
    pub data_root: PathBuf,
}

impl Default for PerturbatorOptions {
    fn default() -> Self {
        Self {
            p: DEFAULT_PROBABILITY,
            distribution: None,
            categories: Vec::new(),
            data_root: PathBuf::from(DEFAULT_DATA_ROOT),
        }
    }
}

impl PerturbatorOptions {
    /// Set the gate probability.
    pub fn with_p(mut self, p: f64) -> Self {
        self.p = p;
        self
    }

    /// Override the distribution.
    pub fn with_distribution(mut self, distribution: Distribution) -> Self {
        self.distribution = Some(distribution);
        self
    }

    /// Set the sound bank categories.
    pub fn with_categories<S: Into<String>>(mut self, categories: impl IntoIterator<Item = S>) -> Self {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Set the sound bank root.
    pub fn with_data_root(mut self, data_root: impl Into<PathBuf>) -> Self {
        self.data_root = data_root.into();
        self
    }

    fn distribution_or(&self, default: Distribution) -> Distribution {
        self.distribution.unwrap_or(default)
    }
}

/// Factory function type for creating perturbators.
type PerturbatorFactory = fn(&PerturbatorOptions) -> Box<dyn Perturbator>;

/// Internal entry in the registry.
struct RegistryEntry {
    descriptor: PerturbatorDescriptor,
    factory: PerturbatorFactory,
}

/// Registry of all built-in perturbators.
pub struct PerturbatorRegistry {
    entries: Vec<RegistryEntry>,
}

impl Default for PerturbatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PerturbatorRegistry {
    /// Create a registry with all built-in perturbators registered.
    pub fn new() -> Self {
        let mut registry = Self {
            entries: Vec::with_capacity(9),
        };
        registry.register_builtin_perturbators();
        registry
    }

    fn register_parametric(
        &mut self,
        id: &'static str,
        name: &'static str,
        description: &'static str,
        default_distribution: Distribution,
        domain: EffectDomain,
        factory: PerturbatorFactory,
    ) {
        self.register(
            PerturbatorDescriptor {
                id,
                name,
                description,
                kind: PerturbatorKind::Parametric,
                default_distribution: Some(default_distribution),
                domain: Some(domain),
            },
            factory,
        );
    }

    fn register_banked(
        &mut self,
        id: &'static str,
        name: &'static str,
        description: &'static str,
        bank: BankKind,
        factory: PerturbatorFactory,
    ) {
        self.register(
            PerturbatorDescriptor {
                id,
                name,
                description,
                kind: PerturbatorKind::Banked(bank),
                default_distribution: None,
                domain: None,
            },
            factory,
        );
    }

    /// Register all built-in perturbators.
    fn register_builtin_perturbators(&mut self) {
        self.register_parametric(
            "white_noise",
            "Background White Noise",
            "Gaussian noise at a level relative to the signal RMS",
            white_noise::DEFAULT_DISTRIBUTION,
            WHITE_NOISE_DOMAIN,
            |o| {
                Box::new(WhiteNoisePerturbator::with_sampler(
                    o.p,
                    o.distribution_or(white_noise::DEFAULT_DISTRIBUTION),
                ))
            },
        );

        self.register_parametric(
            "compression",
            "Compression",
            "MP3 encoding artifacts at a bitrate snapped to the encoder's set",
            compression::DEFAULT_DISTRIBUTION,
            COMPRESSION_DOMAIN,
            |o| {
                Box::new(CompressionPerturbator::with_sampler(
                    o.p,
                    o.distribution_or(compression::DEFAULT_DISTRIBUTION),
                ))
            },
        );

        self.register_parametric(
            "pitch",
            "Pitch",
            "Pitch shift by whole semitones, keeping duration",
            pitch::DEFAULT_DISTRIBUTION,
            PITCH_DOMAIN,
            |o| {
                Box::new(PitchPerturbator::with_sampler(
                    o.p,
                    o.distribution_or(pitch::DEFAULT_DISTRIBUTION),
                ))
            },
        );

        self.register_parametric(
            "clipping",
            "Clipping",
            "Hard clipping of a percentage of the sample distribution",
            clipping::DEFAULT_DISTRIBUTION,
            CLIPPING_DOMAIN,
            |o| {
                Box::new(ClippingPerturbator::with_sampler(
                    o.p,
                    o.distribution_or(clipping::DEFAULT_DISTRIBUTION),
                ))
            },
        );

        self.register_parametric(
            "volume",
            "Volume",
            "Gain change in decibels",
            volume::DEFAULT_DISTRIBUTION,
            VOLUME_DOMAIN,
            |o| {
                Box::new(VolumePerturbator::with_sampler(
                    o.p,
                    o.distribution_or(volume::DEFAULT_DISTRIBUTION),
                ))
            },
        );

        self.register_parametric(
            "echo",
            "Echo",
            "Signal plus a copy delayed by up to five seconds",
            echo::DEFAULT_DISTRIBUTION,
            ECHO_DOMAIN,
            |o| {
                Box::new(EchoPerturbator::with_sampler(
                    o.p,
                    o.distribution_or(echo::DEFAULT_DISTRIBUTION),
                ))
            },
        );

        self.register_banked(
            "short_noise",
            "Short Noise",
            "Short noise events scattered over the signal",
            BankKind::BackgroundNoise,
            |o| {
                Box::new(ShortNoisePerturbator::with_data_root(
                    o.p,
                    &o.data_root,
                    o.categories.as_slice(),
                ))
            },
        );

        self.register_banked(
            "background_noise",
            "Background Noise",
            "Recorded background noise mixed at a random SNR",
            BankKind::BackgroundNoise,
            |o| {
                Box::new(BackgroundNoisePerturbator::with_data_root(
                    o.p,
                    &o.data_root,
                    o.categories.as_slice(),
                ))
            },
        );

        self.register_banked(
            "impulse_response",
            "Impulse Response",
            "Convolution with a recorded room or device response",
            BankKind::ImpulseResponse,
            |o| {
                Box::new(ImpulseResponsePerturbator::with_data_root(
                    o.p,
                    &o.data_root,
                    o.categories.as_slice(),
                ))
            },
        );
    }

    /// Register a perturbator with the registry.
    fn register(&mut self, descriptor: PerturbatorDescriptor, factory: PerturbatorFactory) {
        self.entries.push(RegistryEntry {
            descriptor,
            factory,
        });
    }

    /// Returns descriptors for all registered perturbators.
    pub fn all_perturbators(&self) -> Vec<&PerturbatorDescriptor> {
        self.entries.iter().map(|e| &e.descriptor).collect()
    }

    /// Returns descriptors of the given kind.
    pub fn perturbators_of_kind(&self, kind: PerturbatorKind) -> Vec<&PerturbatorDescriptor> {
        self.entries
            .iter()
            .filter(|e| e.descriptor.kind == kind)
            .map(|e| &e.descriptor)
            .collect()
    }

    /// Get a descriptor by id.
    pub fn get(&self, id: &str) -> Option<&PerturbatorDescriptor> {
        self.entries
            .iter()
            .find(|e| e.descriptor.id == id)
            .map(|e| &e.descriptor)
    }

    /// Create a perturbator by id.
    pub fn create(
        &self,
        id: &str,
        options: &PerturbatorOptions,
    ) -> Result<Box<dyn Perturbator>, PerturbError> {
        let entry = self
            .entries
            .iter()
            .find(|e| e.descriptor.id == id)
            .ok_or_else(|| PerturbError::UnknownPerturbator(id.to_string()))?;

        tracing::debug!(id, p = options.p, "creating perturbator");
        Ok((entry.factory)(options))
    }

    /// Returns the number of registered perturbators.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no perturbators are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
