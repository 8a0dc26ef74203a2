//! Background white noise at a random level.

use crate::domain::WHITE_NOISE_DOMAIN;
use crate::error::PerturbError;
use crate::perturbator::{GatedSampler, Perturbator};
use crate::sampler::{Distribution, Sampler};
use insynth_core::Effect;
use insynth_effects::GaussianNoise;
use rand::RngCore;

/// Default noise-level draw, relative to signal RMS.
pub const DEFAULT_DISTRIBUTION: Distribution = Distribution::Normal { loc: 0.2, scale: 0.2 };

/// Adds Gaussian noise whose level relative to the signal RMS is drawn and
/// clamped to `[0, 1]`.
#[derive(Debug)]
pub struct WhiteNoisePerturbator {
    inner: GatedSampler,
}

impl WhiteNoisePerturbator {
    /// Create with the default level distribution.
    pub fn new(p: f64) -> Self {
        Self::with_sampler(p, DEFAULT_DISTRIBUTION)
    }

    /// Create with a custom level sampler.
    pub fn with_sampler(p: f64, sampler: impl Sampler + 'static) -> Self {
        Self {
            inner: GatedSampler::new(p, sampler),
        }
    }
}

impl Perturbator for WhiteNoisePerturbator {
    fn id(&self) -> &'static str {
        "white_noise"
    }

    fn probability(&self) -> f64 {
        self.inner.probability()
    }

    fn apply(
        &self,
        samples: &[f32],
        sample_rate: u32,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<f32>, PerturbError> {
        let Some(raw) = self.inner.draw(self.id(), rng) else {
            return Ok(samples.to_vec());
        };
        let noise_level = WHITE_NOISE_DOMAIN.map(raw);
        tracing::debug!(raw, noise_level, "white noise");

        Ok(GaussianNoise::new(noise_level as f32).apply(samples, sample_rate, rng)?)
    }
}
