//! Clipping distortion at a random percentile threshold.

use crate::domain::CLIPPING_DOMAIN;
use crate::error::PerturbError;
use crate::perturbator::{GatedSampler, Perturbator};
use crate::sampler::{Distribution, Sampler};
use insynth_core::Effect;
use insynth_effects::ClippingDistortion;
use rand::RngCore;

/// Default threshold draw in percent.
pub const DEFAULT_DISTRIBUTION: Distribution = Distribution::Normal { loc: 20.0, scale: 30.0 };

/// Clips a drawn percentage of samples, clamped to `[0, 80]`.
#[derive(Debug)]
pub struct ClippingPerturbator {
    inner: GatedSampler,
}

impl ClippingPerturbator {
    /// Create with the default threshold distribution.
    pub fn new(p: f64) -> Self {
        Self::with_sampler(p, DEFAULT_DISTRIBUTION)
    }

    /// Create with a custom threshold sampler.
    pub fn with_sampler(p: f64, sampler: impl Sampler + 'static) -> Self {
        Self {
            inner: GatedSampler::new(p, sampler),
        }
    }
}

impl Perturbator for ClippingPerturbator {
    fn id(&self) -> &'static str {
        "clipping"
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
        let percentile_threshold = CLIPPING_DOMAIN.map(raw);
        tracing::debug!(raw, percentile_threshold, "clipping");

        Ok(ClippingDistortion::new(percentile_threshold as f32).apply(samples, sample_rate, rng)?)
    }
}
