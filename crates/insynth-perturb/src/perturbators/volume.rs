//! Random gain change.

use crate::domain::VOLUME_DOMAIN;
use crate::error::PerturbError;
use crate::perturbator::{GatedSampler, Perturbator};
use crate::sampler::{Distribution, Sampler};
use insynth_core::Effect;
use insynth_effects::Gain;
use rand::RngCore;

/// Default gain draw in dB.
pub const DEFAULT_DISTRIBUTION: Distribution = Distribution::Normal { loc: 0.0, scale: 10.0 };

/// Scales the signal by a gain drawn in dB and clamped to `[-20, 20]`.
#[derive(Debug)]
pub struct VolumePerturbator {
    inner: GatedSampler,
}

impl VolumePerturbator {
    /// Create with the default gain distribution.
    pub fn new(p: f64) -> Self {
        Self::with_sampler(p, DEFAULT_DISTRIBUTION)
    }

    /// Create with a custom gain sampler.
    pub fn with_sampler(p: f64, sampler: impl Sampler + 'static) -> Self {
        Self {
            inner: GatedSampler::new(p, sampler),
        }
    }
}

impl Perturbator for VolumePerturbator {
    fn id(&self) -> &'static str {
        "volume"
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
        let gain_db = VOLUME_DOMAIN.map(raw);
        tracing::debug!(raw, gain_db, "volume");

        Ok(Gain::new(gain_db as f32).apply(samples, sample_rate, rng)?)
    }
}
