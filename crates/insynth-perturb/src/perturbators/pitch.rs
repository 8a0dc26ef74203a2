//! Pitch shift by a random whole number of semitones.

use crate::domain::PITCH_DOMAIN;
use crate::error::PerturbError;
use crate::perturbator::{GatedSampler, Perturbator};
use crate::sampler::{Distribution, Sampler};
use insynth_core::Effect;
use insynth_effects::PitchShift;
use rand::RngCore;

/// Default semitone draw.
pub const DEFAULT_DISTRIBUTION: Distribution = Distribution::Normal { loc: 0.0, scale: 8.0 };

/// Shifts pitch by a drawn number of semitones, clamped to one octave either
/// way and truncated to an integer.
#[derive(Debug)]
pub struct PitchPerturbator {
    inner: GatedSampler,
}

impl PitchPerturbator {
    /// Create with the default semitone distribution.
    pub fn new(p: f64) -> Self {
        Self::with_sampler(p, DEFAULT_DISTRIBUTION)
    }

    /// Create with a custom semitone sampler.
    pub fn with_sampler(p: f64, sampler: impl Sampler + 'static) -> Self {
        Self {
            inner: GatedSampler::new(p, sampler),
        }
    }
}

impl Perturbator for PitchPerturbator {
    fn id(&self) -> &'static str {
        "pitch"
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
        let semitones = PITCH_DOMAIN.map(raw);
        tracing::debug!(raw, semitones, "pitch");

        Ok(PitchShift::new(semitones as f32).apply(samples, sample_rate, rng)?)
    }
}
