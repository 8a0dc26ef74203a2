//! Lossy compression at a random bitrate.

use crate::domain::COMPRESSION_DOMAIN;
use crate::error::PerturbError;
use crate::perturbator::{GatedSampler, Perturbator};
use crate::sampler::{Distribution, Sampler};
use insynth_core::Effect;
use insynth_effects::Mp3Compression;
use rand::RngCore;

/// Default bitrate draw in kbps.
pub const DEFAULT_DISTRIBUTION: Distribution = Distribution::Normal { loc: 80.0, scale: 40.0 };

/// Runs the signal through MP3 compression at a drawn bitrate, snapped to
/// the nearest bitrate an encoder supports.
#[derive(Debug)]
pub struct CompressionPerturbator {
    inner: GatedSampler,
}

impl CompressionPerturbator {
    /// Create with the default bitrate distribution.
    pub fn new(p: f64) -> Self {
        Self::with_sampler(p, DEFAULT_DISTRIBUTION)
    }

    /// Create with a custom bitrate sampler.
    pub fn with_sampler(p: f64, sampler: impl Sampler + 'static) -> Self {
        Self {
            inner: GatedSampler::new(p, sampler),
        }
    }
}

impl Perturbator for CompressionPerturbator {
    fn id(&self) -> &'static str {
        "compression"
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
        let bitrate = COMPRESSION_DOMAIN.map(raw) as u32;
        tracing::debug!(raw, bitrate, "compression");

        Ok(Mp3Compression::new(bitrate).apply(samples, sample_rate, rng)?)
    }
}
