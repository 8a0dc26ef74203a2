//! Additive white Gaussian noise scaled to the signal level.

use insynth_core::{Effect, EffectError, rms};
use rand::RngCore;
use rand_distr::{Distribution, Normal};

/// Adds zero-mean Gaussian noise with standard deviation
/// `rms(signal) * noise_level` to every sample.
///
/// A silent input stays silent, whatever the level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianNoise {
    noise_level: f32,
}

impl GaussianNoise {
    /// Create a noise source. `noise_level` is relative to signal RMS.
    pub fn new(noise_level: f32) -> Self {
        Self { noise_level }
    }

    /// Configured level relative to signal RMS.
    pub fn noise_level(&self) -> f32 {
        self.noise_level
    }
}

impl Effect for GaussianNoise {
    fn name(&self) -> &'static str {
        "gaussian_noise"
    }

    fn apply(
        &self,
        samples: &[f32],
        _sample_rate: u32,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<f32>, EffectError> {
        let std_dev = rms(samples) * self.noise_level;
        let normal = Normal::new(0.0f32, std_dev).map_err(|_| EffectError::UnsupportedParameter {
            name: "noise_level",
            value: f64::from(self.noise_level),
        })?;

        Ok(samples.iter().map(|&s| s + normal.sample(rng)).collect())
    }
}
