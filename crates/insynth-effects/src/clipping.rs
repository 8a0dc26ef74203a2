//! Percentile-threshold clipping distortion.
//!
//! The threshold is expressed as the share of samples (in percent) that end
//! up clipped: half of it at the bottom of the value distribution, half at
//! the top. A threshold of 20 clamps everything below the 10th percentile and
//! above the 90th percentile.

use insynth_core::{Effect, EffectError, percentile};
use rand::RngCore;

/// Hard-clips a signal between two of its own percentiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClippingDistortion {
    percentile_threshold: f32,
}

impl ClippingDistortion {
    /// Create a clipper. `percentile_threshold` must lie in `[0, 100]`.
    pub fn new(percentile_threshold: f32) -> Self {
        Self {
            percentile_threshold,
        }
    }

    /// Configured threshold in percent.
    pub fn percentile_threshold(&self) -> f32 {
        self.percentile_threshold
    }

    /// Lower and upper clip levels for `samples`.
    pub fn bounds(&self, samples: &[f32]) -> (f32, f32) {
        let half = self.percentile_threshold / 2.0;
        (percentile(samples, half), percentile(samples, 100.0 - half))
    }
}

impl Effect for ClippingDistortion {
    fn name(&self) -> &'static str {
        "clipping_distortion"
    }

    fn apply(
        &self,
        samples: &[f32],
        _sample_rate: u32,
        _rng: &mut dyn RngCore,
    ) -> Result<Vec<f32>, EffectError> {
        if !(0.0..=100.0).contains(&self.percentile_threshold) {
            return Err(EffectError::UnsupportedParameter {
                name: "percentile_threshold",
                value: f64::from(self.percentile_threshold),
            });
        }
        if samples.is_empty() {
            return Ok(Vec::new());
        }

        let (lower, upper) = self.bounds(samples);
        Ok(samples.iter().map(|&s| s.max(lower).min(upper)).collect())
    }
}
