//! Fixed gain stage.

use insynth_core::{Effect, EffectError, db_to_linear};
use rand::RngCore;

/// Multiplies every sample by `10^(gain_db / 20)`.
///
/// # Example
///
/// ```rust
/// use insynth_core::Effect;
/// use insynth_effects::Gain;
///
/// let mut rng = rand::rngs::mock::StepRng::new(0, 1);
/// let out = Gain::new(-20.0).apply(&[1.0], 16000, &mut rng).unwrap();
/// assert!((out[0] - 0.1).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gain {
    gain_db: f32,
}

impl Gain {
    /// Create a gain stage.
    pub fn new(gain_db: f32) -> Self {
        Self { gain_db }
    }

    /// Configured gain in decibels.
    pub fn gain_db(&self) -> f32 {
        self.gain_db
    }
}

impl Effect for Gain {
    fn name(&self) -> &'static str {
        "gain"
    }

    fn apply(
        &self,
        samples: &[f32],
        _sample_rate: u32,
        _rng: &mut dyn RngCore,
    ) -> Result<Vec<f32>, EffectError> {
        if !self.gain_db.is_finite() {
            return Err(EffectError::UnsupportedParameter {
                name: "gain_db",
                value: f64::from(self.gain_db),
            });
        }

        let gain = db_to_linear(self.gain_db);
        Ok(samples.iter().map(|&s| s * gain).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_zero_db_is_identity() {
        let mut rng = StdRng::seed_from_u64(0);
        let input = [0.5, -0.25, 0.0];
        let out = Gain::new(0.0).apply(&input, 16000, &mut rng).unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn test_plus_twenty_db() {
        let mut rng = StdRng::seed_from_u64(0);
        let out = Gain::new(20.0).apply(&[0.01, -0.02], 16000, &mut rng).unwrap();
        assert!((out[0] - 0.1).abs() < 1e-6);
        assert!((out[1] + 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_non_finite_gain_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = Gain::new(f32::NAN).apply(&[0.1], 16000, &mut rng).unwrap_err();
        assert!(matches!(err, EffectError::UnsupportedParameter { name: "gain_db", .. }));
    }
}
