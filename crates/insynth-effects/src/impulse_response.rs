//! Convolution with a recorded impulse response.

use crate::sound::{choose, load_sound};
use insynth_core::{Effect, EffectError, fft_convolve};
use rand::RngCore;
use std::path::PathBuf;

/// Convolves the signal with a randomly chosen impulse response.
///
/// The response is resampled to the signal rate and the convolution tail is
/// cut, so the output keeps the input length.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyImpulseResponse {
    impulse_responses: Vec<PathBuf>,
}

impl ApplyImpulseResponse {
    /// Create the engine over an already-resolved bank.
    pub fn new(impulse_responses: Vec<PathBuf>) -> Self {
        Self { impulse_responses }
    }

    /// Files this engine draws from.
    pub fn impulse_responses(&self) -> &[PathBuf] {
        &self.impulse_responses
    }
}

impl Effect for ApplyImpulseResponse {
    fn name(&self) -> &'static str {
        "apply_impulse_response"
    }

    fn apply(
        &self,
        samples: &[f32],
        sample_rate: u32,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<f32>, EffectError> {
        let path = choose(&self.impulse_responses, rng)?;
        let ir = load_sound(path, sample_rate)?;
        if ir.is_empty() {
            return Err(EffectError::InvalidSignal(format!(
                "impulse response '{}' has no samples",
                path.display()
            )));
        }

        tracing::debug!(path = %path.display(), taps = ir.len(), "convolving impulse response");
        let mut output = fft_convolve(samples, &ir);
        output.truncate(samples.len());
        Ok(output)
    }
}
