//! Background noise mixing from a sound bank.

use crate::sound::{choose, load_sound, snr_gain};
use insynth_core::{Effect, EffectError, rms};
use rand::{Rng, RngCore};
use std::path::PathBuf;

/// Default SNR range in dB.
pub const DEFAULT_SNR_DB: (f32, f32) = (3.0, 30.0);

/// Mixes a randomly chosen background recording under the signal.
///
/// The noise is tiled when shorter than the signal and randomly cropped when
/// longer, then scaled to an SNR drawn uniformly from the configured range.
#[derive(Debug, Clone, PartialEq)]
pub struct AddBackgroundNoise {
    sounds: Vec<PathBuf>,
    min_snr_db: f32,
    max_snr_db: f32,
}

impl AddBackgroundNoise {
    /// Create the engine over an already-resolved bank.
    pub fn new(sounds: Vec<PathBuf>) -> Self {
        Self {
            sounds,
            min_snr_db: DEFAULT_SNR_DB.0,
            max_snr_db: DEFAULT_SNR_DB.1,
        }
    }

    /// Override the SNR range. Bounds are reordered if given backwards.
    pub fn with_snr_range(mut self, min_db: f32, max_db: f32) -> Self {
        self.min_snr_db = min_db.min(max_db);
        self.max_snr_db = min_db.max(max_db);
        self
    }

    /// Files this engine draws from.
    pub fn sounds(&self) -> &[PathBuf] {
        &self.sounds
    }

    /// Configured SNR range in dB.
    pub fn snr_range_db(&self) -> (f32, f32) {
        (self.min_snr_db, self.max_snr_db)
    }
}

/// Fit `noise` to `len` samples: tile when short, random crop when long.
fn fit_to_length(noise: &[f32], len: usize, rng: &mut dyn RngCore) -> Vec<f32> {
    if noise.len() >= len {
        let start = rng.gen_range(0..=noise.len() - len);
        noise[start..start + len].to_vec()
    } else {
        noise.iter().copied().cycle().take(len).collect()
    }
}

impl Effect for AddBackgroundNoise {
    fn name(&self) -> &'static str {
        "add_background_noise"
    }

    fn apply(
        &self,
        samples: &[f32],
        sample_rate: u32,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<f32>, EffectError> {
        let path = choose(&self.sounds, rng)?;
        let noise = load_sound(path, sample_rate)?;
        if noise.is_empty() || samples.is_empty() {
            tracing::debug!(path = %path.display(), "empty noise or signal, nothing mixed");
            return Ok(samples.to_vec());
        }

        let noise = fit_to_length(&noise, samples.len(), rng);
        let snr_db = rng.gen_range(self.min_snr_db..=self.max_snr_db);
        let Some(gain) = snr_gain(rms(samples), rms(&noise), snr_db) else {
            return Ok(samples.to_vec());
        };

        tracing::debug!(path = %path.display(), snr_db, "mixing background noise");
        Ok(samples.iter().zip(&noise).map(|(&s, &n)| s + n * gain).collect())
    }
}
