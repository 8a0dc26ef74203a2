//! Loading bank sounds at the signal's sample rate.

use insynth_core::{EffectError, resample_rate};
use rand::RngCore;
use rand::seq::SliceRandom;
use std::path::{Path, PathBuf};

/// Read a bank file as mono and resample it to `sample_rate`.
///
/// Only WAV files decode; other bank extensions fail with
/// [`EffectError::LoadSound`].
pub fn load_sound(path: &Path, sample_rate: u32) -> Result<Vec<f32>, EffectError> {
    let (samples, spec) = insynth_io::read_wav(path).map_err(|e| EffectError::load_sound(path, e))?;
    if spec.sample_rate != sample_rate {
        tracing::debug!(
            path = %path.display(),
            from = spec.sample_rate,
            to = sample_rate,
            "resampling bank sound"
        );
    }
    Ok(resample_rate(&samples, spec.sample_rate, sample_rate))
}

/// Pick one path uniformly at random, failing on an empty bank.
pub(crate) fn choose<'a>(paths: &'a [PathBuf], rng: &mut dyn RngCore) -> Result<&'a Path, EffectError> {
    paths.choose(rng).map(PathBuf::as_path).ok_or(EffectError::EmptyBank)
}

/// Gain that puts `noise` at `snr_db` below `signal_rms`.
///
/// Returns `None` when the noise is silent, since no gain can reach the target.
pub(crate) fn snr_gain(signal_rms: f32, noise_rms: f32, snr_db: f32) -> Option<f32> {
    if noise_rms <= f32::EPSILON {
        return None;
    }
    Some(signal_rms / (noise_rms * insynth_core::db_to_linear(snr_db)))
}
