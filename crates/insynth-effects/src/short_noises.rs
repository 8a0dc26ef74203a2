//! Short noise events scattered over the signal.
//!
//! Events are placed one after another: the first starts at a random offset
//! inside the signal, every following one after a random silent gap. Each
//! event gets its own sound, its own SNR and short linear fades so that it
//! does not click in or out.

use crate::sound::{choose, load_sound, snr_gain};
use insynth_core::{Effect, EffectError, rms};
use rand::{Rng, RngCore};
use std::path::PathBuf;

/// Default SNR range in dB for each event.
pub const DEFAULT_SNR_DB: (f32, f32) = (0.0, 24.0);

/// Default gap between events in seconds. The range is fixed and does not
/// scale with the signal length, so clips shorter than the minimum gap get
/// at most one event.
pub const DEFAULT_GAP_SECS: (f32, f32) = (4.0, 16.0);

/// Fade-in and fade-out duration in seconds.
const FADE_SECS: f32 = 0.01;

/// Adds randomly chosen bank sounds at random positions.
#[derive(Debug, Clone, PartialEq)]
pub struct AddShortNoises {
    sounds: Vec<PathBuf>,
    min_snr_db: f32,
    max_snr_db: f32,
    min_gap_secs: f32,
    max_gap_secs: f32,
}

impl AddShortNoises {
    /// Create the engine over an already-resolved bank.
    pub fn new(sounds: Vec<PathBuf>) -> Self {
        Self {
            sounds,
            min_snr_db: DEFAULT_SNR_DB.0,
            max_snr_db: DEFAULT_SNR_DB.1,
            min_gap_secs: DEFAULT_GAP_SECS.0,
            max_gap_secs: DEFAULT_GAP_SECS.1,
        }
    }

    /// Override the per-event SNR range.
    pub fn with_snr_range(mut self, min_db: f32, max_db: f32) -> Self {
        self.min_snr_db = min_db.min(max_db);
        self.max_snr_db = min_db.max(max_db);
        self
    }

    /// Override the gap between consecutive events. Negative values are
    /// treated as zero.
    pub fn with_gap_range(mut self, min_secs: f32, max_secs: f32) -> Self {
        self.min_gap_secs = min_secs.min(max_secs).max(0.0);
        self.max_gap_secs = min_secs.max(max_secs).max(0.0);
        self
    }

    /// Files this engine draws from.
    pub fn sounds(&self) -> &[PathBuf] {
        &self.sounds
    }
}

/// Apply linear fades of `fade_len` samples to both ends, in place.
fn apply_fades(sound: &mut [f32], fade_len: usize) {
    let fade_len = fade_len.min(sound.len() / 2);
    if fade_len == 0 {
        return;
    }
    let len = sound.len();
    for i in 0..fade_len {
        let g = i as f32 / fade_len as f32;
        sound[i] *= g;
        sound[len - 1 - i] *= g;
    }
}

impl Effect for AddShortNoises {
    fn name(&self) -> &'static str {
        "add_short_noises"
    }

    fn apply(
        &self,
        samples: &[f32],
        sample_rate: u32,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<f32>, EffectError> {
        if self.sounds.is_empty() {
            return Err(EffectError::EmptyBank);
        }
        let mut output = samples.to_vec();
        let signal_rms = rms(samples);
        if samples.is_empty() || signal_rms <= f32::EPSILON {
            return Ok(output);
        }

        let sr = sample_rate as f32;
        let fade_len = (FADE_SECS * sr) as usize;
        let mut cursor = rng.gen_range(0..samples.len());
        let mut events = 0usize;

        while cursor < samples.len() {
            let path = choose(&self.sounds, rng)?;
            let mut sound = load_sound(path, sample_rate)?;
            let snr_db = rng.gen_range(self.min_snr_db..=self.max_snr_db);

            if let Some(gain) = snr_gain(signal_rms, rms(&sound), snr_db) {
                apply_fades(&mut sound, fade_len);
                for (out, s) in output[cursor..].iter_mut().zip(&sound) {
                    *out += s * gain;
                }
                events += 1;
            }

            let gap = rng.gen_range(self.min_gap_secs..=self.max_gap_secs);
            cursor += (sound.len() + (gap * sr) as usize).max(1);
        }

        tracing::debug!(events, "added short noises");
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insynth_io::{WavSpec, write_wav};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tempfile::TempDir;

    fn bank(dir: &TempDir) -> Vec<PathBuf> {
        let clap: Vec<f32> = (0..800).map(|i| if i % 3 == 0 { 0.8 } else { -0.4 }).collect();
        let path = dir.path().join("clap.wav");
        write_wav(&path, &clap, WavSpec::default()).unwrap();
        vec![path]
    }

    #[test]
    fn test_empty_bank_fails() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = AddShortNoises::new(Vec::new()).apply(&[0.1; 10], 16000, &mut rng).unwrap_err();
        assert!(matches!(err, EffectError::EmptyBank));
    }

    #[test]
    fn test_adds_events_and_keeps_length() {
        let dir = TempDir::new().unwrap();
        let signal: Vec<f32> = (0..16000 * 10).map(|i| (i as f32 * 0.03).sin() * 0.3).collect();
        let mut rng = StdRng::seed_from_u64(5);
        let out = AddShortNoises::new(bank(&dir)).apply(&signal, 16000, &mut rng).unwrap();

        assert_eq!(out.len(), signal.len());
        assert!(out.iter().zip(&signal).any(|(a, b)| (a - b).abs() > 1e-4));
    }

    #[test]
    fn test_untouched_outside_events() {
        let dir = TempDir::new().unwrap();
        let signal = vec![0.25f32; 16000 * 3];
        let mut rng = StdRng::seed_from_u64(9);
        let out = AddShortNoises::new(bank(&dir))
            .with_gap_range(100.0, 100.0)
            .apply(&signal, 16000, &mut rng)
            .unwrap();

        // A single 800-sample event fits in a 3 s signal with a 100 s gap.
        let changed = out.iter().zip(&signal).filter(|(a, b)| a != b).count();
        assert!(changed > 0 && changed <= 800, "changed {changed}");
    }

    #[test]
    fn test_default_gap_is_not_scaled_to_short_clips() {
        let dir = TempDir::new().unwrap();
        let signal = vec![0.25f32; 16000 * 3];
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = AddShortNoises::new(bank(&dir)).apply(&signal, 16000, &mut rng).unwrap();
            let changed = out.iter().zip(&signal).filter(|(a, b)| a != b).count();
            assert!(changed <= 800, "seed {seed}: changed {changed}");
        }
    }

    #[test]
    fn test_silent_signal_unchanged() {
        let dir = TempDir::new().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let out = AddShortNoises::new(bank(&dir)).apply(&[0.0; 500], 16000, &mut rng).unwrap();
        assert!(out.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_fades() {
        let mut sound = vec![1.0f32; 10];
        apply_fades(&mut sound, 4);
        assert_eq!(sound[0], 0.0);
        assert_eq!(sound[9], 0.0);
        assert_eq!(sound[5], 1.0);
        assert!(sound[1] < sound[2]);
    }
}
