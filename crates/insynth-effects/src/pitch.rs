//! Duration-preserving pitch shift.
//!
//! A phase vocoder first stretches the signal in time by `2^(s/12)` without
//! changing its pitch; linear resampling then squeezes it back to the
//! original length, which raises (or lowers) every frequency by `s`
//! semitones.

use insynth_core::{Effect, EffectError, istft, stft, stretch_linear};
use rand::RngCore;
use rustfft::num_complex::Complex;
use std::f32::consts::PI;

const FRAME_SIZE: usize = 1024;
const HOP_SIZE: usize = 256;

/// Shifts pitch by a (possibly fractional) number of semitones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchShift {
    semitones: f32,
}

impl PitchShift {
    /// Create a pitch shifter. Positive values shift up.
    pub fn new(semitones: f32) -> Self {
        Self { semitones }
    }

    /// Configured shift in semitones.
    pub fn semitones(&self) -> f32 {
        self.semitones
    }

    /// Time-stretch rate handed to the phase vocoder (`> 1` shortens).
    pub fn rate(&self) -> f32 {
        2.0f32.powf(-self.semitones / 12.0)
    }
}

/// Wrap a phase to `[-PI, PI]`.
fn wrap_phase(phase: f32) -> f32 {
    phase - 2.0 * PI * (phase / (2.0 * PI)).round()
}

/// Resample an STFT along time by `rate`, keeping each bin's instantaneous
/// frequency coherent across the new hop positions.
fn phase_vocoder(frames: &[Vec<Complex<f32>>], rate: f32) -> Vec<Vec<Complex<f32>>> {
    let Some(first) = frames.first() else {
        return Vec::new();
    };
    let num_bins = first.len();
    let expected_advance: Vec<f32> = (0..num_bins)
        .map(|k| 2.0 * PI * HOP_SIZE as f32 * k as f32 / FRAME_SIZE as f32)
        .collect();
    let silent = vec![Complex::new(0.0f32, 0.0); num_bins];

    let mut phase: Vec<f32> = first.iter().map(|c| c.arg()).collect();
    let mut output = Vec::new();
    let mut t = 0.0f32;

    while (t as usize) < frames.len() {
        let idx = t as usize;
        let alpha = t - idx as f32;
        let current = &frames[idx];
        let next = frames.get(idx + 1).unwrap_or(&silent);

        let frame = (0..num_bins)
            .map(|k| {
                let magnitude = (1.0 - alpha) * current[k].norm() + alpha * next[k].norm();
                let out = Complex::from_polar(magnitude, phase[k]);

                let deviation = wrap_phase(next[k].arg() - current[k].arg() - expected_advance[k]);
                phase[k] += expected_advance[k] + deviation;
                out
            })
            .collect();
        output.push(frame);
        t += rate;
    }

    output
}

impl Effect for PitchShift {
    fn name(&self) -> &'static str {
        "pitch_shift"
    }

    fn apply(
        &self,
        samples: &[f32],
        _sample_rate: u32,
        _rng: &mut dyn RngCore,
    ) -> Result<Vec<f32>, EffectError> {
        if !self.semitones.is_finite() {
            return Err(EffectError::UnsupportedParameter {
                name: "semitones",
                value: f64::from(self.semitones),
            });
        }
        if self.semitones == 0.0 || samples.is_empty() {
            return Ok(samples.to_vec());
        }

        let rate = self.rate();
        let stretched_len = ((samples.len() as f32 / rate).round() as usize).max(1);

        let frames = stft(samples, FRAME_SIZE, HOP_SIZE);
        let stretched = istft(&phase_vocoder(&frames, rate), FRAME_SIZE, HOP_SIZE, stretched_len);

        Ok(stretch_linear(&stretched, samples.len()))
    }
}
