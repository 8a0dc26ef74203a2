//! Lossy codec emulation at a fixed MP3 bitrate.
//!
//! The signal is analysed with a Hann-windowed STFT and each frame is
//! degraded the way a perceptual coder at the requested bitrate would:
//!
//! 1. **Bandwidth limit**: bins above the encoder's lowpass for that bitrate
//!    are discarded.
//! 2. **Quantization**: the remaining bins are grouped into bands and each
//!    band is quantized with a step proportional to its own level. Lower
//!    bitrates use coarser steps, which zeroes quiet bins and leaves the
//!    familiar "birdie" artifacts.
//!
//! Frames are resynthesized with weighted overlap-add, so the output has the
//! same length as the input.

use insynth_core::{Effect, EffectError, istft, stft};
use rand::RngCore;
use rustfft::num_complex::Complex;

/// Bitrates (kbps) an MP3 encoder accepts, ascending.
pub const SUPPORTED_BITRATES: [u32; 18] = [
    8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160, 192, 224, 256, 320,
];

const FRAME_SIZE: usize = 1024;
const HOP_SIZE: usize = 256;
const BAND_BINS: usize = 16;

/// Encoder lowpass cutoff in Hz for a supported bitrate.
fn lowpass_hz(bitrate_kbps: u32) -> f32 {
    match bitrate_kbps {
        0..=8 => 2000.0,
        9..=16 => 3700.0,
        17..=24 => 3900.0,
        25..=32 => 5500.0,
        33..=40 => 7000.0,
        41..=48 => 7500.0,
        49..=56 => 10000.0,
        57..=64 => 11000.0,
        65..=80 => 13500.0,
        81..=96 => 15100.0,
        97..=112 => 15600.0,
        113..=128 => 17000.0,
        129..=160 => 17500.0,
        161..=192 => 18600.0,
        193..=224 => 19400.0,
        225..=256 => 19700.0,
        _ => 20500.0,
    }
}

/// Signal-to-quantization-noise ratio per band, in dB.
fn quantization_snr_db(bitrate_kbps: u32) -> f32 {
    4.0 + 32.0 * (bitrate_kbps as f32 / 320.0).sqrt()
}

/// Emulates MP3 encoding and decoding at a constant bitrate.
///
/// # Example
///
/// ```rust
/// use insynth_core::Effect;
/// use insynth_effects::Mp3Compression;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(0);
/// let input: Vec<f32> = (0..4000).map(|i| (i as f32 * 0.05).sin()).collect();
/// let out = Mp3Compression::new(64).apply(&input, 16000, &mut rng).unwrap();
/// assert_eq!(out.len(), input.len());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mp3Compression {
    bitrate_kbps: u32,
}

impl Mp3Compression {
    /// Create a codec at `bitrate_kbps`, which must be one of
    /// [`SUPPORTED_BITRATES`].
    pub fn new(bitrate_kbps: u32) -> Self {
        Self { bitrate_kbps }
    }

    /// Configured bitrate in kbps.
    pub fn bitrate_kbps(&self) -> u32 {
        self.bitrate_kbps
    }

    fn degrade_frame(&self, frame: &mut [Complex<f32>], cutoff_bin: usize, step_ratio: f32) {
        for bin in frame.iter_mut().skip(cutoff_bin) {
            *bin = Complex::new(0.0, 0.0);
        }

        let active = cutoff_bin.min(frame.len());
        for band in frame[..active].chunks_mut(BAND_BINS) {
            let energy: f32 = band.iter().map(|c| c.norm_sqr()).sum();
            let band_rms = (energy / band.len() as f32).sqrt();
            if band_rms <= f32::EPSILON {
                continue;
            }

            let step = band_rms * step_ratio;
            for bin in band.iter_mut() {
                *bin = Complex::new((bin.re / step).round() * step, (bin.im / step).round() * step);
            }
        }
    }
}

impl Effect for Mp3Compression {
    fn name(&self) -> &'static str {
        "mp3_compression"
    }

    fn apply(
        &self,
        samples: &[f32],
        sample_rate: u32,
        _rng: &mut dyn RngCore,
    ) -> Result<Vec<f32>, EffectError> {
        if !SUPPORTED_BITRATES.contains(&self.bitrate_kbps) {
            return Err(EffectError::UnsupportedParameter {
                name: "bitrate",
                value: f64::from(self.bitrate_kbps),
            });
        }
        if sample_rate == 0 {
            return Err(EffectError::InvalidSignal("sample rate must be positive".into()));
        }
        if samples.is_empty() {
            return Ok(Vec::new());
        }

        let bin_hz = sample_rate as f32 / FRAME_SIZE as f32;
        let cutoff_bin = (lowpass_hz(self.bitrate_kbps) / bin_hz).ceil() as usize;
        // Uniform quantization noise has RMS step / sqrt(12).
        let step_ratio = insynth_core::db_to_linear(-quantization_snr_db(self.bitrate_kbps)) * 12.0f32.sqrt();

        let mut frames = stft(samples, FRAME_SIZE, HOP_SIZE);
        for frame in frames.iter_mut() {
            self.degrade_frame(frame, cutoff_bin, step_ratio);
        }

        Ok(istft(&frames, FRAME_SIZE, HOP_SIZE, samples.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insynth_core::rms;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sine(freq: f32, sr: u32, n: usize) -> Vec<f32> {
        (0..n)
            .map(|i| (2.0 * std::f32::consts::PI * freq * i as f32 / sr as f32).sin() * 0.5)
            .collect()
    }

    fn error_rms(a: &[f32], b: &[f32]) -> f32 {
        let diff: Vec<f32> = a.iter().zip(b).map(|(x, y)| x - y).collect();
        rms(&diff)
    }

    #[test]
    fn test_length_preserved() {
        let mut rng = StdRng::seed_from_u64(0);
        for len in [1, 100, 1024, 5000] {
            let input = sine(440.0, 16000, len);
            let out = Mp3Compression::new(128).apply(&input, 16000, &mut rng).unwrap();
            assert_eq!(out.len(), len);
        }
    }

    #[test]
    fn test_unsupported_bitrate_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = Mp3Compression::new(100).apply(&[0.0; 10], 16000, &mut rng).unwrap_err();
        assert!(matches!(err, EffectError::UnsupportedParameter { name: "bitrate", .. }));
    }

    #[test]
    fn test_high_bitrate_is_transparent_in_band() {
        let mut rng = StdRng::seed_from_u64(0);
        let input = sine(1000.0, 16000, 16000);
        let out = Mp3Compression::new(320).apply(&input, 16000, &mut rng).unwrap();
        assert!(error_rms(&input, &out) < 0.05 * rms(&input));
    }

    #[test]
    fn test_low_bitrate_removes_high_band() {
        let mut rng = StdRng::seed_from_u64(0);
        let input = sine(5000.0, 16000, 16000);
        let out = Mp3Compression::new(8).apply(&input, 16000, &mut rng).unwrap();
        assert!(rms(&out) < 0.1 * rms(&input));
    }

    #[test]
    fn test_lower_bitrate_degrades_more() {
        let mut rng = StdRng::seed_from_u64(0);
        let input: Vec<f32> = (0..16000)
            .map(|i| {
                let t = i as f32 / 16000.0;
                0.3 * (2.0 * std::f32::consts::PI * 300.0 * t).sin()
                    + 0.2 * (2.0 * std::f32::consts::PI * 1200.0 * t).sin()
                    + 0.1 * (2.0 * std::f32::consts::PI * 4500.0 * t).sin()
            })
            .collect();
        let hi = Mp3Compression::new(256).apply(&input, 16000, &mut rng).unwrap();
        let lo = Mp3Compression::new(16).apply(&input, 16000, &mut rng).unwrap();
        assert!(error_rms(&input, &lo) > error_rms(&input, &hi));
    }

    #[test]
    fn test_lowpass_table_monotonic() {
        assert!(SUPPORTED_BITRATES.windows(2).all(|w| lowpass_hz(w[0]) <= lowpass_hz(w[1])));
    }
}
