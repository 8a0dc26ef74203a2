//! Centered short-time Fourier transform with weighted overlap-add inverse.
//!
//! Frames are centered on multiples of the hop: the signal is zero-padded by
//! half a frame on both sides before analysis, and [`istft`] strips that
//! padding again. Both directions use a periodic Hann window, and the inverse
//! divides by the accumulated squared window so that an unmodified
//! spectrogram reconstructs its input.

use crate::fft::{Fft, Window};
use rustfft::num_complex::Complex;

/// Squared-window sums below this are treated as uncovered.
const WINDOW_FLOOR: f32 = 1e-8;

/// Number of frames [`stft`] produces for `len` samples at `hop`.
pub fn frame_count(len: usize, hop: usize) -> usize {
    1 + len / hop.max(1)
}

/// Forward STFT. Returns `frame_count(x.len(), hop)` frames of
/// `fft_size / 2 + 1` bins each.
pub fn stft(x: &[f32], fft_size: usize, hop: usize) -> Vec<Vec<Complex<f32>>> {
    let hop = hop.max(1);
    let fft = Fft::new(fft_size);
    let window = Window::Hann.coefficients(fft_size);
    let pad = fft_size / 2;

    let mut padded = vec![0.0f32; x.len() + 2 * pad];
    padded[pad..pad + x.len()].copy_from_slice(x);

    let mut frame = vec![0.0f32; fft_size];
    (0..frame_count(x.len(), hop))
        .map(|i| {
            let start = i * hop;
            for (j, slot) in frame.iter_mut().enumerate() {
                *slot = padded.get(start + j).copied().unwrap_or(0.0) * window[j];
            }
            fft.forward(&frame)
        })
        .collect()
}

/// Inverse STFT. Overlap-adds the windowed frames and returns exactly
/// `length` samples, zero where no frame contributes.
pub fn istft(frames: &[Vec<Complex<f32>>], fft_size: usize, hop: usize, length: usize) -> Vec<f32> {
    let hop = hop.max(1);
    let fft = Fft::new(fft_size);
    let window = Window::Hann.coefficients(fft_size);
    let pad = fft_size / 2;

    let total = length + 2 * pad;
    let mut output = vec![0.0f32; total];
    let mut weight = vec![0.0f32; total];

    for (i, spectrum) in frames.iter().enumerate() {
        let start = i * hop;
        if start >= total {
            break;
        }
        let frame = fft.inverse(spectrum);
        for (j, sample) in frame.iter().enumerate() {
            let idx = start + j;
            if idx >= total {
                break;
            }
            output[idx] += sample * window[j];
            weight[idx] += window[j] * window[j];
        }
    }

    output[pad..pad + length]
        .iter()
        .zip(&weight[pad..pad + length])
        .map(|(&s, &w)| if w > WINDOW_FLOOR { s / w } else { 0.0 })
        .collect()
}
