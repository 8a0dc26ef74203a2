//! FFT wrapper with windowing functions

use rustfft::{FftPlanner, num_complex::Complex};
use std::f32::consts::PI;
use std::sync::Arc;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// Rectangular (no windowing)
    Rectangular,
    /// Periodic Hann window (raised cosine), sums to a constant under 75% overlap
    Hann,
}

impl Window {
    /// Apply window to a buffer
    pub fn apply(&self, buffer: &mut [f32]) {
        let n = buffer.len();
        match self {
            Window::Rectangular => {}
            Window::Hann => {
                for (i, sample) in buffer.iter_mut().enumerate() {
                    let w = 0.5 * (1.0 - (2.0 * PI * i as f32 / n as f32).cos());
                    *sample *= w;
                }
            }
        }
    }

    /// Get window coefficients
    pub fn coefficients(&self, size: usize) -> Vec<f32> {
        let mut coeffs = vec![1.0; size];
        self.apply(&mut coeffs);
        coeffs
    }
}

/// FFT processor with cached forward and inverse plans
pub struct Fft {
    fft: Arc<dyn rustfft::Fft<f32>>,
    ifft: Arc<dyn rustfft::Fft<f32>>,
    size: usize,
}

impl Fft {
    /// Create a new FFT processor for the given size
    pub fn new(size: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(size);
        let ifft = planner.plan_fft_inverse(size);
        Self { fft, ifft, size }
    }

    /// Get FFT size
    pub fn size(&self) -> usize {
        self.size
    }

    /// Perform forward FFT on real input
    ///
    /// Input is zero-padded or truncated to the FFT size. Returns the
    /// `size/2 + 1` bins from DC to Nyquist.
    pub fn forward(&self, input: &[f32]) -> Vec<Complex<f32>> {
        let mut buffer: Vec<Complex<f32>> = input
            .iter()
            .take(self.size)
            .map(|&x| Complex::new(x, 0.0))
            .collect();
        buffer.resize(self.size, Complex::new(0.0, 0.0));

        self.fft.process(&mut buffer);

        buffer.truncate(self.size / 2 + 1);
        buffer
    }

    /// Perform inverse FFT
    ///
    /// Takes the positive-frequency half spectrum produced by [`Fft::forward`]
    /// and returns a normalized real signal of length `size`.
    pub fn inverse(&self, spectrum: &[Complex<f32>]) -> Vec<f32> {
        let half = self.size / 2 + 1;
        let mut buffer = vec![Complex::new(0.0, 0.0); self.size];
        for (dst, src) in buffer.iter_mut().zip(spectrum.iter().take(half)) {
            *dst = *src;
        }

        // Conjugate symmetry for the negative frequencies
        for k in 1..self.size - half + 1 {
            if k < spectrum.len() {
                buffer[self.size - k] = spectrum[k].conj();
            }
        }

        self.ifft.process(&mut buffer);

        let scale = 1.0 / self.size as f32;
        buffer.iter().map(|c| c.re * scale).collect()
    }

    /// Perform forward FFT on complex input (in-place)
    pub fn forward_complex(&self, buffer: &mut [Complex<f32>]) {
        self.fft.process(buffer);
    }

    /// Perform inverse FFT on complex buffer (in-place, normalized)
    pub fn inverse_complex(&self, buffer: &mut [Complex<f32>]) {
        self.ifft.process(buffer);

        let scale = 1.0 / self.size as f32;
        for c in buffer.iter_mut() {
            *c *= scale;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fft_roundtrip() {
        let fft = Fft::new(256);

        let input: Vec<f32> = (0..256)
            .map(|i| (2.0 * PI * 10.0 * i as f32 / 256.0).sin())
            .collect();

        let spectrum = fft.forward(&input);
        assert_eq!(spectrum.len(), 129);
        let reconstructed = fft.inverse(&spectrum);

        for (a, b) in input.iter().zip(reconstructed.iter()) {
            assert!((a - b).abs() < 1e-3, "Mismatch: {} vs {}", a, b);
        }
    }

    #[test]
    fn test_fft_peak_bin() {
        let fft = Fft::new(256);
        let input: Vec<f32> = (0..256)
            .map(|i| (2.0 * PI * 16.0 * i as f32 / 256.0).sin())
            .collect();
        let spectrum = fft.forward(&input);
        let (peak_bin, _) = spectrum
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.norm().total_cmp(&b.1.norm()))
            .unwrap();
        assert_eq!(peak_bin, 16);
    }

    #[test]
    fn test_hann_endpoints() {
        let w = Window::Hann.coefficients(8);
        assert!(w[0].abs() < 1e-7);
        assert!((w[4] - 1.0).abs() < 1e-6);
        assert_eq!(Window::Rectangular.coefficients(4), vec![1.0; 4]);
    }
}
