//! Linear convolution through the frequency domain.

use crate::fft::Fft;
use rustfft::num_complex::Complex;

/// Convolve `x` with `h` using a zero-padded FFT.
///
/// Returns the full linear convolution of length `x.len() + h.len() - 1`
/// (empty if either input is empty). Callers that need the original length
/// truncate the tail themselves.
///
/// # Example
///
/// ```rust
/// use insynth_core::fft_convolve;
///
/// let y = fft_convolve(&[1.0, 2.0, 3.0], &[1.0, 1.0]);
/// let expected = [1.0, 3.0, 5.0, 3.0];
/// for (a, b) in y.iter().zip(expected.iter()) {
///     assert!((a - b).abs() < 1e-4);
/// }
/// ```
pub fn fft_convolve(x: &[f32], h: &[f32]) -> Vec<f32> {
    if x.is_empty() || h.is_empty() {
        return Vec::new();
    }

    let n = x.len() + h.len() - 1;
    let fft_size = n.next_power_of_two();
    let fft = Fft::new(fft_size);

    let mut x_spec: Vec<Complex<f32>> = x.iter().map(|&s| Complex::new(s, 0.0)).collect();
    x_spec.resize(fft_size, Complex::new(0.0, 0.0));
    let mut h_spec: Vec<Complex<f32>> = h.iter().map(|&s| Complex::new(s, 0.0)).collect();
    h_spec.resize(fft_size, Complex::new(0.0, 0.0));

    fft.forward_complex(&mut x_spec);
    fft.forward_complex(&mut h_spec);

    for (a, b) in x_spec.iter_mut().zip(h_spec.iter()) {
        *a *= *b;
    }

    fft.inverse_complex(&mut x_spec);
    x_spec.iter().take(n).map(|c| c.re).collect()
}
