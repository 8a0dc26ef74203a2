//! Resampling: rational P/Q conversion between sample rates, and linear
//! stretching to an arbitrary length.
//!
//! [`resample`] implements polyphase FIR resampling using a windowed-sinc
//! lowpass with Blackman windowing. It is used to bring sound-bank files
//! (noises, impulse responses) to the sample rate of the signal being
//! perturbed. [`stretch_linear`] handles irrational ratios such as the
//! `2^(s/12)` factors of pitch shifting, where exact rational conversion
//! would need enormous filters.
//!
//! Reference: P. P. Vaidyanathan, *Multirate Systems and Filter Banks*, Prentice Hall,
//! 1993, Chapter 4.
//!
//! # Example
//!
//! ```rust
//! use insynth_core::{resample_rate, stretch_linear};
//!
//! let signal = vec![0.0f32; 4410];
//! let converted = resample_rate(&signal, 44100, 16000);
//! assert_eq!(converted.len(), 1600);
//!
//! let stretched = stretch_linear(&[0.0, 1.0], 3);
//! assert_eq!(stretched, vec![0.0, 0.5, 1.0]);
//! ```

use std::f32::consts::PI;

/// Compute windowed-sinc lowpass FIR coefficients.
///
/// The impulse response is:
///   `h[n] = sinc(cutoff * (n - M/2)) * w_blackman[n]`
/// where sinc(x) = sin(π·x) / (π·x) and M = num_taps - 1. The result is
/// normalized to unity DC gain (sum of coefficients = 1.0).
///
/// * `cutoff` - Normalized cutoff in (0.0, 1.0], where 1.0 is Nyquist.
pub fn design_lowpass(num_taps: usize, cutoff: f32) -> Vec<f32> {
    if num_taps == 0 {
        return Vec::new();
    }

    let m = num_taps - 1;
    let mut coeffs = Vec::with_capacity(num_taps);

    for n in 0..num_taps {
        let x = n as f32 - m as f32 / 2.0;

        let sinc = if x.abs() < 1e-7 {
            cutoff
        } else {
            (PI * cutoff * x).sin() / (PI * x)
        };

        let window = if m == 0 {
            1.0
        } else {
            let phase = 2.0 * PI * n as f32 / m as f32;
            0.42 - 0.5 * phase.cos() + 0.08 * (2.0 * phase).cos()
        };

        coeffs.push(sinc * window);
    }

    let sum: f32 = coeffs.iter().sum();
    if sum.abs() > 1e-10 {
        for c in coeffs.iter_mut() {
            *c /= sum;
        }
    }

    coeffs
}

/// Compute the greatest common divisor of two integers.
fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Rational resampling by the factor P/Q.
///
/// Output length is `ceil(input.len() * P / Q)`. The prototype filter's
/// group delay is compensated, so features stay time-aligned with the input.
///
/// # Algorithm
///
/// 1. Simplify P and Q by their GCD.
/// 2. Design a prototype lowpass FIR with cutoff `0.9 / max(P, Q)`.
/// 3. Decompose it into P polyphase sub-filters.
/// 4. For output sample `m`, position `m * Q + delay` in the upsampled
///    stream selects input index `n` and sub-filter phase `k`.
///
/// * `filter_order` - Prototype FIR length; `0` selects `4 * max(P, Q) * 10 + 1`.
pub fn resample(signal: &[f32], p: usize, q: usize, filter_order: usize) -> Vec<f32> {
    assert!(p >= 1, "upsample factor P must be >= 1");
    assert!(q >= 1, "downsample factor Q must be >= 1");

    let g = gcd(p, q);
    let p = p / g;
    let q = q / g;

    if (p == 1 && q == 1) || signal.is_empty() {
        return signal.to_vec();
    }

    let num_taps = if filter_order == 0 {
        4 * p.max(q) * 10 + 1
    } else {
        filter_order
    };

    let cutoff = 0.9 / p.max(q) as f32;
    let prototype = design_lowpass(num_taps, cutoff);

    let out_len = (signal.len() * p).div_ceil(q);
    let taps_per_phase = num_taps.div_ceil(p);
    let delay = (num_taps - 1) / 2;

    // polyphase[k][i] = prototype[k + i*P]
    let mut polyphase = vec![vec![0.0f32; taps_per_phase]; p];
    for (tap_idx, &coeff) in prototype.iter().enumerate() {
        polyphase[tap_idx % p][tap_idx / p] = coeff;
    }

    let mut output = Vec::with_capacity(out_len);
    for m in 0..out_len {
        let full_idx = m * q + delay;
        let n = full_idx / p;
        let k = full_idx % p;

        let mut acc = 0.0f32;
        for (i, &coeff) in polyphase[k].iter().enumerate() {
            if n >= i && (n - i) < signal.len() {
                acc += coeff * signal[n - i];
            }
        }

        // Scale by P to restore unity gain after zero insertion
        output.push(acc * p as f32);
    }

    output
}

/// Convert a signal from `from_rate` Hz to `to_rate` Hz.
///
/// Equal rates (or a zero rate on either side) return a copy of the input.
pub fn resample_rate(signal: &[f32], from_rate: u32, to_rate: u32) -> Vec<f32> {
    if from_rate == to_rate || from_rate == 0 || to_rate == 0 {
        return signal.to_vec();
    }
    resample(signal, to_rate as usize, from_rate as usize, 0)
}

/// Resize a signal to `new_len` samples with linear interpolation.
///
/// The first and last samples map onto each other exactly. An empty input
/// yields `new_len` zeros.
pub fn stretch_linear(signal: &[f32], new_len: usize) -> Vec<f32> {
    if new_len == 0 {
        return Vec::new();
    }
    if signal.is_empty() {
        return vec![0.0; new_len];
    }
    if signal.len() == 1 || new_len == 1 {
        return vec![signal[0]; new_len];
    }

    let step = (signal.len() - 1) as f64 / (new_len - 1) as f64;
    (0..new_len)
        .map(|i| {
            let pos = i as f64 * step;
            let idx = pos.floor() as usize;
            let frac = (pos - idx as f64) as f32;
            let next = (idx + 1).min(signal.len() - 1);
            signal[idx] * (1.0 - frac) + signal[next] * frac
        })
        .collect()
}
