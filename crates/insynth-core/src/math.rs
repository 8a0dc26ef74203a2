//! Level conversions and signal statistics.
//!
//! # Level Conversions
//!
//! - [`db_to_linear`] / [`linear_to_db`] - Convert between dB and linear gain
//!
//! # Statistics
//!
//! - [`rms`] - Root mean square level
//! - [`peak`] - Maximum absolute sample
//! - [`percentile`] - Linear-interpolated percentile of the sample values

/// Convert decibels to linear gain.
///
/// # Example
/// ```rust
/// use insynth_core::db_to_linear;
///
/// assert!((db_to_linear(0.0) - 1.0).abs() < 0.001);
/// assert!((db_to_linear(-6.02) - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn db_to_linear(db: f32) -> f32 {
    10.0f32.powf(db / 20.0)
}

/// Convert linear gain to decibels.
///
/// Values at or below zero are floored at 1e-10 (−200 dB).
///
/// # Example
/// ```rust
/// use insynth_core::linear_to_db;
///
/// assert!((linear_to_db(1.0) - 0.0).abs() < 0.001);
/// assert!((linear_to_db(0.5) - (-6.02)).abs() < 0.01);
/// ```
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    20.0 * linear.max(1e-10).log10()
}

/// Compute RMS (Root Mean Square) level of a signal.
///
/// Returns 0.0 for an empty signal.
pub fn rms(signal: &[f32]) -> f32 {
    if signal.is_empty() {
        return 0.0;
    }

    let sum_sq: f64 = signal.iter().map(|&x| f64::from(x) * f64::from(x)).sum();
    (sum_sq / signal.len() as f64).sqrt() as f32
}

/// Compute peak level (maximum absolute value).
pub fn peak(signal: &[f32]) -> f32 {
    signal.iter().map(|x| x.abs()).fold(0.0, f32::max)
}

/// Linear-interpolated percentile of the sample values.
///
/// `q` is in percent and is clamped to `[0, 100]`. Uses the same
/// interpolation as the common "linear" definition: the value at rank
/// `q / 100 * (n - 1)` in the sorted samples, interpolating between
/// neighbours. Returns 0.0 for an empty signal.
///
/// # Example
/// ```rust
/// use insynth_core::percentile;
///
/// let x = [4.0, 1.0, 3.0, 2.0];
/// assert_eq!(percentile(&x, 0.0), 1.0);
/// assert_eq!(percentile(&x, 100.0), 4.0);
/// assert_eq!(percentile(&x, 50.0), 2.5);
/// ```
pub fn percentile(signal: &[f32], q: f32) -> f32 {
    if signal.is_empty() {
        return 0.0;
    }

    let mut sorted = signal.to_vec();
    sorted.sort_by(f32::total_cmp);

    let rank = (q.clamp(0.0, 100.0) / 100.0) * (sorted.len() - 1) as f32;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f32;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
