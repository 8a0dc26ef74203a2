//! insynth Core - signal primitives shared by every insynth crate
//!
//! This crate holds the pieces that the effect engines and the perturbation
//! framework both build on. It owns no randomness policy and no file I/O;
//! randomness is always passed in by the caller as a `&mut dyn RngCore`.
//!
//! # Core Abstractions
//!
//! - [`AudioSignal`] - Mono `f32` samples plus a sample rate
//! - [`Effect`] - Object-safe trait for whole-buffer effect engines
//! - [`EffectError`] - Failure modes raised by effect engines
//!
//! ## Spectral Tools
//!
//! - [`Fft`] - Cached forward/inverse FFT with [`Window`] functions
//! - [`fft_convolve`] - Linear convolution via zero-padded FFT
//! - [`stft()`] / [`istft()`] - Centered STFT with weighted overlap-add inverse
//!
//! ## Resampling
//!
//! - [`resample_rate`] - Rational polyphase resampling between sample rates
//! - [`stretch_linear`] - Linear-interpolation resize to an arbitrary length
//!
//! ## Utilities
//!
//! - Level conversions: [`db_to_linear`], [`linear_to_db`]
//! - Signal statistics: [`rms`], [`peak`], [`percentile`]
//!
//! # Example
//!
//! ```rust
//! use insynth_core::{AudioSignal, rms, db_to_linear};
//!
//! let signal = AudioSignal::new(vec![0.5; 480], 16000);
//! assert!((rms(signal.samples()) - 0.5).abs() < 1e-6);
//! assert!((db_to_linear(0.0) - 1.0).abs() < 1e-6);
//! ```

pub mod convolve;
pub mod effect;
pub mod fft;
pub mod math;
pub mod resample;
pub mod signal;
pub mod stft;

// Re-export main types at crate root
pub use convolve::fft_convolve;
pub use effect::{Effect, EffectError};
pub use fft::{Fft, Window};
pub use math::{db_to_linear, linear_to_db, peak, percentile, rms};
pub use resample::{design_lowpass, resample, resample_rate, stretch_linear};
pub use signal::AudioSignal;
pub use stft::{frame_count, istft, stft};
