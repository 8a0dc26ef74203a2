//! insynth Effects - whole-buffer audio effect engines
//!
//! Each engine is built with one fixed parameter value and implements
//! [`insynth_core::Effect`]. Perturbators in `insynth-perturb` decide
//! *whether* and *how strongly* to perturb; the engines here only apply the
//! transformation they were configured with.
//!
//! - [`Gain`] - Fixed gain in decibels
//! - [`ClippingDistortion`] - Percentile-threshold hard clipping
//! - [`GaussianNoise`] - Additive white noise relative to signal RMS
//! - [`Mp3Compression`] - Lossy perceptual codec emulation at a fixed bitrate
//! - [`PitchShift`] - Phase-vocoder pitch shift that keeps duration
//!
//! ## Banked engines
//!
//! These draw a random file from a pre-resolved sound bank each time they
//! are applied, and fail with [`EffectError::EmptyBank`](insynth_core::EffectError)
//! when the bank is empty.
//!
//! - [`AddBackgroundNoise`] - Mix a noise recording at a random SNR
//! - [`AddShortNoises`] - Scatter short noise events over the signal
//! - [`ApplyImpulseResponse`] - Convolve with a room or device response
//!
//! ## Example
//!
//! ```rust
//! use insynth_core::Effect;
//! use insynth_effects::Gain;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let louder = Gain::new(6.0).apply(&[0.1, -0.1], 16000, &mut rng).unwrap();
//! assert!(louder[0] > 0.19);
//! ```

pub mod background_noise;
pub mod clipping;
pub mod compression;
pub mod gain;
pub mod gaussian_noise;
pub mod impulse_response;
pub mod pitch;
pub mod short_noises;
pub mod sound;

// Re-export main types at crate root
pub use background_noise::AddBackgroundNoise;
pub use clipping::ClippingDistortion;
pub use compression::{Mp3Compression, SUPPORTED_BITRATES};
pub use gain::Gain;
pub use gaussian_noise::GaussianNoise;
pub use impulse_response::ApplyImpulseResponse;
pub use pitch::PitchShift;
pub use short_noises::AddShortNoises;
pub use sound::load_sound;
