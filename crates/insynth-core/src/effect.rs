//! Effect engine capability.
//!
//! An [`Effect`] transforms a whole mono buffer in one call. Engines are
//! configured once at construction with a fixed parameter value, so the only
//! remaining source of variation at `apply` time is the RNG handed in by the
//! caller (used by noise-mixing engines to pick files, offsets and SNRs).
//!
//! ## Design Decisions
//!
//! - **Offline, whole-buffer**: Perturbations are applied to complete
//!   utterances, not streamed, so engines may look at the full signal
//!   (percentiles, RMS, convolution tails).
//!
//! - **Object-safe**: `apply` takes `&mut dyn RngCore` so engines can be
//!   stored as `Box<dyn Effect>` and driven by any generator, seeded or not.
//!
//! - **Fail-fast**: Engines return [`EffectError`] instead of substituting a
//!   default; callers decide what to do with a failed perturbation.

use rand::RngCore;
use std::path::PathBuf;
use thiserror::Error;

/// Core trait for all effect engines.
///
/// # Example
///
/// ```rust
/// use insynth_core::{Effect, EffectError};
/// use rand::RngCore;
///
/// struct Invert;
///
/// impl Effect for Invert {
///     fn name(&self) -> &'static str {
///         "invert"
///     }
///
///     fn apply(
///         &self,
///         samples: &[f32],
///         _sample_rate: u32,
///         _rng: &mut dyn RngCore,
///     ) -> Result<Vec<f32>, EffectError> {
///         Ok(samples.iter().map(|s| -s).collect())
///     }
/// }
///
/// let mut rng = rand::thread_rng();
/// let out = Invert.apply(&[0.5, -0.25], 16000, &mut rng).unwrap();
/// assert_eq!(out, vec![-0.5, 0.25]);
/// ```
pub trait Effect {
    /// Short identifier used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Apply the effect to `samples`, returning a new buffer.
    ///
    /// The input is never modified. `sample_rate` is in Hz and is not
    /// changed by any engine.
    fn apply(
        &self,
        samples: &[f32],
        sample_rate: u32,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<f32>, EffectError>;
}

/// Errors raised by effect engines.
#[derive(Debug, Error)]
pub enum EffectError {
    /// A banked engine was asked to fire with no files to draw from.
    #[error("sound bank is empty: no file to draw from")]
    EmptyBank,

    /// The configured parameter lies outside what the engine supports.
    #[error("unsupported {name}: {value}")]
    UnsupportedParameter {
        /// Name of the parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The input signal cannot be processed.
    #[error("invalid signal: {0}")]
    InvalidSignal(String),

    /// A bank file could not be read or decoded.
    #[error("failed to load sound '{path}': {source}")]
    LoadSound {
        /// Path of the file that failed to load.
        path: PathBuf,
        /// Underlying reader error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl EffectError {
    /// Create a load sound error.
    pub fn load_sound(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        EffectError::LoadSound {
            path: path.into(),
            source: source.into(),
        }
    }
}
