//! Error type for perturbator construction and application.

use insynth_core::EffectError;
use thiserror::Error;

/// Errors raised while building or applying a perturbator.
#[derive(Debug, Error)]
pub enum PerturbError {
    /// Distribution parameters are invalid (negative scale, reversed bounds, ...).
    #[error("invalid distribution: {0}")]
    Distribution(String),

    /// The effect engine failed after the gate fired.
    #[error("effect failed: {0}")]
    Effect(#[from] EffectError),

    /// No perturbator is registered under this id.
    #[error("unknown perturbator: {0}")]
    UnknownPerturbator(String),
}

impl PerturbError {
    /// Create a distribution error.
    pub fn distribution(msg: impl Into<String>) -> Self {
        PerturbError::Distribution(msg.into())
    }
}
