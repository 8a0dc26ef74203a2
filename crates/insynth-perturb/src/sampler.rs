//! Distribution sampling.
//!
//! A [`Sampler`] produces one unconstrained real-valued draw per call. The
//! built-in [`Distribution`] covers the families perturbators are configured
//! with; any other type implementing [`Sampler`] can be plugged in instead.

use crate::error::PerturbError;
use rand::{Rng, RngCore};
use rand_distr::StandardNormal;
use std::fmt;

/// Source of raw parameter draws.
pub trait Sampler: Send + Sync + fmt::Debug {
    /// Draw one value.
    fn sample(&self, rng: &mut dyn RngCore) -> f64;
}

/// Parameterized distribution family.
///
/// Construct through [`Distribution::normal`] or [`Distribution::uniform`]
/// to get parameter validation; the variants are public so that defaults can
/// be written as constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distribution {
    /// Gaussian with mean `loc` and standard deviation `scale`.
    Normal {
        /// Mean.
        loc: f64,
        /// Standard deviation (zero yields `loc` every time).
        scale: f64,
    },
    /// Uniform on `[low, high)`.
    Uniform {
        /// Inclusive lower bound.
        low: f64,
        /// Exclusive upper bound.
        high: f64,
    },
    /// Always the same value. Consumes no randomness.
    Constant(f64),
}

impl Distribution {
    /// Normal distribution; `loc` must be finite and `scale` finite and non-negative.
    pub fn normal(loc: f64, scale: f64) -> Result<Self, PerturbError> {
        if !loc.is_finite() {
            return Err(PerturbError::distribution(format!("normal loc must be finite, got {loc}")));
        }
        if !(scale.is_finite() && scale >= 0.0) {
            return Err(PerturbError::distribution(format!(
                "normal scale must be finite and non-negative, got {scale}"
            )));
        }
        Ok(Distribution::Normal { loc, scale })
    }

    /// Uniform distribution; bounds must be finite with `low <= high`.
    pub fn uniform(low: f64, high: f64) -> Result<Self, PerturbError> {
        if !(low.is_finite() && high.is_finite()) {
            return Err(PerturbError::distribution(format!(
                "uniform bounds must be finite, got [{low}, {high})"
            )));
        }
        if low > high {
            return Err(PerturbError::distribution(format!(
                "uniform low {low} exceeds high {high}"
            )));
        }
        Ok(Distribution::Uniform { low, high })
    }

    /// Constant distribution.
    pub fn constant(value: f64) -> Self {
        Distribution::Constant(value)
    }

    /// Short family name, as used in suite files.
    pub fn family(&self) -> &'static str {
        match self {
            Distribution::Normal { .. } => "normal",
            Distribution::Uniform { .. } => "uniform",
            Distribution::Constant(_) => "constant",
        }
    }
}

impl Sampler for Distribution {
    fn sample(&self, rng: &mut dyn RngCore) -> f64 {
        match *self {
            Distribution::Normal { loc, scale } => {
                let z: f64 = rng.sample(StandardNormal);
                loc + scale * z
            }
            Distribution::Uniform { low, high } => {
                if low < high {
                    rng.gen_range(low..high)
                } else {
                    low
                }
            }
            Distribution::Constant(value) => value,
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distribution::Normal { loc, scale } => write!(f, "normal(loc={loc}, scale={scale})"),
            Distribution::Uniform { low, high } => write!(f, "uniform(low={low}, high={high})"),
            Distribution::Constant(value) => write!(f, "constant({value})"),
        }
    }
}
