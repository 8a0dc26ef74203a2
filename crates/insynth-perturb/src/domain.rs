//! Parameter domains and the mapping from raw draws to effect parameters.
//!
//! Raw draws are unconstrained. Each effect declares the range its engine
//! accepts, and [`EffectDomain::map`] saturates (and for some effects
//! quantizes) the draw into that range. Draws are never rejected or
//! re-drawn.

use std::fmt;

/// Bitrates (kbps) the compression perturbator snaps to.
pub const BITRATE_CANDIDATES: [f64; 18] = [
    8.0, 16.0, 24.0, 32.0, 40.0, 48.0, 56.0, 64.0, 80.0, 96.0, 112.0, 128.0, 144.0, 160.0, 192.0,
    224.0, 256.0, 320.0,
];

/// Noise level relative to signal RMS.
pub const WHITE_NOISE_DOMAIN: EffectDomain = EffectDomain::Continuous { min: 0.0, max: 1.0 };
/// MP3 bitrate in kbps.
pub const COMPRESSION_DOMAIN: EffectDomain = EffectDomain::Discrete(&BITRATE_CANDIDATES);
/// Whole-semitone pitch shift.
pub const PITCH_DOMAIN: EffectDomain = EffectDomain::Semitones { min: -12.0, max: 12.0 };
/// Clipped percentage of samples.
pub const CLIPPING_DOMAIN: EffectDomain = EffectDomain::Continuous { min: 0.0, max: 80.0 };
/// Gain in dB.
pub const VOLUME_DOMAIN: EffectDomain = EffectDomain::Continuous { min: -20.0, max: 20.0 };
/// Echo delay in seconds.
pub const ECHO_DOMAIN: EffectDomain = EffectDomain::Continuous { min: 0.0, max: 5.0 };

/// Valid parameter range of an effect, with optional quantization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectDomain {
    /// Any value in `[min, max]`.
    Continuous {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// Clamp to `[min, max]`, then truncate toward zero.
    Semitones {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// Snap to the nearest candidate.
    Discrete(&'static [f64]),
}

impl EffectDomain {
    /// Map a raw draw into the domain.
    ///
    /// A NaN draw saturates to the upper bound of a range and to the first
    /// candidate of a discrete set.
    pub fn map(&self, raw: f64) -> f64 {
        match *self {
            EffectDomain::Continuous { min, max } => clamp(raw, min, max),
            EffectDomain::Semitones { min, max } => clamp(raw, min, max).trunc(),
            EffectDomain::Discrete(candidates) => snap_to_nearest(raw, candidates),
        }
    }

    /// Smallest value [`EffectDomain::map`] can return.
    pub fn lower(&self) -> f64 {
        match *self {
            EffectDomain::Continuous { min, .. } | EffectDomain::Semitones { min, .. } => min,
            EffectDomain::Discrete(candidates) => candidates.iter().copied().fold(f64::INFINITY, f64::min),
        }
    }

    /// Largest value [`EffectDomain::map`] can return.
    pub fn upper(&self) -> f64 {
        match *self {
            EffectDomain::Continuous { max, .. } | EffectDomain::Semitones { max, .. } => max,
            EffectDomain::Discrete(candidates) => {
                candidates.iter().copied().fold(f64::NEG_INFINITY, f64::max)
            }
        }
    }
}

impl fmt::Display for EffectDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffectDomain::Continuous { min, max } => write!(f, "[{min}, {max}]"),
            EffectDomain::Semitones { min, max } => write!(f, "[{min}, {max}] (integer)"),
            EffectDomain::Discrete(candidates) => {
                let values: Vec<String> = candidates.iter().map(f64::to_string).collect();
                write!(f, "{{{}}}", values.join(", "))
            }
        }
    }
}

/// Two-sided saturation: `upper.min(x).max(lower)`.
///
/// NaN maps to `upper`.
pub fn clamp(x: f64, lower: f64, upper: f64) -> f64 {
    upper.min(x).max(lower)
}

/// Candidate with the smallest absolute distance to `x`.
///
/// Ties keep the earlier candidate. A NaN `x` yields the first candidate;
/// an empty candidate list passes `x` through.
pub fn snap_to_nearest(x: f64, candidates: &[f64]) -> f64 {
    let Some(&first) = candidates.first() else {
        return x;
    };

    let mut best = first;
    let mut best_distance = (first - x).abs();
    for &candidate in &candidates[1..] {
        let distance = (candidate - x).abs();
        if distance < best_distance {
            best = candidate;
            best_distance = distance;
        }
    }
    best
}
