//! insynth Perturb - probability-gated audio perturbators
//!
//! Every perturbator follows the same pipeline on each call:
//!
//! 1. **Gate**: a Bernoulli check with probability `p` decides whether the
//!    perturbation fires at all. A closed gate returns a copy of the input.
//! 2. **Sample**: a [`Sampler`] draws one raw, unconstrained value.
//! 3. **Map**: the perturbator's [`EffectDomain`] clamps (and possibly
//!    quantizes) the draw into the range its effect engine accepts.
//! 4. **Apply**: the effect engine is built with the mapped value and run.
//!
//! Banked perturbators skip steps 2 and 3; their engine draws a recording
//! from a sound bank resolved once at construction.
//!
//! # Core Abstractions
//!
//! - [`Perturbator`] - Object-safe trait implemented by every perturbator
//! - [`Gate`] - Firing probability check, one uniform draw per call
//! - [`Sampler`] / [`Distribution`] - Pluggable source of raw draws
//! - [`EffectDomain`] - Valid parameter range and quantization
//! - [`PerturbatorRegistry`] - Catalog and factory, by id
//! - [`GradientConstraint`] - Hook for whitebox (gradient-guided) search
//!
//! # Example
//!
//! ```rust
//! use insynth_perturb::{Distribution, Perturbator, VolumePerturbator};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let volume = VolumePerturbator::with_sampler(1.0, Distribution::constant(-6.0));
//! let quieter = volume.apply(&[0.5, -0.5], 16000, &mut rng).unwrap();
//! assert!(quieter[0] < 0.26);
//! ```

pub mod domain;
pub mod error;
pub mod gate;
pub mod perturbator;
pub mod perturbators;
pub mod registry;
pub mod sampler;
pub mod whitebox;

// Re-export main types at crate root
pub use domain::{BITRATE_CANDIDATES, EffectDomain, clamp, snap_to_nearest};
pub use error::PerturbError;
pub use gate::Gate;
pub use perturbator::{GatedSampler, Perturbator};
pub use perturbators::{
    BackgroundNoisePerturbator, ClippingPerturbator, CompressionPerturbator, EchoPerturbator,
    ImpulseResponsePerturbator, PitchPerturbator, ShortNoisePerturbator, VolumePerturbator,
    WhiteNoisePerturbator, echo,
};
pub use registry::{
    DEFAULT_PROBABILITY, PerturbatorDescriptor, PerturbatorKind, PerturbatorOptions,
    PerturbatorRegistry,
};
pub use sampler::{Distribution, Sampler};
pub use whitebox::{DeepXplorePerturbator, GradientConstraint};
