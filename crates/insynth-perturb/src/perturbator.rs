//! The perturbator capability.

use crate::error::PerturbError;
use crate::gate::Gate;
use crate::sampler::Sampler;
use insynth_core::AudioSignal;
use rand::RngCore;

/// A randomized signal degradation.
///
/// A perturbator is built once and applied many times. Every call first asks
/// its gate whether to fire; a closed gate returns an unmodified copy of the
/// input. Output never aliases the input and keeps its sample rate.
///
/// Perturbators hold no per-call state, so they can be shared across
/// threads; randomness comes in through `rng` on every call.
pub trait Perturbator: Send + Sync {
    /// Stable identifier, as used by the registry and suite files.
    fn id(&self) -> &'static str;

    /// Firing probability of the gate.
    fn probability(&self) -> f64;

    /// Perturb `samples` recorded at `sample_rate` Hz.
    fn apply(
        &self,
        samples: &[f32],
        sample_rate: u32,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<f32>, PerturbError>;

    /// Perturb an [`AudioSignal`], keeping its sample rate.
    fn apply_signal(
        &self,
        signal: &AudioSignal,
        rng: &mut dyn RngCore,
    ) -> Result<AudioSignal, PerturbError> {
        let samples = self.apply(signal.samples(), signal.sample_rate(), rng)?;
        Ok(signal.with_samples(samples))
    }
}

/// Gate plus sampler shared by the parameterized perturbators.
#[derive(Debug)]
pub struct GatedSampler {
    gate: Gate,
    sampler: Box<dyn Sampler>,
}

impl GatedSampler {
    /// Pair a gate of probability `p` with `sampler`.
    pub fn new(p: f64, sampler: impl Sampler + 'static) -> Self {
        Self {
            gate: Gate::new(p),
            sampler: Box::new(sampler),
        }
    }

    /// Firing probability.
    pub fn probability(&self) -> f64 {
        self.gate.probability()
    }

    /// The underlying sampler.
    pub fn sampler(&self) -> &dyn Sampler {
        self.sampler.as_ref()
    }

    /// Run the gate and, if it fires, draw a raw value.
    ///
    /// Returns `None` when the gate stays closed; in that case only the gate's
    /// single uniform has been consumed.
    pub fn draw(&self, perturbator: &'static str, rng: &mut dyn RngCore) -> Option<f64> {
        if !self.gate.fires(rng) {
            tracing::debug!(perturbator, p = self.gate.probability(), "gate closed");
            return None;
        }
        Some(self.sampler.sample(rng))
    }
}
