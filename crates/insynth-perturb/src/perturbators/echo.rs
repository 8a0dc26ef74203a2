//! Echo with a random delay, computed directly on the samples.

use crate::domain::ECHO_DOMAIN;
use crate::error::PerturbError;
use crate::perturbator::{GatedSampler, Perturbator};
use crate::sampler::{Distribution, Sampler};
use rand::RngCore;

/// Default delay draw in seconds.
pub const DEFAULT_DISTRIBUTION: Distribution = Distribution::Normal { loc: 1.0, scale: 2.0 };

/// Add a copy of `samples` delayed by `delay_secs`.
///
/// `out[i] = x[i] + x[(i - k) mod N]` with `k = floor(delay_secs * sample_rate)`
/// and a Euclidean modulo, so the start of the output picks up the *end* of
/// the input. A delay of zero doubles the signal. Non-finite delays saturate
/// before the modulo, so any `delay_secs` is accepted.
pub fn echo(samples: &[f32], sample_rate: u32, delay_secs: f64) -> Vec<f32> {
    if samples.is_empty() {
        return Vec::new();
    }

    let n = samples.len() as i64;
    let k = ((delay_secs * f64::from(sample_rate)).floor() as i64).rem_euclid(n);
    (0..n)
        .map(|i| samples[i as usize] + samples[(i - k).rem_euclid(n) as usize])
        .collect()
}

/// Mixes in a delayed copy of the signal; the delay is drawn in seconds and
/// clamped to `[0, 5]`.
#[derive(Debug)]
pub struct EchoPerturbator {
    inner: GatedSampler,
}

impl EchoPerturbator {
    /// Create with the default delay distribution.
    pub fn new(p: f64) -> Self {
        Self::with_sampler(p, DEFAULT_DISTRIBUTION)
    }

    /// Create with a custom delay sampler.
    pub fn with_sampler(p: f64, sampler: impl Sampler + 'static) -> Self {
        Self {
            inner: GatedSampler::new(p, sampler),
        }
    }
}

impl Perturbator for EchoPerturbator {
    fn id(&self) -> &'static str {
        "echo"
    }

    fn probability(&self) -> f64 {
        self.inner.probability()
    }

    fn apply(
        &self,
        samples: &[f32],
        sample_rate: u32,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<f32>, PerturbError> {
        let Some(raw) = self.inner.draw(self.id(), rng) else {
            return Ok(samples.to_vec());
        };
        let delay_secs = ECHO_DOMAIN.map(raw);
        tracing::debug!(raw, delay_secs, "echo");

        Ok(echo(samples, sample_rate, delay_secs))
    }
}
