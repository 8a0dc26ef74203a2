//! Perturbators that draw recordings from a sound bank.
//!
//! These have no sampled parameter: the gate alone decides whether they
//! fire, and the engine picks the file and mixing level. The bank is
//! resolved once, at construction.

use crate::error::PerturbError;
use crate::gate::Gate;
use crate::perturbator::Perturbator;
use insynth_core::Effect;
use insynth_effects::{AddBackgroundNoise, AddShortNoises, ApplyImpulseResponse};
use insynth_io::{BankKind, DEFAULT_DATA_ROOT, SoundBank};
use rand::RngCore;
use std::path::Path;

/// Run `effect` if `gate` fires, otherwise copy the input.
fn gated_apply(
    id: &'static str,
    gate: &Gate,
    effect: &dyn Effect,
    samples: &[f32],
    sample_rate: u32,
    rng: &mut dyn RngCore,
) -> Result<Vec<f32>, PerturbError> {
    if !gate.fires(rng) {
        tracing::debug!(perturbator = id, p = gate.probability(), "gate closed");
        return Ok(samples.to_vec());
    }
    tracing::debug!(perturbator = id, effect = effect.name(), "gate fired");
    Ok(effect.apply(samples, sample_rate, rng)?)
}

/// Overlays short noise events from the background-noise bank.
#[derive(Debug)]
pub struct ShortNoisePerturbator {
    gate: Gate,
    bank: SoundBank,
    engine: AddShortNoises,
}

impl ShortNoisePerturbator {
    /// Resolve `categories` under the default data root.
    pub fn new<S: AsRef<str>>(p: f64, categories: &[S]) -> Self {
        Self::with_data_root(p, DEFAULT_DATA_ROOT, categories)
    }

    /// Resolve `categories` under `data_root`.
    pub fn with_data_root<S: AsRef<str>>(p: f64, data_root: impl AsRef<Path>, categories: &[S]) -> Self {
        Self::from_bank(p, SoundBank::resolve(data_root, BankKind::BackgroundNoise, categories))
    }

    /// Use an already-resolved bank.
    pub fn from_bank(p: f64, bank: SoundBank) -> Self {
        let engine = AddShortNoises::new(bank.paths().to_vec());
        Self {
            gate: Gate::new(p),
            bank,
            engine,
        }
    }

    /// The resolved bank.
    pub fn bank(&self) -> &SoundBank {
        &self.bank
    }
}

impl Perturbator for ShortNoisePerturbator {
    fn id(&self) -> &'static str {
        "short_noise"
    }

    fn probability(&self) -> f64 {
        self.gate.probability()
    }

    fn apply(
        &self,
        samples: &[f32],
        sample_rate: u32,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<f32>, PerturbError> {
        gated_apply(self.id(), &self.gate, &self.engine, samples, sample_rate, rng)
    }
}

/// Mixes a background recording from the background-noise bank.
#[derive(Debug)]
pub struct BackgroundNoisePerturbator {
    gate: Gate,
    bank: SoundBank,
    engine: AddBackgroundNoise,
}

impl BackgroundNoisePerturbator {
    /// Resolve `categories` under the default data root.
    pub fn new<S: AsRef<str>>(p: f64, categories: &[S]) -> Self {
        Self::with_data_root(p, DEFAULT_DATA_ROOT, categories)
    }

    /// Resolve `categories` under `data_root`.
    pub fn with_data_root<S: AsRef<str>>(p: f64, data_root: impl AsRef<Path>, categories: &[S]) -> Self {
        Self::from_bank(p, SoundBank::resolve(data_root, BankKind::BackgroundNoise, categories))
    }

    /// Use an already-resolved bank.
    pub fn from_bank(p: f64, bank: SoundBank) -> Self {
        let engine = AddBackgroundNoise::new(bank.paths().to_vec());
        Self {
            gate: Gate::new(p),
            bank,
            engine,
        }
    }

    /// The resolved bank.
    pub fn bank(&self) -> &SoundBank {
        &self.bank
    }
}

impl Perturbator for BackgroundNoisePerturbator {
    fn id(&self) -> &'static str {
        "background_noise"
    }

    fn probability(&self) -> f64 {
        self.gate.probability()
    }

    fn apply(
        &self,
        samples: &[f32],
        sample_rate: u32,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<f32>, PerturbError> {
        gated_apply(self.id(), &self.gate, &self.engine, samples, sample_rate, rng)
    }
}

/// Convolves with an impulse response from the pulse-response bank.
#[derive(Debug)]
pub struct ImpulseResponsePerturbator {
    gate: Gate,
    bank: SoundBank,
    engine: ApplyImpulseResponse,
}

impl ImpulseResponsePerturbator {
    /// Resolve `categories` under the default data root.
    pub fn new<S: AsRef<str>>(p: f64, categories: &[S]) -> Self {
        Self::with_data_root(p, DEFAULT_DATA_ROOT, categories)
    }

    /// Resolve `categories` under `data_root`.
    pub fn with_data_root<S: AsRef<str>>(p: f64, data_root: impl AsRef<Path>, categories: &[S]) -> Self {
        Self::from_bank(p, SoundBank::resolve(data_root, BankKind::ImpulseResponse, categories))
    }

    /// Use an already-resolved bank.
    pub fn from_bank(p: f64, bank: SoundBank) -> Self {
        let engine = ApplyImpulseResponse::new(bank.paths().to_vec());
        Self {
            gate: Gate::new(p),
            bank,
            engine,
        }
    }

    /// The resolved bank.
    pub fn bank(&self) -> &SoundBank {
        &self.bank
    }
}

impl Perturbator for ImpulseResponsePerturbator {
    fn id(&self) -> &'static str {
        "impulse_response"
    }

    fn probability(&self) -> f64 {
        self.gate.probability()
    }

    fn apply(
        &self,
        samples: &[f32],
        sample_rate: u32,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<f32>, PerturbError> {
        gated_apply(self.id(), &self.gate, &self.engine, samples, sample_rate, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insynth_core::EffectError;
    use insynth_io::{WavSpec, write_wav};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;
    use tempfile::TempDir;

    fn data_root() -> TempDir {
        let root = TempDir::new().unwrap();
        let noise_dir = root.path().join("background_noise/hum");
        let ir_dir = root.path().join("pulse_response/room");
        fs::create_dir_all(&noise_dir).unwrap();
        fs::create_dir_all(&ir_dir).unwrap();

        let hum: Vec<f32> = (0..4000).map(|i| (i as f32 * 0.3).sin() * 0.2).collect();
        write_wav(noise_dir.join("hum.wav"), &hum, WavSpec::default()).unwrap();
        write_wav(ir_dir.join("dirac.wav"), &[1.0, 0.0, 0.0], WavSpec::default()).unwrap();
        root
    }

    #[test]
    fn test_banks_resolve_at_construction() {
        let root = data_root();
        let noise = BackgroundNoisePerturbator::with_data_root(1.0, root.path(), &["hum"]);
        let shorts = ShortNoisePerturbator::with_data_root(1.0, root.path(), &["hum"]);
        let ir = ImpulseResponsePerturbator::with_data_root(1.0, root.path(), &["room"]);
        assert_eq!(noise.bank().len(), 1);
        assert_eq!(shorts.bank().len(), 1);
        assert_eq!(ir.bank().len(), 1);
    }

    #[test]
    fn test_background_noise_changes_signal() {
        let root = data_root();
        let perturbator = BackgroundNoisePerturbator::with_data_root(1.0, root.path(), &["hum"]);
        let mut rng = StdRng::seed_from_u64(1);
        let input: Vec<f32> = (0..2000).map(|i| (i as f32 * 0.01).sin()).collect();
        let out = perturbator.apply(&input, 16000, &mut rng).unwrap();
        assert_eq!(out.len(), input.len());
        assert_ne!(out, input);
    }

    #[test]
    fn test_dirac_impulse_keeps_signal() {
        let root = data_root();
        let perturbator = ImpulseResponsePerturbator::with_data_root(1.0, root.path(), &["room"]);
        let mut rng = StdRng::seed_from_u64(1);
        let input: Vec<f32> = (0..500).map(|i| (i as f32 * 0.05).cos()).collect();
        let out = perturbator.apply(&input, 16000, &mut rng).unwrap();
        for (a, b) in input.iter().zip(&out) {
            assert!((a - b).abs() < 1e-4);
        }
    }

    #[test]
    fn test_empty_bank_fails_only_when_fired() {
        let mut rng = StdRng::seed_from_u64(1);
        let closed = BackgroundNoisePerturbator::from_bank(0.0, SoundBank::default());
        assert_eq!(closed.apply(&[0.5], 16000, &mut rng).unwrap(), vec![0.5]);

        let open = BackgroundNoisePerturbator::from_bank(1.0, SoundBank::default());
        let err = open.apply(&[0.5], 16000, &mut rng).unwrap_err();
        assert!(matches!(err, PerturbError::Effect(EffectError::EmptyBank)));
    }
}
