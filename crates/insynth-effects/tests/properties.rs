//! Property-based tests for the effect engines.
//!
//! Checks the contracts every perturbator relies on: output length, identity
//! at neutral parameters, and bounded output for the clipper.

use insynth_core::{Effect, peak};
use insynth_effects::{ClippingDistortion, Gain, GaussianNoise, Mp3Compression, PitchShift, SUPPORTED_BITRATES};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Clipping never widens the signal's range.
    #[test]
    fn clipping_stays_within_input_range(
        samples in prop::collection::vec(-1.0f32..=1.0f32, 1..512),
        threshold in 0.0f32..=100.0f32,
    ) {
        let mut rng = StdRng::seed_from_u64(0);
        let out = ClippingDistortion::new(threshold).apply(&samples, 16000, &mut rng).unwrap();
        prop_assert_eq!(out.len(), samples.len());
        prop_assert!(peak(&out) <= peak(&samples) + 1e-6);
    }

    /// Gain scales the peak by the linear factor.
    #[test]
    fn gain_scales_peak(
        samples in prop::collection::vec(-1.0f32..=1.0f32, 1..256),
        gain_db in -20.0f32..=20.0f32,
    ) {
        let mut rng = StdRng::seed_from_u64(0);
        let out = Gain::new(gain_db).apply(&samples, 16000, &mut rng).unwrap();
        let expected = peak(&samples) * 10.0f32.powf(gain_db / 20.0);
        prop_assert!((peak(&out) - expected).abs() <= 1e-4 * expected.max(1.0));
    }

    /// Every supported bitrate keeps the input length.
    #[test]
    fn compression_keeps_length(
        samples in prop::collection::vec(-1.0f32..=1.0f32, 1..3000),
        index in 0usize..SUPPORTED_BITRATES.len(),
    ) {
        let mut rng = StdRng::seed_from_u64(0);
        let out = Mp3Compression::new(SUPPORTED_BITRATES[index]).apply(&samples, 16000, &mut rng).unwrap();
        prop_assert_eq!(out.len(), samples.len());
        prop_assert!(out.iter().all(|s| s.is_finite()));
    }

    /// Integer pitch shifts keep the input length.
    #[test]
    fn pitch_keeps_length(
        samples in prop::collection::vec(-1.0f32..=1.0f32, 1..3000),
        semitones in -12i32..=12,
    ) {
        let mut rng = StdRng::seed_from_u64(0);
        let out = PitchShift::new(semitones as f32).apply(&samples, 16000, &mut rng).unwrap();
        prop_assert_eq!(out.len(), samples.len());
    }

    /// Noise output depends only on the seed.
    #[test]
    fn noise_is_seed_deterministic(
        samples in prop::collection::vec(-1.0f32..=1.0f32, 1..256),
        seed in any::<u64>(),
    ) {
        let effect = GaussianNoise::new(0.3);
        let a = effect.apply(&samples, 16000, &mut StdRng::seed_from_u64(seed)).unwrap();
        let b = effect.apply(&samples, 16000, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(a, b);
    }
}
