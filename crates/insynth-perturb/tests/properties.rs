//! Property-based tests for the perturbation framework.
//!
//! Covers the mapping policy (saturation, idempotence, monotonicity,
//! snapping), the closed-gate identity for every perturbator, and echo
//! length.

use insynth_perturb::domain::{
    CLIPPING_DOMAIN, COMPRESSION_DOMAIN, ECHO_DOMAIN, PITCH_DOMAIN, VOLUME_DOMAIN, WHITE_NOISE_DOMAIN,
};
use insynth_perturb::{
    BITRATE_CANDIDATES, PerturbatorOptions, PerturbatorRegistry, clamp, echo, snap_to_nearest,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Clamping twice is the same as clamping once.
    #[test]
    fn clamp_idempotent(x in -1e6f64..1e6, lo in -100.0f64..0.0, hi in 0.0f64..100.0) {
        let once = clamp(x, lo, hi);
        prop_assert_eq!(clamp(once, lo, hi), once);
        prop_assert!(once >= lo && once <= hi);
    }

    /// Clamping preserves order.
    #[test]
    fn clamp_monotonic(a in -1e3f64..1e3, b in -1e3f64..1e3) {
        let (x, y) = if a <= b { (a, b) } else { (b, a) };
        for domain in [WHITE_NOISE_DOMAIN, CLIPPING_DOMAIN, VOLUME_DOMAIN, ECHO_DOMAIN, PITCH_DOMAIN] {
            prop_assert!(domain.map(x) <= domain.map(y));
        }
    }

    /// Snapping returns a supported bitrate no farther than any other.
    #[test]
    fn snap_is_nearest_member(x in -1000.0f64..1000.0) {
        let snapped = snap_to_nearest(x, &BITRATE_CANDIDATES);
        prop_assert!(BITRATE_CANDIDATES.contains(&snapped));
        let distance = (snapped - x).abs();
        prop_assert!(BITRATE_CANDIDATES.iter().all(|c| (c - x).abs() >= distance));
        prop_assert_eq!(COMPRESSION_DOMAIN.map(x), snapped);
    }

    /// Pitch maps any draw within ±1000 to an integer in [-12, 12].
    #[test]
    fn pitch_maps_to_integer_semitones(x in -1000.0f64..=1000.0) {
        let semitones = PITCH_DOMAIN.map(x);
        prop_assert_eq!(semitones.fract(), 0.0);
        prop_assert!((-12.0..=12.0).contains(&semitones));
    }

    /// Echo keeps the input length at any delay.
    #[test]
    fn echo_keeps_length(
        samples in prop::collection::vec(-1.0f32..=1.0f32, 0..300),
        delay in 0.0f64..=5.0,
        sample_rate in 1u32..48000,
    ) {
        prop_assert_eq!(echo(&samples, sample_rate, delay).len(), samples.len());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// With p = 0 every perturbator is the identity, whatever the seed.
    #[test]
    fn closed_gate_is_identity(
        samples in prop::collection::vec(-1.0f32..=1.0f32, 1..2000),
        seed in any::<u64>(),
    ) {
        let registry = PerturbatorRegistry::new();
        let options = PerturbatorOptions::default().with_p(0.0);
        for descriptor in registry.all_perturbators() {
            let perturbator = registry.create(descriptor.id, &options).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let out = perturbator.apply(&samples, 16000, &mut rng).unwrap();
            prop_assert_eq!(&out, &samples, "{} changed the signal", descriptor.id);
        }
    }
}
