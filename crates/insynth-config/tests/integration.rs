//! Integration tests for insynth-config.
//!
//! These tests verify end-to-end functionality across modules.

use insynth_config::{
    ConfigError, DistributionConfig, PerturbatorChain, PerturbatorConfig, Suite, ValidationError,
    factory_suites, get_factory_suite,
};
use insynth_io::{WavSpec, write_wav};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

fn tone(len: usize) -> Vec<f32> {
    (0..len).map(|i| (i as f32 * 0.05).sin() * 0.5).collect()
}

#[test]
fn test_suite_save_load_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("suites/robustness.toml");

    let suite = Suite::new("robustness")
        .with_description("Volume swings and background noise")
        .with_seed(42)
        .with_perturbator(
            PerturbatorConfig::new("volume")
                .with_distribution(DistributionConfig::Normal { loc: 0.0, scale: 10.0 }),
        )
        .with_perturbator(PerturbatorConfig::new("background_noise").with_p(0.3).with_categories(["esc-50"]));

    suite.save(&path).unwrap();
    let loaded = Suite::load(&path).unwrap();
    assert_eq!(loaded, suite);
}

#[test]
fn test_validation_rejects_probability_above_one() {
    let suite = Suite::from_toml(
        r#"
name = "too likely"
[[perturbators]]
type = "echo"
p = 1.2
"#,
    )
    .unwrap();

    match PerturbatorChain::from_suite(&suite) {
        Err(ConfigError::Validation(ValidationError::ProbabilityOutOfRange { p, .. })) => {
            assert_eq!(p, 1.2);
        }
        other => panic!("expected probability error, got {other:?}"),
    }
}

#[test]
fn test_factory_suites_build_chains() {
    for suite in factory_suites() {
        let chain = PerturbatorChain::from_suite(&suite)
            .unwrap_or_else(|e| panic!("factory suite '{}' failed: {e}", suite.name));
        assert_eq!(chain.len(), suite.len());
    }
}

#[test]
fn test_numeric_suite_is_deterministic_per_seed() {
    let chain = PerturbatorChain::from_suite(&get_factory_suite("numeric").unwrap()).unwrap();
    let input = tone(8000);

    let a = chain.apply(&input, 16000, &mut StdRng::seed_from_u64(11)).unwrap();
    let b = chain.apply(&input, 16000, &mut StdRng::seed_from_u64(11)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), input.len());
    assert!(a.iter().all(|s| s.is_finite()));
}

#[test]
fn test_closed_gates_pass_through() {
    let suite = get_factory_suite("numeric").unwrap();
    let closed = Suite {
        perturbators: suite.perturbators.into_iter().map(|p| p.with_p(0.0)).collect(),
        ..suite
    };
    let chain = PerturbatorChain::from_suite(&closed).unwrap();
    let input = tone(2000);
    assert_eq!(chain.apply(&input, 16000, &mut StdRng::seed_from_u64(5)).unwrap(), input);
}

#[test]
fn test_chain_uses_suite_data_root() {
    let root = TempDir::new().unwrap();
    let category = root.path().join("pulse_response/room");
    std::fs::create_dir_all(&category).unwrap();
    write_wav(category.join("ir.wav"), &[1.0, 0.5], WavSpec::default()).unwrap();

    let suite = Suite::new("room")
        .with_data_root(root.path())
        .with_perturbator(PerturbatorConfig::new("impulse_response").with_p(1.0).with_categories(["room"]));
    let chain = PerturbatorChain::from_suite(&suite).unwrap();

    let out = chain.apply(&[1.0, 0.0, 0.0, 0.0], 16000, &mut StdRng::seed_from_u64(0)).unwrap();
    assert_eq!(out.len(), 4);
    assert!((out[0] - 1.0).abs() < 1e-4);
    assert!((out[1] - 0.5).abs() < 1e-4);
}
