//! Helpers shared by the commands.

use insynth_config::Suite;
use insynth_core::{linear_to_db, peak, rms};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Seeded RNG when a seed is given, entropy-seeded otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Resolve a suite by factory name, path, or user suite name.
pub fn load_suite(name: &str) -> anyhow::Result<Suite> {
    let suite = Suite::find(name)?;
    tracing::info!(suite = %suite.name, perturbators = suite.len(), "loaded suite");
    Ok(suite)
}

/// One-line RMS / peak summary.
pub fn level_summary(samples: &[f32]) -> String {
    format!(
        "RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(rms(samples)),
        linear_to_db(peak(samples))
    )
}
