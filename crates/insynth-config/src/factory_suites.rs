//! Factory suites bundled with insynth.
//!
//! These are always available without external files and double as
//! starting points for custom suites.

use crate::Suite;

/// Names of the factory suites.
pub static FACTORY_SUITE_NAMES: &[&str] = &["default", "numeric", "speech-robustness"];

static FACTORY_SUITES_TOML: &[(&str, &str)] = &[
    ("default", DEFAULT_SUITE),
    ("numeric", NUMERIC_SUITE),
    ("speech-robustness", SPEECH_ROBUSTNESS_SUITE),
];

/// Every built-in perturbator with its default distribution.
const DEFAULT_SUITE: &str = r#"
name = "default"
description = "All nine perturbators with their default distributions"

[[perturbators]]
type = "short_noise"
p = 0.5
categories = ["esc-50"]

[[perturbators]]
type = "background_noise"
p = 0.5
categories = ["esc-50"]

[[perturbators]]
type = "impulse_response"
p = 0.5
categories = ["rooms"]

[[perturbators]]
type = "white_noise"
p = 0.5

[[perturbators]]
type = "compression"
p = 0.5

[[perturbators]]
type = "pitch"
p = 0.5

[[perturbators]]
type = "clipping"
p = 0.5

[[perturbators]]
type = "volume"
p = 0.5

[[perturbators]]
type = "echo"
p = 0.5
"#;

/// Perturbators that need no sound banks.
const NUMERIC_SUITE: &str = r#"
name = "numeric"
description = "The parametric perturbators; needs no sound banks"

[[perturbators]]
type = "white_noise"
p = 0.5

[[perturbators]]
type = "compression"
p = 0.5

[[perturbators]]
type = "pitch"
p = 0.5

[[perturbators]]
type = "clipping"
p = 0.5

[[perturbators]]
type = "volume"
p = 0.5

[[perturbators]]
type = "echo"
p = 0.5
"#;

/// Milder settings for speech models.
const SPEECH_ROBUSTNESS_SUITE: &str = r#"
name = "speech-robustness"
description = "Light noise, codec artifacts and level changes for speech"

[[perturbators]]
type = "background_noise"
p = 0.3
categories = ["esc-50"]

[[perturbators]]
type = "white_noise"
p = 0.3
[perturbators.distribution]
family = "uniform"
low = 0.0
high = 0.1

[[perturbators]]
type = "compression"
p = 0.4
[perturbators.distribution]
family = "uniform"
low = 24.0
high = 128.0

[[perturbators]]
type = "pitch"
p = 0.2
[perturbators.distribution]
family = "normal"
loc = 0.0
scale = 2.0

[[perturbators]]
type = "volume"
p = 0.5
[perturbators.distribution]
family = "normal"
loc = 0.0
scale = 6.0
"#;

/// Get all factory suites.
///
/// ```rust
/// use insynth_config::factory_suites;
///
/// for suite in factory_suites() {
///     println!("{}: {} perturbators", suite.name, suite.len());
/// }
/// ```
pub fn factory_suites() -> Vec<Suite> {
    FACTORY_SUITES_TOML
        .iter()
        .filter_map(|(_, toml)| Suite::from_toml(toml).ok())
        .collect()
}

/// Get a factory suite by name (case-insensitive).
pub fn get_factory_suite(name: &str) -> Option<Suite> {
    let name_lower = name.to_lowercase();
    FACTORY_SUITES_TOML
        .iter()
        .find(|(suite_name, _)| *suite_name == name_lower)
        .and_then(|(_, toml)| Suite::from_toml(toml).ok())
}

/// Get the list of factory suite names.
pub fn factory_suite_names() -> &'static [&'static str] {
    FACTORY_SUITE_NAMES
}

/// Check if a name refers to a factory suite.
pub fn is_factory_suite(name: &str) -> bool {
    let name_lower = name.to_lowercase();
    FACTORY_SUITE_NAMES.iter().any(|n| *n == name_lower)
}
