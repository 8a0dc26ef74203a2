//! Suite file format and operations.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::factory_suites::get_factory_suite;
use crate::paths::find_suite;
use crate::perturbator_config::PerturbatorConfig;

/// An ordered list of perturbators applied one after the other.
///
/// Suites are stored as TOML files. They can be loaded from files, created
/// programmatically, and saved to disk.
///
/// # TOML Format
///
/// ```toml
/// name = "robustness"
/// description = "Volume swings and background noise"
/// seed = 42
/// data_root = "data/audio"
///
/// [[perturbators]]
/// type = "volume"
/// p = 0.5
/// [perturbators.distribution]
/// family = "normal"
/// loc = 0.0
/// scale = 10.0
///
/// [[perturbators]]
/// type = "background_noise"
/// p = 0.3
/// categories = ["esc-50"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Suite {
    /// Name of the suite.
    pub name: String,

    /// Optional description of the suite.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Seed for reproducible runs; callers seed their RNG with it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Root of the sound banks (defaults to `data/audio`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_root: Option<PathBuf>,

    /// Perturbators in application order.
    #[serde(default)]
    pub perturbators: Vec<PerturbatorConfig>,
}

impl Suite {
    /// Create a new empty suite.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            seed: None,
            data_root: None,
            perturbators: Vec::new(),
        }
    }

    /// Create a suite with a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the sound bank root.
    pub fn with_data_root(mut self, data_root: impl Into<PathBuf>) -> Self {
        self.data_root = Some(data_root.into());
        self
    }

    /// Add a perturbator to the suite.
    pub fn with_perturbator(mut self, perturbator: PerturbatorConfig) -> Self {
        self.perturbators.push(perturbator);
        self
    }

    /// Add multiple perturbators to the suite.
    pub fn with_perturbators(mut self, perturbators: impl IntoIterator<Item = PerturbatorConfig>) -> Self {
        self.perturbators.extend(perturbators);
        self
    }

    /// Load a suite from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let suite: Suite = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), name = %suite.name, "loaded suite");
        Ok(suite)
    }

    /// Load a suite from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Resolve a suite by factory name, file path, or user suite name.
    pub fn find(name: &str) -> Result<Self, ConfigError> {
        if let Some(path) = find_suite(name) {
            return Self::load(path);
        }
        get_factory_suite(name).ok_or_else(|| ConfigError::SuiteNotFound(name.to_string()))
    }

    /// Save the suite to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the suite to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Sound bank root, falling back to the default.
    pub fn data_root_or_default(&self) -> PathBuf {
        self.data_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(insynth_io::DEFAULT_DATA_ROOT))
    }

    /// Get the number of perturbators in the suite.
    pub fn len(&self) -> usize {
        self.perturbators.len()
    }

    /// Check if the suite is empty.
    pub fn is_empty(&self) -> bool {
        self.perturbators.is_empty()
    }

    /// Iterate over perturbator entries.
    pub fn iter(&self) -> impl Iterator<Item = &PerturbatorConfig> {
        self.perturbators.iter()
    }

    /// Perturbator types in order.
    pub fn perturbator_types(&self) -> Vec<&str> {
        self.perturbators.iter().map(|p| p.perturbator_type.as_str()).collect()
    }
}

impl Default for Suite {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perturbator_config::DistributionConfig;
    use tempfile::TempDir;

    #[test]
    fn test_suite_new() {
        let suite = Suite::new("Test Suite");
        assert_eq!(suite.name, "Test Suite");
        assert!(suite.description.is_none());
        assert!(suite.seed.is_none());
        assert!(suite.is_empty());
    }

    #[test]
    fn test_suite_builder() {
        let suite = Suite::new("builder")
            .with_description("volume and echo")
            .with_seed(7)
            .with_perturbator(PerturbatorConfig::new("volume").with_p(0.9))
            .with_perturbator(PerturbatorConfig::new("echo"));

        assert_eq!(suite.len(), 2);
        assert_eq!(suite.seed, Some(7));
        assert_eq!(suite.perturbator_types(), vec!["volume", "echo"]);
    }

    #[test]
    fn test_from_toml() {
        let suite = Suite::from_toml(
            r#"
name = "robustness"
seed = 42

[[perturbators]]
type = "volume"
p = 0.5
[perturbators.distribution]
family = "normal"
loc = 0.0
scale = 10.0

[[perturbators]]
type = "background_noise"
p = 0.3
categories = ["esc-50"]
"#,
        )
        .unwrap();

        assert_eq!(suite.name, "robustness");
        assert_eq!(suite.seed, Some(42));
        assert_eq!(suite.len(), 2);
        assert_eq!(
            suite.perturbators[0].distribution,
            Some(DistributionConfig::Normal { loc: 0.0, scale: 10.0 })
        );
        assert_eq!(suite.perturbators[1].categories, vec!["esc-50".to_string()]);
    }

    #[test]
    fn test_toml_roundtrip() {
        let suite = Suite::new("roundtrip")
            .with_data_root("/srv/audio")
            .with_perturbator(
                PerturbatorConfig::new("pitch")
                    .with_distribution(DistributionConfig::Uniform { low: -2.0, high: 2.0 }),
            )
            .with_perturbator(PerturbatorConfig::new("impulse_response").with_categories(["hall"]));

        let toml_str = suite.to_toml().unwrap();
        assert_eq!(Suite::from_toml(&toml_str).unwrap(), suite);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/suite.toml");
        let suite = Suite::new("saved").with_perturbator(PerturbatorConfig::new("clipping"));

        suite.save(&path).unwrap();
        assert_eq!(Suite::load(&path).unwrap(), suite);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Suite::load("/nonexistent/insynth/suite.toml").unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }

    #[test]
    fn test_find_factory_and_missing() {
        assert_eq!(Suite::find("numeric").unwrap().len(), 6);
        assert!(matches!(
            Suite::find("no-such-suite-anywhere"),
            Err(ConfigError::SuiteNotFound(_))
        ));
    }

    #[test]
    fn test_data_root_default() {
        assert_eq!(Suite::default().data_root_or_default(), PathBuf::from("data/audio"));
    }
}
