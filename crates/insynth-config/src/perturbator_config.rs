//! Per-perturbator configuration entries.

use insynth_perturb::{DEFAULT_PROBABILITY, Distribution, PerturbError, PerturbatorOptions};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Distribution as written in a suite file, tagged by `family`.
///
/// ```toml
/// [perturbators.distribution]
/// family = "uniform"
/// low = -6.0
/// high = 6.0
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "family", rename_all = "lowercase")]
pub enum DistributionConfig {
    /// Gaussian.
    Normal {
        /// Mean.
        loc: f64,
        /// Standard deviation.
        scale: f64,
    },
    /// Uniform on `[low, high)`.
    Uniform {
        /// Lower bound.
        low: f64,
        /// Upper bound.
        high: f64,
    },
    /// Fixed value.
    Constant {
        /// The value every draw returns.
        value: f64,
    },
}

impl DistributionConfig {
    /// Validate and convert into a sampler.
    pub fn to_distribution(&self) -> Result<Distribution, PerturbError> {
        match *self {
            DistributionConfig::Normal { loc, scale } => Distribution::normal(loc, scale),
            DistributionConfig::Uniform { low, high } => Distribution::uniform(low, high),
            DistributionConfig::Constant { value } => {
                if value.is_finite() {
                    Ok(Distribution::constant(value))
                } else {
                    Err(PerturbError::distribution(format!(
                        "constant value must be finite, got {value}"
                    )))
                }
            }
        }
    }
}

impl From<Distribution> for DistributionConfig {
    fn from(distribution: Distribution) -> Self {
        match distribution {
            Distribution::Normal { loc, scale } => DistributionConfig::Normal { loc, scale },
            Distribution::Uniform { low, high } => DistributionConfig::Uniform { low, high },
            Distribution::Constant(value) => DistributionConfig::Constant { value },
        }
    }
}

/// One perturbator in a suite.
///
/// # TOML Format
///
/// ```toml
/// [[perturbators]]
/// type = "pitch"
/// p = 0.4
/// [perturbators.distribution]
/// family = "normal"
/// loc = 0.0
/// scale = 4.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerturbatorConfig {
    /// Registry id of the perturbator.
    #[serde(rename = "type")]
    pub perturbator_type: String,

    /// Gate probability.
    #[serde(default = "default_probability")]
    pub p: f64,

    /// Overrides the perturbator's default distribution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<DistributionConfig>,

    /// Sound bank categories (banked perturbators only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
}

fn default_probability() -> f64 {
    DEFAULT_PROBABILITY
}

impl PerturbatorConfig {
    /// Create an entry with the default probability and distribution.
    pub fn new(perturbator_type: impl Into<String>) -> Self {
        Self {
            perturbator_type: perturbator_type.into(),
            p: DEFAULT_PROBABILITY,
            distribution: None,
            categories: Vec::new(),
        }
    }

    /// Set the gate probability.
    pub fn with_p(mut self, p: f64) -> Self {
        self.p = p;
        self
    }

    /// Override the distribution.
    pub fn with_distribution(mut self, distribution: impl Into<DistributionConfig>) -> Self {
        self.distribution = Some(distribution.into());
        self
    }

    /// Set the sound bank categories.
    pub fn with_categories<S: Into<String>>(mut self, categories: impl IntoIterator<Item = S>) -> Self {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Registry options for this entry, with banks resolved under `data_root`.
    pub fn options(&self, data_root: &Path) -> Result<PerturbatorOptions, PerturbError> {
        let mut options = PerturbatorOptions::default()
            .with_p(self.p)
            .with_categories(self.categories.iter().cloned())
            .with_data_root(data_root);
        if let Some(distribution) = &self.distribution {
            options = options.with_distribution(distribution.to_distribution()?);
        }
        Ok(options)
    }
}
