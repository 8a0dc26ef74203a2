//! Suite validation against the perturbator registry.
//!
//! Validation catches configuration mistakes before anything is built:
//! unknown perturbator types, gate probabilities outside `[0, 1]`, invalid
//! distribution parameters, and banked perturbators without categories.
//!
//! # Example
//!
//! ```rust
//! use insynth_config::{PerturbatorConfig, validate_perturbator_config};
//! use insynth_perturb::PerturbatorRegistry;
//!
//! let registry = PerturbatorRegistry::new();
//! assert!(validate_perturbator_config(&registry, &PerturbatorConfig::new("echo")).is_ok());
//! assert!(validate_perturbator_config(&registry, &PerturbatorConfig::new("reverb")).is_err());
//! ```

use crate::perturbator_config::PerturbatorConfig;
use crate::suite::Suite;
use insynth_perturb::{PerturbatorKind, PerturbatorRegistry};
use thiserror::Error;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Unknown perturbator type.
    #[error("unknown perturbator type: {0}")]
    UnknownPerturbator(String),

    /// Gate probability outside `[0, 1]` or not finite.
    #[error("probability {p} for '{perturbator}' out of range [0, 1]")]
    ProbabilityOutOfRange {
        /// Perturbator type.
        perturbator: String,
        /// The rejected probability.
        p: f64,
    },

    /// Distribution parameters are invalid or not applicable.
    #[error("invalid distribution for '{perturbator}': {reason}")]
    InvalidDistribution {
        /// Perturbator type.
        perturbator: String,
        /// Description of the problem.
        reason: String,
    },

    /// A banked perturbator has no sound bank categories.
    #[error("'{0}' draws from a sound bank but lists no categories")]
    MissingCategories(String),

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validate one suite entry.
pub fn validate_perturbator_config(
    registry: &PerturbatorRegistry,
    config: &PerturbatorConfig,
) -> ValidationResult<()> {
    let id = config.perturbator_type.as_str();
    let descriptor = registry
        .get(id)
        .ok_or_else(|| ValidationError::UnknownPerturbator(id.to_string()))?;

    let mut errors = Vec::new();

    if !(0.0..=1.0).contains(&config.p) {
        errors.push(ValidationError::ProbabilityOutOfRange {
            perturbator: id.to_string(),
            p: config.p,
        });
    }

    match (descriptor.kind, &config.distribution) {
        (PerturbatorKind::Banked(_), Some(_)) => {
            errors.push(ValidationError::InvalidDistribution {
                perturbator: id.to_string(),
                reason: "banked perturbators do not sample a distribution".to_string(),
            });
        }
        (PerturbatorKind::Parametric, Some(distribution)) => {
            if let Err(e) = distribution.to_distribution() {
                errors.push(ValidationError::InvalidDistribution {
                    perturbator: id.to_string(),
                    reason: e.to_string(),
                });
            }
        }
        _ => {}
    }

    if matches!(descriptor.kind, PerturbatorKind::Banked(_)) && config.categories.is_empty() {
        errors.push(ValidationError::MissingCategories(id.to_string()));
    }

    collapse(errors)
}

/// Validate every entry of a suite.
pub fn validate_suite(registry: &PerturbatorRegistry, suite: &Suite) -> ValidationResult<()> {
    let mut errors = Vec::new();
    for config in suite.iter() {
        match validate_perturbator_config(registry, config) {
            Ok(()) => {}
            Err(ValidationError::Multiple(inner)) => errors.extend(inner),
            Err(e) => errors.push(e),
        }
    }
    collapse(errors)
}

fn collapse(mut errors: Vec<ValidationError>) -> ValidationResult<()> {
    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}
