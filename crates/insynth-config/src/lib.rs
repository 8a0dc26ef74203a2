//! Perturbation suites for insynth.
//!
//! A suite is a TOML file naming an ordered list of perturbators, each with
//! its gate probability and an optional distribution override or sound bank
//! categories. This crate loads and saves suites, validates them against the
//! perturbator registry, and builds a [`PerturbatorChain`] from them.
//!
//! # Features
//!
//! - **Suites**: Load and save perturbation suites from TOML files
//! - **Chains**: Build the perturbators of a suite and apply them in order
//! - **Validation**: Reject unknown types, bad probabilities and distributions
//! - **Paths**: Platform-specific user suite directory
//! - **Factory Suites**: Built-in suites that need no files
//!
//! # Example
//!
//! ```rust,no_run
//! use insynth_config::{PerturbatorChain, PerturbatorConfig, Suite, user_suites_dir};
//!
//! let suite = Suite::new("nightly")
//!     .with_seed(7)
//!     .with_perturbator(PerturbatorConfig::new("volume").with_p(0.8))
//!     .with_perturbator(PerturbatorConfig::new("background_noise").with_categories(["esc-50"]));
//!
//! suite.save(user_suites_dir().join("nightly.toml")).unwrap();
//! let chain = PerturbatorChain::from_suite(&suite).unwrap();
//! ```

mod chain;
mod error;
mod perturbator_config;
mod suite;

/// Platform-specific paths for suites.
pub mod paths;

/// Suite validation.
pub mod validation;

/// Factory suites bundled with the library.
pub mod factory_suites;

pub use chain::PerturbatorChain;
pub use error::ConfigError;
pub use factory_suites::{
    FACTORY_SUITE_NAMES, factory_suite_names, factory_suites, get_factory_suite, is_factory_suite,
};
pub use paths::{
    ensure_user_suites_dir, find_suite, list_user_suites, suite_name_from_path, user_config_dir,
    user_suites_dir,
};
pub use perturbator_config::{DistributionConfig, PerturbatorConfig};
pub use suite::Suite;
pub use validation::{
    ValidationError, ValidationResult, validate_perturbator_config, validate_suite,
};
