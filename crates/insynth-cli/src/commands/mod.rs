//! CLI command implementations.

pub mod bank;
pub mod batch;
pub mod common;
pub mod list;
pub mod perturb;
