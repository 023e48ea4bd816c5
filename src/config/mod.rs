// src/config/mod.rs

//! Configuration loading and validation for the `taskdag` binary.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a plan file from disk (`loader.rs`).
//! - Validate references and priority settings (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{DEFAULT_CONFIG_FILE, load_and_validate, load_from_path};
pub use model::{ConfigFile, ConfigSection, PrioritySetting, RawConfigFile, TaskConfig};
pub use validate::validate_config;
