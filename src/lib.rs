//! Manifest Validation - Web App Manifest checks for PWAs
//!
//! Runs an ordered catalog of rules over a manifest and reports, per rule,
//! whether it passed and how to fix it. Rules are grouped into required,
//! recommended and optional tiers; a manifest with no failing required rule
//! is ready to be packaged.

pub mod cli;
pub mod manifest;
pub mod rules;
pub mod settings;
pub mod utils;
pub mod validation;

pub use manifest::{Manifest, ManifestError};
pub use rules::{Catalog, Category, Rule};
pub use validation::{
    FieldValidation, Report, Validation, Validator, is_install_ready, report_missing,
    validate_improvements, validate_manifest, validate_required_fields, validate_single_field,
};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "manifest-validation";

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "MANIFEST_VALIDATION_LOG";
