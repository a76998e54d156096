//! Entry points over the built-in catalog

use super::driver::Validator;
use super::result::{FieldValidation, Report, Validation};
use crate::manifest::{Manifest, ManifestError, find_missing_keys, parse_manifest_str};
use serde_json::Value;

/// Parse `raw` and run every rule
pub async fn validate_manifest(raw: &str) -> Result<Report, ManifestError> {
    let manifest = parse_manifest_str(raw)?;
    Ok(Validator::default().loop_through_keys(&manifest).await)
}

/// Parse `raw` and run the required rules only
pub async fn validate_required_fields(raw: &str) -> Result<Report, ManifestError> {
    let manifest = parse_manifest_str(raw)?;
    Ok(Validator::default().loop_through_required_keys(&manifest).await)
}

/// Live validation of one field; unknown fields pass
pub async fn validate_single_field(field: &str, value: Value) -> FieldValidation {
    Validator::default().find_single_field(field, value).await
}

/// Required members the manifest does not declare
pub fn report_missing(manifest: &Manifest) -> Vec<&'static str> {
    find_missing_keys(manifest)
}

/// Failing optional rules for members the manifest declares
pub async fn validate_improvements(manifest: &Manifest) -> Vec<Validation> {
    Validator::default().find_improvements(manifest).await
}

/// True when no required rule fails
pub async fn is_install_ready(manifest: &Manifest) -> bool {
    Validator::default()
        .loop_through_required_keys(manifest)
        .await
        .is_install_ready()
}
