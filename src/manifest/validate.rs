//! Cheap pre-checks that run before rule evaluation

use super::schema::Manifest;
use crate::rules::REQUIRED_FIELDS;
use serde_json::Value;

/// True if `raw` is well-formed JSON text
pub fn is_valid_json(raw: &str) -> bool {
    serde_json::from_str::<Value>(raw).is_ok()
}

/// Every required member the manifest does not declare, in `REQUIRED_FIELDS` order.
///
/// Presence only: a declared but invalid member is not reported here.
pub fn find_missing_keys(manifest: &Manifest) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| !manifest.contains(field))
        .collect()
}
