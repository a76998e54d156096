//! Field command implementation

use crate::settings::{OutputFormat, Settings};
use crate::validation::Validator;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FieldError {
    #[error("Failed to encode result: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Parse a command-line value as JSON, falling back to a plain string
pub fn parse_field_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Validate one field value. Returns whether it passed.
pub async fn validate_field(
    field: &str,
    raw_value: &str,
    format: OutputFormat,
    settings: &Settings,
) -> Result<bool, FieldError> {
    let value = parse_field_value(raw_value);
    let result = Validator::from_settings(&settings.rules)
        .find_single_field(field, value)
        .await;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => {
            if result.validations.is_empty() {
                println!("[{}] {}: no rules for this field", crate::APP_NAME, field);
            } else if result.valid {
                println!("[{}] {}: valid", crate::APP_NAME, field);
            } else {
                println!("[{}] {}: invalid", crate::APP_NAME, field);
                for error in &result.errors {
                    println!("  {}", error);
                }
            }
        }
    }

    Ok(result.valid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn values_are_json_or_strings() {
        assert_eq!(parse_field_value("\"My App\""), json!("My App"));
        assert_eq!(parse_field_value("My App"), json!("My App"));
        assert_eq!(parse_field_value("[1, 2]"), json!([1, 2]));
        assert_eq!(parse_field_value("true"), json!(true));
    }
}
