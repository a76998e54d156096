//! Langs command implementation

use crate::settings::OutputFormat;
use crate::utils::LANGUAGE_CODES;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LangsError {
    #[error("Failed to encode language table: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Print the language code table
pub fn list_languages(format: OutputFormat) -> Result<(), LangsError> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(LANGUAGE_CODES)?),
        OutputFormat::Text => {
            for lang in LANGUAGE_CODES {
                println!("  {:<4} {}", lang.code, lang.name);
            }
        }
    }
    Ok(())
}
