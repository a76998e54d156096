//! Missing command implementation

use super::input::{InputError, Source};
use crate::settings::OutputFormat;
use crate::validation::report_missing;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MissingError {
    #[error("{0}")]
    InputError(#[from] InputError),

    #[error("Failed to encode result: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// List required members the manifest leaves out. Returns whether none are missing.
pub fn show_missing(source: &Source, format: OutputFormat) -> Result<bool, MissingError> {
    let manifest = source.read()?;
    let missing = report_missing(&manifest);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&missing)?),
        OutputFormat::Text if missing.is_empty() => {
            println!("[{}] {} declares every required member", crate::APP_NAME, source);
        }
        OutputFormat::Text => {
            println!("[{}] {} is missing:", crate::APP_NAME, source);
            for member in &missing {
                println!("  {}", member);
            }
        }
    }

    Ok(missing.is_empty())
}
