//! Improvements command implementation

use super::input::{InputError, Source};
use crate::settings::{OutputFormat, Settings};
use crate::validation::Validator;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImprovementsError {
    #[error("{0}")]
    InputError(#[from] InputError),

    #[error("Failed to encode result: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Show failing optional rules for members the manifest declares
pub async fn show_improvements(
    source: &Source,
    format: OutputFormat,
    settings: &Settings,
) -> Result<(), ImprovementsError> {
    let manifest = source.read()?;
    let improvements = Validator::from_settings(&settings.rules)
        .find_improvements(&manifest)
        .await;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&improvements)?);
        return Ok(());
    }

    if improvements.is_empty() {
        println!("[{}] No improvements for {}", crate::APP_NAME, source);
        return Ok(());
    }

    println!("[{}] Possible improvements for {}:", crate::APP_NAME, source);
    println!();
    for improvement in &improvements {
        println!("  {}", improvement.member);
        if let Some(error) = &improvement.error_string {
            println!("    {}", error);
        }
        if let Some(link) = improvement.docs_link {
            println!("    See: {}", link);
        }
    }

    Ok(())
}
