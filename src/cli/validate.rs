//! Validate command implementation

use super::input::{InputError, Source};
use crate::rules::Category;
use crate::settings::{OutputFormat, Settings};
use crate::validation::{Report, Validator};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidateError {
    #[error("{0}")]
    InputError(#[from] InputError),

    #[error("Failed to encode report: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Validate one manifest. Returns whether it is install ready.
pub async fn validate(
    source: &Source,
    required_only: bool,
    format: OutputFormat,
    settings: &Settings,
) -> Result<bool, ValidateError> {
    let manifest = source.read()?;
    let validator = Validator::from_settings(&settings.rules);

    let report = if required_only {
        validator.loop_through_required_keys(&manifest).await
    } else {
        validator.loop_through_keys(&manifest).await
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            println!("[{}] Validating {}", crate::APP_NAME, source);
            print_report(&report, settings);
        }
    }

    Ok(report.is_install_ready())
}

/// Human-readable report, grouped by category
pub fn print_report(report: &Report, settings: &Settings) {
    println!("  Digest:  {}", report.digest());
    println!("  Checked: {}", report.checked_at().format("%Y-%m-%d %H:%M:%S UTC"));

    for category in Category::ALL {
        let mut results = report.results().iter().filter(|v| v.category == category).peekable();
        if results.peek().is_none() {
            continue;
        }

        println!();
        println!("{}:", capitalize(category.as_str()));
        for result in results {
            let mark = if result.valid { "pass" } else { "FAIL" };
            println!("  [{}] {}", mark, result.display_string);
            if let Some(error) = &result.error_string {
                println!("         {}", error);
            }
        }
    }

    let summary = report.summary();
    let score = report.score(&settings.score);
    println!();
    println!(
        "Required {}/{}, recommended {}/{}, optional {}/{}",
        summary.required.passed,
        summary.required.total(),
        summary.recommended.passed,
        summary.recommended.total(),
        summary.optional.passed,
        summary.optional.total(),
    );
    println!("Score: {}/{} ({}%)", score.earned, score.possible, score.percent());
    println!(
        "Install ready: {}",
        if report.is_install_ready() { "yes" } else { "no" }
    );
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn capitalizes_category_names() {
        assert_eq!(capitalize("recommended"), "Recommended");
        assert_eq!(capitalize(""), "");
    }

    #[tokio::test]
    async fn missing_required_members_are_not_install_ready() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "Webboard"}}"#).unwrap();
        let source = Source::Path(file.path().to_path_buf());

        let ready = validate(&source, true, OutputFormat::Json, &Settings::default())
            .await
            .unwrap();
        assert!(!ready);
    }
}
