//! Settings schema and defaults

use crate::rules::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub output: OutputSettings,
    pub score: ScoreWeights,
    pub rules: RuleSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Points a passed rule is worth, by category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub required: u32,
    pub recommended: u32,
    pub optional: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            required: 3,
            recommended: 2,
            optional: 1,
        }
    }
}

impl ScoreWeights {
    pub fn weight(&self, category: Category) -> u32 {
        match category {
            Category::Required => self.required,
            Category::Recommended => self.recommended,
            Category::Optional => self.optional,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSettings {
    /// Rule ids skipped in every pass
    pub disabled: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_files_fill_in_defaults() {
        let settings: Settings = toml::from_str("[score]\nrequired = 10\n").unwrap();
        assert_eq!(settings.score.required, 10);
        assert_eq!(settings.score.recommended, 2);
        assert_eq!(settings.output.format, OutputFormat::Text);
        assert!(settings.rules.disabled.is_empty());
    }

    #[test]
    fn format_names() {
        let settings: Settings = toml::from_str("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(settings.output.format, OutputFormat::Json);
        assert!(toml::from_str::<Settings>("[output]\nformat = \"xml\"\n").is_err());
    }

    #[test]
    fn weights_by_category() {
        let weights = ScoreWeights::default();
        assert_eq!(weights.weight(Category::Required), 3);
        assert_eq!(weights.weight(Category::Optional), 1);
    }
}
