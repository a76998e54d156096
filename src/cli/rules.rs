//! Rules command implementation

use crate::rules::{Catalog, Category, Rule};
use crate::settings::{OutputFormat, Settings};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RulesError {
    #[error("Failed to encode rules: {0}")]
    JsonError(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RuleInfo {
    id: &'static str,
    member: &'static str,
    category: Category,
    enabled: bool,
    display_string: &'static str,
    error_string: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    docs_link: Option<&'static str>,
    quick_fix: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_value: Option<Value>,
}

impl RuleInfo {
    fn new(rule: &Rule, settings: &Settings) -> Self {
        Self {
            id: rule.id(),
            member: rule.member(),
            category: rule.category(),
            enabled: !settings.rules.disabled.iter().any(|id| id == rule.id()),
            display_string: rule.display_string(),
            error_string: rule.error_string(),
            docs_link: rule.docs_link(),
            quick_fix: rule.has_quick_fix(),
            default_value: rule.suggested_value(),
        }
    }
}

/// List the built-in catalog in evaluation order
pub fn list_rules(format: OutputFormat, settings: &Settings) -> Result<(), RulesError> {
    let catalog = Catalog::builtin();
    let rules: Vec<RuleInfo> = catalog.rules().iter().map(|r| RuleInfo::new(r, settings)).collect();

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&rules)?);
        return Ok(());
    }

    println!("Rules ({}):", rules.len());
    println!();
    for rule in &rules {
        let state = if rule.enabled { "" } else { "  (disabled)" };
        println!("  {:<28} {:<12} {}{}", rule.id, rule.category, rule.display_string, state);
    }

    Ok(())
}
