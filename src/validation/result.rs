//! Validation results and the aggregate report

use crate::rules::{Category, Rule, Verdict};
use crate::settings::ScoreWeights;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Outcome of one rule against one manifest
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    pub member: &'static str,
    pub category: Category,
    pub valid: bool,
    /// Only set when `valid` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_string: Option<String>,
    pub display_string: &'static str,
    pub info_string: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_link: Option<&'static str>,
    pub quick_fix: bool,
    pub test_name: &'static str,
}

impl Validation {
    fn base(rule: &Rule, valid: bool, error_string: Option<String>) -> Self {
        Self {
            member: rule.member(),
            category: rule.category(),
            valid,
            error_string,
            display_string: rule.display_string(),
            info_string: rule.info_string(),
            docs_link: rule.docs_link(),
            quick_fix: rule.has_quick_fix(),
            test_name: rule.id(),
        }
    }

    pub fn from_verdict(rule: &Rule, verdict: &Verdict) -> Self {
        match verdict {
            Ok(()) => Self::base(rule, true, None),
            Err(failure) => Self::base(rule, false, Some(rule.failure_message(failure))),
        }
    }

    /// Result for a predicate that did not complete
    pub fn faulted(rule: &Rule) -> Self {
        Self::base(
            rule,
            false,
            Some(format!("{} could not be validated", rule.member())),
        )
    }

    pub fn is_failure(&self, category: Category) -> bool {
        !self.valid && self.category == category
    }
}

/// Combined outcome of every rule bound to one field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValidation {
    pub field: String,
    pub valid: bool,
    pub errors: Vec<String>,
    pub validations: Vec<Validation>,
}

impl FieldValidation {
    /// No rule constrains `field`, so it passes
    pub fn unconstrained(field: &str) -> Self {
        Self {
            field: field.to_string(),
            valid: true,
            errors: Vec::new(),
            validations: Vec::new(),
        }
    }

    pub fn from_validations(field: &str, validations: Vec<Validation>) -> Self {
        let errors: Vec<String> = validations
            .iter()
            .filter_map(|v| v.error_string.clone())
            .collect();
        Self {
            field: field.to_string(),
            valid: validations.iter().all(|v| v.valid),
            errors,
            validations,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub passed: usize,
    pub failed: usize,
}

impl Tally {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }
}

/// Pass/fail counts per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub required: Tally,
    pub recommended: Tally,
    pub optional: Tally,
}

impl Summary {
    pub fn tally(&self, category: Category) -> Tally {
        match category {
            Category::Required => self.required,
            Category::Recommended => self.recommended,
            Category::Optional => self.optional,
        }
    }

    fn tally_mut(&mut self, category: Category) -> &mut Tally {
        match category {
            Category::Required => &mut self.required,
            Category::Recommended => &mut self.recommended,
            Category::Optional => &mut self.optional,
        }
    }
}

/// Weighted score: points from passed rules out of the points available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    pub earned: u32,
    pub possible: u32,
}

impl Score {
    pub fn percent(&self) -> u32 {
        if self.possible == 0 {
            return 100;
        }
        let percent = u64::from(self.earned) * 100 / u64::from(self.possible);
        u32::try_from(percent).unwrap_or(100)
    }
}

/// Ordered results of one evaluation pass
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    digest: String,
    checked_at: DateTime<Utc>,
    results: Vec<Validation>,
}

impl Report {
    pub fn new(digest: String, results: Vec<Validation>) -> Self {
        Self {
            digest,
            checked_at: Utc::now(),
            results,
        }
    }

    /// SHA-256 of the manifest snapshot the report was computed from
    pub fn digest(&self) -> &str {
        &self.digest
    }

    pub fn checked_at(&self) -> DateTime<Utc> {
        self.checked_at
    }

    pub fn results(&self) -> &[Validation] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn failed(&self) -> impl Iterator<Item = &Validation> {
        self.results.iter().filter(|v| !v.valid)
    }

    pub fn summary(&self) -> Summary {
        let mut summary = Summary::default();
        for result in &self.results {
            let tally = summary.tally_mut(result.category);
            if result.valid {
                tally.passed += 1;
            } else {
                tally.failed += 1;
            }
        }
        summary
    }

    pub fn score(&self, weights: &ScoreWeights) -> Score {
        self.results.iter().fold(Score { earned: 0, possible: 0 }, |mut score, result| {
            let weight = weights.weight(result.category);
            score.possible = score.possible.saturating_add(weight);
            if result.valid {
                score.earned = score.earned.saturating_add(weight);
            }
            score
        })
    }

    /// No required rule failed
    pub fn is_install_ready(&self) -> bool {
        !self.results.iter().any(|v| v.is_failure(Category::Required))
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a Validation;
    type IntoIter = std::slice::Iter<'a, Validation>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
