//! Evaluation drivers
//!
//! Every pass spawns one task per rule and joins the handles in catalog
//! order, so the report order never depends on which predicate finishes
//! first. A predicate that panics only loses its own result.

use super::result::{FieldValidation, Report, Validation};
use crate::manifest::Manifest;
use crate::rules::{Catalog, Category, Rule};
use crate::settings::RuleSettings;
use futures::future::join_all;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Runs catalog rules against manifests
#[derive(Debug, Clone)]
pub struct Validator {
    catalog: Arc<Catalog>,
    disabled: HashSet<String>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl Validator {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            disabled: HashSet::new(),
        }
    }

    /// Built-in catalog minus the rules turned off in settings
    pub fn from_settings(settings: &RuleSettings) -> Self {
        Self::default().with_disabled(settings.disabled.iter())
    }

    /// Skip the given rule ids in every pass
    pub fn with_disabled<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for id in ids {
            let id = id.as_ref();
            if self.catalog.find(id).is_none() {
                warn!(rule = id, "disabling unknown rule");
            }
            self.disabled.insert(id.to_string());
        }
        self
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    fn enabled(&self, rule: &Rule) -> bool {
        !self.disabled.contains(rule.id())
    }

    fn positions(&self, keep: impl Fn(&Rule) -> bool) -> Vec<usize> {
        self.catalog
            .rules()
            .iter()
            .enumerate()
            .filter(|(_, rule)| self.enabled(rule) && keep(rule))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Evaluate the rules at `positions` concurrently, results in the same order
    async fn run(&self, manifest: &Manifest, positions: &[usize]) -> Vec<Validation> {
        let handles: Vec<_> = positions
            .iter()
            .map(|&idx| {
                let catalog = Arc::clone(&self.catalog);
                let manifest = manifest.clone();
                tokio::spawn(async move {
                    let rule = &catalog.rules()[idx];
                    rule.evaluate(&manifest).await
                })
            })
            .collect();

        let outcomes = join_all(handles).await;

        positions
            .iter()
            .zip(outcomes)
            .map(|(&idx, outcome)| {
                let rule = &self.catalog.rules()[idx];
                match outcome {
                    Ok(verdict) => {
                        trace!(rule = rule.id(), valid = verdict.is_ok(), "rule evaluated");
                        Validation::from_verdict(rule, &verdict)
                    }
                    Err(err) => {
                        warn!(rule = rule.id(), member = rule.member(), error = %err, "rule predicate did not complete");
                        Validation::faulted(rule)
                    }
                }
            })
            .collect()
    }

    async fn pass(&self, manifest: &Manifest, positions: Vec<usize>) -> Report {
        let results = self.run(manifest, &positions).await;
        let report = Report::new(manifest.digest(), results);
        debug!(
            rules = report.len(),
            failed = report.failed().count(),
            digest = report.digest(),
            "evaluation pass complete"
        );
        report
    }

    /// Every enabled rule, in catalog order
    pub async fn loop_through_keys(&self, manifest: &Manifest) -> Report {
        self.pass(manifest, self.positions(|_| true)).await
    }

    /// Only required rules, in catalog order
    pub async fn loop_through_required_keys(&self, manifest: &Manifest) -> Report {
        self.pass(manifest, self.positions(|rule| rule.category() == Category::Required))
            .await
    }

    /// Evaluate every rule bound to `field` against `value` alone.
    ///
    /// A field with no rule passes with no errors. Cross-field rules see a
    /// manifest holding only this field.
    pub async fn find_single_field(&self, field: &str, value: Value) -> FieldValidation {
        let positions = self.positions(|rule| rule.member() == field);
        if positions.is_empty() {
            debug!(field, "no rule for field");
            return FieldValidation::unconstrained(field);
        }

        let manifest = Manifest::single(field, value);
        let validations = self.run(&manifest, &positions).await;
        FieldValidation::from_validations(field, validations)
    }

    /// Failing optional rules for members the manifest declares
    pub async fn find_improvements(&self, manifest: &Manifest) -> Vec<Validation> {
        let positions = self.positions(|rule| {
            rule.category() == Category::Optional && manifest.contains(rule.member())
        });
        self.run(manifest, &positions)
            .await
            .into_iter()
            .filter(|v| !v.valid)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{REQUIRED_FIELDS, Verdict, check};
    use serde_json::json;
    use std::time::Duration;

    fn installable() -> Manifest {
        Manifest::new()
            .with("name", json!("Webboard"))
            .with("short_name", json!("Webboard"))
            .with("start_url", json!("/"))
            .with("icons", json!([{ "src": "icon-512.png", "sizes": "512x512", "type": "image/png" }]))
    }

    #[tokio::test]
    async fn full_pass_covers_the_catalog_in_order() {
        let validator = Validator::default();
        let report = validator.loop_through_keys(&installable()).await;

        let expected: Vec<&str> = validator.catalog().rules().iter().map(Rule::id).collect();
        let actual: Vec<&str> = report.results().iter().map(|v| v.test_name).collect();
        assert_eq!(actual, expected);
        assert!(report.is_install_ready());
    }

    #[tokio::test]
    async fn required_pass_only_has_required_rules() {
        let report = Validator::default().loop_through_required_keys(&Manifest::new()).await;
        assert_eq!(report.len(), REQUIRED_FIELDS.len());
        assert!(report.results().iter().all(|v| v.category == Category::Required && !v.valid));
    }

    #[tokio::test]
    async fn disabled_rules_are_skipped() {
        let validator = Validator::default().with_disabled(["name", "icons"]);
        let report = validator.loop_through_required_keys(&Manifest::new()).await;
        let members: Vec<&str> = report.results().iter().map(|v| v.member).collect();
        assert_eq!(members, vec!["short_name", "start_url"]);
    }

    #[tokio::test]
    async fn slow_rules_keep_their_position() {
        fn fast(value: Option<&Value>, _: &Manifest) -> Verdict {
            check(value.is_some())
        }

        let catalog = Catalog::from_rules(vec![
            Rule::new_async("slow", "name", Category::Required, |value, _| async move {
                tokio::time::sleep(Duration::from_millis(20)).await;
                check(value.is_some())
            }),
            Rule::new("fast", "short_name", Category::Required, fast),
        ]);
        let report = Validator::new(Arc::new(catalog))
            .loop_through_keys(&Manifest::single("name", json!("x")))
            .await;

        let order: Vec<(&str, bool)> = report.results().iter().map(|v| (v.test_name, v.valid)).collect();
        assert_eq!(order, vec![("slow", true), ("fast", false)]);
    }

    #[tokio::test]
    async fn single_field_runs_every_rule_for_the_member() {
        let validator = Validator::default();
        let icons = validator
            .find_single_field("icons", json!([{ "src": "a.png", "sizes": "48x48", "purpose": "any maskable" }]))
            .await;
        assert_eq!(icons.validations.len(), 4);
        assert!(!icons.valid);
        assert_eq!(icons.errors.len(), 2);

        let unknown = validator.find_single_field("nonexistent_field", json!(null)).await;
        assert!(unknown.valid);
        assert!(unknown.validations.is_empty());
    }

    #[tokio::test]
    async fn improvements_only_cover_declared_optional_members() {
        let manifest = installable()
            .with("lang", json!("klingon"))
            .with("dir", json!("ltr"));
        let improvements = Validator::default().find_improvements(&manifest).await;
        let members: Vec<&str> = improvements.iter().map(|v| v.member).collect();
        assert_eq!(members, vec!["lang"]);
    }
}
