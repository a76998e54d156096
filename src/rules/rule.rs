//! Rule definitions

use crate::manifest::Manifest;
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::future::Future;

/// Severity tier of a rule, used for score weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Required,
    Recommended,
    Optional,
}

impl Category {
    pub const ALL: [Category; 3] = [Self::Required, Self::Recommended, Self::Optional];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Recommended => "recommended",
            Self::Optional => "optional",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Why a predicate failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// Report the rule's own error string
    Default,
    /// A more specific message for this input
    Message(&'static str),
}

/// Outcome of one predicate
pub type Verdict = Result<(), Failure>;

/// Pass if `condition` holds, otherwise fail with the rule's error string
pub fn check(condition: bool) -> Verdict {
    if condition { Ok(()) } else { Err(Failure::Default) }
}

/// Pass if `condition` holds, otherwise fail with `message`
pub fn ensure(condition: bool, message: &'static str) -> Verdict {
    if condition { Ok(()) } else { Err(Failure::Message(message)) }
}

/// A rule predicate.
///
/// Receives the value of the rule's member (absent members are `None`) and the
/// whole manifest for cross-field checks. Plain functions and closures with the
/// signature `Fn(Option<&Value>, &Manifest) -> Verdict` implement this directly;
/// predicates that need to suspend are registered with [`Rule::new_async`].
pub trait RuleTest: Send + Sync {
    fn test<'a>(&'a self, value: Option<&'a Value>, manifest: &'a Manifest) -> BoxFuture<'a, Verdict>;
}

impl<F> RuleTest for F
where
    F: Fn(Option<&Value>, &Manifest) -> Verdict + Send + Sync,
{
    fn test<'a>(&'a self, value: Option<&'a Value>, manifest: &'a Manifest) -> BoxFuture<'a, Verdict> {
        Box::pin(futures::future::ready(self(value, manifest)))
    }
}

/// Adapter for predicates returning a future over owned inputs
pub struct AsyncTest<F>(F);

impl<F, Fut> RuleTest for AsyncTest<F>
where
    F: Fn(Option<Value>, Manifest) -> Fut + Send + Sync,
    Fut: Future<Output = Verdict> + Send + 'static,
{
    fn test<'a>(&'a self, value: Option<&'a Value>, manifest: &'a Manifest) -> BoxFuture<'a, Verdict> {
        Box::pin((self.0)(value.cloned(), manifest.clone()))
    }
}

/// One named check bound to a manifest member
pub struct Rule {
    id: &'static str,
    member: &'static str,
    category: Category,
    display_string: &'static str,
    info_string: &'static str,
    error_string: &'static str,
    docs_link: Option<&'static str>,
    default_value: Option<&'static str>,
    quick_fix: bool,
    test: Box<dyn RuleTest>,
}

impl Rule {
    pub fn new<T: RuleTest + 'static>(
        id: &'static str,
        member: &'static str,
        category: Category,
        test: T,
    ) -> Self {
        Self {
            id,
            member,
            category,
            display_string: "",
            info_string: "",
            error_string: "",
            docs_link: None,
            default_value: None,
            quick_fix: false,
            test: Box::new(test),
        }
    }

    /// Register a predicate that awaits (lookups, I/O)
    pub fn new_async<F, Fut>(id: &'static str, member: &'static str, category: Category, test: F) -> Self
    where
        F: Fn(Option<Value>, Manifest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Verdict> + Send + 'static,
    {
        Self::new(id, member, category, AsyncTest(test))
    }

    pub fn display(mut self, display_string: &'static str) -> Self {
        self.display_string = display_string;
        self
    }

    pub fn info(mut self, info_string: &'static str) -> Self {
        self.info_string = info_string;
        self
    }

    pub fn error(mut self, error_string: &'static str) -> Self {
        self.error_string = error_string;
        self
    }

    pub fn docs(mut self, docs_link: &'static str) -> Self {
        self.docs_link = Some(docs_link);
        self
    }

    /// JSON text of a value that satisfies the rule
    pub fn default_value(mut self, json: &'static str) -> Self {
        self.default_value = Some(json);
        self
    }

    pub fn quick_fix(mut self, quick_fix: bool) -> Self {
        self.quick_fix = quick_fix;
        self
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn member(&self) -> &'static str {
        self.member
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn display_string(&self) -> &'static str {
        self.display_string
    }

    pub fn info_string(&self) -> &'static str {
        self.info_string
    }

    pub fn error_string(&self) -> &'static str {
        self.error_string
    }

    pub fn docs_link(&self) -> Option<&'static str> {
        self.docs_link
    }

    pub fn has_quick_fix(&self) -> bool {
        self.quick_fix
    }

    /// The quick-fix value, decoded
    pub fn suggested_value(&self) -> Option<Value> {
        self.default_value.and_then(|json| serde_json::from_str(json).ok())
    }

    /// Run the predicate against the rule's member of `manifest`
    pub async fn evaluate(&self, manifest: &Manifest) -> Verdict {
        self.test.test(manifest.get(self.member), manifest).await
    }

    pub fn failure_message(&self, failure: &Failure) -> String {
        match failure {
            Failure::Message(message) => (*message).to_string(),
            Failure::Default if self.error_string.is_empty() => format!("{} is not valid", self.member),
            Failure::Default => self.error_string.to_string(),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("member", &self.member)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}
