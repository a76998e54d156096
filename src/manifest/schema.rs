//! Manifest schema definitions

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A web app manifest snapshot.
///
/// The member set is open-ended: any field may be absent and unknown fields are
/// kept verbatim. Cloning shares the underlying map, so a snapshot can be handed
/// to many concurrent rule evaluations without copying it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    members: Arc<Map<String, Value>>,
}

impl Manifest {
    /// Create an empty manifest
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already-parsed JSON object
    pub fn from_map(members: Map<String, Value>) -> Self {
        Self {
            members: Arc::new(members),
        }
    }

    /// A manifest declaring only `member`, used for single-field evaluation
    pub fn single(member: &str, value: Value) -> Self {
        Self::new().with(member, value)
    }

    /// Builder-style insert (copy-on-write if the snapshot is shared)
    pub fn with(mut self, member: &str, value: Value) -> Self {
        Arc::make_mut(&mut self.members).insert(member.to_string(), value);
        self
    }

    pub fn get(&self, member: &str) -> Option<&Value> {
        self.members.get(member)
    }

    /// String value of a member, if it is a string
    pub fn get_str(&self, member: &str) -> Option<&str> {
        self.get(member).and_then(Value::as_str)
    }

    pub fn contains(&self, member: &str) -> bool {
        self.members.contains_key(member)
    }

    /// Declared member names, in map order
    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.members
    }

    /// SHA-256 of the canonical JSON encoding (members sorted by name)
    pub fn digest(&self) -> String {
        let sorted: BTreeMap<&String, &Value> = self.members.iter().collect();
        let bytes = serde_json::to_vec(&sorted).unwrap_or_default();
        hex::encode(Sha256::digest(&bytes))
    }
}

/// Deserialize an array member into typed items.
///
/// Returns `None` when the value is not an array or any item has the wrong
/// shape, so callers can treat it as a plain validation failure.
pub fn typed_list<T: DeserializeOwned>(value: &Value) -> Option<Vec<T>> {
    if !value.is_array() {
        return None;
    }
    serde_json::from_value(value.clone()).ok()
}

/// Entry of `icons` (also used inside shortcuts)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    pub src: String,
    #[serde(default)]
    pub sizes: Option<String>,
    #[serde(default, rename = "type")]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

impl Icon {
    pub fn is_png(&self) -> bool {
        self.mime_type.as_deref() == Some("image/png") || self.src.ends_with(".png")
    }
}

/// Entry of `shortcuts`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShortcutItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icons: Option<Vec<Icon>>,
}

/// Entry of `related_applications`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelatedApplication {
    pub platform: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub min_version: Option<String>,
    #[serde(default)]
    pub fingerprints: Vec<Fingerprint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fingerprint {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

/// Entry of `protocol_handlers`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProtocolHandler {
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// The `launch_handler` member
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaunchHandler {
    #[serde(default)]
    pub client_mode: Option<ClientMode>,
}

/// `client_mode` is either a single mode or an ordered list of fallbacks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClientMode {
    Single(String),
    List(Vec<String>),
}

impl ClientMode {
    pub fn modes(&self) -> Vec<&str> {
        match self {
            Self::Single(mode) => vec![mode.as_str()],
            Self::List(modes) => modes.iter().map(String::as_str).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn with_does_not_touch_shared_snapshots() {
        let base = Manifest::single("name", json!("Webboard"));
        let copy = base.clone().with("short_name", json!("Board"));

        assert!(!base.contains("short_name"));
        assert_eq!(copy.get_str("short_name"), Some("Board"));
        assert_eq!(copy.len(), 2);
    }

    #[test]
    fn digest_ignores_insertion_order() {
        let a = Manifest::new().with("name", json!("A")).with("lang", json!("en"));
        let b = Manifest::new().with("lang", json!("en")).with("name", json!("A"));
        assert_eq!(a.digest(), b.digest());
        assert_ne!(a.digest(), Manifest::new().digest());
    }

    #[test]
    fn typed_list_rejects_wrong_shapes() {
        let icons: Option<Vec<Icon>> = typed_list(&json!([{ "src": "a.png", "sizes": "48x48" }]));
        assert_eq!(icons.map(|i| i.len()), Some(1));

        assert!(typed_list::<Icon>(&json!([{ "src": 12 }])).is_none());
        assert!(typed_list::<Icon>(&json!({ "src": "a.png" })).is_none());
    }

    #[test]
    fn client_mode_accepts_string_or_list() {
        let single: LaunchHandler = serde_json::from_value(json!({ "client_mode": "focus-existing" })).unwrap();
        let list: LaunchHandler =
            serde_json::from_value(json!({ "client_mode": ["navigate-existing", "auto"] })).unwrap();

        assert_eq!(single.client_mode.unwrap().modes(), vec!["focus-existing"]);
        assert_eq!(list.client_mode.unwrap().modes(), vec!["navigate-existing", "auto"]);
    }
}
