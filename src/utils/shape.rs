//! JSON Schema shape checks for array-valued members
//!
//! Each check requires a non-empty array whose items carry the member's
//! required sub-properties with the right primitive types.

use serde_json::{Value, json};
use std::sync::LazyLock;

/// A compiled schema for one manifest member
#[derive(Debug)]
pub struct ShapeCheck {
    member: &'static str,
    validator: jsonschema::Validator,
}

impl ShapeCheck {
    fn compile(member: &'static str, schema: Value) -> Self {
        let validator = jsonschema::options()
            .build(&schema)
            .expect("built-in member schema is valid");
        Self { member, validator }
    }

    pub fn member(&self) -> &'static str {
        self.member
    }

    /// Absent values fail
    pub fn is_valid(&self, value: Option<&Value>) -> bool {
        value.is_some_and(|v| self.validator.is_valid(v))
    }

    /// First schema violation, for diagnostics
    pub fn first_error(&self, value: Option<&Value>) -> Option<String> {
        match value {
            None => Some(format!("{} is missing", self.member)),
            Some(v) => self
                .validator
                .validate(v)
                .err()
                .map(|e| format!("{}: {}", self.member, e)),
        }
    }
}

fn image_resource() -> Value {
    json!({
        "type": "object",
        "required": ["src", "sizes"],
        "properties": {
            "src": { "type": "string", "minLength": 1 },
            "sizes": { "type": "string", "minLength": 1 },
            "type": { "type": "string" },
            "purpose": { "type": "string" },
            "label": { "type": "string" }
        }
    })
}

fn non_empty_array_of(items: Value) -> Value {
    json!({ "type": "array", "minItems": 1, "items": items })
}

pub static ICONS_SHAPE: LazyLock<ShapeCheck> =
    LazyLock::new(|| ShapeCheck::compile("icons", non_empty_array_of(image_resource())));

pub static SCREENSHOTS_SHAPE: LazyLock<ShapeCheck> = LazyLock::new(|| {
    let mut screenshot = image_resource();
    screenshot["properties"]["form_factor"] = json!({ "enum": ["narrow", "wide"] });
    screenshot["properties"]["platform"] = json!({ "type": "string" });
    ShapeCheck::compile("screenshots", non_empty_array_of(screenshot))
});

pub static FILE_HANDLERS_SHAPE: LazyLock<ShapeCheck> = LazyLock::new(|| {
    ShapeCheck::compile(
        "file_handlers",
        non_empty_array_of(json!({
            "type": "object",
            "required": ["action", "accept"],
            "properties": {
                "action": { "type": "string", "minLength": 1 },
                "name": { "type": "string" },
                "accept": {
                    "type": "object",
                    "minProperties": 1,
                    "additionalProperties": {
                        "anyOf": [
                            { "type": "string" },
                            { "type": "array", "items": { "type": "string" } }
                        ]
                    }
                },
                "icons": { "type": "array", "items": image_resource() },
                "launch_type": { "enum": ["single-client", "multiple-clients"] }
            }
        })),
    )
});

pub static WIDGETS_SHAPE: LazyLock<ShapeCheck> = LazyLock::new(|| {
    ShapeCheck::compile(
        "widgets",
        non_empty_array_of(json!({
            "type": "object",
            "required": ["name", "description", "tag", "ms_ac_template"],
            "properties": {
                "name": { "type": "string", "minLength": 1 },
                "short_name": { "type": "string" },
                "description": { "type": "string" },
                "tag": { "type": "string", "minLength": 1 },
                "template": { "type": "string" },
                "ms_ac_template": { "type": "string", "minLength": 1 },
                "data": { "type": "string" },
                "type": { "type": "string" },
                "screenshots": { "type": "array", "items": image_resource() },
                "icons": { "type": "array", "items": image_resource() },
                "auth": { "type": "boolean" },
                "update": { "type": "integer", "minimum": 0 },
                "multiple": { "type": "boolean" }
            }
        })),
    )
});
