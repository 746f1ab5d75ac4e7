//! Inbound contract checks

use serde_json::Value;

use crate::composer::{ComposeError, ComposeResult};

use super::types::ComposeInput;

/// Required top-level fields, checked in this order
const REQUIRED_FIELDS: [(&str, FieldKind); 3] = [
    ("fromShop", FieldKind::Object),
    ("to", FieldKind::String),
    ("dataForEmail", FieldKind::Object),
];

const OPTIONAL_STRING_FIELDS: [&str; 2] = ["action", "language"];

#[derive(Debug, Clone, Copy)]
enum FieldKind {
    Object,
    String,
}

impl FieldKind {
    fn matches(self, value: &Value) -> bool {
        match self {
            FieldKind::Object => value.is_object(),
            FieldKind::String => value.is_string(),
        }
    }

    fn name(self) -> &'static str {
        match self {
            FieldKind::Object => "an object",
            FieldKind::String => "a string",
        }
    }
}

impl ComposeInput {
    /// Validate a raw payload and build the typed input.
    ///
    /// Top-level fields are checked before anything else is looked at, so a
    /// payload missing `fromShop`, `to` or `dataForEmail` is rejected without
    /// touching the order.
    pub fn from_value(raw: Value) -> ComposeResult<Self> {
        let fields = raw
            .as_object()
            .ok_or_else(|| ComposeError::Validation("Input must be an object".to_string()))?;

        for (name, kind) in REQUIRED_FIELDS {
            match fields.get(name) {
                None | Some(Value::Null) => {
                    return Err(ComposeError::Validation(format!("{} is required", name)));
                }
                Some(value) if !kind.matches(value) => {
                    return Err(ComposeError::Validation(format!(
                        "{} must be {}",
                        name,
                        kind.name()
                    )));
                }
                Some(_) => {}
            }
        }

        for name in OPTIONAL_STRING_FIELDS {
            if let Some(value) = fields.get(name) {
                if !value.is_null() && !value.is_string() {
                    return Err(ComposeError::Validation(format!(
                        "{} must be a string",
                        name
                    )));
                }
            }
        }

        serde_json::from_value(raw).map_err(|e| ComposeError::Validation(e.to_string()))
    }
}
