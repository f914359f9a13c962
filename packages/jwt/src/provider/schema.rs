//! Resource schema as presented to the host

use super::resource::ResourceData;
use crate::api::validation::{Diagnostics, FieldValidator};
use crate::error::JwtError;
use serde_json::Value;

/// Value type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain string
    String,
    /// Mapping of string keys to arbitrary JSON values
    Map,
}

/// Whether the user supplies a field or the resource computes it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Must be set
    Required,
    /// May be omitted, possibly with a default
    Optional,
    /// Set by `create`, never by the user
    Computed,
}

/// One field of a resource
#[derive(Debug, Clone)]
pub struct FieldSchema {
    /// Attribute name
    pub name: &'static str,
    /// Value type
    pub kind: FieldKind,
    /// Who supplies the value
    pub presence: Presence,
    /// Value used when an optional field is omitted
    pub default: Option<&'static str>,
    /// Human readable description
    pub description: &'static str,
    /// Redacted from diagnostics and debug output
    pub sensitive: bool,
    /// Changing the value replaces the resource
    pub force_new: bool,
    /// Per-field check run at configuration time
    pub validator: Option<FieldValidator>,
}

impl FieldSchema {
    /// Required input
    #[must_use]
    pub const fn required(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            presence: Presence::Required,
            default: None,
            description,
            sensitive: false,
            force_new: true,
            validator: None,
        }
    }

    /// Optional input with a default
    #[must_use]
    pub const fn optional(
        name: &'static str,
        kind: FieldKind,
        default: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            kind,
            presence: Presence::Optional,
            default: Some(default),
            description,
            sensitive: false,
            force_new: true,
            validator: None,
        }
    }

    /// Output set by the resource
    #[must_use]
    pub const fn computed(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            presence: Presence::Computed,
            default: None,
            description: "",
            sensitive: false,
            force_new: false,
            validator: None,
        }
    }

    /// Mark as sensitive
    #[must_use]
    pub const fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    /// Attach a field validator
    #[must_use]
    pub const fn validate_with(mut self, validator: FieldValidator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Whether the user supplies this field
    #[must_use]
    pub fn is_input(&self) -> bool {
        self.presence != Presence::Computed
    }

    /// Effective value in `data`: null counts as unset, then the default applies
    #[must_use]
    pub fn value_in(&self, data: &ResourceData) -> Option<Value> {
        data.get(self.name)
            .filter(|value| !value.is_null())
            .cloned()
            .or_else(|| self.default.map(|d| Value::String(d.to_string())))
    }

    fn check_kind(&self, value: &Value) -> Option<JwtError> {
        let ok = match self.kind {
            FieldKind::String => value.is_string(),
            FieldKind::Map => value.is_object(),
        };
        if ok {
            return None;
        }
        let expected = match self.kind {
            FieldKind::String => "a string",
            FieldKind::Map => "a map",
        };
        Some(JwtError::invalid_field(
            self.name,
            format!("{} must be {expected}", self.name),
        ))
    }
}

/// Full schema of one resource type
#[derive(Debug, Clone)]
pub struct ResourceSchema {
    /// Resource type name
    pub name: &'static str,
    /// Fields in declaration order
    pub fields: Vec<FieldSchema>,
}

impl ResourceSchema {
    /// Look up a field by name
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Input fields only
    pub fn inputs(&self) -> impl Iterator<Item = &FieldSchema> {
        self.fields.iter().filter(|field| field.is_input())
    }

    /// Names of sensitive fields
    pub fn sensitive_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields
            .iter()
            .filter(|field| field.sensitive)
            .map(|field| field.name)
    }

    /// Run every field check independently
    ///
    /// Defaults are applied first, with null counting as unset. Required
    /// fields must be present, values must match their kind, and each field
    /// validator sees only its own value.
    #[must_use]
    pub fn validate(&self, data: &ResourceData) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();

        for field in self.inputs() {
            let Some(value) = field.value_in(data) else {
                if field.presence == Presence::Required {
                    diagnostics.errors.push(JwtError::missing_field(field.name));
                }
                continue;
            };

            if let Some(error) = field.check_kind(&value) {
                diagnostics.errors.push(error);
                continue;
            }

            if let Some(validator) = field.validator {
                diagnostics.extend(validator(&value, field.name));
            }
        }

        for name in data.attribute_names() {
            if self.field(name).is_none() {
                diagnostics.errors.push(JwtError::invalid_field(
                    name,
                    format!("unsupported argument for {}", self.name),
                ));
            }
        }

        diagnostics
    }

    /// Whether moving from `old` to `new` forces the resource to be recreated
    #[must_use]
    pub fn requires_replacement(&self, old: &ResourceData, new: &ResourceData) -> bool {
        self.fields
            .iter()
            .filter(|field| field.force_new)
            .any(|field| field.value_in(old) != field.value_in(new))
    }
}
