//! Resource state and lifecycle hooks

use super::schema::ResourceSchema;
use crate::api::validation::Diagnostics;
use crate::error::JwtResult;
use serde_json::{Map, Value};
use std::fmt;

/// Attributes and identity of one resource instance
///
/// Built against a schema; the schema's sensitive fields are redacted in
/// debug output.
#[derive(Clone)]
pub struct ResourceData {
    id: Option<String>,
    attributes: Map<String, Value>,
    sensitive: Vec<&'static str>,
}

impl ResourceData {
    /// Instance of `schema` with the given attributes and no identity
    #[must_use]
    pub fn new(schema: &ResourceSchema, attributes: Map<String, Value>) -> Self {
        Self {
            id: None,
            attributes,
            sensitive: schema.sensitive_fields().collect(),
        }
    }

    /// Instance from a JSON object; other values yield no attributes
    #[must_use]
    pub fn from_value(schema: &ResourceSchema, value: Value) -> Self {
        match value {
            Value::Object(attributes) => Self::new(schema, attributes),
            _ => Self::new(schema, Map::new()),
        }
    }

    /// Attribute value
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Set an attribute
    pub fn set(&mut self, name: &str, value: impl Into<Value>) {
        self.attributes.insert(name.to_string(), value.into());
    }

    /// Names of every set attribute
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    /// Current identity, `None` until created or after delete
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Assign the identity
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// Forget the identity
    pub fn clear_id(&mut self) {
        self.id = None;
    }

    /// Input attributes as a JSON object, with defaults filled in
    #[must_use]
    pub fn inputs(&self, schema: &ResourceSchema) -> Value {
        let mut inputs = Map::new();
        for field in schema.inputs() {
            if let Some(value) = field.value_in(self) {
                inputs.insert(field.name.to_string(), value);
            }
        }
        Value::Object(inputs)
    }
}

impl PartialEq for ResourceData {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.attributes == other.attributes
    }
}

impl fmt::Debug for ResourceData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let attributes: Map<String, Value> = self
            .attributes
            .iter()
            .map(|(name, value)| {
                if self.sensitive.iter().any(|field| *field == name.as_str()) {
                    (name.clone(), Value::String("[REDACTED]".to_string()))
                } else {
                    (name.clone(), value.clone())
                }
            })
            .collect();
        f.debug_struct("ResourceData")
            .field("id", &self.id)
            .field("attributes", &attributes)
            .finish()
    }
}

/// Lifecycle hooks the host drives for one resource type
///
/// Implementations must be thread-safe (Send + Sync); they hold no state
/// between calls.
pub trait Resource: Send + Sync + 'static {
    /// Schema for this resource type
    fn schema(&self) -> &ResourceSchema;

    /// Configuration-time checks, one field at a time
    fn validate(&self, data: &ResourceData) -> Diagnostics {
        self.schema().validate(data)
    }

    /// Compute outputs and assign the identity
    ///
    /// On error `data` is left as it was.
    ///
    /// # Errors
    /// Whatever the issuer reports.
    fn create(&self, data: &mut ResourceData) -> JwtResult<()>;

    /// Refresh state; nothing is recomputed or re-validated
    ///
    /// # Errors
    /// Never fails for the token resources.
    fn read(&self, _data: &mut ResourceData) -> JwtResult<()> {
        Ok(())
    }

    /// Drop the identity; nothing outside the state is touched
    ///
    /// # Errors
    /// Never fails for the token resources.
    fn delete(&self, data: &mut ResourceData) -> JwtResult<()> {
        data.clear_id();
        Ok(())
    }
}
