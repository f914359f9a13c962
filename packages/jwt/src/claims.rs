//! JWT claims with canonical serialization.
//!
//! Claims are an untyped JSON object. `serde_json::Map` is BTreeMap-backed in
//! this crate (the `preserve_order` feature stays off), so keys come out
//! sorted at every nesting level and `canonical_json` is stable for equal
//! inputs regardless of insertion order.

use crate::error::{JwtError, JwtResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Immutable JWT claims.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    /// Empty claims set.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Claims from a JSON value, which must be an object.
    ///
    /// # Errors
    /// Returns `ClaimsEncoding` for any non-object value.
    pub fn from_value(value: Value) -> JwtResult<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(JwtError::claims_encoding(format!(
                "claims must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Claims from anything that serializes to a JSON object.
    ///
    /// # Errors
    /// Returns `ClaimsEncoding` when serialization fails (for example a map
    /// with non-string keys) or does not yield an object.
    pub fn from_serializable<T: Serialize + ?Sized>(value: &T) -> JwtResult<Self> {
        let value = serde_json::to_value(value).map_err(JwtError::claims_encoding)?;
        Self::from_value(value)
    }

    /// Add or replace a claim.
    #[must_use]
    pub fn with_claim(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Look up a claim.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Number of top-level claims.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no claims.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Claims in canonical key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Compact JSON with sorted keys and no whitespace.
    ///
    /// This is the payload segment before base64url encoding and also the
    /// identifier reported for an issued token.
    ///
    /// # Errors
    /// Returns `ClaimsEncoding` if the serializer fails.
    pub fn canonical_json(&self) -> JwtResult<String> {
        serde_json::to_string(&self.0).map_err(JwtError::claims_encoding)
    }

    /// Borrow the underlying map.
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Claims {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Claims {
    type Error = JwtError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
