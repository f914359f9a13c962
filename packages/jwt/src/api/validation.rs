//! Field-level validation gate
//!
//! These validators run on one raw field value at a time, before any signing
//! is attempted, and cannot see sibling fields.

use super::hashed::HashedTokenIssuer;
use super::keys::validate_pem;
use super::signed::SignedTokenIssuer;
use crate::error::JwtError;
use serde_json::Value;

/// Warnings and errors collected by a validator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    /// Non-fatal notes
    pub warnings: Vec<String>,
    /// Fatal problems
    pub errors: Vec<JwtError>,
}

impl Diagnostics {
    /// No findings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Single error
    #[must_use]
    pub fn error(error: JwtError) -> Self {
        Self {
            warnings: Vec::new(),
            errors: vec![error],
        }
    }

    /// Whether no errors were found
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Append another validator's findings
    pub fn extend(&mut self, other: Diagnostics) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
    }

    /// Collapse into the first error, if any
    ///
    /// # Errors
    /// Returns the first collected error.
    pub fn into_result(self) -> Result<Vec<String>, JwtError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(self.warnings),
        }
    }
}

/// Signature shared by every field validator
pub type FieldValidator = fn(&Value, &str) -> Diagnostics;

fn expect_str<'a>(value: &'a Value, k: &str) -> Result<&'a str, Diagnostics> {
    value.as_str().ok_or_else(|| {
        Diagnostics::error(JwtError::invalid_field(k, format!("{k} must be a string")))
    })
}

/// Algorithm field of the hashed token resource
pub fn validate_hashing_algorithm(value: &Value, k: &str) -> Diagnostics {
    match expect_str(value, k) {
        Ok(alg) => match HashedTokenIssuer::validate_algorithm(alg) {
            Ok(_) => Diagnostics::new(),
            Err(e) => Diagnostics::error(e),
        },
        Err(diags) => diags,
    }
}

/// Algorithm field of the signed token resource
pub fn validate_signing_algorithm(value: &Value, k: &str) -> Diagnostics {
    match expect_str(value, k) {
        Ok(alg) => match SignedTokenIssuer::validate_algorithm(alg) {
            Ok(_) => Diagnostics::new(),
            Err(e) => Diagnostics::error(e),
        },
        Err(diags) => diags,
    }
}

/// Key field of the signed token resource
///
/// Only PEM well-formedness is checked here; the key type is matched against
/// the algorithm when the token is created.
pub fn validate_signing_key(value: &Value, k: &str) -> Diagnostics {
    match expect_str(value, k) {
        Ok(key) => match validate_pem(k, key) {
            Ok(()) => Diagnostics::new(),
            Err(e) => Diagnostics::error(e),
        },
        Err(diags) => diags,
    }
}
