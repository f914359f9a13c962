//! Typed resource configuration
//!
//! Inputs arrive from the host as JSON. Each config can be validated as a
//! whole, which lets the signed token config match the PEM label against the
//! algorithm family before any signing is attempted.

use crate::api::algorithms::Algorithm;
use crate::api::hashed::HashedTokenIssuer;
use crate::api::keys::{PemKey, Secret};
use crate::api::signed::SignedTokenIssuer;
use crate::claims::Claims;
use crate::error::{JwtError, JwtResult};
use crate::types::IssuedToken;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

fn default_hashing_algorithm() -> String {
    HashedTokenIssuer::DEFAULT_ALGORITHM.as_str().to_string()
}

fn parse_value<T: DeserializeOwned>(value: Value) -> JwtResult<T> {
    serde_json::from_value(value).map_err(|e| JwtError::invalid_field("config", e))
}

fn parse_str<T: DeserializeOwned>(json: &str) -> JwtResult<T> {
    serde_json::from_str(json).map_err(|e| JwtError::invalid_field("config", e))
}

/// Inputs of the `jwt_hashed_token` resource
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HashedTokenConfig {
    /// HMAC algorithm name, `HS512` when omitted
    #[serde(default = "default_hashing_algorithm")]
    pub algorithm: String,
    /// Shared secret
    pub secret: Secret,
    /// Token claims
    pub claims: Claims,
}

impl HashedTokenConfig {
    /// Config from a JSON object
    ///
    /// # Errors
    /// `InvalidField("config")` for missing, unknown or mistyped fields.
    pub fn from_value(value: Value) -> JwtResult<Self> {
        parse_value(value)
    }

    /// Config from JSON text
    ///
    /// # Errors
    /// `InvalidField("config")` for malformed JSON or fields.
    pub fn from_json(json: &str) -> JwtResult<Self> {
        parse_str(json)
    }

    /// Run the configuration gate
    ///
    /// # Errors
    /// `UnsupportedAlgorithm` or `WrongKeyFamily`.
    pub fn validate(&self) -> JwtResult<Algorithm> {
        HashedTokenIssuer::validate_algorithm(&self.algorithm)
    }

    /// Validate and sign
    ///
    /// # Errors
    /// Any error from [`Self::validate`] or the issuer.
    pub fn issue(&self) -> JwtResult<IssuedToken> {
        let algorithm = self.validate()?;
        HashedTokenIssuer::issue_resolved(algorithm, &self.secret, &self.claims)
    }
}

/// Inputs of the `jwt_signed_token` resource
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignedTokenConfig {
    /// RSA or ECDSA algorithm name
    pub algorithm: String,
    /// PEM-encoded private key
    pub key: PemKey,
    /// Token claims
    pub claims: Claims,
}

impl SignedTokenConfig {
    /// Config from a JSON object
    ///
    /// # Errors
    /// `InvalidField("config")` for missing, unknown or mistyped fields.
    pub fn from_value(value: Value) -> JwtResult<Self> {
        parse_value(value)
    }

    /// Config from JSON text
    ///
    /// # Errors
    /// `InvalidField("config")` for malformed JSON or fields.
    pub fn from_json(json: &str) -> JwtResult<Self> {
        parse_str(json)
    }

    /// Run the configuration gate, including the PEM label/family match
    ///
    /// # Errors
    /// `UnsupportedAlgorithm`, `WrongKeyFamily`, `InvalidKeyEncoding`, or
    /// `KeyParseError` for a label naming the other family.
    pub fn validate(&self) -> JwtResult<Algorithm> {
        SignedTokenIssuer::validate(&self.algorithm, &self.key)
    }

    /// Validate and sign
    ///
    /// # Errors
    /// Any error from [`Self::validate`] or the issuer.
    pub fn issue(&self) -> JwtResult<IssuedToken> {
        let algorithm = self.validate()?;
        SignedTokenIssuer::issue_resolved(algorithm, &self.key, &self.claims)
    }
}
