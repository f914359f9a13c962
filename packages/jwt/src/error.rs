//! JWT issuing error types

use thiserror::Error;

/// JWT operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// JWT error types
///
/// Every variant carries enough context to be shown verbatim to the user by
/// the resource host; none of them ever embeds key material.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    /// The algorithm name is not in the registry
    #[error("{name} is not a supported signing algorithm. {choices}")]
    UnsupportedAlgorithm {
        /// Offending algorithm name
        name: String,
        /// Human readable list of valid choices
        choices: String,
    },
    /// The algorithm belongs to the other resource's key family
    #[error("For {family} signing, please use the {resource} resource")]
    WrongKeyFamily {
        /// Family label of the rejected algorithm (`HMAC` or `RSA/ECDSA`)
        family: &'static str,
        /// Resource type that accepts this family
        resource: &'static str,
    },
    /// The key field is not a decodable PEM block
    #[error("{field} must be PEM encoded")]
    InvalidKeyEncoding {
        /// Name of the offending field
        field: String,
    },
    /// The PEM block decoded but does not hold a private key of the expected type
    #[error("failed to parse {family} private key: {message}")]
    KeyParseError {
        /// Family the key was parsed as
        family: &'static str,
        /// Underlying parser message
        message: String,
    },
    /// Claims could not be represented as a canonical JSON object
    #[error("claims could not be encoded as JSON: {0}")]
    ClaimsEncoding(String),
    /// Cryptographic signing failed
    #[error("signing error: {0}")]
    Signing(String),
    /// A required input was not supplied
    #[error("missing required field: {0}")]
    MissingField(String),
    /// An input was supplied with the wrong shape
    #[error("{field}: {message}")]
    InvalidField {
        /// Name of the offending field
        field: String,
        /// Explanation
        message: String,
    },
    /// The provider does not know the requested resource type
    #[error("unknown resource type: {0}")]
    UnknownResource(String),
    /// Internal invariant violated
    #[error("internal error: {0}")]
    Internal(String),
}

impl JwtError {
    /// Create a key parse error for the given family
    #[inline]
    #[must_use]
    pub fn key_parse(family: &'static str, msg: impl ToString) -> Self {
        JwtError::KeyParseError {
            family,
            message: msg.to_string(),
        }
    }

    /// Create an invalid key encoding error
    #[inline]
    #[must_use]
    pub fn invalid_key_encoding(field: &str) -> Self {
        JwtError::InvalidKeyEncoding {
            field: field.to_string(),
        }
    }

    /// Create a claims encoding error
    #[inline]
    #[must_use]
    pub fn claims_encoding(msg: impl ToString) -> Self {
        JwtError::ClaimsEncoding(msg.to_string())
    }

    /// Create a signing error
    #[inline]
    #[must_use]
    pub fn signing(msg: impl ToString) -> Self {
        JwtError::Signing(msg.to_string())
    }

    /// Create a missing field error
    #[inline]
    #[must_use]
    pub fn missing_field(field: &str) -> Self {
        JwtError::MissingField(field.to_string())
    }

    /// Create an invalid field error
    #[inline]
    #[must_use]
    pub fn invalid_field(field: &str, msg: impl ToString) -> Self {
        JwtError::InvalidField {
            field: field.to_string(),
            message: msg.to_string(),
        }
    }

    /// Create an internal error
    #[inline]
    #[must_use]
    pub fn internal(msg: &str) -> Self {
        JwtError::Internal(msg.to_string())
    }
}
