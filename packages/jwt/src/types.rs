//! JWT type definitions

use crate::api::algorithms::Algorithm;
use crate::api::algorithms::utils::base64_url_decode;
use crate::error::{JwtError, JwtResult};
use serde::{Deserialize, Serialize};

/// JWT header structure
///
/// Field order is the serialization order: `{"alg":..,"typ":"JWT"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtHeader {
    /// Signing algorithm name
    pub alg: String,
    /// Token type, always `JWT`
    pub typ: String,
}

impl JwtHeader {
    /// Header for tokens signed with `algorithm`
    #[must_use]
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            alg: algorithm.as_str().to_string(),
            typ: "JWT".to_string(),
        }
    }
}

/// Compact JWT string wrapper
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JwtToken(String);

impl JwtToken {
    /// The compact serialization
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the compact serialization
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// The three base64url segments
    ///
    /// # Errors
    /// Returns `Internal` if the string is not three dot-separated segments.
    pub fn segments(&self) -> JwtResult<[&str; 3]> {
        let mut parts = self.0.split('.');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(header), Some(payload), Some(signature), None) => {
                Ok([header, payload, signature])
            }
            _ => Err(JwtError::internal("token is not a three-segment JWT")),
        }
    }

    /// Decoded header segment
    ///
    /// # Errors
    /// Returns `Internal` if the header segment does not decode.
    pub fn header(&self) -> JwtResult<JwtHeader> {
        let [header, _, _] = self.segments()?;
        let bytes = base64_url_decode(header)
            .map_err(|e| JwtError::Internal(format!("header segment: {e}")))?;
        serde_json::from_slice(&bytes).map_err(|e| JwtError::Internal(format!("header JSON: {e}")))
    }

    /// Decoded payload segment as raw JSON text
    ///
    /// # Errors
    /// Returns `Internal` if the payload segment does not decode.
    pub fn payload_json(&self) -> JwtResult<String> {
        let [_, payload, _] = self.segments()?;
        let bytes = base64_url_decode(payload)
            .map_err(|e| JwtError::Internal(format!("payload segment: {e}")))?;
        String::from_utf8(bytes).map_err(|e| JwtError::Internal(format!("payload UTF-8: {e}")))
    }

    /// Decoded signature bytes
    ///
    /// # Errors
    /// Returns `Internal` if the signature segment does not decode.
    pub fn signature_bytes(&self) -> JwtResult<Vec<u8>> {
        let [_, _, signature] = self.segments()?;
        base64_url_decode(signature)
            .map_err(|e| JwtError::Internal(format!("signature segment: {e}")))
    }

    /// `header.payload`, the bytes the signature covers
    ///
    /// # Errors
    /// Returns `Internal` if the token is malformed.
    pub fn signing_input(&self) -> JwtResult<&str> {
        let [header, payload, _] = self.segments()?;
        Ok(&self.0[..header.len() + 1 + payload.len()])
    }
}

impl From<String> for JwtToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl AsRef<str> for JwtToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JwtToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of one issue call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Signed compact token
    pub token: JwtToken,
    /// Canonical claims JSON, used by the host as the resource identity
    pub id: String,
}
