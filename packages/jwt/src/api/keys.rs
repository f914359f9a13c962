//! JWT key material
//!
//! Secrets and PEM keys are scoped to a single issue call: they are owned by
//! the caller's config, borrowed for signing, and zeroized on drop.

use crate::api::algorithms::core::SigningMaterial;
use crate::api::algorithms::ecdsa::EcSigningKey;
use crate::api::algorithms::{Algorithm, Family, hmac, rsa};
use crate::error::{JwtError, JwtResult};
use serde::{Deserialize, Deserializer};
use std::fmt;
use zeroize::Zeroizing;

/// Shared HMAC secret
#[derive(Clone)]
pub struct Secret(Zeroizing<Vec<u8>>);

impl Secret {
    /// Wrap raw secret bytes
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(Zeroizing::new(bytes.into()))
    }

    /// Borrow the secret bytes
    #[must_use]
    pub fn expose(&self) -> &[u8] {
        &self.0
    }

    /// Secret length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the secret is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret([REDACTED])")
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::new(value.as_bytes())
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self::new(value.into_bytes())
    }
}

impl From<&[u8]> for Secret {
    fn from(value: &[u8]) -> Self {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Secret {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Secret::from)
    }
}

/// PEM-encoded private key text
#[derive(Clone)]
pub struct PemKey(Zeroizing<String>);

impl PemKey {
    /// Wrap PEM text
    #[must_use]
    pub fn new(pem: impl Into<String>) -> Self {
        Self(Zeroizing::new(pem.into()))
    }

    /// Borrow the PEM text
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PemKey([REDACTED])")
    }
}

impl From<&str> for PemKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PemKey {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for PemKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(PemKey::new)
    }
}

/// A decoded PEM block
pub(crate) struct PemBlock {
    pub(crate) label: String,
    pub(crate) der: Zeroizing<Vec<u8>>,
}

/// Decode the first PEM block in `text`
///
/// Text before the block is skipped.
pub(crate) fn decode_pem(field: &str, text: &str) -> JwtResult<PemBlock> {
    let block = pem::parse(text).map_err(|e| {
        tracing::trace!(field, error = %e, "PEM decode failed");
        JwtError::invalid_key_encoding(field)
    })?;
    Ok(PemBlock {
        label: block.tag().to_string(),
        der: Zeroizing::new(block.into_contents()),
    })
}

/// Check that `text` holds a decodable PEM block
///
/// # Errors
/// Returns `InvalidKeyEncoding` naming `field`.
pub fn validate_pem(field: &str, text: &str) -> JwtResult<()> {
    decode_pem(field, text).map(|_| ())
}

/// Family implied by a PEM label, when the label is specific enough to tell
///
/// `PRIVATE KEY` (PKCS#8) can hold either family and yields `None`.
#[must_use]
pub fn label_family(label: &str) -> Option<Family> {
    match label {
        "RSA PRIVATE KEY" => Some(Family::Rsa),
        "EC PRIVATE KEY" => Some(Family::Ecdsa),
        _ => None,
    }
}

/// Reject a PEM block whose label names the other asymmetric family
///
/// # Errors
/// Returns `InvalidKeyEncoding` for undecodable text and `KeyParseError` for
/// a label/family mismatch.
pub fn check_pem_family(field: &str, text: &str, algorithm: Algorithm) -> JwtResult<()> {
    let block = decode_pem(field, text)?;
    match label_family(&block.label) {
        Some(found) if found != algorithm.family() => Err(JwtError::key_parse(
            algorithm.family().label(),
            format!(
                "{field} holds a {found} key ({}), {algorithm} needs {}",
                block.label,
                algorithm.family()
            ),
        )),
        _ => Ok(()),
    }
}

/// Parse `pem` into the private key type the algorithm's family signs with
pub(crate) fn parse_signing_key(
    field: &str,
    algorithm: Algorithm,
    pem: &PemKey,
) -> JwtResult<SigningMaterial<'static>> {
    let block = decode_pem(field, pem.expose())?;
    match algorithm.family() {
        Family::Rsa => rsa::parse_private_key(&block.der).map(SigningMaterial::Rsa),
        Family::Ecdsa => EcSigningKey::from_der(algorithm, &block.der).map(SigningMaterial::Ecdsa),
        Family::Hmac => Err(JwtError::Internal(format!(
            "This provider doesn't know what key type goes with {algorithm}"
        ))),
    }
}

/// Log an advisory when an HMAC secret is shorter than the digest output
///
/// Short secrets are accepted; callers own that choice.
pub(crate) fn advise_hmac_secret(algorithm: Algorithm, secret: &Secret) {
    let recommended = hmac::output_len(algorithm);
    if secret.len() < recommended {
        tracing::warn!(
            %algorithm,
            secret_len = secret.len(),
            recommended,
            "HMAC secret is shorter than the digest output"
        );
    }
}
