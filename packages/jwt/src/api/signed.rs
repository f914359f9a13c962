//! Asymmetric (RSA / ECDSA) token issuer
//!
//! Validation is split in two. The configuration gate checks the algorithm
//! name and that the key is decodable PEM; the key is only parsed as the
//! algorithm's key type at signing time. [`SignedTokenIssuer::validate`]
//! adds the cross-field label check when both values are available at once.

use super::algorithms::core::sign_compact;
use super::algorithms::{Algorithm, KeyRequirement, resolve_for};
use super::keys::{PemKey, check_pem_family, parse_signing_key, validate_pem};
use crate::claims::Claims;
use crate::error::JwtResult;
use crate::types::IssuedToken;

/// Field name reported in key encoding errors
pub const KEY_FIELD: &str = "key";

/// Issues tokens signed with a PEM private key (RS*, ES*)
#[derive(Debug, Clone, Copy, Default)]
pub struct SignedTokenIssuer;

impl SignedTokenIssuer {
    /// Resolve `name` and require the RSA or ECDSA family
    ///
    /// # Errors
    /// `UnsupportedAlgorithm` for unknown names, `WrongKeyFamily` for HMAC
    /// names.
    pub fn validate_algorithm(name: &str) -> JwtResult<Algorithm> {
        resolve_for(name, KeyRequirement::PemPrivateKey)
    }

    /// Check that `key` decodes as PEM
    ///
    /// # Errors
    /// `InvalidKeyEncoding` naming the key field.
    pub fn validate_key(key: &PemKey) -> JwtResult<()> {
        validate_pem(KEY_FIELD, key.expose())
    }

    /// Whole-config gate: both field checks plus the PEM label/family match
    ///
    /// # Errors
    /// Any error from the field checks, or `KeyParseError` when the PEM label
    /// names the other family.
    pub fn validate(algorithm: &str, key: &PemKey) -> JwtResult<Algorithm> {
        let algorithm = Self::validate_algorithm(algorithm)?;
        Self::validate_key(key)?;
        check_pem_family(KEY_FIELD, key.expose(), algorithm)?;
        Ok(algorithm)
    }

    /// Sign `claims` with the private key in `key`
    ///
    /// # Errors
    /// Any gate failure, `KeyParseError` when the key is not a private key of
    /// the algorithm's family and curve, or `ClaimsEncoding`/`Signing` from the
    /// signer. No token is produced on error.
    pub fn issue(algorithm: &str, key: &PemKey, claims: &Claims) -> JwtResult<IssuedToken> {
        let algorithm = Self::validate_algorithm(algorithm)?;
        Self::validate_key(key)?;
        Self::issue_resolved(algorithm, key, claims)
    }

    pub(crate) fn issue_resolved(
        algorithm: Algorithm,
        key: &PemKey,
        claims: &Claims,
    ) -> JwtResult<IssuedToken> {
        tracing::trace!(%algorithm, family = %algorithm.family(), "parsing signing key");
        let material = parse_signing_key(KEY_FIELD, algorithm, key)?;

        let issued = sign_compact(algorithm, material, claims)?;
        tracing::debug!(
            %algorithm,
            claims = claims.len(),
            "issued signed token"
        );
        Ok(issued)
    }
}
