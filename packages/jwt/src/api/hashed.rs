//! HMAC token issuer

use super::algorithms::core::{SigningMaterial, sign_compact};
use super::algorithms::{Algorithm, KeyRequirement, resolve_for};
use super::keys::{Secret, advise_hmac_secret};
use crate::claims::Claims;
use crate::error::JwtResult;
use crate::types::IssuedToken;

/// Issues tokens signed with a shared secret (HS256, HS384, HS512)
#[derive(Debug, Clone, Copy, Default)]
pub struct HashedTokenIssuer;

impl HashedTokenIssuer {
    /// Default algorithm when the caller names none
    pub const DEFAULT_ALGORITHM: Algorithm = Algorithm::HS512;

    /// Resolve `name` and require the HMAC family
    ///
    /// # Errors
    /// `UnsupportedAlgorithm` for unknown names, `WrongKeyFamily` for RSA and
    /// ECDSA names.
    pub fn validate_algorithm(name: &str) -> JwtResult<Algorithm> {
        resolve_for(name, KeyRequirement::SymmetricSecret)
    }

    /// Sign `claims` with `secret`
    ///
    /// # Errors
    /// Any gate failure from [`Self::validate_algorithm`], or
    /// `ClaimsEncoding`/`Signing` from the signer. No token is produced on
    /// error.
    pub fn issue(algorithm: &str, secret: &Secret, claims: &Claims) -> JwtResult<IssuedToken> {
        let algorithm = Self::validate_algorithm(algorithm)?;
        Self::issue_resolved(algorithm, secret, claims)
    }

    /// Sign with an algorithm already resolved by the gate
    pub(crate) fn issue_resolved(
        algorithm: Algorithm,
        secret: &Secret,
        claims: &Claims,
    ) -> JwtResult<IssuedToken> {
        advise_hmac_secret(algorithm, secret);

        let issued = sign_compact(algorithm, SigningMaterial::Secret(secret.expose()), claims)?;
        tracing::debug!(
            %algorithm,
            claims = claims.len(),
            "issued hashed token"
        );
        Ok(issued)
    }
}
