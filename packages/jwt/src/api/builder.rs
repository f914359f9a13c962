//! JWT Builder API - entry points for the two issuers

use super::hashed::HashedTokenIssuer;
use super::keys::{PemKey, Secret};
use super::signed::SignedTokenIssuer;
use crate::claims::Claims;
use crate::error::{JwtError, JwtResult};
use crate::types::IssuedToken;

/// Direct builder entry point
pub struct Jwt;

impl Jwt {
    /// Builder for HMAC-signed tokens, algorithm defaults to HS512
    #[inline]
    #[must_use]
    pub fn hashed() -> HashedJwtBuilder {
        HashedJwtBuilder::new()
    }

    /// Builder for RSA/ECDSA-signed tokens
    #[inline]
    #[must_use]
    pub fn signed() -> SignedJwtBuilder {
        SignedJwtBuilder::new()
    }
}

/// Builder for HMAC-signed tokens
#[derive(Debug, Default)]
pub struct HashedJwtBuilder {
    algorithm: Option<String>,
    secret: Option<Secret>,
}

impl HashedJwtBuilder {
    /// Empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the algorithm name
    #[inline]
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: &str) -> Self {
        self.algorithm = Some(algorithm.to_string());
        self
    }

    /// Set the shared secret
    #[inline]
    #[must_use]
    pub fn with_secret(mut self, secret: impl Into<Secret>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Sign `claims`
    ///
    /// # Errors
    /// `MissingField("secret")` if no secret was set, otherwise any error
    /// from [`HashedTokenIssuer::issue`].
    pub fn sign(&self, claims: &Claims) -> JwtResult<IssuedToken> {
        let secret = self
            .secret
            .as_ref()
            .ok_or_else(|| JwtError::missing_field("secret"))?;
        let algorithm = self
            .algorithm
            .as_deref()
            .unwrap_or(HashedTokenIssuer::DEFAULT_ALGORITHM.as_str());
        HashedTokenIssuer::issue(algorithm, secret, claims)
    }
}

/// Builder for RSA/ECDSA-signed tokens
#[derive(Debug, Default)]
pub struct SignedJwtBuilder {
    algorithm: Option<String>,
    key: Option<PemKey>,
}

impl SignedJwtBuilder {
    /// Empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the algorithm name
    #[inline]
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: &str) -> Self {
        self.algorithm = Some(algorithm.to_string());
        self
    }

    /// Set the PEM private key
    #[inline]
    #[must_use]
    pub fn with_key(mut self, key: impl Into<PemKey>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Sign `claims`
    ///
    /// # Errors
    /// `MissingField` for an unset algorithm or key, otherwise any error from
    /// [`SignedTokenIssuer::issue`].
    pub fn sign(&self, claims: &Claims) -> JwtResult<IssuedToken> {
        let algorithm = self
            .algorithm
            .as_deref()
            .ok_or_else(|| JwtError::missing_field("algorithm"))?;
        let key = self
            .key
            .as_ref()
            .ok_or_else(|| JwtError::missing_field("key"))?;
        SignedTokenIssuer::issue(algorithm, key, claims)
    }
}
