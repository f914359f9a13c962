//! Compact JWT assembly shared by both issuers

use super::ecdsa::EcSigningKey;
use super::utils::{base64_url_encode, signing_input};
use super::{Algorithm, Family, hmac, rsa};
use crate::claims::Claims;
use crate::error::{JwtError, JwtResult};
use crate::types::{IssuedToken, JwtHeader, JwtToken};
use ::rsa::RsaPrivateKey;

/// Key material resolved for one signing call
pub(crate) enum SigningMaterial<'a> {
    Secret(&'a [u8]),
    Rsa(RsaPrivateKey),
    Ecdsa(EcSigningKey),
}

impl SigningMaterial<'_> {
    fn family(&self) -> Family {
        match self {
            SigningMaterial::Secret(_) => Family::Hmac,
            SigningMaterial::Rsa(_) => Family::Rsa,
            SigningMaterial::Ecdsa(_) => Family::Ecdsa,
        }
    }

    fn sign(self, algorithm: Algorithm, message: &[u8]) -> JwtResult<Vec<u8>> {
        match self {
            SigningMaterial::Secret(secret) => hmac::sign(algorithm, message, secret),
            SigningMaterial::Rsa(key) => rsa::sign(algorithm, message, key),
            SigningMaterial::Ecdsa(key) => key.sign(message),
        }
    }
}

/// Produce `header.payload.signature` and the claims-derived identifier
///
/// The header is always `{"alg":<algorithm>,"typ":"JWT"}` and the payload is
/// the canonical claims JSON, so equal inputs give byte-identical tokens.
pub(crate) fn sign_compact(
    algorithm: Algorithm,
    material: SigningMaterial<'_>,
    claims: &Claims,
) -> JwtResult<IssuedToken> {
    if material.family() != algorithm.family() {
        return Err(JwtError::Internal(format!(
            "{algorithm} cannot sign with {} key material",
            material.family()
        )));
    }

    let header = JwtHeader::new(algorithm);
    let header_json = serde_json::to_vec(&header)
        .map_err(|e| JwtError::Internal(format!("header serialization failed: {e}")))?;
    let payload_json = claims.canonical_json()?;

    let message = signing_input(&header_json, payload_json.as_bytes());
    let signature = material.sign(algorithm, message.as_bytes())?;
    let signature_b64 = base64_url_encode(&signature);

    let mut jwt = String::with_capacity(message.len() + 1 + signature_b64.len());
    jwt.push_str(&message);
    jwt.push('.');
    jwt.push_str(&signature_b64);

    Ok(IssuedToken {
        token: JwtToken::from(jwt),
        id: payload_json,
    })
}
