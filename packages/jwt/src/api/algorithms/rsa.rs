//! RSA-based JWT signing (RS256, RS384, RS512)
//!
//! RSASSA-PKCS1-v1_5 is deterministic, so the same key and message always
//! produce the same signature.

use super::{Algorithm, Family};
use crate::error::{JwtError, JwtResult};
use rsa::RsaPrivateKey;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs1v15::SigningKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::sha2::{Sha256, Sha384, Sha512};
use rsa::signature::{SignatureEncoding, Signer};

/// Parse an RSA private key from PKCS#1 or PKCS#8 DER
///
/// PKCS#1 is tried first; the PEM label is not consulted.
pub(crate) fn parse_private_key(der: &[u8]) -> JwtResult<RsaPrivateKey> {
    match RsaPrivateKey::from_pkcs1_der(der) {
        Ok(key) => Ok(key),
        Err(pkcs1_err) => RsaPrivateKey::from_pkcs8_der(der).map_err(|pkcs8_err| {
            tracing::trace!(%pkcs1_err, "PKCS#1 decode failed, PKCS#8 fallback also failed");
            JwtError::key_parse(Family::Rsa.label(), pkcs8_err)
        }),
    }
}

fn sign_with<D>(key: RsaPrivateKey, message: &[u8]) -> JwtResult<Vec<u8>>
where
    D: rsa::sha2::Digest + rsa::pkcs8::AssociatedOid,
{
    let signing_key = SigningKey::<D>::new(key);
    let signature = signing_key.try_sign(message).map_err(JwtError::signing)?;
    Ok(signature.to_vec())
}

/// Sign `message`, consuming the key
pub(crate) fn sign(algorithm: Algorithm, message: &[u8], key: RsaPrivateKey) -> JwtResult<Vec<u8>> {
    match algorithm {
        Algorithm::RS256 => sign_with::<Sha256>(key, message),
        Algorithm::RS384 => sign_with::<Sha384>(key, message),
        Algorithm::RS512 => sign_with::<Sha512>(key, message),
        other => Err(JwtError::Internal(format!("{other} is not an RSA algorithm"))),
    }
}
