//! HMAC-based JWT signing (HS256, HS384, HS512)

use super::Algorithm;
use crate::error::{JwtError, JwtResult};
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

fn mac<M: Mac + hmac::digest::KeyInit>(message: &[u8], secret: &[u8]) -> JwtResult<Vec<u8>> {
    let mut mac = <M as Mac>::new_from_slice(secret)
        .map_err(|e| JwtError::signing(format!("invalid HMAC key: {e}")))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Sign `message` with the HMAC variant selected by the algorithm's suffix
pub(crate) fn sign(algorithm: Algorithm, message: &[u8], secret: &[u8]) -> JwtResult<Vec<u8>> {
    match algorithm {
        Algorithm::HS256 => mac::<HmacSha256>(message, secret),
        Algorithm::HS384 => mac::<HmacSha384>(message, secret),
        Algorithm::HS512 => mac::<HmacSha512>(message, secret),
        other => Err(JwtError::Internal(format!(
            "{other} is not an HMAC algorithm"
        ))),
    }
}

/// Digest output length in bytes, used for the short-secret advisory
#[inline]
pub(crate) const fn output_len(algorithm: Algorithm) -> usize {
    algorithm.digest_bits() as usize / 8
}
