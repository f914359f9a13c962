//! ECDSA-based JWT signing (ES256, ES384, ES512)
//!
//! Signatures use RFC 6979 deterministic nonces and are emitted in the fixed
//! size `R || S` form JWS requires (64, 96 and 132 bytes), not ASN.1 DER.
//!
//! P-256 and P-384 sign through their curve crates. The P-521 crate only
//! signs with a random nonce, so ES512 derives its nonce here: SHA-512 drives
//! the HMAC-DRBG and the 528-bit output is shifted down to the 521-bit order.

use super::{Algorithm, Family};
use crate::error::{JwtError, JwtResult};
use ecdsa::hazmat::{bits2field, sign_prehashed};
use p521::elliptic_curve::ff::{Field, PrimeField};
use p521::{FieldBytes, NistP521, Scalar};
use rfc6979::HmacDrbg;
use sha2::{Digest, Sha512};
use zeroize::Zeroize;

/// Bits of HMAC-DRBG output beyond the P-521 group order length
const P521_EXCESS_BITS: u32 = 66 * 8 - 521;

/// ECDSA private key bound to the curve its algorithm names
pub(crate) enum EcSigningKey {
    P256(p256::ecdsa::SigningKey),
    P384(p384::ecdsa::SigningKey),
    P521(p521::ecdsa::SigningKey),
}

fn parse_err(e: impl ToString) -> JwtError {
    JwtError::key_parse(Family::Ecdsa.label(), e)
}

impl EcSigningKey {
    /// Parse SEC1 or PKCS#8 DER for the curve matching `algorithm`
    ///
    /// A key on any other curve is rejected.
    pub(crate) fn from_der(algorithm: Algorithm, der: &[u8]) -> JwtResult<Self> {
        match algorithm {
            Algorithm::ES256 => {
                use p256::pkcs8::DecodePrivateKey;
                let secret = p256::SecretKey::from_sec1_der(der)
                    .or_else(|_| p256::SecretKey::from_pkcs8_der(der).map_err(parse_err))?;
                Ok(EcSigningKey::P256(p256::ecdsa::SigningKey::from(secret)))
            }
            Algorithm::ES384 => {
                use p384::pkcs8::DecodePrivateKey;
                let secret = p384::SecretKey::from_sec1_der(der)
                    .or_else(|_| p384::SecretKey::from_pkcs8_der(der).map_err(parse_err))?;
                Ok(EcSigningKey::P384(p384::ecdsa::SigningKey::from(secret)))
            }
            Algorithm::ES512 => {
                use p521::pkcs8::DecodePrivateKey;
                let secret = p521::SecretKey::from_sec1_der(der)
                    .or_else(|_| p521::SecretKey::from_pkcs8_der(der).map_err(parse_err))?;
                let key = p521::ecdsa::SigningKey::from_bytes(&secret.to_bytes())
                    .map_err(parse_err)?;
                Ok(EcSigningKey::P521(key))
            }
            other => Err(JwtError::Internal(format!(
                "{other} is not an ECDSA algorithm"
            ))),
        }
    }

    /// Sign `message` with the curve's paired SHA-2 digest
    pub(crate) fn sign(&self, message: &[u8]) -> JwtResult<Vec<u8>> {
        use p256::ecdsa::signature::Signer;

        match self {
            EcSigningKey::P256(key) => {
                let signature: p256::ecdsa::Signature =
                    key.try_sign(message).map_err(JwtError::signing)?;
                Ok(signature.to_bytes().to_vec())
            }
            EcSigningKey::P384(key) => {
                let signature: p384::ecdsa::Signature =
                    key.try_sign(message).map_err(JwtError::signing)?;
                Ok(signature.to_bytes().to_vec())
            }
            EcSigningKey::P521(key) => {
                let signature = sign_p521(key, message)?;
                Ok(signature.to_bytes().to_vec())
            }
        }
    }
}

/// ECDSA/P-521 over SHA-512 with an RFC 6979 nonce
fn sign_p521(
    key: &p521::ecdsa::SigningKey,
    message: &[u8],
) -> JwtResult<p521::ecdsa::Signature> {
    let d: &Scalar = key.as_nonzero_scalar().as_ref();
    let z = bits2field::<NistP521>(&Sha512::digest(message)).map_err(JwtError::signing)?;

    let mut x = d.to_repr();
    let mut drbg = HmacDrbg::<Sha512>::new(&x, &z, &[]);
    x.zeroize();

    loop {
        let mut t = FieldBytes::default();
        drbg.fill_bytes(&mut t);
        shift_right(&mut t, P521_EXCESS_BITS);

        let k = Option::<Scalar>::from(Scalar::from_repr(t));
        t.zeroize();

        if let Some(k) = k.filter(|k| !bool::from(k.is_zero())) {
            let (signature, _) =
                sign_prehashed::<NistP521, _>(d, k, &z).map_err(JwtError::signing)?;
            return Ok(signature);
        }
    }
}

/// Shift a big-endian integer right by `bits` (1 to 7)
fn shift_right(bytes: &mut [u8], bits: u32) {
    let mut carry = 0u8;
    for byte in bytes.iter_mut() {
        let next = *byte << (8 - bits);
        *byte = (*byte >> bits) | carry;
        carry = next;
    }
}
