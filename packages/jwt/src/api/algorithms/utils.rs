//! Base64url helpers for compact serialization (RFC 7515, no padding)

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

#[inline]
pub(crate) fn base64_url_encode(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

#[inline]
pub(crate) fn base64_url_decode(input: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD.decode(input)
}

/// `base64url(header) + "." + base64url(payload)`
pub(crate) fn signing_input(header_json: &[u8], payload_json: &[u8]) -> String {
    let header_b64 = base64_url_encode(header_json);
    let payload_b64 = base64_url_encode(payload_json);

    let mut input = String::with_capacity(header_b64.len() + 1 + payload_b64.len());
    input.push_str(&header_b64);
    input.push('.');
    input.push_str(&payload_b64);
    input
}
