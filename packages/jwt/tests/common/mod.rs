//! Shared PEM fixtures and helpers for the integration tests
//!
//! Keys were generated with OpenSSL; the PKCS#8 files hold the same key as
//! their SEC1 / PKCS#1 siblings.

#![allow(dead_code)]

use cryypt_jwt_provider::{Claims, IssuedToken, JwtResult};
use serde_json::json;

pub const RSA_PKCS1: &str = include_str!("../fixtures/rsa_pkcs1.pem");
pub const RSA_PKCS8: &str = include_str!("../fixtures/rsa_pkcs8.pem");
pub const EC_P256_SEC1: &str = include_str!("../fixtures/ec_p256_sec1.pem");
pub const EC_P256_PKCS8: &str = include_str!("../fixtures/ec_p256_pkcs8.pem");
pub const EC_P384_SEC1: &str = include_str!("../fixtures/ec_p384_sec1.pem");
pub const EC_P521_SEC1: &str = include_str!("../fixtures/ec_p521_sec1.pem");
pub const EC_P521_PKCS8: &str = include_str!("../fixtures/ec_p521_pkcs8.pem");

/// Claims used by the fixed RSA vectors
pub fn service_claims() -> Claims {
    Claims::new()
        .with_claim("sub", "svc")
        .with_claim("iss", "provider")
}

/// Claims with nesting and mixed value types
pub fn nested_claims() -> JwtResult<Claims> {
    Claims::from_value(json!({
        "sub": "svc",
        "nested": { "z": 1, "a": true },
        "aud": ["x", "y"],
    }))
}

/// Segments of an issued token as owned strings
pub fn segments(issued: &IssuedToken) -> JwtResult<[String; 3]> {
    let [header, payload, signature] = issued.token.segments()?;
    Ok([header.to_string(), payload.to_string(), signature.to_string()])
}
