//! JWT Algorithm Registry
//!
//! Maps algorithm names to a closed set of signing methods, classifies each
//! method by key family and hash size, and hosts the per-family signers.
//! Lookups are pure; nothing here holds state between calls.

pub(crate) mod core;
pub(crate) mod ecdsa;
pub(crate) mod hmac;
pub(crate) mod rsa;
pub(crate) mod utils;

use crate::error::{JwtError, JwtResult};
use std::fmt;
use std::str::FromStr;

/// Signing family of an algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// HMAC over a shared secret
    Hmac,
    /// RSASSA-PKCS1-v1_5 with an RSA private key
    Rsa,
    /// ECDSA over a NIST curve private key
    Ecdsa,
}

/// Shape of the key a family signs with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyRequirement {
    /// Raw byte secret
    SymmetricSecret,
    /// PEM-encoded private key of the matching family
    PemPrivateKey,
}

impl Family {
    /// Key shape this family requires
    #[must_use]
    pub const fn key_requirement(self) -> KeyRequirement {
        match self {
            Family::Hmac => KeyRequirement::SymmetricSecret,
            Family::Rsa | Family::Ecdsa => KeyRequirement::PemPrivateKey,
        }
    }

    /// Short label used in messages
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Family::Hmac => "HMAC",
            Family::Rsa => "RSA",
            Family::Ecdsa => "ECDSA",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Signing algorithm identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// HMAC using SHA-256
    HS256,
    /// HMAC using SHA-384
    HS384,
    /// HMAC using SHA-512
    HS512,
    /// RSASSA-PKCS1-v1_5 using SHA-256
    RS256,
    /// RSASSA-PKCS1-v1_5 using SHA-384
    RS384,
    /// RSASSA-PKCS1-v1_5 using SHA-512
    RS512,
    /// ECDSA using P-256 and SHA-256
    ES256,
    /// ECDSA using P-384 and SHA-384
    ES384,
    /// ECDSA using P-521 and SHA-512
    ES512,
}

impl Algorithm {
    /// Every registered algorithm
    pub const ALL: [Algorithm; 9] = [
        Algorithm::HS256,
        Algorithm::HS384,
        Algorithm::HS512,
        Algorithm::RS256,
        Algorithm::RS384,
        Algorithm::RS512,
        Algorithm::ES256,
        Algorithm::ES384,
        Algorithm::ES512,
    ];

    /// Algorithms that sign with a shared secret
    pub const HMAC: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

    /// Algorithms that sign with a PEM private key
    pub const ASYMMETRIC: [Algorithm; 6] = [
        Algorithm::RS256,
        Algorithm::RS384,
        Algorithm::RS512,
        Algorithm::ES256,
        Algorithm::ES384,
        Algorithm::ES512,
    ];

    /// Name as written in the JOSE header
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Algorithm::HS256 => "HS256",
            Algorithm::HS384 => "HS384",
            Algorithm::HS512 => "HS512",
            Algorithm::RS256 => "RS256",
            Algorithm::RS384 => "RS384",
            Algorithm::RS512 => "RS512",
            Algorithm::ES256 => "ES256",
            Algorithm::ES384 => "ES384",
            Algorithm::ES512 => "ES512",
        }
    }

    /// Signing family
    #[must_use]
    pub const fn family(self) -> Family {
        match self {
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Family::Hmac,
            Algorithm::RS256 | Algorithm::RS384 | Algorithm::RS512 => Family::Rsa,
            Algorithm::ES256 | Algorithm::ES384 | Algorithm::ES512 => Family::Ecdsa,
        }
    }

    /// SHA-2 output size selected by the name suffix
    #[must_use]
    pub const fn digest_bits(self) -> u16 {
        match self {
            Algorithm::HS256 | Algorithm::RS256 | Algorithm::ES256 => 256,
            Algorithm::HS384 | Algorithm::RS384 | Algorithm::ES384 => 384,
            Algorithm::HS512 | Algorithm::RS512 | Algorithm::ES512 => 512,
        }
    }

    /// Key shape required to sign with this algorithm
    #[must_use]
    pub const fn key_requirement(self) -> KeyRequirement {
        self.family().key_requirement()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = JwtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve(s)
    }
}

fn lookup(name: &str) -> Option<Algorithm> {
    Algorithm::ALL.into_iter().find(|alg| alg.as_str() == name)
}

fn join(algs: &[Algorithm]) -> String {
    algs.iter()
        .map(|alg| alg.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolve an algorithm name against the full registry
///
/// Names are case-sensitive.
///
/// # Errors
/// Returns `UnsupportedAlgorithm` listing every registered name.
pub fn resolve(name: &str) -> JwtResult<Algorithm> {
    lookup(name).ok_or_else(|| JwtError::UnsupportedAlgorithm {
        name: name.to_string(),
        choices: format!("Choices are {}", join(&Algorithm::ALL)),
    })
}

/// Resolve an algorithm name and gate it on the key shape the caller holds
///
/// This is the configuration-time check used by both issuers: unknown names
/// list only the choices valid for `expected`, and names of the other family
/// point the caller at the resource that accepts them.
///
/// # Errors
/// Returns `UnsupportedAlgorithm` or `WrongKeyFamily`.
pub fn resolve_for(name: &str, expected: KeyRequirement) -> JwtResult<Algorithm> {
    let Some(algorithm) = lookup(name) else {
        let choices = match expected {
            KeyRequirement::SymmetricSecret => format!("Choices are {}", join(&Algorithm::HMAC)),
            KeyRequirement::PemPrivateKey => {
                format!("Options are {}", join(&Algorithm::ASYMMETRIC))
            }
        };
        return Err(JwtError::UnsupportedAlgorithm {
            name: name.to_string(),
            choices,
        });
    };

    if algorithm.key_requirement() != expected {
        return Err(match expected {
            KeyRequirement::SymmetricSecret => JwtError::WrongKeyFamily {
                family: "RSA/ECDSA",
                resource: crate::provider::SIGNED_TOKEN,
            },
            KeyRequirement::PemPrivateKey => JwtError::WrongKeyFamily {
                family: "HMAC",
                resource: crate::provider::HASHED_TOKEN,
            },
        });
    }

    Ok(algorithm)
}
