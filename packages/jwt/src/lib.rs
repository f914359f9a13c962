//! JSON Web Token issuing for declarative infrastructure resources
//!
//! This crate turns (algorithm, key material, claims) into a signed compact
//! JWT, deterministically:
//! - HS256/384/512 with a shared secret
//! - RS256/384/512 and ES256/384/512 with a PEM private key
//! - canonical claims JSON, reused as the resource identity
//! - the `jwt_hashed_token` / `jwt_signed_token` resource adapter
//!
//! Nothing is cached between calls and every operation is safe to run
//! concurrently.

pub mod api;
pub mod claims;
pub mod config;
mod error;
pub mod provider;
mod types;

pub use api::{
    Algorithm, Diagnostics, Family, HashedTokenIssuer, Jwt, KeyRequirement, PemKey, Secret,
    SignedTokenIssuer, resolve, resolve_for,
};
pub use claims::Claims;
pub use config::{HashedTokenConfig, SignedTokenConfig};
pub use error::*;
pub use provider::{HASHED_TOKEN, Provider, Resource, ResourceData, SIGNED_TOKEN};
pub use types::*;
