//! JWT issuing API
//!
//! Algorithm registry, key material, the two issuers and their validation
//! gate, plus the builder entry points.

pub mod algorithms;
pub mod builder;
pub mod hashed;
pub mod keys;
pub mod signed;
pub mod validation;

pub use algorithms::{Algorithm, Family, KeyRequirement, resolve, resolve_for};
pub use builder::{HashedJwtBuilder, Jwt, SignedJwtBuilder};
pub use hashed::HashedTokenIssuer;
pub use keys::{PemKey, Secret, check_pem_family, label_family, validate_pem};
pub use signed::SignedTokenIssuer;
pub use validation::{Diagnostics, FieldValidator};
