//! Resource host adapter
//!
//! The host owns state, diffs and the create/read/delete cycle. This module
//! only describes the two token resources and runs the issuers when the host
//! asks for a create.

pub mod hashed_token;
pub mod resource;
pub mod schema;
pub mod signed_token;

pub use hashed_token::HashedTokenResource;
pub use resource::{Resource, ResourceData};
pub use schema::{FieldKind, FieldSchema, Presence, ResourceSchema};
pub use signed_token::SignedTokenResource;

use crate::error::{JwtError, JwtResult};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Resource type name of the HMAC token
pub const HASHED_TOKEN: &str = "jwt_hashed_token";

/// Resource type name of the RSA/ECDSA token
pub const SIGNED_TOKEN: &str = "jwt_signed_token";

/// Registry of the resource types this crate serves
#[derive(Clone)]
pub struct Provider {
    resources: BTreeMap<&'static str, Arc<dyn Resource>>,
}

impl Provider {
    /// Provider with both token resources registered
    #[must_use]
    pub fn new() -> Self {
        let mut resources: BTreeMap<&'static str, Arc<dyn Resource>> = BTreeMap::new();
        resources.insert(HASHED_TOKEN, Arc::new(HashedTokenResource::new()));
        resources.insert(SIGNED_TOKEN, Arc::new(SignedTokenResource::new()));
        Self { resources }
    }

    /// Registered resource type names, sorted
    pub fn resource_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.resources.keys().copied()
    }

    /// Resource by type name
    ///
    /// # Errors
    /// `UnknownResource` for unregistered names.
    pub fn resource(&self, name: &str) -> JwtResult<Arc<dyn Resource>> {
        self.resources
            .get(name)
            .cloned()
            .ok_or_else(|| JwtError::UnknownResource(name.to_string()))
    }
}

impl Default for Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provider")
            .field("resources", &self.resources.keys().collect::<Vec<_>>())
            .finish()
    }
}
