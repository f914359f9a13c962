//! `jwt_hashed_token`: HMAC-signed token resource

use super::HASHED_TOKEN;
use super::resource::{Resource, ResourceData};
use super::schema::{FieldKind, FieldSchema, ResourceSchema};
use crate::api::hashed::HashedTokenIssuer;
use crate::api::validation::validate_hashing_algorithm;
use crate::config::HashedTokenConfig;
use crate::error::JwtResult;

/// HMAC-signed token resource
#[derive(Debug, Clone)]
pub struct HashedTokenResource {
    schema: ResourceSchema,
}

impl HashedTokenResource {
    /// Resource with its schema
    #[must_use]
    pub fn new() -> Self {
        Self {
            schema: ResourceSchema {
                name: HASHED_TOKEN,
                fields: vec![
                    FieldSchema::optional(
                        "algorithm",
                        FieldKind::String,
                        HashedTokenIssuer::DEFAULT_ALGORITHM.as_str(),
                        "Signing algorithm to use",
                    )
                    .validate_with(validate_hashing_algorithm),
                    FieldSchema::required(
                        "secret",
                        FieldKind::String,
                        "HMAC secret to sign the JWT with",
                    )
                    .sensitive(),
                    FieldSchema::required("claims", FieldKind::Map, "The token's claims"),
                    FieldSchema::computed("token", FieldKind::String),
                ],
            },
        }
    }
}

impl Default for HashedTokenResource {
    fn default() -> Self {
        Self::new()
    }
}

impl Resource for HashedTokenResource {
    fn schema(&self) -> &ResourceSchema {
        &self.schema
    }

    fn create(&self, data: &mut ResourceData) -> JwtResult<()> {
        let config = HashedTokenConfig::from_value(data.inputs(&self.schema))?;
        let issued = config.issue()?;

        data.set("token", issued.token.into_string());
        data.set_id(issued.id);
        Ok(())
    }
}
