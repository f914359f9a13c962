//! `jwt_signed_token`: RSA/ECDSA-signed token resource

use super::SIGNED_TOKEN;
use super::resource::{Resource, ResourceData};
use super::schema::{FieldKind, FieldSchema, ResourceSchema};
use crate::api::validation::{validate_signing_algorithm, validate_signing_key};
use crate::config::SignedTokenConfig;
use crate::error::JwtResult;

/// RSA/ECDSA-signed token resource
#[derive(Debug, Clone)]
pub struct SignedTokenResource {
    schema: ResourceSchema,
}

impl SignedTokenResource {
    /// Resource with its schema
    #[must_use]
    pub fn new() -> Self {
        Self {
            schema: ResourceSchema {
                name: SIGNED_TOKEN,
                fields: vec![
                    FieldSchema::required(
                        "algorithm",
                        FieldKind::String,
                        "Signing algorithm to use",
                    )
                    .validate_with(validate_signing_algorithm),
                    FieldSchema::required(
                        "key",
                        FieldKind::String,
                        "PEM-formated key to sign the JWT with",
                    )
                    .sensitive()
                    .validate_with(validate_signing_key),
                    FieldSchema::required("claims", FieldKind::Map, "The token's claims"),
                    FieldSchema::computed("token", FieldKind::String),
                ],
            },
        }
    }
}

impl Default for SignedTokenResource {
    fn default() -> Self {
        Self::new()
    }
}

impl Resource for SignedTokenResource {
    fn schema(&self) -> &ResourceSchema {
        &self.schema
    }

    fn create(&self, data: &mut ResourceData) -> JwtResult<()> {
        // Field validators could not compare key and algorithm; the config can.
        let config = SignedTokenConfig::from_value(data.inputs(&self.schema))?;
        let issued = config.issue()?;

        data.set("token", issued.token.into_string());
        data.set_id(issued.id);
        Ok(())
    }
}
