// src/models/credential_definition.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A CL credential definition as published on the ledger.
///
/// The key material is carried opaquely; this crate never interprets it.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CredentialDefinition {
    pub ver: String,
    pub id: String,
    #[serde(rename = "schemaId")]
    pub schema_id: String,
    #[serde(rename = "type")]
    pub definition_type: String,
    pub tag: String,
    pub value: CredentialDefinitionValue,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CredentialDefinitionValue {
    pub primary: PrimaryPublicKey,
    /// Present only when the definition supports revocation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revocation: Option<Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PrimaryPublicKey {
    pub n: String,
    pub s: String,
    /// One entry per attribute plus `master_secret`
    pub r: BTreeMap<String, String>,
    pub rctxt: String,
    pub z: String,
}

/// Filters for listing created credential definitions.
#[derive(Debug, Clone, Default)]
pub struct QueryCredentialDefinitionsParams {
    pub credential_definition_id: String,
    pub issuer_did: String,
    pub schema_id: String,
    pub schema_issuer_did: String,
    pub schema_name: String,
    pub schema_version: String,
}
