// src/models/schema.rs
use serde::{Deserialize, Serialize};

/// A schema as published on the ledger.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Schema {
    pub ver: String,
    pub id: String,
    pub name: String,
    pub version: String,
    #[serde(rename = "attrNames")]
    pub attribute_names: Vec<String>,
    #[serde(rename = "seqNo")]
    pub seq_no: u64,
}

/// Filters for listing created schemas; empty fields are not sent.
#[derive(Debug, Clone, Default)]
pub struct QuerySchemasParams {
    pub schema_id: String,
    pub schema_issuer_did: String,
    pub schema_name: String,
    pub schema_version: String,
}
