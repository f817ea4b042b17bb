// src/client/schemas.rs
use super::{segment, Client};
use crate::error::Result;
use crate::models::{QuerySchemasParams, Schema};
use crate::utils::identifiers::ensure_schema_id;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct SchemaRequest<'a> {
    schema_name: &'a str,
    schema_version: &'a str,
    attributes: &'a [String],
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct SchemaResponse {
    schema: Schema,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct SchemaIdsResponse {
    schema_ids: Vec<String>,
}

impl Client {
    /// Publishes a schema to the ledger with the agent's public DID as issuer.
    pub async fn register_schema(&self, name: &str, version: &str, attributes: &[String]) -> Result<Schema> {
        let request = SchemaRequest {
            schema_name: name,
            schema_version: version,
            attributes,
        };
        let response: SchemaResponse = self.post("/schemas", &[], &request).await?;
        Ok(response.schema)
    }

    /// IDs of the schemas this agent created.
    pub async fn query_schemas(&self, params: &QuerySchemasParams) -> Result<Vec<String>> {
        let query = [
            ("schema_id", params.schema_id.clone()),
            ("schema_issuer_did", params.schema_issuer_did.clone()),
            ("schema_name", params.schema_name.clone()),
            ("schema_version", params.schema_version.clone()),
        ];
        let response: SchemaIdsResponse = self.get("/schemas/created", &query).await?;
        Ok(response.schema_ids)
    }

    /// Fetches a schema from the ledger.
    pub async fn get_schema(&self, schema_id: &str) -> Result<Schema> {
        ensure_schema_id(schema_id)?;
        let response: SchemaResponse = self.get(&format!("/schemas/{}", segment(schema_id)), &[]).await?;
        Ok(response.schema)
    }
}
