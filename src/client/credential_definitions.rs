// src/client/credential_definitions.rs
use super::{segment, Client};
use crate::error::Result;
use crate::models::{CredentialDefinition, QueryCredentialDefinitionsParams};
use crate::utils::identifiers::{ensure_credential_definition_id, ensure_schema_id};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct CredentialDefinitionRequest<'a> {
    #[serde(skip_serializing_if = "str::is_empty")]
    tag: &'a str,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    support_revocation: bool,
    #[serde(skip_serializing_if = "is_zero")]
    revocation_registry_size: u32,
    schema_id: &'a str,
}

fn is_zero(size: &u32) -> bool {
    *size == 0
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct CreatedResponse {
    credential_definition_id: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct CreatedIdsResponse {
    credential_definition_ids: Vec<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct CredentialDefinitionResponse {
    credential_definition: CredentialDefinition,
}

impl Client {
    /// Creates a credential definition for `schema_id` and publishes it.
    ///
    /// Returns the new credential definition ID. With `support_revocation`
    /// the agent also creates a revocation registry of
    /// `revocation_registry_size` entries.
    pub async fn create_credential_definition(
        &self,
        tag: &str,
        support_revocation: bool,
        revocation_registry_size: u32,
        schema_id: &str,
    ) -> Result<String> {
        ensure_schema_id(schema_id)?;
        let request = CredentialDefinitionRequest {
            tag,
            support_revocation,
            revocation_registry_size,
            schema_id,
        };
        let response: CreatedResponse = self.post("/credential-definitions", &[], &request).await?;
        Ok(response.credential_definition_id)
    }

    pub async fn query_credential_definitions(
        &self,
        params: &QueryCredentialDefinitionsParams,
    ) -> Result<Vec<String>> {
        let query = [
            ("cred_def_id", params.credential_definition_id.clone()),
            ("issuer_did", params.issuer_did.clone()),
            ("schema_id", params.schema_id.clone()),
            ("schema_issuer_did", params.schema_issuer_did.clone()),
            ("schema_name", params.schema_name.clone()),
            ("schema_version", params.schema_version.clone()),
        ];
        let response: CreatedIdsResponse = self.get("/credential-definitions/created", &query).await?;
        Ok(response.credential_definition_ids)
    }

    pub async fn get_credential_definition(&self, credential_definition_id: &str) -> Result<CredentialDefinition> {
        ensure_credential_definition_id(credential_definition_id)?;
        let response: CredentialDefinitionResponse = self
            .get(&format!("/credential-definitions/{}", segment(credential_definition_id)), &[])
            .await?;
        Ok(response.credential_definition)
    }
}
