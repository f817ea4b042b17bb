// src/client/revocation.rs
//! Issuer-side revocation registries and credential revocation.
//!
//! Registry lifecycle: `create_revocation_registry` -> upload the tails file
//! -> publish the definition -> publish the initial entry. After revoking,
//! pending revocations are written to the ledger with `publish_revocations`.

use super::{segment, Client, Ignored};
use crate::error::Result;
use crate::models::{CredentialRevocationRecord, PendingRevocations, RevocationRegistry};
use crate::utils::identifiers::ensure_credential_definition_id;
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize, Default)]
#[serde(default)]
struct RegistryResponse {
    result: RevocationRegistry,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RegistryIdsResponse {
    rev_reg_ids: Vec<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct PendingResponse {
    rrid2crid: PendingRevocations,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RevocationRecordResponse {
    result: CredentialRevocationRecord,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct IssuedCountResponse {
    result: u64,
}

impl Client {
    pub async fn create_revocation_registry(
        &self,
        credential_definition_id: &str,
        max_cred_num: u32,
    ) -> Result<RevocationRegistry> {
        ensure_credential_definition_id(credential_definition_id)?;
        let body = json!({
            "credential_definition_id": credential_definition_id,
            "max_cred_num": max_cred_num,
        });
        let response: RegistryResponse = self.post("/revocation/create-registry", &[], &body).await?;
        Ok(response.result)
    }

    /// IDs of the registries created for a credential definition, optionally
    /// filtered by registry state.
    pub async fn query_revocation_registries(
        &self,
        credential_definition_id: &str,
        state: &str,
    ) -> Result<Vec<String>> {
        let query = [
            ("cred_def_id", credential_definition_id.to_string()),
            ("state", state.to_string()),
        ];
        let response: RegistryIdsResponse = self.get("/revocation/registries/created", &query).await?;
        Ok(response.rev_reg_ids)
    }

    pub async fn get_revocation_registry(&self, revocation_registry_id: &str) -> Result<RevocationRegistry> {
        let response: RegistryResponse = self
            .get(&format!("/revocation/registry/{}", segment(revocation_registry_id)), &[])
            .await?;
        Ok(response.result)
    }

    pub async fn update_revocation_registry_tails_uri(
        &self,
        revocation_registry_id: &str,
        tails_public_uri: &str,
    ) -> Result<RevocationRegistry> {
        let response: RegistryResponse = self
            .patch(
                &format!("/revocation/registry/{}", segment(revocation_registry_id)),
                &[],
                &json!({ "tails_public_uri": tails_public_uri }),
            )
            .await?;
        Ok(response.result)
    }

    /// The registry new credentials of this definition are issued against.
    pub async fn active_revocation_registry(&self, credential_definition_id: &str) -> Result<RevocationRegistry> {
        ensure_credential_definition_id(credential_definition_id)?;
        let response: RegistryResponse = self
            .get(&format!("/revocation/active-registry/{}", segment(credential_definition_id)), &[])
            .await?;
        Ok(response.result)
    }

    /// Downloads the registry's tails file.
    pub async fn download_tails_file(&self, revocation_registry_id: &str) -> Result<Vec<u8>> {
        self.get_bytes(&format!("/revocation/registry/{}/tails-file", segment(revocation_registry_id)))
            .await
    }

    /// Has the agent upload the tails file to its tails server.
    pub async fn upload_tails_file(&self, revocation_registry_id: &str) -> Result<()> {
        let _: Ignored = self
            .put_empty(&format!("/revocation/registry/{}/tails-file", segment(revocation_registry_id)))
            .await?;
        Ok(())
    }

    pub async fn publish_revocation_registry_definition(
        &self,
        revocation_registry_id: &str,
    ) -> Result<RevocationRegistry> {
        let response: RegistryResponse = self
            .post_empty(&format!("/revocation/registry/{}/definition", segment(revocation_registry_id)), &[])
            .await?;
        Ok(response.result)
    }

    pub async fn publish_revocation_registry_entry(&self, revocation_registry_id: &str) -> Result<RevocationRegistry> {
        let response: RegistryResponse = self
            .post_empty(&format!("/revocation/registry/{}/entry", segment(revocation_registry_id)), &[])
            .await?;
        Ok(response.result)
    }

    /// Forces the registry into `state` (`init`, `generated`, `posted`,
    /// `active` or `full`).
    pub async fn set_revocation_registry_state(
        &self,
        revocation_registry_id: &str,
        state: &str,
    ) -> Result<RevocationRegistry> {
        let response: RegistryResponse = self
            .patch_empty(
                &format!("/revocation/registry/{}/set-state", segment(revocation_registry_id)),
                &[("state", state.to_string())],
            )
            .await?;
        Ok(response.result)
    }

    /// Revokes an issued credential.
    ///
    /// Without `publish` the revocation stays pending until
    /// [`Client::publish_revocations`] is called.
    pub async fn revoke_issued_credential(
        &self,
        credential_revocation_id: &str,
        revocation_registry_id: &str,
        publish: bool,
    ) -> Result<()> {
        let query = [
            ("cred_rev_id", credential_revocation_id.to_string()),
            ("rev_reg_id", revocation_registry_id.to_string()),
            ("publish", publish.to_string()),
        ];
        let _: Ignored = self.post_empty("/revocation/revoke", &query).await?;
        Ok(())
    }

    /// Publishes pending revocations to the ledger; `None` publishes all.
    pub async fn publish_revocations(&self, revocations: Option<&PendingRevocations>) -> Result<()> {
        let _: Ignored = self
            .post(
                "/revocation/publish-revocations",
                &[],
                &json!({ "rrid2crid": revocations }),
            )
            .await?;
        Ok(())
    }

    /// Drops pending revocations without publishing them; `None` clears all.
    ///
    /// Returns the revocations still pending afterwards.
    pub async fn clear_pending_revocations(
        &self,
        revocations: Option<&PendingRevocations>,
    ) -> Result<PendingRevocations> {
        let response: PendingResponse = self
            .post(
                "/revocation/clear-pending-revocations",
                &[],
                &json!({ "purge": revocations }),
            )
            .await?;
        Ok(response.rrid2crid)
    }

    /// Looks up the revocation record of an issued credential, either by
    /// credential exchange ID or by registry and credential revocation ID.
    pub async fn credential_revocation_status(
        &self,
        credential_exchange_id: &str,
        credential_revocation_id: &str,
        revocation_registry_id: &str,
    ) -> Result<CredentialRevocationRecord> {
        let query = [
            ("cred_ex_id", credential_exchange_id.to_string()),
            ("cred_rev_id", credential_revocation_id.to_string()),
            ("rev_reg_id", revocation_registry_id.to_string()),
        ];
        let response: RevocationRecordResponse = self.get("/revocation/credential-record", &query).await?;
        Ok(response.result)
    }

    /// Number of credentials issued against a registry.
    pub async fn issued_credentials_count(&self, revocation_registry_id: &str) -> Result<u64> {
        let response: IssuedCountResponse = self
            .get(&format!("/revocation/registry/{}/issued", segment(revocation_registry_id)), &[])
            .await?;
        Ok(response.result)
    }
}
