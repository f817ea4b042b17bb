// src/client/wallet.rs
//! DIDs held in the agent's wallet.

use super::{Client, Ignored};
use crate::error::Result;
use crate::models::{Did, EndpointType, QueryDidsParams};
use crate::utils::identifiers::ensure_did;
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize, Default)]
#[serde(default)]
struct DidsResponse {
    results: Vec<Did>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct DidResponse {
    result: Option<Did>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct DidEndpointResponse {
    endpoint: Option<String>,
}

impl Client {
    pub async fn query_dids(&self, params: &QueryDidsParams) -> Result<Vec<Did>> {
        let query = [
            ("did", params.did.clone()),
            ("public", params.public.map(|public| public.to_string()).unwrap_or_default()),
            ("posture", params.posture.clone()),
            ("verkey", params.verkey.clone()),
        ];
        let response: DidsResponse = self.get("/wallet/did", &query).await?;
        Ok(response.results)
    }

    /// Creates a new local (unpublished) DID.
    pub async fn create_local_did(&self) -> Result<Did> {
        let response: DidResponse = self.post("/wallet/did/create", &[], &json!({})).await?;
        Ok(response.result.unwrap_or_default())
    }

    /// The wallet's public DID; `None` when none has been set.
    pub async fn public_did(&self) -> Result<Option<Did>> {
        let response: DidResponse = self.get("/wallet/did/public", &[]).await?;
        Ok(response.result)
    }

    pub async fn set_public_did(&self, did: &str) -> Result<Did> {
        ensure_did(did)?;
        let response: DidResponse = self
            .post_empty("/wallet/did/public", &[("did", did.to_string())])
            .await?;
        Ok(response.result.unwrap_or_default())
    }

    pub async fn set_did_endpoint(&self, did: &str, endpoint: &str, endpoint_type: EndpointType) -> Result<()> {
        ensure_did(did)?;
        let body = json!({
            "did": did,
            "endpoint": endpoint,
            "endpoint_type": endpoint_type.as_str(),
        });
        let _: Ignored = self.post("/wallet/set-did-endpoint", &[], &body).await?;
        Ok(())
    }

    pub async fn did_endpoint(&self, did: &str) -> Result<String> {
        ensure_did(did)?;
        let response: DidEndpointResponse = self
            .get("/wallet/get-did-endpoint", &[("did", did.to_string())])
            .await?;
        Ok(response.endpoint.unwrap_or_default())
    }

    pub async fn rotate_keypair(&self, did: &str) -> Result<()> {
        ensure_did(did)?;
        let _: Ignored = self
            .patch_empty("/wallet/did/local/rotate-keypair", &[("did", did.to_string())])
            .await?;
        Ok(())
    }
}
