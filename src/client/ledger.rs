// src/client/ledger.rs
//! Ledger lookups through the agent, plus DID registration on a development
//! ledger.

use super::Client;
use crate::error::{Error, Result};
use crate::models::{DidRole, EndpointType, RegisterDidRequest, RegisterDidResponse};
use crate::utils::identifiers::ensure_did;
use log::{debug, warn};
use serde::Deserialize;

#[derive(Deserialize, Default)]
#[serde(default)]
struct EndpointResponse {
    endpoint: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct VerkeyResponse {
    verkey: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RoleResponse {
    role: String,
}

impl Client {
    /// Endpoint of the given type published for `did`; empty when none is set.
    pub async fn did_endpoint_from_ledger(&self, did: &str, endpoint_type: EndpointType) -> Result<String> {
        ensure_did(did)?;
        let query = [
            ("did", did.to_string()),
            ("endpoint_type", endpoint_type.as_str().to_string()),
        ];
        let response: EndpointResponse = self.get("/ledger/did-endpoint", &query).await?;
        Ok(response.endpoint.unwrap_or_default())
    }

    pub async fn did_verkey_from_ledger(&self, did: &str) -> Result<String> {
        ensure_did(did)?;
        let response: VerkeyResponse = self.get("/ledger/did-verkey", &[("did", did.to_string())]).await?;
        Ok(response.verkey)
    }

    pub async fn did_role_from_ledger(&self, did: &str) -> Result<String> {
        ensure_did(did)?;
        let response: RoleResponse = self.get("/ledger/get-nym-role", &[("did", did.to_string())]).await?;
        Ok(response.role)
    }
}

/// Registers a new DID on a development ledger (the von-network web server).
///
/// The ledger derives the DID and verkey from `seed`, which must be 32
/// characters long.
///
/// # Arguments
/// * `ledger_url` - Base URL of the ledger browser, e.g. `http://localhost:9000`
/// * `alias` - Alias recorded with the NYM transaction
/// * `seed` - Wallet seed the agent will be started with
/// * `role` - Role to grant the new DID
pub async fn register_did(ledger_url: &str, alias: &str, seed: &str, role: DidRole) -> Result<RegisterDidResponse> {
    let url = format!("{}/register", ledger_url.trim_end_matches('/'));
    debug!("POST {}", url);

    let response = reqwest::Client::new()
        .post(&url)
        .json(&RegisterDidRequest { alias, seed, role })
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!("DID registration failed: {} -> {}", url, status);
        return Err(Error::Status { status, body });
    }
    Ok(response.json().await?)
}
