// src/client/credentials.rs
//! Credentials stored in the holder's wallet.

use super::{segment, Client, Ignored};
use crate::error::{Error, Result};
use crate::models::{Credential, PresentationProofAttribute, ProofRequest};
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Deserialize, Default)]
#[serde(default)]
struct CredentialsResponse {
    results: Vec<Credential>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RevokedResponse {
    revoked: bool,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct MimeTypesResponse {
    results: HashMap<String, String>,
}

/// Page size used when searching for credentials matching a proof request.
const MATCH_PAGE_SIZE: u32 = 10;

impl Client {
    /// Lists wallet credentials.
    ///
    /// # Arguments
    /// * `max` - Page size
    /// * `index` - Offset of the first credential
    /// * `wql` - Wallet query as JSON, e.g. `{"cred_def_id": "..."}`; empty for all
    pub async fn get_credentials(&self, max: u32, index: u32, wql: &str) -> Result<Vec<Credential>> {
        let query = [
            ("max", max.to_string()),
            ("index", index.to_string()),
            ("wql", wql.to_string()),
        ];
        let response: CredentialsResponse = self.get("/credentials", &query).await?;
        Ok(response.results)
    }

    pub async fn get_credential(&self, credential_id: &str) -> Result<Credential> {
        self.get(&format!("/credential/{}", segment(credential_id)), &[]).await
    }

    /// Checks the ledger for the revocation status of a held credential.
    pub async fn is_credential_revoked(&self, credential_id: &str) -> Result<bool> {
        let response: RevokedResponse = self
            .get(&format!("/credential/revoked/{}", segment(credential_id)), &[])
            .await?;
        Ok(response.revoked)
    }

    /// MIME types of the credential's attributes, by attribute name.
    pub async fn credential_mime_types(&self, credential_id: &str) -> Result<HashMap<String, String>> {
        let response: MimeTypesResponse = self
            .get(&format!("/credential/mime-types/{}", segment(credential_id)), &[])
            .await?;
        Ok(response.results)
    }

    pub async fn remove_credential(&self, credential_id: &str) -> Result<()> {
        let _: Ignored = self.delete(&format!("/credential/{}", segment(credential_id))).await?;
        Ok(())
    }

    /// Picks one wallet credential for every requested attribute of `request`.
    ///
    /// The first restriction of each attribute is used as the wallet query.
    /// Exactly one credential must match; a match lacking any requested
    /// attribute value is left out of the result.
    pub async fn find_matching_credentials(
        &self,
        request: &ProofRequest,
    ) -> Result<HashMap<String, PresentationProofAttribute>> {
        let mut requested_attributes = HashMap::new();
        for (referent, attribute) in &request.requested_attributes {
            let wql = match attribute.restrictions.first() {
                Some(restriction) => serde_json::to_string(restriction)?,
                None => String::new(),
            };
            let mut credentials = self.get_credentials(MATCH_PAGE_SIZE, 0, &wql).await?;
            let credential = match credentials.len() {
                0 => return Err(Error::NoMatchingCredential(referent.clone())),
                1 => credentials.remove(0),
                _ => return Err(Error::AmbiguousCredential(referent.clone())),
            };
            if credential.contains_all_attributes(&attribute.attribute_names()) {
                debug!("{} -> credential {}", referent, credential.referent);
                requested_attributes.insert(
                    referent.clone(),
                    PresentationProofAttribute {
                        revealed: true,
                        timestamp: None,
                        credential_id: credential.referent,
                    },
                );
            }
        }
        Ok(requested_attributes)
    }
}
