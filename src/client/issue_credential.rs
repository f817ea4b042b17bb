// src/client/issue_credential.rs
//! Issue-credential 1.0.
//!
//! The `trace`, `auto_remove` and `auto_issue` flags of outgoing requests are
//! taken from the client configuration, overriding whatever the caller set.

use super::{segment, Client, Ignored};
use crate::error::Result;
use crate::models::{
    CredentialCreateRequest, CredentialExchangeRecord, CredentialOfferRequest, CredentialProposalRequest,
    CredentialSendRequest, QueryCredentialExchangeParams,
};
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize, Default)]
#[serde(default)]
struct RecordsResponse {
    results: Vec<CredentialExchangeRecord>,
}

impl Client {
    /// Offers a credential to the holder on `request.connection_id`.
    pub async fn send_credential_offer(&self, mut request: CredentialOfferRequest) -> Result<CredentialExchangeRecord> {
        request.trace = self.tracing;
        request.auto_remove = !self.preserve_exchange_records;
        request.auto_issue = self.auto_respond_credential_offer;
        self.post("/issue-credential/send-offer", &[], &request).await
    }

    /// Proposes (as holder) the credential described by `request`.
    pub async fn send_credential_proposal(
        &self,
        mut request: CredentialProposalRequest,
    ) -> Result<CredentialExchangeRecord> {
        request.trace = self.tracing;
        request.auto_remove = !self.preserve_exchange_records;
        self.post("/issue-credential/send-proposal", &[], &request).await
    }

    /// Creates a credential offer not bound to any connection.
    pub async fn create_credential_exchange(
        &self,
        mut request: CredentialCreateRequest,
    ) -> Result<CredentialExchangeRecord> {
        request.trace = self.tracing;
        request.auto_remove = !self.preserve_exchange_records;
        self.post("/issue-credential/create", &[], &request).await
    }

    /// Issues a credential in one automated exchange.
    pub async fn send_credential(&self, mut request: CredentialSendRequest) -> Result<CredentialExchangeRecord> {
        request.trace = self.tracing;
        request.auto_remove = !self.preserve_exchange_records;
        self.post("/issue-credential/send", &[], &request).await
    }

    pub async fn query_credential_exchange(
        &self,
        params: &QueryCredentialExchangeParams,
    ) -> Result<Vec<CredentialExchangeRecord>> {
        let query = [
            ("connection_id", params.connection_id.clone()),
            ("role", params.role.clone()),
            ("state", params.state.clone()),
            ("thread_id", params.thread_id.clone()),
        ];
        let response: RecordsResponse = self.get("/issue-credential/records", &query).await?;
        Ok(response.results)
    }

    pub async fn get_credential_exchange(&self, credential_exchange_id: &str) -> Result<CredentialExchangeRecord> {
        self.get(&format!("/issue-credential/records/{}", segment(credential_exchange_id)), &[])
            .await
    }

    /// Issuer: offers in response to a received proposal.
    pub async fn send_credential_offer_by_id(&self, credential_exchange_id: &str) -> Result<CredentialExchangeRecord> {
        self.post_empty(
            &format!("/issue-credential/records/{}/send-offer", segment(credential_exchange_id)),
            &[],
        )
        .await
    }

    /// Holder: requests the credential in response to a received offer.
    pub async fn send_credential_request_by_id(
        &self,
        credential_exchange_id: &str,
    ) -> Result<CredentialExchangeRecord> {
        self.post_empty(
            &format!("/issue-credential/records/{}/send-request", segment(credential_exchange_id)),
            &[],
        )
        .await
    }

    /// Issuer: issues the credential in response to a received request.
    pub async fn issue_credential_by_id(
        &self,
        credential_exchange_id: &str,
        comment: &str,
    ) -> Result<CredentialExchangeRecord> {
        self.post(
            &format!("/issue-credential/records/{}/issue", segment(credential_exchange_id)),
            &[],
            &json!({ "comment": comment }),
        )
        .await
    }

    /// Holder: stores a received credential, under `credential_id` when given.
    pub async fn store_credential_by_id(
        &self,
        credential_exchange_id: &str,
        credential_id: &str,
    ) -> Result<CredentialExchangeRecord> {
        let body = if credential_id.is_empty() {
            json!({})
        } else {
            json!({ "credential_id": credential_id })
        };
        self.post(
            &format!("/issue-credential/records/{}/store", segment(credential_exchange_id)),
            &[],
            &body,
        )
        .await
    }

    pub async fn remove_credential_exchange(&self, credential_exchange_id: &str) -> Result<()> {
        let _: Ignored = self
            .delete(&format!("/issue-credential/records/{}", segment(credential_exchange_id)))
            .await?;
        Ok(())
    }

    pub async fn report_credential_exchange_problem(&self, credential_exchange_id: &str, message: &str) -> Result<()> {
        let _: Ignored = self
            .post(
                &format!("/issue-credential/records/{}/problem-report", segment(credential_exchange_id)),
                &[],
                &json!({ "explain_ltxt": message }),
            )
            .await?;
        Ok(())
    }
}
