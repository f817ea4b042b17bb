// src/client/issue_credential_v2.rs
//! Issue-credential 2.0.
//!
//! Every request carries a format filter; only the indy format is used, with
//! an empty DIF filter alongside it.

use super::{segment, Client, Ignored};
use crate::error::Result;
use crate::models::{
    CredentialExchangeRecordResult, CredentialFilter, CredentialPreviewV2, IndyFilter,
    QueryCredentialExchangeParams,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Body shared by `create`, `send-proposal`, `send-offer` and `send`.
#[derive(Serialize)]
struct ExchangeRequestV2<'a> {
    #[serde(skip_serializing_if = "str::is_empty")]
    connection_id: &'a str,
    #[serde(rename = "cred_def_id", skip_serializing_if = "str::is_empty")]
    credential_definition_id: &'a str,
    credential_preview: &'a CredentialPreviewV2,
    #[serde(skip_serializing_if = "str::is_empty")]
    comment: &'a str,
    filter: CredentialFilter,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    trace: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    auto_remove: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    auto_issue: bool,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RecordsResponse {
    results: Vec<CredentialExchangeRecordResult>,
}

impl Client {
    fn exchange_request_v2<'a>(
        &self,
        connection_id: &'a str,
        credential_preview: &'a CredentialPreviewV2,
        comment: &'a str,
        filter: IndyFilter,
    ) -> ExchangeRequestV2<'a> {
        ExchangeRequestV2 {
            connection_id,
            credential_definition_id: "",
            credential_preview,
            comment,
            filter: CredentialFilter::indy(filter),
            trace: self.tracing,
            auto_remove: !self.preserve_exchange_records,
            auto_issue: false,
        }
    }

    /// Creates a credential offer not bound to any connection.
    pub async fn create_credential_exchange_v2(
        &self,
        credential_preview: &CredentialPreviewV2,
        filter: IndyFilter,
        comment: &str,
    ) -> Result<CredentialExchangeRecordResult> {
        let request = self.exchange_request_v2("", credential_preview, comment, filter);
        self.post("/issue-credential-2.0/create", &[], &request).await
    }

    /// Tells the issuer what the holder hopes to receive.
    pub async fn propose_credential_v2(
        &self,
        connection_id: &str,
        credential_preview: &CredentialPreviewV2,
        comment: &str,
        filter: IndyFilter,
    ) -> Result<CredentialExchangeRecordResult> {
        let request = self.exchange_request_v2(connection_id, credential_preview, comment, filter);
        self.post("/issue-credential-2.0/send-proposal", &[], &request).await
    }

    /// Offers a credential of `credential_definition_id` to the holder.
    ///
    /// When the client auto-responds to offers, the agent issues as soon as
    /// the holder's request arrives.
    pub async fn offer_credential_v2(
        &self,
        connection_id: &str,
        credential_preview: &CredentialPreviewV2,
        credential_definition_id: &str,
        comment: &str,
    ) -> Result<CredentialExchangeRecordResult> {
        let filter = IndyFilter {
            credential_definition_id: credential_definition_id.to_string(),
            ..Default::default()
        };
        let mut request = self.exchange_request_v2(connection_id, credential_preview, comment, filter);
        request.credential_definition_id = credential_definition_id;
        request.auto_issue = self.auto_respond_credential_offer;
        self.post("/issue-credential-2.0/send-offer", &[], &request).await
    }

    /// Sends an offer based on a previously received proposal.
    pub async fn offer_credential_by_id_v2(&self, credential_exchange_id: &str) -> Result<CredentialExchangeRecordResult> {
        self.post_empty(
            &format!("/issue-credential-2.0/records/{}/send-offer", segment(credential_exchange_id)),
            &[],
        )
        .await
    }

    /// Sends a credential request based on a previously received offer.
    pub async fn request_credential_by_id_v2(
        &self,
        credential_exchange_id: &str,
    ) -> Result<CredentialExchangeRecordResult> {
        self.post_empty(
            &format!("/issue-credential-2.0/records/{}/send-request", segment(credential_exchange_id)),
            &[],
        )
        .await
    }

    /// Issues a credential in one automated exchange.
    pub async fn issue_credential_v2(
        &self,
        connection_id: &str,
        credential_preview: &CredentialPreviewV2,
        comment: &str,
        filter: IndyFilter,
    ) -> Result<CredentialExchangeRecordResult> {
        let request = self.exchange_request_v2(connection_id, credential_preview, comment, filter);
        self.post("/issue-credential-2.0/send", &[], &request).await
    }

    /// Issues a credential based on a previously received request.
    pub async fn issue_credential_by_id_v2(
        &self,
        credential_exchange_id: &str,
        comment: &str,
    ) -> Result<CredentialExchangeRecordResult> {
        self.post(
            &format!("/issue-credential-2.0/records/{}/issue", segment(credential_exchange_id)),
            &[],
            &json!({ "comment": comment }),
        )
        .await
    }

    /// Stores a received credential; an empty `credential_id` lets the
    /// agent pick one.
    pub async fn store_credential_by_id_v2(
        &self,
        credential_exchange_id: &str,
        credential_id: &str,
    ) -> Result<CredentialExchangeRecordResult> {
        let body = if credential_id.is_empty() {
            json!({})
        } else {
            json!({ "credential_id": credential_id })
        };
        self.post(
            &format!("/issue-credential-2.0/records/{}/store", segment(credential_exchange_id)),
            &[],
            &body,
        )
        .await
    }

    pub async fn query_credential_exchange_v2(
        &self,
        params: &QueryCredentialExchangeParams,
    ) -> Result<Vec<CredentialExchangeRecordResult>> {
        let query = [
            ("connection_id", params.connection_id.clone()),
            ("role", params.role.clone()),
            ("state", params.state.clone()),
            ("thread_id", params.thread_id.clone()),
        ];
        let response: RecordsResponse = self.get("/issue-credential-2.0/records", &query).await?;
        Ok(response.results)
    }

    pub async fn get_credential_exchange_v2(&self, credential_exchange_id: &str) -> Result<CredentialExchangeRecordResult> {
        self.get(&format!("/issue-credential-2.0/records/{}", segment(credential_exchange_id)), &[])
            .await
    }

    pub async fn remove_credential_exchange_v2(&self, credential_exchange_id: &str) -> Result<()> {
        let _: Ignored = self
            .delete(&format!("/issue-credential-2.0/records/{}", segment(credential_exchange_id)))
            .await?;
        Ok(())
    }

    pub async fn report_credential_exchange_problem_v2(&self, credential_exchange_id: &str, message: &str) -> Result<()> {
        let _: Ignored = self
            .post(
                &format!("/issue-credential-2.0/records/{}/problem-report", segment(credential_exchange_id)),
                &[],
                &json!({ "explain_ltxt": message }),
            )
            .await?;
        Ok(())
    }
}
