// src/client/present_proof.rs
//! Present-proof 1.0.

use super::{segment, Client, Ignored};
use crate::error::Result;
use crate::models::{
    PresentationCredential, PresentationExchangeRecord, PresentationProof, PresentationProposalRequest,
    PresentationRequestRequest, QueryPresentationExchangeParams,
};
use serde::Deserialize;

#[derive(Deserialize, Default)]
#[serde(default)]
struct RecordsResponse {
    results: Vec<PresentationExchangeRecord>,
}

impl Client {
    /// Prover: proposes a presentation to the verifier.
    pub async fn send_presentation_proposal(
        &self,
        mut request: PresentationProposalRequest,
    ) -> Result<PresentationExchangeRecord> {
        request.trace = self.tracing;
        self.post("/present-proof/send-proposal", &[], &request).await
    }

    /// Verifier: creates a proof request not bound to any connection.
    pub async fn create_presentation_request(
        &self,
        mut request: PresentationRequestRequest,
    ) -> Result<PresentationExchangeRecord> {
        request.trace = self.tracing;
        self.post("/present-proof/create-request", &[], &request).await
    }

    /// Verifier: sends a proof request on `request.connection_id`.
    pub async fn send_presentation_request(
        &self,
        mut request: PresentationRequestRequest,
    ) -> Result<PresentationExchangeRecord> {
        request.trace = self.tracing;
        self.post("/present-proof/send-request", &[], &request).await
    }

    pub async fn query_presentation_exchange(
        &self,
        params: &QueryPresentationExchangeParams,
    ) -> Result<Vec<PresentationExchangeRecord>> {
        let query = [
            ("connection_id", params.connection_id.clone()),
            ("role", params.role.clone()),
            ("state", params.state.clone()),
            ("thread_id", params.thread_id.clone()),
        ];
        let response: RecordsResponse = self.get("/present-proof/records", &query).await?;
        Ok(response.results)
    }

    pub async fn get_presentation_exchange(&self, presentation_exchange_id: &str) -> Result<PresentationExchangeRecord> {
        self.get(&format!("/present-proof/records/{}", segment(presentation_exchange_id)), &[])
            .await
    }

    /// Verifier: answers a received proposal with a proof request.
    pub async fn send_presentation_request_by_id(
        &self,
        presentation_exchange_id: &str,
        mut request: PresentationRequestRequest,
    ) -> Result<PresentationExchangeRecord> {
        request.trace = self.tracing;
        self.post(
            &format!("/present-proof/records/{}/send-request", segment(presentation_exchange_id)),
            &[],
            &request,
        )
        .await
    }

    /// Prover: answers a received proof request.
    pub async fn send_presentation_by_id(
        &self,
        presentation_exchange_id: &str,
        mut proof: PresentationProof,
    ) -> Result<PresentationExchangeRecord> {
        proof.trace = self.tracing;
        self.post(
            &format!("/present-proof/records/{}/send-presentation", segment(presentation_exchange_id)),
            &[],
            &proof,
        )
        .await
    }

    /// Verifier: verifies a received presentation.
    ///
    /// The outcome is in [`PresentationExchangeRecord::verified`].
    pub async fn verify_presentation_by_id(&self, presentation_exchange_id: &str) -> Result<PresentationExchangeRecord> {
        self.post_empty(
            &format!("/present-proof/records/{}/verify-presentation", segment(presentation_exchange_id)),
            &[],
        )
        .await
    }

    /// Prover: wallet credentials that can satisfy the exchange's proof request.
    ///
    /// # Arguments
    /// * `count` - Maximum number of credentials; `0` for the agent default
    /// * `wql` - Extra wallet query as JSON; may be empty
    /// * `referents` - Proof request referents to restrict the search to
    /// * `start` - Offset of the first credential; `0` for the first
    pub async fn presentation_credentials_by_id(
        &self,
        presentation_exchange_id: &str,
        count: u32,
        wql: &str,
        referents: &[String],
        start: u32,
    ) -> Result<Vec<PresentationCredential>> {
        let mut query = vec![
            ("extra_query", wql.to_string()),
            ("referent", referents.join(",")),
        ];
        if count > 0 {
            query.push(("count", count.to_string()));
        }
        if start > 0 {
            query.push(("start", start.to_string()));
        }
        self.get(
            &format!("/present-proof/records/{}/credentials", segment(presentation_exchange_id)),
            &query,
        )
        .await
    }

    pub async fn remove_presentation_exchange(&self, presentation_exchange_id: &str) -> Result<()> {
        let _: Ignored = self
            .delete(&format!("/present-proof/records/{}", segment(presentation_exchange_id)))
            .await?;
        Ok(())
    }
}
