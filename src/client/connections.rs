// src/client/connections.rs
//! Connections, basic messages, trust pings and DID exchange.

use super::{segment, Client, Ignored};
use crate::error::Result;
use crate::models::{Connection, CreateInvitationResponse, Invitation, QueryConnectionsParams, Thread};
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize, Default)]
#[serde(default)]
struct ConnectionsResponse {
    results: Vec<Connection>,
}

impl Client {
    /// Creates a connection invitation (RFC 0160).
    ///
    /// # Arguments
    /// * `alias` - Local alias for the resulting connection; may be empty
    /// * `auto_accept` - Accept the invitee's connection request automatically
    /// * `multi_use` - Allow the invitation to be used more than once
    /// * `public` - Use the agent's public DID in the invitation
    pub async fn create_invitation(
        &self,
        alias: &str,
        auto_accept: bool,
        multi_use: bool,
        public: bool,
    ) -> Result<CreateInvitationResponse> {
        let query = [
            ("alias", alias.to_string()),
            ("auto_accept", auto_accept.to_string()),
            ("multi_use", multi_use.to_string()),
            ("public", public.to_string()),
        ];
        self.post_empty("/connections/create-invitation", &query).await
    }

    /// Receives an invitation; the invitation label becomes the connection alias.
    pub async fn receive_invitation(&self, invitation: &Invitation, auto_accept: bool) -> Result<Connection> {
        let query = [
            ("alias", invitation.label.clone()),
            ("auto_accept", auto_accept.to_string()),
        ];
        self.post("/connections/receive-invitation", &query, invitation).await
    }

    pub async fn accept_invitation(&self, connection_id: &str) -> Result<Connection> {
        self.post_empty(&format!("/connections/{}/accept-invitation", segment(connection_id)), &[])
            .await
    }

    pub async fn accept_request(&self, connection_id: &str) -> Result<Connection> {
        self.post_empty(&format!("/connections/{}/accept-request", segment(connection_id)), &[])
            .await
    }

    /// Lists connections, optionally filtered.
    pub async fn query_connections(&self, params: Option<&QueryConnectionsParams>) -> Result<Vec<Connection>> {
        let query = match params {
            Some(params) => vec![
                ("alias", params.alias.clone()),
                ("initiator", params.initiator.clone()),
                ("invitation_key", params.invitation_key.clone()),
                ("my_did", params.my_did.clone()),
                ("connection_state", params.state.clone()),
                ("their_did", params.their_did.clone()),
                ("their_role", params.their_role.clone()),
            ],
            None => Vec::new(),
        };
        let response: ConnectionsResponse = self.get("/connections", &query).await?;
        Ok(response.results)
    }

    pub async fn get_connection(&self, connection_id: &str) -> Result<Connection> {
        self.get(&format!("/connections/{}", segment(connection_id)), &[]).await
    }

    pub async fn remove_connection(&self, connection_id: &str) -> Result<()> {
        let _: Ignored = self.delete(&format!("/connections/{}", segment(connection_id))).await?;
        Ok(())
    }

    /// Sends a trust ping; the returned thread ID matches the `ping` webhook.
    pub async fn send_ping(&self, connection_id: &str) -> Result<Thread> {
        self.post(
            &format!("/connections/{}/send-ping", segment(connection_id)),
            &[],
            &json!({ "comment": "ping" }),
        )
        .await
    }

    pub async fn send_basic_message(&self, connection_id: &str, content: &str) -> Result<()> {
        let _: Ignored = self
            .post(
                &format!("/connections/{}/send-message", segment(connection_id)),
                &[],
                &json!({ "content": content }),
            )
            .await?;
        Ok(())
    }

    /// Accepts a DID exchange (RFC 0023) invitation.
    pub async fn did_exchange_accept_invitation(
        &self,
        connection_id: &str,
        my_endpoint: &str,
        my_label: &str,
    ) -> Result<Connection> {
        let query = [
            ("my_endpoint", my_endpoint.to_string()),
            ("my_label", my_label.to_string()),
        ];
        self.post_empty(&format!("/didexchange/{}/accept-invitation", segment(connection_id)), &query)
            .await
    }

    pub async fn did_exchange_accept_request(&self, connection_id: &str, my_endpoint: &str) -> Result<Connection> {
        let query = [("my_endpoint", my_endpoint.to_string())];
        self.post_empty(&format!("/didexchange/{}/accept-request", segment(connection_id)), &query)
            .await
    }
}
