// src/models/connection.rs
//! Connection records and the legacy (RFC 0160) invitation format.

use serde::{Deserialize, Serialize};

/// A connection record as kept by the agent.
///
/// Also delivered on the `connections` webhook topic.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Connection {
    /// `auto` or `manual`
    pub accept: String,
    pub alias: String,
    pub connection_id: String,
    pub connection_protocol: String,
    pub created_at: String,
    pub error_msg: String,
    pub inbound_connection_id: String,
    pub invitation_key: String,
    /// `once`, `multi` or `static`
    pub invitation_mode: String,
    pub invitation_msg_id: String,
    pub my_did: String,
    pub request_id: String,
    pub rfc23_state: String,
    pub routing_state: String,
    pub state: String,
    pub their_did: String,
    pub their_label: String,
    pub their_role: String,
    pub updated_at: String,
}

/// Connection invitation message.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Invitation {
    #[serde(rename = "@type", skip_serializing_if = "String::is_empty")]
    pub message_type: String,
    #[serde(rename = "@id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub did: String,
    #[serde(rename = "imageUrl", skip_serializing_if = "String::is_empty")]
    pub image_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub label: String,
    #[serde(rename = "recipientKeys", skip_serializing_if = "Vec::is_empty")]
    pub recipient_keys: Vec<String>,
    #[serde(rename = "routingKeys", skip_serializing_if = "Vec::is_empty")]
    pub routing_keys: Vec<String>,
    #[serde(rename = "serviceEndpoint", skip_serializing_if = "String::is_empty")]
    pub service_endpoint: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CreateInvitationResponse {
    pub connection_id: String,
    pub invitation_url: String,
    pub invitation: Invitation,
}

/// Filters for listing connections; empty fields are not sent.
#[derive(Debug, Clone, Default)]
pub struct QueryConnectionsParams {
    pub alias: String,
    /// `self` or `external`
    pub initiator: String,
    pub invitation_key: String,
    pub my_did: String,
    pub state: String,
    pub their_did: String,
    pub their_role: String,
}
