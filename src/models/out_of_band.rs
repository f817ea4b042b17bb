// src/models/out_of_band.rs
//! Out-of-band (RFC 0434) invitations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Handshake protocols offered when the caller does not pick any.
pub const DEFAULT_HANDSHAKE_PROTOCOLS: [&str; 2] = [
    "did:sov:BzCbsNYhMrjHiqZDTUASHg;spec/didexchange/1.0",
    "did:sov:BzCbsNYhMrjHiqZDTUASHg;spec/connections/1.0",
];

/// Reference to an exchange record to attach to an invitation.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Attachment {
    /// Credential exchange ID or presentation exchange ID
    pub id: String,
    /// `credential-offer` or `present-proof`
    #[serde(rename = "type")]
    pub attachment_type: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CreateOutOfBandInvitationRequest {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub alias: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub handshake_protocols: Vec<String>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub my_label: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub use_public_did: bool,
}

impl CreateOutOfBandInvitationRequest {
    /// Invitation offering the default handshake protocols.
    pub fn with_default_handshake(alias: impl Into<String>, my_label: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            handshake_protocols: DEFAULT_HANDSHAKE_PROTOCOLS.iter().map(|p| p.to_string()).collect(),
            my_label: my_label.into(),
            ..Default::default()
        }
    }
}

/// Invitation record returned by `create-invitation`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct OutOfBandInvitationResponse {
    pub auto_accept: bool,
    #[serde(rename = "invi_msg_id")]
    pub invitation_message_id: String,
    pub updated_at: String,
    pub state: String,
    pub invitation_id: String,
    pub invitation_url: String,
    pub trace: bool,
    pub multi_use: bool,
    pub created_at: String,
    pub invitation: OutOfBandInvitation,
}

/// The invitation message itself, as passed to the invitee.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct OutOfBandInvitation {
    #[serde(rename = "@type")]
    pub message_type: String,
    #[serde(rename = "@id")]
    pub id: String,
    pub label: String,
    pub handshake_protocols: Vec<String>,
    #[serde(alias = "service")]
    pub services: Vec<OutOfBandService>,
    #[serde(rename = "requests~attach", skip_serializing_if = "Vec::is_empty")]
    pub requests_attach: Vec<Value>,
}

/// A service entry: either a resolvable DID or an inline service block.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum OutOfBandService {
    Did(String),
    Inline(InlineService),
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct InlineService {
    pub id: String,
    #[serde(rename = "type")]
    pub service_type: String,
    #[serde(rename = "recipientKeys")]
    pub recipient_keys: Vec<String>,
    #[serde(rename = "routingKeys", skip_serializing_if = "Vec::is_empty")]
    pub routing_keys: Vec<String>,
    #[serde(rename = "serviceEndpoint")]
    pub service_endpoint: String,
}

/// Payload of the `oob_invitation` webhook topic.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct OutOfBandEvent {
    pub invitation_id: String,
    #[serde(rename = "invi_msg_id")]
    pub invitation_message_id: String,
    pub invitation: OutOfBandInvitation,
    pub state: String,
    pub invitation_url: String,
    pub updated_at: String,
    pub created_at: String,
    pub auto_accept: bool,
    pub multi_use: bool,
    pub trace: bool,
}
