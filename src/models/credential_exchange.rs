// src/models/credential_exchange.rs
//! Issue-credential 1.0 exchange records and request bodies.

use crate::models::credential::Credential;
use crate::models::decorators::{AttachDecorator, ThreadDecorator};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const CREDENTIAL_PREVIEW_TYPE: &str =
    "did:sov:BzCbsNYhMrjHiqZDTUASHg;spec/issue-credential/1.0/credential-preview";

/// An issue-credential 1.0 exchange record.
///
/// Also delivered on the `issue_credential` webhook topic.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CredentialExchangeRecord {
    pub credential_exchange_id: String,
    pub credential_definition_id: String,
    pub connection_id: String,
    pub thread_id: String,
    pub parent_thread_id: String,
    pub schema_id: String,
    pub revocation_id: Option<String>,
    #[serde(rename = "revoc_reg_id")]
    pub revocation_registry_id: Option<String>,
    pub state: String,
    pub credential_offer: Value,
    #[serde(rename = "credential_offer_dict")]
    pub credential_offer_message: CredentialOfferMessage,
    #[serde(rename = "credential_proposal_dict")]
    pub credential_proposal_message: CredentialProposalMessage,
    pub credential_request: Value,
    pub credential_request_metadata: Value,
    /// The stored credential, once the holder has accepted it
    pub credential: Credential,
    pub raw_credential: Value,
    /// `issuer` or `holder`
    pub role: String,
    /// `self` or `external`
    pub initiator: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(rename = "error_msg")]
    pub error_message: String,
    pub trace: bool,
    pub auto_offer: bool,
    pub auto_issue: bool,
    pub auto_remove: bool,
}

/// The `offer-credential` message.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CredentialOfferMessage {
    #[serde(rename = "@type")]
    pub message_type: String,
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "~thread")]
    pub thread: ThreadDecorator,
    pub credential_preview: CredentialPreview,
    pub comment: String,
    #[serde(rename = "offers~attach")]
    pub offers_attach: Vec<AttachDecorator>,
}

/// The `propose-credential` message.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CredentialProposalMessage {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub message_type: String,
    #[serde(rename = "cred_def_id")]
    pub credential_definition_id: String,
    pub schema_id: String,
    pub issuer_did: String,
    pub schema_name: String,
    pub schema_issuer_did: String,
    pub schema_version: String,
    pub comment: String,
    pub credential_proposal: CredentialPreview,
}

/// Attribute names and values offered, proposed or issued.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CredentialPreview {
    #[serde(rename = "@type")]
    pub message_type: String,
    pub attributes: Vec<CredentialAttribute>,
}

impl CredentialPreview {
    pub fn new(attributes: Vec<CredentialAttribute>) -> Self {
        Self {
            message_type: CREDENTIAL_PREVIEW_TYPE.to_string(),
            attributes,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CredentialAttribute {
    pub name: String,
    #[serde(rename = "mime-type", skip_serializing_if = "String::is_empty")]
    pub mime_type: String,
    pub value: String,
}

impl CredentialAttribute {
    /// A `text/plain` attribute.
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: "text/plain".to_string(),
            value: value.into(),
        }
    }
}

/// Body of `POST /issue-credential/send-offer`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CredentialOfferRequest {
    #[serde(rename = "cred_def_id")]
    pub credential_definition_id: String,
    pub connection_id: String,
    pub credential_preview: CredentialPreview,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,
    pub trace: bool,
    pub auto_remove: bool,
    pub auto_issue: bool,
}

/// Body of `POST /issue-credential/send-proposal` and `/send`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CredentialProposalRequest {
    #[serde(rename = "cred_def_id", skip_serializing_if = "String::is_empty")]
    pub credential_definition_id: String,
    pub connection_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub issuer_did: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,
    pub credential_proposal: CredentialPreview,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub schema_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub schema_version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub schema_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub schema_issuer_did: String,
    pub trace: bool,
    pub auto_remove: bool,
}

/// Body of `POST /issue-credential/send`: an automated issue without a
/// preceding offer.
pub type CredentialSendRequest = CredentialProposalRequest;

/// Body of `POST /issue-credential/create`: a connectionless offer.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CredentialCreateRequest {
    #[serde(rename = "cred_def_id", skip_serializing_if = "String::is_empty")]
    pub credential_definition_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub issuer_did: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,
    pub credential_proposal: CredentialPreview,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub schema_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub schema_version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub schema_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub schema_issuer_did: String,
    pub trace: bool,
    pub auto_remove: bool,
}

/// Filters for listing exchange records (v1 and v2).
#[derive(Debug, Clone, Default)]
pub struct QueryCredentialExchangeParams {
    pub connection_id: String,
    /// `issuer` or `holder`
    pub role: String,
    pub state: String,
    pub thread_id: String,
}
