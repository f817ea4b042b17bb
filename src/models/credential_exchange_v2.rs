// src/models/credential_exchange_v2.rs
//! Issue-credential 2.0 exchange records.

use crate::models::credential_exchange::CredentialAttribute;
use crate::models::decorators::{AttachDecorator, AttachmentFormat, ThreadDecorator};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const CREDENTIAL_PREVIEW_V2_TYPE: &str = "issue-credential/2.0/credential-preview";

/// An issue-credential 2.0 exchange record.
///
/// Also delivered on the `issue_credential_v2_0` webhook topic.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CredentialExchangeRecordV2 {
    #[serde(rename = "cred_ex_id")]
    pub credential_exchange_id: String,
    #[serde(rename = "cred_id_stored")]
    pub credential_id_stored: Option<String>,
    #[serde(rename = "conn_id")]
    pub connection_id: Option<String>,
    pub thread_id: String,
    pub parent_thread_id: Option<String>,
    pub state: String,
    #[serde(rename = "cred_preview")]
    pub credential_preview: CredentialPreviewV2,
    #[serde(rename = "cred_offer")]
    pub credential_offer: CredentialOfferV2,
    #[serde(rename = "cred_proposal")]
    pub credential_proposal: CredentialProposalV2,
    #[serde(rename = "cred_request")]
    pub credential_request: CredentialRequestV2,
    #[serde(rename = "cred_request_metadata")]
    pub credential_request_metadata: Value,
    #[serde(rename = "cred_issue")]
    pub credential_issue: CredentialIssueV2,
    pub role: String,
    pub initiator: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(rename = "error_msg")]
    pub error_message: Option<String>,
    pub trace: bool,
    pub auto_offer: bool,
    pub auto_issue: bool,
    pub auto_remove: bool,
}

/// Record plus its format-specific details, as returned by the v2 endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CredentialExchangeRecordResult {
    #[serde(rename = "cred_ex_record")]
    pub credential_exchange_record: CredentialExchangeRecordV2,
    pub dif: Option<CredentialExchangeDif>,
    pub indy: Option<CredentialExchangeIndy>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CredentialPreviewV2 {
    #[serde(rename = "@type")]
    pub message_type: String,
    pub attributes: Vec<CredentialAttribute>,
}

impl CredentialPreviewV2 {
    pub fn new(attributes: Vec<CredentialAttribute>) -> Self {
        Self {
            message_type: CREDENTIAL_PREVIEW_V2_TYPE.to_string(),
            attributes,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CredentialOfferV2 {
    #[serde(rename = "@type")]
    pub message_type: String,
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "~thread")]
    pub thread: ThreadDecorator,
    pub comment: Option<String>,
    pub credential_preview: CredentialPreviewV2,
    #[serde(rename = "offers~attach")]
    pub offers_attach: Vec<AttachDecorator>,
    pub formats: Vec<AttachmentFormat>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CredentialProposalV2 {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub message_type: String,
    #[serde(rename = "filters~attach")]
    pub filters_attach: Vec<AttachDecorator>,
    pub comment: Option<String>,
    pub credential_proposal: CredentialPreviewV2,
    pub formats: Vec<AttachmentFormat>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CredentialRequestV2 {
    #[serde(rename = "@type")]
    pub message_type: String,
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "~thread")]
    pub thread: ThreadDecorator,
    #[serde(rename = "requests~attach")]
    pub requests_attach: Vec<AttachDecorator>,
    pub formats: Vec<AttachmentFormat>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CredentialIssueV2 {
    #[serde(rename = "@type")]
    pub message_type: String,
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "credentials~attach")]
    pub credentials_attach: Vec<AttachDecorator>,
    pub formats: Vec<AttachmentFormat>,
    pub comment: Option<String>,
}

/// DIF details of a v2 exchange (`issue_credential_v2_0_dif` topic).
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CredentialExchangeDif {
    #[serde(rename = "cred_ex_dif_id")]
    pub credential_exchange_dif_id: String,
    pub created_at: String,
    #[serde(rename = "cred_ex_id")]
    pub credential_exchange_id: String,
    pub item: Option<String>,
    pub state: String,
    pub updated_at: String,
}

/// Indy details of a v2 exchange (`issue_credential_v2_0_indy` topic).
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CredentialExchangeIndy {
    #[serde(rename = "cred_ex_indy_id")]
    pub credential_exchange_indy_id: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(rename = "cred_ex_id")]
    pub credential_exchange_id: String,
    #[serde(rename = "rev_reg_id")]
    pub revocation_registry_id: Option<String>,
    #[serde(rename = "cred_rev_id")]
    pub credential_revocation_id: Option<String>,
    #[serde(rename = "cred_request_metadata")]
    pub credential_request_metadata: Value,
}

/// Format filter attached to v2 proposals, offers and issues.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CredentialFilter {
    pub dif: Map<String, Value>,
    pub indy: IndyFilter,
}

impl CredentialFilter {
    pub fn indy(indy: IndyFilter) -> Self {
        Self {
            dif: Map::new(),
            indy,
        }
    }
}

/// Indy restrictions on the credential to be issued; empty fields are
/// omitted.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct IndyFilter {
    #[serde(rename = "cred_def_id", skip_serializing_if = "String::is_empty")]
    pub credential_definition_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub issuer_did: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub schema_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub schema_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub schema_version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub schema_issuer_did: String,
}
