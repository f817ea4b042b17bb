// src/models/presentation.rs
//! Present-proof 1.0: exchange records, proof requests and presentations.
//!
//! Proof requests are built through [`RequestedAttribute::new`],
//! [`RequestedPredicate::new`] and [`ProofRequest::new`], which enforce the
//! agent's shape rules: `name` and `names` are mutually exclusive, `names`
//! requires a restriction, and collections serialize as `[]`/`{}` rather
//! than `null`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

pub const PRESENTATION_PREVIEW_TYPE: &str =
    "did:sov:BzCbsNYhMrjHiqZDTUASHg;spec/present-proof/1.0/presentation-preview";

/// A present-proof 1.0 exchange record.
///
/// Also delivered on the `present_proof` webhook topic.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PresentationExchangeRecord {
    pub presentation_exchange_id: String,
    pub connection_id: String,
    pub thread_id: String,
    pub state: String,
    pub initiator: String,
    /// `prover` or `verifier`
    pub role: String,
    #[serde(rename = "presentation_proposal_dict")]
    pub presentation_proposal: Option<PresentationProposalMessage>,
    pub presentation_request: Option<ProofRequest>,
    #[serde(rename = "presentation_request_dict")]
    pub presentation_request_message: Value,
    pub presentation: Option<Presentation>,
    /// `"true"` or `"false"` once verified
    pub verified: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub error_msg: Option<String>,
    pub auto_present: bool,
    pub trace: bool,
}

impl PresentationExchangeRecord {
    pub fn is_verified(&self) -> bool {
        self.verified.as_deref() == Some("true")
    }
}

/// The `propose-presentation` message.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PresentationProposalMessage {
    #[serde(rename = "@type")]
    pub message_type: String,
    #[serde(rename = "@id")]
    pub id: String,
    pub comment: Option<String>,
    pub presentation_proposal: PresentationPreview,
}

/// An indy proof as returned to the verifier.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Presentation {
    /// Cryptographic proof; carried opaquely
    pub proof: Value,
    pub requested_proof: RequestedProof,
    pub identifiers: Vec<ProofIdentifier>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct RequestedProof {
    pub revealed_attrs: HashMap<String, RevealedAttribute>,
    pub revealed_attr_groups: HashMap<String, RevealedAttributeGroup>,
    pub self_attested_attrs: HashMap<String, String>,
    pub unrevealed_attrs: HashMap<String, Value>,
    pub predicates: HashMap<String, Value>,
}

impl RequestedProof {
    /// Raw value of a revealed attribute, looked up by proof request referent.
    pub fn revealed_value(&self, referent: &str) -> Option<&str> {
        self.revealed_attrs
            .get(referent)
            .map(|attr| attr.raw.as_str())
            .or_else(|| self.self_attested_attrs.get(referent).map(String::as_str))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct RevealedAttribute {
    pub sub_proof_index: u32,
    pub raw: String,
    pub encoded: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct RevealedAttributeGroup {
    pub sub_proof_index: u32,
    pub values: HashMap<String, AttributeValue>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AttributeValue {
    pub raw: String,
    pub encoded: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ProofIdentifier {
    pub schema_id: String,
    #[serde(rename = "cred_def_id")]
    pub credential_definition_id: String,
    #[serde(rename = "rev_reg_id")]
    pub revocation_registry_id: Option<String>,
    pub timestamp: Option<i64>,
}

/// Body of `POST /present-proof/send-proposal`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PresentationProposalRequest {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,
    pub auto_present: bool,
    #[serde(rename = "presentation_proposal")]
    pub presentation_preview: PresentationPreview,
    pub connection_id: String,
    pub trace: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PresentationAttribute {
    pub name: String,
    #[serde(rename = "cred_def_id", skip_serializing_if = "String::is_empty")]
    pub credential_definition_id: String,
    #[serde(rename = "mime-type", skip_serializing_if = "String::is_empty")]
    pub mime_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub referent: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PredicateType {
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = "<=")]
    LessThanOrEqual,
    #[serde(rename = ">")]
    GreaterThan,
    #[default]
    #[serde(rename = ">=")]
    GreaterThanOrEqual,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Predicate {
    pub name: String,
    #[serde(rename = "cred_def_id", skip_serializing_if = "String::is_empty")]
    pub credential_definition_id: String,
    pub predicate: PredicateType,
    pub threshold: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PresentationPreview {
    #[serde(rename = "@type")]
    pub message_type: String,
    pub attributes: Vec<PresentationAttribute>,
    pub predicates: Vec<Predicate>,
}

impl PresentationPreview {
    pub fn new(attributes: Vec<PresentationAttribute>, predicates: Vec<Predicate>) -> Self {
        Self {
            message_type: PRESENTATION_PREVIEW_TYPE.to_string(),
            attributes,
            predicates,
        }
    }
}

/// Body of `create-request`, `send-request` and `records/{id}/send-request`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PresentationRequestRequest {
    pub trace: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub connection_id: String,
    pub proof_request: ProofRequest,
}

/// Timestamp interval (epoch seconds) in which a credential must not have
/// been revoked.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct NonRevoked {
    pub from: i64,
    pub to: i64,
}

/// Restrictions on the credentials a requested attribute may come from.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Restrictions {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub schema_version: String,
    #[serde(rename = "cred_def_id", skip_serializing_if = "String::is_empty")]
    pub credential_definition_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub schema_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub schema_issuer_did: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub issuer_did: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub schema_id: String,
}

impl Restrictions {
    pub fn is_empty(&self) -> bool {
        self.schema_version.is_empty()
            && self.credential_definition_id.is_empty()
            && self.schema_name.is_empty()
            && self.schema_issuer_did.is_empty()
            && self.issuer_did.is_empty()
            && self.schema_id.is_empty()
    }
}

/// Checks the name/names rules and returns the restriction list to send.
fn restriction_list(
    restrictions: Option<Restrictions>,
    name: &str,
    names: &[String],
) -> Result<Vec<Restrictions>> {
    if !name.is_empty() && !names.is_empty() {
        return Err(Error::InvalidProofRequest(
            "use either 'name' or 'names', but not both",
        ));
    }
    match restrictions {
        Some(r) if !r.is_empty() => Ok(vec![r]),
        _ if !names.is_empty() => Err(Error::InvalidProofRequest(
            "restrictions cannot be empty when using 'names'",
        )),
        _ => Ok(Vec::new()),
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct RequestedAttribute {
    pub restrictions: Vec<Restrictions>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_revoked: Option<NonRevoked>,
}

impl RequestedAttribute {
    pub fn new(
        restrictions: Option<Restrictions>,
        name: impl Into<String>,
        names: Vec<String>,
        non_revoked: Option<NonRevoked>,
    ) -> Result<Self> {
        let name = name.into();
        let restrictions = restriction_list(restrictions, &name, &names)?;
        Ok(Self {
            restrictions,
            name,
            names,
            non_revoked,
        })
    }

    /// Names this attribute asks for, whether given as `name` or `names`.
    pub fn attribute_names(&self) -> Vec<&str> {
        if self.name.is_empty() {
            self.names.iter().map(String::as_str).collect()
        } else {
            vec![self.name.as_str()]
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct RequestedPredicate {
    pub restrictions: Vec<Restrictions>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<String>,
    pub p_type: PredicateType,
    pub p_value: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_revoked: Option<NonRevoked>,
}

impl RequestedPredicate {
    pub fn new(
        restrictions: Option<Restrictions>,
        name: impl Into<String>,
        names: Vec<String>,
        p_type: PredicateType,
        p_value: i64,
        non_revoked: Option<NonRevoked>,
    ) -> Result<Self> {
        let name = name.into();
        let restrictions = restriction_list(restrictions, &name, &names)?;
        Ok(Self {
            restrictions,
            name,
            names,
            p_type,
            p_value,
            non_revoked,
        })
    }
}

/// An indy proof request.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ProofRequest {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub nonce: String,
    pub requested_predicates: HashMap<String, RequestedPredicate>,
    pub requested_attributes: HashMap<String, RequestedAttribute>,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_revoked: Option<NonRevoked>,
}

impl ProofRequest {
    /// An empty nonce lets the agent generate one.
    pub fn new(
        name: impl Into<String>,
        nonce: impl Into<String>,
        requested_predicates: HashMap<String, RequestedPredicate>,
        requested_attributes: HashMap<String, RequestedAttribute>,
        version: impl Into<String>,
        non_revoked: Option<NonRevoked>,
    ) -> Self {
        Self {
            name: name.into(),
            nonce: nonce.into(),
            requested_predicates,
            requested_attributes,
            version: version.into(),
            non_revoked,
        }
    }
}

/// How the prover satisfies one requested attribute.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PresentationProofAttribute {
    pub revealed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(rename = "cred_id")]
    pub credential_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PresentationProofPredicate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(rename = "cred_id")]
    pub credential_id: String,
}

/// Body of `POST /present-proof/records/{id}/send-presentation`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PresentationProof {
    pub requested_attributes: HashMap<String, PresentationProofAttribute>,
    pub requested_predicates: HashMap<String, PresentationProofPredicate>,
    pub self_attested_attributes: HashMap<String, String>,
    pub trace: bool,
}

impl PresentationProof {
    pub fn new(
        requested_attributes: HashMap<String, PresentationProofAttribute>,
        requested_predicates: HashMap<String, PresentationProofPredicate>,
        self_attested_attributes: HashMap<String, String>,
    ) -> Self {
        Self {
            requested_attributes,
            requested_predicates,
            self_attested_attributes,
            trace: false,
        }
    }
}

/// A wallet credential that can satisfy referents of a proof request.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PresentationCredential {
    #[serde(rename = "cred_info")]
    pub credential_info: CredentialInfo,
    pub interval: Option<NonRevoked>,
    pub presentation_referents: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CredentialInfo {
    pub referent: String,
    pub attrs: HashMap<String, String>,
    pub schema_id: String,
    #[serde(rename = "cred_def_id")]
    pub credential_definition_id: String,
    #[serde(rename = "rev_reg_id")]
    pub revocation_registry_id: Option<String>,
    #[serde(rename = "cred_rev_id")]
    pub credential_revocation_id: Option<String>,
}

/// Filters for listing presentation exchange records.
#[derive(Debug, Clone, Default)]
pub struct QueryPresentationExchangeParams {
    pub connection_id: String,
    pub role: String,
    pub state: String,
    pub thread_id: String,
}
