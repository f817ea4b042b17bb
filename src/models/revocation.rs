// src/models/revocation.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Revocation registry identifiers mapped to credential revocation ids, e.g.
/// `{"<rev_reg_id>": ["1", "2"]}`.
pub type PendingRevocations = HashMap<String, Vec<String>>;

/// The agent's issuer-side revocation registry record.
///
/// Also delivered on the `revocation_registry` webhook topic.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct RevocationRegistry {
    #[serde(rename = "revoc_reg_id")]
    pub revocation_registry_id: String,
    pub record_id: String,
    #[serde(rename = "cred_def_id")]
    pub credential_definition_id: String,
    pub issuer_did: String,
    #[serde(rename = "revoc_def_type")]
    pub registry_type: String,
    pub tag: String,
    /// `init`, `generated`, `posted`, `active` or `full`
    pub state: String,
    pub max_cred_num: u64,
    pub tails_hash: Option<String>,
    pub tails_local_path: Option<String>,
    pub tails_public_uri: Option<String>,
    pub pending_pub: Vec<String>,
    #[serde(rename = "revoc_reg_def")]
    pub definition: Option<RevocationRegistryDefinition>,
    #[serde(rename = "revoc_reg_entry")]
    pub entry: Option<RevocationRegistryEntry>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct RevocationRegistryDefinition {
    pub ver: String,
    pub id: String,
    #[serde(rename = "revocDefType")]
    pub revocation_definition_type: String,
    pub tag: String,
    #[serde(rename = "credDefId")]
    pub credential_definition_id: String,
    pub value: RevocationRegistryDefinitionValue,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct RevocationRegistryDefinitionValue {
    #[serde(rename = "issuanceType")]
    pub issuance_type: String,
    #[serde(rename = "maxCredNum")]
    pub max_cred_num: u64,
    #[serde(rename = "publicKeys")]
    pub public_keys: PublicKeys,
    #[serde(rename = "tailsHash")]
    pub tails_hash: String,
    #[serde(rename = "tailsLocation")]
    pub tails_location: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PublicKeys {
    #[serde(rename = "accumKey")]
    pub accum_key: AccumKey,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AccumKey {
    pub z: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct RevocationRegistryEntry {
    pub ver: String,
    pub value: RevocationRegistryEntryValue,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct RevocationRegistryEntryValue {
    pub accum: String,
}

/// Issuer-side revocation state of one issued credential.
///
/// Also delivered on the `issuer_cred_rev` webhook topic.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CredentialRevocationRecord {
    pub record_id: String,
    #[serde(rename = "cred_ex_id")]
    pub credential_exchange_id: String,
    #[serde(rename = "cred_def_id")]
    pub credential_definition_id: String,
    #[serde(rename = "rev_reg_id")]
    pub revocation_registry_id: String,
    #[serde(rename = "cred_rev_id")]
    pub credential_revocation_id: String,
    /// `issued` or `revoked`
    pub state: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl CredentialRevocationRecord {
    pub fn is_revoked(&self) -> bool {
        self.state == "revoked"
    }
}
