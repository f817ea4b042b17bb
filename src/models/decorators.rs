// src/models/decorators.rs
//! DIDComm message decorators shared by several protocols.

use crate::error::Result;
use crate::utils::serialization::decode_base64_json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Thread identifier returned by the agent, e.g. after a trust ping.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Thread {
    pub thread_id: String,
}

/// The `~thread` decorator of a DIDComm message.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ThreadDecorator {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub thid: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub pthid: String,
}

/// An `~attach` entry carrying an offer, request, credential or filter.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AttachDecorator {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "mime-type")]
    pub mime_type: String,
    pub data: AttachData,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AttachData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base64: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<Value>,
}

impl AttachDecorator {
    /// Returns the attached JSON, decoding the base64 form when needed.
    pub fn payload(&self) -> Result<Option<Value>> {
        if let Some(json) = &self.data.json {
            return Ok(Some(json.clone()));
        }
        self.data
            .base64
            .as_deref()
            .map(decode_base64_json)
            .transpose()
    }
}

/// Links an attachment to its format identifier.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AttachmentFormat {
    /// `dif` or `indy`
    pub attach_id: String,
    /// e.g. `hlindy/cred-abstract@v2.0`
    pub format: String,
}
