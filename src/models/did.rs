// src/models/did.rs
//! Wallet DIDs and ledger registration.

use serde::{Deserialize, Serialize};

/// A DID held in the agent's wallet.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Did {
    pub did: String,
    pub verkey: String,
    /// `public`, `posted`, `wallet_only`
    pub posture: String,
    pub key_type: String,
    pub method: String,
}

/// Filters for listing wallet DIDs; unset fields are not sent.
#[derive(Debug, Clone, Default)]
pub struct QueryDidsParams {
    pub did: String,
    /// Older agents filter on `public`; newer ones on `posture`
    pub public: Option<bool>,
    pub posture: String,
    pub verkey: String,
}

/// Role requested when registering a DID on the ledger.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DidRole {
    Endorser,
    Steward,
    Trustee,
    NetworkMonitor,
}

#[derive(Serialize, Debug, Clone)]
pub(crate) struct RegisterDidRequest<'a> {
    pub alias: &'a str,
    pub seed: &'a str,
    pub role: DidRole,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct RegisterDidResponse {
    pub did: String,
    pub seed: String,
    pub verkey: String,
}

/// Endpoint kinds a DID can advertise on the ledger.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointType {
    Endpoint,
    Profile,
    LinkedDomains,
}

impl EndpointType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndpointType::Endpoint => "Endpoint",
            EndpointType::Profile => "Profile",
            EndpointType::LinkedDomains => "LinkedDomains",
        }
    }
}
