// src/utils/identifiers.rs
//! Validation of ledger identifiers.
//!
//! Indy identifiers are base58 strings of 21 or 22 characters, optionally
//! prefixed by `did:sov:`. Schema and credential definition identifiers
//! embed the issuer DID:
//!
//! ```text
//! schema:                 <issuer>:2:<name>:<version>
//! credential definition:  <issuer>:3:CL:<schema seq_no | schema id>:<tag>
//! ```

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

const BASE58: &str = "[123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz]";

static DID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^(did:sov:)?{BASE58}{{21,22}}$")).expect("valid DID regex")
});

static SCHEMA_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^{BASE58}{{21,22}}:2:.+:[0-9.]+$")).expect("valid schema ID regex")
});

static CRED_DEF_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        "^({BASE58}{{21,22}}):3:CL:(([1-9][0-9]*)|({BASE58}{{21,22}}:2:.+:[0-9.]+)):(.+)?$"
    ))
    .expect("valid credential definition ID regex")
});

pub fn is_did(value: &str) -> bool {
    DID_RE.is_match(value)
}

pub fn is_schema_id(value: &str) -> bool {
    SCHEMA_ID_RE.is_match(value)
}

pub fn is_credential_definition_id(value: &str) -> bool {
    CRED_DEF_ID_RE.is_match(value)
}

pub(crate) fn ensure_did(value: &str) -> Result<()> {
    ensure(is_did(value), "DID", value)
}

pub(crate) fn ensure_schema_id(value: &str) -> Result<()> {
    ensure(is_schema_id(value), "schema ID", value)
}

pub(crate) fn ensure_credential_definition_id(value: &str) -> Result<()> {
    ensure(is_credential_definition_id(value), "credential definition ID", value)
}

fn ensure(valid: bool, kind: &'static str, value: &str) -> Result<()> {
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidIdentifier {
            kind,
            value: value.to_string(),
        })
    }
}

/// The four components of a schema ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaIdParts {
    pub issuer_did: String,
    /// Always `2` for schemas
    pub marker: String,
    pub name: String,
    pub version: String,
}

/// Splits a schema ID such as `6qnvgJtqwK44D8LFYnV5Yf:2:registration.dflow:1.0.0`.
pub fn schema_id_to_parts(schema_id: &str) -> Result<SchemaIdParts> {
    match schema_id.split(':').collect::<Vec<_>>().as_slice() {
        [issuer_did, marker, name, version] => Ok(SchemaIdParts {
            issuer_did: issuer_did.to_string(),
            marker: marker.to_string(),
            name: name.to_string(),
            version: version.to_string(),
        }),
        _ => Err(Error::InvalidSchemaId(schema_id.to_string())),
    }
}
