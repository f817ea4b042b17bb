// src/models/credential.rs
//! Credentials held in the agent's wallet.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A credential stored in the holder's wallet.
///
/// `referent` is the wallet's credential ID.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Credential {
    pub referent: String,
    #[serde(rename = "cred_def_id")]
    pub credential_definition_id: String,
    #[serde(rename = "cred_rev_id")]
    pub credential_revocation_id: Option<String>,
    pub schema_id: String,
    #[serde(rename = "rev_reg_id")]
    pub revocation_registry_id: Option<String>,
    #[serde(rename = "attrs")]
    pub attributes: HashMap<String, String>,
}

impl Credential {
    /// True when every name in `names` is present with a non-empty value.
    pub fn contains_all_attributes<S: AsRef<str>>(&self, names: &[S]) -> bool {
        names.iter().all(|name| {
            self.attributes
                .get(name.as_ref())
                .map_or(false, |value| !value.is_empty())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn credential() -> Credential {
        serde_json::from_value(json!({
            "referent": "cred-1",
            "cred_def_id": "6qnvgJtqwK44D8LFYnV5Yf:3:CL:165:default",
            "cred_rev_id": null,
            "schema_id": "6qnvgJtqwK44D8LFYnV5Yf:2:person:1.0",
            "rev_reg_id": null,
            "attrs": { "name": "Alice", "age": "30", "nickname": "" }
        }))
        .unwrap()
    }

    #[test]
    fn decodes_null_revocation_fields() {
        let credential = credential();
        assert_eq!(credential.referent, "cred-1");
        assert!(credential.revocation_registry_id.is_none());
    }

    #[test]
    fn checks_attribute_presence() {
        let credential = credential();
        assert!(credential.contains_all_attributes(&["name", "age"]));
        assert!(!credential.contains_all_attributes(&["name", "nickname"]));
        assert!(!credential.contains_all_attributes(&["email"]));
        assert!(credential.contains_all_attributes::<&str>(&[]));
    }
}
