// src/error.rs
//! Error type shared by every client operation.
//!
//! Failures fall into two broad groups: the agent could not be reached or
//! answered with a non-2xx status, or a value handed to the client was
//! rejected before any request was made.

use reqwest::StatusCode;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure (connection refused, TLS, body read, ...)
    #[error("request to agent failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The agent answered with a status >= 300
    #[error("agent responded with {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid schema ID: {0}")]
    InvalidSchemaId(String),

    #[error("invalid {kind}: {value}")]
    InvalidIdentifier { kind: &'static str, value: String },

    #[error("invalid proof request: {0}")]
    InvalidProofRequest(&'static str),

    #[error("no credentials found for {0}")]
    NoMatchingCredential(String),

    #[error("multiple credentials found for {0}")]
    AmbiguousCredential(String),
}

impl Error {
    /// HTTP status returned by the agent, if this error carries one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Http(e) => e.status(),
            _ => None,
        }
    }
}
