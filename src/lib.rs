// src/lib.rs

//! # acapy-client
//!
//! Typed client for the admin REST API of an Aries Cloud Agent (ACA-Py).
//!
//! The agent does all the protocol work: connections, credential issuance,
//! proof presentation and revocation. This crate maps its HTTP endpoints onto
//! typed requests and responses, and demultiplexes the webhooks it sends back.
//!
//! ## Layout
//! 1. **client**: [`Client`] and one `impl Client` block per agent resource
//! 2. **models**: DTOs mirroring the agent's JSON
//! 3. **services**: the webhook receiver ([`WebhookHandlers`])
//! 4. **utils**: identifier validation and JSON helpers
//!
//! ```no_run
//! use acapy_client::Client;
//!
//! # async fn run() -> acapy_client::Result<()> {
//! let client = Client::new("http://localhost:11000").with_api_key("secret");
//! for connection in client.query_connections(None).await? {
//!     println!("{} {}", connection.their_label, connection.state);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use client::ledger::register_did;
pub use client::Client;
pub use error::{Error, Result};
pub use services::webhooks::WebhookHandlers;
