// src/models/mod.rs
//! Data transfer objects mirroring the agent's JSON schemas.
//!
//! Records decode leniently: every struct carries `#[serde(default)]`, so a
//! field the agent leaves out comes back as its empty value.

pub mod connection;
pub mod credential;
pub mod credential_definition;
pub mod credential_exchange;
pub mod credential_exchange_v2;
pub mod decorators;
pub mod did;
pub mod events;
pub mod out_of_band;
pub mod presentation;
pub mod revocation;
pub mod schema;
pub mod server;

pub use connection::*;
pub use credential::*;
pub use credential_definition::*;
pub use credential_exchange::*;
pub use credential_exchange_v2::*;
pub use decorators::*;
pub use did::*;
pub use events::*;
pub use out_of_band::*;
pub use presentation::*;
pub use revocation::*;
pub use schema::*;
pub use server::*;
