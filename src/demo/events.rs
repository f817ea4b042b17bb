// src/demo/events.rs
//! Webhook callbacks of the demo: print each event and remember the latest
//! records so later commands can act on them.

use acapy_client::models::{
    Connection, CredentialExchangeIndy, CredentialExchangeRecordV2, PresentationExchangeRecord, Schema,
};
use acapy_client::WebhookHandlers;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// What the demo has learned so far, from commands and from webhooks.
#[derive(Debug, Default)]
pub struct DemoState {
    pub my_did: String,
    pub connection: Option<Connection>,
    pub schema: Option<Schema>,
    pub credential_definition_id: String,
    pub credential_exchange: Option<CredentialExchangeRecordV2>,
    /// Issuer side: revocation IDs of the last issued credential
    pub credential_exchange_indy: Option<CredentialExchangeIndy>,
    pub presentation_exchange: Option<PresentationExchangeRecord>,
}

#[derive(Clone, Default)]
pub struct SharedState(Arc<Mutex<DemoState>>);

impl SharedState {
    pub fn lock(&self) -> MutexGuard<'_, DemoState> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub fn handlers(state: SharedState) -> WebhookHandlers {
    let connections = state.clone();
    let credentials = state.clone();
    let credentials_indy = state.clone();
    let presentations = state;

    WebhookHandlers::default()
        .on_connections(move |connection| {
            println!(
                "\n -> Connection {:?} ({}), update to state {:?}",
                connection.their_label, connection.connection_id, connection.state
            );
            connections.lock().connection = Some(connection);
        })
        .on_basic_messages(|message| {
            println!("\n -> Message on {}: {}", message.connection_id, message.content);
        })
        .on_problem_report(|report| {
            println!("\n -> Problem report on thread {}: {}", report.thread.thid, report.explain_ltxt);
        })
        .on_ping(|ping| {
            println!("\n -> Ping on {}: {}", ping.connection_id, ping.state);
        })
        .on_out_of_band(|event| {
            println!("\n -> Out of band invitation {:?} state {:?}", event.invitation_id, event.state);
        })
        .on_credential_exchange_v2(move |record| {
            println!(
                "\n -> Credential exchange update: {} - {}",
                record.credential_exchange_id, record.state
            );
            credentials.lock().credential_exchange = Some(record);
        })
        .on_credential_exchange_indy(move |record| {
            if record.credential_revocation_id.is_some() {
                credentials_indy.lock().credential_exchange_indy = Some(record);
            }
        })
        .on_credential_revocation(|record| {
            println!(
                "\n -> Issuer credential revocation: {} - {}",
                record.credential_exchange_id, record.state
            );
        })
        .on_revocation_registry(|registry| {
            println!(
                "\n -> Revocation registry update: {} - {}",
                registry.revocation_registry_id, registry.state
            );
        })
        .on_presentation_exchange(move |record| {
            println!(
                "\n -> Presentation exchange update: {} - {} (verified: {})",
                record.presentation_exchange_id,
                record.state,
                record.verified.as_deref().unwrap_or("-")
            );
            presentations.lock().presentation_exchange = Some(record);
        })
}
