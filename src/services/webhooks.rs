// src/services/webhooks.rs
//! Webhook receiver for agent events.
//!
//! The agent POSTs every event to `<webhook-url>/topic/{topic}/` with a
//! topic-specific JSON body. [`WebhookHandlers`] holds one optional callback
//! per topic; [`router`] exposes them as an axum `Router` serving
//! `/webhooks/topic/{topic}/`.
//!
//! Dispatch rules:
//! - unknown topic: `404 Not Found`
//! - known topic, no callback registered: `200 OK`, body not decoded
//! - body does not decode into the topic's event type: `400 Bad Request`;
//!   members set to `null` are treated as absent
//! - otherwise the callback runs and the response is `200 OK`
//!
//! Callbacks run on the server's worker tasks and may be invoked
//! concurrently; they must not block.

use crate::models::{
    BasicMessagesEvent, Connection, CredentialExchangeDif, CredentialExchangeIndy, CredentialExchangeRecord,
    CredentialExchangeRecordV2, CredentialRevocationRecord, OutOfBandEvent, PingEvent,
    PresentationExchangeRecord, ProblemReportEvent, RevocationRegistry,
};
use crate::utils::serialization::strip_nulls;
use axum::{extract::State, http::StatusCode, http::Uri, routing::post, Router};
use bytes::Bytes;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Callback invoked with a decoded event.
pub type Handler<T> = Arc<dyn Fn(T) + Send + Sync>;

/// One optional callback per webhook topic.
///
/// ```no_run
/// use acapy_client::WebhookHandlers;
///
/// let handlers = WebhookHandlers::default()
///     .on_connections(|connection| println!("{} -> {}", connection.connection_id, connection.state))
///     .on_ping(|ping| println!("ping on {}", ping.connection_id));
/// let app = acapy_client::services::webhooks::router(handlers);
/// ```
#[derive(Clone, Default)]
pub struct WebhookHandlers {
    pub connections: Option<Handler<Connection>>,
    pub basic_messages: Option<Handler<BasicMessagesEvent>>,
    pub problem_report: Option<Handler<ProblemReportEvent>>,
    pub credential_exchange: Option<Handler<CredentialExchangeRecord>>,
    pub credential_revocation: Option<Handler<CredentialRevocationRecord>>,
    pub credential_exchange_v2: Option<Handler<CredentialExchangeRecordV2>>,
    pub credential_exchange_dif: Option<Handler<CredentialExchangeDif>>,
    pub credential_exchange_indy: Option<Handler<CredentialExchangeIndy>>,
    pub revocation_registry: Option<Handler<RevocationRegistry>>,
    pub out_of_band: Option<Handler<OutOfBandEvent>>,
    pub presentation_exchange: Option<Handler<PresentationExchangeRecord>>,
    pub ping: Option<Handler<PingEvent>>,
}

/// Topics understood by [`WebhookHandlers::dispatch`].
pub const TOPICS: [&str; 12] = [
    "connections",
    "basicmessages",
    "problem_report",
    "issue_credential",
    "issuer_cred_rev",
    "issue_credential_v2_0",
    "issue_credential_v2_0_dif",
    "issue_credential_v2_0_indy",
    "revocation_registry",
    "oob_invitation",
    "present_proof",
    "ping",
];

impl WebhookHandlers {
    pub fn on_connections(mut self, handler: impl Fn(Connection) + Send + Sync + 'static) -> Self {
        self.connections = Some(Arc::new(handler));
        self
    }

    pub fn on_basic_messages(mut self, handler: impl Fn(BasicMessagesEvent) + Send + Sync + 'static) -> Self {
        self.basic_messages = Some(Arc::new(handler));
        self
    }

    pub fn on_problem_report(mut self, handler: impl Fn(ProblemReportEvent) + Send + Sync + 'static) -> Self {
        self.problem_report = Some(Arc::new(handler));
        self
    }

    pub fn on_credential_exchange(
        mut self,
        handler: impl Fn(CredentialExchangeRecord) + Send + Sync + 'static,
    ) -> Self {
        self.credential_exchange = Some(Arc::new(handler));
        self
    }

    pub fn on_credential_revocation(
        mut self,
        handler: impl Fn(CredentialRevocationRecord) + Send + Sync + 'static,
    ) -> Self {
        self.credential_revocation = Some(Arc::new(handler));
        self
    }

    pub fn on_credential_exchange_v2(
        mut self,
        handler: impl Fn(CredentialExchangeRecordV2) + Send + Sync + 'static,
    ) -> Self {
        self.credential_exchange_v2 = Some(Arc::new(handler));
        self
    }

    pub fn on_credential_exchange_dif(
        mut self,
        handler: impl Fn(CredentialExchangeDif) + Send + Sync + 'static,
    ) -> Self {
        self.credential_exchange_dif = Some(Arc::new(handler));
        self
    }

    pub fn on_credential_exchange_indy(
        mut self,
        handler: impl Fn(CredentialExchangeIndy) + Send + Sync + 'static,
    ) -> Self {
        self.credential_exchange_indy = Some(Arc::new(handler));
        self
    }

    pub fn on_revocation_registry(mut self, handler: impl Fn(RevocationRegistry) + Send + Sync + 'static) -> Self {
        self.revocation_registry = Some(Arc::new(handler));
        self
    }

    pub fn on_out_of_band(mut self, handler: impl Fn(OutOfBandEvent) + Send + Sync + 'static) -> Self {
        self.out_of_band = Some(Arc::new(handler));
        self
    }

    pub fn on_presentation_exchange(
        mut self,
        handler: impl Fn(PresentationExchangeRecord) + Send + Sync + 'static,
    ) -> Self {
        self.presentation_exchange = Some(Arc::new(handler));
        self
    }

    pub fn on_ping(mut self, handler: impl Fn(PingEvent) + Send + Sync + 'static) -> Self {
        self.ping = Some(Arc::new(handler));
        self
    }

    /// Decodes `body` as the event type of `topic` and runs its callback.
    pub fn dispatch(&self, topic: &str, body: &[u8]) -> StatusCode {
        match topic {
            "connections" => deliver(topic, &self.connections, body),
            "basicmessages" => deliver(topic, &self.basic_messages, body),
            "problem_report" => deliver(topic, &self.problem_report, body),
            "issue_credential" => deliver(topic, &self.credential_exchange, body),
            "issuer_cred_rev" => deliver(topic, &self.credential_revocation, body),
            "issue_credential_v2_0" => deliver(topic, &self.credential_exchange_v2, body),
            "issue_credential_v2_0_dif" => deliver(topic, &self.credential_exchange_dif, body),
            "issue_credential_v2_0_indy" => deliver(topic, &self.credential_exchange_indy, body),
            "revocation_registry" => deliver(topic, &self.revocation_registry, body),
            "oob_invitation" => deliver(topic, &self.out_of_band, body),
            "present_proof" => deliver(topic, &self.presentation_exchange, body),
            "ping" => deliver(topic, &self.ping, body),
            _ => {
                warn!("Webhook topic not supported: {:?}", topic);
                StatusCode::NOT_FOUND
            }
        }
    }
}

impl fmt::Debug for WebhookHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registered: Vec<&str> = TOPICS
            .iter()
            .copied()
            .filter(|topic| self.is_registered(topic))
            .collect();
        f.debug_struct("WebhookHandlers")
            .field("registered", &registered)
            .finish()
    }
}

impl WebhookHandlers {
    fn is_registered(&self, topic: &str) -> bool {
        match topic {
            "connections" => self.connections.is_some(),
            "basicmessages" => self.basic_messages.is_some(),
            "problem_report" => self.problem_report.is_some(),
            "issue_credential" => self.credential_exchange.is_some(),
            "issuer_cred_rev" => self.credential_revocation.is_some(),
            "issue_credential_v2_0" => self.credential_exchange_v2.is_some(),
            "issue_credential_v2_0_dif" => self.credential_exchange_dif.is_some(),
            "issue_credential_v2_0_indy" => self.credential_exchange_indy.is_some(),
            "revocation_registry" => self.revocation_registry.is_some(),
            "oob_invitation" => self.out_of_band.is_some(),
            "present_proof" => self.presentation_exchange.is_some(),
            "ping" => self.ping.is_some(),
            _ => false,
        }
    }
}

fn deliver<T: DeserializeOwned>(topic: &str, handler: &Option<Handler<T>>, body: &[u8]) -> StatusCode {
    let handler = match handler {
        Some(handler) => handler,
        None => {
            debug!("No handler for webhook topic {}", topic);
            return StatusCode::OK;
        }
    };
    let decoded = serde_json::from_slice::<Value>(body)
        .and_then(|value| serde_json::from_value::<T>(strip_nulls(value)));
    match decoded {
        Ok(event) => {
            handler(event);
            StatusCode::OK
        }
        Err(e) => {
            warn!("Failed to decode {} webhook: {}", topic, e);
            StatusCode::BAD_REQUEST
        }
    }
}

/// Last non-empty segment of a webhook path: `/webhooks/topic/ping/` -> `ping`.
pub fn topic_from_path(path: &str) -> &str {
    path.rsplit('/').find(|segment| !segment.is_empty()).unwrap_or("")
}

/// Router serving `POST /webhooks/topic/{topic}/`, with or without the
/// trailing slash.
pub fn router(handlers: WebhookHandlers) -> Router {
    let state = Arc::new(handlers);
    Router::new()
        .route("/webhooks/topic/:topic/", post(receive_webhook))
        .route("/webhooks/topic/:topic", post(receive_webhook))
        .with_state(state)
}

#[axum_macros::debug_handler]
async fn receive_webhook(State(handlers): State<Arc<WebhookHandlers>>, uri: Uri, body: Bytes) -> StatusCode {
    let topic = topic_from_path(uri.path());
    debug!("Webhook received: {}", topic);
    handlers.dispatch(topic, &body)
}
