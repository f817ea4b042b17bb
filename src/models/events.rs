// src/models/events.rs
//! Payloads that only arrive through webhooks.

use crate::models::decorators::ThreadDecorator;
use serde::{Deserialize, Serialize};

/// `basicmessages` topic.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct BasicMessagesEvent {
    pub connection_id: String,
    pub message_id: String,
    pub state: String,
    pub content: String,
    pub sent_time: String,
}

/// `problem_report` topic.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ProblemReportEvent {
    #[serde(rename = "@type")]
    pub message_type: String,
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "~thread")]
    pub thread: ThreadDecorator,
    #[serde(rename = "explain-ltxt")]
    pub explain_ltxt: String,
}

/// `ping` topic.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PingEvent {
    pub comment: String,
    pub connection_id: String,
    pub responded: bool,
    pub state: String,
    pub thread_id: String,
}
