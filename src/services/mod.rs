// src/services/mod.rs
//! Inbound services: the webhook receiver the agent reports events to.

pub mod webhooks;
