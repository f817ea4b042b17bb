// src/models/server.rs
use serde::{Deserialize, Serialize};

/// Agent status as reported by `GET /status`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Status {
    pub version: String,
    pub label: String,
    pub conductor: Conductor,
}

/// Message and task counters of the agent's conductor.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Conductor {
    pub in_sessions: u64,
    pub out_encode: u64,
    pub out_deliver: u64,
    pub task_active: u64,
    pub task_done: u64,
    pub task_failed: u64,
    pub task_pending: u64,
}
