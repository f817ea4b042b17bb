// src/client/server.rs
//! Agent status and lifecycle endpoints.

use super::{Client, Ignored};
use crate::error::Result;
use crate::models::Status;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Deserialize, Default)]
#[serde(default)]
struct PluginsResponse {
    result: Vec<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct LivenessResponse {
    alive: bool,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ReadinessResponse {
    ready: bool,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct FeaturesResponse {
    results: Map<String, Value>,
}

impl Client {
    /// Lists the plugins loaded by the agent.
    pub async fn plugins(&self) -> Result<Vec<String>> {
        let response: PluginsResponse = self.get("/plugins", &[]).await?;
        Ok(response.result)
    }

    pub async fn status(&self) -> Result<Status> {
        self.get("/status", &[]).await
    }

    /// Resets the conductor's message and task counters.
    pub async fn reset_statistics(&self) -> Result<()> {
        let _: Ignored = self.post_empty("/status/reset", &[]).await?;
        Ok(())
    }

    pub async fn is_alive(&self) -> Result<bool> {
        let response: LivenessResponse = self.get("/status/live", &[]).await?;
        Ok(response.alive)
    }

    pub async fn is_ready(&self) -> Result<bool> {
        let response: ReadinessResponse = self.get("/status/ready", &[]).await?;
        Ok(response.ready)
    }

    /// Asks the agent to shut itself down.
    pub async fn shutdown(&self) -> Result<()> {
        let _: Ignored = self.get("/shutdown", &[]).await?;
        Ok(())
    }

    /// Protocol URIs the agent supports, sorted.
    pub async fn features(&self) -> Result<Vec<String>> {
        let response: FeaturesResponse = self.get("/features", &[]).await?;
        let mut features: Vec<String> = response.results.into_iter().map(|(uri, _)| uri).collect();
        features.sort();
        Ok(features)
    }
}
