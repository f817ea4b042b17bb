// src/main.rs

//! # acapy-demo
//!
//! Interactive controller for a running ACA-Py agent.
//!
//! Starts a webhook receiver the agent reports events to, then reads
//! commands from stdin and drives the agent through its admin API.
//!
//! ## Configuration
//! See [`acapy_client::config`]. The most common overrides:
//! - `ACAPY_AGENT__URL`: admin API URL (default `http://localhost:11000`)
//! - `ACAPY_AGENT__API_KEY`: admin API key
//! - `ACAPY_WEBHOOK__PORT`: webhook port (default `4455`); start the agent
//!   with `--webhook-url http://localhost:<port>/webhooks`
//! - `ACAPY_LABEL`: name shown to the other party
//!
//! Logging goes through `env_logger`; set `RUST_LOG=info` (or `debug` to
//! see every admin API request).

mod demo;

use acapy_client::config::Settings;
use acapy_client::services::webhooks;
use acapy_client::Client;
use anyhow::Context;
use demo::events::{self, SharedState};
use demo::App;
use log::{info, warn};
use std::net::SocketAddr;
use tokio::sync::oneshot;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = Settings::load().context("loading settings")?;
    let client = Client::from_settings(&settings.agent);
    let state = SharedState::default();

    let app = webhooks::router(events::handlers(state.clone()));
    let addr = SocketAddr::from(([0, 0, 0, 0], settings.webhook.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding webhook listener on {}", addr))?;
    println!("Listening for webhooks on http://{}/webhooks", addr);
    println!("Agent admin API at {}", client.base_url());

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
    });

    match client.status().await {
        Ok(status) => info!("Connected to agent {:?} version {}", status.label, status.version),
        Err(e) => warn!("Agent not reachable yet: {}", e),
    }

    let mut demo = App::new(client, settings, state);
    let outcome = demo.run().await;

    shutdown_tx.send(()).ok();
    server.await?.context("webhook server")?;
    info!("Bye");
    outcome
}
