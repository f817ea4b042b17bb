// src/client/mod.rs
//! HTTP client for the agent's admin API.
//!
//! Every resource module (`connections`, `present_proof`, ...) adds methods
//! to [`Client`] and funnels them through the request helpers defined here.
//! The helpers build the URL, attach the API key, encode query parameters,
//! serialize the JSON body and decode the JSON response.

use crate::config::AgentSettings;
use crate::error::{Error, Result};
use crate::utils::serialization::strip_nulls;
use log::{debug, warn};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

pub mod connections;
pub mod credential_definitions;
pub mod credentials;
pub mod issue_credential;
pub mod issue_credential_v2;
pub mod ledger;
pub mod out_of_band;
pub mod present_proof;
pub mod revocation;
pub mod schemas;
pub mod server;
pub mod wallet;

/// Response type for endpoints whose body carries nothing of interest.
pub(crate) type Ignored = serde::de::IgnoredAny;

/// Query parameters as `(key, value)` pairs.
///
/// Pairs with an empty key or an empty value are dropped before the request
/// is sent, so callers can pass optional filters as empty strings.
pub(crate) type Query<'a> = [(&'a str, String)];

const API_KEY_HEADER: &str = "X-API-KEY";

/// Client for a single agent's admin API.
///
/// Cloning is cheap; the underlying `reqwest::Client` shares its connection
/// pool between clones.
#[derive(Clone, Debug)]
pub struct Client {
    base_url: String,
    api_key: Option<String>,
    http: reqwest::Client,
    /// Ask the agent to trace exchange messages
    pub(crate) tracing: bool,
    /// Keep exchange records after completion (`auto_remove = false`)
    pub(crate) preserve_exchange_records: bool,
    /// Let the agent issue automatically once an offer is accepted
    pub(crate) auto_respond_credential_offer: bool,
}

impl Client {
    /// Creates a client for the agent at `base_url` (trailing `/` trimmed).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            api_key: None,
            http: reqwest::Client::new(),
            tracing: false,
            preserve_exchange_records: false,
            auto_respond_credential_offer: false,
        }
    }

    /// Builds a client from the `agent` section of the settings.
    pub fn from_settings(settings: &AgentSettings) -> Self {
        let client = Self::new(settings.url.clone())
            .with_tracing(settings.tracing)
            .with_preserve_exchange_records(settings.preserve_exchange_records)
            .with_auto_respond_credential_offer(settings.auto_respond_credential_offer);
        match settings.api_key.as_deref() {
            Some(key) if !key.is_empty() => client.with_api_key(key),
            _ => client,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_tracing(mut self, tracing: bool) -> Self {
        self.tracing = tracing;
        self
    }

    pub fn with_preserve_exchange_records(mut self, preserve: bool) -> Self {
        self.preserve_exchange_records = preserve;
        self
    }

    pub fn with_auto_respond_credential_offer(mut self, auto_respond: bool) -> Self {
        self.auto_respond_credential_offer = auto_respond;
        self
    }

    /// Admin API base URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn get<R: DeserializeOwned>(&self, path: &str, query: &Query<'_>) -> Result<R> {
        self.request(Method::GET, path, query, None).await
    }

    pub(crate) async fn post<B, R>(&self, path: &str, query: &Query<'_>, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_vec(body)?;
        self.request(Method::POST, path, query, Some(body)).await
    }

    pub(crate) async fn post_empty<R: DeserializeOwned>(&self, path: &str, query: &Query<'_>) -> Result<R> {
        self.request(Method::POST, path, query, None).await
    }

    pub(crate) async fn patch<B, R>(&self, path: &str, query: &Query<'_>, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_vec(body)?;
        self.request(Method::PATCH, path, query, Some(body)).await
    }

    pub(crate) async fn patch_empty<R: DeserializeOwned>(&self, path: &str, query: &Query<'_>) -> Result<R> {
        self.request(Method::PATCH, path, query, None).await
    }

    pub(crate) async fn put_empty<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        self.request(Method::PUT, path, &[], None).await
    }

    pub(crate) async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        self.request(Method::DELETE, path, &[], None).await
    }

    /// Fetches a raw (non-JSON) body such as a tails file.
    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Vec<u8>> {
        let response = self.send(Method::GET, path, &[], None).await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &Query<'_>,
        body: Option<Vec<u8>>,
    ) -> Result<R> {
        let response = self.send(method, path, query, body).await?;
        let bytes = response.bytes().await?;
        decode_body(&bytes)
    }

    /// Sends the request and maps any status >= 300 to [`Error::Status`].
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &Query<'_>,
        body: Option<Vec<u8>>,
    ) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .query(&query_pairs(query));
        if let Some(api_key) = &self.api_key {
            request = request.header(API_KEY_HEADER, api_key);
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.as_u16() >= 300 {
            let body = response.text().await.unwrap_or_default();
            warn!("Request failed: {} {} -> {}", method, url, status);
            warn!("Response body: {}", body);
            return Err(Error::Status { status, body });
        }
        Ok(response)
    }
}

/// Percent-encodes an identifier for use as one path segment.
///
/// `:` is left as is; it is a valid path character and appears in every
/// ledger identifier.
pub(crate) fn segment(id: &str) -> String {
    urlencoding::encode(id).replace("%3A", ":")
}

/// Drops pairs with an empty key or value.
fn query_pairs<'a>(query: &'a Query<'a>) -> Vec<(&'a str, &'a str)> {
    query
        .iter()
        .filter(|(key, value)| !key.is_empty() && !value.is_empty())
        .map(|(key, value)| (*key, value.as_str()))
        .collect()
}

/// Decodes a JSON response body; an empty body decodes as `null`.
///
/// Members set to `null` are dropped first so they fall back to the
/// record's default.
fn decode_body<R: DeserializeOwned>(bytes: &[u8]) -> Result<R> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_slice(b"null")?);
    }
    let value: Value = serde_json::from_slice(bytes)?;
    Ok(serde_json::from_value(strip_nulls(value))?)
}
