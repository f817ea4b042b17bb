#![allow(dead_code)]

use acapy_client::Client;
use mockito::Matcher;

pub const API_KEY: &str = "secret";

/// Client pointed at the mock server, authenticated with [`API_KEY`].
pub fn client(server: &mockito::ServerGuard) -> Client {
    Client::new(server.url()).with_api_key(API_KEY)
}

pub fn query(pairs: &[(&str, &str)]) -> Matcher {
    Matcher::AllOf(
        pairs
            .iter()
            .map(|(key, value)| Matcher::UrlEncoded(key.to_string(), value.to_string()))
            .collect(),
    )
}
