mod common;

use acapy_client::models::{DidRole, EndpointType, QueryDidsParams};
use acapy_client::{register_did, Client, Error};
use common::{client, query, API_KEY};
use mockito::Matcher;
use serde_json::json;

const DID: &str = "WgWxqztrNooG92RXvxSTWv";

#[tokio::test]
async fn status_and_health() {
    let mut server = mockito::Server::new_async().await;
    let status = server
        .mock("GET", "/status")
        .match_header("x-api-key", API_KEY)
        .with_body(
            json!({
                "version": "0.7.4",
                "label": "Alice",
                "conductor": { "in_sessions": 2, "task_active": 1 },
                "timing": {}
            })
            .to_string(),
        )
        .create_async()
        .await;
    let live = server
        .mock("GET", "/status/live")
        .with_body(json!({ "alive": true }).to_string())
        .create_async()
        .await;
    let ready = server
        .mock("GET", "/status/ready")
        .with_body(json!({ "ready": false }).to_string())
        .create_async()
        .await;

    let client = client(&server);
    let agent = client.status().await.unwrap();
    assert_eq!(agent.label, "Alice");
    assert_eq!(agent.conductor.in_sessions, 2);
    assert!(client.is_alive().await.unwrap());
    assert!(!client.is_ready().await.unwrap());

    status.assert_async().await;
    live.assert_async().await;
    ready.assert_async().await;
}

#[tokio::test]
async fn no_api_key_header_without_key() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/status/live")
        .match_header("x-api-key", Matcher::Missing)
        .with_body(json!({ "alive": true }).to_string())
        .create_async()
        .await;

    assert!(Client::new(server.url()).is_alive().await.unwrap());
    mock.assert_async().await;
}

#[tokio::test]
async fn unauthorized_is_reported() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/plugins")
        .with_status(401)
        .with_body("401: Unauthorized")
        .create_async()
        .await;

    let error = Client::new(server.url()).plugins().await.unwrap_err();

    assert!(matches!(error, Error::Status { .. }));
    assert_eq!(error.status(), Some(reqwest::StatusCode::UNAUTHORIZED));
    mock.assert_async().await;
}

#[tokio::test]
async fn plugins_features_and_lifecycle() {
    let mut server = mockito::Server::new_async().await;
    let plugins = server
        .mock("GET", "/plugins")
        .with_body(json!({ "result": ["aries_cloudagent.messaging.credential_definitions"] }).to_string())
        .create_async()
        .await;
    let features = server
        .mock("GET", "/features")
        .with_body(
            json!({
                "results": {
                    "https://didcomm.org/trust_ping/1.0": {},
                    "https://didcomm.org/basicmessage/1.0": {}
                }
            })
            .to_string(),
        )
        .create_async()
        .await;
    let reset = server
        .mock("POST", "/status/reset")
        .with_body("{}")
        .create_async()
        .await;
    let shutdown = server
        .mock("GET", "/shutdown")
        .with_body("{}")
        .create_async()
        .await;

    let client = client(&server);
    assert_eq!(client.plugins().await.unwrap().len(), 1);
    assert_eq!(
        client.features().await.unwrap(),
        vec![
            "https://didcomm.org/basicmessage/1.0".to_string(),
            "https://didcomm.org/trust_ping/1.0".to_string(),
        ]
    );
    client.reset_statistics().await.unwrap();
    client.shutdown().await.unwrap();

    plugins.assert_async().await;
    features.assert_async().await;
    reset.assert_async().await;
    shutdown.assert_async().await;
}

#[tokio::test]
async fn wallet_dids() {
    let mut server = mockito::Server::new_async().await;
    let list = server
        .mock("GET", "/wallet/did")
        .match_query(query(&[("public", "true"), ("posture", "public")]))
        .with_body(json!({ "results": [{ "did": DID, "verkey": "abc", "posture": "public" }] }).to_string())
        .create_async()
        .await;
    let create = server
        .mock("POST", "/wallet/did/create")
        .match_body(Matcher::Json(json!({})))
        .with_body(json!({ "result": { "did": DID, "verkey": "abc", "posture": "wallet_only" } }).to_string())
        .create_async()
        .await;
    let public = server
        .mock("GET", "/wallet/did/public")
        .with_body(json!({ "result": null }).to_string())
        .create_async()
        .await;
    let set_public = server
        .mock("POST", "/wallet/did/public")
        .match_query(query(&[("did", DID)]))
        .with_body(json!({ "result": { "did": DID, "posture": "public" } }).to_string())
        .create_async()
        .await;

    let client = client(&server);
    let params = QueryDidsParams {
        public: Some(true),
        posture: "public".into(),
        ..Default::default()
    };
    assert_eq!(client.query_dids(&params).await.unwrap()[0].did, DID);
    assert_eq!(client.create_local_did().await.unwrap().posture, "wallet_only");
    assert!(client.public_did().await.unwrap().is_none());
    assert_eq!(client.set_public_did(DID).await.unwrap().posture, "public");

    list.assert_async().await;
    create.assert_async().await;
    public.assert_async().await;
    set_public.assert_async().await;
}

#[tokio::test]
async fn did_endpoint_and_rotation() {
    let mut server = mockito::Server::new_async().await;
    let set = server
        .mock("POST", "/wallet/set-did-endpoint")
        .match_body(Matcher::Json(json!({
            "did": DID,
            "endpoint": "http://alice:8020",
            "endpoint_type": "Endpoint"
        })))
        .with_body("{}")
        .create_async()
        .await;
    let get = server
        .mock("GET", "/wallet/get-did-endpoint")
        .match_query(query(&[("did", DID)]))
        .with_body(json!({ "did": DID, "endpoint": "http://alice:8020" }).to_string())
        .create_async()
        .await;
    let rotate = server
        .mock("PATCH", "/wallet/did/local/rotate-keypair")
        .match_query(query(&[("did", DID)]))
        .with_body("{}")
        .create_async()
        .await;

    let client = client(&server);
    client
        .set_did_endpoint(DID, "http://alice:8020", EndpointType::Endpoint)
        .await
        .unwrap();
    assert_eq!(client.did_endpoint(DID).await.unwrap(), "http://alice:8020");
    client.rotate_keypair(DID).await.unwrap();

    let error = client.rotate_keypair("not-a-did").await.unwrap_err();
    assert!(matches!(error, Error::InvalidIdentifier { kind: "DID", .. }));

    set.assert_async().await;
    get.assert_async().await;
    rotate.assert_async().await;
}

#[tokio::test]
async fn ledger_lookups() {
    let mut server = mockito::Server::new_async().await;
    let endpoint = server
        .mock("GET", "/ledger/did-endpoint")
        .match_query(query(&[("did", DID), ("endpoint_type", "Profile")]))
        .with_body(json!({ "endpoint": null }).to_string())
        .create_async()
        .await;
    let verkey = server
        .mock("GET", "/ledger/did-verkey")
        .match_query(query(&[("did", DID)]))
        .with_body(json!({ "verkey": "abc" }).to_string())
        .create_async()
        .await;
    let role = server
        .mock("GET", "/ledger/get-nym-role")
        .match_query(query(&[("did", DID)]))
        .with_body(json!({ "role": "ENDORSER" }).to_string())
        .create_async()
        .await;

    let client = client(&server);
    assert_eq!(client.did_endpoint_from_ledger(DID, EndpointType::Profile).await.unwrap(), "");
    assert_eq!(client.did_verkey_from_ledger(DID).await.unwrap(), "abc");
    assert_eq!(client.did_role_from_ledger(DID).await.unwrap(), "ENDORSER");

    endpoint.assert_async().await;
    verkey.assert_async().await;
    role.assert_async().await;
}

#[tokio::test]
async fn wallet_credentials() {
    let mut server = mockito::Server::new_async().await;
    let list = server
        .mock("GET", "/credentials")
        .match_query(query(&[("max", "10"), ("index", "0")]))
        .with_body(
            json!({
                "results": [{
                    "referent": "cred-1",
                    "schema_id": "WgWxqztrNooG92RXvxSTWv:2:degree:1.0",
                    "cred_rev_id": null,
                    "attrs": { "name": "Alice" }
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;
    let revoked = server
        .mock("GET", "/credential/revoked/cred-1")
        .with_body(json!({ "revoked": false }).to_string())
        .create_async()
        .await;
    let mime_types = server
        .mock("GET", "/credential/mime-types/cred-1")
        .with_body(json!({ "results": { "name": "text/plain" } }).to_string())
        .create_async()
        .await;
    let single = server
        .mock("GET", "/credential/cred-1")
        .with_body(json!({ "referent": "cred-1", "attrs": { "name": "Alice" } }).to_string())
        .create_async()
        .await;
    let remove = server
        .mock("DELETE", "/credential/cred-1")
        .with_body("{}")
        .create_async()
        .await;

    let client = client(&server);
    let credentials = client.get_credentials(10, 0, "").await.unwrap();
    assert_eq!(credentials[0].attributes["name"], "Alice");
    assert!(credentials[0].credential_revocation_id.is_none());
    assert!(!client.is_credential_revoked("cred-1").await.unwrap());
    assert_eq!(client.credential_mime_types("cred-1").await.unwrap()["name"], "text/plain");
    assert_eq!(client.get_credential("cred-1").await.unwrap().referent, "cred-1");
    client.remove_credential("cred-1").await.unwrap();

    list.assert_async().await;
    revoked.assert_async().await;
    mime_types.assert_async().await;
    single.assert_async().await;
    remove.assert_async().await;
}

#[tokio::test]
async fn register_did_posts_to_ledger() {
    let mut server = mockito::Server::new_async().await;
    let seed = "000000000000000000000000Steward1";
    let mock = server
        .mock("POST", "/register")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({ "alias": "Alice", "seed": seed, "role": "ENDORSER" })))
        .with_body(json!({ "did": DID, "seed": seed, "verkey": "abc" }).to_string())
        .create_async()
        .await;

    let url = format!("{}/", server.url());
    let response = register_did(&url, "Alice", seed, DidRole::Endorser).await.unwrap();

    assert_eq!(response.did, DID);
    assert_eq!(response.seed, seed);
    mock.assert_async().await;
}

#[tokio::test]
async fn register_did_surfaces_ledger_errors() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/register")
        .with_status(400)
        .with_body("seed must be 32 characters")
        .create_async()
        .await;

    let error = register_did(&server.url(), "Alice", "short", DidRole::Endorser)
        .await
        .unwrap_err();

    assert_eq!(error.status(), Some(reqwest::StatusCode::BAD_REQUEST));
    mock.assert_async().await;
}
