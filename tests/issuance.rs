mod common;

use acapy_client::models::{
    CredentialAttribute, CredentialCreateRequest, CredentialExchangeRecordResult, CredentialOfferRequest, CredentialPreview, CredentialPreviewV2,
    CredentialProposalRequest, CredentialSendRequest, IndyFilter, QueryCredentialDefinitionsParams,
    QueryCredentialExchangeParams, QuerySchemasParams, CREDENTIAL_PREVIEW_TYPE, CREDENTIAL_PREVIEW_V2_TYPE,
};
use acapy_client::Error;
use common::{client, query, API_KEY};
use mockito::Matcher;
use serde_json::json;

const ISSUER: &str = "WgWxqztrNooG92RXvxSTWv";
const SCHEMA_ID: &str = "WgWxqztrNooG92RXvxSTWv:2:degree:1.0";
const CRED_DEF_ID: &str = "WgWxqztrNooG92RXvxSTWv:3:CL:20:tag";

#[tokio::test]
async fn register_schema_unwraps_schema() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/schemas")
        .match_header("x-api-key", API_KEY)
        .match_body(Matcher::Json(json!({
            "schema_name": "degree",
            "schema_version": "1.0",
            "attributes": ["name", "age"]
        })))
        .with_body(
            json!({
                "schema_id": SCHEMA_ID,
                "schema": {
                    "ver": "1.0",
                    "id": SCHEMA_ID,
                    "name": "degree",
                    "version": "1.0",
                    "attrNames": ["name", "age"],
                    "seqNo": 20
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let attributes = vec!["name".to_string(), "age".to_string()];
    let schema = client(&server).register_schema("degree", "1.0", &attributes).await.unwrap();

    assert_eq!(schema.id, SCHEMA_ID);
    assert_eq!(schema.attribute_names, attributes);
    assert_eq!(schema.seq_no, 20);
    mock.assert_async().await;
}

#[tokio::test]
async fn malformed_identifiers_are_rejected_before_sending() {
    let server = mockito::Server::new_async().await;
    let client = client(&server);

    let error = client.get_schema("degree:1.0").await.unwrap_err();
    assert!(matches!(error, Error::InvalidIdentifier { kind: "schema ID", .. }));

    let error = client
        .create_credential_definition("tag", false, 0, "not-a-schema")
        .await
        .unwrap_err();
    assert!(matches!(error, Error::InvalidIdentifier { .. }));

    let error = client.get_credential_definition(ISSUER).await.unwrap_err();
    assert!(matches!(error, Error::InvalidIdentifier { .. }));
}

#[tokio::test]
async fn credential_definition_skips_unset_revocation_fields() {
    let mut server = mockito::Server::new_async().await;
    let without_revocation = server
        .mock("POST", "/credential-definitions")
        .match_body(Matcher::Json(json!({ "tag": "tag", "schema_id": SCHEMA_ID })))
        .with_body(json!({ "credential_definition_id": CRED_DEF_ID }).to_string())
        .expect(1)
        .create_async()
        .await;

    let id = client(&server)
        .create_credential_definition("tag", false, 0, SCHEMA_ID)
        .await
        .unwrap();

    assert_eq!(id, CRED_DEF_ID);
    without_revocation.assert_async().await;

    let with_revocation = server
        .mock("POST", "/credential-definitions")
        .match_body(Matcher::Json(json!({
            "tag": "tag",
            "support_revocation": true,
            "revocation_registry_size": 10,
            "schema_id": SCHEMA_ID
        })))
        .with_body(json!({ "credential_definition_id": CRED_DEF_ID }).to_string())
        .create_async()
        .await;

    client(&server)
        .create_credential_definition("tag", true, 10, SCHEMA_ID)
        .await
        .unwrap();
    with_revocation.assert_async().await;
}

#[tokio::test]
async fn get_credential_definition_unwraps_definition() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", format!("/credential-definitions/{}", CRED_DEF_ID).as_str())
        .with_body(
            json!({
                "credential_definition": {
                    "ver": "1.0",
                    "id": CRED_DEF_ID,
                    "schemaId": "20",
                    "type": "CL",
                    "tag": "tag",
                    "value": { "primary": { "n": "1", "s": "2", "r": { "name": "3" }, "rctxt": "4", "z": "5" } }
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let definition = client(&server).get_credential_definition(CRED_DEF_ID).await.unwrap();

    assert_eq!(definition.schema_id, "20");
    assert_eq!(definition.value.primary.r["name"], "3");
    mock.assert_async().await;
}

#[tokio::test]
async fn offer_takes_flags_from_client() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/issue-credential/send-offer")
        .match_body(Matcher::PartialJson(json!({
            "cred_def_id": CRED_DEF_ID,
            "connection_id": "c-1",
            "trace": true,
            "auto_remove": false,
            "auto_issue": true
        })))
        .with_body(
            json!({
                "credential_exchange_id": "cx-1",
                "connection_id": "c-1",
                "state": "offer_sent",
                "revoc_reg_id": null
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client(&server)
        .with_tracing(true)
        .with_preserve_exchange_records(true)
        .with_auto_respond_credential_offer(true);
    let request = CredentialOfferRequest {
        credential_definition_id: CRED_DEF_ID.into(),
        connection_id: "c-1".into(),
        credential_preview: CredentialPreview::new(vec![CredentialAttribute::text("name", "Alice")]),
        auto_remove: true,
        ..Default::default()
    };
    let record = client.send_credential_offer(request).await.unwrap();

    assert_eq!(record.credential_exchange_id, "cx-1");
    assert!(record.revocation_registry_id.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn v1_records_by_id() {
    let mut server = mockito::Server::new_async().await;
    let list = server
        .mock("GET", "/issue-credential/records")
        .match_query(query(&[("role", "issuer"), ("state", "credential_acked")]))
        .with_body(json!({ "results": [{ "credential_exchange_id": "cx-1" }] }).to_string())
        .create_async()
        .await;
    let store = server
        .mock("POST", "/issue-credential/records/cx-1/store")
        .match_body(Matcher::Json(json!({})))
        .with_body(json!({ "credential_exchange_id": "cx-1", "state": "credential_acked" }).to_string())
        .create_async()
        .await;
    let problem = server
        .mock("POST", "/issue-credential/records/cx-1/problem-report")
        .match_body(Matcher::Json(json!({ "explain_ltxt": "wrong name" })))
        .with_body("{}")
        .create_async()
        .await;
    let remove = server
        .mock("DELETE", "/issue-credential/records/cx-1")
        .with_body("{}")
        .create_async()
        .await;

    let client = client(&server);
    let params = QueryCredentialExchangeParams {
        role: "issuer".into(),
        state: "credential_acked".into(),
        ..Default::default()
    };
    let records = client.query_credential_exchange(&params).await.unwrap();
    assert_eq!(records.len(), 1);
    let record = client.store_credential_by_id("cx-1", "").await.unwrap();
    assert_eq!(record.state, "credential_acked");
    client.report_credential_exchange_problem("cx-1", "wrong name").await.unwrap();
    client.remove_credential_exchange("cx-1").await.unwrap();

    list.assert_async().await;
    store.assert_async().await;
    problem.assert_async().await;
    remove.assert_async().await;
}

#[tokio::test]
async fn issue_v2_sends_indy_filter() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/issue-credential-2.0/send")
        .match_body(Matcher::Json(json!({
            "connection_id": "c-1",
            "credential_preview": {
                "@type": CREDENTIAL_PREVIEW_V2_TYPE,
                "attributes": [{ "name": "name", "mime-type": "text/plain", "value": "Alice" }]
            },
            "comment": "your degree",
            "filter": {
                "dif": {},
                "indy": { "cred_def_id": CRED_DEF_ID, "issuer_did": ISSUER, "schema_id": SCHEMA_ID }
            },
            "auto_remove": true
        })))
        .with_body(
            json!({
                "cred_ex_record": { "cred_ex_id": "cx-2", "conn_id": "c-1", "state": "offer-sent" },
                "indy": { "cred_ex_indy_id": "i-1", "cred_ex_id": "cx-2" }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let filter = IndyFilter {
        credential_definition_id: CRED_DEF_ID.into(),
        issuer_did: ISSUER.into(),
        schema_id: SCHEMA_ID.into(),
        ..Default::default()
    };
    let preview = CredentialPreviewV2::new(vec![CredentialAttribute::text("name", "Alice")]);
    let result = client(&server)
        .issue_credential_v2("c-1", &preview, "your degree", filter)
        .await
        .unwrap();

    let record = result.credential_exchange_record;
    assert_eq!(record.credential_exchange_id, "cx-2");
    assert_eq!(record.connection_id.as_deref(), Some("c-1"));
    assert_eq!(result.indy.unwrap().credential_exchange_indy_id, "i-1");
    mock.assert_async().await;
}

#[tokio::test]
async fn offer_v2_sets_definition_and_auto_issue() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/issue-credential-2.0/send-offer")
        .match_body(Matcher::PartialJson(json!({
            "connection_id": "c-1",
            "cred_def_id": CRED_DEF_ID,
            "filter": { "indy": { "cred_def_id": CRED_DEF_ID } },
            "auto_issue": true
        })))
        .with_body(json!({ "cred_ex_record": { "cred_ex_id": "cx-3", "state": "offer-sent" } }).to_string())
        .create_async()
        .await;

    let preview = CredentialPreviewV2::new(vec![CredentialAttribute::text("name", "Alice")]);
    let result = client(&server)
        .with_auto_respond_credential_offer(true)
        .offer_credential_v2("c-1", &preview, CRED_DEF_ID, "")
        .await
        .unwrap();

    assert_eq!(result.credential_exchange_record.state, "offer-sent");
    mock.assert_async().await;
}

#[tokio::test]
async fn store_v2_names_the_credential() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/issue-credential-2.0/records/cx-3/store")
        .match_body(Matcher::Json(json!({ "credential_id": "degree" })))
        .with_body(
            json!({ "cred_ex_record": { "cred_ex_id": "cx-3", "cred_id_stored": "degree", "state": "done" } })
                .to_string(),
        )
        .create_async()
        .await;

    let result = client(&server).store_credential_by_id_v2("cx-3", "degree").await.unwrap();

    assert_eq!(
        result.credential_exchange_record.credential_id_stored.as_deref(),
        Some("degree")
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn schema_and_definition_queries_unwrap_ids() {
    let mut server = mockito::Server::new_async().await;
    let schemas = server
        .mock("GET", "/schemas/created")
        .match_query(Matcher::Exact(format!("schema_issuer_did={}", ISSUER)))
        .with_body(json!({ "schema_ids": [SCHEMA_ID] }).to_string())
        .create_async()
        .await;
    let definitions = server
        .mock("GET", "/credential-definitions/created")
        .match_query(query(&[("schema_id", SCHEMA_ID), ("issuer_did", ISSUER)]))
        .with_body(json!({ "credential_definition_ids": [CRED_DEF_ID] }).to_string())
        .create_async()
        .await;

    let client = client(&server);
    let params = QuerySchemasParams {
        schema_issuer_did: ISSUER.into(),
        ..Default::default()
    };
    assert_eq!(client.query_schemas(&params).await.unwrap(), vec![SCHEMA_ID.to_string()]);
    let params = QueryCredentialDefinitionsParams {
        schema_id: SCHEMA_ID.into(),
        issuer_did: ISSUER.into(),
        ..Default::default()
    };
    assert_eq!(
        client.query_credential_definitions(&params).await.unwrap(),
        vec![CRED_DEF_ID.to_string()]
    );

    schemas.assert_async().await;
    definitions.assert_async().await;
}

#[tokio::test]
async fn v1_proposal_create_and_send_set_auto_remove() {
    let mut server = mockito::Server::new_async().await;
    let record = json!({ "credential_exchange_id": "cx-1", "state": "proposal_sent" }).to_string();
    let proposal = server
        .mock("POST", "/issue-credential/send-proposal")
        .match_body(Matcher::PartialJson(json!({
            "connection_id": "c-1",
            "schema_id": SCHEMA_ID,
            "trace": false,
            "auto_remove": true
        })))
        .with_body(record.clone())
        .create_async()
        .await;
    let create = server
        .mock("POST", "/issue-credential/create")
        .match_body(Matcher::PartialJson(json!({ "cred_def_id": CRED_DEF_ID, "auto_remove": true })))
        .with_body(record.clone())
        .create_async()
        .await;
    let send = server
        .mock("POST", "/issue-credential/send")
        .match_body(Matcher::PartialJson(json!({
            "connection_id": "c-1",
            "cred_def_id": CRED_DEF_ID,
            "credential_proposal": {
                "@type": CREDENTIAL_PREVIEW_TYPE,
                "attributes": [{ "name": "name", "mime-type": "text/plain", "value": "Alice" }]
            },
            "auto_remove": true
        })))
        .with_body(record)
        .create_async()
        .await;

    let client = client(&server);
    let preview = CredentialPreview::new(vec![CredentialAttribute::text("name", "Alice")]);
    let proposal_request = CredentialProposalRequest {
        connection_id: "c-1".into(),
        schema_id: SCHEMA_ID.into(),
        credential_proposal: preview.clone(),
        ..Default::default()
    };
    client.send_credential_proposal(proposal_request).await.unwrap();
    let create_request = CredentialCreateRequest {
        credential_definition_id: CRED_DEF_ID.into(),
        credential_proposal: preview.clone(),
        ..Default::default()
    };
    client.create_credential_exchange(create_request).await.unwrap();
    let send_request = CredentialSendRequest {
        connection_id: "c-1".into(),
        credential_definition_id: CRED_DEF_ID.into(),
        credential_proposal: preview,
        ..Default::default()
    };
    let sent = client.send_credential(send_request).await.unwrap();
    assert_eq!(sent.credential_exchange_id, "cx-1");

    proposal.assert_async().await;
    create.assert_async().await;
    send.assert_async().await;
}

#[tokio::test]
async fn create_and_propose_v2() {
    let mut server = mockito::Server::new_async().await;
    let preview_json = json!({
        "@type": CREDENTIAL_PREVIEW_V2_TYPE,
        "attributes": [{ "name": "name", "mime-type": "text/plain", "value": "Alice" }]
    });
    let create = server
        .mock("POST", "/issue-credential-2.0/create")
        .match_body(Matcher::Json(json!({
            "credential_preview": preview_json,
            "filter": { "dif": {}, "indy": { "cred_def_id": CRED_DEF_ID } },
            "auto_remove": true
        })))
        .with_body(json!({ "cred_ex_record": { "cred_ex_id": "cx-4", "state": "offer-sent" } }).to_string())
        .create_async()
        .await;
    let propose = server
        .mock("POST", "/issue-credential-2.0/send-proposal")
        .match_body(Matcher::Json(json!({
            "connection_id": "c-1",
            "credential_preview": preview_json,
            "comment": "please",
            "filter": { "dif": {}, "indy": { "schema_id": SCHEMA_ID } },
            "auto_remove": true
        })))
        .with_body(json!({ "cred_ex_record": { "cred_ex_id": "cx-5", "state": "proposal-sent" } }).to_string())
        .create_async()
        .await;

    let client = client(&server);
    let preview = CredentialPreviewV2::new(vec![CredentialAttribute::text("name", "Alice")]);
    let created = client
        .create_credential_exchange_v2(
            &preview,
            IndyFilter {
                credential_definition_id: CRED_DEF_ID.into(),
                ..Default::default()
            },
            "",
        )
        .await
        .unwrap();
    assert_eq!(created.credential_exchange_record.credential_exchange_id, "cx-4");
    let proposed = client
        .propose_credential_v2(
            "c-1",
            &preview,
            "please",
            IndyFilter {
                schema_id: SCHEMA_ID.into(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(proposed.credential_exchange_record.state, "proposal-sent");

    create.assert_async().await;
    propose.assert_async().await;
}

#[tokio::test]
async fn v2_records_by_id() {
    let mut server = mockito::Server::new_async().await;
    let record = |state: &str| json!({ "cred_ex_record": { "cred_ex_id": "cx-6", "state": state } }).to_string();
    let offer = server
        .mock("POST", "/issue-credential-2.0/records/cx-6/send-offer")
        .with_body(record("offer-sent"))
        .create_async()
        .await;
    let request = server
        .mock("POST", "/issue-credential-2.0/records/cx-6/send-request")
        .with_body(record("request-sent"))
        .create_async()
        .await;
    let issue = server
        .mock("POST", "/issue-credential-2.0/records/cx-6/issue")
        .match_body(Matcher::Json(json!({ "comment": "here you go" })))
        .with_body(record("credential-issued"))
        .create_async()
        .await;
    let get = server
        .mock("GET", "/issue-credential-2.0/records/cx-6")
        .with_body(record("done"))
        .create_async()
        .await;
    let list = server
        .mock("GET", "/issue-credential-2.0/records")
        .match_query(Matcher::Exact("connection_id=c-1".into()))
        .with_body(json!({ "results": [{ "cred_ex_record": { "cred_ex_id": "cx-6" } }] }).to_string())
        .create_async()
        .await;
    let problem = server
        .mock("POST", "/issue-credential-2.0/records/cx-6/problem-report")
        .match_body(Matcher::Json(json!({ "explain_ltxt": "no thanks" })))
        .with_body("{}")
        .create_async()
        .await;
    let remove = server
        .mock("DELETE", "/issue-credential-2.0/records/cx-6")
        .with_body("{}")
        .create_async()
        .await;

    let client = client(&server);
    let state = |result: CredentialExchangeRecordResult| result.credential_exchange_record.state;
    assert_eq!(state(client.offer_credential_by_id_v2("cx-6").await.unwrap()), "offer-sent");
    assert_eq!(state(client.request_credential_by_id_v2("cx-6").await.unwrap()), "request-sent");
    assert_eq!(
        state(client.issue_credential_by_id_v2("cx-6", "here you go").await.unwrap()),
        "credential-issued"
    );
    assert_eq!(state(client.get_credential_exchange_v2("cx-6").await.unwrap()), "done");
    let params = QueryCredentialExchangeParams {
        connection_id: "c-1".into(),
        ..Default::default()
    };
    let records = client.query_credential_exchange_v2(&params).await.unwrap();
    assert_eq!(records[0].credential_exchange_record.credential_exchange_id, "cx-6");
    client.report_credential_exchange_problem_v2("cx-6", "no thanks").await.unwrap();
    client.remove_credential_exchange_v2("cx-6").await.unwrap();

    offer.assert_async().await;
    request.assert_async().await;
    issue.assert_async().await;
    get.assert_async().await;
    list.assert_async().await;
    problem.assert_async().await;
    remove.assert_async().await;
}
