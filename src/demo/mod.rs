// src/demo/mod.rs
//! Interactive controller driving one agent through the full credential
//! lifecycle: connect, issue, prove, revoke.

pub mod events;
pub mod prompt;

use acapy_client::config::Settings;
use acapy_client::models::{
    CreateOutOfBandInvitationRequest, CredentialAttribute, CredentialPreviewV2, DidRole, IndyFilter,
    NonRevoked, OutOfBandInvitation, PresentationAttribute, PresentationPreview, PresentationProof,
    PresentationProposalRequest, PresentationRequestRequest, ProofRequest, RequestedAttribute, Restrictions,
};
use acapy_client::utils::serialization::to_pretty_json;
use acapy_client::{register_did, Client};
use anyhow::{anyhow, Context, Result};
use events::SharedState;
use log::{info, warn};
use prompt::Prompt;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::collections::HashMap;

const MENU: &str = "Choose:
    (1) Register DID on the ledger
    (2) Create invitation
    (3) Receive invitation
    (4) Send ping
    (5) Send basic message
    (6) List connections
    (7) Register schema
    (8) Create credential definition
    (9) Issue credential
    (10) List wallet credentials
    (11) Send proof request
    (12) Send presentation
    (13) Revoke issued credential
    (14) Publish revocations
    (15) Verify presentation
    (16) List credentials for the proof request
    (17) Send presentation proposal
    (18) Issued credential revocation status
    (19) Number of issued credentials
    (20) Check if a held credential is revoked
    (exit) Exit";

pub struct App {
    client: Client,
    settings: Settings,
    state: SharedState,
    prompt: Prompt,
}

impl App {
    pub fn new(client: Client, settings: Settings, state: SharedState) -> Self {
        Self {
            client,
            settings,
            state,
            prompt: Prompt::new(),
        }
    }

    /// Reads commands until `exit` or end of input.
    ///
    /// A failing command is reported and the loop continues.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            println!("{}", MENU);
            let command = match self.prompt.ask("Enter Command: ").await {
                Ok(command) => command,
                Err(_) => return Ok(()),
            };
            let outcome = match command.as_str() {
                "exit" => return Ok(()),
                "1" => self.register_did().await,
                "2" => self.create_invitation().await,
                "3" => self.receive_invitation().await,
                "4" => self.send_ping().await,
                "5" => self.send_basic_message().await,
                "6" => self.list_connections().await,
                "7" => self.register_schema().await,
                "8" => self.create_credential_definition().await,
                "9" => self.issue_credential().await,
                "10" => self.list_credentials().await,
                "11" => self.send_proof_request().await,
                "12" => self.send_presentation().await,
                "13" => self.revoke_credential().await,
                "14" => self.publish_revocations().await,
                "15" => self.verify_presentation().await,
                "16" => self.list_presentation_credentials().await,
                "17" => self.send_presentation_proposal().await,
                "18" => self.credential_revocation_status().await,
                "19" => self.issued_credentials_count().await,
                "20" => self.check_credential_revoked().await,
                "" => Ok(()),
                other => {
                    println!("Unknown command {:?}", other);
                    Ok(())
                }
            };
            if let Err(e) = outcome {
                warn!("Command {} failed: {:#}", command, e);
            }
        }
    }

    fn connection_id(&self) -> Result<String> {
        self.state
            .lock()
            .connection
            .as_ref()
            .map(|connection| connection.connection_id.clone())
            .ok_or_else(|| anyhow!("no connection yet, create or receive an invitation first"))
    }

    fn presentation_exchange_id(&self) -> Result<String> {
        self.state
            .lock()
            .presentation_exchange
            .as_ref()
            .map(|record| record.presentation_exchange_id.clone())
            .ok_or_else(|| anyhow!("no presentation exchange yet"))
    }

    async fn register_did(&mut self) -> Result<()> {
        let seed = self.prompt.ask("Seed (empty for random): ").await?;
        let seed = if seed.is_empty() { random_seed() } else { seed };
        let response = register_did(&self.settings.ledger.url, &self.settings.label, &seed, DidRole::Endorser)
            .await
            .context("registering DID")?;
        info!("Registered DID {} with verkey {}", response.did, response.verkey);
        println!("Hi {}, your registered DID is {}", self.settings.label, response.did);
        println!("Start the agent with --seed {}", response.seed);
        self.state.lock().my_did = response.did;
        Ok(())
    }

    async fn create_invitation(&mut self) -> Result<()> {
        let their_label = self.prompt.ask("Who/What is the invitation for? ").await?;
        let request = CreateOutOfBandInvitationRequest::with_default_handshake(their_label, &self.settings.label);
        let response = self.client.create_out_of_band_invitation(&request, true, false).await?;
        println!("Invitation json: {}", serde_json::to_string(&response.invitation)?);
        Ok(())
    }

    async fn receive_invitation(&mut self) -> Result<()> {
        let json = self.prompt.ask("Invitation json: ").await?;
        let invitation: OutOfBandInvitation = serde_json::from_str(&json).context("parsing invitation")?;
        let connection = self.client.receive_out_of_band_invitation(&invitation, true).await?;
        println!("Connection ID: {}", connection.connection_id);
        self.state.lock().connection = Some(connection);
        Ok(())
    }

    async fn send_ping(&mut self) -> Result<()> {
        let connection_id = self.connection_id()?;
        let thread = self.client.send_ping(&connection_id).await?;
        println!("Ping sent, thread {}", thread.thread_id);
        Ok(())
    }

    async fn send_basic_message(&mut self) -> Result<()> {
        let connection_id = self.connection_id()?;
        let message = self.prompt.ask("Message: ").await?;
        self.client.send_basic_message(&connection_id, &message).await?;
        Ok(())
    }

    async fn list_connections(&mut self) -> Result<()> {
        for connection in self.client.query_connections(None).await? {
            println!(
                "{} {:?} state {:?}",
                connection.connection_id, connection.their_label, connection.state
            );
        }
        Ok(())
    }

    async fn register_schema(&mut self) -> Result<()> {
        let name = self.prompt.ask("Schema name: ").await?;
        let version = self.prompt.ask("Version: ").await?;
        let attributes = self
            .prompt
            .ask_list("Attributes (comma separated, i.e.: name,age): ")
            .await?;
        let schema = self.client.register_schema(&name, &version, &attributes).await?;
        println!("Schema: {}", to_pretty_json(&schema));
        self.state.lock().schema = Some(schema);
        Ok(())
    }

    async fn create_credential_definition(&mut self) -> Result<()> {
        let schema_id = self
            .state
            .lock()
            .schema
            .as_ref()
            .map(|schema| schema.id.clone())
            .ok_or_else(|| anyhow!("register a schema first"))?;
        println!("This is slow, it takes a couple of seconds.");
        let credential_definition_id = self
            .client
            .create_credential_definition("tag", true, 10, &schema_id)
            .await?;
        println!("Credential Definition ID: {}", credential_definition_id);
        self.state.lock().credential_definition_id = credential_definition_id;
        Ok(())
    }

    async fn issue_credential(&mut self) -> Result<()> {
        let connection_id = self.connection_id()?;
        let (schema, credential_definition_id, my_did) = {
            let state = self.state.lock();
            let schema = state.schema.clone().ok_or_else(|| anyhow!("register a schema first"))?;
            (schema, state.credential_definition_id.clone(), state.my_did.clone())
        };
        if credential_definition_id.is_empty() {
            return Err(anyhow!("create a credential definition first"));
        }

        let comment = self.prompt.ask("Comment: ").await?;
        let mut attributes = Vec::new();
        for name in &schema.attribute_names {
            let value = self.prompt.ask(&format!("Attribute {:?} value: ", name)).await?;
            attributes.push(CredentialAttribute::text(name.as_str(), value));
        }

        let filter = IndyFilter {
            credential_definition_id,
            issuer_did: my_did,
            schema_id: schema.id.clone(),
            ..Default::default()
        };
        let result = self
            .client
            .issue_credential_v2(&connection_id, &CredentialPreviewV2::new(attributes), &comment, filter)
            .await?;
        println!(
            "Credential exchange {} is {}",
            result.credential_exchange_record.credential_exchange_id, result.credential_exchange_record.state
        );
        self.state.lock().credential_exchange = Some(result.credential_exchange_record);
        Ok(())
    }

    async fn list_credentials(&mut self) -> Result<()> {
        for credential in self.client.get_credentials(10, 0, "").await? {
            println!("{}: {}", credential.referent, to_pretty_json(&credential.attributes));
        }
        Ok(())
    }

    async fn send_proof_request(&mut self) -> Result<()> {
        let connection_id = self.connection_id()?;
        let credential_definition_id = self
            .prompt
            .ask("Credential definition ID to restrict to (empty for any): ")
            .await?;
        let names = self.prompt.ask_list("Attributes (comma separated): ").await?;
        let comment = self.prompt.ask("Comment: ").await?;

        let now = chrono::Utc::now().timestamp();
        let non_revoked = NonRevoked { from: now, to: now };
        let restrictions = Some(Restrictions {
            credential_definition_id,
            ..Default::default()
        });
        let mut requested_attributes = HashMap::new();
        for name in names {
            let attribute = RequestedAttribute::new(restrictions.clone(), name.as_str(), Vec::new(), Some(non_revoked))?;
            requested_attributes.insert(format!("0_{}_uuid", name), attribute);
        }

        let request = PresentationRequestRequest {
            comment,
            connection_id,
            proof_request: ProofRequest::new(
                "Proof request",
                "",
                HashMap::new(),
                requested_attributes,
                "1.0",
                Some(non_revoked),
            ),
            ..Default::default()
        };
        let record = self.client.send_presentation_request(request).await?;
        println!("Presentation exchange {} is {}", record.presentation_exchange_id, record.state);
        self.state.lock().presentation_exchange = Some(record);
        Ok(())
    }

    async fn send_presentation(&mut self) -> Result<()> {
        let record = self
            .state
            .lock()
            .presentation_exchange
            .clone()
            .ok_or_else(|| anyhow!("no proof request received yet"))?;
        let proof_request = record
            .presentation_request
            .ok_or_else(|| anyhow!("presentation exchange carries no proof request"))?;

        let now = chrono::Utc::now().timestamp();
        let mut requested_attributes = self.client.find_matching_credentials(&proof_request).await?;
        for attribute in requested_attributes.values_mut() {
            attribute.timestamp = Some(now);
        }
        let proof = PresentationProof::new(requested_attributes, HashMap::new(), HashMap::new());
        let record = self
            .client
            .send_presentation_by_id(&record.presentation_exchange_id, proof)
            .await?;
        println!("Presentation exchange {} is {}", record.presentation_exchange_id, record.state);
        Ok(())
    }

    async fn revoke_credential(&mut self) -> Result<()> {
        let indy = self
            .state
            .lock()
            .credential_exchange_indy
            .clone()
            .ok_or_else(|| anyhow!("no revocable credential issued yet"))?;
        let (Some(credential_revocation_id), Some(revocation_registry_id)) =
            (indy.credential_revocation_id, indy.revocation_registry_id)
        else {
            return Err(anyhow!("credential exchange {} is not revocable", indy.credential_exchange_id));
        };
        self.client
            .revoke_issued_credential(&credential_revocation_id, &revocation_registry_id, false)
            .await?;
        println!(
            "Revoked credential for credential exchange {}",
            indy.credential_exchange_id
        );
        Ok(())
    }

    async fn publish_revocations(&mut self) -> Result<()> {
        self.client.publish_revocations(None).await?;
        println!("Published revocations");
        Ok(())
    }

    async fn verify_presentation(&mut self) -> Result<()> {
        let presentation_exchange_id = self.presentation_exchange_id()?;
        let record = self.client.verify_presentation_by_id(&presentation_exchange_id).await?;
        println!(
            "Presentation exchange {} is {}, verified: {}",
            record.presentation_exchange_id,
            record.state,
            record.is_verified()
        );
        if let Some(presentation) = &record.presentation {
            for (referent, attribute) in &presentation.requested_proof.revealed_attrs {
                println!("  {}: {}", referent, attribute.raw);
            }
        }
        self.state.lock().presentation_exchange = Some(record);
        Ok(())
    }

    async fn list_presentation_credentials(&mut self) -> Result<()> {
        let presentation_exchange_id = self.presentation_exchange_id()?;
        let credentials = self
            .client
            .presentation_credentials_by_id(&presentation_exchange_id, 0, "", &[], 0)
            .await?;
        for credential in credentials {
            println!(
                "{} for {:?}: {}",
                credential.credential_info.referent,
                credential.presentation_referents,
                to_pretty_json(&credential.credential_info.attrs)
            );
        }
        Ok(())
    }

    async fn send_presentation_proposal(&mut self) -> Result<()> {
        let connection_id = self.connection_id()?;
        let credential_definition_id = self
            .prompt
            .ask("Credential definition ID of the credential to present: ")
            .await?;
        let names = self.prompt.ask_list("Attributes (comma separated): ").await?;
        let comment = self.prompt.ask("Comment: ").await?;

        let attributes = names
            .into_iter()
            .map(|name| PresentationAttribute {
                name,
                credential_definition_id: credential_definition_id.clone(),
                ..Default::default()
            })
            .collect();
        let request = PresentationProposalRequest {
            comment,
            auto_present: true,
            presentation_preview: PresentationPreview::new(attributes, Vec::new()),
            connection_id,
            ..Default::default()
        };
        let record = self.client.send_presentation_proposal(request).await?;
        println!("Presentation exchange {} is {}", record.presentation_exchange_id, record.state);
        self.state.lock().presentation_exchange = Some(record);
        Ok(())
    }

    async fn credential_revocation_status(&mut self) -> Result<()> {
        let credential_exchange_id = self
            .state
            .lock()
            .credential_exchange_indy
            .as_ref()
            .map(|indy| indy.credential_exchange_id.clone())
            .ok_or_else(|| anyhow!("no revocable credential issued yet"))?;
        let record = self
            .client
            .credential_revocation_status(&credential_exchange_id, "", "")
            .await?;
        println!(
            "Credential revocation ID {} in {} is {}",
            record.credential_revocation_id, record.revocation_registry_id, record.state
        );
        Ok(())
    }

    async fn issued_credentials_count(&mut self) -> Result<()> {
        let revocation_registry_id = self
            .state
            .lock()
            .credential_exchange_indy
            .as_ref()
            .and_then(|indy| indy.revocation_registry_id.clone())
            .ok_or_else(|| anyhow!("no revocable credential issued yet"))?;
        let count = self.client.issued_credentials_count(&revocation_registry_id).await?;
        println!("{} credentials issued against {}", count, revocation_registry_id);
        Ok(())
    }

    async fn check_credential_revoked(&mut self) -> Result<()> {
        let credential_id = self.prompt.ask("Credential ID (referent): ").await?;
        if self.client.is_credential_revoked(&credential_id).await? {
            println!("Credential {} is revoked", credential_id);
        } else {
            println!("Credential {} is not revoked", credential_id);
        }
        Ok(())
    }
}

/// 32 character wallet seed, as required by the ledger.
fn random_seed() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use acapy_client::config::{AgentSettings, LedgerSettings, WebhookSettings};
    use acapy_client::models::PresentationExchangeRecord;
    use serde_json::json;

    fn app(agent_url: String) -> App {
        let settings = Settings {
            agent: AgentSettings {
                url: agent_url.clone(),
                api_key: None,
                tracing: false,
                preserve_exchange_records: false,
                auto_respond_credential_offer: false,
            },
            ledger: LedgerSettings {
                url: "http://localhost:9000".into(),
            },
            webhook: WebhookSettings { port: 4455 },
            label: "Alice".into(),
        };
        App::new(Client::new(agent_url), settings, SharedState::default())
    }

    #[tokio::test]
    async fn verify_needs_a_presentation_exchange() {
        let mut app = app("http://localhost:11000".into());
        let error = app.verify_presentation().await.unwrap_err();
        assert!(error.to_string().contains("no presentation exchange"));
    }

    #[tokio::test]
    async fn verify_updates_the_stored_exchange() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/present-proof/records/px-1/verify-presentation")
            .with_body(
                json!({
                    "presentation_exchange_id": "px-1",
                    "state": "verified",
                    "verified": "true"
                })
                .to_string(),
            )
            .create_async()
            .await;

        let mut app = app(server.url());
        app.state.lock().presentation_exchange = Some(PresentationExchangeRecord {
            presentation_exchange_id: "px-1".into(),
            state: "presentation_received".into(),
            ..Default::default()
        });
        app.verify_presentation().await.unwrap();

        let state = app.state.lock();
        let record = state.presentation_exchange.as_ref().unwrap();
        assert_eq!(record.state, "verified");
        assert!(record.is_verified());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn issued_count_uses_the_last_revocable_credential() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/revocation/registry/r1/issued")
            .with_body(json!({ "result": 2 }).to_string())
            .create_async()
            .await;

        let mut app = app(server.url());
        app.state.lock().credential_exchange_indy = Some(acapy_client::models::CredentialExchangeIndy {
            credential_exchange_id: "cx-1".into(),
            revocation_registry_id: Some("r1".into()),
            credential_revocation_id: Some("1".into()),
            ..Default::default()
        });
        app.issued_credentials_count().await.unwrap();
        mock.assert_async().await;
    }

    #[test]
    fn seeds_are_32_characters() {
        let seed = random_seed();
        assert_eq!(seed.len(), 32);
        assert!(seed.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(seed, random_seed());
    }
}
