// src/client/out_of_band.rs
use super::Client;
use crate::error::Result;
use crate::models::{
    Connection, CreateOutOfBandInvitationRequest, OutOfBandInvitation, OutOfBandInvitationResponse,
};

impl Client {
    /// Creates an out-of-band (RFC 0434) invitation.
    pub async fn create_out_of_band_invitation(
        &self,
        request: &CreateOutOfBandInvitationRequest,
        auto_accept: bool,
        multi_use: bool,
    ) -> Result<OutOfBandInvitationResponse> {
        let query = [
            ("auto_accept", auto_accept.to_string()),
            ("multi_use", multi_use.to_string()),
        ];
        self.post("/out-of-band/create-invitation", &query, request).await
    }

    /// Receives an out-of-band invitation and starts the handshake it offers.
    pub async fn receive_out_of_band_invitation(
        &self,
        invitation: &OutOfBandInvitation,
        auto_accept: bool,
    ) -> Result<Connection> {
        let query = [
            ("alias", invitation.label.clone()),
            ("auto_accept", auto_accept.to_string()),
        ];
        self.post("/out-of-band/receive-invitation", &query, invitation).await
    }
}
