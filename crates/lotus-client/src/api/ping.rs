//! API key check.

use lotus_core::OrganizationId;
use serde::{Deserialize, Serialize};

use crate::client::LotusClient;
use crate::error::Result;

/// Response of [`LotusClient::ping`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingResponse {
    /// Organization the API key belongs to.
    pub organization_id: OrganizationId,
}

impl LotusClient {
    /// Check that the API key is valid.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn ping(&self) -> Result<PingResponse> {
        self.get(&["api", "ping", ""], None).await
    }
}
