//! Event ingestion.

use lotus_core::{
    CustomerId, Event, IdempotencyId, Properties, TrackEventsOutcome, VerifyEventIngestionStatus,
};
use serde::{Deserialize, Serialize};

use crate::client::LotusClient;
use crate::error::Result;

/// Request body for [`LotusClient::track_events`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackEventsRequest {
    /// Events to ingest.
    pub batch: Vec<Event>,
}

impl TrackEventsRequest {
    /// Wrap a batch of events.
    #[must_use]
    pub fn new(batch: Vec<Event>) -> Self {
        Self { batch }
    }
}

/// Response of [`LotusClient::track_events`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackEventsResponse {
    /// How much of the batch was accepted.
    pub success: TrackEventsOutcome,
    /// Rejected events keyed by idempotency id, with the reason.
    #[serde(default)]
    pub failed_events: Option<Properties>,
}

/// Request body for [`LotusClient::verify_event_ingestion`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyEventIngestionRequest {
    /// Restrict the lookup to one customer.
    #[serde(rename = "cust_id", skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<CustomerId>,
    /// Idempotency ids to look up.
    pub idempotency_ids: Vec<IdempotencyId>,
    /// How many days back to search.
    pub number_days_lookback: u32,
}

/// Response of [`LotusClient::verify_event_ingestion`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyEventIngestionResponse {
    /// Requested ids the service has not ingested.
    #[serde(default)]
    pub ids_not_found: Vec<IdempotencyId>,
    /// Overall result.
    pub status: VerifyEventIngestionStatus,
}

impl LotusClient {
    /// Send a batch of usage events.
    ///
    /// Idempotency ids are forwarded unchanged, so a batch may be re-sent
    /// after a failure without double counting.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn track_events(&self, request: &TrackEventsRequest) -> Result<TrackEventsResponse> {
        self.post(&["api", "track", ""], None, request).await
    }

    /// Check which idempotency ids the service has ingested.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn verify_event_ingestion(
        &self,
        request: &VerifyEventIngestionRequest,
    ) -> Result<VerifyEventIngestionResponse> {
        self.post(&["api", "verify_idems_received", ""], None, request)
            .await
    }
}
