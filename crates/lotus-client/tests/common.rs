//! Common test utilities for lotus-client integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use lotus_client::{ClientConfig, LotusClient};
use serde_json::{json, Value};
use wiremock::{MockServer, Request};

/// API key every test client sends.
pub const TEST_API_KEY: &str = "test-api-key";

/// Test harness: a mock Lotus server and a client pointed at it.
pub struct TestHarness {
    /// The mock server.
    pub server: MockServer,
    /// Client configured against the mock server.
    pub client: LotusClient,
}

impl TestHarness {
    /// Create a harness with default client settings.
    pub async fn new() -> Self {
        Self::with_config(|config| config).await
    }

    /// Create a harness, adjusting the client configuration first.
    pub async fn with_config(adjust: impl FnOnce(ClientConfig) -> ClientConfig) -> Self {
        let server = MockServer::start().await;
        let config = adjust(ClientConfig::new(server.uri(), TEST_API_KEY));
        let client = LotusClient::with_config(config).expect("Failed to build client");
        Self { server, client }
    }

    /// Requests the mock server has received so far.
    pub async fn received(&self) -> Vec<Request> {
        self.server
            .received_requests()
            .await
            .expect("Request recording is enabled")
    }
}

/// All values sent under a query key, in order.
pub fn query_values(request: &Request, key: &str) -> Vec<String> {
    request
        .url
        .query_pairs()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .collect()
}

/// Decoded JSON body of a request.
pub fn body_json(request: &Request) -> Value {
    serde_json::from_slice(&request.body).expect("Request body is JSON")
}

pub fn customer_json(customer_id: &str) -> Value {
    json!({
        "customer_id": customer_id,
        "customer_name": "Test Co",
        "email": "billing@test.example",
        "default_currency": {"code": "USD", "name": "US Dollar", "symbol": "$"},
        "total_amount_due": "0.00",
        "tax_rate": null,
        "has_payment_method": false,
        "subscriptions": [],
        "invoices": [],
        "integrations": {},
        "tax_providers": [],
        "properties": {}
    })
}

pub fn plan_json(plan_id: &str) -> Value {
    json!({
        "plan_id": plan_id,
        "plan_name": "Basic",
        "plan_duration": "monthly",
        "num_versions": 1,
        "active_version": 1,
        "active_subscriptions": 0,
        "tags": [],
        "versions": [{"version": 1, "plan_name": "Basic", "status": "active"}]
    })
}

pub fn subscription_json(subscription_id: &str) -> Value {
    json!({
        "subscription_id": subscription_id,
        "customer": {"customer_id": "c1"},
        "billing_plan": {"plan_id": "plan_1", "plan_name": "Basic", "version": 1},
        "auto_renew": true,
        "is_new": true,
        "start_date": "2023-04-01T00:00:00Z",
        "end_date": null,
        "subscription_filters": [],
        "metadata": {}
    })
}

pub fn addon_json(addon_subscription_id: &str) -> Value {
    json!({
        "addon_subscription_id": addon_subscription_id,
        "addon": {"addon_id": "addon_1", "addon_name": "Seats", "addon_type": "flat", "billing_frequency": "recurring"},
        "customer": {"customer_id": "c1"},
        "parent": subscription_json("sub_1"),
        "start_date": "2023-04-02T00:00:00Z",
        "end_date": null,
        "auto_renew": true,
        "fully_billed": false,
        "metadata": {}
    })
}

pub fn credit_json(credit_id: &str) -> Value {
    json!({
        "credit_id": credit_id,
        "amount": "10.00",
        "amount_paid": "0.00",
        "amount_remaining": "10.00",
        "currency": {"code": "USD", "name": "US Dollar", "symbol": "$"},
        "customer": {"customer_id": "c1"},
        "drawdowns": [],
        "effective_at": "2023-04-01T00:00:00Z",
        "expires_at": null,
        "description": null,
        "status": "active"
    })
}

pub fn invoice_json(invoice_id: &str) -> Value {
    json!({
        "invoice_id": invoice_id,
        "invoice_number": "000001",
        "amount": "49.00",
        "cost_due": "49.00",
        "start_date": "2023-04-01",
        "end_date": "2023-04-30",
        "line_items": [],
        "payment_status": "unpaid"
    })
}
