//! Plan, credit, invoice, and entitlement endpoint tests.

mod common;

use std::str::FromStr;

use chrono::{TimeZone, Utc};
use common::{credit_json, invoice_json, plan_json, query_values, TestHarness};
use lotus_client::{
    CreateCreditRequest, CreditId, CreditStatus, Decimal, GetFeatureAccessRequest,
    GetMetricAccessRequest, GetPlanRequest, InvoiceId, InvoicePaymentStatus, InvoiceStatus,
    ListCreditsRequest, ListInvoicesRequest, ListPlansRequest, PlanDuration, PlanVersionStatus,
    SubscriptionFilter, UpdateCreditRequest,
};
use serde_json::json;
use wiremock::matchers::{
    body_json, body_partial_json, method, path, query_param, query_param_is_missing,
};
use wiremock::{Mock, ResponseTemplate};

// ============================================================================
// Plans
// ============================================================================

#[tokio::test]
async fn test_list_plans_with_filters() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/api/plans/"))
        .and(query_param("plan_duration", "monthly"))
        .and(query_param_is_missing("version_currency_code"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([plan_json("plan_1")])))
        .expect(1)
        .mount(&harness.server)
        .await;

    let request = ListPlansRequest {
        plan_duration: Some(PlanDuration::Monthly),
        include_tags: vec!["startup".to_string(), "self-serve".to_string()],
        version_status: vec![PlanVersionStatus::Active, PlanVersionStatus::Grandfathered],
        ..ListPlansRequest::default()
    };
    let plans = harness.client.list_plans(&request).await.unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].active().map(|v| v.version), Some(1));

    let received = harness.received().await;
    assert_eq!(query_values(&received[0], "include_tags"), ["startup", "self-serve"]);
    assert_eq!(
        query_values(&received[0], "version_status"),
        ["active", "grandfathered"]
    );
}

#[tokio::test]
async fn test_get_plan() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/api/plans/plan_1"))
        .and(query_param("version_currency_code", "EUR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(plan_json("plan_1")))
        .expect(1)
        .mount(&harness.server)
        .await;

    let request = GetPlanRequest {
        version_currency_code: Some("EUR".to_string()),
        ..GetPlanRequest::new("plan_1")
    };
    let plan = harness.client.get_plan(&request).await.unwrap();

    assert_eq!(plan.plan_id.as_str(), "plan_1");
    assert_eq!(plan.plan_duration, Some(PlanDuration::Monthly));
}

// ============================================================================
// Credits
// ============================================================================

#[tokio::test]
async fn test_list_credits() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/api/credits/"))
        .and(query_param("customer_id", "c1"))
        .and(query_param("status", "active"))
        .and(query_param("effective_after", "2023-01-01T00:00:00Z"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([credit_json("cred_1")])))
        .expect(1)
        .mount(&harness.server)
        .await;

    let request = ListCreditsRequest {
        effective_after: Some(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()),
        status: vec![CreditStatus::Active],
        ..ListCreditsRequest::new("c1")
    };
    let credits = harness.client.list_credits(&request).await.unwrap();

    assert_eq!(credits.len(), 1);
    assert_eq!(credits[0].amount_remaining, Decimal::from_str("10.00").unwrap());
}

#[tokio::test]
async fn test_numeric_credit_amounts_keep_precision() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/api/credits/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[{"credit_id":"cred_1","amount":1234567890.123456789012,"amount_remaining":0.1000000000000000055,"status":"active"}]"#,
            "application/json",
        ))
        .mount(&harness.server)
        .await;

    let credits = harness.client.list_credits(&ListCreditsRequest::new("c1")).await.unwrap();

    assert_eq!(credits[0].amount.to_string(), "1234567890.123456789012");
    assert_eq!(credits[0].amount_remaining.to_string(), "0.1000000000000000055");
}

#[tokio::test]
async fn test_create_credit() {
    let harness = TestHarness::new().await;

    Mock::given(method("POST"))
        .and(path("/api/credits/"))
        .and(body_partial_json(json!({
            "customer_id": "c1",
            "amount": "10.00",
            "currency_code": "USD",
            "description": "Welcome credit"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(credit_json("cred_1")))
        .expect(1)
        .mount(&harness.server)
        .await;

    let request = CreateCreditRequest {
        description: Some("Welcome credit".to_string()),
        ..CreateCreditRequest::new("c1", Decimal::from_str("10.00").unwrap(), "USD")
    };
    let credit = harness.client.create_credit(&request).await.unwrap();
    assert_eq!(credit.credit_id.as_str(), "cred_1");
    assert_eq!(credit.status, CreditStatus::Active);
}

#[tokio::test]
async fn test_void_credit_sends_empty_object() {
    let harness = TestHarness::new().await;

    let mut voided = credit_json("cred_1");
    voided["status"] = json!("inactive");

    Mock::given(method("POST"))
        .and(path("/api/credits/cred_1/void/"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(voided))
        .expect(1)
        .mount(&harness.server)
        .await;

    let credit = harness.client.void_credit(&CreditId::new("cred_1")).await.unwrap();
    assert_eq!(credit.status, CreditStatus::Inactive);
}

#[tokio::test]
async fn test_update_credit() {
    let harness = TestHarness::new().await;

    Mock::given(method("POST"))
        .and(path("/api/credits/cred_1/update/"))
        .and(body_json(json!({"description": "Extended"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(credit_json("cred_1")))
        .expect(1)
        .mount(&harness.server)
        .await;

    let request = UpdateCreditRequest {
        description: Some("Extended".to_string()),
        ..UpdateCreditRequest::default()
    };
    harness
        .client
        .update_credit(&CreditId::new("cred_1"), &request)
        .await
        .unwrap();
}

// ============================================================================
// Invoices
// ============================================================================

#[tokio::test]
async fn test_list_invoices() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/api/invoices/"))
        .and(query_param("customer_id", "c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([invoice_json("inv_1")])))
        .expect(1)
        .mount(&harness.server)
        .await;

    let request = ListInvoicesRequest {
        customer_id: Some("c1".into()),
        payment_status: vec![InvoicePaymentStatus::Paid, InvoicePaymentStatus::Unpaid],
    };
    let invoices = harness.client.list_invoices(&request).await.unwrap();
    assert_eq!(invoices[0].payment_status, InvoiceStatus::Unpaid);

    let received = harness.received().await;
    assert_eq!(query_values(&received[0], "payment_status"), ["paid", "unpaid"]);
}

#[tokio::test]
async fn test_get_invoice_keeps_trailing_slash() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/api/invoices/inv_1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(invoice_json("inv_1")))
        .expect(1)
        .mount(&harness.server)
        .await;

    let invoice = harness.client.get_invoice(&InvoiceId::new("inv_1")).await.unwrap();
    assert_eq!(invoice.cost_due, Decimal::from_str("49.00").unwrap());
    assert_eq!(
        invoice.start_date,
        chrono::NaiveDate::from_ymd_opt(2023, 4, 1)
    );
}

#[tokio::test]
async fn test_get_invoice_pdf_url() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/api/invoices/inv_1/pdf_url/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"url": "https://files.example/inv_1.pdf"})),
        )
        .expect(1)
        .mount(&harness.server)
        .await;

    let pdf = harness
        .client
        .get_invoice_pdf_url(&InvoiceId::new("inv_1"))
        .await
        .unwrap();
    assert_eq!(pdf.url, "https://files.example/inv_1.pdf");
}

// ============================================================================
// Entitlements
// ============================================================================

#[tokio::test]
async fn test_feature_access_sends_one_entry_per_filter() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/api/feature_access/"))
        .and(query_param("customer_id", "c1"))
        .and(query_param("feature_id", "feat_sso"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access": true,
            "customer": {"customer_id": "c1"},
            "feature": {"feature_id": "feat_sso", "feature_name": "SSO"},
            "access_per_subscription": [{
                "access": true,
                "subscription": {
                    "start_date": "2023-04-01T00:00:00Z",
                    "end_date": null,
                    "plan": {"plan_id": "plan_1", "plan_name": "Basic", "version": 1},
                    "subscription_filters": [{"property_name": "region", "value": "eu"}]
                }
            }]
        })))
        .expect(1)
        .mount(&harness.server)
        .await;

    let filters = vec![
        SubscriptionFilter::new("region", "eu"),
        SubscriptionFilter::new("tier", "gold"),
    ];
    let request = GetFeatureAccessRequest {
        customer_id: "c1".into(),
        feature_id: "feat_sso".into(),
        subscription_filters: filters.clone(),
    };
    let access = harness.client.get_feature_access(&request).await.unwrap();

    assert!(access.access);
    assert_eq!(access.access_per_subscription.len(), 1);

    let received = harness.received().await;
    let sent = query_values(&received[0], "subscription_filters");
    assert_eq!(sent.len(), filters.len());
    let decoded: Vec<SubscriptionFilter> = sent
        .iter()
        .map(|raw| serde_json::from_str(raw).unwrap())
        .collect();
    assert_eq!(decoded, filters);
}

#[tokio::test]
async fn test_metric_access_without_filters() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/api/metric_access/"))
        .and(query_param("customer_id", "c1"))
        .and(query_param("metric_id", "met_calls"))
        .and(query_param_is_missing("subscription_filters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access": false,
            "customer": {"customer_id": "c1"},
            "metric": {"metric_id": "met_calls", "event_name": "api_call"},
            "access_per_subscription": [{
                "metric_free_limit": "100",
                "metric_total_limit": "1000",
                "metric_usage": "1000",
                "subscription": null
            }]
        })))
        .expect(1)
        .mount(&harness.server)
        .await;

    let request = GetMetricAccessRequest {
        customer_id: "c1".into(),
        metric_id: "met_calls".into(),
        subscription_filters: Vec::new(),
    };
    let access = harness.client.get_metric_access(&request).await.unwrap();

    assert!(!access.access);
    assert_eq!(
        access.access_per_subscription[0].remaining(),
        Some(Decimal::ZERO)
    );
}
