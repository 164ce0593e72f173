//! Subscription and add-on operations.

use chrono::{DateTime, Utc};
use lotus_core::{
    Addon, AddonId, ComponentFixedChargesInitialUnit, CustomerId, FlatFeeBehavior,
    InvoicingBehavior, PlanId, Properties, Subscription, SubscriptionFilter, SubscriptionId,
    SubscriptionStatus, UsageBehavior, UsageBillingBehavior,
};
use serde::{Deserialize, Serialize};

use crate::client::LotusClient;
use crate::error::Result;
use crate::query::{Query, QueryParams};

/// Request body for [`LotusClient::create_subscription`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSubscriptionRequest {
    /// Customer to subscribe.
    pub customer_id: CustomerId,
    /// Plan to subscribe to.
    pub plan_id: PlanId,
    /// Renew at the end of each period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_renew: Option<bool>,
    /// Count the subscription as new business.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
    /// Start of the subscription.
    pub start_date: DateTime<Utc>,
    /// Scheduled end. Omit for an open-ended subscription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    /// Initial units for fixed-charge components.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub component_fixed_charges_initial_units: Vec<ComponentFixedChargesInitialUnit>,
    /// Property filters scoping the subscription's usage.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subscription_filters: Vec<SubscriptionFilter>,
    /// Free-form metadata.
    #[serde(default, skip_serializing_if = "Properties::is_empty")]
    pub metadata: Properties,
}

impl CreateSubscriptionRequest {
    /// Subscribe a customer to a plan from `start_date` on.
    #[must_use]
    pub fn new(
        customer_id: impl Into<CustomerId>,
        plan_id: impl Into<PlanId>,
        start_date: DateTime<Utc>,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            plan_id: plan_id.into(),
            auto_renew: None,
            is_new: None,
            start_date,
            end_date: None,
            component_fixed_charges_initial_units: Vec::new(),
            subscription_filters: Vec::new(),
            metadata: Properties::new(),
        }
    }
}

/// Filters for [`LotusClient::list_subscriptions`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSubscriptionsRequest {
    /// Customer whose subscriptions to list.
    pub customer_id: CustomerId,
    /// Only subscriptions to this plan.
    pub plan_id: Option<PlanId>,
    /// Only subscriptions active after this time.
    pub range_start: Option<DateTime<Utc>>,
    /// Only subscriptions active before this time.
    pub range_end: Option<DateTime<Utc>>,
    /// Only subscriptions in these states.
    pub status: Vec<SubscriptionStatus>,
    /// Only subscriptions with these filters.
    pub subscription_filters: Vec<SubscriptionFilter>,
}

impl ListSubscriptionsRequest {
    /// List every subscription of a customer.
    #[must_use]
    pub fn new(customer_id: impl Into<CustomerId>) -> Self {
        Self {
            customer_id: customer_id.into(),
            ..Self::default()
        }
    }
}

impl QueryParams for ListSubscriptionsRequest {
    fn to_query(&self) -> Result<Query> {
        let mut query = Query::new();
        query
            .insert("customer_id", &self.customer_id)
            .insert_opt("plan_id", self.plan_id.as_ref())
            .insert_time("range_start", self.range_start)
            .insert_time("range_end", self.range_end)
            .extend("status", &self.status)
            .extend_json("subscription_filters", &self.subscription_filters)?;
        Ok(query)
    }
}

/// Request body for [`LotusClient::update_subscription`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateSubscriptionRequest {
    /// New scheduled end.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    /// Stop renewing at the end of the current period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turn_off_auto_renew: Option<bool>,
    /// Replacement metadata.
    #[serde(default, skip_serializing_if = "Properties::is_empty")]
    pub metadata: Properties,
}

/// Request body for [`LotusClient::switch_subscription_plan`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchSubscriptionPlanRequest {
    /// Plan to switch to.
    pub switch_plan_id: PlanId,
    /// When to invoice the switch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoicing_behavior: Option<InvoicingBehavior>,
    /// What happens to usage accumulated so far.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_behavior: Option<UsageBehavior>,
    /// Initial units for fixed-charge components of the new plan.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub component_fixed_charges_initial_units: Vec<ComponentFixedChargesInitialUnit>,
    /// Renew the new subscription at the end of each period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_renew: Option<bool>,
    /// Metadata for the new subscription.
    #[serde(default, skip_serializing_if = "Properties::is_empty")]
    pub metadata: Properties,
}

impl SwitchSubscriptionPlanRequest {
    /// Switch to `plan_id` with the service's default behaviors.
    #[must_use]
    pub fn new(plan_id: impl Into<PlanId>) -> Self {
        Self {
            switch_plan_id: plan_id.into(),
            invoicing_behavior: None,
            usage_behavior: None,
            component_fixed_charges_initial_units: Vec::new(),
            auto_renew: None,
            metadata: Properties::new(),
        }
    }
}

/// Request body for [`LotusClient::cancel_subscription`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelSubscriptionRequest {
    /// When to invoice the cancellation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoicing_behavior: Option<InvoicingBehavior>,
    /// Whether unbilled usage is billed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_behavior: Option<UsageBillingBehavior>,
    /// How the flat fee is settled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_fee_behavior: Option<FlatFeeBehavior>,
}

/// Request body for [`LotusClient::attach_addon`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachAddonRequest {
    /// Add-on to attach.
    pub addon_id: AddonId,
    /// Quantity. The service assumes one when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

/// Request body for [`LotusClient::cancel_addon`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelAddonRequest {
    /// When to invoice the cancellation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoicing_behavior: Option<InvoicingBehavior>,
    /// Whether unbilled usage is billed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_behavior: Option<UsageBillingBehavior>,
    /// How the flat fee is settled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_fee_behavior: Option<FlatFeeBehavior>,
}

impl LotusClient {
    /// Subscribe a customer to a plan.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create_subscription(
        &self,
        request: &CreateSubscriptionRequest,
    ) -> Result<Subscription> {
        self.post(&["api", "subscriptions", ""], None, request).await
    }

    /// List a customer's subscriptions.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_subscriptions(
        &self,
        request: &ListSubscriptionsRequest,
    ) -> Result<Vec<Subscription>> {
        let query = request.to_query()?;
        self.get(&["api", "subscriptions", ""], Some(&query)).await
    }

    /// Change a subscription's end date, renewal, or metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn update_subscription(
        &self,
        subscription_id: &SubscriptionId,
        request: &UpdateSubscriptionRequest,
    ) -> Result<Subscription> {
        self.post(
            &["api", "subscriptions", subscription_id.as_str(), "update", ""],
            None,
            request,
        )
        .await
    }

    /// Move a subscription to another plan.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn switch_subscription_plan(
        &self,
        subscription_id: &SubscriptionId,
        request: &SwitchSubscriptionPlanRequest,
    ) -> Result<Subscription> {
        self.post(
            &["api", "subscriptions", subscription_id.as_str(), "switch_plan", ""],
            None,
            request,
        )
        .await
    }

    /// Cancel a subscription.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    /// Cancelling an already ended subscription yields an error for which
    /// [`is_invalid_state`](crate::ClientError::is_invalid_state) is true.
    pub async fn cancel_subscription(
        &self,
        subscription_id: &SubscriptionId,
        request: &CancelSubscriptionRequest,
    ) -> Result<Subscription> {
        self.post(
            &["api", "subscriptions", subscription_id.as_str(), "cancel", ""],
            None,
            request,
        )
        .await
    }

    /// Attach an add-on to a subscription.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn attach_addon(
        &self,
        subscription_id: &SubscriptionId,
        request: &AttachAddonRequest,
    ) -> Result<Addon> {
        self.post(
            &["api", "subscriptions", subscription_id.as_str(), "addons", "attach", ""],
            None,
            request,
        )
        .await
    }

    /// Cancel an add-on attached to a subscription.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn cancel_addon(
        &self,
        subscription_id: &SubscriptionId,
        addon_id: &AddonId,
        request: &CancelAddonRequest,
    ) -> Result<Addon> {
        self.post(
            &[
                "api",
                "subscriptions",
                subscription_id.as_str(),
                "addons",
                addon_id.as_str(),
                "cancel",
                "",
            ],
            None,
            request,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn list_request_with_customer_only() {
        let query = ListSubscriptionsRequest::new("c1").to_query().unwrap();
        assert_eq!(query.pairs(), vec![("customer_id", "c1")]);
    }

    #[test]
    fn list_request_encodes_every_filter() {
        let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let query = ListSubscriptionsRequest {
            plan_id: Some("plan_1".into()),
            range_start: Some(start),
            status: vec![SubscriptionStatus::Active, SubscriptionStatus::NotStarted],
            subscription_filters: vec![
                SubscriptionFilter::new("region", "eu"),
                SubscriptionFilter::new("seat", "a"),
            ],
            ..ListSubscriptionsRequest::new("c1")
        }
        .to_query()
        .unwrap();

        assert_eq!(query.get("plan_id"), Some("plan_1"));
        assert_eq!(query.get("range_start"), Some("2023-01-01T00:00:00Z"));
        assert!(!query.contains_key("range_end"));
        assert_eq!(query.get_all("status"), ["active", "not_started"]);
        assert_eq!(query.get_all("subscription_filters").len(), 2);
    }

    #[test]
    fn create_request_omits_unset_fields() {
        let start = Utc.with_ymd_and_hms(2023, 3, 1, 0, 0, 0).unwrap();
        let json = serde_json::to_value(CreateSubscriptionRequest::new("c1", "plan_1", start)).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 3);
        assert_eq!(json["start_date"], "2023-03-01T00:00:00Z");
        assert!(object.get("end_date").is_none());
    }

    #[test]
    fn cancel_request_sends_usage_billing_behavior_as_usage_behavior() {
        let request = CancelSubscriptionRequest {
            usage_behavior: Some(UsageBillingBehavior::BillNone),
            flat_fee_behavior: Some(FlatFeeBehavior::ChargeProrated),
            ..CancelSubscriptionRequest::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["usage_behavior"], "bill_none");
        assert_eq!(json["flat_fee_behavior"], "charge_prorated");
        assert!(json.get("invoicing_behavior").is_none());
    }
}
