//! Subscriptions and add-ons.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::Properties;
use crate::customer::CustomerMeta;
use crate::de::null_default;
use crate::enums::{AddonBillingFrequency, AddonType};
use crate::ids::{AddonId, AddonSubscriptionId, MetricId, SubscriptionId};
use crate::plan::PlanMeta;

/// A customer's subscription to a plan version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// Subscription ID.
    #[serde(default)]
    pub subscription_id: SubscriptionId,

    /// Subscribed customer.
    #[serde(default)]
    pub customer: Option<CustomerMeta>,

    /// Plan and version being billed.
    #[serde(default)]
    pub billing_plan: Option<PlanMeta>,

    /// Whether the subscription renews at the end of the period.
    #[serde(default)]
    pub auto_renew: bool,

    /// Whether this subscription counts as new business.
    #[serde(default)]
    pub is_new: bool,

    /// Start of the subscription.
    pub start_date: DateTime<Utc>,

    /// Scheduled end. `None` means no end is scheduled.
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,

    /// Initial units for components with fixed charges.
    #[serde(default, deserialize_with = "null_default")]
    pub component_fixed_charges_initial_units: Vec<ComponentFixedChargesInitialUnit>,

    /// Property filters that scope usage to this subscription.
    #[serde(default, deserialize_with = "null_default")]
    pub subscription_filters: Vec<SubscriptionFilter>,

    /// Free-form metadata.
    #[serde(default, deserialize_with = "null_default")]
    pub metadata: Properties,
}

impl Subscription {
    /// Whether the subscription has an end date at or before `at`.
    #[must_use]
    pub fn has_ended_at(&self, at: DateTime<Utc>) -> bool {
        self.end_date.is_some_and(|end| end <= at)
    }
}

/// A property filter scoping a subscription, e.g. `region = "eu"`.
///
/// A customer may hold several subscriptions to the same plan as long as
/// their filters differ.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionFilter {
    /// Event property.
    pub property_name: String,
    /// Required value.
    pub value: String,
}

impl SubscriptionFilter {
    /// Create a filter.
    #[must_use]
    pub fn new(property_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            value: value.into(),
        }
    }
}

/// Subscription reference embedded in entitlement results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionMeta {
    /// Start of the subscription.
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    /// End of the subscription.
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    /// Subscribed plan.
    #[serde(default)]
    pub plan: Option<PlanMeta>,
    /// Subscription filters.
    #[serde(default, deserialize_with = "null_default")]
    pub subscription_filters: Vec<SubscriptionFilter>,
}

/// Initial unit count for a fixed-charge component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentFixedChargesInitialUnit {
    /// Metric of the component.
    pub metric_id: MetricId,
    /// Units to start with.
    pub units: u64,
}

/// Add-on product reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonMeta {
    /// Add-on ID.
    pub addon_id: AddonId,
    /// Display name.
    #[serde(default, deserialize_with = "null_default")]
    pub addon_name: String,
    /// Pricing type.
    #[serde(default)]
    pub addon_type: Option<AddonType>,
    /// Billing frequency.
    #[serde(default)]
    pub billing_frequency: Option<AddonBillingFrequency>,
}

/// An add-on attached to a subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Addon {
    /// Add-on subscription ID.
    pub addon_subscription_id: AddonSubscriptionId,
    /// The add-on product.
    #[serde(default)]
    pub addon: Option<AddonMeta>,
    /// Customer the add-on bills.
    #[serde(default)]
    pub customer: Option<CustomerMeta>,
    /// Subscription the add-on is attached to.
    #[serde(default)]
    pub parent: Option<Box<Subscription>>,
    /// Start of the add-on.
    pub start_date: DateTime<Utc>,
    /// Scheduled end. `None` means no end is scheduled.
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    /// Whether the add-on renews with its parent.
    #[serde(default)]
    pub auto_renew: bool,
    /// Whether the add-on has been billed in full.
    #[serde(default)]
    pub fully_billed: bool,
    /// Free-form metadata.
    #[serde(default, deserialize_with = "null_default")]
    pub metadata: Properties,
}
