//! Plans, plan versions, and their pricing.
//!
//! A [`Plan`] is a stable identity with an ordered list of [`Version`]s. Each
//! version carries the actual pricing: usage-based [`PricingComponent`]s with
//! tiered prices, flat [`RecurringCharge`]s, and an optional
//! [`PriceAdjustment`].

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::Currency;
use crate::customer::CustomerMeta;
use crate::de::null_default;
use crate::enums::{
    BatchRoundingType, InvoiceChargeTiming, PlanDuration, PlanStatus, PlanVersionStatus,
    PriceAdjustmentType, PriceTierType, UsageBillingFrequency,
};
use crate::ids::PlanId;
use crate::metric::{BillableMetric, FeatureMeta};

/// A billing plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Plan ID.
    pub plan_id: PlanId,
    /// Display name.
    #[serde(default, deserialize_with = "null_default")]
    pub plan_name: String,
    /// Billing period.
    #[serde(default)]
    pub plan_duration: Option<PlanDuration>,
    /// Description.
    #[serde(default)]
    pub plan_description: Option<String>,
    /// Links to the same plan in external systems.
    #[serde(default, deserialize_with = "null_default")]
    pub external_links: Vec<ExternalLink>,
    /// Number of versions.
    #[serde(default)]
    pub num_versions: u32,
    /// Version number currently offered to new subscribers.
    #[serde(default)]
    pub active_version: u32,
    /// Number of running subscriptions across all versions.
    #[serde(default)]
    pub active_subscriptions: u32,
    /// Tags.
    #[serde(default, deserialize_with = "null_default")]
    pub tags: Vec<String>,
    /// Versions, oldest first.
    #[serde(default, deserialize_with = "null_default")]
    pub versions: Vec<Version>,
    /// Plan this one was derived from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_plan: Option<Box<Plan>>,
    /// Customer this plan was built for, if it is a custom plan.
    #[serde(default)]
    pub target_customer: Option<CustomerMeta>,
    /// Version shown in listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_version: Option<Box<Version>>,
    /// Plan status. Not reported by every service version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PlanStatus>,
}

impl Plan {
    /// Find a version by its version number.
    #[must_use]
    pub fn version(&self, number: u32) -> Option<&Version> {
        self.versions.iter().find(|v| v.version == number)
    }

    /// The version currently offered to new subscribers, if listed.
    #[must_use]
    pub fn active(&self) -> Option<&Version> {
        self.version(self.active_version)
    }
}

/// Plan reference embedded in subscriptions and invoices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanMeta {
    /// Plan ID.
    pub plan_id: PlanId,
    /// Display name.
    #[serde(default, deserialize_with = "null_default")]
    pub plan_name: String,
    /// Version number.
    #[serde(default)]
    pub version: u32,
    /// Version ID.
    #[serde(default)]
    pub version_id: Option<String>,
}

/// A link to the plan in an external system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLink {
    /// External system, e.g. `stripe`.
    pub source: String,
    /// Plan ID in the external system.
    pub external_plan_id: String,
}

/// One version of a plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Version {
    /// Version number.
    pub version: u32,
    /// Plan display name.
    #[serde(default, deserialize_with = "null_default")]
    pub plan_name: String,
    /// Localized display name.
    #[serde(default)]
    pub localized_name: Option<String>,
    /// When the version became available.
    #[serde(default)]
    pub active_from: Option<DateTime<Utc>>,
    /// When the version stops being available.
    #[serde(default)]
    pub active_to: Option<DateTime<Utc>>,
    /// Creation time.
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Pricing currency.
    #[serde(default)]
    pub currency: Option<Currency>,
    /// Features granted by this version.
    #[serde(default, deserialize_with = "null_default")]
    pub features: Vec<FeatureMeta>,
    /// Flat recurring charges.
    #[serde(default, deserialize_with = "null_default")]
    pub recurring_charges: Vec<RecurringCharge>,
    /// Usage-based pricing components.
    #[serde(default, deserialize_with = "null_default")]
    pub components: Vec<PricingComponent>,
    /// Discount or surcharge applied to the whole version.
    #[serde(default)]
    pub price_adjustment: Option<PriceAdjustment>,
    /// Customers this version is restricted to. Empty for public versions.
    #[serde(default, deserialize_with = "null_default")]
    pub target_customers: Vec<CustomerMeta>,
    /// How often usage is billed.
    #[serde(default)]
    pub usage_billing_frequency: Option<UsageBillingFrequency>,
    /// When the flat fee is billed.
    #[serde(default)]
    pub flat_fee_billing_type: Option<InvoiceChargeTiming>,
    /// Flat rate.
    #[serde(default)]
    pub flat_rate: Option<Decimal>,
    /// Lifecycle status.
    #[serde(default)]
    pub status: Option<PlanVersionStatus>,
}

/// A price adjustment on a plan version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceAdjustment {
    /// Display name.
    #[serde(default)]
    pub price_adjustment_name: Option<String>,
    /// Description.
    #[serde(default)]
    pub price_adjustment_description: Option<String>,
    /// Kind of adjustment.
    pub price_adjustment_type: PriceAdjustmentType,
    /// Percentage or amount, depending on the type.
    pub price_adjustment_amount: Decimal,
}

/// A range-based price band inside a pricing component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTier {
    /// Tier type.
    #[serde(rename = "type")]
    pub tier_type: PriceTierType,
    /// First unit of the band.
    pub range_start: Decimal,
    /// Last unit of the band. `None` for an unbounded top tier.
    #[serde(default)]
    pub range_end: Option<Decimal>,
    /// Price of one batch (or of the whole band for flat tiers).
    #[serde(default)]
    pub cost_per_batch: Option<Decimal>,
    /// Units per batch.
    #[serde(default)]
    pub metric_units_per_batch: Option<Decimal>,
    /// Rounding for partial batches.
    #[serde(default)]
    pub batch_rounding_type: Option<BatchRoundingType>,
}

/// Units bought in advance for a pricing component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepaidCharge {
    /// Prepaid units.
    #[serde(default)]
    pub units: Option<Decimal>,
    /// How the prepaid units are charged.
    #[serde(default)]
    pub charge_behavior: Option<String>,
}

/// Usage-based pricing for one billable metric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingComponent {
    /// Metric being priced.
    #[serde(default)]
    pub billable_metric: Option<BillableMetric>,
    /// Price bands, ordered by `range_start`.
    #[serde(default, deserialize_with = "null_default")]
    pub tiers: Vec<PricingTier>,
    /// Pricing currency.
    #[serde(default)]
    pub pricing_unit: Option<Currency>,
    /// Invoicing interval unit.
    #[serde(default)]
    pub invoicing_interval_unit: Option<String>,
    /// Invoicing interval count.
    #[serde(default)]
    pub invoicing_interval_count: Option<u32>,
    /// Usage reset interval unit.
    #[serde(default)]
    pub reset_interval_unit: Option<String>,
    /// Usage reset interval count.
    #[serde(default)]
    pub reset_interval_count: Option<u32>,
    /// Prepaid units.
    #[serde(default)]
    pub prepaid_charge: Option<PrepaidCharge>,
}

/// A flat charge repeated every billing period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringCharge {
    /// Display name.
    pub name: String,
    /// When the charge is invoiced.
    #[serde(default)]
    pub charge_timing: Option<InvoiceChargeTiming>,
    /// How partial periods are charged.
    #[serde(default)]
    pub charge_behavior: Option<String>,
    /// Amount per period.
    pub amount: Decimal,
    /// Pricing currency.
    #[serde(default)]
    pub pricing_unit: Option<Currency>,
    /// Invoicing interval unit.
    #[serde(default)]
    pub invoicing_interval_unit: Option<String>,
    /// Invoicing interval count.
    #[serde(default)]
    pub invoicing_interval_count: Option<u32>,
    /// Reset interval unit.
    #[serde(default)]
    pub reset_interval_unit: Option<String>,
    /// Reset interval count.
    #[serde(default)]
    pub reset_interval_count: Option<u32>,
}
