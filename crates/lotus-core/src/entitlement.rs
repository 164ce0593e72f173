//! Access checks for features and metered limits.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::customer::CustomerMeta;
use crate::de::null_default;
use crate::metric::{FeatureMeta, MetricMeta};
use crate::subscription::SubscriptionMeta;

/// Whether a customer may use a feature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureEntitlement {
    /// Overall decision.
    pub access: bool,
    /// Customer checked.
    #[serde(default)]
    pub customer: Option<CustomerMeta>,
    /// Feature checked.
    #[serde(default)]
    pub feature: Option<FeatureMeta>,
    /// Decision per subscription.
    #[serde(default, deserialize_with = "null_default")]
    pub access_per_subscription: Vec<FeatureSubscriptionAccess>,
}

/// Feature access granted by one subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSubscriptionAccess {
    /// Decision for this subscription.
    pub access: bool,
    /// The subscription.
    #[serde(default)]
    pub subscription: Option<SubscriptionMeta>,
}

/// Whether a customer is still within a metered limit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricEntitlement {
    /// Overall decision.
    pub access: bool,
    /// Customer checked.
    #[serde(default)]
    pub customer: Option<CustomerMeta>,
    /// Metric checked.
    #[serde(default)]
    pub metric: Option<MetricMeta>,
    /// Limits and usage per subscription.
    #[serde(default, deserialize_with = "null_default")]
    pub access_per_subscription: Vec<MetricSubscriptionAccess>,
}

/// Limits and usage of a metric under one subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricSubscriptionAccess {
    /// Free units. `None` when the plan sets no free tier.
    #[serde(default)]
    pub metric_free_limit: Option<Decimal>,
    /// Hard cap. `None` when usage is unlimited.
    #[serde(default)]
    pub metric_total_limit: Option<Decimal>,
    /// Usage so far in the current period.
    #[serde(default, deserialize_with = "null_default")]
    pub metric_usage: Decimal,
    /// The subscription.
    #[serde(default)]
    pub subscription: Option<SubscriptionMeta>,
}

impl MetricSubscriptionAccess {
    /// Units left before the total limit, or `None` when unlimited.
    #[must_use]
    pub fn remaining(&self) -> Option<Decimal> {
        self.metric_total_limit
            .map(|limit| (limit - self.metric_usage).max(Decimal::ZERO))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn decodes_metric_entitlement() {
        let ent: MetricEntitlement = serde_json::from_str(
            r#"{
                "access": true,
                "customer": {"customer_id": "c1"},
                "metric": {"metric_id": "m1", "event_name": "api_call", "metric_name": "API calls"},
                "access_per_subscription": [{
                    "metric_free_limit": "100",
                    "metric_total_limit": 1000,
                    "metric_usage": "250.5",
                    "subscription": {"start_date": "2023-01-01T00:00:00Z", "end_date": null,
                                     "plan": {"plan_id": "p1", "plan_name": "Basic", "version": 1},
                                     "subscription_filters": []}
                }]
            }"#,
        )
        .unwrap();

        let access = &ent.access_per_subscription[0];
        assert_eq!(access.metric_total_limit, Some(Decimal::from(1000)));
        assert_eq!(access.remaining(), Some(Decimal::from_str("749.5").unwrap()));
    }

    #[test]
    fn numeric_limits_keep_every_digit() {
        let access: MetricSubscriptionAccess = serde_json::from_str(
            r#"{"metric_total_limit":12345678901234.56789,"metric_usage":0.30000000000000001}"#,
        )
        .unwrap();

        assert_eq!(
            access.metric_total_limit.unwrap().to_string(),
            "12345678901234.56789"
        );
        assert_eq!(access.metric_usage.to_string(), "0.30000000000000001");
        assert_ne!(access.metric_usage, Decimal::from_str("0.3").unwrap());
    }

    #[test]
    fn unlimited_metric_has_no_remaining() {
        let access: MetricSubscriptionAccess =
            serde_json::from_str(r#"{"metric_free_limit":null,"metric_total_limit":null,"metric_usage":"3"}"#)
                .unwrap();
        assert_eq!(access.remaining(), None);
    }

    #[test]
    fn usage_over_limit_leaves_nothing() {
        let access = MetricSubscriptionAccess {
            metric_total_limit: Some(Decimal::from(10)),
            metric_usage: Decimal::from(12),
            ..MetricSubscriptionAccess::default()
        };
        assert_eq!(access.remaining(), Some(Decimal::ZERO));
    }

    #[test]
    fn feature_entitlement_tolerates_null_subscriptions() {
        let ent: FeatureEntitlement =
            serde_json::from_str(r#"{"access":false,"feature":{"feature_id":"f1","feature_name":"SSO"},"access_per_subscription":null}"#)
                .unwrap();
        assert!(!ent.access);
        assert!(ent.access_per_subscription.is_empty());
    }
}
