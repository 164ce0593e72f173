//! Billable metrics and features.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::de::null_default;
use crate::enums::{
    CategoricalFilterOperator, EventType, MetricAggregation, MetricGranularity, MetricType,
    NumericFilterOperator,
};
use crate::ids::{FeatureId, MetricId};

/// A metric that turns ingested events into billable quantities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillableMetric {
    /// Metric ID.
    pub metric_id: MetricId,
    /// Name of the events this metric aggregates.
    #[serde(default, deserialize_with = "null_default")]
    pub event_name: String,
    /// Event property the aggregation reads.
    #[serde(default)]
    pub property_name: Option<String>,
    /// Aggregation method.
    #[serde(default)]
    pub aggregation_type: Option<MetricAggregation>,
    /// Aggregation granularity.
    #[serde(default)]
    pub granularity: Option<MetricGranularity>,
    /// Delta or total, for gauge metrics.
    #[serde(default)]
    pub event_type: Option<EventType>,
    /// Metric type.
    #[serde(default)]
    pub metric_type: Option<MetricType>,
    /// Display name.
    #[serde(default)]
    pub metric_name: Option<String>,
    /// Numeric property filters.
    #[serde(default, deserialize_with = "null_default")]
    pub numeric_filters: Vec<NumericFilter>,
    /// Categorical property filters.
    #[serde(default, deserialize_with = "null_default")]
    pub categorical_filters: Vec<CategoricalFilter>,
    /// Whether the metric tracks cost rather than revenue.
    #[serde(default)]
    pub is_cost_metric: bool,
    /// SQL for custom metrics.
    #[serde(default)]
    pub custom_sql: Option<String>,
    /// Proration granularity.
    #[serde(default)]
    pub proration: Option<MetricGranularity>,
}

/// Restricts a metric to events whose numeric property satisfies a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericFilter {
    /// Event property compared.
    pub property_name: String,
    /// Comparison operator.
    pub operator: NumericFilterOperator,
    /// Right-hand side of the comparison.
    pub comparison_value: Decimal,
}

/// Restricts a metric to events whose property is (or is not) in a set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoricalFilter {
    /// Event property compared.
    pub property_name: String,
    /// Membership operator.
    pub operator: CategoricalFilterOperator,
    /// Allowed (or excluded) values.
    #[serde(default, deserialize_with = "null_default")]
    pub comparison_value: Vec<String>,
}

/// Metric reference embedded in entitlement results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricMeta {
    /// Metric ID.
    pub metric_id: MetricId,
    /// Event name.
    #[serde(default, deserialize_with = "null_default")]
    pub event_name: String,
    /// Display name.
    #[serde(default)]
    pub metric_name: Option<String>,
}

/// Feature reference embedded in plan versions and entitlement results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureMeta {
    /// Feature ID.
    pub feature_id: FeatureId,
    /// Display name.
    #[serde(default, deserialize_with = "null_default")]
    pub feature_name: String,
    /// Description.
    #[serde(default)]
    pub feature_description: Option<String>,
}
