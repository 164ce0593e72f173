//! Feature and metric access checks.

use lotus_core::{
    CustomerId, FeatureEntitlement, FeatureId, MetricEntitlement, MetricId, SubscriptionFilter,
};

use crate::client::LotusClient;
use crate::error::Result;
use crate::query::{Query, QueryParams};

/// Query for [`LotusClient::get_feature_access`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetFeatureAccessRequest {
    /// Customer to check.
    pub customer_id: CustomerId,
    /// Feature to check.
    pub feature_id: FeatureId,
    /// Restrict the check to subscriptions with these filters.
    pub subscription_filters: Vec<SubscriptionFilter>,
}

impl QueryParams for GetFeatureAccessRequest {
    fn to_query(&self) -> Result<Query> {
        let mut query = Query::new();
        query
            .insert("customer_id", &self.customer_id)
            .insert("feature_id", &self.feature_id)
            .extend_json("subscription_filters", &self.subscription_filters)?;
        Ok(query)
    }
}

/// Query for [`LotusClient::get_metric_access`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetMetricAccessRequest {
    /// Customer to check.
    pub customer_id: CustomerId,
    /// Metric to check.
    pub metric_id: MetricId,
    /// Restrict the check to subscriptions with these filters.
    pub subscription_filters: Vec<SubscriptionFilter>,
}

impl QueryParams for GetMetricAccessRequest {
    fn to_query(&self) -> Result<Query> {
        let mut query = Query::new();
        query
            .insert("customer_id", &self.customer_id)
            .insert("metric_id", &self.metric_id)
            .extend_json("subscription_filters", &self.subscription_filters)?;
        Ok(query)
    }
}

impl LotusClient {
    /// Check whether a customer has access to a feature.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_feature_access(
        &self,
        request: &GetFeatureAccessRequest,
    ) -> Result<FeatureEntitlement> {
        let query = request.to_query()?;
        self.get(&["api", "feature_access", ""], Some(&query)).await
    }

    /// Check a customer's usage against a metered limit.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_metric_access(
        &self,
        request: &GetMetricAccessRequest,
    ) -> Result<MetricEntitlement> {
        let query = request.to_query()?;
        self.get(&["api", "metric_access", ""], Some(&query)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_keys_only_without_filters() {
        let query = GetMetricAccessRequest {
            customer_id: "c1".into(),
            metric_id: "m1".into(),
            subscription_filters: Vec::new(),
        }
        .to_query()
        .unwrap();

        assert_eq!(query.pairs(), vec![("customer_id", "c1"), ("metric_id", "m1")]);
    }

    #[test]
    fn filters_become_json_entries() {
        let query = GetFeatureAccessRequest {
            customer_id: "c1".into(),
            feature_id: "f1".into(),
            subscription_filters: vec![SubscriptionFilter::new("region", "eu")],
        }
        .to_query()
        .unwrap();

        assert_eq!(
            query.get_all("subscription_filters"),
            [r#"{"property_name":"region","value":"eu"}"#.to_string()]
        );
    }
}
