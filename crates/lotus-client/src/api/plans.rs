//! Plan lookups.

use lotus_core::{Plan, PlanDuration, PlanId, PlanVersionStatus, PlanVersionType};

use crate::client::LotusClient;
use crate::error::Result;
use crate::query::{Query, QueryParams};

/// Filters for [`LotusClient::list_plans`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPlansRequest {
    /// Only plans with this billing period.
    pub plan_duration: Option<PlanDuration>,
    /// Plans with any of these tags.
    pub include_tags: Vec<String>,
    /// Plans with none of these tags.
    pub exclude_tags: Vec<String>,
    /// Plans with all of these tags.
    pub include_tags_all: Vec<String>,
    /// Only versions priced in this currency.
    pub version_currency_code: Option<String>,
    /// Only public or only custom versions.
    pub version_custom_type: Option<PlanVersionType>,
    /// Only versions in these states.
    pub version_status: Vec<PlanVersionStatus>,
}

impl QueryParams for ListPlansRequest {
    fn to_query(&self) -> Result<Query> {
        let mut query = Query::new();
        query
            .insert_opt("plan_duration", self.plan_duration.as_ref())
            .insert_opt("version_currency_code", self.version_currency_code.as_ref())
            .insert_opt("version_custom_type", self.version_custom_type.as_ref())
            .extend("include_tags", &self.include_tags)
            .extend("exclude_tags", &self.exclude_tags)
            .extend("include_tags_all", &self.include_tags_all)
            .extend("version_status", &self.version_status);
        Ok(query)
    }
}

/// Plan ID and version filters for [`LotusClient::get_plan`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetPlanRequest {
    /// Plan to fetch.
    pub plan_id: PlanId,
    /// Only versions priced in this currency.
    pub version_currency_code: Option<String>,
    /// Only public or only custom versions.
    pub version_custom_type: Option<PlanVersionType>,
    /// Only versions in these states.
    pub version_status: Vec<PlanVersionStatus>,
}

impl GetPlanRequest {
    /// Fetch a plan with all of its versions.
    #[must_use]
    pub fn new(plan_id: impl Into<PlanId>) -> Self {
        Self {
            plan_id: plan_id.into(),
            ..Self::default()
        }
    }
}

impl QueryParams for GetPlanRequest {
    fn to_query(&self) -> Result<Query> {
        let mut query = Query::new();
        query
            .insert_opt("version_currency_code", self.version_currency_code.as_ref())
            .insert_opt("version_custom_type", self.version_custom_type.as_ref())
            .extend("version_status", &self.version_status);
        Ok(query)
    }
}

impl LotusClient {
    /// List plans.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_plans(&self, request: &ListPlansRequest) -> Result<Vec<Plan>> {
        let query = request.to_query()?;
        self.get(&["api", "plans", ""], Some(&query)).await
    }

    /// Get a plan by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_plan(&self, request: &GetPlanRequest) -> Result<Plan> {
        let query = request.to_query()?;
        self.get(&["api", "plans", request.plan_id.as_str()], Some(&query))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_list_request_has_no_keys() {
        assert!(ListPlansRequest::default().to_query().unwrap().is_empty());
    }

    #[test]
    fn list_request_encodes_tags_and_statuses() {
        let query = ListPlansRequest {
            plan_duration: Some(PlanDuration::Yearly),
            include_tags: vec!["b2b".into(), "eu".into()],
            version_custom_type: Some(PlanVersionType::PublicOnly),
            version_status: vec![PlanVersionStatus::Active, PlanVersionStatus::Grandfathered],
            ..ListPlansRequest::default()
        }
        .to_query()
        .unwrap();

        assert_eq!(query.get("plan_duration"), Some("yearly"));
        assert_eq!(query.get("version_custom_type"), Some("public_only"));
        assert_eq!(query.get_all("include_tags"), ["b2b", "eu"]);
        assert_eq!(query.get_all("version_status"), ["active", "grandfathered"]);
        assert!(!query.contains_key("exclude_tags"));
        assert!(!query.contains_key("version_currency_code"));
    }

    #[test]
    fn plan_id_is_not_a_query_key() {
        let query = GetPlanRequest::new("plan_1").to_query().unwrap();
        assert!(query.is_empty());
    }
}
