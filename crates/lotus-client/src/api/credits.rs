//! Prepaid credit operations.

use chrono::{DateTime, Utc};
use lotus_core::{Credit, CreditId, CreditStatus, CustomerId, Decimal};
use serde::{Deserialize, Serialize};

use crate::client::LotusClient;
use crate::error::Result;
use crate::query::{Query, QueryParams};

/// Filters for [`LotusClient::list_credits`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCreditsRequest {
    /// Customer whose credits to list.
    pub customer_id: CustomerId,
    /// Only credits in this currency.
    pub currency_code: Option<String>,
    /// Effective after this time.
    pub effective_after: Option<DateTime<Utc>>,
    /// Effective before this time.
    pub effective_before: Option<DateTime<Utc>>,
    /// Expiring after this time.
    pub expires_after: Option<DateTime<Utc>>,
    /// Expiring before this time.
    pub expires_before: Option<DateTime<Utc>>,
    /// Issued after this time.
    pub issued_after: Option<DateTime<Utc>>,
    /// Issued before this time.
    pub issued_before: Option<DateTime<Utc>>,
    /// Only credits in these states.
    pub status: Vec<CreditStatus>,
}

impl ListCreditsRequest {
    /// List every credit of a customer.
    #[must_use]
    pub fn new(customer_id: impl Into<CustomerId>) -> Self {
        Self {
            customer_id: customer_id.into(),
            ..Self::default()
        }
    }
}

impl QueryParams for ListCreditsRequest {
    fn to_query(&self) -> Result<Query> {
        let mut query = Query::new();
        query
            .insert("customer_id", &self.customer_id)
            .insert_opt("currency_code", self.currency_code.as_ref())
            .insert_time("effective_after", self.effective_after)
            .insert_time("effective_before", self.effective_before)
            .insert_time("expires_after", self.expires_after)
            .insert_time("expires_before", self.expires_before)
            .insert_time("issued_after", self.issued_after)
            .insert_time("issued_before", self.issued_before)
            .extend("status", &self.status);
        Ok(query)
    }
}

/// Request body for [`LotusClient::create_credit`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCreditRequest {
    /// Amount granted.
    pub amount: Decimal,
    /// Currency of the credit.
    pub currency_code: String,
    /// Customer receiving the credit.
    pub customer_id: CustomerId,
    /// Amount the customer paid for it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_paid: Option<Decimal>,
    /// Currency of `amount_paid`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_paid_currency_code: Option<String>,
    /// When the credit becomes usable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_at: Option<DateTime<Utc>>,
    /// When the credit expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateCreditRequest {
    /// Grant `amount` in `currency_code` to a customer.
    #[must_use]
    pub fn new(
        customer_id: impl Into<CustomerId>,
        amount: Decimal,
        currency_code: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            currency_code: currency_code.into(),
            customer_id: customer_id.into(),
            amount_paid: None,
            amount_paid_currency_code: None,
            effective_at: None,
            expires_at: None,
            description: None,
        }
    }
}

/// Request body for [`LotusClient::update_credit`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCreditRequest {
    /// New expiry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of a void request. Encodes to `{}`.
#[derive(Debug, Serialize)]
struct VoidCreditRequest {}

impl LotusClient {
    /// List a customer's credits.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_credits(&self, request: &ListCreditsRequest) -> Result<Vec<Credit>> {
        let query = request.to_query()?;
        self.get(&["api", "credits", ""], Some(&query)).await
    }

    /// Grant a credit.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create_credit(&self, request: &CreateCreditRequest) -> Result<Credit> {
        self.post(&["api", "credits", ""], None, request).await
    }

    /// Void a credit so it can no longer be drawn down.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn void_credit(&self, credit_id: &CreditId) -> Result<Credit> {
        self.post(
            &["api", "credits", credit_id.as_str(), "void", ""],
            None,
            &VoidCreditRequest {},
        )
        .await
    }

    /// Change a credit's expiry or description.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn update_credit(
        &self,
        credit_id: &CreditId,
        request: &UpdateCreditRequest,
    ) -> Result<Credit> {
        self.post(
            &["api", "credits", credit_id.as_str(), "update", ""],
            None,
            request,
        )
        .await
    }
}
