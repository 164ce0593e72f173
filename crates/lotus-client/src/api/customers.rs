//! Customer operations.

use lotus_core::{Address, Customer, CustomerId, Decimal, Properties};
use serde::{Deserialize, Serialize};

use crate::client::LotusClient;
use crate::error::Result;

/// Request body for [`LotusClient::create_customer`].
///
/// Every field is optional; unset fields are left out of the body and the
/// service applies its defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCustomerRequest {
    /// Customer ID. Generated by the service when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<CustomerId>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    /// ISO 4217 code of the default invoice currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_currency_code: Option<String>,
    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Payment provider to link, e.g. `stripe`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_provider: Option<String>,
    /// Customer ID at the payment provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_provider_id: Option<String>,
    /// Free-form properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
    /// Tax rate as a percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<Decimal>,
    /// Single address. Prefer `billing_address`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    /// Shipping address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
}

impl LotusClient {
    /// Create a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    /// A customer ID that is already taken yields an error for which
    /// [`is_duplicate`](crate::ClientError::is_duplicate) is true.
    pub async fn create_customer(&self, request: &CreateCustomerRequest) -> Result<Customer> {
        self.post(&["api", "customers", ""], None, request).await
    }

    /// Get a customer by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_customer(&self, customer_id: &CustomerId) -> Result<Customer> {
        self.get(&["api", "customers", customer_id.as_str()], None)
            .await
    }

    /// List all customers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_customers(&self) -> Result<Vec<Customer>> {
        self.get(&["api", "customers", ""], None).await
    }
}
