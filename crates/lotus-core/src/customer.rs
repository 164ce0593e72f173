//! Customer types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::{Address, Currency, Properties};
use crate::de::null_default;
use crate::ids::CustomerId;
use crate::subscription::Subscription;

/// A customer as returned by the service.
///
/// This is a point-in-time snapshot; the service owns the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Customer ID.
    pub customer_id: CustomerId,

    /// Display name.
    #[serde(default)]
    pub customer_name: Option<String>,

    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,

    /// Currency invoices are issued in by default.
    #[serde(default)]
    pub default_currency: Option<Currency>,

    /// Outstanding amount across unpaid invoices.
    #[serde(default, deserialize_with = "null_default")]
    pub total_amount_due: Decimal,

    /// Tax rate applied to this customer's invoices, as a percentage.
    #[serde(default)]
    pub tax_rate: Option<Decimal>,

    /// IANA timezone name.
    #[serde(default)]
    pub timezone: Option<String>,

    /// Whether a payment method is on file with the payment provider.
    #[serde(default)]
    pub has_payment_method: bool,

    /// Linked payment provider.
    #[serde(default)]
    pub payment_provider: Option<String>,

    /// Customer ID at the payment provider.
    #[serde(default)]
    pub payment_provider_id: Option<String>,

    /// Single address from older API versions. Superseded by `billing_address`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    /// Billing address.
    #[serde(default)]
    pub billing_address: Option<Address>,

    /// Shipping address.
    #[serde(default)]
    pub shipping_address: Option<Address>,

    /// Subscriptions attached to this customer.
    #[serde(default, deserialize_with = "null_default")]
    pub subscriptions: Vec<Subscription>,

    /// Invoice summaries. Shape varies between service versions.
    #[serde(default, deserialize_with = "null_default")]
    pub invoices: Vec<serde_json::Value>,

    /// Integration links. Shape varies between service versions.
    #[serde(default)]
    pub integrations: serde_json::Value,

    /// Tax providers in priority order.
    #[serde(default, deserialize_with = "null_default")]
    pub tax_providers: Vec<serde_json::Value>,

    /// Free-form customer properties.
    #[serde(default, deserialize_with = "null_default")]
    pub properties: Properties,
}

/// Customer reference embedded in other resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerMeta {
    /// Customer ID.
    pub customer_id: CustomerId,
    /// Display name.
    #[serde(default)]
    pub customer_name: Option<String>,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
}

/// Customer reference with billing address, as printed on invoices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerAddressMeta {
    /// Customer identity.
    #[serde(flatten)]
    pub customer: CustomerMeta,
    /// Billing address.
    #[serde(default)]
    pub billing_address: Option<Address>,
}

/// The issuing organization, as printed on invoices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerAddressMeta {
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Organization name.
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    /// Contact phone.
    #[serde(default)]
    pub phone: Option<String>,
    /// Postal address.
    #[serde(default)]
    pub address: Option<Address>,
}
