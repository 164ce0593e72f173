//! Invoices.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::{Currency, Properties};
use crate::customer::{CustomerAddressMeta, SellerAddressMeta};
use crate::de::null_default;
use crate::enums::{InvoiceChargeTiming, InvoiceStatus, PaymentProcessor, PriceAdjustmentType};
use crate::ids::InvoiceId;
use crate::plan::PlanMeta;
use crate::subscription::SubscriptionFilter;

/// An invoice issued to a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice ID.
    pub invoice_id: InvoiceId,
    /// Human-facing invoice number.
    #[serde(default, deserialize_with = "null_default")]
    pub invoice_number: String,
    /// Billed customer with billing address.
    #[serde(default)]
    pub customer: Option<CustomerAddressMeta>,
    /// Invoice currency.
    #[serde(default)]
    pub currency: Option<Currency>,
    /// Total before credits.
    #[serde(default, deserialize_with = "null_default")]
    pub amount: Decimal,
    /// Amount still owed after credits.
    #[serde(default, deserialize_with = "null_default")]
    pub cost_due: Decimal,
    /// Issue time.
    #[serde(default)]
    pub issue_date: Option<DateTime<Utc>>,
    /// Due time.
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    /// First day of the billed period.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Last day of the billed period.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Payment object ID at the payment processor.
    #[serde(default)]
    pub external_payment_obj_id: Option<String>,
    /// Payment object status at the payment processor.
    #[serde(default)]
    pub external_payment_obj_status: Option<String>,
    /// Payment processor holding the payment object.
    #[serde(default)]
    pub external_payment_obj_type: Option<PaymentProcessor>,
    /// Reference to the rendered PDF.
    #[serde(default)]
    pub invoice_pdf: Option<String>,
    /// Line items.
    #[serde(default, deserialize_with = "null_default")]
    pub line_items: Vec<InvoiceItem>,
    /// Issuing organization.
    #[serde(default)]
    pub seller: Option<SellerAddressMeta>,
    /// Payment status.
    pub payment_status: InvoiceStatus,
}

/// One line of an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    /// Description of the charge.
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    /// Plan the charge comes from.
    #[serde(default)]
    pub plan: Option<PlanMeta>,
    /// Billed quantity.
    #[serde(default)]
    pub quantity: Option<Decimal>,
    /// Amount before adjustments.
    #[serde(default, deserialize_with = "null_default")]
    pub base: Decimal,
    /// Amount after adjustments.
    #[serde(default, deserialize_with = "null_default")]
    pub amount: Decimal,
    /// Adjustments applied to `base`.
    #[serde(default, deserialize_with = "null_default")]
    pub adjustments: Vec<InvoiceAdjustment>,
    /// Subtotal.
    #[serde(default, deserialize_with = "null_default")]
    pub subtotal: Decimal,
    /// When the charge was billed relative to the period.
    #[serde(default)]
    pub billing_type: Option<InvoiceChargeTiming>,
    /// Subscription filters of the billed subscription.
    #[serde(default, deserialize_with = "null_default")]
    pub subscription_filters: Vec<SubscriptionFilter>,
    /// Start of the charged period.
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    /// End of the charged period.
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    /// Free-form metadata.
    #[serde(default, deserialize_with = "null_default")]
    pub metadata: Properties,
}

/// An adjustment applied to an invoice line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceAdjustment {
    /// Ledger account.
    #[serde(default, deserialize_with = "null_default")]
    pub account: String,
    /// Kind of adjustment.
    pub adjustment_type: PriceAdjustmentType,
    /// Adjustment amount.
    pub amount: Decimal,
}

/// Location of a rendered invoice PDF.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoicePdfUrl {
    /// Download URL.
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn decodes_invoice_with_calendar_dates() {
        let invoice: Invoice = serde_json::from_str(
            r#"{
                "invoice_id": "inv_1",
                "invoice_number": "000042",
                "customer": {"customer_id": "c1", "customer_name": "Acme", "email": null,
                             "billing_address": {"city": "Austin", "country": "US", "line1": "1 Main", "postal_code": "78701"}},
                "currency": {"code": "USD", "name": "US Dollar", "symbol": "$"},
                "amount": "105.25",
                "cost_due": "5.25",
                "issue_date": "2024-02-04T00:00:00Z",
                "due_date": null,
                "start_date": "2024-01-04",
                "end_date": "2024-02-03",
                "external_payment_obj_id": null,
                "external_payment_obj_status": null,
                "external_payment_obj_type": "stripe",
                "invoice_pdf": null,
                "line_items": [{
                    "name": "API calls",
                    "plan": {"plan_id": "plan_1", "plan_name": "Basic", "version": 1},
                    "quantity": "1500",
                    "base": "5.00",
                    "amount": "5.25",
                    "adjustments": [{"account": "tax", "adjustment_type": "fixed", "amount": "0.25"}],
                    "subtotal": "5.25",
                    "billing_type": "in_arrears",
                    "subscription_filters": [],
                    "start_date": "2024-01-04T00:00:00Z",
                    "end_date": "2024-02-03T23:59:59Z",
                    "metadata": null
                }],
                "seller": {"name": "Lotus Org", "email": "ops@lotus.example", "phone": null, "address": null},
                "payment_status": "unpaid"
            }"#,
        )
        .unwrap();

        assert_eq!(invoice.start_date, NaiveDate::from_ymd_opt(2024, 1, 4));
        assert_eq!(invoice.end_date, NaiveDate::from_ymd_opt(2024, 2, 3));
        assert_eq!(invoice.external_payment_obj_type, Some(PaymentProcessor::Stripe));
        assert_eq!(invoice.payment_status, InvoiceStatus::Unpaid);

        let item = &invoice.line_items[0];
        assert_eq!(item.billing_type, Some(InvoiceChargeTiming::InArrears));
        assert_eq!(item.adjustments[0].adjustment_type, PriceAdjustmentType::Fixed);
        assert_eq!(item.quantity, Some(Decimal::from(1500)));
        assert_eq!(item.amount, Decimal::from_str("5.25").unwrap());
        assert_eq!(
            invoice.customer.unwrap().billing_address.unwrap().city,
            "Austin"
        );
    }
}
