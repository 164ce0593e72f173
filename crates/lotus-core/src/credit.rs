//! Prepaid credits and their draw-downs.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::Currency;
use crate::customer::CustomerMeta;
use crate::de::null_default;
use crate::enums::CreditStatus;
use crate::ids::CreditId;

/// A prepaid credit balance granted to a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credit {
    /// Credit ID.
    pub credit_id: CreditId,
    /// Amount granted.
    pub amount: Decimal,
    /// Amount the customer paid for the credit.
    #[serde(default, deserialize_with = "null_default")]
    pub amount_paid: Decimal,
    /// Amount still available.
    #[serde(default, deserialize_with = "null_default")]
    pub amount_remaining: Decimal,
    /// Currency of `amount_paid`.
    #[serde(default)]
    pub amount_paid_currency: Option<Currency>,
    /// Currency of the credit.
    #[serde(default)]
    pub currency: Option<Currency>,
    /// Customer the credit belongs to.
    #[serde(default)]
    pub customer: Option<CustomerMeta>,
    /// Consumption recorded against the credit, oldest first.
    #[serde(default, deserialize_with = "null_default")]
    pub drawdowns: Vec<CreditDrawDown>,
    /// When the credit becomes usable.
    #[serde(default)]
    pub effective_at: Option<DateTime<Utc>>,
    /// When the credit expires.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Status.
    pub status: CreditStatus,
}

impl Credit {
    /// Sum of all recorded draw-downs.
    #[must_use]
    pub fn drawn_down(&self) -> Decimal {
        self.drawdowns.iter().map(|d| d.amount).sum()
    }
}

/// An amount consumed from a credit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditDrawDown {
    /// Credit the amount was taken from.
    pub credit_id: CreditId,
    /// Amount consumed.
    pub amount: Decimal,
    /// When it was applied.
    #[serde(default)]
    pub applied_at: Option<DateTime<Utc>>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn decodes_credit_and_sums_drawdowns() {
        let credit: Credit = serde_json::from_str(
            r#"{
                "credit_id": "credit_1",
                "amount": "100.00",
                "amount_paid": "80.00",
                "amount_remaining": "69.70",
                "amount_paid_currency": {"code": "USD"},
                "currency": {"code": "USD", "name": "US Dollar", "symbol": "$"},
                "customer": {"customer_id": "c1"},
                "drawdowns": [
                    {"credit_id": "credit_1", "amount": "-0.10", "applied_at": "2023-04-03T10:00:00Z", "description": null},
                    {"credit_id": "credit_1", "amount": "-30.20", "applied_at": "2023-04-04T10:00:00Z", "description": "invoice"}
                ],
                "effective_at": "2023-04-01T00:00:00Z",
                "expires_at": null,
                "description": "welcome credit",
                "status": "active"
            }"#,
        )
        .unwrap();

        assert_eq!(credit.status, CreditStatus::Active);
        assert!(credit.expires_at.is_none());
        assert_eq!(credit.drawn_down(), Decimal::from_str("-30.30").unwrap());
        assert_eq!(
            credit.amount + credit.drawn_down(),
            credit.amount_remaining
        );
    }
}
