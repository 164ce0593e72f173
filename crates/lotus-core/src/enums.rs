//! Enumerations used by Lotus resources.
//!
//! Every enum here is a closed set of wire strings plus an `Unknown` variant.
//! The service adds members over time, so a value this crate does not know
//! about decodes into `Unknown(raw)` and encodes back to the same raw string
//! instead of failing the whole response.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Macro to define a string enum with an `Unknown(String)` fallback variant.
///
/// Generates `as_str`, `is_unknown`, `Display`, `FromStr` (infallible),
/// `From<String>`, `From<&str>`, `Into<String>`, and serde support via those
/// conversions.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A value this client does not recognise, kept verbatim.
            Unknown(String),
        }

        impl $name {
            /// Return the wire representation.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Unknown(raw) => raw.as_str(),
                }
            }

            /// Whether the value was not recognised when decoded.
            #[must_use]
            pub fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown(_))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($value => Self::$variant,)+
                    _ => Self::Unknown(value),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Unknown(raw) => raw,
                    other => other.as_str().to_string(),
                }
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum! {
    /// Result of an idempotency-id verification call.
    VerifyEventIngestionStatus {
        /// Every requested id was found.
        Success => "success",
        /// At least one requested id was not found.
        Failure => "failure",
    }
}

string_enum! {
    /// How many events of a tracked batch were accepted.
    TrackEventsOutcome {
        /// All events were accepted.
        All => "all",
        /// Some events were rejected; see `failed_events`.
        Partial => "some",
        /// No event was accepted.
        Rejected => "none",
    }
}

string_enum! {
    /// Credit status.
    CreditStatus {
        /// Credit can still be drawn down.
        Active => "active",
        /// Credit is voided, expired, or consumed.
        Inactive => "inactive",
    }
}

string_enum! {
    /// Add-on pricing type.
    AddonType {
        /// Flat fee add-on.
        Flat => "flat",
        /// Usage based add-on.
        UsageBased => "usage_based",
    }
}

string_enum! {
    /// Add-on billing frequency.
    AddonBillingFrequency {
        /// Charged once.
        OneTime => "one_time",
        /// Charged every period.
        Recurring => "recurring",
    }
}

string_enum! {
    /// Invoice status.
    InvoiceStatus {
        /// Draft invoice, still changing.
        Draft => "draft",
        /// Voided invoice.
        Voided => "voided",
        /// Paid invoice.
        Paid => "paid",
        /// Issued but unpaid invoice.
        Unpaid => "unpaid",
    }
}

string_enum! {
    /// Invoice payment status, used to filter invoice listings.
    InvoicePaymentStatus {
        /// Paid.
        Paid => "paid",
        /// Unpaid.
        Unpaid => "unpaid",
    }
}

string_enum! {
    /// Pricing tier type.
    PriceTierType {
        /// Flat charge for the whole tier.
        Flat => "flat",
        /// Charge per unit (or per batch of units).
        PerUnit => "per_unit",
        /// No charge.
        Free => "free",
    }
}

string_enum! {
    /// Rounding applied to partial batches in a per-unit tier.
    BatchRoundingType {
        /// Round up.
        RoundUp => "round_up",
        /// Round down.
        RoundDown => "round_down",
        /// Round to nearest.
        RoundNearest => "round_nearest",
        /// Charge fractional batches.
        NoRounding => "no_rounding",
    }
}

string_enum! {
    /// Aggregation applied to a billable metric.
    MetricAggregation {
        /// Count events.
        Count => "count",
        /// Sum a property.
        Sum => "sum",
        /// Maximum of a property.
        Max => "max",
        /// Count distinct values.
        Unique => "unique",
        /// Latest value.
        Latest => "latest",
        /// Average value.
        Average => "average",
    }
}

string_enum! {
    /// Kind of price adjustment.
    PriceAdjustmentType {
        /// Percentage discount or surcharge.
        Percentage => "percentage",
        /// Fixed amount.
        Fixed => "fixed",
        /// Replaces the price entirely.
        PriceOverride => "price_override",
    }
}

string_enum! {
    /// External payment processor.
    PaymentProcessor {
        /// Stripe.
        Stripe => "stripe",
        /// Braintree.
        Braintree => "braintree",
    }
}

string_enum! {
    /// Billable metric type.
    MetricType {
        /// Counter metric.
        Counter => "counter",
        /// Rate metric.
        Rate => "rate",
        /// Custom SQL metric.
        Custom => "custom",
        /// Gauge metric.
        Gauge => "gauge",
    }
}

string_enum! {
    /// Time granularity of a metric or proration.
    MetricGranularity {
        /// Seconds.
        Second => "seconds",
        /// Minutes.
        Minute => "minutes",
        /// Hours.
        Hour => "hours",
        /// Days.
        Day => "days",
        /// Months.
        Month => "months",
        /// Quarters.
        Quarter => "quarters",
        /// Years.
        Year => "years",
        /// Whole period.
        Total => "total",
    }
}

string_enum! {
    /// Whether gauge events report deltas or totals.
    EventType {
        /// Change since the previous event.
        Delta => "delta",
        /// Absolute value.
        Total => "total",
    }
}

string_enum! {
    /// Plan billing period.
    PlanDuration {
        /// Monthly.
        Monthly => "monthly",
        /// Quarterly.
        Quarterly => "quarterly",
        /// Yearly.
        Yearly => "yearly",
    }
}

string_enum! {
    /// How often usage is billed within a plan period.
    UsageBillingFrequency {
        /// Monthly.
        Monthly => "monthly",
        /// Quarterly.
        Quarterly => "quarterly",
        /// Once, at the end of the plan period.
        EndOfPeriod => "end_of_period",
    }
}

string_enum! {
    /// How often a pricing component's usage resets.
    ComponentResetFrequency {
        /// Weekly.
        Weekly => "weekly",
        /// Monthly.
        Monthly => "monthly",
        /// Quarterly.
        Quarterly => "quarterly",
        /// Never.
        Never => "none",
    }
}

string_enum! {
    /// When a charge lands on an invoice.
    InvoiceChargeTiming {
        /// After the period.
        InArrears => "in_arrears",
        /// Intermediate invoice.
        Intermediate => "intermediate",
        /// Before the period.
        InAdvance => "in_advance",
        /// Single charge.
        OneTime => "one_time",
    }
}

string_enum! {
    /// Operators for numeric metric filters.
    NumericFilterOperator {
        /// Greater than or equal.
        Gte => "gte",
        /// Greater than.
        Gt => "gt",
        /// Equal.
        Eq => "eq",
        /// Less than.
        Lt => "lt",
        /// Less than or equal.
        Lte => "lte",
    }
}

string_enum! {
    /// Operators for categorical metric filters.
    CategoricalFilterOperator {
        /// Value is in the set.
        IsIn => "isin",
        /// Value is not in the set.
        IsNotIn => "isnotin",
    }
}

string_enum! {
    /// Subscription status, used to filter subscription listings.
    SubscriptionStatus {
        /// Currently running.
        Active => "active",
        /// Ended.
        Ended => "ended",
        /// Scheduled to start in the future.
        NotStarted => "not_started",
    }
}

string_enum! {
    /// Plan status.
    PlanStatus {
        /// Active plan.
        Active => "active",
        /// Deleted plan.
        Deleted => "deleted",
        /// Experimental plan.
        Experimental => "experimental",
    }
}

string_enum! {
    /// Plan version lifecycle status.
    PlanVersionStatus {
        /// Active version.
        Active => "active",
        /// Being replaced; existing subscriptions move on renewal.
        Retiring => "retiring",
        /// Kept for existing subscriptions only.
        Grandfathered => "grandfathered",
        /// Deleted version.
        Deleted => "deleted",
        /// Inactive version.
        Inactive => "inactive",
        /// Scheduled to become active.
        NotStarted => "not_started",
    }
}

string_enum! {
    /// Filters plan versions by whether they target specific customers.
    PlanVersionType {
        /// Only versions with target customers.
        CustomOnly => "custom_only",
        /// Only versions without target customers.
        PublicOnly => "public_only",
        /// Every version.
        All => "all",
    }
}

string_enum! {
    /// What happens to the flat fee when a subscription or add-on is cancelled.
    ///
    /// When omitted the service charges according to the subscription's dates.
    FlatFeeBehavior {
        /// Do not charge the flat fee.
        Refund => "refund",
        /// Charge the prorated flat fee.
        ChargeProrated => "charge_prorated",
        /// Charge the full flat fee.
        ChargeFull => "charge_full",
    }
}

string_enum! {
    /// What happens to accumulated usage when a subscription switches plan.
    UsageBehavior {
        /// Carry usage over to the new subscription.
        TransferToNewSubscription => "transfer_to_new_subscription",
        /// Reset usage on the new subscription and bill the old one separately.
        KeepSeparate => "keep_separate",
    }
}

string_enum! {
    /// When the customer is invoiced after a plan switch or cancellation.
    InvoicingBehavior {
        /// Invoice the prorated difference now.
        InvoiceNow => "invoice_now",
        /// Defer to the next regular invoice.
        AddToNextInvoice => "add_to_next_invoice",
    }
}

string_enum! {
    /// What happens to unbilled usage when a subscription or add-on is cancelled.
    ///
    /// The service defaults to `bill_full`.
    UsageBillingBehavior {
        /// Bill current usage on the invoice.
        BillFull => "bill_full",
        /// Drop unbilled usage.
        BillNone => "bill_none",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values_decode_to_variants() {
        let status: PlanVersionStatus = serde_json::from_str(r#""grandfathered""#).unwrap();
        assert_eq!(status, PlanVersionStatus::Grandfathered);
        assert!(!status.is_unknown());
    }

    #[test]
    fn unknown_values_are_preserved() {
        let status: CreditStatus = serde_json::from_str(r#""frozen""#).unwrap();
        assert_eq!(status, CreditStatus::Unknown("frozen".to_string()));
        assert!(status.is_unknown());
        assert_eq!(serde_json::to_string(&status).unwrap(), r#""frozen""#);
    }

    #[test]
    fn encodes_wire_strings() {
        assert_eq!(
            serde_json::to_string(&UsageBehavior::TransferToNewSubscription).unwrap(),
            r#""transfer_to_new_subscription""#
        );
        assert_eq!(InvoicingBehavior::AddToNextInvoice.as_str(), "add_to_next_invoice");
        assert_eq!(MetricGranularity::Quarter.to_string(), "quarters");
    }

    #[test]
    fn matching_is_case_sensitive() {
        // The service only emits lower-case members.
        assert!(SubscriptionStatus::from("Active").is_unknown());
        assert_eq!(SubscriptionStatus::from("active"), SubscriptionStatus::Active);
    }
}
