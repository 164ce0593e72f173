//! Domain types for the Lotus usage-based billing API.
//!
//! This crate holds the value objects exchanged with the service:
//!
//! - **Identifiers**: `CustomerId`, `PlanId`, `SubscriptionId`, `IdempotencyId`, ...
//! - **Customers**: `Customer`, `Address`, `Currency`
//! - **Plans**: `Plan`, `Version`, `PricingComponent`, `PricingTier`
//! - **Subscriptions**: `Subscription`, `SubscriptionFilter`, `Addon`
//! - **Billing**: `Credit`, `Invoice`
//! - **Usage**: `Event`, `BillableMetric`, entitlement results
//!
//! # Money
//!
//! Amounts, rates, and tier thresholds are `rust_decimal::Decimal`. They are
//! written to JSON as strings and read from either strings or numbers. JSON
//! numbers are decoded from their literal text (`serde_json`'s
//! `arbitrary_precision`), so no value passes through binary floating point.
//!
//! # Forward compatibility
//!
//! Enumerations keep unrecognised wire values in an `Unknown` variant, and
//! nullable lists decode to empty collections.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod common;
pub mod credit;
pub mod customer;
mod de;
pub mod entitlement;
pub mod enums;
pub mod event;
pub mod ids;
pub mod invoice;
pub mod metric;
pub mod plan;
pub mod subscription;

pub use common::{Address, Currency, Properties};
pub use credit::{Credit, CreditDrawDown};
pub use customer::{Customer, CustomerAddressMeta, CustomerMeta, SellerAddressMeta};
pub use entitlement::{
    FeatureEntitlement, FeatureSubscriptionAccess, MetricEntitlement, MetricSubscriptionAccess,
};
pub use enums::{
    AddonBillingFrequency, AddonType, BatchRoundingType, CategoricalFilterOperator,
    ComponentResetFrequency, CreditStatus, EventType, FlatFeeBehavior, InvoiceChargeTiming,
    InvoicePaymentStatus, InvoiceStatus, InvoicingBehavior, MetricAggregation, MetricGranularity,
    MetricType, NumericFilterOperator, PaymentProcessor, PlanDuration, PlanStatus,
    PlanVersionStatus, PlanVersionType, PriceAdjustmentType, PriceTierType, SubscriptionStatus,
    TrackEventsOutcome, UsageBehavior, UsageBillingBehavior, UsageBillingFrequency,
    VerifyEventIngestionStatus,
};
pub use event::Event;
pub use ids::{
    AddonId, AddonSubscriptionId, CreditId, CustomerId, FeatureId, IdempotencyId, InvoiceId,
    MetricId, OrganizationId, PlanId, SubscriptionId,
};
pub use invoice::{Invoice, InvoiceAdjustment, InvoiceItem, InvoicePdfUrl};
pub use metric::{BillableMetric, CategoricalFilter, FeatureMeta, MetricMeta, NumericFilter};
pub use plan::{
    ExternalLink, Plan, PlanMeta, PrepaidCharge, PriceAdjustment, PricingComponent, PricingTier,
    RecurringCharge, Version,
};
pub use rust_decimal::Decimal;
pub use subscription::{
    Addon, AddonMeta, ComponentFixedChargesInitialUnit, Subscription, SubscriptionFilter,
    SubscriptionMeta,
};
