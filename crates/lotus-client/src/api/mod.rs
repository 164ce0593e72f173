//! One module per API resource.
//!
//! Each module defines the resource's request and response shapes and adds
//! its operations to [`LotusClient`](crate::LotusClient).

mod credits;
mod customers;
mod entitlements;
mod events;
mod invoices;
mod ping;
mod plans;
mod subscriptions;

pub use credits::{CreateCreditRequest, ListCreditsRequest, UpdateCreditRequest};
pub use customers::CreateCustomerRequest;
pub use entitlements::{GetFeatureAccessRequest, GetMetricAccessRequest};
pub use events::{
    TrackEventsRequest, TrackEventsResponse, VerifyEventIngestionRequest,
    VerifyEventIngestionResponse,
};
pub use invoices::ListInvoicesRequest;
pub use ping::PingResponse;
pub use plans::{GetPlanRequest, ListPlansRequest};
pub use subscriptions::{
    AttachAddonRequest, CancelAddonRequest, CancelSubscriptionRequest, CreateSubscriptionRequest,
    ListSubscriptionsRequest, SwitchSubscriptionPlanRequest, UpdateSubscriptionRequest,
};
