//! Lotus Client SDK.
//!
//! A typed async client for the Lotus usage-based billing API. Requests and
//! responses are plain structs from [`lotus_core`]; every operation is one
//! authenticated HTTP exchange, retried only on 5xx responses.
//!
//! # Example
//!
//! ```no_run
//! use chrono::Utc;
//! use lotus_client::{Event, IdempotencyId, LotusClient, TrackEventsRequest};
//!
//! # async fn example() -> Result<(), lotus_client::ClientError> {
//! let client = LotusClient::new("api.uselotus.io", "your-api-key")?;
//!
//! let org = client.ping().await?;
//! println!("Connected to organization {}", org.organization_id);
//!
//! let event = Event::new("customer-42", "api_call", IdempotencyId::generate(), Utc::now())
//!     .with_property("region", "eu");
//! let response = client.track_events(&TrackEventsRequest::new(vec![event])).await?;
//! println!("Ingested: {}", response.success);
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Failures are reported as [`ClientError`]. Use the predicates rather than
//! matching on messages:
//!
//! ```no_run
//! # async fn example(client: lotus_client::LotusClient) {
//! match client.get_customer(&"missing".into()).await {
//!     Err(e) if e.is_not_found() => println!("no such customer"),
//!     Err(e) if e.is_timeout() => println!("try again later"),
//!     Err(e) => println!("failed: {e}"),
//!     Ok(customer) => println!("{:?}", customer.customer_name),
//! }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod api;
mod client;
mod config;
mod error;
mod query;

pub use api::*;
pub use client::{LotusClient, API_KEY_HEADER};
pub use config::{
    ClientConfig, DEFAULT_POOL_IDLE_TIMEOUT, DEFAULT_POOL_MAX_IDLE_PER_HOST, DEFAULT_RETRY_COUNT,
    DEFAULT_TIMEOUT,
};
pub use error::{ApiError, ApiErrorCategory, ClientError, ErrorKind, Result, ValidationError};
pub use lotus_core::*;
pub use query::{Query, QueryParams};
