//! Identifier types for Lotus resources.
//!
//! Lotus identifiers are opaque strings (`cust_...`, `plan_...`, or whatever
//! the caller chose for customer ids). Each resource gets its own newtype so a
//! plan id can never be passed where a subscription id is expected.
//!
//! # Macro-based ID Types
//!
//! The `string_id_type!` macro generates the newtype together with its
//! serialization, parsing, and display implementations.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Macro to define a string-based identifier type with standard trait implementations.
///
/// This macro generates a newtype wrapper around `String` with implementations for:
/// - `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`, `Default`
/// - `Serialize`, `Deserialize` (transparent, as string)
/// - `FromStr`, `Display`, `Debug`
/// - `From<String>`, `From<&str>`, `Into<String>`
/// - `AsRef<str>`
///
/// # Example
///
/// ```ignore
/// string_id_type!(MyId, "A custom identifier type.");
/// let id = MyId::new("my_123");
/// assert_eq!(id.as_str(), "my_123");
/// ```
macro_rules! string_id_type {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Return the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the identifier and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }

            /// Whether the identifier is the empty string.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id_type!(CustomerId, "A customer identifier.\n\nCustomer ids are chosen by the caller when the customer is created.");
string_id_type!(PlanId, "A plan identifier (`plan_...`).");
string_id_type!(SubscriptionId, "A subscription identifier (`subs_...`).");
string_id_type!(AddonId, "An add-on identifier, naming the add-on product itself.");
string_id_type!(
    AddonSubscriptionId,
    "Identifier of one attached add-on instance.\n\nThis is distinct from [`AddonId`], which names the add-on product."
);
string_id_type!(CreditId, "A credit identifier.");
string_id_type!(InvoiceId, "An invoice identifier.");
string_id_type!(FeatureId, "A feature identifier used for entitlement checks.");
string_id_type!(MetricId, "A billable metric identifier.");
string_id_type!(OrganizationId, "The organization an API key belongs to.");
string_id_type!(
    IdempotencyId,
    "Deduplication key for an ingested event.\n\nThe service drops events whose idempotency id it has already seen. The client sends the key exactly as given."
);

impl IdempotencyId {
    /// Generate a fresh random idempotency id.
    ///
    /// Callers that retry ingestion must reuse the id they sent the first time;
    /// a newly generated id makes the retried event count twice.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }
}
