//! Small value objects shared across resources.

use serde::{Deserialize, Serialize};

use crate::de::null_default;

/// Free-form key/value data attached to customers, events, and subscriptions.
///
/// The service stores it verbatim; the client never interprets it.
pub type Properties = serde_json::Map<String, serde_json::Value>;

/// A postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// City.
    #[serde(default, deserialize_with = "null_default")]
    pub city: String,
    /// Two-letter ISO 3166-1 country code.
    #[serde(default, deserialize_with = "null_default")]
    pub country: String,
    /// First address line.
    #[serde(default, deserialize_with = "null_default")]
    pub line1: String,
    /// Second address line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    /// Postal code.
    #[serde(default, deserialize_with = "null_default")]
    pub postal_code: String,
    /// State, province, or region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// A currency as reported by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO 4217 code, e.g. `USD`.
    pub code: String,
    /// Display name.
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    /// Display symbol.
    #[serde(default, deserialize_with = "null_default")]
    pub symbol: String,
}
