//! Metered usage events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::Properties;
use crate::de::null_default;
use crate::ids::{CustomerId, IdempotencyId};

/// A usage event sent to the ingestion endpoint.
///
/// The idempotency id is forwarded exactly as given. Re-sending an event
/// with the same id lets the service drop the duplicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Customer the usage belongs to.
    pub customer_id: CustomerId,
    /// Event name, matched against billable metrics.
    pub event_name: String,
    /// Deduplication key.
    pub idempotency_id: IdempotencyId,
    /// When the usage happened.
    pub time_created: DateTime<Utc>,
    /// Event properties read by metrics and filters.
    #[serde(default, deserialize_with = "null_default")]
    pub properties: Properties,
}

impl Event {
    /// Create an event with no properties.
    #[must_use]
    pub fn new(
        customer_id: impl Into<CustomerId>,
        event_name: impl Into<String>,
        idempotency_id: impl Into<IdempotencyId>,
        time_created: DateTime<Utc>,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            event_name: event_name.into(),
            idempotency_id: idempotency_id.into(),
            time_created,
            properties: Properties::new(),
        }
    }

    /// Set a property.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn encodes_event_fields() {
        let at = Utc.with_ymd_and_hms(2023, 6, 1, 12, 30, 0).unwrap();
        let event = Event::new("c1", "api_call", "idem-1", at)
            .with_property("region", "eu")
            .with_property("duration", 12);

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["customer_id"], "c1");
        assert_eq!(json["idempotency_id"], "idem-1");
        assert_eq!(json["time_created"], "2023-06-01T12:30:00Z");
        assert_eq!(json["properties"]["region"], "eu");
        assert_eq!(json["properties"]["duration"], 12);
    }
}
