//! Query string encoding for list and lookup requests.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Display;

use crate::error::ClientError;

/// Query parameters of one request.
///
/// Single-valued parameters and multi-valued parameters are kept apart; a
/// multi-valued key is sent once per element (`status=active&status=ended`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    scalars: BTreeMap<&'static str, String>,
    arrays: BTreeMap<&'static str, Vec<String>>,
}

impl Query {
    /// Create an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a single-valued parameter.
    pub fn insert(&mut self, key: &'static str, value: impl Display) -> &mut Self {
        self.scalars.insert(key, value.to_string());
        self
    }

    /// Set a single-valued parameter when a value is present.
    pub fn insert_opt<V: Display>(&mut self, key: &'static str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    /// Set a timestamp parameter (RFC 3339, whole seconds, `Z` suffix) when present.
    pub fn insert_time(&mut self, key: &'static str, value: Option<DateTime<Utc>>) -> &mut Self {
        if let Some(value) = value {
            self.insert(key, value.to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        self
    }

    /// Add a multi-valued parameter. Nothing is added for an empty list.
    pub fn extend<I>(&mut self, key: &'static str, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let values: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
        if !values.is_empty() {
            self.arrays.entry(key).or_default().extend(values);
        }
        self
    }

    /// Add a multi-valued parameter whose elements are each sent as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Serialization`] if an element cannot be encoded.
    pub fn extend_json<T: Serialize>(
        &mut self,
        key: &'static str,
        values: &[T],
    ) -> Result<&mut Self, ClientError> {
        let encoded = values
            .iter()
            .map(serde_json::to_string)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.extend(key, encoded))
    }

    /// Value of a single-valued parameter.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.scalars.get(key).map(String::as_str)
    }

    /// Values of a multi-valued parameter.
    #[must_use]
    pub fn get_all(&self, key: &str) -> &[String] {
        self.arrays.get(key).map_or(&[][..], Vec::as_slice)
    }

    /// Whether a parameter of either kind is set under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.scalars.contains_key(key) || self.arrays.contains_key(key)
    }

    /// Whether no parameter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty() && self.arrays.is_empty()
    }

    /// Flatten into `(key, value)` pairs, scalars first, in key order.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        let scalars = self.scalars.iter().map(|(k, v)| (*k, v.as_str()));
        let arrays = self
            .arrays
            .iter()
            .flat_map(|(k, vs)| vs.iter().map(move |v| (*k, v.as_str())));
        scalars.chain(arrays).collect()
    }
}

/// Requests that are sent as query parameters.
pub trait QueryParams {
    /// Encode the request's fields.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Serialization`] if a value cannot be encoded.
    fn to_query(&self) -> Result<Query, ClientError>;
}
