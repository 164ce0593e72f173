//! Serde helpers shared by the resource types.

use serde::{Deserialize, Deserializer};

/// Decode a JSON `null` as the type's default value.
///
/// The service sends `null` for empty lists and blank strings on some
/// endpoints and omits the field on others. Pair with `#[serde(default)]`
/// so both shapes decode the same way.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
