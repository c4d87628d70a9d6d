//! Deserializers shared by the JSON and XML response types.

use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// Deserializes empty strings as `None` (for `String` fields).
///
/// Covers JSON `null`, JSON `""`, and empty XML elements alike.
pub fn deserialize_empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let result = Option::deserialize(deserializer);
    let s: Option<String> = result.map_err(D::Error::custom)?;
    Ok(s.filter(|s| !s.is_empty()))
}

/// Deserializes `null` as `T::default()`.
///
/// `#[serde(default)]` only covers absent fields; this also covers JSON
/// `null` and `i:nil` XML elements.
pub fn deserialize_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Serialized .NET string array (`<Routes><string>10A</string></Routes>`).
#[derive(Debug, Default, Deserialize)]
pub struct StringList {
    #[serde(rename = "string", default)]
    pub items: Vec<String>,
}

impl From<StringList> for Vec<String> {
    fn from(list: StringList) -> Self {
        list.items
    }
}
