//! Custom serde deserializers for CiNii XML fields

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::result;

/// Deserialize a non-negative count from element text
///
/// OpenSearch counts and `cinii:ownerCount` arrive as text. Surrounding
/// whitespace is ignored.
///
/// # Behavior
///
/// * `"12"` → `12`
/// * `" 7 "` → `7`
/// * empty element → `0`
/// * anything else → error
pub(super) fn deserialize_count<'de, D>(deserializer: D) -> result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s.as_deref().map(str::trim) {
        None | Some("") => Ok(0),
        Some(value) => value
            .parse::<u32>()
            .map_err(|_| D::Error::custom(format!("invalid count value {:?}", value))),
    }
}
