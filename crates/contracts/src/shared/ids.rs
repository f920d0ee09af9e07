//! Identifier helpers for the remote API.
//!
//! The back-office API is not consistent about identifier types: the same
//! field may arrive as a JSON string in one endpoint and as a number in
//! another. Everything is normalized to `String` on the client.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Int(i64),
    Float(f64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => s,
            RawId::Int(i) => i.to_string(),
            RawId::Float(f) => f.to_string(),
        }
    }
}

/// Deserialize a string-or-number field into `String`
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

/// Same as [`string_or_number`] but tolerates `null` / missing fields
pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.map(String::from))
}
