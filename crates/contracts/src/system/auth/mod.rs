use crate::shared::ids::opt_string_or_number;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Token set returned by `POST /Auth/Login` inside `data`
///
/// All fields are optional on the wire; a response without `accessToken`
/// is treated as a failed login by the client. Lifetimes arrive either as
/// numbers or as numeric strings and are kept as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenPair {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub token_type: Option<String>,
    #[serde(deserialize_with = "opt_string_or_number")]
    pub expires_in: Option<String>,
    #[serde(deserialize_with = "opt_string_or_number")]
    pub refresh_expires_in: Option<String>,
}

impl TokenPair {
    /// Access token, if present and non-empty
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|t| !t.is_empty())
    }
}
