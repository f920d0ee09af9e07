use serde::{Deserialize, Serialize};

/// Standard response wrapper of the back-office API: `{status, message, data}`
///
/// Every field is optional on the wire; error responses usually carry only
/// `message`, list endpoints only `data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub status: Option<i32>,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Message text, if the server sent a non-blank one
    pub fn message_text(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}

/// Paged list response: `{data: [...], meta: {...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Option<PageMeta>,
}

/// Server-side pagination info
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_count: u32,
    pub total_pages: u32,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

/// Probe an arbitrary error body for a `message` field
pub fn error_message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paged_envelope() {
        let json = r#"{
            "data": [1, 2, 3],
            "meta": {"page": 2, "pageSize": 10, "totalCount": 23, "totalPages": 3,
                     "hasPreviousPage": true, "hasNextPage": true}
        }"#;
        let env: PagedEnvelope<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(env.data, vec![1, 2, 3]);
        let meta = env.meta.unwrap();
        assert_eq!(meta.page, 2);
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_next_page);
    }

    #[test]
    fn test_envelope_without_data() {
        let env: ApiEnvelope<Vec<u32>> =
            serde_json::from_str(r#"{"status": 400, "message": "  Hatalı istek "}"#).unwrap();
        assert!(env.data.is_none());
        assert_eq!(env.message_text(), Some("Hatalı istek"));
    }

    #[test]
    fn test_error_message_from_body() {
        assert_eq!(
            error_message_from_body(r#"{"message":"Kullanıcı bulunamadı"}"#).as_deref(),
            Some("Kullanıcı bulunamadı")
        );
        assert_eq!(error_message_from_body(r#"{"message":""}"#), None);
        assert_eq!(error_message_from_body("<html>502</html>"), None);
    }
}
