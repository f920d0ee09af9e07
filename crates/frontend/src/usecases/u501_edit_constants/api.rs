use contracts::domain::a003_collection_filter::FilterDefinition;
use contracts::shared::envelope::ApiEnvelope;
use contracts::usecases::u501_edit_constants::UpdateConstantsRequest;

use crate::shared::api_utils::{self, collection_path, ApiError, RawResponse};

/// Filter categories that can narrow the product list of a collection
pub async fn fetch_filters_for_constants(
    token: &str,
    collection_id: &str,
) -> Result<Vec<FilterDefinition>, ApiError> {
    let path = collection_path(collection_id, "GetFiltersForConstants");
    let raw = api_utils::get(&path, token).await?;
    interpret_filters(raw)
}

/// Persist the pinned product order
pub async fn update_constants(
    token: &str,
    collection_id: &str,
    constants: Vec<String>,
) -> Result<(), ApiError> {
    let path = collection_path(collection_id, "UpdateConstants");
    let request = UpdateConstantsRequest { constants };
    let raw = api_utils::post(&path, Some(token), &request).await?;
    raw.into_envelope().map(|_| ())
}

fn interpret_filters(raw: RawResponse) -> Result<Vec<FilterDefinition>, ApiError> {
    let envelope: ApiEnvelope<Vec<FilterDefinition>> = raw.into_json()?;
    match envelope.status {
        Some(code) if code >= 400 => Err(ApiError::Rejected(
            envelope.message_text().unwrap_or_default().to_string(),
        )),
        _ => Ok(envelope.data.unwrap_or_default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_filters_decoded() {
        let body = r#"{
            "status": 200,
            "message": "OK",
            "data": [
                {"id": "color", "title": "Renk", "comparisonType": 1,
                 "values": [{"value": "1", "valueName": "Kırmızı"}], "currency": null},
                {"id": "price", "title": "Fiyat", "comparisonType": 3, "values": [], "currency": "TRY"}
            ]
        }"#;
        let defs = interpret_filters(raw(200, body)).unwrap();
        assert_eq!(defs.len(), 2);
        assert!(!defs[0].is_range());
        assert!(defs[1].is_range());
    }

    #[test]
    fn test_filters_missing_data_is_empty() {
        let defs = interpret_filters(raw(200, r#"{"status": 200}"#)).unwrap();
        assert!(defs.is_empty());
    }

    #[test]
    fn test_filters_rejected_by_envelope() {
        let err = interpret_filters(raw(200, r#"{"status": 404, "message": "Koleksiyon yok"}"#))
            .unwrap_err();
        assert_eq!(err, ApiError::Rejected("Koleksiyon yok".into()));
    }

    #[test]
    fn test_filters_unauthorized() {
        let err = interpret_filters(raw(401, "")).unwrap_err();
        assert!(err.requires_login());
    }
}
