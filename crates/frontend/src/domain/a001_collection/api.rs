use contracts::domain::a001_collection::Collection;
use contracts::domain::a002_product::{ProductDto, ProductPage};
use contracts::shared::envelope::{ApiEnvelope, PagedEnvelope};
use contracts::usecases::u501_edit_constants::GetProductsForConstantsRequest;

use crate::shared::api_utils::{self, collection_path, ApiError};

/// Fetch one page of collections
pub async fn fetch_collections(
    token: &str,
    page: u32,
    page_size: u32,
) -> Result<PagedEnvelope<Collection>, ApiError> {
    let path = format!("/Collection/GetAll?page={}&pageSize={}", page, page_size);
    api_utils::get_json(&path, token).await
}

/// Fetch the products of a collection, optionally narrowed by additional filters
pub async fn fetch_products_for_constants(
    token: &str,
    collection_id: &str,
    request: &GetProductsForConstantsRequest,
) -> Result<Vec<ProductDto>, ApiError> {
    let path = collection_path(collection_id, "GetProductsForConstants");
    let envelope: ApiEnvelope<ProductPage> = api_utils::post_json(&path, token, request).await?;
    Ok(envelope.data.map(|p| p.data).unwrap_or_default())
}
