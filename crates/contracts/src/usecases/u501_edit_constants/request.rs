use serde::{Deserialize, Serialize};

use crate::domain::a003_collection_filter::ComparisonType;

/// One entry of `additionalFilters` in the product query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalFilter {
    pub filter_id: String,
    pub value: String,
    pub comparison_type: ComparisonType,
}

/// Body of `POST /Collection/{id}/GetProductsForConstants`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetProductsForConstantsRequest {
    pub additional_filters: Vec<AdditionalFilter>,
    pub page: u32,
    pub page_size: u32,
}

impl GetProductsForConstantsRequest {
    /// First page with no additional filters
    pub fn unfiltered(page_size: u32) -> Self {
        Self {
            additional_filters: Vec::new(),
            page: 1,
            page_size,
        }
    }
}

/// Body of `POST /Collection/{id}/UpdateConstants`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateConstantsRequest {
    pub constants: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_request_wire_shape() {
        let mut req = GetProductsForConstantsRequest::unfiltered(36);
        req.additional_filters.push(AdditionalFilter {
            filter_id: "color".into(),
            value: "1".into(),
            comparison_type: ComparisonType::Selection(0),
        });
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "additionalFilters": [{"filterId": "color", "value": "1", "comparisonType": 0}],
                "page": 1,
                "pageSize": 36
            })
        );
    }

    #[test]
    fn test_update_constants_wire_shape() {
        let req = UpdateConstantsRequest {
            constants: vec!["PRD002".into(), "PRD001".into()],
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"constants": ["PRD002", "PRD001"]})
        );
    }
}
