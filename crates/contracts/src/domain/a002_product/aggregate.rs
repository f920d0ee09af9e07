use serde::{Deserialize, Serialize};

/// Product row as sent by `GetProductsForConstants`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub product_code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Inner page of `{data: {data: [...]}}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    #[serde(default)]
    pub data: Vec<ProductDto>,
}

/// Product as shown on the constants board (drag source / target)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub product_code: String,
    pub name: String,
    pub img_url: Option<String>,
}

impl From<ProductDto> for ProductCard {
    fn from(dto: ProductDto) -> Self {
        Self {
            product_code: dto.product_code,
            name: dto.name,
            img_url: dto.image_url.filter(|u| !u.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::envelope::ApiEnvelope;

    #[test]
    fn test_nested_product_page() {
        let json = r#"{"data":{"data":[
            {"productCode":"PRD001","name":"Elbise","imageUrl":"https://cdn/x.jpg"},
            {"productCode":"PRD002","name":"Ceket","imageUrl":""},
            {"productCode":"PRD003"}
        ]}}"#;
        let env: ApiEnvelope<ProductPage> = serde_json::from_str(json).unwrap();
        let cards: Vec<ProductCard> = env
            .data
            .unwrap()
            .data
            .into_iter()
            .map(ProductCard::from)
            .collect();

        assert_eq!(cards[0].product_code, "PRD001");
        assert_eq!(cards[0].img_url.as_deref(), Some("https://cdn/x.jpg"));
        assert_eq!(cards[1].img_url, None);
        assert_eq!(cards[2].name, "");
    }

    #[test]
    fn test_missing_inner_page() {
        let env: ApiEnvelope<ProductPage> = serde_json::from_str(r#"{"data":{}}"#).unwrap();
        assert!(env.data.unwrap().data.is_empty());
    }
}
