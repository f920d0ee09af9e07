use serde::{Deserialize, Serialize};

use crate::shared::ids::{opt_string_or_number, string_or_number};

/// Collection as returned by `GET /Collection/GetAll`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub info: Option<CollectionInfo>,
    #[serde(default)]
    pub filters: Option<CollectionFilters>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub sales_channel_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionInfo {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionFilters {
    #[serde(default)]
    pub filters: Vec<FilterCondition>,
}

/// One product condition of a collection ("product <title> equals <valueName>")
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCondition {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub value_name: Option<String>,
}

impl FilterCondition {
    pub fn display_value(&self) -> &str {
        self.value_name
            .as_deref()
            .filter(|v| !v.is_empty())
            .unwrap_or(&self.value)
    }
}

impl Collection {
    /// Display name, `—` when the server sends none
    pub fn display_name(&self) -> &str {
        self.info
            .as_ref()
            .and_then(|i| i.name.as_deref())
            .filter(|n| !n.trim().is_empty())
            .unwrap_or("—")
    }

    pub fn conditions(&self) -> &[FilterCondition] {
        self.filters
            .as_ref()
            .map(|f| f.filters.as_slice())
            .unwrap_or(&[])
    }

    pub fn sales_channel(&self) -> &str {
        self.sales_channel_id.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::envelope::PagedEnvelope;

    #[test]
    fn test_decode_collection_page() {
        let json = r#"{
            "data": [
                {"id": 12, "info": {"name": "Yaz Koleksiyonu"},
                 "filters": {"filters": [
                    {"id": "color", "title": "Renk", "value": "1", "valueName": "Kırmızı"},
                    {"id": "size", "title": "Beden", "value": "M", "valueName": null}
                 ]},
                 "salesChannelId": 1},
                {"id": "abc"}
            ],
            "meta": {"page": 1, "pageSize": 10, "totalCount": 2, "totalPages": 1,
                     "hasPreviousPage": false, "hasNextPage": false}
        }"#;
        let page: PagedEnvelope<Collection> = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.len(), 2);

        let first = &page.data[0];
        assert_eq!(first.id, "12");
        assert_eq!(first.display_name(), "Yaz Koleksiyonu");
        assert_eq!(first.sales_channel(), "1");
        assert_eq!(first.conditions().len(), 2);
        assert_eq!(first.conditions()[0].display_value(), "Kırmızı");
        assert_eq!(first.conditions()[1].display_value(), "M");

        let second = &page.data[1];
        assert_eq!(second.id, "abc");
        assert_eq!(second.display_name(), "—");
        assert!(second.conditions().is_empty());
        assert_eq!(second.sales_channel(), "");
    }
}
