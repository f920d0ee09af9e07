use serde::{Deserialize, Serialize};

use crate::shared::ids::string_or_number;

/// Comparison discriminator of a filter category
///
/// The server sends a bare integer. `3` marks a numeric range (rendered as a
/// min/max pair); every other code is a checkbox multi-select and is passed
/// back to the server unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum ComparisonType {
    Selection(i32),
    Range,
}

impl ComparisonType {
    pub const RANGE_CODE: i32 = 3;

    pub fn is_range(self) -> bool {
        matches!(self, ComparisonType::Range)
    }

    pub fn code(self) -> i32 {
        i32::from(self)
    }
}

impl Default for ComparisonType {
    fn default() -> Self {
        ComparisonType::Selection(0)
    }
}

impl From<i32> for ComparisonType {
    fn from(code: i32) -> Self {
        if code == Self::RANGE_CODE {
            ComparisonType::Range
        } else {
            ComparisonType::Selection(code)
        }
    }
}

impl From<ComparisonType> for i32 {
    fn from(ct: ComparisonType) -> Self {
        match ct {
            ComparisonType::Selection(code) => code,
            ComparisonType::Range => ComparisonType::RANGE_CODE,
        }
    }
}

/// Selectable value of a filter category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterValue {
    #[serde(deserialize_with = "string_or_number")]
    pub value: String,
    #[serde(default)]
    pub value_name: Option<String>,
}

impl FilterValue {
    pub fn display(&self) -> &str {
        self.value_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.value)
    }
}

/// Filter category from `GET /Collection/{id}/GetFiltersForConstants`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterDefinition {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub values: Vec<FilterValue>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub comparison_type: ComparisonType,
}

impl FilterDefinition {
    pub fn is_range(&self) -> bool {
        self.comparison_type.is_range()
    }

    pub fn find<'a>(definitions: &'a [FilterDefinition], id: &str) -> Option<&'a FilterDefinition> {
        definitions.iter().find(|d| d.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::envelope::ApiEnvelope;

    #[test]
    fn test_comparison_type_codes() {
        assert_eq!(ComparisonType::from(3), ComparisonType::Range);
        assert_eq!(ComparisonType::from(1), ComparisonType::Selection(1));
        assert_eq!(ComparisonType::Range.code(), 3);
        assert_eq!(ComparisonType::default().code(), 0);
    }

    #[test]
    fn test_decode_filter_definitions() {
        let json = r#"{"status":200,"message":"OK","data":[
            {"id":"color","title":"Renk","values":[
                {"value":"1","valueName":"Kırmızı"},{"value":"2","valueName":null}],
             "currency":null,"comparisonType":0},
            {"id":"stock","title":"Stok","values":[
                {"value":"gt","valueName":"Büyüktür"},{"value":"lt","valueName":"Küçüktür"}],
             "currency":"TRY","comparisonType":3}
        ]}"#;
        let env: ApiEnvelope<Vec<FilterDefinition>> = serde_json::from_str(json).unwrap();
        let defs = env.data.unwrap();

        assert!(!defs[0].is_range());
        assert_eq!(defs[0].values[0].display(), "Kırmızı");
        assert_eq!(defs[0].values[1].display(), "2");

        assert!(defs[1].is_range());
        assert_eq!(defs[1].currency.as_deref(), Some("TRY"));
        assert_eq!(FilterDefinition::find(&defs, "stock").map(|d| d.title.as_str()), Some("Stok"));
        assert!(FilterDefinition::find(&defs, "missing").is_none());
    }

    #[test]
    fn test_comparison_type_serializes_as_integer() {
        let json = serde_json::to_string(&ComparisonType::Range).unwrap();
        assert_eq!(json, "3");
        let json = serde_json::to_string(&ComparisonType::Selection(1)).unwrap();
        assert_eq!(json, "1");
    }
}
