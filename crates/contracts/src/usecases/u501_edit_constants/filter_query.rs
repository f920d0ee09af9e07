//! Filter panel selection → `additionalFilters` translation.
//!
//! The panel keeps a per-category selection (checked values for multi-select
//! categories, a min/max text pair for range categories). Every time the
//! user applies filters the selection is flattened into the triples the
//! product query endpoint expects. Nothing here is cached.

use std::collections::BTreeMap;

use super::request::AdditionalFilter;
use crate::domain::a003_collection_filter::{ComparisonType, FilterDefinition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBound {
    Min,
    Max,
}

/// Raw text of a range category's inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeInput {
    pub min: String,
    pub max: String,
}

impl RangeInput {
    pub fn is_empty(&self) -> bool {
        self.min.trim().is_empty() && self.max.trim().is_empty()
    }

    /// `min-max`, a missing side stays empty
    pub fn to_query_value(&self) -> String {
        format!("{}-{}", self.min.trim(), self.max.trim())
    }
}

/// Current user selection in the filter panel, keyed by filter id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    values: BTreeMap<String, Vec<String>>,
    ranges: BTreeMap<String, RangeInput>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check or uncheck a value; a category left with no values is dropped
    pub fn toggle_value(&mut self, filter_id: &str, value: &str, checked: bool) {
        if checked {
            let entry = self.values.entry(filter_id.to_string()).or_default();
            if !entry.iter().any(|v| v == value) {
                entry.push(value.to_string());
            }
        } else if let Some(entry) = self.values.get_mut(filter_id) {
            entry.retain(|v| v != value);
            if entry.is_empty() {
                self.values.remove(filter_id);
            }
        }
    }

    pub fn is_checked(&self, filter_id: &str, value: &str) -> bool {
        self.values
            .get(filter_id)
            .is_some_and(|vals| vals.iter().any(|v| v == value))
    }

    /// Update one side of a range; a range with both sides blank is dropped
    pub fn set_range_bound(&mut self, filter_id: &str, bound: RangeBound, text: &str) {
        let entry = self.ranges.entry(filter_id.to_string()).or_default();
        match bound {
            RangeBound::Min => entry.min = text.to_string(),
            RangeBound::Max => entry.max = text.to_string(),
        }
        if entry.is_empty() {
            self.ranges.remove(filter_id);
        }
    }

    pub fn range(&self, filter_id: &str) -> Option<&RangeInput> {
        self.ranges.get(filter_id)
    }

    pub fn range_bound(&self, filter_id: &str, bound: RangeBound) -> String {
        self.ranges
            .get(filter_id)
            .map(|r| match bound {
                RangeBound::Min => r.min.clone(),
                RangeBound::Max => r.max.clone(),
            })
            .unwrap_or_default()
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.ranges.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.ranges.is_empty()
    }

    /// Number of categories with an active selection
    pub fn active_count(&self) -> usize {
        self.values.len()
            + self
                .ranges
                .keys()
                .filter(|k| !self.values.contains_key(*k))
                .count()
    }

    /// Badge count for one category
    pub fn selected_count(&self, filter_id: &str) -> usize {
        let values = self.values.get(filter_id).map_or(0, Vec::len);
        let range = self.ranges.get(filter_id).map_or(0, |r| {
            usize::from(!r.min.trim().is_empty()) + usize::from(!r.max.trim().is_empty())
        });
        values + range
    }
}

/// Flatten a selection into `additionalFilters` triples, ordered by filter id
///
/// Multi-select categories produce one triple per checked value carrying the
/// category's comparison code (`0` when the category is unknown). Range
/// categories produce a single `min-max` triple with the range code.
pub fn to_additional_filters(
    selection: &FilterSelection,
    definitions: &[FilterDefinition],
) -> Vec<AdditionalFilter> {
    let mut grouped: BTreeMap<&str, Vec<AdditionalFilter>> = BTreeMap::new();

    for (filter_id, values) in &selection.values {
        let comparison_type = FilterDefinition::find(definitions, filter_id)
            .map(|d| d.comparison_type)
            .unwrap_or_default();
        let bucket = grouped.entry(filter_id.as_str()).or_default();
        bucket.extend(values.iter().filter(|v| !v.is_empty()).map(|v| AdditionalFilter {
            filter_id: filter_id.clone(),
            value: v.clone(),
            comparison_type,
        }));
    }

    for (filter_id, range) in &selection.ranges {
        if range.is_empty() {
            continue;
        }
        grouped
            .entry(filter_id.as_str())
            .or_default()
            .push(AdditionalFilter {
                filter_id: filter_id.clone(),
                value: range.to_query_value(),
                comparison_type: ComparisonType::Range,
            });
    }

    grouped.into_values().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_collection_filter::FilterValue;

    fn definition(id: &str, code: i32) -> FilterDefinition {
        FilterDefinition {
            id: id.to_string(),
            title: id.to_uppercase(),
            values: vec![FilterValue {
                value: "1".into(),
                value_name: None,
            }],
            currency: None,
            comparison_type: ComparisonType::from(code),
        }
    }

    #[test]
    fn test_empty_selection_yields_no_filters() {
        let defs = vec![definition("color", 0), definition("stock", 3)];
        assert!(to_additional_filters(&FilterSelection::new(), &defs).is_empty());
    }

    #[test]
    fn test_checkbox_values_use_category_comparison() {
        let defs = vec![definition("color", 1)];
        let mut sel = FilterSelection::new();
        sel.toggle_value("color", "red", true);
        sel.toggle_value("color", "blue", true);
        sel.toggle_value("color", "red", true);

        let out = to_additional_filters(&sel, &defs);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].value, "red");
        assert_eq!(out[1].value, "blue");
        assert!(out.iter().all(|f| f.comparison_type == ComparisonType::Selection(1)));
    }

    #[test]
    fn test_unknown_category_defaults_to_zero() {
        let mut sel = FilterSelection::new();
        sel.toggle_value("ghost", "x", true);
        let out = to_additional_filters(&sel, &[]);
        assert_eq!(out[0].comparison_type.code(), 0);
    }

    #[test]
    fn test_unchecking_last_value_drops_category() {
        let mut sel = FilterSelection::new();
        sel.toggle_value("size", "M", true);
        sel.toggle_value("size", "M", false);
        assert!(sel.is_empty());
        assert_eq!(sel.active_count(), 0);
        assert!(to_additional_filters(&sel, &[]).is_empty());
    }

    #[test]
    fn test_range_is_paired() {
        let defs = vec![definition("stock", 3)];
        let mut sel = FilterSelection::new();
        sel.set_range_bound("stock", RangeBound::Min, " 5 ");
        sel.set_range_bound("stock", RangeBound::Max, "20");

        let out = to_additional_filters(&sel, &defs);
        assert_eq!(
            out,
            vec![AdditionalFilter {
                filter_id: "stock".into(),
                value: "5-20".into(),
                comparison_type: ComparisonType::Range,
            }]
        );
        assert_eq!(sel.selected_count("stock"), 2);
    }

    #[test]
    fn test_half_open_range_and_blank_range() {
        let mut sel = FilterSelection::new();
        sel.set_range_bound("stock", RangeBound::Max, "10");
        assert_eq!(to_additional_filters(&sel, &[])[0].value, "-10");

        sel.set_range_bound("stock", RangeBound::Max, "   ");
        assert!(sel.range("stock").is_none());
        assert!(to_additional_filters(&sel, &[]).is_empty());
    }

    #[test]
    fn test_output_ordered_by_filter_id() {
        let defs = vec![definition("b", 0), definition("a", 0), definition("c", 3)];
        let mut sel = FilterSelection::new();
        sel.set_range_bound("c", RangeBound::Min, "1");
        sel.toggle_value("b", "x", true);
        sel.toggle_value("a", "y", true);

        let ids: Vec<_> = to_additional_filters(&sel, &defs)
            .into_iter()
            .map(|f| f.filter_id)
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(sel.active_count(), 3);
    }

    #[test]
    fn test_clear() {
        let mut sel = FilterSelection::new();
        sel.toggle_value("a", "1", true);
        sel.set_range_bound("c", RangeBound::Min, "1");
        sel.clear();
        assert!(sel.is_empty());
        assert!(!sel.is_checked("a", "1"));
        assert_eq!(sel.range_bound("c", RangeBound::Min), "");
    }
}
