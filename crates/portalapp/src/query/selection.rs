//! Filter selection state: what the user currently has chosen on one screen.

use super::config::{QueryConfig, SortDirection};
use crate::options::ALL;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    /// Selected value per dimension name. Absent means [`ALL`].
    pub dimensions: BTreeMap<String, String>,
    pub search_query: String,
    pub sort_key: String,
    pub sort_direction: SortDirection,
}

impl FilterSelection {
    /// The default selection for a configuration: every declared dimension at
    /// [`ALL`], no search, the configured default sort.
    pub fn defaults_for<R>(config: &QueryConfig<R>) -> Self {
        Self {
            dimensions: config
                .dimensions()
                .iter()
                .map(|d| (d.field.name.to_string(), ALL.to_string()))
                .collect(),
            search_query: String::new(),
            sort_key: config.default_sort_key().to_string(),
            sort_direction: config.default_sort_direction(),
        }
    }

    /// The selected value for `name`, or [`ALL`] when nothing was chosen.
    pub fn dimension(&self, name: &str) -> &str {
        self.dimensions.get(name).map_or(ALL, String::as_str)
    }

    pub fn with_dimension(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.dimensions.insert(name.into(), value.into());
        self
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    pub fn with_sort(mut self, key: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_key = key.into();
        self.sort_direction = direction;
        self
    }

    /// Dimensions whose selection is not the [`ALL`] sentinel.
    pub fn active_dimensions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.dimensions
            .iter()
            .filter(|(_, value)| value.as_str() != ALL)
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// The query as the engine uses it: trimmed, `None` when blank.
    pub fn effective_query(&self) -> Option<&str> {
        let trimmed = self.search_query.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::FieldValue;

    struct Row {
        status: String,
    }

    fn config() -> QueryConfig<Row> {
        QueryConfig::new("status")
            .dimension("status", |r: &Row| FieldValue::category(&r.status))
            .dimension("priority", |r: &Row| FieldValue::category(&r.status))
            .sort("status", |r: &Row| FieldValue::category(&r.status))
    }

    #[test]
    fn test_defaults_set_every_dimension_to_all() {
        let selection = FilterSelection::defaults_for(&config());
        assert_eq!(selection.dimension("status"), ALL);
        assert_eq!(selection.dimension("priority"), ALL);
        assert_eq!(selection.sort_key, "status");
        assert_eq!(selection.sort_direction, SortDirection::Desc);
        assert_eq!(selection.active_dimensions().count(), 0);
    }

    #[test]
    fn test_unset_dimension_reads_as_all() {
        let selection = FilterSelection::defaults_for(&config());
        assert_eq!(selection.dimension("department"), ALL);
    }

    #[test]
    fn test_active_dimensions_skip_sentinel() {
        let selection =
            FilterSelection::defaults_for(&config()).with_dimension("status", "approved");
        let active: Vec<_> = selection.active_dimensions().collect();
        assert_eq!(active, vec![("status", "approved")]);
    }

    #[test]
    fn test_blank_query_is_inactive() {
        let selection = FilterSelection::defaults_for(&config()).with_search("   ");
        assert_eq!(selection.effective_query(), None);

        let selection = selection.with_search("  gam ");
        assert_eq!(selection.effective_query(), Some("gam"));
    }
}
