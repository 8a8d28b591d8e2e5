//! Per-screen query configuration.
//!
//! A [`QueryConfig`] declares, for one record type, which fields free-text
//! search looks into, which fields back filter dimensions, which fields can be
//! sorted on, and an optional custom predicate. Fields are read through plain
//! accessor functions rather than looked up by name, so a configuration can
//! only ever reference fields the record type actually has.
//!
//! ```ignore
//! let config = QueryConfig::new("created_at")
//!     .search("title", |p: &Project| FieldValue::text(&p.title))
//!     .dimension("status", |p: &Project| FieldValue::category(p.status.as_str()))
//!     .sort("created_at", |p: &Project| FieldValue::Timestamp(p.created_at));
//! ```

use super::value::FieldValue;
use crate::options::OptionCatalog;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Reads one field of a record.
pub type Accessor<R> = fn(&R) -> FieldValue;

/// Record-level inclusion rule evaluated after search and dimensions.
pub type Predicate<R> = Arc<dyn Fn(&R) -> bool + Send + Sync>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("asc"),
            SortDirection::Desc => f.write_str("desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            other => Err(format!("invalid sort direction: {other}")),
        }
    }
}

/// A named accessor.
pub struct Field<R> {
    pub name: &'static str,
    pub accessor: Accessor<R>,
}

impl<R> Field<R> {
    pub fn read(&self, record: &R) -> FieldValue {
        (self.accessor)(record)
    }
}

impl<R> Clone for Field<R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            accessor: self.accessor,
        }
    }
}

/// A filter dimension: a field compared by equality against the selected value.
///
/// When `catalog` is set the dimension offers that static, role-projected list of
/// choices; otherwise its options are the distinct values found in the records.
pub struct Dimension<R> {
    pub field: Field<R>,
    pub catalog: Option<OptionCatalog>,
}

impl<R> Clone for Dimension<R> {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            catalog: self.catalog,
        }
    }
}

pub struct QueryConfig<R> {
    search_fields: Vec<Field<R>>,
    dimensions: Vec<Dimension<R>>,
    sort_fields: Vec<Field<R>>,
    sort_catalog: Option<OptionCatalog>,
    default_sort_key: &'static str,
    default_direction: SortDirection,
    predicate: Option<Predicate<R>>,
}

impl<R> Clone for QueryConfig<R> {
    fn clone(&self) -> Self {
        Self {
            search_fields: self.search_fields.clone(),
            dimensions: self.dimensions.clone(),
            sort_fields: self.sort_fields.clone(),
            sort_catalog: self.sort_catalog,
            default_sort_key: self.default_sort_key,
            default_direction: self.default_direction,
            predicate: self.predicate.clone(),
        }
    }
}

impl<R> fmt::Debug for QueryConfig<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = |fields: &[Field<R>]| fields.iter().map(|f| f.name).collect::<Vec<_>>();
        f.debug_struct("QueryConfig")
            .field("search_fields", &names(&self.search_fields))
            .field(
                "dimensions",
                &self.dimensions.iter().map(|d| d.field.name).collect::<Vec<_>>(),
            )
            .field("sort_fields", &names(&self.sort_fields))
            .field("default_sort_key", &self.default_sort_key)
            .field("default_direction", &self.default_direction)
            .field("has_predicate", &self.predicate.is_some())
            .finish()
    }
}

impl<R> QueryConfig<R> {
    /// Start a configuration whose default order is `default_sort_key`, descending.
    pub fn new(default_sort_key: &'static str) -> Self {
        Self {
            search_fields: Vec::new(),
            dimensions: Vec::new(),
            sort_fields: Vec::new(),
            sort_catalog: None,
            default_sort_key,
            default_direction: SortDirection::Desc,
            predicate: None,
        }
    }

    pub fn search(mut self, name: &'static str, accessor: Accessor<R>) -> Self {
        self.search_fields.push(Field { name, accessor });
        self
    }

    /// Declare a dimension whose options are derived from the records.
    pub fn dimension(mut self, name: &'static str, accessor: Accessor<R>) -> Self {
        self.dimensions.push(Dimension {
            field: Field { name, accessor },
            catalog: None,
        });
        self
    }

    /// Declare a dimension offering a static, role-projected catalog.
    pub fn dimension_with_catalog(
        mut self,
        name: &'static str,
        accessor: Accessor<R>,
        catalog: OptionCatalog,
    ) -> Self {
        self.dimensions.push(Dimension {
            field: Field { name, accessor },
            catalog: Some(catalog),
        });
        self
    }

    pub fn sort(mut self, name: &'static str, accessor: Accessor<R>) -> Self {
        self.sort_fields.push(Field { name, accessor });
        self
    }

    pub fn sort_catalog(mut self, catalog: OptionCatalog) -> Self {
        self.sort_catalog = Some(catalog);
        self
    }

    pub fn default_direction(mut self, direction: SortDirection) -> Self {
        self.default_direction = direction;
        self
    }

    pub fn predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&R) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Arc::new(predicate));
        self
    }

    pub fn search_fields(&self) -> &[Field<R>] {
        &self.search_fields
    }

    pub fn dimensions(&self) -> &[Dimension<R>] {
        &self.dimensions
    }

    pub fn find_dimension(&self, name: &str) -> Option<&Dimension<R>> {
        self.dimensions.iter().find(|d| d.field.name == name)
    }

    pub fn sort_fields(&self) -> &[Field<R>] {
        &self.sort_fields
    }

    pub fn sort_options_catalog(&self) -> Option<OptionCatalog> {
        self.sort_catalog
    }

    /// Resolve a sort key, falling back to the default key when it is undeclared.
    ///
    /// Returns `None` only when the default key itself is not a declared sort field,
    /// in which case results keep their filtered order.
    pub fn resolve_sort(&self, key: &str) -> Option<&Field<R>> {
        self.sort_fields
            .iter()
            .find(|f| f.name == key)
            .or_else(|| self.sort_fields.iter().find(|f| f.name == self.default_sort_key))
    }

    pub fn default_sort_key(&self) -> &'static str {
        self.default_sort_key
    }

    pub fn default_sort_direction(&self) -> SortDirection {
        self.default_direction
    }

    pub fn custom_predicate(&self) -> Option<&Predicate<R>> {
        self.predicate.as_ref()
    }
}
