//! The shared files list.

use super::Viewer;
use crate::model::FileEntry;
use crate::options::CatalogEntry;
use crate::query::{FieldValue, QueryConfig};

pub const SORT_OPTIONS: &[CatalogEntry] = &[
    CatalogEntry::new("uploaded_at", "Date uploaded"),
    CatalogEntry::new("name", "Name"),
    CatalogEntry::new("size", "Size"),
];

pub fn config(_viewer: &Viewer) -> QueryConfig<FileEntry> {
    QueryConfig::new("uploaded_at")
        .search("name", |f: &FileEntry| FieldValue::text(&f.name))
        .search("owner", |f: &FileEntry| FieldValue::text(&f.owner))
        .search("project", |f: &FileEntry| {
            FieldValue::optional_text(f.project.as_deref())
        })
        .dimension("category", |f: &FileEntry| FieldValue::text(&f.category))
        .sort("uploaded_at", |f: &FileEntry| FieldValue::Timestamp(f.uploaded_at))
        .sort("name", |f: &FileEntry| FieldValue::text(&f.name))
        .sort("size", |f: &FileEntry| FieldValue::Number(f.size_bytes as f64))
        .sort_catalog(SORT_OPTIONS)
}
