//! The user directory.

use super::Viewer;
use crate::model::User;
use crate::options::{CatalogEntry, Role};
use crate::query::{FieldValue, QueryConfig};

pub const ROLE_OPTIONS: &[CatalogEntry] = &[
    CatalogEntry::new("student", "Student"),
    CatalogEntry::new("supervisor", "Supervisor"),
    CatalogEntry::new("coordinator", "Coordinator"),
    CatalogEntry::new("admin", "Administrator"),
];

pub const SORT_OPTIONS: &[CatalogEntry] = &[
    CatalogEntry::new("joined_at", "Date joined"),
    CatalogEntry::new("name", "Name"),
];

/// Everyone sees the whole directory; the viewer only shapes option labels.
pub fn config(_viewer: &Viewer) -> QueryConfig<User> {
    QueryConfig::new("joined_at")
        .search("name", |u: &User| FieldValue::text(&u.name))
        .search("email", |u: &User| FieldValue::text(&u.email))
        .dimension_with_catalog(
            "role",
            |u: &User| FieldValue::category(u.role.as_str()),
            ROLE_OPTIONS,
        )
        .dimension("department", |u: &User| FieldValue::text(&u.department))
        .sort("joined_at", |u: &User| FieldValue::Timestamp(u.joined_at))
        .sort("name", |u: &User| FieldValue::text(&u.name))
        .sort_catalog(SORT_OPTIONS)
}
