//! The projects list.

use super::{names_person, same_person, Viewer};
use crate::model::Project;
use crate::options::{CatalogEntry, Role};
use crate::query::{FieldValue, QueryConfig};

const STAFF: &[Role] = &[Role::Supervisor, Role::Coordinator, Role::Admin];

pub const STATUS_OPTIONS: &[CatalogEntry] = &[
    CatalogEntry::new("pending", "Pending").relabel(&[(Role::Student, "Awaiting approval")]),
    CatalogEntry::new("approved", "Approved"),
    CatalogEntry::new("in_progress", "In progress"),
    CatalogEntry::new("completed", "Completed"),
    CatalogEntry::new("rejected", "Rejected").only_for(STAFF),
];

pub const PRIORITY_OPTIONS: &[CatalogEntry] = &[
    CatalogEntry::new("low", "Low"),
    CatalogEntry::new("medium", "Medium"),
    CatalogEntry::new("high", "High"),
    CatalogEntry::new("critical", "Critical"),
];

pub const SORT_OPTIONS: &[CatalogEntry] = &[
    CatalogEntry::new("created_at", "Date created"),
    CatalogEntry::new("title", "Title"),
    CatalogEntry::new("progress", "Progress").only_for(STAFF),
    CatalogEntry::new("deadline", "Deadline"),
];

pub fn config(viewer: &Viewer) -> QueryConfig<Project> {
    let config = QueryConfig::new("created_at")
        .search("title", |p: &Project| FieldValue::text(&p.title))
        .search("student", |p: &Project| FieldValue::text(&p.student))
        .search("supervisor", |p: &Project| FieldValue::text(&p.supervisor))
        .search("tags", |p: &Project| FieldValue::list(&p.tags))
        .dimension_with_catalog(
            "status",
            |p: &Project| FieldValue::category(p.status.as_str()),
            STATUS_OPTIONS,
        )
        .dimension_with_catalog(
            "priority",
            |p: &Project| FieldValue::category(p.priority.as_str()),
            PRIORITY_OPTIONS,
        )
        .dimension("department", |p: &Project| FieldValue::text(&p.department))
        .sort("created_at", |p: &Project| FieldValue::Timestamp(p.created_at))
        .sort("title", |p: &Project| FieldValue::text(&p.title))
        .sort("progress", |p: &Project| FieldValue::Number(p.progress))
        .sort("deadline", |p: &Project| FieldValue::timestamp(p.deadline))
        .sort_catalog(SORT_OPTIONS);

    match (viewer.role, viewer.folded_name()) {
        (Role::Student, Some(name)) => {
            config.predicate(move |p: &Project| same_person(&p.student, &name))
        }
        (Role::Supervisor, Some(name)) => {
            config.predicate(move |p: &Project| names_person(&p.supervisor, &name))
        }
        // No name to prove ownership with.
        (Role::Student | Role::Unknown, _) => config.predicate(|_: &Project| false),
        _ => config,
    }
}
