//! The proposals list.
//!
//! Drafts belong to their author until submitted: reviewers are neither shown
//! draft proposals nor offered the `draft` status. Only a named student and an
//! admin ever see drafts; every other viewer gets the reviewer rule.

use super::{same_person, Viewer};
use crate::model::{Proposal, ProposalStatus};
use crate::options::{CatalogEntry, Role};
use crate::query::{FieldValue, QueryConfig};

pub const STATUS_OPTIONS: &[CatalogEntry] = &[
    CatalogEntry::new("draft", "Draft").only_for(&[Role::Student, Role::Admin]),
    CatalogEntry::new("submitted", "Submitted"),
    CatalogEntry::new("under_review", "Under review"),
    CatalogEntry::new("revision_requested", "Revision requested")
        .relabel(&[(Role::Student, "Changes requested")]),
    CatalogEntry::new("approved", "Approved"),
    CatalogEntry::new("rejected", "Rejected"),
];

pub const SORT_OPTIONS: &[CatalogEntry] = &[
    CatalogEntry::new("submitted_at", "Date submitted"),
    CatalogEntry::new("title", "Title"),
];

pub fn config(viewer: &Viewer) -> QueryConfig<Proposal> {
    let config = QueryConfig::new("submitted_at")
        .search("title", |p: &Proposal| FieldValue::text(&p.title))
        .search("student", |p: &Proposal| FieldValue::text(&p.student))
        .search("keywords", |p: &Proposal| FieldValue::list(&p.keywords))
        .dimension_with_catalog(
            "status",
            |p: &Proposal| FieldValue::category(p.status.as_str()),
            STATUS_OPTIONS,
        )
        .dimension("department", |p: &Proposal| FieldValue::text(&p.department))
        .sort("submitted_at", |p: &Proposal| FieldValue::timestamp(p.submitted_at))
        .sort("title", |p: &Proposal| FieldValue::text(&p.title))
        .sort_catalog(SORT_OPTIONS);

    match (viewer.role, viewer.folded_name()) {
        (Role::Student, Some(name)) => {
            config.predicate(move |p: &Proposal| same_person(&p.student, &name))
        }
        (Role::Admin, _) => config,
        _ => config.predicate(|p: &Proposal| p.status != ProposalStatus::Draft),
    }
}
