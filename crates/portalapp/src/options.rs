//! # Role-Aware Option Projection
//!
//! Filter and sort controls offer a fixed catalog of choices, but not every role
//! should see every choice: students are not offered review-only statuses, and
//! some labels read differently depending on who is looking ("Pending" for a
//! supervisor is "Awaiting approval" for the student who submitted).
//!
//! A catalog is a static list of [`CatalogEntry`] values. [`project_options`]
//! maps `(role, catalog)` to the options that role is offered. The projection
//! only ever affects what is *offerable*; it never changes what a selection
//! matches.
//!
//! ## Totality
//!
//! The projection is total: an unrecognized role, or a role for which every entry
//! is restricted away, receives the full catalog with default labels. A screen
//! must never render an empty dropdown because a role value was unanticipated.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Sentinel selection value meaning "dimension inactive, always matches".
pub const ALL: &str = "all";

/// Label of the sentinel option that leads every dimension's option list.
pub const ALL_LABEL: &str = "All";

/// The acting user's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Supervisor,
    Coordinator,
    Admin,
    /// Any role value this build does not know about.
    #[default]
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Supervisor => "supervisor",
            Role::Coordinator => "coordinator",
            Role::Admin => "admin",
            Role::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Infallible;

    /// Parsing never fails: unrecognized values become [`Role::Unknown`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "student" => Role::Student,
            "supervisor" | "doctor" => Role::Supervisor,
            "coordinator" => Role::Coordinator,
            "admin" => Role::Admin,
            _ => Role::Unknown,
        })
    }
}

/// A label/value pair a control may offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

impl FilterOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// The leading "All" option of a dimension.
    pub fn all() -> Self {
        Self::new(ALL_LABEL, ALL)
    }
}

/// One entry of a static option catalog.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    /// The value written into the selection when chosen.
    pub value: &'static str,

    /// Label shown when no role-specific label applies.
    pub label: &'static str,

    /// Roles allowed to see this entry. Empty means every role.
    pub only_for: &'static [Role],

    /// Role-specific labels overriding `label`.
    pub relabel: &'static [(Role, &'static str)],
}

impl CatalogEntry {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self {
            value,
            label,
            only_for: &[],
            relabel: &[],
        }
    }

    /// Restrict this entry to the given roles.
    pub const fn only_for(mut self, roles: &'static [Role]) -> Self {
        self.only_for = roles;
        self
    }

    /// Attach role-specific labels.
    pub const fn relabel(mut self, labels: &'static [(Role, &'static str)]) -> Self {
        self.relabel = labels;
        self
    }

    pub fn visible_to(&self, role: Role) -> bool {
        self.only_for.is_empty() || self.only_for.contains(&role)
    }

    pub fn label_for(&self, role: Role) -> &'static str {
        self.relabel
            .iter()
            .find(|(r, _)| *r == role)
            .map_or(self.label, |(_, label)| *label)
    }

    fn default_option(&self) -> FilterOption {
        FilterOption::new(self.label, self.value)
    }
}

/// A static list of catalog entries.
pub type OptionCatalog = &'static [CatalogEntry];

/// Project a catalog onto what `role` may choose from.
pub fn project_options(role: Role, catalog: &[CatalogEntry]) -> Vec<FilterOption> {
    if role != Role::Unknown {
        let visible: Vec<FilterOption> = catalog
            .iter()
            .filter(|entry| entry.visible_to(role))
            .map(|entry| FilterOption::new(entry.label_for(role), entry.value))
            .collect();

        if !visible.is_empty() {
            return visible;
        }
    }

    tracing::trace!(%role, "falling back to the full option catalog");
    catalog.iter().map(CatalogEntry::default_option).collect()
}
