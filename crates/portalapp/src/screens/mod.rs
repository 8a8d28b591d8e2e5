//! # Portal Screens
//!
//! Each list screen of the portal is nothing more than a [`QueryConfig`] over
//! one record type. The submodules declare them: which fields are searched,
//! which dimensions are filterable (and whether their options come from a
//! static catalog or from the data), which sort keys exist, and any
//! record-level visibility rule for the acting [`Viewer`].
//!
//! | Screen | Record | Default order |
//! |--------|--------|---------------|
//! | `projects` | [`crate::model::Project`] | `created_at` desc |
//! | `proposals` | [`crate::model::Proposal`] | `submitted_at` desc |
//! | `users` | [`crate::model::User`] | `joined_at` desc |
//! | `files` | [`crate::model::FileEntry`] | `uploaded_at` desc |
//!
//! [`QueryConfig`]: crate::query::QueryConfig

use crate::error::PortalError;
use crate::options::Role;
use crate::query::collate::casefold;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub mod files;
pub mod projects;
pub mod proposals;
pub mod users;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Projects,
    Proposals,
    Users,
    Files,
}

impl Screen {
    pub const ALL: [Screen; 4] = [
        Screen::Projects,
        Screen::Proposals,
        Screen::Users,
        Screen::Files,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Projects => "projects",
            Screen::Proposals => "proposals",
            Screen::Users => "users",
            Screen::Files => "files",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Screen {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Screen::ALL
            .into_iter()
            .find(|screen| screen.as_str() == wanted)
            .ok_or_else(|| PortalError::UnknownScreen(s.to_string()))
    }
}

/// Who is looking at a screen.
///
/// `name` is compared against the people named on records (the student of a
/// project, the supervisors listed on it). Staff without a name see what their
/// role allows in general; a student without a name, or any viewer with an
/// unrecognized role, gets the narrowest rule a screen has.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewer {
    pub role: Role,
    pub name: Option<String>,
}

impl Viewer {
    pub fn new(role: Role) -> Self {
        Self { role, name: None }
    }

    pub fn named(role: Role, name: impl Into<String>) -> Self {
        let name = name.into();
        let name = name.trim();
        Self {
            role,
            name: (!name.is_empty()).then(|| name.to_string()),
        }
    }

    /// The viewer's name, case-folded for comparisons.
    pub(crate) fn folded_name(&self) -> Option<String> {
        self.name.as_deref().map(casefold)
    }
}

/// Whether `person` is `folded_name`, ignoring case and surrounding whitespace.
pub(crate) fn same_person(person: &str, folded_name: &str) -> bool {
    casefold(person.trim()) == folded_name
}

/// Whether a free-text list of people ("Dr. Noor, Dr. Haddad") mentions `folded_name`.
pub(crate) fn names_person(people: &str, folded_name: &str) -> bool {
    casefold(people).contains(folded_name)
}
