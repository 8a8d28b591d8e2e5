//! # Dataset Loading
//!
//! The portal's records come from a single JSON document:
//!
//! ```json
//! { "projects": [...], "proposals": [...], "users": [...], "files": [...] }
//! ```
//!
//! Any collection may be omitted and loads as empty. Loading is the only I/O
//! the library does; everything downstream works on the in-memory [`Dataset`].

use crate::error::{PortalError, Result};
use crate::model::{FileEntry, Project, Proposal, User};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub projects: Vec<Project>,
    pub proposals: Vec<Proposal>,
    pub users: Vec<User>,
    pub files: Vec<FileEntry>,
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PortalError::DatasetNotFound(path.to_path_buf()));
        }
        let raw = fs::read_to_string(path)?;
        let dataset = Self::from_json(&raw)?;
        tracing::debug!(
            path = %path.display(),
            projects = dataset.projects.len(),
            proposals = dataset.proposals.len(),
            users = dataset.users.len(),
            files = dataset.files.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
            && self.proposals.is_empty()
            && self.users.is_empty()
            && self.files.is_empty()
    }
}
