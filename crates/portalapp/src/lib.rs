//! # portalapp
//!
//! The list engine behind the graduation-project portal. Every list screen
//! (projects, proposals, users, files) is the same operation over a different
//! record type: search, filter by dimensions, apply a visibility rule, and sort
//! with locale-aware collation.
//!
//! ## Architecture
//!
//! ```text
//! UI (portal CLI)
//!   └── api::PortalApi            name validation, dispatch per screen
//!         └── controller::FilterController   selection state, materialized result
//!               ├── query::engine::execute   pure filter + stable sort
//!               └── options::project_options role-aware option lists
//! screens::*   one QueryConfig per screen
//! model, dataset, config   records, JSON loading, confique settings
//! debounce     search input pacing in front of the controller
//! ```
//!
//! The engine and the controller never fail: a selection that names an
//! unknown dimension or value matches nothing, and an unknown sort key falls
//! back to the screen default. Errors ([`error::PortalError`]) only arise at
//! the edges: loading files and resolving names typed by a user.

pub mod api;
pub mod config;
pub mod controller;
pub mod dataset;
pub mod debounce;
pub mod error;
pub mod model;
pub mod options;
pub mod query;
pub mod screens;

#[cfg(test)]
pub(crate) mod test_utils;
