//! # Collection Query Engine
//!
//! Every list in the portal (projects, proposals, users, files, search results)
//! is the same operation: take records already in memory, keep the ones that
//! match the user's search and filters, and order them. This module is that
//! operation, written once.
//!
//! - [`value`]: [`FieldValue`], the typed view of one record field
//! - [`config`]: [`QueryConfig`], the per-screen declaration of searchable,
//!   filterable and sortable fields
//! - [`selection`]: [`FilterSelection`], what the user has currently chosen
//! - [`engine`]: [`execute`], the pure filter-and-sort routine
//! - [`collate`]: locale-aware comparison used for text ordering
//!
//! Screens never implement their own comparators or predicates; they declare a
//! configuration and hand it to the engine (usually through a
//! [`crate::controller::FilterController`]).

pub mod collate;
pub mod config;
pub mod engine;
pub mod selection;
pub mod value;

pub use config::{Accessor, Dimension, Field, Predicate, QueryConfig, SortDirection};
pub use engine::{execute, execute_indices};
pub use selection::FilterSelection;
pub use value::FieldValue;
