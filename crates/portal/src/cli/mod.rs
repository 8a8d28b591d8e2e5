//! # CLI Behavior
//!
//! This is **one possible UI client** for the portal, not the application
//! itself. It is the only place that knows about terminal I/O, exit codes and
//! output formatting.
//!
//! ## Commands
//!
//! - `portal list <screen>`: filter, search and sort a screen's records.
//!   Named flags cover the common dimensions (`--status`, `--priority`,
//!   `--department`, `--category`); `--filter name=value` reaches any other.
//! - `portal options <screen> <dimension>`: what a dropdown would offer the
//!   acting role. `portal options <screen> sort` lists the sort keys.
//! - `portal config`: the effective configuration.
//!
//! The acting user is given with `--role` (default `admin`) and `--user`. An
//! unrecognized role is accepted: it sees the full option catalogs but only
//! the records the narrowest visibility rule allows.
//!
//! ## Module Structure
//!
//! - `commands`: wiring and dispatch
//! - `render`: tables, option lists, JSON
//! - `setup`: argument parsing via clap
//! - `styles`: terminal styling constants

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
