//! # Portal CLI Architecture
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/portalapp/`: the UI-agnostic library (query engine, filter
//!   controller, screens, dataset and configuration loading)
//! - `crates/portal/`: this CLI, depending on `portalapp`
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/portal/src/cli/)                         │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - config, dataset and logging wiring (commands.rs)         │
//! │  - terminal tables and JSON output (render.rs)              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/portalapp/src/api.rs)                    │
//! │  - Validates screen and dimension names                     │
//! │  - Dispatches to the screen's configuration                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Controller + Engine (portalapp controller.rs, query/)      │
//! │  - Selection state, pure filter and sort                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI owns argument
//! parsing, terminal output, logging setup and exit codes.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
