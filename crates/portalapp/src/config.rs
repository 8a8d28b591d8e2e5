//! # Configuration
//!
//! Portal configuration is loaded with [`confique`] from environment variables
//! and TOML files.
//!
//! ## Resolution Order
//!
//! Earlier sources win:
//! 1. **Environment variables**: `PORTAL_LOCALE`, `PORTAL_SEARCH_DEBOUNCE_MS`, `PORTAL_DATA_FILE`.
//! 2. **Explicit file**: a `portal.toml` passed by the caller.
//! 3. **Global file**: `portal.toml` in the OS config directory (via `directories`).
//! 4. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `locale` | `en` | BCP-47 tag used to collate text when sorting |
//! | `search_debounce_ms` | `300` | Pause after typing before a search runs |
//! | `data_file` | unset | Dataset JSON to load when none is given |

use crate::error::Result;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "portal.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// Locale for text collation (e.g. "en", "sv", "ar").
    #[config(env = "PORTAL_LOCALE", default = "en")]
    pub locale: String,

    /// Milliseconds to wait after the last keystroke before searching.
    #[config(env = "PORTAL_SEARCH_DEBOUNCE_MS", default = 300)]
    pub search_debounce_ms: u64,

    /// Dataset to load when the caller does not name one.
    #[config(env = "PORTAL_DATA_FILE")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            search_debounce_ms: 300,
            data_file: None,
        }
    }
}

impl PortalConfig {
    /// Load from the environment, then `explicit`, then the global config file.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_from(explicit, Self::global_path().as_deref())
    }

    pub(crate) fn load_from(explicit: Option<&Path>, global: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = explicit {
            builder = builder.file(path);
        }
        if let Some(path) = global {
            builder = builder.file(path);
        }
        let config = builder.load()?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// `portal.toml` in the platform's config directory, if one can be determined.
    pub fn global_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "portal").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}
