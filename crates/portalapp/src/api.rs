//! # API Facade
//!
//! The API layer is a **thin facade** over the screens and the filter
//! controller. It is the single entry point for any UI (the `portal` CLI
//! today) that wants a filtered list or a dropdown's options.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Dispatches** a [`Screen`] to its record collection and configuration
//! - **Validates names** coming from the outside: unknown screens and
//!   dimensions are reported as [`PortalError`]s here, before they reach the
//!   engine (which would silently match nothing)
//! - **Returns structured types**: rows as JSON values, options as
//!   [`FilterOption`]s
//!
//! It never prints and never formats; rendering belongs to the UI.

use crate::config::PortalConfig;
use crate::controller::FilterController;
use crate::dataset::Dataset;
use crate::debounce::SearchDebouncer;
use crate::error::{PortalError, Result};
use crate::options::{FilterOption, ALL};
use crate::query::{FilterSelection, QueryConfig, SortDirection};
use crate::screens::{self, Screen, Viewer};
use serde::Serialize;
use std::collections::BTreeMap;

/// What a caller asks of a list screen. Unset fields keep the screen defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRequest {
    pub dimensions: BTreeMap<String, String>,
    pub search: Option<String>,
    pub sort_key: Option<String>,
    pub direction: Option<SortDirection>,
}

impl ListRequest {
    pub fn with_dimension(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.dimensions.insert(name.into(), value.into());
        self
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    pub fn with_sort(mut self, key: impl Into<String>, direction: Option<SortDirection>) -> Self {
        self.sort_key = Some(key.into());
        self.direction = direction;
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListResult {
    pub screen: Screen,
    /// The selection actually applied, defaults filled in.
    pub selection: FilterSelection,
    pub active_filters: usize,
    /// Records on the screen before any filtering.
    pub total: usize,
    pub rows: Vec<serde_json::Value>,
}

pub struct PortalApi {
    dataset: Dataset,
    config: PortalConfig,
    viewer: Viewer,
}

impl PortalApi {
    pub fn new(dataset: Dataset, config: PortalConfig, viewer: Viewer) -> Self {
        Self {
            dataset,
            config,
            viewer,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    /// A debouncer for interactive search boxes, paced by `search_debounce_ms`.
    pub fn search_debouncer(&self) -> SearchDebouncer {
        SearchDebouncer::new(self.config.search_debounce())
    }

    /// Filter and sort one screen's records.
    pub fn list(&self, screen: Screen, request: &ListRequest) -> Result<ListResult> {
        match screen {
            Screen::Projects => self.run_list(
                screen,
                &self.dataset.projects,
                screens::projects::config(&self.viewer),
                request,
            ),
            Screen::Proposals => self.run_list(
                screen,
                &self.dataset.proposals,
                screens::proposals::config(&self.viewer),
                request,
            ),
            Screen::Users => self.run_list(
                screen,
                &self.dataset.users,
                screens::users::config(&self.viewer),
                request,
            ),
            Screen::Files => self.run_list(
                screen,
                &self.dataset.files,
                screens::files::config(&self.viewer),
                request,
            ),
        }
    }

    /// Options a screen offers for `dimension`, `"all"` first.
    pub fn options(&self, screen: Screen, dimension: &str) -> Result<Vec<FilterOption>> {
        match screen {
            Screen::Projects => self.run_options(
                screen,
                &self.dataset.projects,
                screens::projects::config(&self.viewer),
                dimension,
            ),
            Screen::Proposals => self.run_options(
                screen,
                &self.dataset.proposals,
                screens::proposals::config(&self.viewer),
                dimension,
            ),
            Screen::Users => self.run_options(
                screen,
                &self.dataset.users,
                screens::users::config(&self.viewer),
                dimension,
            ),
            Screen::Files => self.run_options(
                screen,
                &self.dataset.files,
                screens::files::config(&self.viewer),
                dimension,
            ),
        }
    }

    /// Sort keys a screen offers the viewer.
    pub fn sort_options(&self, screen: Screen) -> Vec<FilterOption> {
        match screen {
            Screen::Projects => self.sort_choices(screens::projects::config(&self.viewer)),
            Screen::Proposals => self.sort_choices(screens::proposals::config(&self.viewer)),
            Screen::Users => self.sort_choices(screens::users::config(&self.viewer)),
            Screen::Files => self.sort_choices(screens::files::config(&self.viewer)),
        }
    }

    fn controller<R>(&self, records: Vec<R>, config: QueryConfig<R>) -> FilterController<R> {
        FilterController::new(records, config, self.config.locale.as_str(), self.viewer.role)
    }

    fn sort_choices<R>(&self, config: QueryConfig<R>) -> Vec<FilterOption> {
        self.controller(Vec::new(), config).sort_options()
    }

    fn run_list<R>(
        &self,
        screen: Screen,
        records: &[R],
        config: QueryConfig<R>,
        request: &ListRequest,
    ) -> Result<ListResult>
    where
        R: Clone + Serialize,
    {
        let selection = build_selection(screen, &config, request)?;
        let controller = FilterController::with_selection(
            records.to_vec(),
            config,
            selection,
            self.config.locale.as_str(),
            self.viewer.role,
        );

        let rows = controller
            .results()
            .into_iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(ListResult {
            screen,
            selection: controller.selection().clone(),
            active_filters: controller.active_filter_count(),
            total: records.len(),
            rows,
        })
    }

    fn run_options<R: Clone>(
        &self,
        screen: Screen,
        records: &[R],
        config: QueryConfig<R>,
        dimension: &str,
    ) -> Result<Vec<FilterOption>> {
        if config.find_dimension(dimension).is_none() {
            return Err(unknown_dimension(screen, dimension));
        }
        Ok(self
            .controller(records.to_vec(), config)
            .available_options(dimension))
    }
}

fn build_selection<R>(
    screen: Screen,
    config: &QueryConfig<R>,
    request: &ListRequest,
) -> Result<FilterSelection> {
    let mut selection = FilterSelection::defaults_for(config);

    for (name, value) in &request.dimensions {
        if config.find_dimension(name).is_none() && value != ALL {
            return Err(unknown_dimension(screen, name));
        }
        selection = selection.with_dimension(name.as_str(), value.as_str());
    }
    if let Some(query) = &request.search {
        selection = selection.with_search(query.as_str());
    }

    let key = request
        .sort_key
        .clone()
        .unwrap_or_else(|| config.default_sort_key().to_string());
    let direction = request
        .direction
        .unwrap_or(config.default_sort_direction());

    Ok(selection.with_sort(key, direction))
}

fn unknown_dimension(screen: Screen, dimension: &str) -> PortalError {
    PortalError::UnknownDimension {
        screen: screen.to_string(),
        dimension: dimension.to_string(),
    }
}
