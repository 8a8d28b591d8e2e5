//! # Filter-State Controller
//!
//! One [`FilterController`] backs one list screen. It owns the screen's records,
//! its static [`QueryConfig`], the user's [`FilterSelection`], the locale the
//! engine sorts with, and the acting role. It is the only thing view code talks
//! to.
//!
//! ## Materialization
//!
//! Every setter changes exactly one input and then re-runs the engine once. The
//! materialized result is held as positions into the owned records and can only
//! change through those inputs; [`FilterController::results`] hands out shared
//! references. [`FilterController::clear_all`] resets the whole selection in one
//! step, so a reset never materializes intermediate states. [`revision`]
//! counts materializations, which makes that observable.
//!
//! ## Options and Badges
//!
//! Option lists and the active-filter count are derived from the selection and
//! the role, independently of the engine:
//!
//! - Dimensions with a catalog offer it projected through the role
//!   ([`crate::options::project_options`]); other dimensions offer the distinct
//!   values present in the records, collated. `"all"` always comes first.
//! - The count is the number of non-default dimensions, plus one for a non-empty
//!   search, plus one when the sort deviates from the configured default.
//!
//! A selection naming an undeclared dimension or a value no record has is not an
//! error; it simply matches nothing.
//!
//! [`revision`]: FilterController::revision

use crate::options::{project_options, FilterOption, Role};
use crate::query::collate::Collation;
use crate::query::{execute_indices, FilterSelection, QueryConfig, SortDirection};
use std::collections::HashSet;

pub struct FilterController<R> {
    records: Vec<R>,
    config: QueryConfig<R>,
    selection: FilterSelection,
    locale: String,
    role: Role,
    materialized: Vec<usize>,
    revision: u64,
}

impl<R> FilterController<R> {
    /// Mount a screen: default selection, materialized immediately.
    pub fn new(
        records: Vec<R>,
        config: QueryConfig<R>,
        locale: impl Into<String>,
        role: Role,
    ) -> Self {
        let selection = FilterSelection::defaults_for(&config);
        Self::with_selection(records, config, selection, locale, role)
    }

    /// Mount a screen with a prepared selection. The engine runs once.
    pub fn with_selection(
        records: Vec<R>,
        config: QueryConfig<R>,
        selection: FilterSelection,
        locale: impl Into<String>,
        role: Role,
    ) -> Self {
        let mut controller = Self {
            records,
            config,
            selection,
            locale: locale.into(),
            role,
            materialized: Vec::new(),
            revision: 0,
        };
        controller.materialize();
        controller
    }

    pub fn set_dimension(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.selection.dimensions.insert(name.into(), value.into());
        self.materialize();
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.selection.search_query = query.into();
        self.materialize();
    }

    pub fn set_sort_key(&mut self, key: impl Into<String>) {
        self.selection.sort_key = key.into();
        self.materialize();
    }

    pub fn set_sort_direction(&mut self, direction: SortDirection) {
        self.selection.sort_direction = direction;
        self.materialize();
    }

    /// Reset every selection field to its default in a single update.
    pub fn clear_all(&mut self) {
        self.selection = FilterSelection::defaults_for(&self.config);
        self.materialize();
    }

    pub fn set_records(&mut self, records: Vec<R>) {
        self.records = records;
        self.materialize();
    }

    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
        self.materialize();
    }

    /// Change the acting role. Only option lists depend on it, so the
    /// materialized result is left as is.
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    /// The materialized result, in display order.
    pub fn results(&self) -> Vec<&R> {
        self.materialized.iter().map(|&idx| &self.records[idx]).collect()
    }

    pub fn result_count(&self) -> usize {
        self.materialized.len()
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn config(&self) -> &QueryConfig<R> {
        &self.config
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Number of materializations performed since the controller was created.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Options offered for `dimension`, `"all"` first. Never empty.
    pub fn available_options(&self, dimension: &str) -> Vec<FilterOption> {
        let mut options = vec![FilterOption::all()];

        let Some(declared) = self.config.find_dimension(dimension) else {
            return options;
        };

        if let Some(catalog) = declared.catalog {
            options.extend(project_options(self.role, catalog));
            return options;
        }

        let mut seen = HashSet::new();
        let mut values: Vec<String> = self
            .records
            .iter()
            .flat_map(|record| declared.field.read(record).option_values())
            .filter(|value| !value.is_empty() && seen.insert(value.clone()))
            .collect();

        let collation = Collation::for_locale(&self.locale);
        values.sort_by(|a, b| collation.compare(a, b));

        options.extend(values.into_iter().map(|v| FilterOption::new(v.clone(), v)));
        options
    }

    /// Sort choices for the current role.
    ///
    /// Uses the configured sort catalog when there is one, otherwise offers every
    /// declared sort field under its own name.
    pub fn sort_options(&self) -> Vec<FilterOption> {
        match self.config.sort_options_catalog() {
            Some(catalog) if !catalog.is_empty() => project_options(self.role, catalog),
            _ => self
                .config
                .sort_fields()
                .iter()
                .map(|f| FilterOption::new(f.name, f.name))
                .collect(),
        }
    }

    /// How many selection fields deviate from their defaults.
    pub fn active_filter_count(&self) -> usize {
        let dimensions = self.selection.active_dimensions().count();
        let search = usize::from(self.selection.effective_query().is_some());
        let sort = usize::from(
            self.selection.sort_key != self.config.default_sort_key()
                || self.selection.sort_direction != self.config.default_sort_direction(),
        );
        dimensions + search + sort
    }

    fn materialize(&mut self) {
        self.materialized =
            execute_indices(&self.records, &self.config, &self.selection, &self.locale);
        self.revision += 1;
        tracing::debug!(
            revision = self.revision,
            results = self.materialized.len(),
            "materialized"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{CatalogEntry, ALL};
    use crate::query::FieldValue;

    #[derive(Debug, Clone, PartialEq)]
    struct Rec {
        title: &'static str,
        status: &'static str,
        dept: &'static str,
    }

    const STATUSES: &[CatalogEntry] = &[
        CatalogEntry::new("pending", "Pending").relabel(&[(Role::Student, "Awaiting approval")]),
        CatalogEntry::new("approved", "Approved"),
        CatalogEntry::new("rejected", "Rejected").only_for(&[Role::Supervisor, Role::Admin]),
    ];

    const SORTS: &[CatalogEntry] = &[
        CatalogEntry::new("title", "Title"),
        CatalogEntry::new("status", "Status").only_for(&[Role::Admin]),
    ];

    fn rec(title: &'static str, status: &'static str, dept: &'static str) -> Rec {
        Rec {
            title,
            status,
            dept,
        }
    }

    fn records() -> Vec<Rec> {
        vec![
            rec("Beta", "approved", "CS"),
            rec("Alpha", "pending", "CS"),
            rec("Gamma", "approved", "SE"),
        ]
    }

    fn config() -> QueryConfig<Rec> {
        QueryConfig::new("title")
            .search("title", |r: &Rec| FieldValue::text(r.title))
            .dimension_with_catalog("status", |r: &Rec| FieldValue::category(r.status), STATUSES)
            .dimension("dept", |r: &Rec| FieldValue::category(r.dept))
            .sort("title", |r: &Rec| FieldValue::text(r.title))
            .sort("status", |r: &Rec| FieldValue::category(r.status))
            .sort_catalog(SORTS)
    }

    fn controller(role: Role) -> FilterController<Rec> {
        FilterController::new(records(), config(), "en", role)
    }

    fn titles(c: &FilterController<Rec>) -> Vec<&'static str> {
        c.results().iter().map(|r| r.title).collect()
    }

    fn values(options: &[FilterOption]) -> Vec<&str> {
        options.iter().map(|o| o.value.as_str()).collect()
    }

    #[test]
    fn test_mounts_with_defaults_materialized() {
        let c = controller(Role::Admin);
        assert_eq!(c.revision(), 1);
        assert_eq!(titles(&c), vec!["Gamma", "Beta", "Alpha"]);
        assert_eq!(c.active_filter_count(), 0);
    }

    #[test]
    fn test_prepared_selection_materializes_once() {
        let selection = FilterSelection::defaults_for(&config())
            .with_dimension("dept", "CS")
            .with_sort("title", SortDirection::Asc);
        let c =
            FilterController::with_selection(records(), config(), selection, "en", Role::Admin);

        assert_eq!(c.revision(), 1);
        assert_eq!(titles(&c), vec!["Alpha", "Beta"]);
        assert_eq!(c.active_filter_count(), 2);
    }

    #[test]
    fn test_setters_replace_one_field_each() {
        let mut c = controller(Role::Admin);

        c.set_dimension("status", "approved");
        c.set_search_query("a");
        let before = c.selection().clone();

        c.set_sort_direction(SortDirection::Asc);
        assert_eq!(c.selection().dimension("status"), "approved");
        assert_eq!(c.selection().search_query, before.search_query);
        assert_eq!(c.selection().sort_key, before.sort_key);
        assert_eq!(c.selection().sort_direction, SortDirection::Asc);

        assert_eq!(titles(&c), vec!["Beta", "Gamma"]);
    }

    #[test]
    fn test_each_setter_materializes_once() {
        let mut c = controller(Role::Admin);
        c.set_dimension("dept", "CS");
        c.set_search_query("be");
        c.set_sort_key("status");
        c.set_sort_direction(SortDirection::Asc);
        assert_eq!(c.revision(), 5);
        assert_eq!(titles(&c), vec!["Beta"]);
    }

    #[test]
    fn test_clear_all_resets_in_one_update() {
        let mut c = controller(Role::Admin);
        c.set_dimension("status", "pending");
        c.set_dimension("dept", "CS");
        c.set_search_query("alp");
        c.set_sort_key("status");
        c.set_sort_direction(SortDirection::Asc);
        assert_eq!(c.active_filter_count(), 4);

        let revision = c.revision();
        c.clear_all();

        assert_eq!(c.revision(), revision + 1);
        assert_eq!(c.selection(), &FilterSelection::defaults_for(c.config()));
        assert_eq!(c.active_filter_count(), 0);
        assert_eq!(titles(&c), vec!["Gamma", "Beta", "Alpha"]);
    }

    #[test]
    fn test_active_filter_count_counts_sort_once() {
        let mut c = controller(Role::Admin);
        c.set_sort_key("status");
        assert_eq!(c.active_filter_count(), 1);
        c.set_sort_direction(SortDirection::Asc);
        assert_eq!(c.active_filter_count(), 1);
        c.set_search_query("   ");
        assert_eq!(c.active_filter_count(), 1);
        c.set_search_query("x");
        assert_eq!(c.active_filter_count(), 2);
        c.set_dimension("dept", ALL);
        assert_eq!(c.active_filter_count(), 2);
    }

    #[test]
    fn test_catalog_dimension_is_role_projected() {
        let student = controller(Role::Student);
        let options = student.available_options("status");
        assert_eq!(values(&options), vec![ALL, "pending", "approved"]);
        assert_eq!(options[1].label, "Awaiting approval");

        let supervisor = controller(Role::Supervisor);
        assert_eq!(
            values(&supervisor.available_options("status")),
            vec![ALL, "pending", "approved", "rejected"]
        );
    }

    #[test]
    fn test_derived_dimension_offers_distinct_values() {
        let mut records = records();
        records.push(rec("Delta", "pending", "AI"));
        records.push(rec("Epsilon", "pending", "CS"));
        let c = FilterController::new(records, config(), "en", Role::Student);

        assert_eq!(values(&c.available_options("dept")), vec![ALL, "AI", "CS", "SE"]);
    }

    #[test]
    fn test_options_never_empty() {
        let c = FilterController::new(Vec::new(), config(), "en", Role::Unknown);
        assert_eq!(values(&c.available_options("dept")), vec![ALL]);
        assert_eq!(values(&c.available_options("nope")), vec![ALL]);
        assert!(!c.available_options("status").is_empty());
        assert!(!c.sort_options().is_empty());
    }

    #[test]
    fn test_sort_options_follow_role() {
        assert_eq!(values(&controller(Role::Student).sort_options()), vec!["title"]);
        assert_eq!(
            values(&controller(Role::Admin).sort_options()),
            vec!["title", "status"]
        );
    }

    #[test]
    fn test_sort_options_without_catalog_list_sort_fields() {
        let config = QueryConfig::new("title")
            .sort("title", |r: &Rec| FieldValue::text(r.title))
            .sort("dept", |r: &Rec| FieldValue::category(r.dept));
        let c = FilterController::new(records(), config, "en", Role::Student);
        assert_eq!(values(&c.sort_options()), vec!["title", "dept"]);
    }

    #[test]
    fn test_mismatched_selection_yields_empty_result() {
        let mut c = controller(Role::Admin);
        c.set_dimension("status", "archived");
        assert!(c.results().is_empty());

        c.set_dimension("status", ALL);
        c.set_dimension("priority", "high");
        assert!(c.results().is_empty());
    }

    #[test]
    fn test_replacing_records_rematerializes() {
        let mut c = controller(Role::Admin);
        c.set_dimension("dept", "SE");
        assert_eq!(titles(&c), vec!["Gamma"]);

        c.set_records(vec![rec("Zeta", "approved", "SE")]);
        assert_eq!(titles(&c), vec!["Zeta"]);
    }

    #[test]
    fn test_role_change_affects_options_not_results() {
        let mut c = controller(Role::Student);
        let revision = c.revision();
        let before: Vec<&'static str> = titles(&c);

        c.set_role(Role::Admin);

        assert_eq!(c.revision(), revision);
        assert_eq!(titles(&c), before);
        assert_eq!(values(&c.sort_options()), vec!["title", "status"]);
    }

    #[test]
    fn test_locale_change_reorders_text() {
        let records = vec![
            rec("zebra", "pending", "CS"),
            rec("ärlig", "pending", "CS"),
        ];
        let mut c = FilterController::new(records, config(), "en", Role::Admin);
        c.set_sort_direction(SortDirection::Asc);
        assert_eq!(titles(&c), vec!["ärlig", "zebra"]);

        c.set_locale("sv");
        assert_eq!(titles(&c), vec!["zebra", "ärlig"]);
    }
}
