//! Query execution.
//!
//! [`execute`] is the single routine every list screen runs its records through.
//! It is a pure function of `(records, config, selection, locale)`:
//!
//! 1. **Search**: when the trimmed query is non-empty, at least one search field
//!    must contain it, case-folded. List fields match when any element does.
//! 2. **Dimensions**: every dimension not at `"all"` must equal the record's value.
//!    A dimension the configuration doesn't declare matches nothing.
//! 3. **Predicate**: the configuration's custom predicate, if any.
//!
//! Survivors are then stably sorted by the selected key, falling back to the
//! configured default key when the selected one is unknown. Descending order is
//! the reversed ascending comparison, so both directions agree on ties.
//!
//! ## Missing values
//!
//! A missing value (or an empty list) is the lowest possible value: it sorts
//! first ascending and, by reversal, last descending.

use super::collate::{casefold, Collation};
use super::config::{QueryConfig, SortDirection};
use super::selection::FilterSelection;
use super::value::FieldValue;
use std::cmp::Ordering;

/// Filter and sort `records`, returning references into the slice.
pub fn execute<'a, R>(
    records: &'a [R],
    config: &QueryConfig<R>,
    selection: &FilterSelection,
    locale: &str,
) -> Vec<&'a R> {
    execute_indices(records, config, selection, locale)
        .into_iter()
        .map(|idx| &records[idx])
        .collect()
}

/// Same as [`execute`], returning positions in `records` instead of references.
pub fn execute_indices<R>(
    records: &[R],
    config: &QueryConfig<R>,
    selection: &FilterSelection,
    locale: &str,
) -> Vec<usize> {
    let folded_query = selection.effective_query().map(casefold);

    let matched: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches(*record, config, selection, folded_query.as_deref()))
        .map(|(idx, _)| idx)
        .collect();

    let Some(sort_field) = config.resolve_sort(&selection.sort_key) else {
        tracing::debug!(
            total = records.len(),
            matched = matched.len(),
            sort_key = %selection.sort_key,
            "query executed without a resolvable sort key"
        );
        return matched;
    };

    let collation = Collation::for_locale(locale);
    let direction = selection.sort_direction;

    let mut keyed: Vec<(usize, FieldValue)> = matched
        .into_iter()
        .map(|idx| (idx, sort_field.read(&records[idx])))
        .collect();

    // `sort_by` is stable: ties keep their input order in both directions.
    keyed.sort_by(|(_, a), (_, b)| directed(compare_values(a, b, &collation), direction));

    tracing::debug!(
        total = records.len(),
        matched = keyed.len(),
        sort_key = sort_field.name,
        %direction,
        locale,
        "query executed"
    );

    keyed.into_iter().map(|(idx, _)| idx).collect()
}

/// Whether one record passes search, every active dimension and the predicate.
pub fn matches<R>(
    record: &R,
    config: &QueryConfig<R>,
    selection: &FilterSelection,
    folded_query: Option<&str>,
) -> bool {
    matches_search(record, config, folded_query)
        && matches_dimensions(record, config, selection)
        && config
            .custom_predicate()
            .map_or(true, |predicate| predicate(record))
}

fn matches_search<R>(record: &R, config: &QueryConfig<R>, folded_query: Option<&str>) -> bool {
    let Some(query) = folded_query else {
        return true;
    };

    config.search_fields().iter().any(|field| {
        field
            .read(record)
            .searchable_strings()
            .into_iter()
            .any(|text| casefold(text).contains(query))
    })
}

fn matches_dimensions<R>(record: &R, config: &QueryConfig<R>, selection: &FilterSelection) -> bool {
    selection.active_dimensions().all(|(name, selected)| {
        config
            .find_dimension(name)
            .is_some_and(|dimension| dimension.field.read(record).matches_selection(selected))
    })
}

/// Ascending comparison of two field values.
///
/// Missing values are lowest. Values of different kinds (a misconfigured
/// accessor) order by kind so the comparison stays total.
pub fn compare_values(a: &FieldValue, b: &FieldValue, collation: &Collation) -> Ordering {
    match (a.is_missing(), b.is_missing()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        (false, false) => {}
    }

    match (a, b) {
        (
            FieldValue::Text(x) | FieldValue::Category(x),
            FieldValue::Text(y) | FieldValue::Category(y),
        ) => collation.compare(x, y),
        (FieldValue::Number(x), FieldValue::Number(y)) => x.total_cmp(y),
        (FieldValue::Timestamp(x), FieldValue::Timestamp(y)) => x.cmp(y),
        (FieldValue::List(x), FieldValue::List(y)) => match (x.first(), y.first()) {
            (Some(x), Some(y)) => collation.compare(x, y),
            _ => Ordering::Equal,
        },
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

fn kind_rank(value: &FieldValue) -> u8 {
    match value {
        FieldValue::Missing => 0,
        FieldValue::Number(_) => 1,
        FieldValue::Timestamp(_) => 2,
        FieldValue::Text(_) | FieldValue::Category(_) => 3,
        FieldValue::List(_) => 4,
    }
}
