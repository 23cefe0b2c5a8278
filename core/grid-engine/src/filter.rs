//! FILENAME: core/grid-engine/src/filter.rs
//! PURPOSE: Row filtering - the combined global-search and per-column
//! predicate, plus unique-value collection for filter dropdowns.
//! CONTEXT: The global query matches visible columns only; per-column
//! clauses apply regardless of visibility and are AND-combined. Unparsable
//! filter bounds are ignored rather than rejected.

use crate::state::{ColumnFilterValue, ViewState};
use engine::{
    coerce_datetime, coerce_number, parse_datetime_str, parse_numeric_str, resolve_filter_mode,
    Column, ColumnType, FilterMode, Record, RecordValue,
};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Checks one record against the global query and all active column clauses.
pub fn matches_record(
    record: &Record,
    columns: &[Column],
    types: &FxHashMap<String, ColumnType>,
    state: &ViewState,
) -> bool {
    matches_global(record, columns, &state.search)
        && state.filters.iter().all(|(key, filter)| {
            filter.is_empty() || matches_column(record, columns, types, key, filter)
        })
}

/// Case-insensitive substring match over the visible columns' plain string
/// forms. Absent values never match; an empty query always does.
fn matches_global(record: &Record, columns: &[Column], query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    columns.iter().filter(|c| c.visible).any(|column| {
        let value = record.value_of(&column.key);
        !value.is_null() && value.display_value().to_lowercase().contains(&query)
    })
}

/// Evaluates one column's clause under its resolved filter mode.
fn matches_column(
    record: &Record,
    columns: &[Column],
    types: &FxHashMap<String, ColumnType>,
    key: &str,
    filter: &ColumnFilterValue,
) -> bool {
    let Some(column) = columns.iter().find(|c| c.key == key) else {
        // No schema entry to resolve a mode from: the clause passes.
        return true;
    };
    let Some(&column_type) = types.get(key) else {
        return true;
    };

    match resolve_filter_mode(column.filter_mode, column_type) {
        FilterMode::None => true,
        FilterMode::Text => matches_text(record.value_of(key), filter),
        FilterMode::Range => {
            if column_type.is_date_like() {
                matches_date_range(record.value_of(key), filter)
            } else {
                matches_numeric_range(record.value_of(key), filter)
            }
        }
    }
}

fn matches_text(value: &RecordValue, filter: &ColumnFilterValue) -> bool {
    let Some(needle) = filter.text.as_deref().filter(|t| !t.is_empty()) else {
        return true;
    };
    if value.is_null() {
        return false;
    }
    value
        .display_value()
        .to_lowercase()
        .contains(&needle.to_lowercase())
}

/// Inclusive numeric bounds. The cell must coerce to a number; a bound that
/// does not coerce is ignored.
fn matches_numeric_range(value: &RecordValue, filter: &ColumnFilterValue) -> bool {
    let Some(cell) = coerce_number(value) else {
        return false;
    };
    if let Some(min) = filter.min.as_deref().and_then(parse_numeric_str) {
        if cell < min {
            return false;
        }
    }
    if let Some(max) = filter.max.as_deref().and_then(parse_numeric_str) {
        if cell > max {
            return false;
        }
    }
    true
}

/// Inclusive date bounds; identical shape to the numeric case with date
/// parsing in place of numeric parsing.
fn matches_date_range(value: &RecordValue, filter: &ColumnFilterValue) -> bool {
    let Some(cell) = coerce_datetime(value) else {
        return false;
    };
    if let Some(min) = filter.min.as_deref().and_then(parse_datetime_str) {
        if cell < min {
            return false;
        }
    }
    if let Some(max) = filter.max.as_deref().and_then(parse_datetime_str) {
        if cell > max {
            return false;
        }
    }
    true
}

/// Returns the indices of the records passing the filter, in input order.
/// With nothing active this is the identity sequence over the input.
pub fn filter_indices(
    records: &[Record],
    columns: &[Column],
    types: &FxHashMap<String, ColumnType>,
    state: &ViewState,
) -> Vec<usize> {
    if !state.has_active_filter() {
        return (0..records.len()).collect();
    }
    let indices: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_record(record, columns, types, state))
        .map(|(index, _)| index)
        .collect();
    log::debug!(
        "filter: {} of {} records match",
        indices.len(),
        records.len()
    );
    indices
}

// ============================================================================
// UNIQUE VALUES
// ============================================================================

/// A distinct cell value in a column with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniqueValue {
    pub value: String,
    pub count: u32,
}

/// Collects the distinct plain-string forms of a column, most frequent
/// first, for populating filter dropdowns. Absent values are skipped.
pub fn unique_values(records: &[Record], key: &str) -> Vec<UniqueValue> {
    let mut counts: FxHashMap<String, u32> = FxHashMap::default();
    for record in records {
        let value = record.value_of(key);
        if value.is_null() {
            continue;
        }
        *counts.entry(value.display_value()).or_insert(0) += 1;
    }

    let mut values: Vec<UniqueValue> = counts
        .into_iter()
        .map(|(value, count)| UniqueValue { value, count })
        .collect();
    values.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    values
}
