//! FILENAME: core/grid-engine/src/sort.rs
//! PURPOSE: Row ordering - a stable total order over one column.
//! CONTEXT: Absent values order after all present values in BOTH directions;
//! the direction sign applies only to the comparison of present values.
//! Sorting operates on an index vector and never reorders the records.

use crate::state::{SortDirection, ViewState};
use engine::{coerce_number, Column, Record, RecordValue};
use std::cmp::Ordering;

/// Compares two cell values under a sort direction.
pub fn compare_values(a: &RecordValue, b: &RecordValue, direction: SortDirection) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => direction.apply(compare_present(a, b)),
    }
}

/// Numeric comparison when both sides coerce, lexicographic otherwise.
fn compare_present(a: &RecordValue, b: &RecordValue) -> Ordering {
    match (coerce_number(a), coerce_number(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => compare_text(&a.display_value(), &b.display_value()),
    }
}

/// Case-folded comparison with a raw tie-break so the order stays total.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Orders the given row indices by the state's sort column. A missing sort
/// key, an unknown column, or `sortable: false` returns the input unchanged.
pub fn sort_indices(
    records: &[Record],
    indices: Vec<usize>,
    columns: &[Column],
    state: &ViewState,
) -> Vec<usize> {
    let Some(key) = state.sort_key.as_deref() else {
        return indices;
    };
    let Some(column) = columns.iter().find(|c| c.key == key) else {
        return indices;
    };
    if !column.sortable {
        return indices;
    }

    let mut ordered = indices;
    ordered.sort_by(|&ia, &ib| {
        compare_values(
            records[ia].value_of(key),
            records[ib].value_of(key),
            state.sort_direction,
        )
    });
    ordered
}
