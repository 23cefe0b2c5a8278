//! FILENAME: core/grid-engine/src/engine.rs
//! PURPOSE: Grid Engine - the calculation core that transforms records into
//! a renderable view.
//! CONTEXT: Composes the pipeline: resolve schema -> resolve types ->
//! filter -> sort -> paginate -> format. The same calculator also yields
//! the full (unpaginated) formatted row set for CSV export, so both paths
//! share one formatter and cannot drift apart.

use crate::filter::filter_indices;
use crate::paginate::{paginate, PageSlice};
use crate::sort::sort_indices;
use crate::state::{GridOptions, ViewState};
use crate::view::{GridColumn, GridView, SortIndicator};
use engine::{
    format_value, infer_type, resolve_align, resolve_filter_mode, synthesize_schema, Column,
    ColumnType, Record,
};
use rustc_hash::FxHashMap;

// ============================================================================
// GRID CALCULATOR
// ============================================================================

/// The per-render pipeline. Holds the resolved schema and column types for
/// one (records, schema, state, options) input; all derived data is
/// recomputed deterministically from those inputs.
pub struct GridCalculator<'a> {
    records: &'a [Record],
    columns: Vec<Column>,
    types: FxHashMap<String, ColumnType>,
    state: &'a ViewState,
    options: &'a GridOptions,
}

impl<'a> GridCalculator<'a> {
    /// Resolves the schema (synthesizing one from the first record when the
    /// caller supplies none) and the per-column semantic types.
    pub fn new(
        records: &'a [Record],
        schema: Option<&[Column]>,
        state: &'a ViewState,
        options: &'a GridOptions,
    ) -> Self {
        let columns = match schema {
            Some(columns) => columns.to_vec(),
            None => records.first().map(synthesize_schema).unwrap_or_default(),
        };
        let types = resolve_types(records, &columns, &options.type_overrides);

        GridCalculator {
            records,
            columns,
            types,
            state,
            options,
        }
    }

    /// Executes the full calculation and returns the rendered view.
    pub fn calculate(&self) -> GridView {
        let ordered = self.filtered_sorted();
        let slice = self.page_slice(ordered.len());
        log::debug!(
            "grid: {} of {} rows after filter, page {}/{}",
            ordered.len(),
            self.records.len(),
            slice.effective_page + 1,
            slice.total_pages
        );

        let visible = self.visible_columns();
        let rows = ordered[slice.start..slice.end]
            .iter()
            .map(|&index| self.format_row(&self.records[index], &visible))
            .collect();

        GridView {
            columns: visible.iter().map(|c| self.describe_column(c)).collect(),
            rows,
            sort: self.sort_indicator(),
            total_rows: ordered.len(),
            total_pages: slice.total_pages,
            page: slice.effective_page,
            page_size: self.state.page_size.max(1),
        }
    }

    /// The filtered row indices in their final sort order.
    pub fn filtered_sorted(&self) -> Vec<usize> {
        let filtered = filter_indices(self.records, &self.columns, &self.types, self.state);
        sort_indices(self.records, filtered, &self.columns, self.state)
    }

    /// Formatted cells for EVERY filtered+sorted row (not just the current
    /// page), visible columns only. This is the CSV export body.
    pub fn export_rows(&self) -> Vec<Vec<String>> {
        let visible = self.visible_columns();
        self.filtered_sorted()
            .iter()
            .map(|&index| self.format_row(&self.records[index], &visible))
            .collect()
    }

    pub fn visible_columns(&self) -> Vec<&Column> {
        self.columns.iter().filter(|c| c.visible).collect()
    }

    /// The resolved semantic type of a column (String for unknown keys).
    pub fn column_type(&self, key: &str) -> ColumnType {
        self.types.get(key).copied().unwrap_or(ColumnType::String)
    }

    /// Formats one cell through the shared type-aware formatter.
    pub fn format_cell(&self, record: &Record, column: &Column) -> String {
        format_value(
            record.value_of(&column.key),
            self.column_type(&column.key),
            &self.options.locale,
            &self.options.currency_code,
            self.options.percent_max_digits,
        )
    }

    fn format_row(&self, record: &Record, visible: &[&Column]) -> Vec<String> {
        visible
            .iter()
            .map(|column| self.format_cell(record, column))
            .collect()
    }

    fn page_slice(&self, count: usize) -> PageSlice {
        paginate(count, self.state.page_size, self.state.page)
    }

    fn describe_column(&self, column: &Column) -> GridColumn {
        let column_type = self.column_type(&column.key);
        GridColumn {
            key: column.key.clone(),
            label: column.display_label().to_string(),
            column_type,
            align: resolve_align(column.align, column_type),
            filter_mode: resolve_filter_mode(column.filter_mode, column_type),
            sortable: column.sortable,
        }
    }

    fn sort_indicator(&self) -> Option<SortIndicator> {
        self.state.sort_key.as_ref().map(|key| SortIndicator {
            key: key.clone(),
            direction: self.state.sort_direction,
        })
    }
}

/// Resolves each column's semantic type. Precedence: explicit schema type,
/// then the global override map, then inference over the column's values.
fn resolve_types(
    records: &[Record],
    columns: &[Column],
    overrides: &FxHashMap<String, ColumnType>,
) -> FxHashMap<String, ColumnType> {
    columns
        .iter()
        .map(|column| {
            let column_type = column
                .column_type
                .or_else(|| overrides.get(&column.key).copied())
                .unwrap_or_else(|| {
                    infer_type(
                        &column.key,
                        records.iter().map(|r| r.value_of(&column.key)),
                    )
                });
            (column.key.clone(), column_type)
        })
        .collect()
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Calculates a grid view from records, an optional schema and view state.
pub fn calculate_grid(
    records: &[Record],
    schema: Option<&[Column]>,
    state: &ViewState,
    options: &GridOptions,
) -> GridView {
    GridCalculator::new(records, schema, state, options).calculate()
}
