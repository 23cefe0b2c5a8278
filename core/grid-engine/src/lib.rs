//! FILENAME: core/grid-engine/src/lib.rs
//! Grid (searchable/sortable/paginated table) subsystem.
//!
//! This crate provides the grid calculation engine as a standalone module.
//! It depends on `engine` for the record model, column schema, type
//! inference and cell formatting.
//!
//! Layers:
//! - `state`: Serializable view state and options (what the caller ASKS for)
//! - `filter`: Global search and per-column predicates
//! - `sort`: Single-column total ordering
//! - `paginate`: Fixed-size page clamping
//! - `view`: Renderable output for the frontend (WHAT we display)
//! - `engine`: Calculation engine (HOW we calculate)

pub mod engine;
pub mod filter;
pub mod paginate;
pub mod sort;
pub mod state;
pub mod view;

pub use engine::{calculate_grid, GridCalculator};
pub use filter::{filter_indices, matches_record, unique_values, UniqueValue};
pub use paginate::{paginate, PageSlice};
pub use sort::{compare_values, sort_indices};
pub use state::{
    ColumnFilterValue, GridOptions, SortDirection, ViewState, DEFAULT_PAGE_SIZE,
};
pub use view::{GridColumn, GridView, SortIndicator};
