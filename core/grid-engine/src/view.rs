//! FILENAME: core/grid-engine/src/view.rs
//! PURPOSE: Grid View - renderable output for the presentation layer.
//! CONTEXT: A `GridView` is a finished page: resolved visible columns, a
//! matrix of pre-formatted cell strings aligned with those columns, and the
//! pagination/sort bookkeeping the surrounding controls need. It is plain
//! data, ready to cross a UI bridge as JSON.

use crate::state::SortDirection;
use engine::{ColumnAlign, ColumnType, FilterMode};
use serde::{Deserialize, Serialize};

/// A visible column as the presentation layer sees it: resolved label,
/// semantic type, alignment and filter-input kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridColumn {
    pub key: String,
    pub label: String,
    pub column_type: ColumnType,
    pub align: ColumnAlign,
    /// Which filter widget to show for this column.
    pub filter_mode: FilterMode,
    pub sortable: bool,
}

/// The active sort column and direction, for header indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortIndicator {
    pub key: String,
    pub direction: SortDirection,
}

/// The complete render-ready view model for one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridView {
    /// Visible columns, in schema order.
    pub columns: Vec<GridColumn>,

    /// Formatted cell text for the current page, row-major, each row
    /// aligned index-for-index with `columns`.
    pub rows: Vec<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortIndicator>,

    /// Filtered row count across all pages.
    pub total_rows: usize,

    pub total_pages: usize,

    /// Effective (clamped) page index.
    pub page: usize,

    pub page_size: usize,
}
