//! FILENAME: core/engine/src/schema.rs
//! PURPOSE: Column schema - the serializable description of how each record
//! field is interpreted and presented.
//! CONTEXT: The schema is the only source of column structure downstream.
//! When the caller supplies none, one is synthesized from the first record's
//! key order; raw records are never re-inspected for shape after that.

use crate::value::Record;
use serde::{Deserialize, Serialize};

// ============================================================================
// SEMANTIC COLUMN TYPE
// ============================================================================

/// The semantic type assigned to a column, distinct from the raw value's
/// primitive kind. Drives formatting, filter-mode and alignment resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    String,
    Number,
    Integer,
    Currency,
    Percent,
    Date,
    DateTime,
    Boolean,
}

impl ColumnType {
    /// Number-shaped types: formatted with numeric rules, range-filterable.
    pub fn is_numeric_like(self) -> bool {
        matches!(
            self,
            ColumnType::Number | ColumnType::Integer | ColumnType::Currency | ColumnType::Percent
        )
    }

    /// Calendar-shaped types: range-filterable via date parsing.
    pub fn is_date_like(self) -> bool {
        matches!(self, ColumnType::Date | ColumnType::DateTime)
    }
}

// ============================================================================
// FILTER MODE AND ALIGNMENT
// ============================================================================

/// Which filter input a column presents: a substring box, min/max bounds,
/// or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    Text,
    Range,
    None,
}

/// Horizontal cell alignment hint for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnAlign {
    Left,
    Center,
    Right,
}

/// Derives the filter mode from the column type when none is set explicitly.
pub fn resolve_filter_mode(explicit: Option<FilterMode>, column_type: ColumnType) -> FilterMode {
    explicit.unwrap_or({
        if column_type.is_numeric_like() || column_type.is_date_like() {
            FilterMode::Range
        } else {
            FilterMode::Text
        }
    })
}

/// Derives the alignment from the column type when none is set explicitly.
pub fn resolve_align(explicit: Option<ColumnAlign>, column_type: ColumnType) -> ColumnAlign {
    explicit.unwrap_or({
        if column_type.is_numeric_like() {
            ColumnAlign::Right
        } else {
            ColumnAlign::Left
        }
    })
}

// ============================================================================
// COLUMN
// ============================================================================

/// One entry of the column schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Identifies the record field.
    pub key: String,

    /// Display name; defaults to `key`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Semantic type; inferred from the data when absent.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub column_type: Option<ColumnType>,

    #[serde(default = "default_true")]
    pub sortable: bool,

    /// Filter input kind; derived from the resolved type when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_mode: Option<FilterMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<ColumnAlign>,

    /// Hidden columns are excluded from rendering, global search and CSV,
    /// but remain addressable for filter and sort state.
    #[serde(default = "default_true")]
    pub visible: bool,
}

fn default_true() -> bool {
    true
}

impl Column {
    pub fn new(key: impl Into<String>) -> Self {
        Column {
            key: key.into(),
            label: None,
            column_type: None,
            sortable: true,
            filter_mode: None,
            align: None,
            visible: true,
        }
    }

    pub fn with_type(mut self, column_type: ColumnType) -> Self {
        self.column_type = Some(column_type);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// The display name shown in headers and the CSV header row.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.key)
    }
}

/// Builds a schema from one representative record: its key order becomes
/// the column order, all columns visible and sortable, types left to
/// inference.
pub fn synthesize_schema(first: &Record) -> Vec<Column> {
    first.keys().map(Column::new).collect()
}
