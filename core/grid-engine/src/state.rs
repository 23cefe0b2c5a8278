//! FILENAME: core/grid-engine/src/state.rs
//! PURPOSE: View state and render options - the serializable inputs.
//! CONTEXT: The caller owns one `ViewState` value per grid and replaces it
//! through the transition methods below; the engine itself holds no mutable
//! state. Every transition except page navigation resets the page index.

use engine::ColumnType;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Rows per page when the caller does not choose one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

// ============================================================================
// SORT DIRECTION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Asc
    }
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Applies the direction sign to a comparison outcome.
    pub fn apply(self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

// ============================================================================
// PER-COLUMN FILTER VALUE
// ============================================================================

/// Filter values entered for one column. Which fields apply depends on the
/// column's resolved filter mode: `text` for substring columns, `min`/`max`
/// for range columns. All fields are raw user input kept as strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnFilterValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
}

impl ColumnFilterValue {
    pub fn text(value: impl Into<String>) -> Self {
        ColumnFilterValue {
            text: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn range(min: Option<&str>, max: Option<&str>) -> Self {
        ColumnFilterValue {
            text: None,
            min: min.map(str::to_string),
            max: max.map(str::to_string),
        }
    }

    /// An entry with no usable field does not count as an active clause.
    pub fn is_empty(&self) -> bool {
        let blank = |field: &Option<String>| field.as_deref().map_or(true, |s| s.is_empty());
        blank(&self.text) && blank(&self.min) && blank(&self.max)
    }
}

// ============================================================================
// VIEW STATE
// ============================================================================

/// The user-driven parameters of one render: search text, per-column
/// filters, sort column and direction, page index and page size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    #[serde(default)]
    pub search: String,

    /// Keyed by column key. Entries may address hidden columns.
    #[serde(default, skip_serializing_if = "FxHashMap::is_empty")]
    pub filters: FxHashMap<String, ColumnFilterValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_key: Option<String>,

    #[serde(default)]
    pub sort_direction: SortDirection,

    /// Requested page index (0-based); clamped against the filtered row
    /// count at calculation time.
    #[serde(default)]
    pub page: usize,

    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            search: String::new(),
            filters: FxHashMap::default(),
            sort_key: None,
            sort_direction: SortDirection::Asc,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the global query or any per-column entry is active.
    pub fn has_active_filter(&self) -> bool {
        !self.search.trim().is_empty() || self.filters.values().any(|f| !f.is_empty())
    }

    /// Replaces the global search text; resets the page.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self.page = 0;
        self
    }

    /// Sorts by `key`, toggling the direction when the column is already the
    /// sort column and resetting to ascending otherwise; resets the page.
    pub fn with_sort(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        if self.sort_key.as_deref() == Some(key.as_str()) {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_key = Some(key);
            self.sort_direction = SortDirection::Asc;
        }
        self.page = 0;
        self
    }

    /// Merges one column's filter entry: set fields overwrite, empty-string
    /// fields clear, and an entry left without content is dropped. Resets
    /// the page.
    pub fn with_filter(mut self, key: impl Into<String>, filter: ColumnFilterValue) -> Self {
        let key = key.into();
        let entry = self.filters.entry(key.clone()).or_default();
        let merge = |slot: &mut Option<String>, incoming: Option<String>| {
            if let Some(value) = incoming {
                *slot = if value.is_empty() { None } else { Some(value) };
            }
        };
        merge(&mut entry.text, filter.text);
        merge(&mut entry.min, filter.min);
        merge(&mut entry.max, filter.max);
        if entry.is_empty() {
            self.filters.remove(&key);
        }
        self.page = 0;
        self
    }

    /// Replaces the rows-per-page setting (floored at 1); resets the page.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self.page = 0;
        self
    }

    /// Jumps to a page. No other state is touched; the calculation clamps.
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn prev_page(mut self) -> Self {
        self.page = self.page.saturating_sub(1);
        self
    }

    pub fn next_page(mut self, total_pages: usize) -> Self {
        self.page = (self.page + 1).min(total_pages.saturating_sub(1));
        self
    }
}

// ============================================================================
// RENDER OPTIONS
// ============================================================================

/// Formatting configuration plus the global type-override map.
/// Override precedence: explicit schema type > `type_overrides` > inference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridOptions {
    #[serde(default = "default_locale")]
    pub locale: String,

    #[serde(default = "default_currency_code")]
    pub currency_code: String,

    #[serde(default = "default_percent_max_digits")]
    pub percent_max_digits: u8,

    #[serde(default, skip_serializing_if = "FxHashMap::is_empty")]
    pub type_overrides: FxHashMap<String, ColumnType>,
}

fn default_locale() -> String {
    "en-US".to_string()
}

fn default_currency_code() -> String {
    "USD".to_string()
}

fn default_percent_max_digits() -> u8 {
    2
}

impl Default for GridOptions {
    fn default() -> Self {
        GridOptions {
            locale: default_locale(),
            currency_code: default_currency_code(),
            percent_max_digits: default_percent_max_digits(),
            type_overrides: FxHashMap::default(),
        }
    }
}
