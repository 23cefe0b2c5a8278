//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the record/formatting engine.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod coerce;
pub mod format;
pub mod infer;
pub mod locale;
pub mod schema;
pub mod value;

// Re-export commonly used types at the crate root
pub use coerce::{coerce_datetime, coerce_number, has_time_marker, parse_datetime_str, parse_numeric_str};
pub use format::format_value;
pub use infer::infer_type;
pub use locale::{resolve_currency, resolve_locale, CurrencyPosition, Locale};
pub use schema::{
    resolve_align, resolve_filter_mode, synthesize_schema, Column, ColumnAlign, ColumnType,
    FilterMode,
};
pub use value::{format_number_simple, Record, RecordValue};
