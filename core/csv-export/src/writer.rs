//! FILENAME: core/csv-export/src/writer.rs
//! PURPOSE: CSV serialization of the filtered+sorted grid result.
//! CONTEXT: The export covers every filtered row (never just the current
//! page) and only the visible columns, header included. Cells are rendered
//! by the same formatter as the on-screen view, so what the user exports is
//! byte-for-byte what they saw. Quoting is the csv crate's quote-when-
//! necessary rule (comma, quote, newline); rows are `\n`-terminated.

use crate::error::ExportError;
use engine::{Column, Record};
use grid_engine::{GridCalculator, GridOptions, ViewState};
use std::io::Write;
use std::path::Path;

/// Serializes the filtered+sorted dataset as a CSV string.
pub fn export_csv(
    records: &[Record],
    schema: Option<&[Column]>,
    state: &ViewState,
    options: &GridOptions,
) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_grid(records, schema, state, options, &mut writer)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Writes the CSV blob to a file on disk.
pub fn export_csv_path(
    path: &Path,
    records: &[Record],
    schema: Option<&[Column]>,
    state: &ViewState,
    options: &GridOptions,
) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    write_grid(records, schema, state, options, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Header row of visible labels, then one row per filtered+sorted record.
/// With no visible columns at all, the output is fully empty.
fn write_grid<W: Write>(
    records: &[Record],
    schema: Option<&[Column]>,
    state: &ViewState,
    options: &GridOptions,
    writer: &mut csv::Writer<W>,
) -> Result<(), ExportError> {
    let calculator = GridCalculator::new(records, schema, state, options);
    let visible = calculator.visible_columns();
    if visible.is_empty() {
        return Ok(());
    }

    writer.write_record(visible.iter().map(|c| c.display_label()))?;
    for row in calculator.export_rows() {
        writer.write_record(&row)?;
    }
    Ok(())
}
