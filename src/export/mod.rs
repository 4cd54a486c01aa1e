//! CSV export.
//!
//! Byte-string columns are decoded to UTF-8 text first; the table is then
//! written with a header row of column names and one line per row.

mod format;

use crate::error::{Error, Result};
use crate::table::{ColumnData, Table};
use format::format_cell;
use std::path::Path;
use tracing::{debug, info};

/// Decode every byte-string column to UTF-8 text in place
///
/// # Errors
///
/// Returns [`Error::Decode`] naming the first column and row that is not valid
/// UTF-8. The offending column is left untouched.
pub fn decode_text_columns(table: &mut Table) -> Result<()> {
    for column in table.columns_mut() {
        let ColumnData::Bytes(values) = &column.data else {
            continue;
        };

        let text = values
            .iter()
            .enumerate()
            .map(|(row, raw)| {
                std::str::from_utf8(raw)
                    .map(str::to_owned)
                    .map_err(|source| Error::Decode {
                        column: column.name.clone(),
                        row,
                        source,
                    })
            })
            .collect::<Result<Vec<String>>>()?;

        debug!(column = %column.name, values = text.len(), "decoded byte strings");
        column.data = ColumnData::Text(text);
    }
    Ok(())
}

/// Write a table of scalar columns as comma-separated text
///
/// Existing files are overwritten. Lines end in `\n`; fields are quoted only
/// when they contain a delimiter, quote or line break.
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    if let Some(column) = table.columns().iter().find(|c| !c.is_scalar()) {
        return Err(Error::NonScalarColumn(column.name.clone()));
    }

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(path)?;

    writer.write_record(table.column_names())?;

    let mut record = csv::StringRecord::with_capacity(1024, table.columns().len());
    for row in 0..table.num_rows() {
        record.clear();
        for column in table.columns() {
            record.push_field(&format_cell(column, row)?);
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;

    info!(
        path = %path.display(),
        rows = table.num_rows(),
        columns = table.columns().len(),
        "wrote CSV"
    );
    Ok(())
}

/// Decode text columns, then write the table as CSV
pub fn export_csv(table: &mut Table, path: &Path) -> Result<()> {
    decode_text_columns(table)?;
    write_csv(table, path)
}
