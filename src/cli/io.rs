//! Report output for CLI queries
//!
//! Reports are plain text in a fixed layout:
//! - Record details: one `column : value` line per schema column, in
//!   file order, then a blank line
//! - Match summary: `No matching food trucks.` or `N food trucks found.`
//! - Grouped listing: the group key on its own line, then one indented
//!   line per record with two chosen columns

use std::io::Write;

use crate::table::{ColumnSchema, RowRecord};

use super::errors::CliResult;

/// Write full details for one record.
pub fn write_record_details<W: Write>(
    writer: &mut W,
    schema: &ColumnSchema,
    record: &RowRecord,
) -> CliResult<()> {
    for column in schema.columns() {
        writeln!(writer, "{} : {}", column, record.get(column))?;
    }
    writeln!(writer)?;

    Ok(())
}

/// Write the match count summary.
pub fn write_match_summary<W: Write>(writer: &mut W, count: usize) -> CliResult<()> {
    if count == 0 {
        writeln!(writer, "No matching food trucks.")?;
    } else {
        writeln!(writer, "{} food trucks found.", count)?;
    }

    Ok(())
}

/// Write one group: the key line, then one indented line per record
/// showing the two given columns.
pub fn write_group<W: Write>(
    writer: &mut W,
    key: &str,
    records: &[&RowRecord],
    first_column: &str,
    second_column: &str,
) -> CliResult<()> {
    writeln!(writer, "{}", key)?;
    for record in records {
        writeln!(
            writer,
            "    {} {}",
            record.get(first_column),
            record.get(second_column)
        )?;
    }

    Ok(())
}
