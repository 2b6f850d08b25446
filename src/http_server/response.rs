//! # Lookup Response Formatting
//!
//! Renders lookup results in the service's fixed JSON layout.
//!
//! The layout is byte-stable and part of the wire contract: clients
//! diff these bodies, so indentation, the space around each colon, and
//! the blank line inside an empty `trucks` array must all stay exactly
//! as they are. Field values are interpolated verbatim, with no JSON
//! escaping.

use std::io::{self, Write};

use crate::query::LocationQuery;
use crate::table::{ColumnSchema, RowRecord};

/// Writes the lookup response body to `writer`.
///
/// The header echoes the queried coordinates as the client sent them.
/// Each matching record renders every schema column in file order;
/// records and fields are comma-separated with a comma before every
/// element except the first.
pub fn write_lookup_response<W: Write>(
    writer: &mut W,
    query: &LocationQuery,
    schema: &ColumnSchema,
    matches: &[&RowRecord],
) -> io::Result<()> {
    writeln!(writer, "{{")?;
    writeln!(writer, "    \"latitude\" : \"{}\",", query.latitude)?;
    writeln!(writer, "    \"longitude\" : \"{}\",", query.longitude)?;
    writeln!(writer, "    \"trucks\" : [")?;

    for (index, record) in matches.iter().enumerate() {
        if index > 0 {
            writer.write_all(b",\n")?;
        }

        writeln!(writer, "        {{")?;
        for (column_index, column) in schema.columns().iter().enumerate() {
            if column_index > 0 {
                writer.write_all(b",\n")?;
            }
            write!(writer, "            \"{}\" : \"{}\"", column, record.get(column))?;
        }
        writer.write_all(b"\n        }")?;
    }

    writer.write_all(b"\n    ]\n}\n")?;

    Ok(())
}

/// Renders the lookup response body to a string.
pub fn render_lookup_response(
    query: &LocationQuery,
    schema: &ColumnSchema,
    matches: &[&RowRecord],
) -> String {
    let mut buffer = Vec::new();
    // Writes to a Vec cannot fail
    let _ = write_lookup_response(&mut buffer, query, schema, matches);
    String::from_utf8_lossy(&buffer).into_owned()
}
