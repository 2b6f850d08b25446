//! Table loader for reading the permit CSV at startup
//!
//! The file format is deliberately naive:
//! - First line is the column schema, split on commas
//! - Every following line is one record, split on commas
//! - No quoting or escaping rules; a comma inside a field splits it
//!
//! The dataset this service is built for never quotes fields, so the
//! naive split reads it faithfully.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use super::errors::{TableError, TableResult};
use super::types::{ColumnSchema, RowRecord, Table};

/// Loads the permit table from a CSV file on disk.
///
/// An empty file yields an empty schema and zero rows. Any I/O failure
/// is returned with the offending path attached.
pub fn load(path: impl AsRef<Path>) -> TableResult<Table> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| TableError::io(path, e))?;
    read_table(BufReader::new(file)).map_err(|e| TableError::io(path, e))
}

/// Parses a permit table from any buffered reader.
///
/// The first line becomes the schema; each later line becomes one row.
/// A trailing newline does not produce an extra empty row.
pub fn read_table<R: BufRead>(reader: R) -> io::Result<Table> {
    let mut schema = ColumnSchema::default();
    let mut rows = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if index == 0 {
            schema = ColumnSchema::parse(&line);
        } else {
            rows.push(RowRecord::parse(&schema, &line));
        }
    }

    Ok(Table::new(schema, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    const SAMPLE_CSV: &str = "\
locationid,Applicant,FacilityType,Latitude,Longitude
735318,Ziaurehman Amini,Push Cart,37.794331,-122.398979
848103,Bob's Tacos,Truck,37.777,-122.419
848104,Curry Cart,Truck,37.777,-122.419
";

    fn write_csv(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("permits.csv");
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, SAMPLE_CSV);

        let table = load(&path).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.schema().len(), 5);
        assert_eq!(table.rows()[1].get("Applicant"), "Bob's Tacos");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.csv");

        let result = load(&path);
        assert!(result.is_err());
        let display = format!("{}", result.unwrap_err());
        assert!(display.contains("absent.csv"));
    }

    #[test]
    fn test_read_empty_source() {
        let table = read_table(io::Cursor::new("")).unwrap();
        assert!(table.schema().is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn test_read_header_only() {
        let table = read_table(io::Cursor::new("A,B,C\n")).unwrap();
        assert_eq!(table.schema().len(), 3);
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn test_trailing_newline_adds_no_row() {
        let with_newline = read_table(io::Cursor::new("A,B\n1,2\n")).unwrap();
        let without = read_table(io::Cursor::new("A,B\n1,2")).unwrap();
        assert_eq!(with_newline.len(), 1);
        assert_eq!(without.len(), 1);
    }

    #[test]
    fn test_crlf_lines_are_stripped() {
        let table = read_table(io::Cursor::new("A,B\r\n1,2\r\n")).unwrap();
        assert_eq!(table.rows()[0].get("B"), "2");
    }

    #[test]
    fn test_blank_interior_line_is_an_empty_row() {
        let table = read_table(io::Cursor::new("A,B\n\n1,2\n")).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].get("A"), "");
        assert_eq!(table.rows()[0].get("B"), "");
    }

    #[test]
    fn test_quoted_fields_split_naively() {
        // No CSV quoting rules: the comma inside quotes still splits
        let table = read_table(io::Cursor::new("A,B\n\"x,y\",2\n")).unwrap();
        assert_eq!(table.rows()[0].get("A"), "\"x");
        assert_eq!(table.rows()[0].get("B"), "y\"");
    }
}
