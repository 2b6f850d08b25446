//! Core types for the in-memory permit table
//!
//! The table holds every record from the permit CSV as a property bag
//! keyed by column name. All values stay as strings; latitude and
//! longitude are matched by exact text comparison, never parsed as
//! numbers.

use std::collections::{BTreeMap, HashMap};

/// Ordered list of column names, taken from the first line of the CSV file.
///
/// Column order is significant: record details are always rendered in
/// file order, never in map iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSchema {
    columns: Vec<String>,
}

impl ColumnSchema {
    /// Parses the schema from a CSV header line.
    ///
    /// The header is split on commas with no quoting rules, matching how
    /// data lines are split.
    pub fn parse(header: &str) -> Self {
        Self {
            columns: header.split(',').map(str::to_string).collect(),
        }
    }

    /// Builds a schema from explicit column names (used by tests).
    pub fn from_columns(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// The column names in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True when the schema declares no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// A single permit record.
///
/// Every schema column is always present; data lines shorter than the
/// schema are padded with empty strings, and values beyond the schema
/// width are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowRecord {
    fields: HashMap<String, String>,
}

impl RowRecord {
    /// Parses a record from a CSV data line against the given schema.
    pub fn parse(schema: &ColumnSchema, line: &str) -> Self {
        let mut values = line.split(',');
        let mut fields = HashMap::with_capacity(schema.len());
        for column in schema.columns() {
            let value = values.next().unwrap_or("");
            fields.insert(column.clone(), value.to_string());
        }
        Self { fields }
    }

    /// Builds a record from explicit field pairs (used by tests).
    pub fn from_fields(pairs: &[(&str, &str)]) -> Self {
        let fields = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { fields }
    }

    /// Value of the named field, or the empty string when the schema
    /// never declared that column.
    pub fn get(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }
}

/// The full permit dataset: column schema plus one record per data line.
///
/// Immutable after loading; shared across request handlers behind an
/// `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Table {
    schema: ColumnSchema,
    rows: Vec<RowRecord>,
}

impl Table {
    /// Creates a table from an already-parsed schema and rows.
    pub fn new(schema: ColumnSchema, rows: Vec<RowRecord>) -> Self {
        Self { schema, rows }
    }

    /// The column schema in file order.
    pub fn schema(&self) -> &ColumnSchema {
        &self.schema
    }

    /// All records in file order.
    pub fn rows(&self) -> &[RowRecord] {
        &self.rows
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Every row whose `field` value is exactly `value`.
    ///
    /// Comparison is plain string equality; no trimming, case folding,
    /// or numeric interpretation.
    pub fn rows_matching(&self, field: &str, value: &str) -> Vec<&RowRecord> {
        self.rows
            .iter()
            .filter(|row| row.get(field) == value)
            .collect()
    }

    /// Groups rows by the value of `field`.
    ///
    /// Group keys come back in sorted order; rows within a group keep
    /// file order.
    pub fn group_by(&self, field: &str) -> BTreeMap<&str, Vec<&RowRecord>> {
        let mut groups: BTreeMap<&str, Vec<&RowRecord>> = BTreeMap::new();
        for row in &self.rows {
            groups.entry(row.get(field)).or_default().push(row);
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        let schema = ColumnSchema::parse("Applicant,Latitude,Longitude");
        let rows = vec![
            RowRecord::parse(&schema, "Bob's Tacos,37.777,-122.419"),
            RowRecord::parse(&schema, "Curry Cart,37.751,-122.447"),
            RowRecord::parse(&schema, "Bob's Tacos,37.751,-122.447"),
        ];
        Table::new(schema, rows)
    }

    #[test]
    fn test_schema_parse_preserves_order() {
        let schema = ColumnSchema::parse("locationid,Applicant,FacilityType");
        assert_eq!(
            schema.columns(),
            &["locationid", "Applicant", "FacilityType"]
        );
    }

    #[test]
    fn test_schema_parse_single_column() {
        let schema = ColumnSchema::parse("Applicant");
        assert_eq!(schema.len(), 1);
    }

    #[test]
    fn test_row_parse_in_schema_order() {
        let schema = ColumnSchema::parse("A,B,C");
        let row = RowRecord::parse(&schema, "1,2,3");
        assert_eq!(row.get("A"), "1");
        assert_eq!(row.get("B"), "2");
        assert_eq!(row.get("C"), "3");
    }

    #[test]
    fn test_row_parse_short_line_pads_empty() {
        let schema = ColumnSchema::parse("A,B,C");
        let row = RowRecord::parse(&schema, "1");
        assert_eq!(row.get("A"), "1");
        assert_eq!(row.get("B"), "");
        assert_eq!(row.get("C"), "");
    }

    #[test]
    fn test_row_parse_long_line_drops_extras() {
        let schema = ColumnSchema::parse("A,B");
        let row = RowRecord::parse(&schema, "1,2,3,4");
        assert_eq!(row.get("A"), "1");
        assert_eq!(row.get("B"), "2");
        assert_eq!(row.get("C"), "");
    }

    #[test]
    fn test_row_get_undeclared_field_is_empty() {
        let row = RowRecord::from_fields(&[("Applicant", "Bob's Tacos")]);
        assert_eq!(row.get("Latitude"), "");
    }

    #[test]
    fn test_rows_matching_exact_equality() {
        let table = sample_table();
        let matches = table.rows_matching("Latitude", "37.751");
        assert_eq!(matches.len(), 2);
        // "37.7510" is a different string even though numerically equal
        assert!(table.rows_matching("Latitude", "37.7510").is_empty());
    }

    #[test]
    fn test_group_by_sorted_keys() {
        let table = sample_table();
        let groups = table.group_by("Applicant");
        let keys: Vec<&str> = groups.keys().copied().collect();
        assert_eq!(keys, vec!["Bob's Tacos", "Curry Cart"]);
        assert_eq!(groups["Bob's Tacos"].len(), 2);
    }

    #[test]
    fn test_group_by_keeps_file_order_within_group() {
        let table = sample_table();
        let groups = table.group_by("Applicant");
        let bobs = &groups["Bob's Tacos"];
        assert_eq!(bobs[0].get("Latitude"), "37.777");
        assert_eq!(bobs[1].get("Latitude"), "37.751");
    }
}
