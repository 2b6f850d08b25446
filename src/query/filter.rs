//! # Location Filter
//!
//! Matches permit records against a validated location query.

use crate::table::{RowRecord, Table};

use super::parser::LocationQuery;

/// Every record at exactly the queried location, in file order.
///
/// One pass over the table. Both coordinates must match by exact string
/// comparison, so `37.777` never matches `37.7770` even though the
/// numbers are equal.
pub fn find_matches<'a>(query: &LocationQuery, table: &'a Table) -> Vec<&'a RowRecord> {
    table
        .rows()
        .iter()
        .filter(|row| {
            row.get("Latitude") == query.latitude && row.get("Longitude") == query.longitude
        })
        .collect()
}
