//! In-memory permit table
//!
//! The table is loaded once at startup from a comma-delimited CSV file
//! and never changes afterwards. The first line of the file names the
//! columns; every following line is one food-truck permit record.

mod errors;
mod loader;
mod types;

pub use errors::{TableError, TableResult};
pub use loader::{load, read_table};
pub use types::{ColumnSchema, RowRecord, Table};
