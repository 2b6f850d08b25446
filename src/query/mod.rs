//! # Location Query Module
//!
//! Turns the service's non-standard query-string format into a
//! validated location lookup and matches it against the permit table.

pub mod errors;
pub mod filter;
pub mod parser;

pub use errors::{QueryError, QueryResult};
pub use filter::find_matches;
pub use parser::{parse_query, LocationQuery, QueryParams};
