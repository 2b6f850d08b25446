//! # Location Query Parser
//!
//! Parses the service's non-standard query string format.
//!
//! Queries look like `?latitude=37.777?longitude=-122.419`: segments
//! are separated by `?` rather than `&`, and each segment must split on
//! `=` into exactly one tag and one value. The format is kept for
//! compatibility with existing clients.

use std::collections::HashMap;

use super::errors::{QueryError, QueryResult};

/// Parsed query parameters, keyed by tag
pub type QueryParams = HashMap<String, String>;

/// Parses a raw query string into a tag/value map.
///
/// Empty segments (from a leading `?` or doubled separators) are
/// skipped. A repeated tag keeps the last value seen. An empty query
/// string yields an empty map; deciding whether that is an error is the
/// validator's job, not the parser's.
pub fn parse_query(query_str: &str) -> QueryResult<QueryParams> {
    let mut params = QueryParams::new();

    if query_str.is_empty() {
        return Ok(params);
    }

    for segment in query_str.split('?') {
        if segment.is_empty() {
            continue;
        }

        let parts: Vec<&str> = segment.split('=').collect();
        if parts.len() != 2 {
            return Err(QueryError::InvalidQuerySyntax {
                segment: segment.to_string(),
            });
        }

        params.insert(parts[0].to_string(), parts[1].to_string());
    }

    Ok(params)
}

/// A validated location lookup: exactly one latitude and one longitude,
/// both kept as the literal text the client sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery {
    /// Latitude text to match against the `Latitude` column
    pub latitude: String,
    /// Longitude text to match against the `Longitude` column
    pub longitude: String,
}

impl LocationQuery {
    /// Validates parsed parameters into a location query.
    ///
    /// Checks run in a fixed order and the first failure wins: no
    /// parameters at all, then the parameter count, then the `latitude`
    /// tag, then the `longitude` tag.
    pub fn from_params(params: &QueryParams) -> QueryResult<Self> {
        if params.is_empty() {
            return Err(QueryError::MissingQuery);
        }
        if params.len() != 2 {
            return Err(QueryError::InvalidParameterCount);
        }

        let latitude = params.get("latitude").ok_or(QueryError::MissingLatitude)?;
        let longitude = params.get("longitude").ok_or(QueryError::MissingLongitude)?;

        Ok(Self {
            latitude: latitude.clone(),
            longitude: longitude.clone(),
        })
    }

    /// Parses and validates a raw query string in one step.
    pub fn parse(query_str: &str) -> QueryResult<Self> {
        let params = parse_query(query_str)?;
        Self::from_params(&params)
    }
}
