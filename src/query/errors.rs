//! # Query Errors
//!
//! Error types for the location query pipeline.
//!
//! The `Display` output of these errors is written back to HTTP clients
//! verbatim, so the wording is part of the wire contract and must not
//! change.

use thiserror::Error;

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised while parsing and validating a location query
#[derive(Debug, Clone, Error)]
pub enum QueryError {
    /// A query segment did not split into exactly one tag and one value
    #[error("ERROR : invalid query = {segment}\nA query must be of the form \"tag : value\"")]
    InvalidQuerySyntax {
        /// The segment that failed to parse
        segment: String,
    },

    /// The request carried no query parameters at all
    #[error("ERROR : missing query.")]
    MissingQuery,

    /// The parameter count was something other than two
    #[error("ERROR : invalid number of queries (2 required).")]
    InvalidParameterCount,

    /// Two parameters present, but neither is tagged "latitude"
    #[error("ERROR : missing \"latitude\" parameter.")]
    MissingLatitude,

    /// Two parameters present, but neither is tagged "longitude"
    #[error("ERROR : missing \"longitude\" parameter.")]
    MissingLongitude,
}
