//! permitdb - food-truck permit lookups over HTTP
//!
//! Loads a mobile food facility permit CSV into memory at startup and
//! answers exact-match latitude/longitude lookups, over HTTP and from
//! the command line.

pub mod cli;
pub mod config;
pub mod http_server;
pub mod observability;
pub mod query;
pub mod table;
