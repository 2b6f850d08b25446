//! Observability subsystem for permitdb
//!
//! This module provides structured logging (JSON) for the HTTP service
//! and the CLI.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on execution
//! 3. No async or background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use permitdb::observability::Logger;
//!
//! // Log an event
//! Logger::info("TABLE_LOADED", &[("rows", "612")]);
//! ```

mod logger;

pub use logger::{Logger, Severity};
