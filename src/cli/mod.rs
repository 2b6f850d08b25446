//! CLI module for permitdb
//!
//! Provides the command-line interface:
//! - serve: Load the permit table and serve the HTTP lookup API
//! - query: Run one-shot reports against the permit table

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, QuerySelection};
pub use commands::{query, run, run_command, run_reports, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_group, write_match_summary, write_record_details};
