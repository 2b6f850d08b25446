//! CLI argument definitions using clap
//!
//! Commands:
//! - permitdb serve [--config <path>] [--csv-file <path>] [--port <port>]
//! - permitdb query [--config <path>] [--csv-file <path>] <selectors>

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// permitdb - food-truck permit lookups over HTTP and the command line
#[derive(Parser, Debug)]
#[command(name = "permitdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Display trace messages
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the food-truck lookup API over HTTP
    Serve {
        /// Path to configuration file (default ./permitdb.json, may be absent)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Permit CSV file, overriding the config
        #[arg(long)]
        csv_file: Option<PathBuf>,

        /// Port to listen on, overriding the config
        #[arg(long)]
        port: Option<u16>,
    },

    /// Run one-shot reports against the permit table and exit
    Query {
        /// Path to configuration file (default ./permitdb.json, may be absent)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Permit CSV file, overriding the config
        #[arg(long)]
        csv_file: Option<PathBuf>,

        #[command(flatten)]
        selection: QuerySelection,
    },
}

/// Report selectors for the query command.
///
/// At least one must be given; several may be combined and the reports
/// run in a fixed order.
#[derive(Args, Debug, Default)]
pub struct QuerySelection {
    /// Show details for a food-truck applicant
    #[arg(long)]
    pub applicant: Option<String>,

    /// Show all trucks grouped by applicant
    #[arg(long)]
    pub applicant_sort: bool,

    /// Food-truck latitude (requires --longitude)
    #[arg(long, requires = "longitude", allow_hyphen_values = true)]
    pub latitude: Option<String>,

    /// Show all trucks grouped by latitude
    #[arg(long)]
    pub latitude_sort: bool,

    /// Food-truck longitude (requires --latitude)
    #[arg(long, requires = "latitude", allow_hyphen_values = true)]
    pub longitude: Option<String>,

    /// Show all trucks grouped by longitude
    #[arg(long)]
    pub longitude_sort: bool,
}

impl QuerySelection {
    /// True when no selector flag was given
    pub fn is_empty(&self) -> bool {
        self.applicant.is_none()
            && !self.applicant_sort
            && self.latitude.is_none()
            && !self.latitude_sort
            && self.longitude.is_none()
            && !self.longitude_sort
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_overrides() {
        let cli = Cli::try_parse_from([
            "permitdb",
            "serve",
            "--csv-file",
            "trucks.csv",
            "--port",
            "9000",
        ])
        .unwrap();

        match cli.command {
            Command::Serve {
                config,
                csv_file,
                port,
            } => {
                assert!(config.is_none());
                assert_eq!(csv_file, Some(PathBuf::from("trucks.csv")));
                assert_eq!(port, Some(9000));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_query_applicant() {
        let cli = Cli::try_parse_from([
            "permitdb",
            "query",
            "--applicant",
            "Bob's Tacos",
        ])
        .unwrap();

        match cli.command {
            Command::Query { selection, .. } => {
                assert_eq!(selection.applicant.as_deref(), Some("Bob's Tacos"));
                assert!(!selection.is_empty());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_latitude_requires_longitude() {
        let result = Cli::try_parse_from(["permitdb", "query", "--latitude", "37.777"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_longitude_requires_latitude() {
        let result = Cli::try_parse_from(["permitdb", "query", "--longitude", "-122.419"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_location_pair_parses() {
        let cli = Cli::try_parse_from([
            "permitdb",
            "query",
            "--latitude",
            "37.777",
            "--longitude",
            "-122.419",
        ])
        .unwrap();

        match cli.command {
            Command::Query { selection, .. } => {
                assert_eq!(selection.latitude.as_deref(), Some("37.777"));
                assert_eq!(selection.longitude.as_deref(), Some("-122.419"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    /// Western-hemisphere longitudes start with '-'; the value must not
    /// be mistaken for a flag.
    #[test]
    fn test_negative_coordinates_parse() {
        let cli = Cli::try_parse_from([
            "permitdb",
            "query",
            "--latitude",
            "-37.813",
            "--longitude",
            "-122.419",
        ])
        .unwrap();

        match cli.command {
            Command::Query { selection, .. } => {
                assert_eq!(selection.latitude.as_deref(), Some("-37.813"));
                assert_eq!(selection.longitude.as_deref(), Some("-122.419"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["permitdb", "serve", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_no_selector_is_empty() {
        let cli = Cli::try_parse_from(["permitdb", "query"]).unwrap();
        match cli.command {
            Command::Query { selection, .. } => assert!(selection.is_empty()),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
