//! CLI command implementations
//!
//! Both commands resolve configuration the same way: an optional JSON
//! config file, then flag overrides on top. The permit table is loaded
//! once per invocation; a missing or unreadable CSV is fatal.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::http_server::HttpServer;
use crate::observability::Logger;
use crate::query::{find_matches, LocationQuery};
use crate::table::{self, Table};

use super::args::{Cli, Command, QuerySelection};
use super::errors::{CliError, CliResult};
use super::io::{write_group, write_match_summary, write_record_details};

/// Config file consulted when --config is not given. May be absent.
const DEFAULT_CONFIG_PATH: &str = "./permitdb.json";

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    Logger::set_verbose(cli.verbose);
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            csv_file,
            port,
        } => serve(config.as_deref(), csv_file, port),
        Command::Query {
            config,
            csv_file,
            selection,
        } => query(config.as_deref(), csv_file, &selection),
    }
}

/// Serve the food-truck lookup API over HTTP
///
/// Loads the permit table, then blocks on the server until the process
/// is terminated.
pub fn serve(
    config_path: Option<&Path>,
    csv_file: Option<PathBuf>,
    port: Option<u16>,
) -> CliResult<()> {
    let config = resolve_config(config_path, csv_file, port)?;
    let table = load_table(&config)?;

    let server = HttpServer::with_config(config, Arc::new(table));

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Run one-shot reports against the permit table and exit
pub fn query(
    config_path: Option<&Path>,
    csv_file: Option<PathBuf>,
    selection: &QuerySelection,
) -> CliResult<()> {
    if selection.is_empty() {
        return Err(CliError::usage_error("Must provide an option."));
    }

    let config = resolve_config(config_path, csv_file, None)?;
    let table = load_table(&config)?;

    let mut stdout = io::stdout().lock();
    run_reports(&mut stdout, &table, selection)
}

/// Run the selected reports in a fixed order.
///
/// Reports always run in this order regardless of flag order on the
/// command line: applicant details, applicant grouping, location
/// lookup, latitude grouping, longitude grouping.
pub fn run_reports<W: Write>(
    writer: &mut W,
    table: &Table,
    selection: &QuerySelection,
) -> CliResult<()> {
    if let Some(applicant) = &selection.applicant {
        let matches = table.rows_matching("Applicant", applicant);
        for record in &matches {
            write_record_details(writer, table.schema(), record)?;
        }
        write_match_summary(writer, matches.len())?;
    }

    if selection.applicant_sort {
        for (applicant, records) in table.group_by("Applicant") {
            write_group(writer, applicant, &records, "Latitude", "Longitude")?;
        }
    }

    if let (Some(latitude), Some(longitude)) = (&selection.latitude, &selection.longitude) {
        let location = LocationQuery {
            latitude: latitude.clone(),
            longitude: longitude.clone(),
        };
        let matches = find_matches(&location, table);
        for record in &matches {
            write_record_details(writer, table.schema(), record)?;
        }
        write_match_summary(writer, matches.len())?;
    }

    if selection.latitude_sort {
        for (latitude, records) in table.group_by("Latitude") {
            write_group(writer, latitude, &records, "Longitude", "Applicant")?;
        }
    }

    if selection.longitude_sort {
        for (longitude, records) in table.group_by("Longitude") {
            write_group(writer, longitude, &records, "Latitude", "Applicant")?;
        }
    }

    Ok(())
}

/// Resolve configuration: file first, then flag overrides.
///
/// An explicit --config must name a readable file; the default path is
/// allowed to be absent.
fn resolve_config(
    config_path: Option<&Path>,
    csv_file: Option<PathBuf>,
    port: Option<u16>,
) -> CliResult<ServiceConfig> {
    let mut config = match config_path {
        Some(path) => ServiceConfig::load(path)?,
        None => ServiceConfig::load_or_default(Path::new(DEFAULT_CONFIG_PATH))?,
    };

    if let Some(csv_file) = csv_file {
        config.csv_file = csv_file.display().to_string();
    }
    if let Some(port) = port {
        config.port = port;
    }

    config.validate()?;

    Ok(config)
}

/// Load the permit table and log its shape
fn load_table(config: &ServiceConfig) -> CliResult<Table> {
    let table = table::load(config.csv_path())?;

    let rows = table.len().to_string();
    let columns = table.schema().len().to_string();
    Logger::info(
        "TABLE_LOADED",
        &[
            ("columns", &columns),
            ("file", &config.csv_file),
            ("rows", &rows),
        ],
    );

    Ok(table)
}
