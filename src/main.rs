//! ferrel - climate model diagnostics reports, parsed into tables
//!
//! This is the main entry point for the ferrel application. It scans a
//! directory for report files, parses each into records, concatenates the
//! results and writes one combined table as CSV or JSON.

use std::fs::File;
use std::io::Write;
use std::time::Instant;
use tracing::{error, info, warn};

use ferrel::report::{find_report_files, parse_report_file, ReportTable, VariableDescriptionMap};
use ferrel::spreadsheet::read_variable_descriptions_from_sheet;
use ferrel::{init_tracing, log_error, log_parse_stats, Config, Result};

fn main() -> Result<()> {
    // Load configuration
    let (config, report_dir) = Config::load()?;

    // Validate configuration
    config.validate().map_err(|e| {
        eprintln!("Invalid configuration: {}", e);
        e
    })?;

    init_tracing(&config.log_level);
    info!("Starting ferrel v{}", env!("CARGO_PKG_VERSION"));

    // Build the variable description map if a spreadsheet was given
    let descriptions = match &config.data.spreadsheet {
        Some(path) => {
            info!("Reading variable descriptions from {:?}", path);
            read_variable_descriptions_from_sheet(path, &config.data.sheet).map_err(|e| {
                error!("Failed to read spreadsheet: {}", e);
                e
            })?
        }
        None => VariableDescriptionMap::new(),
    };

    // Collect and parse the report files
    let files = find_report_files(&report_dir, &config.data.extension)?;
    if files.is_empty() {
        warn!(
            "No .{} files found in {:?}",
            config.data.extension, report_dir
        );
    }

    let mut combined = ReportTable::default();
    for path in &files {
        let start = Instant::now();
        match parse_report_file(path, &descriptions, config.verbose) {
            Ok(table) => {
                log_parse_stats(
                    &path.display().to_string(),
                    table.len(),
                    table.section_count(),
                    start.elapsed().as_secs_f64() * 1000.0,
                );
                combined.append(table);
            }
            Err(e) => {
                // A malformed file should not take down the whole batch
                log_error(&e, "parsing report file");
                warn!("Skipping {:?}", path);
            }
        }
    }

    info!(
        "Parsed {} records from {} files",
        combined.len(),
        files.len()
    );

    write_output(&combined, &config)?;

    Ok(())
}

/// Write the combined table in the configured format to file or stdout
fn write_output(table: &ReportTable, config: &Config) -> Result<()> {
    match (config.output.format.as_str(), &config.output.path) {
        ("csv", Some(path)) => {
            table.write_csv(File::create(path)?)?;
            info!("Wrote CSV table to {:?}", path);
        }
        ("csv", None) => {
            let stdout = std::io::stdout();
            table.write_csv(stdout.lock())?;
        }
        ("json", Some(path)) => {
            let mut file = File::create(path)?;
            file.write_all(table.to_json()?.as_bytes())?;
            info!("Wrote JSON table to {:?}", path);
        }
        ("json", None) => {
            println!("{}", table.to_json()?);
        }
        // validate() rejects anything else
        (other, _) => unreachable!("unvalidated output format: {}", other),
    }
    Ok(())
}
