//! Logging utilities for ferrel.
//!
//! This module provides structured logging functionality to make logs more
//! searchable and analyzable.

use tracing::{error, info};

/// Initialize the tracing subscriber with the given log level
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();
}

/// Log detailed information about one parsed report file
pub fn log_parse_stats(
    file_path: &str,
    record_count: usize,
    section_count: usize,
    duration_ms: f64,
) {
    info!(
        operation = "report_parse",
        file_path = file_path,
        record_count = record_count,
        section_count = section_count,
        duration_ms = duration_ms,
        "Report parsed successfully"
    );
}

/// Log an error with context
pub fn log_error(error: &crate::error::FerrelError, context: &str) {
    error!(
        error = %error,
        context = context,
        error_type = std::any::type_name_of_val(error),
        "Error occurred"
    );
}
