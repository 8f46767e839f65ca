//! # ferrel
//!
//! Climate model diagnostics reports, parsed into tables.
//!
//! This library provides the helpers behind a climate-data analysis
//! workflow: a parser that turns semi-structured model/observation
//! comparison reports into tabular records, a spreadsheet reader that
//! extracts variable description strings, and a midpoint-shifting
//! transform for diverging colormaps.
//!
//! ## Key Features
//!
//! - **Report parsing**: single-pass conversion of TEST CASE / CONTROL CASE
//!   comparison reports into ordered records with CSV and JSON export
//! - **Description lookup**: variable descriptions read from the `DATA`
//!   sheet of the analysis workbook
//! - **Shifted colormaps**: diverging colormaps re-centered so that zero
//!   data renders in the neutral color

pub mod colormaps;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod spreadsheet;

pub use config::Config;
pub use error::{FerrelError, Result};
pub use logging::{init_tracing, log_error, log_parse_stats};
pub use report::{
    parse_report, parse_report_file, ReportRecord, ReportTable, VariableDescriptionMap,
};
pub use spreadsheet::{read_variable_descriptions, read_variable_descriptions_from_sheet};
