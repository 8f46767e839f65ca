//! Diagnostics report parsing.
//!
//! This module turns the plain-text comparison reports produced by the
//! diagnostics package (TEST CASE / CONTROL CASE headers followed by one
//! statistics row per variable) into an ordered, in-memory table.

pub mod parser;
pub mod reader;
pub mod record;

pub use parser::{classify_line, parse_report, LineKind, VariableDescriptionMap};
pub use reader::{find_report_files, parse_report_file, read_report};
pub use record::{ReportRecord, ReportTable};
