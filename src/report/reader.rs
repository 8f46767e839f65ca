//! Report file reading.
//!
//! Report files are whole-file reads decoded as latin-1 (the diagnostics
//! package writes them in that encoding, and degree signs are common in
//! variable units). There is no streaming: one file, one string, one parse.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::parser::{parse_report, VariableDescriptionMap};
use super::record::ReportTable;
use crate::error::Result;

/// Read a report file into a string, decoding latin-1.
///
/// In latin-1 every byte maps to the Unicode code point of the same value,
/// so the decode cannot fail. The file handle is released when the read
/// returns, whether or not it succeeded.
pub fn read_report(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(decode_latin1(&bytes))
}

fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Read and parse one report file.
pub fn parse_report_file(
    path: &Path,
    descriptions: &VariableDescriptionMap,
    verbose: bool,
) -> Result<ReportTable> {
    debug!(file = %path.display(), "Parsing report file");
    let text = read_report(path)?;
    parse_report(&text, descriptions, verbose)
}

/// Find report files in a directory by extension, sorted by file name.
///
/// The extension is matched without a leading dot (`"webarchive"` matches
/// `report.webarchive`). Subdirectories are not descended into.
pub fn find_report_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(extension) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
