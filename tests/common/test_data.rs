//! Test fixture generation for integration tests.
//!
//! Report fixtures are written as raw bytes so that latin-1 content (degree
//! signs in unit strings) exercises the decoder the way real reports do.

use std::fs;
use std::path::Path;

/// A small report with one test case section, in latin-1.
///
/// Contains banner noise, a degree sign (0xB0, invalid as UTF-8), a normal
/// data row, a problem-variable row with a missing-value sentinel, and a
/// short row that must be dropped.
pub const REPORT_ONE: &[u8] = b"\
 DIAG SET 1: ANNUAL MEANS GLOBAL

TEST CASE: run1 (yrs 1980-2000)
CONTROL CASE: ctrl1
 Temperatures in \xb0C
Variable          Model      Obs     Bias     RMSE
TEMP              1.0        2.0     3.0      4.0
FSNTOAC_CERES-EBAF 1.1 2.2 3.3 -999
SHORT             1.0        2.0     3.0
";

/// A second report with a different run, for concatenation tests.
pub const REPORT_TWO: &[u8] = b"\
TEST CASE: run2 (yrs 2001-2010)
CONTROL CASE: ctrl1
Variable          Model      Obs     Bias     RMSE
PRECT             5.0        6.0     7.0      8.0
";

/// Write both report fixtures into a directory, plus an unrelated file
/// that the directory scan must skip.
pub fn write_report_fixtures(dir: &Path) -> std::io::Result<()> {
    fs::write(dir.join("01_ann.webarchive"), REPORT_ONE)?;
    fs::write(dir.join("02_ann.webarchive"), REPORT_TWO)?;
    fs::write(dir.join("readme.txt"), b"not a report")?;
    Ok(())
}
