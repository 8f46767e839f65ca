//! Single-pass line scanner for diagnostics comparison reports.
//!
//! Reports are semi-structured text: a `TEST CASE:` header naming the run
//! and its year range, an optional `CONTROL CASE:` header, a column-header
//! line containing the word `Variable`, and then one statistics row per
//! variable (Model, Obs, Bias, RMSE). Everything else is noise and is
//! ignored. The scanner keeps a handful of state variables and emits one
//! [`ReportRecord`] per well-formed data row.

use std::collections::HashMap;
use tracing::debug;

use super::record::{ReportRecord, ReportTable};
use crate::error::{FerrelError, Result};

/// Mapping from variable name to description string.
///
/// Typically built from the analysis spreadsheet via
/// [`crate::spreadsheet::read_variable_descriptions`]. Values may be empty;
/// an empty value is treated the same as a missing key.
pub type VariableDescriptionMap = HashMap<String, String>;

/// Sentinel used in report data to denote "no value".
const MISSING_SENTINEL: f64 = -999.0;

/// Variable names that defeat whitespace tokenization.
///
/// These names are matched as literal substrings before the generic
/// first-token split. This is a lexical workaround for a fixed set of known
/// names, not a general escaping scheme.
const PROBLEM_VARIABLES: [&str; 2] = ["FSNTOAC_CERES-EBAF", "FSNTOA_CERES-EBAF"];

const TEST_CASE_MARKER: &str = "TEST CASE:";
const CONTROL_CASE_MARKER: &str = "CONTROL CASE:";
const COLUMN_HEADER_MARKER: &str = "Variable";

/// Classification of a single report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `TEST CASE:` header carrying the run name and year range
    TestCase,
    /// `CONTROL CASE:` header carrying the control run name
    ControlCase,
    /// Column-header line that opens the data section
    ColumnHeader,
    /// Candidate data row (only inside a data section)
    Data,
    /// Anything else
    Ignored,
}

/// Classify one line of a report.
///
/// Classification is checked in precedence order; `in_data_section` decides
/// whether an unmarked line is a candidate data row or noise.
pub fn classify_line(line: &str, in_data_section: bool) -> LineKind {
    if line.contains(TEST_CASE_MARKER) {
        LineKind::TestCase
    } else if line.contains(CONTROL_CASE_MARKER) {
        LineKind::ControlCase
    } else if line.contains(COLUMN_HEADER_MARKER) {
        LineKind::ColumnHeader
    } else if in_data_section {
        LineKind::Data
    } else {
        LineKind::Ignored
    }
}

/// Parse the full text of one report into an ordered table of records.
///
/// A single forward pass over the lines, O(n) in line count. Data rows that
/// do not decompose into a variable name plus exactly four tokens are
/// dropped; a non-numeric token among exactly four is a fatal error for the
/// whole call. The literal value `-999` is normalized to NaN.
///
/// The function is pure: parsing the same text twice yields identical
/// record sequences.
pub fn parse_report(
    text: &str,
    descriptions: &VariableDescriptionMap,
    verbose: bool,
) -> Result<ReportTable> {
    let mut run = String::new();
    let mut years = String::new();
    let mut control_case = String::new();
    let mut in_data_section = false;
    let mut sections = 0usize;
    let mut records = Vec::new();

    for line in text.lines() {
        match classify_line(line, in_data_section) {
            LineKind::TestCase => {
                let remainder = line
                    .split(TEST_CASE_MARKER)
                    .nth(1)
                    .unwrap_or_default()
                    .trim();
                match remainder.split_once("(yrs ") {
                    Some((name, tail)) => {
                        run = name.trim().to_string();
                        years = tail.split(')').next().unwrap_or_default().to_string();
                    }
                    None => {
                        run = remainder.to_string();
                        years.clear();
                    }
                }
                // A new section starts; data rows resume only after the
                // next column-header line.
                in_data_section = false;
                sections += 1;
            }
            LineKind::ControlCase => {
                control_case = line
                    .split(CONTROL_CASE_MARKER)
                    .nth(1)
                    .unwrap_or_default()
                    .trim()
                    .to_string();
            }
            LineKind::ColumnHeader => {
                in_data_section = true;
            }
            LineKind::Data => {
                if let Some(record) = parse_data_row(line, &run, &years, descriptions, verbose)? {
                    records.push(record);
                }
            }
            LineKind::Ignored => {
                if verbose {
                    debug!(line = line, "Ignoring line");
                }
            }
        }
    }

    if verbose {
        debug!(
            test_case = %run,
            control_case = %control_case,
            sections = sections,
            records = records.len(),
            "Finished parsing report"
        );
    }

    Ok(ReportTable::with_section_count(records, sections))
}

/// Decompose one candidate data row into a record, or None if dropped.
fn parse_data_row(
    line: &str,
    run: &str,
    years: &str,
    descriptions: &VariableDescriptionMap,
    verbose: bool,
) -> Result<Option<ReportRecord>> {
    let (variable, tokens) = split_data_row(line, verbose);

    if tokens.len() != 4 {
        if verbose {
            debug!(
                line = line,
                tokens = tokens.len(),
                "Dropping data row with wrong token count"
            );
        }
        return Ok(None);
    }

    let description = descriptions.get(&variable).cloned().unwrap_or_default();
    let has_description = !description.is_empty();

    let mut values = [0.0f64; 4];
    for (slot, token) in values.iter_mut().zip(tokens.iter().copied()) {
        *slot = parse_statistic(token, &variable)?;
    }

    Ok(Some(ReportRecord {
        run: run.to_string(),
        years: years.to_string(),
        variable,
        description,
        has_description,
        model: values[0],
        obs: values[1],
        bias: values[2],
        rmse: values[3],
    }))
}

/// Split a data row into its variable name and numeric tokens.
///
/// Problem variables are matched as literal substrings first; everything
/// after the match is the token sequence. Otherwise the first whitespace
/// token is the variable name.
fn split_data_row<'a>(line: &'a str, verbose: bool) -> (String, Vec<&'a str>) {
    for name in PROBLEM_VARIABLES {
        if line.contains(name) {
            if verbose {
                debug!(variable = name, "Problem variable row");
            }
            let tail = line.split(name).nth(1).unwrap_or_default();
            return (name.to_string(), tail.split_whitespace().collect());
        }
    }

    let mut tokens = line.split_whitespace();
    match tokens.next() {
        Some(first) => (first.to_string(), tokens.collect()),
        None => (String::new(), Vec::new()),
    }
}

/// Parse a single statistic token, normalizing the missing sentinel to NaN.
fn parse_statistic(token: &str, variable: &str) -> Result<f64> {
    let value: f64 = token.parse().map_err(|_| FerrelError::NumericParse {
        token: token.to_string(),
        variable: variable.to_string(),
    })?;
    if value == MISSING_SENTINEL {
        Ok(f64::NAN)
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\
Some banner text
TEST CASE: run1 (yrs 1980-2000)
CONTROL CASE: ctrl1
Variable          Model      Obs     Bias     RMSE
TEMP              1.0        2.0     3.0      4.0
";

    #[test]
    fn test_canonical_section() {
        let table = parse_report(SAMPLE, &VariableDescriptionMap::new(), false).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.section_count(), 1);
        let record = &table.records()[0];
        assert_eq!(record.run, "run1");
        assert_eq!(record.years, "1980-2000");
        assert_eq!(record.variable, "TEMP");
        assert_eq!(record.description, "");
        assert!(!record.has_description);
        assert_eq!(record.model, 1.0);
        assert_eq!(record.obs, 2.0);
        assert_eq!(record.bias, 3.0);
        assert_eq!(record.rmse, 4.0);
    }

    #[test]
    fn test_description_lookup() {
        let mut descriptions = VariableDescriptionMap::new();
        descriptions.insert("TEMP".to_string(), "Surface temperature".to_string());

        let table = parse_report(SAMPLE, &descriptions, false).unwrap();
        let record = &table.records()[0];
        assert!(record.has_description);
        assert_eq!(record.description, "Surface temperature");
    }

    #[test]
    fn test_empty_description_counts_as_absent() {
        let mut descriptions = VariableDescriptionMap::new();
        descriptions.insert("TEMP".to_string(), String::new());

        let table = parse_report(SAMPLE, &descriptions, false).unwrap();
        let record = &table.records()[0];
        assert!(!record.has_description);
        assert_eq!(record.description, "");
    }

    #[test]
    fn test_problem_variable_and_sentinel() {
        let text = "\
TEST CASE: run1 (yrs 1980-2000)
Variable  Model  Obs  Bias  RMSE
FSNTOAC_CERES-EBAF 1.1 2.2 3.3 -999
";
        let table = parse_report(text, &VariableDescriptionMap::new(), false).unwrap();

        assert_eq!(table.len(), 1);
        let record = &table.records()[0];
        assert_eq!(record.variable, "FSNTOAC_CERES-EBAF");
        assert_eq!(record.model, 1.1);
        assert!(record.rmse.is_nan());
    }

    #[test]
    fn test_wrong_token_count_is_dropped() {
        let text = "\
TEST CASE: run1 (yrs 1980-2000)
Variable  Model  Obs  Bias  RMSE
TEMP  1.0  2.0  3.0
PRECT 1.0  2.0  3.0  4.0  5.0
";
        let table = parse_report(text, &VariableDescriptionMap::new(), false).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_non_numeric_token_is_fatal() {
        let text = "\
TEST CASE: run1 (yrs 1980-2000)
Variable  Model  Obs  Bias  RMSE
TEMP  1.0  2.0  bogus  4.0
";
        let result = parse_report(text, &VariableDescriptionMap::new(), false);
        match result {
            Err(FerrelError::NumericParse { token, variable }) => {
                assert_eq!(token, "bogus");
                assert_eq!(variable, "TEMP");
            }
            other => panic!("Expected NumericParse error, got {:?}", other),
        }
    }

    #[test]
    fn test_header_without_data_section() {
        let text = "TEST CASE: run1 (yrs 1980-2000)\nCONTROL CASE: ctrl1\n";
        let table = parse_report(text, &VariableDescriptionMap::new(), false).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_rows_before_any_header_have_empty_run() {
        let text = "\
Variable  Model  Obs  Bias  RMSE
TEMP  1.0  2.0  3.0  4.0
";
        let table = parse_report(text, &VariableDescriptionMap::new(), false).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0].run, "");
        assert_eq!(table.records()[0].years, "");
    }

    #[test]
    fn test_two_sections() {
        let text = "\
TEST CASE: run1 (yrs 1980-2000)
Variable  Model  Obs  Bias  RMSE
TEMP  1.0  2.0  3.0  4.0
TEST CASE: run2 (yrs 2001-2010)
Variable  Model  Obs  Bias  RMSE
TEMP  5.0  6.0  7.0  8.0
";
        let table = parse_report(text, &VariableDescriptionMap::new(), false).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.section_count(), 2);
        assert_eq!(table.records()[0].run, "run1");
        assert_eq!(table.records()[1].run, "run2");
        assert_eq!(table.records()[1].years, "2001-2010");
        assert_eq!(table.records()[1].model, 5.0);
    }

    #[test]
    fn test_section_without_column_header_emits_nothing() {
        // Rows between a TEST CASE header and the next column-header line
        // are not data rows yet.
        let text = "\
TEST CASE: run1 (yrs 1980-2000)
Variable  Model  Obs  Bias  RMSE
TEMP  1.0  2.0  3.0  4.0
TEST CASE: run2 (yrs 2001-2010)
TEMP  5.0  6.0  7.0  8.0
";
        let table = parse_report(text, &VariableDescriptionMap::new(), false).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0].run, "run1");
        // The headerless section still counts as seen
        assert_eq!(table.section_count(), 2);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let mut descriptions = VariableDescriptionMap::new();
        descriptions.insert("TEMP".to_string(), "Surface temperature".to_string());

        let first = parse_report(SAMPLE, &descriptions, false).unwrap();
        let second = parse_report(SAMPLE, &descriptions, false).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_classify_line() {
        assert_eq!(
            classify_line("TEST CASE: run1 (yrs 1980-2000)", false),
            LineKind::TestCase
        );
        assert_eq!(classify_line("CONTROL CASE: ctrl1", false), LineKind::ControlCase);
        assert_eq!(
            classify_line("Variable  Model  Obs  Bias  RMSE", false),
            LineKind::ColumnHeader
        );
        assert_eq!(classify_line("TEMP 1 2 3 4", true), LineKind::Data);
        assert_eq!(classify_line("TEMP 1 2 3 4", false), LineKind::Ignored);
    }
}
