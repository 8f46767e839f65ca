//! Output records for parsed diagnostics reports.
//!
//! A parse pass over one report file produces a [`ReportTable`], an ordered
//! collection of [`ReportRecord`]s. Tables from several files can be
//! concatenated and exported as CSV or JSON.

use serde::{Serialize, Serializer};
use std::io::Write;

use crate::error::Result;

/// Column names for tabular export, matching the report layout.
pub const COLUMNS: [&str; 9] = [
    "Run",
    "Years",
    "Variable",
    "Description",
    "Flag",
    "Model",
    "Obs",
    "Bias",
    "RMSE",
];

/// One parsed data row of a diagnostics report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRecord {
    /// Test-case identifier, fixed by the most recent TEST CASE header
    pub run: String,
    /// Year range parsed from the same header
    pub years: String,
    /// Variable name for this row
    pub variable: String,
    /// Human-readable description, empty if none is known
    pub description: String,
    /// True iff a non-empty description was found for the variable
    pub has_description: bool,
    /// Model statistic (NaN if the source carried the missing sentinel)
    #[serde(serialize_with = "nan_as_null")]
    pub model: f64,
    /// Observation statistic
    #[serde(serialize_with = "nan_as_null")]
    pub obs: f64,
    /// Bias statistic
    #[serde(serialize_with = "nan_as_null")]
    pub bias: f64,
    /// Root-mean-square error statistic
    #[serde(serialize_with = "nan_as_null")]
    pub rmse: f64,
}

/// Serialize NaN as JSON null instead of failing.
fn nan_as_null<S: Serializer>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    if value.is_nan() {
        serializer.serialize_none()
    } else {
        serializer.serialize_f64(*value)
    }
}

/// An ordered collection of report records from one or more parse passes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportTable {
    records: Vec<ReportRecord>,
    #[serde(skip)]
    sections: usize,
}

impl ReportTable {
    /// Create a table from already-parsed records
    pub fn new(records: Vec<ReportRecord>) -> Self {
        Self {
            records,
            sections: 0,
        }
    }

    /// Create a table that also remembers how many TEST CASE sections the
    /// parse pass encountered (including sections that yielded no records)
    pub fn with_section_count(records: Vec<ReportRecord>, sections: usize) -> Self {
        Self { records, sections }
    }

    /// Number of TEST CASE sections seen while building this table
    pub fn section_count(&self) -> usize {
        self.sections
    }

    /// All records, in the order they were encountered in the input
    pub fn records(&self) -> &[ReportRecord] {
        &self.records
    }

    /// Number of records in the table
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append all records of another table, preserving order
    pub fn append(&mut self, mut other: ReportTable) {
        self.records.append(&mut other.records);
        self.sections += other.sections;
    }

    /// Concatenate several tables into one
    pub fn concat(tables: impl IntoIterator<Item = ReportTable>) -> ReportTable {
        let mut combined = ReportTable::default();
        for table in tables {
            combined.append(table);
        }
        combined
    }

    /// Write the table as CSV, with a header row.
    ///
    /// Missing statistics (NaN) are written as empty cells.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(COLUMNS)?;
        for record in &self.records {
            let model = format_value(record.model);
            let obs = format_value(record.obs);
            let bias = format_value(record.bias);
            let rmse = format_value(record.rmse);
            csv_writer.write_record([
                record.run.as_str(),
                record.years.as_str(),
                record.variable.as_str(),
                record.description.as_str(),
                if record.has_description { "true" } else { "false" },
                model.as_str(),
                obs.as_str(),
                bias.as_str(),
                rmse.as_str(),
            ])?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Serialize the table as a JSON array of records
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }
}

impl<'a> IntoIterator for &'a ReportTable {
    type Item = &'a ReportRecord;
    type IntoIter = std::slice::Iter<'a, ReportRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn format_value(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_record() -> ReportRecord {
        ReportRecord {
            run: "run1".to_string(),
            years: "1980-2000".to_string(),
            variable: "TEMP".to_string(),
            description: "Surface temperature".to_string(),
            has_description: true,
            model: 1.0,
            obs: 2.0,
            bias: 3.0,
            rmse: f64::NAN,
        }
    }

    #[test]
    fn test_csv_output() {
        let table = ReportTable::new(vec![sample_record()]);
        let mut buffer = Vec::new();
        table.write_csv(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Run,Years,Variable,Description,Flag,Model,Obs,Bias,RMSE"
        );
        assert_eq!(
            lines.next().unwrap(),
            "run1,1980-2000,TEMP,Surface temperature,true,1,2,3,"
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_json_nan_becomes_null() {
        let table = ReportTable::new(vec![sample_record()]);
        let json = table.to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed[0]["model"], 1.0);
        assert!(parsed[0]["rmse"].is_null());
    }

    #[test]
    fn test_concat_preserves_order() {
        let mut first = sample_record();
        first.variable = "TEMP".to_string();
        let mut second = sample_record();
        second.variable = "PRECT".to_string();

        let combined = ReportTable::concat([
            ReportTable::new(vec![first]),
            ReportTable::new(vec![second]),
        ]);

        assert_eq!(combined.len(), 2);
        assert_eq!(combined.records()[0].variable, "TEMP");
        assert_eq!(combined.records()[1].variable, "PRECT");
    }

    #[test]
    fn test_append_sums_section_counts() {
        let mut combined = ReportTable::with_section_count(vec![sample_record()], 2);
        combined.append(ReportTable::with_section_count(vec![sample_record()], 1));

        assert_eq!(combined.len(), 2);
        assert_eq!(combined.section_count(), 3);
    }

    #[test]
    fn test_empty_table() {
        let table = ReportTable::default();
        assert!(table.is_empty());
        assert_eq!(table.to_json().unwrap(), "[]");
    }
}
