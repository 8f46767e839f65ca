//! Variable description lookup from the analysis spreadsheet.
//!
//! The analysis workbook carries short description strings for some of the
//! report variables on its `DATA` sheet: variable names in column B,
//! descriptions in column C. Rows with an empty name cell are skipped;
//! description cells may be empty.

use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::Path;
use tracing::debug;

use crate::error::{FerrelError, Result};
use crate::report::VariableDescriptionMap;

/// Name of the worksheet holding the variable descriptions.
pub const DESCRIPTION_SHEET: &str = "DATA";

/// Read the variable description map from the default `DATA` sheet.
pub fn read_variable_descriptions(path: &Path) -> Result<VariableDescriptionMap> {
    read_variable_descriptions_from_sheet(path, DESCRIPTION_SHEET)
}

/// Read the variable description map from a named worksheet.
pub fn read_variable_descriptions_from_sheet(
    path: &Path,
    sheet: &str,
) -> Result<VariableDescriptionMap> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    if !workbook.sheet_names().iter().any(|name| name.as_str() == sheet) {
        return Err(FerrelError::SheetNotFound {
            name: sheet.to_string(),
        });
    }

    let range = workbook.worksheet_range(sheet)?;
    let descriptions = descriptions_from_range(&range);
    debug!(
        file = %path.display(),
        sheet = sheet,
        variables = descriptions.len(),
        "Loaded variable descriptions"
    );
    Ok(descriptions)
}

/// Extract the name -> description association from a worksheet range.
///
/// Columns are addressed absolutely: index 1 (column B) holds the variable
/// name, index 2 (column C) the description. The used-area range may be
/// anchored anywhere on the sheet (an empty column A shifts its origin),
/// so cells are looked up by absolute coordinates, not row-slice offsets.
fn descriptions_from_range(range: &Range<Data>) -> VariableDescriptionMap {
    let mut result = VariableDescriptionMap::new();
    let (start, end) = match (range.start(), range.end()) {
        (Some(start), Some(end)) => (start, end),
        _ => return result,
    };
    for row in start.0..=end.0 {
        let key = match range.get_value((row, 1)) {
            Some(Data::Empty) | None => continue,
            Some(cell) => cell.to_string(),
        };
        if key.is_empty() {
            continue;
        }
        let value = match range.get_value((row, 2)) {
            Some(Data::Empty) | None => String::new(),
            Some(cell) => cell.to_string(),
        };
        result.insert(key, value);
    }
    result
}
