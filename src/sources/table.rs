//! Raw tables read from workbooks and CSV files
//!
//! A [`RawTable`] is a sheet reduced to text cells: the first row holds the
//! headers, every later row is data. Workbooks (xlsx, xls, xlsb, ods) are read
//! with calamine; a CSV file becomes a single table named after its file stem.

use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;

use crate::core::error::{Result, SyncError};

/// One sheet as rows of cell text, positioned from cell A1
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    /// Sheet name (or CSV file stem), used as the fallback platform
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// The header row, empty when the table has no rows at all
    pub fn header(&self) -> &[String] {
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Data rows below the header
    pub fn data_rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().skip(1).map(Vec::as_slice)
    }
}

/// Read every sheet of a workbook, or the single table of a CSV file
pub fn read_tables(path: &Path) -> Result<Vec<RawTable>> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    if is_csv {
        read_csv(path).map(|table| vec![table])
    } else {
        read_workbook(path)
    }
}

fn read_workbook(path: &Path) -> Result<Vec<RawTable>> {
    let read_err = |message: String| SyncError::WorkbookRead {
        path: path.to_path_buf(),
        message,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| read_err(e.to_string()))?;
    let mut tables = Vec::new();

    for name in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| read_err(format!("sheet '{}': {}", name, e)))?;
        tables.push(RawTable::new(name, range_rows(&range)));
    }

    Ok(tables)
}

/// Convert a calamine range into rows anchored at A1.
///
/// calamine trims leading empty rows and columns from a range; padding them
/// back keeps "first row is the header" true for sheets that start lower down.
fn range_rows(range: &Range<Data>) -> Vec<Vec<String>> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };

    let mut rows: Vec<Vec<String>> = (0..start_row).map(|_| Vec::new()).collect();
    for row in range.rows() {
        let mut cells = vec![String::new(); start_col as usize];
        cells.extend(row.iter().map(cell_string));
        rows.push(cells);
    }
    rows
}

fn cell_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

fn read_csv(path: &Path) -> Result<RawTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| SyncError::WorkbookRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut rows = Vec::new();
    for (row_idx, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| SyncError::WorkbookRead {
            path: path.to_path_buf(),
            message: format!("CSV parse error at row {}: {}", row_idx + 1, e),
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(RawTable::new(name, rows))
}
