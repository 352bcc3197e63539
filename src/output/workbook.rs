//! Workbook rendering - one filter-friendly table per record type plus a summary sheet
//!
//! Summary counts are written as formulas over the data sheet, so they stay
//! correct when the sheet is edited by hand between runs.

use rust_xlsxwriter::{
    Color, ConditionalFormatFormula, DataValidation, Format, FormatAlign, Table, TableColumn,
    TableStyle, Workbook, Worksheet,
};
use std::path::Path;

use crate::core::error::{Result, SyncError};
use crate::entities::{CollectionRecord, WishlistRecord};

pub const COLLECTION_SHEET: &str = "Collection";
pub const WISHLIST_SHEET: &str = "Wishlist";
pub const SUMMARY_SHEET: &str = "Summary";
pub const COLLECTION_TABLE: &str = "CollectionTable";
pub const WISHLIST_TABLE: &str = "WishlistTable";

pub const COLLECTION_HEADERS: [&str; 9] = [
    "ID", "Platform", "Title", "Version", "CD", "Manual", "Price", "Extra", "Note",
];

pub const WISHLIST_HEADERS: [&str; 9] = [
    "ID",
    "Platform",
    "Title",
    "Note",
    "Priority",
    "In Transit",
    "Received",
    "Ordered Date",
    "Received Date",
];

const HEADER_FILL: u32 = 0x1F4E78;
const TRANSIT_FILL: u32 = 0xFFF2CC;
const RECEIVED_FILL: u32 = 0xD9EAD3;
const MIN_COLUMN_WIDTH: usize = 12;
const MAX_COLUMN_WIDTH: usize = 60;

/// One line of a summary sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: String,
    pub formula: String,
}

impl SummaryRow {
    fn new(label: impl Into<String>, formula: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            formula: formula.into(),
        }
    }
}

/// Collection totals: all games, then one count per platform
pub fn collection_summary(platforms: &[String]) -> Vec<SummaryRow> {
    let mut rows = vec![SummaryRow::new(
        "Total games",
        format!("=COUNTA({COLLECTION_SHEET}!C:C)-1"),
    )];
    rows.extend(platforms.iter().map(|platform| {
        SummaryRow::new(
            format!("{platform} games"),
            format!("=COUNTIF({COLLECTION_SHEET}!B:B,{})", string_literal(platform)),
        )
    }));
    rows
}

/// Wishlist totals by status, then pending items per platform
pub fn wishlist_summary(platforms: &[String]) -> Vec<SummaryRow> {
    let mut rows = vec![
        SummaryRow::new(
            "Pending wishlist items",
            format!("=COUNTIFS({WISHLIST_SHEET}!G:G,\"No\")"),
        ),
        SummaryRow::new(
            "In transit items",
            format!("=COUNTIFS({WISHLIST_SHEET}!F:F,\"Yes\",{WISHLIST_SHEET}!G:G,\"No\")"),
        ),
        SummaryRow::new(
            "Received (to move)",
            format!("=COUNTIFS({WISHLIST_SHEET}!G:G,\"Yes\")"),
        ),
    ];
    rows.extend(platforms.iter().map(|platform| {
        SummaryRow::new(
            format!("{platform} pending"),
            format!(
                "=COUNTIFS({WISHLIST_SHEET}!B:B,{},{WISHLIST_SHEET}!G:G,\"No\")",
                string_literal(platform)
            ),
        )
    }));
    rows
}

/// Formula string literal; embedded quotes are doubled
fn string_literal(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Render the collection workbook. Records must already be arranged.
pub fn build_collection_workbook(
    records: &[CollectionRecord],
    platforms: &[String],
) -> Result<Workbook> {
    let rows: Vec<[String; 9]> = records.iter().map(CollectionRecord::to_row).collect();

    let mut sheet = Worksheet::new();
    sheet.set_name(COLLECTION_SHEET)?;
    write_table(&mut sheet, COLLECTION_TABLE, &COLLECTION_HEADERS, &rows)?;
    let last_row = rows.len() as u32;
    if last_row > 0 && !platforms.is_empty() {
        let platform_list = DataValidation::new().allow_list_strings(platforms)?;
        sheet.add_data_validation(1, 1, last_row, 1, &platform_list)?;
    }

    let mut workbook = Workbook::new();
    workbook.push_worksheet(sheet);
    workbook.push_worksheet(summary_sheet(&collection_summary(platforms))?);
    Ok(workbook)
}

/// Render the wishlist workbook. Records must already be arranged.
pub fn build_wishlist_workbook(
    records: &[WishlistRecord],
    platforms: &[String],
) -> Result<Workbook> {
    let rows: Vec<[String; 9]> = records.iter().map(WishlistRecord::to_row).collect();

    let mut sheet = Worksheet::new();
    sheet.set_name(WISHLIST_SHEET)?;
    write_table(&mut sheet, WISHLIST_TABLE, &WISHLIST_HEADERS, &rows)?;

    let last_row = rows.len() as u32;
    if last_row > 0 {
        if !platforms.is_empty() {
            let platform_list = DataValidation::new().allow_list_strings(platforms)?;
            sheet.add_data_validation(1, 1, last_row, 1, &platform_list)?;
        }
        let priority = DataValidation::new().allow_list_strings(&["Low", "Medium", "High"])?;
        sheet.add_data_validation(1, 4, last_row, 4, &priority)?;
        let yes_no = DataValidation::new().allow_list_strings(&["Yes", "No"])?;
        sheet.add_data_validation(1, 5, last_row, 6, &yes_no)?;

        let last_col = (WISHLIST_HEADERS.len() - 1) as u16;
        let in_transit = ConditionalFormatFormula::new()
            .set_rule("=$F2=\"Yes\"")
            .set_format(Format::new().set_background_color(Color::RGB(TRANSIT_FILL)));
        sheet.add_conditional_format(1, 0, last_row, last_col, &in_transit)?;
        let received = ConditionalFormatFormula::new()
            .set_rule("=$G2=\"Yes\"")
            .set_format(Format::new().set_background_color(Color::RGB(RECEIVED_FILL)));
        sheet.add_conditional_format(1, 0, last_row, last_col, &received)?;
    }

    let mut workbook = Workbook::new();
    workbook.push_worksheet(sheet);
    workbook.push_worksheet(summary_sheet(&wishlist_summary(platforms))?);
    Ok(workbook)
}

/// Reject write targets that are not `.xlsx`.
///
/// Input formats such as CSV or ODS are read-only; writing xlsx bytes under
/// their name would destroy the original.
pub fn ensure_xlsx_target(path: &Path) -> Result<()> {
    let is_xlsx = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("xlsx"));
    if is_xlsx {
        Ok(())
    } else {
        Err(SyncError::UnsupportedOutput {
            path: path.to_path_buf(),
        })
    }
}

/// Overwrite a workbook file
pub fn save_workbook(workbook: &mut Workbook, path: &Path) -> Result<()> {
    workbook.save(path).map_err(|source| SyncError::WorkbookWrite {
        path: path.to_path_buf(),
        source,
    })
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
}

/// Styled header row, data rows, frozen header and sized columns.
///
/// With at least one data row the range becomes a banded Excel table named
/// `table_name`; an empty sheet only gets an autofilter on the header.
fn write_table<const N: usize>(
    sheet: &mut Worksheet,
    table_name: &str,
    headers: &[&str; N],
    rows: &[[String; N]],
) -> Result<()> {
    let header_format = header_format();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();

    for (col, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }
    for (row_idx, row) in rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            widths[col] = widths[col].max(value.chars().count());
            if !value.is_empty() {
                sheet.write_string(row_idx as u32 + 1, col as u16, value)?;
            }
        }
    }

    let last_row = rows.len() as u32;
    let last_col = (N - 1) as u16;
    if rows.is_empty() {
        sheet.autofilter(0, 0, last_row, last_col)?;
    } else {
        let columns: Vec<TableColumn> = headers
            .iter()
            .map(|header| {
                TableColumn::new()
                    .set_header(*header)
                    .set_header_format(header_format.clone())
            })
            .collect();
        let table = Table::new()
            .set_name(table_name)
            .set_style(TableStyle::Medium2)
            .set_banded_rows(true)
            .set_columns(&columns);
        sheet.add_table(0, 0, last_row, last_col, &table)?;
    }

    sheet.set_freeze_panes(1, 0)?;
    set_widths(sheet, &widths)?;
    Ok(())
}

fn summary_sheet(rows: &[SummaryRow]) -> Result<Worksheet> {
    let header_format = header_format();
    let mut sheet = Worksheet::new();
    sheet.set_name(SUMMARY_SHEET)?;
    sheet.write_string_with_format(0, 0, "Metric", &header_format)?;
    sheet.write_string_with_format(0, 1, "Value", &header_format)?;

    let mut widths = vec!["Metric".len(), "Value".len()];
    for (idx, row) in rows.iter().enumerate() {
        let row_num = idx as u32 + 1;
        sheet.write_string(row_num, 0, &row.label)?;
        sheet.write_formula(row_num, 1, row.formula.as_str())?;
        widths[0] = widths[0].max(row.label.chars().count());
        widths[1] = widths[1].max(row.formula.chars().count());
    }

    sheet.set_freeze_panes(1, 0)?;
    sheet.autofilter(0, 0, rows.len() as u32, 1)?;
    set_widths(&mut sheet, &widths)?;
    Ok(sheet)
}

fn set_widths(sheet: &mut Worksheet, widths: &[usize]) -> Result<()> {
    for (col, width) in widths.iter().enumerate() {
        let width = (width + 2).clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH);
        sheet.set_column_width(col as u16, width as f64)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identity::{RecordId, RecordKind};
    use crate::sources::read_tables;
    use calamine::{open_workbook, Xlsx};
    use tempfile::tempdir;

    fn platforms() -> Vec<String> {
        ["PS1", "PS2", "PS4", "DS WII"].map(String::from).to_vec()
    }

    #[test]
    fn test_collection_summary_formulas() {
        let rows = collection_summary(&platforms());
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].label, "Total games");
        assert_eq!(rows[0].formula, "=COUNTA(Collection!C:C)-1");
        assert_eq!(rows[4].label, "DS WII games");
        assert_eq!(rows[4].formula, "=COUNTIF(Collection!B:B,\"DS WII\")");
    }

    #[test]
    fn test_wishlist_summary_formulas() {
        let rows = wishlist_summary(&["PS2".to_string()]);
        let formulas: Vec<&str> = rows.iter().map(|r| r.formula.as_str()).collect();
        assert_eq!(
            formulas,
            [
                "=COUNTIFS(Wishlist!G:G,\"No\")",
                "=COUNTIFS(Wishlist!F:F,\"Yes\",Wishlist!G:G,\"No\")",
                "=COUNTIFS(Wishlist!G:G,\"Yes\")",
                "=COUNTIFS(Wishlist!B:B,\"PS2\",Wishlist!G:G,\"No\")",
            ]
        );
        assert_eq!(rows[3].label, "PS2 pending");
    }

    #[test]
    fn test_platform_quotes_are_escaped_in_formulas() {
        let platforms = vec!["PS2 \"JP\"".to_string()];
        let rows = collection_summary(&platforms);
        assert_eq!(rows[1].formula, "=COUNTIF(Collection!B:B,\"PS2 \"\"JP\"\"\")");
        let rows = wishlist_summary(&platforms);
        assert_eq!(
            rows[3].formula,
            "=COUNTIFS(Wishlist!B:B,\"PS2 \"\"JP\"\"\",Wishlist!G:G,\"No\")"
        );
    }

    #[test]
    fn test_only_xlsx_targets_are_writable() {
        assert!(ensure_xlsx_target(Path::new("games.xlsx")).is_ok());
        assert!(ensure_xlsx_target(Path::new("GAMES.XLSX")).is_ok());
        for path in ["games.csv", "games.ods", "games.xls", "games"] {
            let err = ensure_xlsx_target(Path::new(path)).unwrap_err();
            assert!(matches!(err, SyncError::UnsupportedOutput { .. }), "{path}");
        }
    }

    fn table_names(path: &Path) -> Vec<String> {
        let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
        workbook.load_tables().unwrap();
        workbook.table_names().into_iter().cloned().collect()
    }

    #[test]
    fn test_data_sheets_get_excel_tables() {
        let dir = tempdir().unwrap();
        let collection_path = dir.path().join("collection.xlsx");
        let wishlist_path = dir.path().join("wishlist.xlsx");
        let records = vec![CollectionRecord::new(
            RecordId::new(RecordKind::Collection, 1),
            "PS2",
            "Ico",
        )];
        let wishes = vec![WishlistRecord::new(
            RecordId::new(RecordKind::Wishlist, 1),
            "PS4",
            "Bloodborne",
        )];

        let mut workbook = build_collection_workbook(&records, &platforms()).unwrap();
        save_workbook(&mut workbook, &collection_path).unwrap();
        let mut workbook = build_wishlist_workbook(&wishes, &platforms()).unwrap();
        save_workbook(&mut workbook, &wishlist_path).unwrap();

        assert_eq!(table_names(&collection_path), ["CollectionTable"]);
        assert_eq!(table_names(&wishlist_path), ["WishlistTable"]);

        // Table headers keep the canonical names the reader resolves
        let tables = read_tables(&collection_path).unwrap();
        assert_eq!(tables[0].header(), COLLECTION_HEADERS.map(String::from));
    }

    #[test]
    fn test_empty_sheet_has_no_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("collection.xlsx");
        let mut workbook = build_collection_workbook(&[], &platforms()).unwrap();
        save_workbook(&mut workbook, &path).unwrap();
        assert!(table_names(&path).is_empty());
    }

    #[test]
    fn test_collection_workbook_round_trips_through_reader() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("collection.xlsx");
        let mut ico = CollectionRecord::new(RecordId::new(RecordKind::Collection, 1), "PS2", "Ico");
        ico.price = "20".to_string();
        let records = vec![
            ico,
            CollectionRecord::new(RecordId::new(RecordKind::Collection, 2), "PS2", "Okami"),
        ];

        let mut workbook = build_collection_workbook(&records, &platforms()).unwrap();
        save_workbook(&mut workbook, &path).unwrap();

        let tables = read_tables(&path).unwrap();
        let names: Vec<&str> = tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Collection", "Summary"]);

        let data = &tables[0];
        assert_eq!(data.header(), COLLECTION_HEADERS.map(String::from));
        assert_eq!(data.rows[1][0], "C0001");
        assert_eq!(data.rows[1][6], "20");
        assert_eq!(data.rows[2][0], "C0002");
        assert_eq!(data.rows[2][2], "Okami");
    }

    #[test]
    fn test_wishlist_workbook_empty_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wishlist.xlsx");
        let mut workbook = build_wishlist_workbook(&[], &platforms()).unwrap();
        save_workbook(&mut workbook, &path).unwrap();

        let tables = read_tables(&path).unwrap();
        assert_eq!(tables[0].name, "Wishlist");
        assert_eq!(tables[0].rows.len(), 1);
        assert_eq!(tables[0].header(), WISHLIST_HEADERS.map(String::from));
    }

    #[test]
    fn test_wishlist_workbook_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wishlist.xlsx");
        let records = vec![
            WishlistRecord::new(RecordId::new(RecordKind::Wishlist, 1), "PS4", "Bloodborne")
                .in_transit(true),
        ];
        let mut workbook = build_wishlist_workbook(&records, &platforms()).unwrap();
        save_workbook(&mut workbook, &path).unwrap();

        let tables = read_tables(&path).unwrap();
        let row = &tables[0].rows[1];
        assert_eq!(row[0], "W0001");
        assert_eq!(row[4], "Medium");
        assert_eq!(row[5], "Yes");
        assert_eq!(row[6], "No");
    }
}
