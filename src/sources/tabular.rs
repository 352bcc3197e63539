//! Tabular adapter - records from workbook sheets
//!
//! Records are numbered in encounter order while the sheets are walked, and
//! deduplication spans every sheet of the workbook.

use std::path::Path;

use crate::core::error::{Result, SyncError};
use crate::core::headers::{CollectionColumns, HeaderMap, WishlistColumns};
use crate::core::identity::{RecordId, RecordKind};
use crate::core::normalize::{cell_text, normalize_bool, normalize_text};
use crate::entities::{CollectionRecord, WishlistRecord};

use super::table::{read_tables, RawTable};
use super::{Dedup, ParseOutcome};

/// Read and parse the collection workbook
pub fn load_collection_workbook(path: &Path) -> Result<ParseOutcome<CollectionRecord>> {
    ensure_exists(path, "Collection")?;
    Ok(parse_collection_tables(&read_tables(path)?))
}

/// Read and parse the wishlist workbook
pub fn load_wishlist_workbook(path: &Path) -> Result<ParseOutcome<WishlistRecord>> {
    ensure_exists(path, "Wishlist")?;
    Ok(parse_wishlist_tables(&read_tables(path)?))
}

pub(crate) fn ensure_exists(path: &Path, what: &'static str) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(SyncError::MissingInput {
            what,
            path: path.to_path_buf(),
        })
    }
}

/// Parse collection records from every table that has a title column
pub fn parse_collection_tables(tables: &[RawTable]) -> ParseOutcome<CollectionRecord> {
    let mut outcome = ParseOutcome::default();
    let mut dedup = Dedup::default();

    for table in tables {
        let Some(cols) = CollectionColumns::resolve(&HeaderMap::from_row(table.header())) else {
            outcome.skipped_tables.push(table.name.clone());
            continue;
        };
        let default_platform = normalize_text(&table.name);

        for row in table.data_rows() {
            let Some((platform, title)) = row_identity(row, cols.title, cols.platform, &default_platform) else {
                continue;
            };
            if !dedup.admit(&platform, &title) {
                outcome.duplicates += 1;
                continue;
            }

            let id = RecordId::new(RecordKind::Collection, outcome.records.len() + 1);
            outcome.records.push(CollectionRecord {
                id,
                platform,
                title,
                version: cell_text(row, cols.version),
                cd_condition: cell_text(row, cols.cd_condition),
                manual_condition: cell_text(row, cols.manual_condition),
                price: cell_text(row, cols.price),
                extra: cell_text(row, cols.extra),
                note: cell_text(row, cols.note),
            });
        }
    }

    outcome
}

/// Parse wishlist records from every table that has a title column
pub fn parse_wishlist_tables(tables: &[RawTable]) -> ParseOutcome<WishlistRecord> {
    let mut outcome = ParseOutcome::default();
    let mut dedup = Dedup::default();

    for table in tables {
        let Some(cols) = WishlistColumns::resolve(&HeaderMap::from_row(table.header())) else {
            outcome.skipped_tables.push(table.name.clone());
            continue;
        };
        let default_platform = normalize_text(&table.name);

        for row in table.data_rows() {
            let Some((platform, title)) = row_identity(row, cols.title, cols.platform, &default_platform) else {
                continue;
            };
            if !dedup.admit(&platform, &title) {
                outcome.duplicates += 1;
                continue;
            }

            let id = RecordId::new(RecordKind::Wishlist, outcome.records.len() + 1);
            outcome.records.push(WishlistRecord {
                id,
                platform,
                title,
                note: cell_text(row, cols.note),
                in_transit: normalize_bool(&cell_text(row, cols.in_transit)),
                received: normalize_bool(&cell_text(row, cols.received)),
            });
        }
    }

    outcome
}

/// Platform and title of a data row; `None` for rows without a title.
/// An empty platform cell falls back to the sheet name.
fn row_identity(
    row: &[String],
    title_idx: usize,
    platform_idx: Option<usize>,
    default_platform: &str,
) -> Option<(String, String)> {
    let title = cell_text(row, Some(title_idx));
    if title.is_empty() {
        return None;
    }
    let platform = cell_text(row, platform_idx);
    let platform = if platform.is_empty() {
        default_platform.to_string()
    } else {
        platform
    };
    Some((platform, title))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(name: &str, rows: &[&[&str]]) -> RawTable {
        RawTable::new(
            name,
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_collection_defaults_platform_to_sheet_name() {
        let tables = [table(
            " PS2 ",
            &[
                &["Game", "CD", "Manual", "Prezzo", "Note:"],
                &["  Ico ", "Good", "Missing", "20", ""],
                &["Okami", "", "", "", "sealed"],
            ],
        )];
        let outcome = parse_collection_tables(&tables);

        assert_eq!(outcome.records.len(), 2);
        let ico = &outcome.records[0];
        assert_eq!(ico.id.to_string(), "c1");
        assert_eq!(ico.platform, "PS2");
        assert_eq!(ico.title, "Ico");
        assert_eq!(ico.cd_condition, "Good");
        assert_eq!(ico.manual_condition, "Missing");
        assert_eq!(ico.price, "20");
        assert_eq!(outcome.records[1].note, "sealed");
        assert_eq!(outcome.records[1].id.to_string(), "c2");
    }

    #[test]
    fn test_platform_column_overrides_sheet_name() {
        let tables = [table(
            "Misc",
            &[&["Title", "Piattaforma"], &["Halo", "Xbox"], &["Tetris", ""]],
        )];
        let outcome = parse_collection_tables(&tables);
        assert_eq!(outcome.records[0].platform, "Xbox");
        assert_eq!(outcome.records[1].platform, "Misc");
    }

    #[test]
    fn test_rows_without_title_are_skipped() {
        let tables = [table(
            "PS1",
            &[&["Game", "Price"], &["", "10"], &["   ", "11"], &["Crash"]],
        )];
        let outcome = parse_collection_tables(&tables);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].title, "Crash");
        assert_eq!(outcome.records[0].id.to_string(), "c1");
    }

    #[test]
    fn test_sheet_without_title_column_is_skipped() {
        let tables = [
            table("Totals", &[&["Platform", "Count"], &["PS2", "40"]]),
            table("PS2", &[&["Game"], &["Ico"]]),
        ];
        let outcome = parse_collection_tables(&tables);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.skipped_tables, ["Totals"]);
    }

    #[test]
    fn test_empty_sheet_is_skipped() {
        let tables = [table("Empty", &[])];
        let outcome = parse_collection_tables(&tables);
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.skipped_tables, ["Empty"]);
    }

    #[test]
    fn test_duplicates_across_sheets_first_wins() {
        let tables = [
            table("A", &[&["Game", "Platform", "Note"], &["Gran Turismo", "PS2", "first"]]),
            table("B", &[&["Game", "Platform", "Note"], &["gran turismo ", "ps2", "second"]]),
        ];
        let outcome = parse_collection_tables(&tables);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].note, "first");
        assert_eq!(outcome.duplicates, 1);
    }

    #[test]
    fn test_ids_follow_encounter_order_across_sheets() {
        let tables = [
            table("PS2", &[&["Game"], &["Okami"], &["Ico"]]),
            table("PS1", &[&["Game"], &["Crash"], &["Ico"]]),
        ];
        let outcome = parse_collection_tables(&tables);
        let ids: Vec<String> = outcome
            .records
            .iter()
            .map(|r| format!("{}:{}", r.id, r.title))
            .collect();
        assert_eq!(ids, ["c1:Okami", "c2:Ico", "c3:Crash", "c4:Ico"]);
    }

    #[test]
    fn test_wishlist_flags_and_synonyms() {
        let tables = [table(
            "PS4",
            &[
                &["Titolo", "Note", "Acquistato", "In Transito"],
                &["Bloodborne", "used ok", "", "x"],
                &["Nioh", "", "yes", ""],
                &["Sekiro", "", "maybe", "no"],
            ],
        )];
        let outcome = parse_wishlist_tables(&tables);
        let records = &outcome.records;
        assert_eq!(records.len(), 3);

        assert_eq!(records[0].id.to_string(), "w1");
        assert_eq!(records[0].platform, "PS4");
        assert_eq!(records[0].note, "used ok");
        assert!(records[0].in_transit);
        assert!(!records[0].received);

        assert!(records[1].received);
        assert!(!records[1].in_transit);

        assert!(!records[2].received);
        assert!(!records[2].in_transit);
    }

    #[test]
    fn test_wishlist_duplicates_are_dropped() {
        let tables = [
            table("PS2", &[&["Title", "Note"], &["Gran Turismo", "one"]]),
            table("PS2", &[&["Title", "Note"], &["Gran Turismo", "two"]]),
        ];
        let outcome = parse_wishlist_tables(&tables);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].note, "one");
        assert_eq!(outcome.duplicates, 1);
    }

    #[test]
    fn test_missing_workbook_is_reported_with_path() {
        let err = load_collection_workbook(Path::new("/nonexistent/games.xlsx")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Collection file not found: /nonexistent/games.xlsx"
        );
    }
}
