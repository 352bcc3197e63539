//! Header resolution - map varied column names onto canonical fields
//!
//! Each canonical field has an ordered list of synonyms. Resolution takes the
//! first candidate present in the header row, so the order in the tables below
//! decides which column wins when a sheet carries more than one synonym.

use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::core::normalize::normalize_header_key;

/// Column synonyms for the collection workbook
pub mod collection {
    pub const TITLE: &[&str] = &["game", "title", "titolo"];
    pub const PLATFORM: &[&str] = &["platform", "piattaforma"];
    pub const VERSION: &[&str] = &["version"];
    pub const CD_CONDITION: &[&str] = &["cd", "disc", "cd condition", "disc condition"];
    pub const MANUAL_CONDITION: &[&str] = &["manual", "manual condition"];
    pub const PRICE: &[&str] = &["price", "prezzo"];
    pub const EXTRA: &[&str] = &["extra"];
    pub const NOTE: &[&str] = &["note", "notes", "note:"];
}

/// Column synonyms for the wishlist workbook
pub mod wishlist {
    pub const TITLE: &[&str] = &["titolo", "title", "game"];
    pub const PLATFORM: &[&str] = &["platform", "piattaforma"];
    pub const NOTE: &[&str] = &["note", "notes", "note:"];
    pub const RECEIVED: &[&str] = &["acquistato", "received", "ricevuto"];
    pub const IN_TRANSIT: &[&str] = &["in transito", "in transit", "in-transit", "transit"];
}

/// Key synonyms for the exported JSON state (matched exactly)
pub mod state {
    pub const PLATFORM: &[&str] = &["platform"];
    pub const TITLE: &[&str] = &["title"];
    pub const VERSION: &[&str] = &["version"];
    pub const CD_CONDITION: &[&str] = &["cdCondition", "cd_condition"];
    pub const MANUAL_CONDITION: &[&str] = &["manualCondition", "manual_condition"];
    pub const PRICE: &[&str] = &["price"];
    pub const EXTRA: &[&str] = &["extra"];
    pub const NOTE: &[&str] = &["note"];
    pub const IN_TRANSIT: &[&str] = &["inTransit", "in_transit"];
    pub const RECEIVED: &[&str] = &["received"];
}

/// Normalized header text to column index, built from a table's first row
#[derive(Debug, Default, Clone)]
pub struct HeaderMap {
    columns: HashMap<String, usize>,
}

impl HeaderMap {
    /// Build from a header row. Blank headers are ignored; a repeated header
    /// maps to its last column.
    pub fn from_row(row: &[String]) -> Self {
        let columns = row
            .iter()
            .enumerate()
            .filter_map(|(idx, value)| {
                let key = normalize_header_key(value);
                (!key.is_empty()).then_some((key, idx))
            })
            .collect();
        Self { columns }
    }

    /// Column index of the first candidate present in the header row
    pub fn resolve(&self, candidates: &[&str]) -> Option<usize> {
        candidates
            .iter()
            .find_map(|candidate| self.columns.get(*candidate).copied())
    }
}

/// Value of the first candidate key present in a JSON object
pub fn resolve_key<'a>(object: &'a Map<String, Value>, candidates: &[&str]) -> Option<&'a Value> {
    candidates.iter().find_map(|key| object.get(*key))
}

/// Resolved column positions for a collection sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionColumns {
    pub title: usize,
    pub platform: Option<usize>,
    pub version: Option<usize>,
    pub cd_condition: Option<usize>,
    pub manual_condition: Option<usize>,
    pub price: Option<usize>,
    pub extra: Option<usize>,
    pub note: Option<usize>,
}

impl CollectionColumns {
    /// Returns `None` when no title column exists; the sheet is then not a collection source.
    pub fn resolve(headers: &HeaderMap) -> Option<Self> {
        Some(Self {
            title: headers.resolve(collection::TITLE)?,
            platform: headers.resolve(collection::PLATFORM),
            version: headers.resolve(collection::VERSION),
            cd_condition: headers.resolve(collection::CD_CONDITION),
            manual_condition: headers.resolve(collection::MANUAL_CONDITION),
            price: headers.resolve(collection::PRICE),
            extra: headers.resolve(collection::EXTRA),
            note: headers.resolve(collection::NOTE),
        })
    }
}

/// Resolved column positions for a wishlist sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WishlistColumns {
    pub title: usize,
    pub platform: Option<usize>,
    pub note: Option<usize>,
    pub received: Option<usize>,
    pub in_transit: Option<usize>,
}

impl WishlistColumns {
    pub fn resolve(headers: &HeaderMap) -> Option<Self> {
        Some(Self {
            title: headers.resolve(wishlist::TITLE)?,
            platform: headers.resolve(wishlist::PLATFORM),
            note: headers.resolve(wishlist::NOTE),
            received: headers.resolve(wishlist::RECEIVED),
            in_transit: headers.resolve(wishlist::IN_TRANSIT),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_header_map_normalizes_keys() {
        let map = HeaderMap::from_row(&row(&["Game", " In_Transit ", "", "Disc-Condition"]));
        assert_eq!(map.resolve(&["game"]), Some(0));
        assert_eq!(map.resolve(&["in transit"]), Some(1));
        assert_eq!(map.resolve(&["disc condition"]), Some(3));
        assert_eq!(map.resolve(&["missing"]), None);
    }

    #[test]
    fn test_first_candidate_wins() {
        // Both "titolo" and "game" exist: collection prefers "game", wishlist prefers "titolo"
        let map = HeaderMap::from_row(&row(&["Titolo", "Game", "Platform"]));
        let cols = CollectionColumns::resolve(&map).unwrap();
        assert_eq!(cols.title, 1);
        let cols = WishlistColumns::resolve(&map).unwrap();
        assert_eq!(cols.title, 0);
    }

    #[test]
    fn test_missing_title_skips_sheet() {
        let map = HeaderMap::from_row(&row(&["Platform", "Price", "Note"]));
        assert!(CollectionColumns::resolve(&map).is_none());
        assert!(WishlistColumns::resolve(&map).is_none());
    }

    #[test]
    fn test_optional_columns_degrade_to_none() {
        let map = HeaderMap::from_row(&row(&["Title"]));
        let cols = CollectionColumns::resolve(&map).unwrap();
        assert_eq!(cols.title, 0);
        assert_eq!(cols.platform, None);
        assert_eq!(cols.note, None);
    }

    #[test]
    fn test_italian_wishlist_headers() {
        let map = HeaderMap::from_row(&row(&["Titolo", "Note:", "Acquistato", "In transito"]));
        let cols = WishlistColumns::resolve(&map).unwrap();
        assert_eq!(cols.note, Some(1));
        assert_eq!(cols.received, Some(2));
        assert_eq!(cols.in_transit, Some(3));
    }

    #[test]
    fn test_resolve_key_prefers_first_present() {
        let obj = json!({"cd_condition": "good", "cdCondition": "mint"});
        let obj = obj.as_object().unwrap();
        assert_eq!(resolve_key(obj, state::CD_CONDITION), Some(&json!("mint")));

        let obj = json!({"cd_condition": "good"});
        let obj = obj.as_object().unwrap();
        assert_eq!(resolve_key(obj, state::CD_CONDITION), Some(&json!("good")));
        assert_eq!(resolve_key(obj, state::PRICE), None);
    }
}
