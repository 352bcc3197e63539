//! JSON state adapter - records from the document exported by the app
//!
//! Unlike the tabular path, identifiers are assigned only after the whole
//! array has been parsed, and rows without a platform are dropped since there
//! is no sheet name to fall back on.

use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::core::entity::renumber;
use crate::core::error::{Result, SyncError};
use crate::core::headers::{resolve_key, state};
use crate::core::identity::{RecordId, RecordKind};
use crate::core::normalize::{value_bool, value_text};
use crate::entities::{CollectionRecord, WishlistRecord};

use super::tabular::ensure_exists;
use super::{Dedup, ParseOutcome};

/// Both record sets of a state document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    pub collection: ParseOutcome<CollectionRecord>,
    pub wishlist: ParseOutcome<WishlistRecord>,
}

/// Read and validate a state file
pub fn load_state(path: &Path) -> Result<State> {
    ensure_exists(path, "State")?;
    let content = fs::read_to_string(path).map_err(|e| SyncError::io(path, e))?;
    let document: Value = serde_json::from_str(&content).map_err(|e| SyncError::InvalidJson {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_state(&document)
}

/// Validate the document shape and parse both arrays
pub fn parse_state(document: &Value) -> Result<State> {
    let root = document.as_object().ok_or(SyncError::StateRoot)?;

    let collection = root.get("collection").and_then(Value::as_array);
    let wishlist = root.get("wishlist").and_then(Value::as_array);
    let (Some(collection), Some(wishlist)) = (collection, wishlist) else {
        return Err(SyncError::StateShape);
    };

    Ok(State {
        collection: parse_collection_rows(collection),
        wishlist: parse_wishlist_rows(wishlist),
    })
}

fn text(object: &Map<String, Value>, keys: &[&str]) -> String {
    resolve_key(object, keys).map(value_text).unwrap_or_default()
}

fn flag(object: &Map<String, Value>, keys: &[&str]) -> bool {
    resolve_key(object, keys).is_some_and(value_bool)
}

/// Platform and title of an object; `None` when either is empty
fn object_identity(object: &Map<String, Value>) -> Option<(String, String)> {
    let platform = text(object, state::PLATFORM);
    let title = text(object, state::TITLE);
    (!platform.is_empty() && !title.is_empty()).then_some((platform, title))
}

fn parse_collection_rows(rows: &[Value]) -> ParseOutcome<CollectionRecord> {
    let mut outcome = ParseOutcome::default();
    let mut dedup = Dedup::default();
    let placeholder = RecordId::new(RecordKind::Collection, 0);

    for object in rows.iter().filter_map(Value::as_object) {
        let Some((platform, title)) = object_identity(object) else {
            continue;
        };
        if !dedup.admit(&platform, &title) {
            outcome.duplicates += 1;
            continue;
        }
        outcome.records.push(CollectionRecord {
            id: placeholder,
            platform,
            title,
            version: text(object, state::VERSION),
            cd_condition: text(object, state::CD_CONDITION),
            manual_condition: text(object, state::MANUAL_CONDITION),
            price: text(object, state::PRICE),
            extra: text(object, state::EXTRA),
            note: text(object, state::NOTE),
        });
    }

    renumber(&mut outcome.records);
    outcome
}

fn parse_wishlist_rows(rows: &[Value]) -> ParseOutcome<WishlistRecord> {
    let mut outcome = ParseOutcome::default();
    let mut dedup = Dedup::default();
    let placeholder = RecordId::new(RecordKind::Wishlist, 0);

    for object in rows.iter().filter_map(Value::as_object) {
        let Some((platform, title)) = object_identity(object) else {
            continue;
        };
        if !dedup.admit(&platform, &title) {
            outcome.duplicates += 1;
            continue;
        }
        outcome.records.push(WishlistRecord {
            id: placeholder,
            platform,
            title,
            note: text(object, state::NOTE),
            in_transit: flag(object, state::IN_TRANSIT),
            received: flag(object, state::RECEIVED),
        });
    }

    renumber(&mut outcome.records);
    outcome
}
