//! JSON seed document consumed by the app

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::core::error::{Result, SyncError};
use crate::entities::{CollectionRecord, WishlistRecord};

use super::Catalog;

/// The seed file layout
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedDocument<'a> {
    pub generated_at: String,
    pub collection: &'a [CollectionRecord],
    pub wishlist: &'a [WishlistRecord],
}

impl<'a> SeedDocument<'a> {
    pub fn new(catalog: &'a Catalog, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Micros, false),
            collection: &catalog.collection,
            wishlist: &catalog.wishlist,
        }
    }
}

/// Pretty-printed seed text with a trailing newline
pub fn render_seed(catalog: &Catalog, generated_at: DateTime<Utc>) -> Result<String> {
    let mut text = serde_json::to_string_pretty(&SeedDocument::new(catalog, generated_at))?;
    text.push('\n');
    Ok(text)
}

/// Overwrite the seed file, creating parent directories as needed
pub fn write_seed(path: &Path, catalog: &Catalog, generated_at: DateTime<Utc>) -> Result<()> {
    let text = render_seed(catalog, generated_at)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SyncError::io(parent, e))?;
    }
    fs::write(path, text).map_err(|e| SyncError::io(path, e))
}
