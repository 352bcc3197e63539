//! Shared utilities for CLI commands

use chrono::Local;
use console::style;
use miette::Result;
use std::path::Path;

use crate::cli::helpers::{done, report_backups, report_outcome, step};
use crate::cli::GlobalOpts;
use crate::core::backup::backup_file;
use crate::entities::{CollectionRecord, WishlistRecord};
use crate::output::{
    build_collection_workbook, build_wishlist_workbook, ensure_xlsx_target, save_workbook, Catalog,
};
use crate::sources::tabular::ensure_exists;
use crate::sources::{load_collection_workbook, load_state, load_wishlist_workbook};

/// Records loaded from the inputs, before reconciliation
pub struct Loaded {
    pub collection: Vec<CollectionRecord>,
    pub wishlist: Vec<WishlistRecord>,
}

/// Read both workbooks. Both must exist before either is parsed.
pub fn load_workbooks(
    collection_path: &Path,
    wishlist_path: &Path,
    global: &GlobalOpts,
) -> Result<Loaded> {
    ensure_exists(collection_path, "Collection")?;
    ensure_exists(wishlist_path, "Wishlist")?;

    let collection = load_collection_workbook(collection_path)?;
    let wishlist = load_wishlist_workbook(wishlist_path)?;
    report_outcome(global, collection_path, &collection);
    report_outcome(global, wishlist_path, &wishlist);

    Ok(Loaded {
        collection: collection.records,
        wishlist: wishlist.records,
    })
}

/// Read an exported state document
pub fn load_state_file(path: &Path, global: &GlobalOpts) -> Result<Loaded> {
    let state = load_state(path)?;
    report_outcome(global, path, &state.collection);
    report_outcome(global, path, &state.wishlist);

    Ok(Loaded {
        collection: state.collection.records,
        wishlist: state.wishlist.records,
    })
}

/// Rewrite both workbooks from an arranged catalog.
///
/// Both targets must be `.xlsx`, and both workbooks are rendered before
/// anything on disk is touched; backups share one timestamp.
pub fn write_workbooks(
    catalog: &Catalog,
    collection_path: &Path,
    wishlist_path: &Path,
    platforms: &[String],
    backup: bool,
    global: &GlobalOpts,
) -> Result<()> {
    ensure_xlsx_target(collection_path)?;
    ensure_xlsx_target(wishlist_path)?;

    let mut collection_book = build_collection_workbook(&catalog.collection, platforms)?;
    let mut wishlist_book = build_wishlist_workbook(&catalog.wishlist, platforms)?;

    if backup {
        let now = Local::now();
        let mut backups = Vec::new();
        for path in [collection_path, wishlist_path] {
            if let Some(copy) = backup_file(path, now)? {
                backups.push(copy);
            }
        }
        report_backups(global, &backups);
    }

    step(global, format!("Writing {}", style(collection_path.display()).yellow()));
    save_workbook(&mut collection_book, collection_path)?;
    step(global, format!("Writing {}", style(wishlist_path.display()).yellow()));
    save_workbook(&mut wishlist_book, wishlist_path)?;

    done(
        global,
        format!(
            "Updated {} ({} collection items)",
            collection_path.display(),
            catalog.collection.len()
        ),
    );
    done(
        global,
        format!(
            "Updated {} ({} wishlist items)",
            wishlist_path.display(),
            catalog.wishlist.len()
        ),
    );
    Ok(())
}
