//! `shelfsync import` - build the JSON seed from the two workbooks

use chrono::Utc;
use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::commands::utils::load_workbooks;
use crate::cli::helpers::{done, report_migration, step};
use crate::cli::GlobalOpts;
use crate::core::reconcile::reconcile;
use crate::core::Config;
use crate::output::{write_seed, Catalog};

#[derive(clap::Args, Debug)]
pub struct ImportArgs {
    /// Collection workbook (.xlsx/.ods/.csv)
    #[arg(long, short = 'c')]
    pub collection: Option<PathBuf>,

    /// Wishlist workbook (.xlsx/.ods/.csv)
    #[arg(long, short = 'w')]
    pub wishlist: Option<PathBuf>,

    /// Where to write the seed JSON
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,
}

pub fn run(args: ImportArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let collection_path = config.collection_path(args.collection);
    let wishlist_path = config.wishlist_path(args.wishlist);
    let out = config.seed_path(args.out);

    step(
        global,
        format!(
            "Reading {} and {}",
            style(collection_path.display()).yellow(),
            style(wishlist_path.display()).yellow()
        ),
    );
    let loaded = load_workbooks(&collection_path, &wishlist_path, global)?;

    let reconciled = reconcile(loaded.collection, loaded.wishlist);
    report_migration(global, &reconciled.stats);
    let catalog = Catalog::arrange(reconciled);

    write_seed(&out, &catalog, Utc::now())?;
    done(
        global,
        format!(
            "Wrote {} ({} collection items, {} wishlist items)",
            out.display(),
            catalog.collection.len(),
            catalog.wishlist.len()
        ),
    );
    Ok(())
}
