//! `shelfsync restructure` - rewrite both workbooks in the canonical layout

use miette::Result;
use std::path::PathBuf;

use crate::cli::commands::utils::{load_workbooks, write_workbooks};
use crate::cli::helpers::{done, report_migration};
use crate::cli::GlobalOpts;
use crate::core::reconcile::reconcile;
use crate::core::Config;
use crate::output::Catalog;

#[derive(clap::Args, Debug)]
pub struct RestructureArgs {
    /// Collection workbook to rewrite
    #[arg(long, short = 'c')]
    pub collection: Option<PathBuf>,

    /// Wishlist workbook to rewrite
    #[arg(long, short = 'w')]
    pub wishlist: Option<PathBuf>,

    /// Overwrite without taking a backup copy first
    #[arg(long)]
    pub no_backup: bool,
}

pub fn run(args: RestructureArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let collection_path = config.collection_path(args.collection);
    let wishlist_path = config.wishlist_path(args.wishlist);

    let loaded = load_workbooks(&collection_path, &wishlist_path, global)?;
    let reconciled = reconcile(loaded.collection, loaded.wishlist);
    report_migration(global, &reconciled.stats);
    let catalog = Catalog::arrange(reconciled);

    write_workbooks(
        &catalog,
        &collection_path,
        &wishlist_path,
        &config.platforms(),
        config.backup(args.no_backup),
        global,
    )?;
    done(
        global,
        format!(
            "Restructured {} ({} items)",
            collection_path.display(),
            catalog.collection.len()
        ),
    );
    done(
        global,
        format!(
            "Restructured {} ({} items)",
            wishlist_path.display(),
            catalog.wishlist.len()
        ),
    );
    Ok(())
}
