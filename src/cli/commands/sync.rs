//! `shelfsync sync` - push app-exported state back into the workbooks
//!
//! The state document is validated in full before any workbook is touched.
//! After the workbooks are rewritten the seed is regenerated from the same
//! catalog, so the app picks up the migrated records on its next load.

use chrono::Utc;
use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::commands::utils::{load_state_file, write_workbooks};
use crate::cli::helpers::{done, report_migration, step};
use crate::cli::GlobalOpts;
use crate::core::reconcile::reconcile;
use crate::core::Config;
use crate::output::{write_seed, Catalog};

#[derive(clap::Args, Debug)]
pub struct SyncArgs {
    /// State JSON exported by the app
    #[arg(long, short = 's')]
    pub state: PathBuf,

    /// Collection workbook to rewrite
    #[arg(long, short = 'c')]
    pub collection: Option<PathBuf>,

    /// Wishlist workbook to rewrite
    #[arg(long, short = 'w')]
    pub wishlist: Option<PathBuf>,

    /// Where to write the regenerated seed JSON
    #[arg(long)]
    pub seed_out: Option<PathBuf>,

    /// Overwrite without taking backup copies first
    #[arg(long)]
    pub no_backup: bool,

    /// Leave the seed JSON untouched
    #[arg(long)]
    pub no_update_seed: bool,
}

pub fn run(args: SyncArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let collection_path = config.collection_path(args.collection);
    let wishlist_path = config.wishlist_path(args.wishlist);
    let seed_path = config.seed_path(args.seed_out);

    step(global, format!("Reading {}", style(args.state.display()).yellow()));
    let loaded = load_state_file(&args.state, global)?;

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

    if !args.no_update_seed {
        write_seed(&seed_path, &catalog, Utc::now())?;
        done(
            global,
            format!(
                "Wrote {} ({} collection items, {} wishlist items)",
                seed_path.display(),
                catalog.collection.len(),
                catalog.wishlist.len()
            ),
        );
    }
    done(global, format!("Synced state from {}", args.state.display()));
    Ok(())
}
