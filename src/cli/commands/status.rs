//! `shelfsync status` - dry-run reconciliation summary
//!
//! Runs the same pipeline as `sync`/`restructure` in memory and reports what
//! the result would look like. Nothing is written.

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::PathBuf;
use tabled::{builder::Builder, settings::Style};

use crate::cli::commands::utils::{load_state_file, load_workbooks};
use crate::cli::helpers::count_label;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::reconcile::{reconcile, MigrationStats};
use crate::core::Config;
use crate::output::{platform_counts, Catalog, PlatformCounts};

#[derive(clap::Args, Debug)]
pub struct StatusArgs {
    /// Preview a state JSON instead of the workbooks
    #[arg(long, short = 's', conflicts_with_all = ["collection", "wishlist"])]
    pub state: Option<PathBuf>,

    /// Collection workbook
    #[arg(long, short = 'c')]
    pub collection: Option<PathBuf>,

    /// Wishlist workbook
    #[arg(long, short = 'w')]
    pub wishlist: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct StatusReport {
    collection: usize,
    wishlist: usize,
    migration: MigrationStats,
    platforms: Vec<PlatformCounts>,
}

pub fn run(args: StatusArgs, global: &GlobalOpts) -> Result<()> {
    let loaded = match &args.state {
        Some(state) => load_state_file(state, global)?,
        None => {
            let config = Config::load();
            load_workbooks(
                &config.collection_path(args.collection),
                &config.wishlist_path(args.wishlist),
                global,
            )?
        }
    };

    let reconciled = reconcile(loaded.collection, loaded.wishlist);
    let migration = reconciled.stats;
    let catalog = Catalog::arrange(reconciled);

    let report = StatusReport {
        collection: catalog.collection.len(),
        wishlist: catalog.wishlist.len(),
        migration,
        platforms: platform_counts(&catalog),
    };

    match global.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Auto => print_report(&report, global),
    }
    Ok(())
}

fn print_report(report: &StatusReport, global: &GlobalOpts) {
    let mut builder = Builder::default();
    builder.push_record(["Platform", "Owned", "Wanted", "In transit"]);
    for row in &report.platforms {
        builder.push_record([
            row.platform.clone(),
            row.owned.to_string(),
            row.wanted.to_string(),
            row.in_transit.to_string(),
        ]);
    }
    builder.push_record([
        "Total".to_string(),
        report.collection.to_string(),
        report.wishlist.to_string(),
        report
            .platforms
            .iter()
            .map(|p| p.in_transit)
            .sum::<usize>()
            .to_string(),
    ]);
    println!("{}", builder.build().with(Style::markdown()));

    if global.quiet {
        return;
    }
    println!();
    let migration = &report.migration;
    if migration.migrated + migration.merged == 0 {
        println!("{} Nothing to move into the collection", style("✓").green());
    } else {
        println!(
            "{} {} would move to the collection ({} already owned)",
            style("→").blue(),
            style(count_label(migration.migrated, "item")).cyan(),
            migration.merged
        );
    }
}
