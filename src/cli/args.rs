//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{
    completions::CompletionsArgs, import::ImportArgs, restructure::RestructureArgs,
    status::StatusArgs, sync::SyncArgs,
};

#[derive(Parser)]
#[command(name = "shelfsync")]
#[command(author, version, about = "Keep a game collection and wishlist in sync")]
#[command(long_about = "Reconciles a collection workbook, a wishlist workbook and the JSON state exported by the app. Received wishlist items move into the collection; every run rebuilds both lists from scratch.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output (skipped sheets, dropped duplicates)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import the collection and wishlist workbooks into the JSON seed
    Import(ImportArgs),

    /// Rewrite both workbooks in the canonical single-table layout
    Restructure(RestructureArgs),

    /// Sync app-exported JSON state back into the workbooks
    Sync(SyncArgs),

    /// Preview a reconciliation pass without writing anything
    Status(StatusArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Auto,
    /// JSON format (for programming)
    Json,
}
