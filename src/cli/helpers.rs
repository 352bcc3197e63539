//! Shared output helpers for CLI commands
//!
//! Progress lines go to stdout and respect `--quiet`; parse details are only
//! shown with `--verbose`.

use console::style;
use std::path::{Path, PathBuf};

use crate::cli::GlobalOpts;
use crate::core::reconcile::MigrationStats;
use crate::sources::ParseOutcome;

/// "→ message" progress line
pub fn step(global: &GlobalOpts, message: impl std::fmt::Display) {
    if !global.quiet {
        println!("{} {}", style("→").blue(), message);
    }
}

/// "✓ message" success line
pub fn done(global: &GlobalOpts, message: impl std::fmt::Display) {
    if !global.quiet {
        println!("{} {}", style("✓").green(), message);
    }
}

/// Verbose-only details about how a source was parsed
pub fn report_outcome<R>(global: &GlobalOpts, source: &Path, outcome: &ParseOutcome<R>) {
    if !global.verbose || global.quiet {
        return;
    }
    println!(
        "  {} {} record(s) read from {}",
        style("·").dim(),
        outcome.records.len(),
        style(source.display()).yellow()
    );
    for name in &outcome.skipped_tables {
        println!(
            "  {} skipped sheet '{}' (no title column)",
            style("!").yellow(),
            name
        );
    }
    if outcome.duplicates > 0 {
        println!(
            "  {} dropped {} duplicate row(s)",
            style("!").yellow(),
            outcome.duplicates
        );
    }
}

/// Verbose-only migration counters
pub fn report_migration(global: &GlobalOpts, stats: &MigrationStats) {
    if !global.verbose || global.quiet {
        return;
    }
    println!(
        "  {} {} moved to collection, {} already owned, {} still wanted",
        style("·").dim(),
        style(stats.migrated).green(),
        stats.merged,
        stats.kept
    );
}

pub fn report_backups(global: &GlobalOpts, backups: &[PathBuf]) {
    for backup in backups {
        done(global, format!("Backup created: {}", style(backup.display()).dim()));
    }
}

/// Pluralize a count for summary lines
pub fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0, "item"), "0 items");
        assert_eq!(count_label(1, "item"), "1 item");
        assert_eq!(count_label(12, "item"), "12 items");
    }
}
