//! Input adapters
//!
//! Two adapters turn raw inputs into canonical records: [`tabular`] for
//! workbook sheets and CSV files, [`state`] for the JSON document exported by
//! the app. Everything downstream works on the canonical records only.

pub mod state;
pub mod table;
pub mod tabular;

use std::collections::HashSet;

use crate::core::identity::IdentityKey;

pub use state::{load_state, parse_state, State};
pub use table::{read_tables, RawTable};
pub use tabular::{load_collection_workbook, load_wishlist_workbook, parse_collection_tables, parse_wishlist_tables};

/// Result of parsing one source into records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome<R> {
    pub records: Vec<R>,
    /// Rows dropped because their identity key was already taken
    pub duplicates: usize,
    /// Tables without a usable title column
    pub skipped_tables: Vec<String>,
}

impl<R> Default for ParseOutcome<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            duplicates: 0,
            skipped_tables: Vec::new(),
        }
    }
}

/// First-wins deduplication over one whole parse pass
#[derive(Debug, Default)]
pub(crate) struct Dedup {
    seen: HashSet<IdentityKey>,
}

impl Dedup {
    /// Returns true when the key is new; later occurrences return false
    pub(crate) fn admit(&mut self, platform: &str, title: &str) -> bool {
        self.seen.insert(IdentityKey::new(platform, title))
    }
}
