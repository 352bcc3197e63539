//! Output - deterministic ordering and emission of reconciled records
//!
//! [`Catalog::arrange`] fixes the emission order once; the JSON seed and the
//! workbooks both read identifiers from that same order, so `c3` in the seed
//! and `C0003` in the workbook always name the same record.

pub mod seed;
pub mod summary;
pub mod workbook;

use crate::core::entity::{renumber, Record};
use crate::core::reconcile::Reconciled;
use crate::entities::{CollectionRecord, WishlistRecord};

pub use seed::{render_seed, write_seed, SeedDocument};
pub use summary::{platform_counts, PlatformCounts};
pub use workbook::{
    build_collection_workbook, build_wishlist_workbook, collection_summary, ensure_xlsx_target,
    save_workbook, wishlist_summary, SummaryRow,
};

/// Both record sets in emission order, numbered 1..N
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub collection: Vec<CollectionRecord>,
    pub wishlist: Vec<WishlistRecord>,
}

impl Catalog {
    /// Sort and renumber the output of a reconciliation pass
    pub fn arrange(reconciled: Reconciled) -> Self {
        Self {
            collection: arrange(reconciled.collection),
            wishlist: arrange(reconciled.wishlist),
        }
    }
}

/// Stable sort by case-folded (platform, title), then renumber from 1
pub fn arrange<R: Record>(mut records: Vec<R>) -> Vec<R> {
    records.sort_by_cached_key(|r| r.sort_key());
    renumber(&mut records);
    records
}
