//! Reconciliation - move received wishlist items into the collection
//!
//! A received wishlist item either becomes a new collection record appended at
//! the end, or, when the collection already holds its identity key, is dropped
//! and the existing collection record is left untouched. Items not yet
//! received stay on the wishlist unchanged.

use std::collections::HashSet;

use crate::core::entity::Record;
use crate::core::identity::{IdentityKey, RecordId, RecordKind};
use crate::entities::{CollectionRecord, WishlistRecord};

/// Counters describing one reconciliation pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct MigrationStats {
    /// Received items appended to the collection
    pub migrated: usize,
    /// Received items already present in the collection
    pub merged: usize,
    /// Items still pending on the wishlist
    pub kept: usize,
}

/// Output of a reconciliation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    pub collection: Vec<CollectionRecord>,
    pub wishlist: Vec<WishlistRecord>,
    pub stats: MigrationStats,
}

/// Apply the migration rule to a collection/wishlist pair.
///
/// The input collection is kept in order with its identifiers. New collection
/// records get placeholder identifiers continuing the collection's numbering;
/// final identifiers come from the serializer.
pub fn reconcile(
    collection: Vec<CollectionRecord>,
    wishlist: Vec<WishlistRecord>,
) -> Reconciled {
    let mut known: HashSet<IdentityKey> = collection.iter().map(Record::identity_key).collect();
    let mut out_collection = collection;
    let mut out_wishlist = Vec::with_capacity(wishlist.len());
    let mut stats = MigrationStats::default();

    for wish in wishlist {
        if !wish.received {
            stats.kept += 1;
            out_wishlist.push(wish);
            continue;
        }

        if known.insert(wish.identity_key()) {
            let id = RecordId::new(RecordKind::Collection, out_collection.len() + 1);
            out_collection.push(CollectionRecord::from_received(id, &wish));
            stats.migrated += 1;
        } else {
            stats.merged += 1;
        }
    }

    Reconciled {
        collection: out_collection,
        wishlist: out_wishlist,
        stats,
    }
}
