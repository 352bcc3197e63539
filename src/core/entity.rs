//! Record trait - common interface for collection and wishlist records

use serde::Serialize;

use crate::core::identity::{IdentityKey, RecordId, RecordKind};
use crate::core::normalize::fold_case;

/// Common trait for canonical records
pub trait Record: Serialize + Clone {
    /// The record type, which fixes the identifier prefix
    const KIND: RecordKind;

    /// Replace the identifier (used when a list is renumbered)
    fn set_id(&mut self, id: RecordId);

    fn platform(&self) -> &str;

    fn title(&self) -> &str;

    /// The (platform, title) pair used for deduplication and migration
    fn identity_key(&self) -> IdentityKey {
        IdentityKey::new(self.platform(), self.title())
    }

    /// Case-folded (platform, title), the emission order
    fn sort_key(&self) -> (String, String) {
        (fold_case(self.platform()), fold_case(self.title()))
    }
}

/// Renumber records 1..N in their current order
pub fn renumber<R: Record>(records: &mut [R]) {
    for (idx, record) in records.iter_mut().enumerate() {
        record.set_id(RecordId::new(R::KIND, idx + 1));
    }
}
