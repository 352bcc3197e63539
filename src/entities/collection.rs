//! Collection record - an owned item

use serde::Serialize;

use crate::core::entity::Record;
use crate::core::identity::{RecordId, RecordKind};
use crate::entities::wishlist::WishlistRecord;

/// An item in the owned collection
///
/// Every field is plain text and empty when the source had nothing for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionRecord {
    pub id: RecordId,
    pub platform: String,
    pub title: String,
    pub version: String,
    pub cd_condition: String,
    pub manual_condition: String,
    pub price: String,
    pub extra: String,
    pub note: String,
}

impl CollectionRecord {
    /// A record with only identity fields set
    pub fn new(id: RecordId, platform: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id,
            platform: platform.into(),
            title: title.into(),
            version: String::new(),
            cd_condition: String::new(),
            manual_condition: String::new(),
            price: String::new(),
            extra: String::new(),
            note: String::new(),
        }
    }

    /// Build the collection entry for a received wishlist item.
    ///
    /// Only platform, title and note carry over; the in-transit flag has no
    /// collection counterpart and is dropped.
    pub fn from_received(id: RecordId, wish: &WishlistRecord) -> Self {
        Self {
            note: wish.note.clone(),
            ..Self::new(id, wish.platform.clone(), wish.title.clone())
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Workbook row in column order: ID, Platform, Title, Version, CD, Manual, Price, Extra, Note
    pub fn to_row(&self) -> [String; 9] {
        [
            self.id.display_form(),
            self.platform.clone(),
            self.title.clone(),
            self.version.clone(),
            self.cd_condition.clone(),
            self.manual_condition.clone(),
            self.price.clone(),
            self.extra.clone(),
            self.note.clone(),
        ]
    }
}

impl Record for CollectionRecord {
    const KIND: RecordKind = RecordKind::Collection;

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn platform(&self) -> &str {
        &self.platform
    }

    fn title(&self) -> &str {
        &self.title
    }
}
