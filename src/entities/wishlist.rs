//! Wishlist record - a wanted item

use serde::Serialize;

use crate::core::entity::Record;
use crate::core::identity::{RecordId, RecordKind};

/// Priority written to new wishlist workbook rows
pub const DEFAULT_PRIORITY: &str = "Medium";

/// An item on the wishlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistRecord {
    pub id: RecordId,
    pub platform: String,
    pub title: String,
    pub note: String,
    /// Ordered and on its way
    pub in_transit: bool,
    /// Arrived; moves to the collection on the next reconciliation pass
    pub received: bool,
}

impl WishlistRecord {
    pub fn new(id: RecordId, platform: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id,
            platform: platform.into(),
            title: title.into(),
            note: String::new(),
            in_transit: false,
            received: false,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn in_transit(mut self, in_transit: bool) -> Self {
        self.in_transit = in_transit;
        self
    }

    pub fn received(mut self, received: bool) -> Self {
        self.received = received;
        self
    }

    /// Workbook row: ID, Platform, Title, Note, Priority, In Transit, Received,
    /// Ordered Date, Received Date.
    ///
    /// Priority, Received and the dates are presentation-only columns with fixed
    /// defaults; a record that reaches a workbook has not been received yet.
    pub fn to_row(&self) -> [String; 9] {
        [
            self.id.display_form(),
            self.platform.clone(),
            self.title.clone(),
            self.note.clone(),
            DEFAULT_PRIORITY.to_string(),
            yes_no(self.in_transit).to_string(),
            yes_no(false).to_string(),
            String::new(),
            String::new(),
        ]
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

impl Record for WishlistRecord {
    const KIND: RecordKind = RecordKind::Wishlist;

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let record = WishlistRecord::new(RecordId::new(RecordKind::Wishlist, 1), "PS4", "Bloodborne")
            .in_transit(true);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"id":"w1","platform":"PS4","title":"Bloodborne","note":"","inTransit":true,"received":false}"#
        );
    }

    #[test]
    fn test_to_row_presentation_defaults() {
        let record = WishlistRecord::new(RecordId::new(RecordKind::Wishlist, 5), "PS2", "Okami")
            .with_note("sealed")
            .in_transit(true);
        let row = record.to_row();
        assert_eq!(
            row,
            [
                "W0005".to_string(),
                "PS2".to_string(),
                "Okami".to_string(),
                "sealed".to_string(),
                "Medium".to_string(),
                "Yes".to_string(),
                "No".to_string(),
                String::new(),
                String::new(),
            ]
        );
    }

    #[test]
    fn test_identity_key_from_record() {
        let a = WishlistRecord::new(RecordId::new(RecordKind::Wishlist, 1), "ps4", "BLOODBORNE");
        let b = WishlistRecord::new(RecordId::new(RecordKind::Wishlist, 2), "PS4", "Bloodborne");
        assert_eq!(a.identity_key(), b.identity_key());
    }
}
