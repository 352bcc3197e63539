//! Record identity: positional identifiers and the (platform, title) identity key

use serde::{Serialize, Serializer};
use std::fmt;

use crate::core::normalize::fold_case;

/// Record type, which decides the identifier prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Owned item
    Collection,
    /// Wanted item
    Wishlist,
}

impl RecordKind {
    /// Prefix used in compact (JSON) identifiers
    pub fn prefix(&self) -> char {
        match self {
            RecordKind::Collection => 'c',
            RecordKind::Wishlist => 'w',
        }
    }

    /// Prefix used in workbook identifiers
    pub fn display_prefix(&self) -> char {
        self.prefix().to_ascii_uppercase()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Collection => "collection",
            RecordKind::Wishlist => "wishlist",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A 1-based positional identifier such as `c12`
///
/// The number is a property of a record's position in a list, not of the
/// record itself, and is reassigned whenever the list is reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId {
    kind: RecordKind,
    position: usize,
}

impl RecordId {
    pub fn new(kind: RecordKind, position: usize) -> Self {
        Self { kind, position }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Zero-padded workbook form, e.g. `C0012`
    pub fn display_form(&self) -> String {
        format!("{}{:04}", self.kind.display_prefix(), self.position)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.prefix(), self.position)
    }
}

impl Serialize for RecordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Case-insensitive, whitespace-trimmed (platform, title) pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdentityKey {
    platform: String,
    title: String,
}

impl IdentityKey {
    pub fn new(platform: &str, title: &str) -> Self {
        Self {
            platform: fold_case(platform.trim()),
            title: fold_case(title.trim()),
        }
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.platform, self.title)
    }
}
