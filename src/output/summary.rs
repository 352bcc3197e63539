//! Per-platform counts of an arranged catalog

use serde::Serialize;

use super::Catalog;
use crate::core::normalize::fold_case;

/// Counts for one platform
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformCounts {
    /// Platform as first spelled in the catalog
    pub platform: String,
    pub owned: usize,
    pub wanted: usize,
    pub in_transit: usize,
}

/// Group a catalog by platform (case-insensitive), in platform order
pub fn platform_counts(catalog: &Catalog) -> Vec<PlatformCounts> {
    let mut counts: Vec<PlatformCounts> = Vec::new();

    let mut entry = |platform: &str| -> usize {
        let folded = fold_case(platform);
        match counts.iter().position(|c| fold_case(&c.platform) == folded) {
            Some(idx) => idx,
            None => {
                counts.push(PlatformCounts {
                    platform: platform.to_string(),
                    ..Default::default()
                });
                counts.len() - 1
            }
        }
    };

    let owned: Vec<usize> = catalog.collection.iter().map(|r| entry(&r.platform)).collect();
    let wanted: Vec<(usize, bool)> = catalog
        .wishlist
        .iter()
        .map(|r| (entry(&r.platform), r.in_transit))
        .collect();

    for idx in owned {
        counts[idx].owned += 1;
    }
    for (idx, in_transit) in wanted {
        counts[idx].wanted += 1;
        if in_transit {
            counts[idx].in_transit += 1;
        }
    }

    counts.sort_by_cached_key(|c| fold_case(&c.platform));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identity::{RecordId, RecordKind};
    use crate::entities::{CollectionRecord, WishlistRecord};

    #[test]
    fn test_platform_counts() {
        let catalog = Catalog {
            collection: vec![
                CollectionRecord::new(RecordId::new(RecordKind::Collection, 1), "PS1", "Crash"),
                CollectionRecord::new(RecordId::new(RecordKind::Collection, 2), "PS2", "Ico"),
                CollectionRecord::new(RecordId::new(RecordKind::Collection, 3), "ps2", "Okami"),
            ],
            wishlist: vec![
                WishlistRecord::new(RecordId::new(RecordKind::Wishlist, 1), "PS2", "Rez")
                    .in_transit(true),
                WishlistRecord::new(RecordId::new(RecordKind::Wishlist, 2), "PS4", "Nioh"),
            ],
        };

        let counts = platform_counts(&catalog);
        assert_eq!(
            counts,
            vec![
                PlatformCounts { platform: "PS1".into(), owned: 1, wanted: 0, in_transit: 0 },
                PlatformCounts { platform: "PS2".into(), owned: 2, wanted: 1, in_transit: 1 },
                PlatformCounts { platform: "PS4".into(), owned: 0, wanted: 1, in_transit: 0 },
            ]
        );
    }

    #[test]
    fn test_empty_catalog_has_no_platforms() {
        let catalog = Catalog {
            collection: vec![],
            wishlist: vec![],
        };
        assert!(platform_counts(&catalog).is_empty());
    }
}
