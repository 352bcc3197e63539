//! Record types

pub mod collection;
pub mod wishlist;

pub use collection::CollectionRecord;
pub use wishlist::WishlistRecord;
