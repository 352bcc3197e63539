//! Core module - identity, normalization, reconciliation and configuration

pub mod backup;
pub mod config;
pub mod entity;
pub mod error;
pub mod headers;
pub mod identity;
pub mod normalize;
pub mod reconcile;

pub use config::Config;
pub use entity::Record;
pub use error::{Result, SyncError};
pub use identity::{IdentityKey, RecordId, RecordKind};
pub use reconcile::{reconcile, MigrationStats, Reconciled};
