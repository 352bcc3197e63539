//! Command implementations

pub mod completions;
pub mod import;
pub mod restructure;
pub mod status;
pub mod sync;
pub mod utils;
