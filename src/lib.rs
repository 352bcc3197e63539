//! shelfsync: keep a game collection and its wishlist in sync
//!
//! Reads a collection workbook, a wishlist workbook or the JSON state exported
//! by the app, moves received wishlist items into the collection, and writes
//! everything back as canonical workbooks plus a JSON seed.

pub mod cli;
pub mod core;
pub mod entities;
pub mod output;
pub mod sources;
