//! Error types for loading, reconciling and writing catalogs

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a reconciliation run
#[derive(Debug, Error, Diagnostic)]
pub enum SyncError {
    #[error("{what} file not found: {}", path.display())]
    #[diagnostic(
        code(shelfsync::input::missing),
        help("Pass the correct path on the command line or set it in .shelfsync.yaml")
    )]
    MissingInput { what: &'static str, path: PathBuf },

    #[error("State file {} is not valid JSON: {source}", path.display())]
    #[diagnostic(code(shelfsync::state::json))]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("State JSON root must be an object.")]
    #[diagnostic(
        code(shelfsync::state::root),
        help("Export the state again from the app; the file should start with '{{'")
    )]
    StateRoot,

    #[error("State JSON must contain 'collection' and 'wishlist' arrays.")]
    #[diagnostic(code(shelfsync::state::shape))]
    StateShape,

    #[error("Failed to read workbook {}: {message}", path.display())]
    #[diagnostic(code(shelfsync::workbook::read))]
    WorkbookRead { path: PathBuf, message: String },

    #[error("Failed to write workbook {}: {source}", path.display())]
    #[diagnostic(code(shelfsync::workbook::write))]
    WorkbookWrite {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    #[error("Only .xlsx workbooks can be written, not {}", path.display())]
    #[diagnostic(
        code(shelfsync::workbook::format),
        help("Pass an .xlsx destination with --collection/--wishlist; other formats are read-only inputs")
    )]
    UnsupportedOutput { path: PathBuf },

    #[error("Failed to build workbook: {0}")]
    #[diagnostic(code(shelfsync::workbook::render))]
    WorkbookRender(#[from] rust_xlsxwriter::XlsxError),

    #[error("IO error at {}: {source}", path.display())]
    #[diagnostic(code(shelfsync::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    #[diagnostic(code(shelfsync::serialize))]
    Serialize(#[from] serde_json::Error),
}

impl SyncError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SyncError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
