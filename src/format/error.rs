//! Error types for the outfit persistence boundary.

use thiserror::Error;

/// Errors that can occur when producing or loading outfit records.
#[derive(Error, Debug)]
pub enum FormatError {
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The outfit title is empty after trimming.
    #[error("outfit title is required")]
    MissingTitle,

    /// The composition has no placed items.
    #[error("composition has no placed items")]
    EmptyComposition,

    /// A record references a clothing item the catalog does not know.
    #[error("clothing item not found in catalog: {id}")]
    UnknownItem {
        /// The missing clothing item id.
        id: String,
    },

    /// Version mismatch between expected and found.
    #[error("version mismatch: expected {expected}, found {found}")]
    VersionMismatch {
        /// Expected version string.
        expected: String,
        /// Found version string.
        found: String,
    },

    /// A save is already in flight for this session.
    #[error("a save is already in progress")]
    SaveInProgress,
}
