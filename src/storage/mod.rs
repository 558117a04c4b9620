//! Storage layer for Recall

use std::path::PathBuf;

pub mod db;
pub mod models;

pub use db::Database;
pub use models::*;

/// Largest text value we will bind as a query parameter. SQLite's bind
/// API takes the length as an `int`.
pub const MAX_TEXT_BYTES: usize = i32::MAX as usize;

/// Custom error type for storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The database file could not be opened or created.
    #[error("can't open card database at {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },

    /// The directory that holds the database could not be created.
    #[error("can't create data directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The cards table could not be created.
    #[error("can't create cards table: {0}")]
    Schema(rusqlite::Error),

    /// An insert collided with an existing card's front.
    #[error("a card with front '{0}' already exists")]
    DuplicateFront(String),

    /// Any other statement failed to prepare or run to completion.
    #[error("card query failed: {0}")]
    Query(#[from] rusqlite::Error),

    /// A text field is too large to bind as a query parameter.
    #[error("{field} is too long to store ({len} bytes)")]
    FieldTooLarge { field: &'static str, len: usize },

    /// The home directory could not be located.
    #[error("can't locate home directory for the card database")]
    NoHomeDir,
}
