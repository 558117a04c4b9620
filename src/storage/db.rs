//! SQLite storage layer for Recall

use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};

use super::models::Card;
use super::{StorageError, MAX_TEXT_BYTES};

/// Get the default database path
pub fn default_db_path() -> Result<PathBuf, StorageError> {
    let data_dir = dirs::home_dir()
        .ok_or(StorageError::NoHomeDir)?
        .join(".local")
        .join("share")
        .join("recall");

    std::fs::create_dir_all(&data_dir).map_err(|e| StorageError::CreateDir {
        path: data_dir.clone(),
        source: e,
    })?;
    Ok(data_dir.join("recall.db"))
}

/// Database connection wrapper
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create the database
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        tracing::debug!("Opening card database at {}", path.display());
        let conn = Connection::open(path).map_err(|e| StorageError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open the default database
    pub fn open_default() -> Result<Self, StorageError> {
        let path = default_db_path()?;
        Self::open(&path)
    }

    /// Create the cards table if it does not exist
    fn migrate(&self) -> Result<(), StorageError> {
        self.conn
            .execute_batch(
                r#"
                CREATE TABLE IF NOT EXISTS cards (
                    front TEXT PRIMARY KEY,
                    back TEXT NOT NULL,
                    interval INTEGER NOT NULL DEFAULT 0,
                    created_at TEXT DEFAULT CURRENT_TIMESTAMP,
                    updated_at TEXT DEFAULT CURRENT_TIMESTAMP
                );
                "#,
            )
            .map_err(StorageError::Schema)
    }

    /// Insert a new card.
    ///
    /// The engine assigns the defaults: step index 0 and both timestamps
    /// set to now. Fails with [`StorageError::DuplicateFront`] if a card
    /// with this front already exists.
    pub fn add(&self, front: &str, back: &str) -> Result<(), StorageError> {
        check_text_len("front", front)?;
        check_text_len("back", back)?;

        tracing::debug!("Inserting card '{front}'");
        self.conn
            .execute(
                "INSERT INTO cards (front, back) VALUES (?1, ?2)",
                params![front, back],
            )
            .map_err(|e| match e {
                rusqlite::Error::SqliteFailure(err, _)
                    if err.code == rusqlite::ErrorCode::ConstraintViolation =>
                {
                    StorageError::DuplicateFront(front.to_string())
                }
                other => StorageError::Query(other),
            })?;
        Ok(())
    }

    /// Delete a card by front, returning how many rows were removed.
    ///
    /// Removing a front that does not exist is success with 0.
    pub fn remove(&self, front: &str) -> Result<usize, StorageError> {
        check_text_len("front", front)?;

        let removed = self
            .conn
            .execute("DELETE FROM cards WHERE front = ?1", params![front])?;
        tracing::debug!("Removed {removed} card(s) with front '{front}'");
        Ok(removed)
    }

    /// Read every card, in the engine's natural row order.
    ///
    /// The order is unspecified; callers must not rely on it.
    pub fn scan_all(&self) -> Result<Vec<Card>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT front, back, interval, unixepoch(created_at), unixepoch(updated_at)
             FROM cards",
        )?;

        let rows = stmt.query_map([], Self::row_to_card)?;
        let cards = rows.collect::<Result<Vec<_>, _>>()?;
        tracing::debug!("Scanned {} card(s)", cards.len());
        Ok(cards)
    }

    /// Set a card's step index and reset its updated_at to now.
    ///
    /// A front that no longer exists is not an error; the update simply
    /// affects no rows.
    pub fn update_step(&self, front: &str, step_index: usize) -> Result<(), StorageError> {
        check_text_len("front", front)?;

        self.conn.execute(
            "UPDATE cards SET interval = ?1, updated_at = CURRENT_TIMESTAMP WHERE front = ?2",
            params![step_index as i64, front],
        )?;
        Ok(())
    }

    /// Get a card by front
    #[allow(dead_code)]
    pub fn get_card(&self, front: &str) -> Result<Option<Card>, StorageError> {
        check_text_len("front", front)?;

        self.conn
            .query_row(
                "SELECT front, back, interval, unixepoch(created_at), unixepoch(updated_at)
                 FROM cards WHERE front = ?1",
                params![front],
                Self::row_to_card,
            )
            .optional()
            .map_err(StorageError::Query)
    }

    /// Count all cards
    pub fn card_count(&self) -> Result<usize, StorageError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM cards", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn row_to_card(row: &rusqlite::Row) -> rusqlite::Result<Card> {
        Ok(Card {
            front: row.get(0)?,
            back: row.get(1)?,
            step_index: row.get::<_, i64>(2)? as usize,
            created_at: chrono::DateTime::from_timestamp(row.get(3)?, 0).unwrap(),
            updated_at: chrono::DateTime::from_timestamp(row.get(4)?, 0).unwrap(),
        })
    }
}

/// SQLite binds text with an `int` byte length; reject anything larger
/// before it reaches the engine.
fn check_text_len(field: &'static str, text: &str) -> Result<(), StorageError> {
    if text.len() > MAX_TEXT_BYTES {
        return Err(StorageError::FieldTooLarge {
            field,
            len: text.len(),
        });
    }
    Ok(())
}
