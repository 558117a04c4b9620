//! Core data model for Recall
//!
//! There is exactly one entity: the flashcard. Only its latest state is
//! kept; there is no review-history log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single flashcard.
///
/// The front text is both the prompt shown to the operator and the card's
/// identity: it is the primary key of the cards table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    /// The prompt. Unique across all cards.
    pub front: String,

    /// The answer, revealed after the operator attempts recall.
    pub back: String,

    /// Position in the review interval ladder. Always a valid ladder
    /// index: writes clamp, reads trust.
    pub step_index: usize,

    /// When the card was added. Never changes.
    pub created_at: DateTime<Utc>,

    /// When the card was added or last reviewed. Overwritten on every
    /// review; monotonically non-decreasing.
    pub updated_at: DateTime<Utc>,
}
