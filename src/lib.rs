//! Recall - spaced-repetition flashcards
//!
//! Recall keeps front/back flashcards in a local SQLite database and
//! schedules their review on a fixed doubling ladder of day intervals.

pub mod scheduler;
pub mod storage;
