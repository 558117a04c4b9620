//! List command - print the fronts of due cards.
//!
//! Applies the same due-detection as a review round but mutates nothing:
//! the output previews what review sessions would surface. Fronts are
//! printed bare, one per line, so the output can be piped.

use anyhow::Result;
use chrono::Utc;

use crate::scheduler;
use crate::storage::Database;

/// Executes the list command.
///
/// Prints each due card's front in scan order. A store with no due cards
/// prints nothing.
pub fn run() -> Result<()> {
    let db = Database::open_default()?;
    let now = Utc::now();

    for card in db.scan_all()? {
        if scheduler::is_due(card.step_index, card.updated_at, now) {
            println!("{}", card.front);
        }
    }

    Ok(())
}
