//! Remove command - delete a card.
//!
//! Deletion is idempotent: removing a front that does not exist is
//! success, not an error.

use anyhow::Result;
use colored::Colorize;

use crate::storage::Database;

/// Arguments for the remove command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    recall remove \"2^10\"    Delete the card with that front")]
pub struct Args {
    /// Front of the card to delete
    #[arg(value_name = "FRONT")]
    pub front: String,
}

/// Executes the remove command.
///
/// Deletes the card with the given front if present.
pub fn run(args: Args) -> Result<()> {
    let db = Database::open_default()?;

    let removed = db.remove(&args.front)?;

    if removed > 0 {
        println!("{} card '{}'", "Removed".green(), args.front.cyan());
    } else {
        println!(
            "{}",
            format!("No card with front '{}'", args.front).dimmed()
        );
    }

    Ok(())
}
