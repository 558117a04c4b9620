//! Add command - insert a new card.
//!
//! New cards start at the bottom of the interval ladder, so they are
//! due for review immediately.

use anyhow::Result;
use colored::Colorize;

use crate::storage::Database;

/// Arguments for the add command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    recall add \"2^10\" \"1024\"              Add a card\n    \
    recall add \"Ohm's law\" \"V = I * R\"    Fronts and backs may contain spaces")]
pub struct Args {
    /// The prompt side of the card; must be unique
    #[arg(value_name = "FRONT")]
    #[arg(
        long_help = "The prompt shown during review. The front identifies the\n\
        card: adding a second card with the same front is an error."
    )]
    pub front: String,

    /// The answer side of the card
    #[arg(value_name = "BACK")]
    pub back: String,
}

/// Executes the add command.
///
/// Inserts a card with the given front and back. The card is due as soon
/// as it is added.
pub fn run(args: Args) -> Result<()> {
    let db = Database::open_default()?;

    db.add(&args.front, &args.back)?;
    tracing::debug!("Database now holds {} card(s)", db.card_count()?);

    println!("{} card '{}'", "Added".green(), args.front.cyan());

    Ok(())
}
