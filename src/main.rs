use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod scheduler;
mod storage;

use cli::commands;

/// The main CLI command line interface.
#[derive(Parser)]
#[command(name = "recall")]
#[command(version)]
#[command(about = "Spaced-repetition flashcards from your terminal")]
#[command(long_about = "Recall stores front/back flashcards in a local database and\n\
    schedules their review on a doubling ladder of day intervals.\n\n\
    Running recall with no arguments reviews the first due card:\n\
    the front is shown, press Enter to reveal the back, then judge\n\
    your own recall. Cards you pass wait twice as long before the\n\
    next review; cards you fail come back after one day.")]
#[command(after_help = "EXAMPLES:\n    \
    recall add \"2^10\" \"1024\"    Add a card\n    \
    recall                      Review the first due card\n    \
    recall list                 Show which cards are due\n    \
    recall remove \"2^10\"        Delete a card\n\n\
    For more information about a command, run 'recall <command> --help'.")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Add a new card
    #[command(long_about = "Inserts a new card with the given front and back text.\n\
        The front must be unique; it doubles as the card's identifier.\n\
        New cards start at the bottom of the interval ladder and are\n\
        due immediately.")]
    Add(commands::add::Args),

    /// List the fronts of all due cards
    #[command(long_about = "Prints the front of every card that is currently due, one\n\
        per line, without starting a review. This previews what a\n\
        review session would surface.")]
    List,

    /// Remove a card
    #[command(long_about = "Deletes the card with the given front, if it exists.\n\
        Removing a card that does not exist is not an error.")]
    Remove(commands::remove::Args),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recall=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Some(Commands::Add(args)) => commands::add::run(args),
        Some(Commands::List) => commands::list::run(),
        Some(Commands::Remove(args)) => commands::remove::run(args),
        None => commands::review::run(),
    }
}
