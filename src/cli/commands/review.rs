//! Review command - one interactive review round.
//!
//! Presents the first due card in scan order: shows the front, waits for
//! Enter, reveals the back, then records the operator's own pass/fail
//! judgment. Passing advances the card one rung up the interval ladder;
//! failing drops it back to a one-day wait.

use std::io::{self, Write};

use anyhow::Result;
use chrono::Utc;

use crate::scheduler;
use crate::storage::Database;

/// Executes a review round.
///
/// If no card is due, returns immediately with no output. Otherwise runs
/// one present/judge cycle and writes the card's new step back.
pub fn run() -> Result<()> {
    let db = Database::open_default()?;
    let now = Utc::now();

    let due = db
        .scan_all()?
        .into_iter()
        .find(|card| scheduler::is_due(card.step_index, card.updated_at, now));

    let Some(card) = due else {
        tracing::debug!("No cards due");
        return Ok(());
    };

    // The front doubles as the prompt; input is just a "show me" pause
    print!("{}", card.front);
    io::stdout().flush()?;
    read_line()?;

    println!("{}", card.back);

    print!("Ok? (Y/n) ");
    io::stdout().flush()?;
    let reply = read_line()?;

    let passed = is_pass(&reply);
    let next = scheduler::next_step(card.step_index, passed);
    tracing::debug!(
        "Card '{}' {} review, step {} -> {next}",
        card.front,
        if passed { "passed" } else { "failed" },
        card.step_index
    );

    db.update_step(&card.front, next)?;

    Ok(())
}

/// Reads one line from stdin. End of input reads as an empty line.
fn read_line() -> io::Result<String> {
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

/// Whether a judgment reply counts as a pass.
///
/// Empty input (a bare Enter, or end of input) and a lone `y` in either
/// case are passes. Everything else, including a `y` wrapped in spaces,
/// is a fail.
fn is_pass(reply: &str) -> bool {
    let reply = reply.trim_end_matches(['\r', '\n']);
    reply.is_empty() || reply.eq_ignore_ascii_case("y")
}
