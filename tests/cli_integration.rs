//! Integration tests for Recall CLI commands
//!
//! These tests exercise the review scheduling scenarios through the library
//! using temporary databases, and the CLI surface end-to-end by running the
//! binary with HOME pointed at a temporary directory.

use assert_cmd::Command;
use chrono::{Duration, Utc};
use predicates::prelude::*;
use recall_cli::scheduler;
use recall_cli::storage::Database;
use tempfile::{tempdir, TempDir};

// =============================================================================
// Test Helpers
// =============================================================================

/// Creates a test database in a temporary directory.
/// Returns the Database instance and the temp directory (which must be kept alive).
fn create_test_db() -> (Database, TempDir) {
    let dir = tempdir().expect("Failed to create temp directory");
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).expect("Failed to open test database");
    (db, dir)
}

/// Creates a command for the recall binary with HOME pointed at a temp
/// directory, so the default database lands in an isolated location.
fn recall_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("recall").expect("Failed to find recall binary");
    cmd.env("HOME", home.path());
    cmd
}

// =============================================================================
// Scheduling Scenario Tests
// =============================================================================

mod scheduling_scenarios {
    use super::*;

    #[test]
    fn test_fresh_card_is_immediately_due() {
        let (db, _dir) = create_test_db();

        db.add("Q", "A").expect("Failed to add card");

        let cards = db.scan_all().expect("Failed to scan");
        assert_eq!(cards.len(), 1, "Should have one card");

        let card = &cards[0];
        assert!(
            scheduler::is_due(card.step_index, card.updated_at, Utc::now()),
            "A fresh card sits at step 0 and should be due immediately"
        );
    }

    #[test]
    fn test_passing_review_defers_card_one_day() {
        let (db, _dir) = create_test_db();

        db.add("Q", "A").expect("Failed to add card");

        // One passing review: step 0 -> 1
        let next = scheduler::next_step(0, true);
        assert_eq!(next, 1);
        db.update_step("Q", next).expect("Failed to update step");

        let card = db
            .get_card("Q")
            .expect("Failed to get card")
            .expect("Card should exist");
        assert_eq!(card.step_index, 1);

        let now = Utc::now();
        assert!(
            !scheduler::is_due(card.step_index, card.updated_at, now),
            "Card should not be due right after a passing review"
        );
        // A minute of slack over the day boundary covers timestamp truncation
        let tomorrow = now + Duration::days(1) + Duration::seconds(60);
        assert!(
            scheduler::is_due(card.step_index, card.updated_at, tomorrow),
            "Card should be due one day after the review"
        );
    }

    #[test]
    fn test_failing_review_drops_card_to_one_day() {
        let (db, _dir) = create_test_db();

        db.add("Q", "A").expect("Failed to add card");

        // Climb the card a few rungs, then fail it
        db.update_step("Q", 5).expect("Failed to update step");
        let next = scheduler::next_step(5, false);
        assert_eq!(next, 1, "Failure should land on rung 1 regardless of height");
        db.update_step("Q", next).expect("Failed to update step");

        let card = db
            .get_card("Q")
            .expect("Failed to get card")
            .expect("Card should exist");
        assert_eq!(card.step_index, 1);
        assert!(
            !scheduler::is_due(card.step_index, card.updated_at, Utc::now()),
            "A failed card waits a day; it is not due immediately"
        );
    }

    #[test]
    fn test_review_written_steps_stay_on_ladder() {
        // Every value a review can write must be a valid ladder index,
        // since due-detection trusts what it reads back.
        for step in 0..scheduler::INTERVALS.len() {
            for passed in [true, false] {
                let next = scheduler::next_step(step, passed);
                assert!(
                    next < scheduler::INTERVALS.len(),
                    "next_step({step}, {passed}) wrote an off-ladder index {next}"
                );
            }
        }
    }
}

// =============================================================================
// CLI End-to-End Tests
// =============================================================================

mod cli_tests {
    use super::*;

    #[test]
    fn test_add_then_list_shows_due_card() {
        let home = tempdir().expect("Failed to create temp home");

        recall_cmd(&home)
            .args(["add", "Q", "A"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Added"));

        // A fresh card is due, so list prints its front
        recall_cmd(&home)
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("Q"));
    }

    #[test]
    fn test_duplicate_add_fails_with_message() {
        let home = tempdir().expect("Failed to create temp home");

        recall_cmd(&home).args(["add", "Q", "A"]).assert().success();

        recall_cmd(&home)
            .args(["add", "Q", "B"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let home = tempdir().expect("Failed to create temp home");

        // Removing a card that was never added still exits 0
        recall_cmd(&home)
            .args(["remove", "nonexistent"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No card"));

        recall_cmd(&home).args(["add", "Q", "A"]).assert().success();
        recall_cmd(&home)
            .args(["remove", "Q"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Removed"));

        recall_cmd(&home)
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn test_list_with_no_due_cards_prints_nothing() {
        let home = tempdir().expect("Failed to create temp home");

        recall_cmd(&home)
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn test_review_with_no_due_cards_is_silent() {
        let home = tempdir().expect("Failed to create temp home");

        recall_cmd(&home)
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn test_review_round_advances_card() {
        let home = tempdir().expect("Failed to create temp home");

        recall_cmd(&home).args(["add", "Q", "A"]).assert().success();

        // One full round: Enter to reveal, then a passing judgment
        recall_cmd(&home)
            .write_stdin("\ny\n")
            .assert()
            .success()
            .stdout(
                predicate::str::contains("Q")
                    .and(predicate::str::contains("A"))
                    .and(predicate::str::contains("Ok? (Y/n)")),
            );

        // The card moved to step 1, so nothing is due for a day
        recall_cmd(&home)
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn test_review_accepts_bare_enter_as_pass() {
        let home = tempdir().expect("Failed to create temp home");

        recall_cmd(&home).args(["add", "Q", "A"]).assert().success();

        recall_cmd(&home).write_stdin("\n\n").assert().success();

        recall_cmd(&home)
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn test_unknown_command_prints_usage() {
        let home = tempdir().expect("Failed to create temp home");

        recall_cmd(&home)
            .arg("bogus")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Usage"));
    }

    #[test]
    fn test_add_requires_both_sides() {
        let home = tempdir().expect("Failed to create temp home");

        recall_cmd(&home)
            .args(["add", "Q"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Usage"));
    }
}
