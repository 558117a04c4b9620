//! Command-line interface for Recall.
//!
//! Provides the CLI commands for managing the card database and
//! running review rounds.

/// Individual CLI command implementations.
pub mod commands;
