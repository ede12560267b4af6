//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the mockdeck binary.

mod check;
mod commands;
mod deck;
mod input;
mod normalize;

pub use check::{format_repairs, handle_check_command};
pub use commands::{CheckOutputFormat, Cli, Commands, DeckCommands};
pub use deck::handle_deck_command;
pub use input::read_document;
pub use normalize::{handle_normalize_command, render_post};
