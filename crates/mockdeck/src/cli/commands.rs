//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use uuid::Uuid;

/// Mockdeck - canonical social ad post mockups
#[derive(Parser, Debug)]
#[command(name = "mockdeck")]
#[command(about = "Normalize, check and organize social ad post mockups")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, env = "MOCKDECK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the canonical form of a post document
    Normalize {
        /// Path to a JSON post, or `-` for stdin
        input: String,

        /// Print on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Report the fields a post document would have repaired
    Check {
        /// Path to a JSON post, or `-` for stdin
        input: String,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: CheckOutputFormat,
    },

    /// Manage decks in the JSON file store
    Deck {
        #[command(subcommand)]
        command: DeckCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum DeckCommands {
    /// Create an empty deck
    Create {
        /// Deck name
        name: String,
    },

    /// Append a post document to a deck
    Add {
        /// Deck ID
        deck_id: Uuid,

        /// Path to a JSON post, or `-` for stdin
        input: String,
    },

    /// List decks, most recently updated first
    List,

    /// Export a deck as a JSON document
    Export {
        /// Deck ID
        deck_id: Uuid,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Output format for the check command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CheckOutputFormat {
    /// One line per repaired field
    Human,
    /// JSON array of repairs
    Json,
}
