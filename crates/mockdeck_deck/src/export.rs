//! Deck export for delivery.

use crate::Deck;
use chrono::{DateTime, Utc};
use mockdeck_core::Post;
use mockdeck_error::{JsonError, MockdeckResult};
use serde::Serialize;
use tracing::instrument;

/// Exported deck document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeckExport {
    /// Deck name
    pub name: String,
    /// Export time
    pub exported_at: DateTime<Utc>,
    /// Posts in deck order
    pub posts: Vec<Post>,
}

impl DeckExport {
    /// Snapshot a deck, renormalizing every post.
    pub fn from_deck(deck: &Deck) -> Self {
        Self {
            name: deck.name().clone(),
            exported_at: Utc::now(),
            posts: deck.posts().cloned().map(Post::normalized).collect(),
        }
    }
}

/// Render a deck as a JSON export document.
#[instrument(skip(deck), fields(deck = %deck.id()))]
pub fn export_deck(deck: &Deck, pretty: bool) -> MockdeckResult<String> {
    let export = DeckExport::from_deck(deck);
    let rendered = if pretty {
        serde_json::to_string_pretty(&export)
    } else {
        serde_json::to_string(&export)
    };
    Ok(rendered.map_err(|e| JsonError::new(format!("Failed to serialize export: {}", e)))?)
}
