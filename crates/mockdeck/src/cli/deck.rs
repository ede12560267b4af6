//! Deck command handlers.

use super::{DeckCommands, read_document};
use crate::MockdeckConfig;
use anyhow::Context;
use mockdeck_deck::{DeckRepository, JsonFileDeckRepository, export_deck};

/// Handles the deck subcommands against the configured JSON file store.
#[tracing::instrument(skip_all, fields(store = %config.store().directory().display()))]
pub async fn handle_deck_command(
    command: DeckCommands,
    config: &MockdeckConfig,
) -> anyhow::Result<()> {
    let repo = JsonFileDeckRepository::new(config.store().directory());

    match command {
        DeckCommands::Create { name } => {
            let deck = repo.create_deck(&name).await?;
            println!("{}", deck.id());
        }
        DeckCommands::Add { deck_id, input } => {
            let raw = read_document(&input)?;
            let item = repo.add_item(deck_id, &raw).await?;
            println!("{} (position {})", item.id(), item.position());
        }
        DeckCommands::List => {
            let decks = repo.list_decks().await?;
            if decks.is_empty() {
                println!("No decks in {}", repo.directory().display());
            }
            for deck in decks {
                println!(
                    "{}  {:<24} {:>3} item(s)  updated {}",
                    deck.id(),
                    deck.name(),
                    deck.item_count(),
                    deck.updated_at().format("%Y-%m-%d %H:%M")
                );
            }
        }
        DeckCommands::Export { deck_id, output } => {
            let deck = repo.load_deck(deck_id).await?;
            let rendered = export_deck(&deck, *config.export().pretty())?;
            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!(path = %path.display(), "Deck exported");
                }
                None => println!("{}", rendered),
            }
        }
    }

    Ok(())
}
