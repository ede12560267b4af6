//! Deck repository trait.
//!
//! Backends implement [`DeckStore`], which only moves [`StoredDeck`]
//! documents in and out of storage. Every [`DeckStore`] gets the
//! [`DeckRepository`] operations, which normalize posts on the way in and on
//! the way out.

use crate::{Deck, DeckItem, DeckSummary, LoadMode, StoredDeck};
use async_trait::async_trait;
use mockdeck_error::{DeckError, DeckErrorKind, MockdeckResult};
use serde_json::Value;
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Raw document storage for decks.
#[async_trait]
pub trait DeckStore: Send + Sync {
    /// Read a deck document, or `None` if it does not exist.
    async fn read_document(&self, id: Uuid) -> MockdeckResult<Option<StoredDeck>>;

    /// Create or replace a deck document.
    async fn write_document(&self, deck: &StoredDeck) -> MockdeckResult<()>;

    /// Delete a deck document. Returns false if it did not exist.
    async fn delete_document(&self, id: Uuid) -> MockdeckResult<bool>;

    /// All deck documents, in no particular order.
    async fn list_documents(&self) -> MockdeckResult<Vec<StoredDeck>>;

    /// How corrupt items are treated when loading.
    fn load_mode(&self) -> LoadMode {
        LoadMode::Lenient
    }
}

/// Deck persistence operations.
///
/// Item mutations address the deck exactly as [`DeckRepository::load_deck`]
/// shows it. Under [`LoadMode::Lenient`] the first mutation drops corrupt
/// items from the stored document; under [`LoadMode::Strict`] it fails with
/// `CorruptItem`.
#[async_trait]
pub trait DeckRepository: Send + Sync {
    /// Create an empty deck.
    async fn create_deck(&self, name: &str) -> MockdeckResult<Deck>;

    /// Load a deck with all posts normalized.
    async fn load_deck(&self, id: Uuid) -> MockdeckResult<Deck>;

    /// List decks, most recently updated first.
    async fn list_decks(&self) -> MockdeckResult<Vec<DeckSummary>>;

    /// Rename a deck.
    async fn rename_deck(&self, id: Uuid, name: &str) -> MockdeckResult<Deck>;

    /// Delete a deck and its items.
    async fn delete_deck(&self, id: Uuid) -> MockdeckResult<()>;

    /// Append a post to the end of a deck.
    async fn add_item(&self, deck_id: Uuid, post: &Value) -> MockdeckResult<DeckItem>;

    /// Patch an item's post and store the renormalized result.
    async fn update_item(
        &self,
        deck_id: Uuid,
        item_id: Uuid,
        patch: &Value,
    ) -> MockdeckResult<DeckItem>;

    /// Remove an item; later items move up.
    async fn remove_item(&self, deck_id: Uuid, item_id: Uuid) -> MockdeckResult<()>;

    /// Move the item at `from` to `to`.
    async fn move_item(&self, deck_id: Uuid, from: usize, to: usize) -> MockdeckResult<Deck>;
}

async fn require<S: DeckStore + ?Sized>(store: &S, id: Uuid) -> MockdeckResult<StoredDeck> {
    store
        .read_document(id)
        .await?
        .ok_or_else(|| DeckError::new(DeckErrorKind::DeckNotFound(id.to_string())).into())
}

#[async_trait]
impl<S: DeckStore> DeckRepository for S {
    #[instrument(skip(self))]
    async fn create_deck(&self, name: &str) -> MockdeckResult<Deck> {
        let stored = StoredDeck::new(name);
        self.write_document(&stored).await?;
        info!(deck = %stored.id, "Created deck");
        Ok(stored.into_deck(self.load_mode())?)
    }

    #[instrument(skip(self))]
    async fn load_deck(&self, id: Uuid) -> MockdeckResult<Deck> {
        let stored = require(self, id).await?;
        let deck = stored.into_deck(self.load_mode())?;
        debug!(items = deck.items().len(), "Loaded deck");
        Ok(deck)
    }

    #[instrument(skip(self))]
    async fn list_decks(&self) -> MockdeckResult<Vec<DeckSummary>> {
        let mut summaries: Vec<DeckSummary> = self
            .list_documents()
            .await?
            .iter()
            .map(StoredDeck::summary)
            .collect();
        summaries.sort_by(|a, b| b.updated_at().cmp(a.updated_at()));
        Ok(summaries)
    }

    #[instrument(skip(self))]
    async fn rename_deck(&self, id: Uuid, name: &str) -> MockdeckResult<Deck> {
        let mut stored = require(self, id).await?;
        stored.name = name.to_string();
        stored.touch();
        self.write_document(&stored).await?;
        Ok(stored.into_deck(self.load_mode())?)
    }

    #[instrument(skip(self))]
    async fn delete_deck(&self, id: Uuid) -> MockdeckResult<()> {
        if !self.delete_document(id).await? {
            return Err(DeckError::new(DeckErrorKind::DeckNotFound(id.to_string())).into());
        }
        info!(deck = %id, "Deleted deck");
        Ok(())
    }

    #[instrument(skip(self, post))]
    async fn add_item(&self, deck_id: Uuid, post: &Value) -> MockdeckResult<DeckItem> {
        let mut stored = require(self, deck_id).await?;
        let item = stored.push_post(post, self.load_mode())?;
        self.write_document(&stored).await?;
        debug!(item = %item.id, position = item.position, "Added deck item");
        Ok(DeckItem::from_stored(&item))
    }

    #[instrument(skip(self, patch))]
    async fn update_item(
        &self,
        deck_id: Uuid,
        item_id: Uuid,
        patch: &Value,
    ) -> MockdeckResult<DeckItem> {
        let mut stored = require(self, deck_id).await?;
        stored.patch_item(item_id, patch, self.load_mode())?;
        self.write_document(&stored).await?;
        let item = stored
            .items
            .iter()
            .find(|item| item.id == item_id)
            .map(DeckItem::from_stored)
            .ok_or_else(|| DeckError::new(DeckErrorKind::ItemNotFound(item_id.to_string())))?;
        Ok(item)
    }

    #[instrument(skip(self))]
    async fn remove_item(&self, deck_id: Uuid, item_id: Uuid) -> MockdeckResult<()> {
        let mut stored = require(self, deck_id).await?;
        stored.remove_item(item_id, self.load_mode())?;
        self.write_document(&stored).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn move_item(&self, deck_id: Uuid, from: usize, to: usize) -> MockdeckResult<Deck> {
        let mut stored = require(self, deck_id).await?;
        stored.move_item(from, to, self.load_mode())?;
        self.write_document(&stored).await?;
        Ok(stored.into_deck(self.load_mode())?)
    }
}
