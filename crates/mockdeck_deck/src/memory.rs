//! In-memory deck store.
//!
//! Keeps deck documents in a HashMap behind an RwLock. All data is lost when
//! the repository is dropped; useful for tests and previews.

use crate::{DeckStore, LoadMode, StoredDeck};
use async_trait::async_trait;
use mockdeck_error::MockdeckResult;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory repository for decks.
///
/// # Example
/// ```no_run
/// use mockdeck_deck::{DeckRepository, InMemoryDeckRepository};
///
/// #[tokio::main]
/// async fn main() {
///     let repo = InMemoryDeckRepository::new();
///     let deck = repo.create_deck("Spring launch").await.unwrap();
///     repo.add_item(*deck.id(), &serde_json::json!({ "caption": "Hi" })).await.unwrap();
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryDeckRepository {
    decks: Arc<RwLock<HashMap<Uuid, StoredDeck>>>,
    mode: LoadMode,
}

impl InMemoryDeckRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how corrupt stored items are handled on load.
    pub fn with_load_mode(mut self, mode: LoadMode) -> Self {
        self.mode = mode;
        self
    }

    /// Insert a raw document as-is, bypassing normalization.
    ///
    /// Stands in for documents written by older clients or edited by hand.
    pub async fn insert_raw(&self, deck: StoredDeck) {
        self.decks.write().await.insert(deck.id, deck);
    }

    /// Get the number of stored decks.
    pub async fn len(&self) -> usize {
        self.decks.read().await.len()
    }

    /// Check if the repository is empty.
    pub async fn is_empty(&self) -> bool {
        self.decks.read().await.is_empty()
    }
}

#[async_trait]
impl DeckStore for InMemoryDeckRepository {
    async fn read_document(&self, id: Uuid) -> MockdeckResult<Option<StoredDeck>> {
        Ok(self.decks.read().await.get(&id).cloned())
    }

    async fn write_document(&self, deck: &StoredDeck) -> MockdeckResult<()> {
        self.decks.write().await.insert(deck.id, deck.clone());
        Ok(())
    }

    async fn delete_document(&self, id: Uuid) -> MockdeckResult<bool> {
        Ok(self.decks.write().await.remove(&id).is_some())
    }

    async fn list_documents(&self) -> MockdeckResult<Vec<StoredDeck>> {
        Ok(self.decks.read().await.values().cloned().collect())
    }

    fn load_mode(&self) -> LoadMode {
        self.mode
    }
}
