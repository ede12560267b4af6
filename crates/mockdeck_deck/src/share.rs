//! Tokenized share links and client comments.

use crate::{Deck, DeckRepository};
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use mockdeck_core::Post;
use mockdeck_error::{DeckError, DeckErrorKind, MockdeckResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// A link that grants read and comment access to one deck.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ShareLink {
    token: String,
    deck_id: Uuid,
    created_at: DateTime<Utc>,
    revoked: bool,
}

/// A client comment on one deck item, left through a share link.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Comment {
    id: Uuid,
    item_id: Uuid,
    author: String,
    body: String,
    created_at: DateTime<Utc>,
}

/// One post as seen through a share link.
#[derive(Debug, Clone, PartialEq, Getters, Serialize)]
pub struct SharedItem {
    item_id: Uuid,
    position: u32,
    post: Post,
}

/// Read-only projection of a deck for share-link rendering.
#[derive(Debug, Clone, PartialEq, Getters, Serialize)]
pub struct SharedDeckView {
    token: String,
    deck_name: String,
    items: Vec<SharedItem>,
    comments: Vec<Comment>,
}

impl SharedDeckView {
    fn new(token: &str, deck: Deck, comments: Vec<Comment>) -> Self {
        let items = deck
            .items()
            .iter()
            .map(|item| SharedItem {
                item_id: *item.id(),
                position: *item.position(),
                post: item.post().clone(),
            })
            .collect();
        Self {
            token: token.to_string(),
            deck_name: deck.name().clone(),
            items,
            comments,
        }
    }
}

/// In-memory registry of share links and their comments.
#[derive(Debug, Clone, Default)]
pub struct ShareRegistry {
    links: Arc<RwLock<HashMap<String, ShareLink>>>,
    comments: Arc<RwLock<HashMap<String, Vec<Comment>>>>,
}

impl ShareRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new share link for a deck.
    #[instrument(skip(self))]
    pub async fn create(&self, deck_id: Uuid) -> ShareLink {
        let link = ShareLink {
            token: Uuid::new_v4().simple().to_string(),
            deck_id,
            created_at: Utc::now(),
            revoked: false,
        };
        self.links
            .write()
            .await
            .insert(link.token.clone(), link.clone());
        info!(deck = %deck_id, "Created share link");
        link
    }

    /// Revoke a share link. Revoking twice is not an error.
    #[instrument(skip(self))]
    pub async fn revoke(&self, token: &str) -> MockdeckResult<()> {
        let mut links = self.links.write().await;
        let link = links
            .get_mut(token)
            .ok_or_else(|| DeckError::new(DeckErrorKind::ShareNotFound(token.to_string())))?;
        link.revoked = true;
        info!(deck = %link.deck_id, "Revoked share link");
        Ok(())
    }

    /// Resolve a live token to its deck id.
    pub async fn resolve(&self, token: &str) -> MockdeckResult<Uuid> {
        let links = self.links.read().await;
        let link = links
            .get(token)
            .ok_or_else(|| DeckError::new(DeckErrorKind::ShareNotFound(token.to_string())))?;
        if link.revoked {
            return Err(DeckError::new(DeckErrorKind::ShareRevoked(token.to_string())).into());
        }
        Ok(link.deck_id)
    }

    /// Links issued for a deck, including revoked ones.
    pub async fn links_for(&self, deck_id: Uuid) -> Vec<ShareLink> {
        let mut links: Vec<ShareLink> = self
            .links
            .read()
            .await
            .values()
            .filter(|link| link.deck_id == deck_id)
            .cloned()
            .collect();
        links.sort_by_key(|link| link.created_at);
        links
    }

    /// Leave a comment on an item through a live link.
    ///
    /// The item must belong to the shared deck as currently loaded. The body
    /// is trimmed; a blank body is dropped and returns `None`. A blank author
    /// is recorded as "Guest".
    #[instrument(skip(self, repository, body))]
    pub async fn add_comment<R: DeckRepository + ?Sized>(
        &self,
        repository: &R,
        token: &str,
        item_id: Uuid,
        author: &str,
        body: &str,
    ) -> MockdeckResult<Option<Comment>> {
        let deck_id = self.resolve(token).await?;
        let deck = repository.load_deck(deck_id).await?;
        if deck.item(item_id).is_none() {
            return Err(DeckError::new(DeckErrorKind::ItemNotFound(item_id.to_string())).into());
        }
        let body = body.trim();
        if body.is_empty() {
            debug!("Ignoring blank comment");
            return Ok(None);
        }
        let author = match author.trim() {
            "" => "Guest",
            name => name,
        };
        let comment = Comment {
            id: Uuid::new_v4(),
            item_id,
            author: author.to_string(),
            body: body.to_string(),
            created_at: Utc::now(),
        };
        self.comments
            .write()
            .await
            .entry(token.to_string())
            .or_default()
            .push(comment.clone());
        Ok(Some(comment))
    }

    /// Comments left through a link, oldest first.
    pub async fn comments_for(&self, token: &str) -> MockdeckResult<Vec<Comment>> {
        self.resolve(token).await?;
        Ok(self
            .comments
            .read()
            .await
            .get(token)
            .cloned()
            .unwrap_or_default())
    }

    /// Open the deck behind a live link, with every post normalized.
    #[instrument(skip(self, repository))]
    pub async fn open<R: DeckRepository + ?Sized>(
        &self,
        repository: &R,
        token: &str,
    ) -> MockdeckResult<SharedDeckView> {
        let deck_id = self.resolve(token).await?;
        let deck = repository.load_deck(deck_id).await?;
        let comments = self.comments_for(token).await?;
        Ok(SharedDeckView::new(token, deck, comments))
    }
}
