//! Deck and deck item types.
//!
//! Decks are persisted as [`StoredDeck`] documents whose posts are opaque
//! JSON. Loading a document produces a [`Deck`] whose posts have all been
//! normalized; saving goes the other way through [`Post::to_value`].

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use mockdeck_core::{Post, normalize};
use mockdeck_error::{DeckError, DeckErrorKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

/// How to treat stored items whose post document is not a JSON object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadMode {
    /// Skip corrupt items with a warning (default)
    #[default]
    Lenient,
    /// Fail the load with [`DeckErrorKind::CorruptItem`]
    Strict,
}

/// One post in a deck, at a fixed position.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct DeckItem {
    id: Uuid,
    position: u32,
    post: Post,
    created_at: DateTime<Utc>,
}

/// An ordered collection of post mockups.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct Deck {
    id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    items: Vec<DeckItem>,
}

impl Deck {
    /// Posts in deck order.
    pub fn posts(&self) -> impl Iterator<Item = &Post> {
        self.items.iter().map(DeckItem::post)
    }

    /// Find an item by id.
    pub fn item(&self, item_id: Uuid) -> Option<&DeckItem> {
        self.items.iter().find(|item| item.id == item_id)
    }
}

/// Listing entry for a deck.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct DeckSummary {
    id: Uuid,
    name: String,
    item_count: usize,
    updated_at: DateTime<Utc>,
}

/// Persisted form of a deck item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredItem {
    /// Item id
    pub id: Uuid,
    /// Ordering index
    pub position: u32,
    /// Post document as stored, canonical or not
    pub post_json: Value,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Persisted form of a deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDeck {
    /// Deck id
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
    /// Items in any order; `position` decides
    #[serde(default)]
    pub items: Vec<StoredItem>,
}

impl StoredDeck {
    /// Start an empty deck document.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: now,
            updated_at: now,
            items: Vec::new(),
        }
    }

    /// Summarize the document for listings.
    pub fn summary(&self) -> DeckSummary {
        DeckSummary {
            id: self.id,
            name: self.name.clone(),
            item_count: self.items.len(),
            updated_at: self.updated_at,
        }
    }

    /// Sort items by position and renumber them `0..n`.
    pub fn compact_positions(&mut self) {
        self.items.sort_by_key(|item| item.position);
        for (i, item) in self.items.iter_mut().enumerate() {
            item.position = i as u32;
        }
    }

    /// Bring the stored items in line with what a load in `mode` shows.
    ///
    /// Positions are compacted. Items whose post document is not a JSON
    /// object fail with [`DeckErrorKind::CorruptItem`] in strict mode and
    /// are dropped from the document in lenient mode, so positions used by
    /// mutations always match the loaded deck.
    pub fn prune_corrupt(&mut self, mode: LoadMode) -> Result<(), DeckError> {
        self.compact_positions();
        if let Some(corrupt) = self.items.iter().find(|item| !item.post_json.is_object()) {
            if mode == LoadMode::Strict {
                return Err(corrupt_item(corrupt));
            }
        }
        let deck_id = self.id;
        self.items.retain(|item| {
            let keep = item.post_json.is_object();
            if !keep {
                warn!(deck = %deck_id, item = %item.id, "Dropping corrupt deck item");
            }
            keep
        });
        self.compact_positions();
        Ok(())
    }

    /// Append a post at the end of the deck, normalizing it first.
    pub fn push_post(&mut self, post: &Value, mode: LoadMode) -> Result<StoredItem, DeckError> {
        self.prune_corrupt(mode)?;
        let item = StoredItem {
            id: Uuid::new_v4(),
            position: self.items.len() as u32,
            post_json: normalize(post).to_value(),
            created_at: Utc::now(),
        };
        self.items.push(item.clone());
        self.touch();
        Ok(item)
    }

    /// Patch one item's post and store the renormalized result.
    pub fn patch_item(
        &mut self,
        item_id: Uuid,
        patch: &Value,
        mode: LoadMode,
    ) -> Result<Post, DeckError> {
        self.prune_corrupt(mode)?;
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or_else(|| DeckError::new(DeckErrorKind::ItemNotFound(item_id.to_string())))?;
        let post = normalize(&item.post_json).with_patch(patch);
        item.post_json = post.to_value();
        self.touch();
        Ok(post)
    }

    /// Remove an item and close the gap in positions.
    pub fn remove_item(&mut self, item_id: Uuid, mode: LoadMode) -> Result<(), DeckError> {
        self.prune_corrupt(mode)?;
        let before = self.items.len();
        self.items.retain(|item| item.id != item_id);
        if self.items.len() == before {
            return Err(DeckError::new(DeckErrorKind::ItemNotFound(
                item_id.to_string(),
            )));
        }
        self.compact_positions();
        self.touch();
        Ok(())
    }

    /// Move the item at position `from` to position `to`.
    pub fn move_item(&mut self, from: usize, to: usize, mode: LoadMode) -> Result<(), DeckError> {
        self.prune_corrupt(mode)?;
        let len = self.items.len();
        for position in [from, to] {
            if position >= len {
                return Err(DeckError::new(DeckErrorKind::InvalidPosition {
                    position,
                    len,
                }));
            }
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        for (i, item) in self.items.iter_mut().enumerate() {
            item.position = i as u32;
        }
        self.touch();
        Ok(())
    }

    /// Update the modification time.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Build a [`Deck`], normalizing every post.
    ///
    /// Items whose post document is not a JSON object cannot be repaired
    /// meaningfully; `mode` decides whether they are skipped or fail the
    /// load.
    pub fn into_deck(mut self, mode: LoadMode) -> Result<Deck, DeckError> {
        self.compact_positions();
        let mut items = Vec::with_capacity(self.items.len());
        for stored in self.items {
            if !stored.post_json.is_object() {
                match mode {
                    LoadMode::Strict => return Err(corrupt_item(&stored)),
                    LoadMode::Lenient => {
                        warn!(
                            deck = %self.id,
                            item = %stored.id,
                            kind = json_kind(&stored.post_json),
                            "Skipping corrupt deck item"
                        );
                        continue;
                    }
                }
            }
            items.push(DeckItem {
                id: stored.id,
                position: items.len() as u32,
                post: normalize(&stored.post_json),
                created_at: stored.created_at,
            });
        }
        Ok(Deck {
            id: self.id,
            name: self.name,
            created_at: self.created_at,
            updated_at: self.updated_at,
            items,
        })
    }
}

impl DeckItem {
    /// Build an item from its stored form, normalizing the post.
    pub fn from_stored(stored: &StoredItem) -> Self {
        Self {
            id: stored.id,
            position: stored.position,
            post: normalize(&stored.post_json),
            created_at: stored.created_at,
        }
    }
}

fn corrupt_item(stored: &StoredItem) -> DeckError {
    DeckError::new(DeckErrorKind::CorruptItem {
        item: stored.id.to_string(),
        reason: format!("post_json is {}", json_kind(&stored.post_json)),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
