//! Deck persistence and sharing for mockdeck.
//!
//! Decks store posts as opaque JSON documents. This crate is the boundary
//! where those documents meet the normalizer:
//! - writes normalize before persisting, so stored documents are canonical
//! - reads normalize after fetching, so legacy or hand-edited documents are
//!   repaired before anyone renders them
//!
//! Storage backends implement [`DeckStore`]; every store gets the
//! [`DeckRepository`] operations.

mod deck;
mod export;
mod file_store;
mod memory;
mod repository;
mod share;

pub use deck::{Deck, DeckItem, DeckSummary, LoadMode, StoredDeck, StoredItem};
pub use export::{DeckExport, export_deck};
pub use file_store::JsonFileDeckRepository;
pub use memory::InMemoryDeckRepository;
pub use repository::{DeckRepository, DeckStore};
pub use share::{Comment, ShareLink, ShareRegistry, SharedDeckView, SharedItem};
