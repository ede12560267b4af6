//! Error types for the mockdeck toolkit.
//!
//! Normalizing a post never fails, so every error here belongs to the layers
//! around the normalizer: configuration, JSON I/O and deck persistence.

#![warn(missing_docs)]

mod config;
mod deck;
mod json;

pub use config::ConfigError;
pub use deck::{DeckError, DeckErrorKind};
pub use json::JsonError;

/// Crate-level error variants.
#[derive(Debug, derive_more::From, derive_more::Display)]
pub enum MockdeckErrorKind {
    /// JSON serialization/deserialization error
    #[display("{}", _0)]
    Json(JsonError),
    /// Configuration error
    #[display("{}", _0)]
    Config(ConfigError),
    /// Deck persistence or sharing error
    #[display("{}", _0)]
    Deck(DeckError),
}

/// Mockdeck error with kind discrimination.
#[derive(Debug)]
pub struct MockdeckError(Box<MockdeckErrorKind>);

impl MockdeckError {
    /// Create a new error from a kind.
    pub fn new(kind: MockdeckErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MockdeckErrorKind {
        &self.0
    }

    /// Returns the deck error kind, if this is a deck error.
    pub fn deck_kind(&self) -> Option<&DeckErrorKind> {
        match self.kind() {
            MockdeckErrorKind::Deck(e) => Some(&e.kind),
            _ => None,
        }
    }
}

impl std::fmt::Display for MockdeckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Mockdeck Error: {}", self.0)
    }
}

impl std::error::Error for MockdeckError {}

// Generic From implementation for any type that converts to MockdeckErrorKind
impl<T> From<T> for MockdeckError
where
    T: Into<MockdeckErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for mockdeck operations.
pub type MockdeckResult<T> = std::result::Result<T, MockdeckError>;
