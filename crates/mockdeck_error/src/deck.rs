//! Deck persistence and sharing error types.

/// Kinds of deck errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum DeckErrorKind {
    /// No deck exists with the given id
    #[display("Deck not found: {}", _0)]
    DeckNotFound(String),
    /// No item exists with the given id in the deck
    #[display("Deck item not found: {}", _0)]
    ItemNotFound(String),
    /// Position is outside the deck's item range
    #[display("Invalid position {} for deck with {} items", position, len)]
    InvalidPosition {
        /// Requested position
        position: usize,
        /// Number of items in the deck
        len: usize,
    },
    /// Stored post document is beyond repair
    #[display("Corrupt deck item {}: {}", item, reason)]
    CorruptItem {
        /// Item id
        item: String,
        /// What was wrong with the stored document
        reason: String,
    },
    /// Share token does not resolve to a link
    #[display("Share link not found: {}", _0)]
    ShareNotFound(String),
    /// Share token was revoked
    #[display("Share link revoked: {}", _0)]
    ShareRevoked(String),
    /// I/O error in the backing store
    #[display("I/O error: {}", _0)]
    Io(String),
}

/// Deck error with location tracking.
///
/// # Examples
///
/// ```
/// use mockdeck_error::{DeckError, DeckErrorKind};
///
/// let err = DeckError::new(DeckErrorKind::ShareRevoked("abc123".to_string()));
/// assert!(format!("{}", err).contains("revoked"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Deck Error: {} at line {} in {}", kind, line, file)]
pub struct DeckError {
    /// The kind of error that occurred
    pub kind: DeckErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DeckError {
    /// Create a new deck error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DeckErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
