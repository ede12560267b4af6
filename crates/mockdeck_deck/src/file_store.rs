//! JSON file deck store.
//!
//! One `<deck-id>.json` document per deck in a single directory.

use crate::{DeckStore, LoadMode, StoredDeck};
use async_trait::async_trait;
use mockdeck_error::{DeckError, DeckErrorKind, JsonError, MockdeckResult};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

/// Deck repository backed by JSON files.
#[derive(Debug, Clone)]
pub struct JsonFileDeckRepository {
    directory: PathBuf,
    mode: LoadMode,
}

impl JsonFileDeckRepository {
    /// Use `directory` as the store root. It is created on first write.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            mode: LoadMode::Lenient,
        }
    }

    /// Set how corrupt stored items are handled on load.
    pub fn with_load_mode(mut self, mode: LoadMode) -> Self {
        self.mode = mode;
        self
    }

    /// Store root directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path_for(&self, id: Uuid) -> PathBuf {
        self.directory.join(format!("{}.json", id))
    }
}

fn io_error(context: &str, path: &Path, e: std::io::Error) -> DeckError {
    DeckError::new(DeckErrorKind::Io(format!(
        "{} {}: {}",
        context,
        path.display(),
        e
    )))
}

async fn read_deck_file(path: &Path) -> MockdeckResult<StoredDeck> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| io_error("Failed to read", path, e))?;
    let deck = serde_json::from_str(&contents).map_err(|e| {
        JsonError::new(format!("Failed to parse deck {}: {}", path.display(), e))
    })?;
    Ok(deck)
}

#[async_trait]
impl DeckStore for JsonFileDeckRepository {
    async fn read_document(&self, id: Uuid) -> MockdeckResult<Option<StoredDeck>> {
        let path = self.path_for(id);
        match tokio::fs::metadata(&path).await {
            Ok(_) => Ok(Some(read_deck_file(&path).await?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error("Failed to stat", &path, e).into()),
        }
    }

    async fn write_document(&self, deck: &StoredDeck) -> MockdeckResult<()> {
        tokio::fs::create_dir_all(&self.directory)
            .await
            .map_err(|e| io_error("Failed to create", &self.directory, e))?;
        let path = self.path_for(deck.id);
        let contents = serde_json::to_string_pretty(deck)
            .map_err(|e| JsonError::new(format!("Failed to serialize deck: {}", e)))?;

        // Write beside the target, then rename over it.
        let staging = path.with_extension("json.tmp");
        tokio::fs::write(&staging, contents)
            .await
            .map_err(|e| io_error("Failed to write", &staging, e))?;
        tokio::fs::rename(&staging, &path)
            .await
            .map_err(|e| io_error("Failed to replace", &path, e))?;
        debug!(path = %path.display(), "Wrote deck document");
        Ok(())
    }

    async fn delete_document(&self, id: Uuid) -> MockdeckResult<bool> {
        let path = self.path_for(id);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(io_error("Failed to delete", &path, e).into()),
        }
    }

    async fn list_documents(&self) -> MockdeckResult<Vec<StoredDeck>> {
        let mut entries = match tokio::fs::read_dir(&self.directory).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error("Failed to list", &self.directory, e).into()),
        };

        let mut decks = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| io_error("Failed to list", &self.directory, e))?
        {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            match read_deck_file(&path).await {
                Ok(deck) => decks.push(deck),
                Err(e) => warn!(path = %path.display(), error = %e, "Skipping unreadable deck file"),
            }
        }
        Ok(decks)
    }

    fn load_mode(&self) -> LoadMode {
        self.mode
    }
}
