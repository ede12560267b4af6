//! Configuration error types.

use std::path::{Path, PathBuf};

/// Configuration file problem, with the file it came from when known.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error)]
pub struct ConfigError {
    /// What went wrong
    pub message: String,
    /// Configuration file being read, if any
    pub path: Option<PathBuf>,
    /// Line number where the error was raised
    pub line: u32,
    /// Source file where the error was raised
    pub file: &'static str,
}

impl ConfigError {
    /// Create a ConfigError at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use mockdeck_error::ConfigError;
    ///
    /// let err = ConfigError::new("expected a table").with_path("mockdeck.toml");
    /// assert!(err.to_string().contains("mockdeck.toml: expected a table"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            path: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Attach the configuration file the error concerns.
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration Error: ")?;
        if let Some(path) = &self.path {
            write!(f, "{}: ", path.display())?;
        }
        write!(f, "{} at line {} in {}", self.message, self.line, self.file)
    }
}
