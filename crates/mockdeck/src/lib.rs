//! Mockdeck: social ad mockups built on a canonical post shape.
//!
//! This facade re-exports the workspace crates and hosts the configuration
//! and command handlers used by the `mockdeck` binary.
//!
//! # Example
//!
//! ```
//! use mockdeck::{PostType, normalize};
//! use serde_json::json;
//!
//! let post = normalize(&json!({ "media": ["a.png", "b.png"], "activeIndex": 9 }));
//! assert_eq!(*post.post_type(), PostType::Carousel);
//! assert_eq!(*post.active_index(), 1);
//! ```

pub mod cli;
mod config;

pub use config::{ExportConfig, MockdeckConfig, StoreConfig};

pub use mockdeck_core::*;
pub use mockdeck_deck::*;
pub use mockdeck_error::*;
