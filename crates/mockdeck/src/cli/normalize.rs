//! Normalize command handler.

use super::read_document;
use anyhow::Context;
use mockdeck_core::{Post, normalize};

/// Render a post as JSON.
pub fn render_post(post: &Post, compact: bool) -> anyhow::Result<String> {
    let rendered = if compact {
        serde_json::to_string(post)
    } else {
        serde_json::to_string_pretty(post)
    };
    rendered.context("Failed to serialize post")
}

/// Handles the normalize command.
#[tracing::instrument]
pub fn handle_normalize_command(input: &str, compact: bool) -> anyhow::Result<()> {
    let raw = read_document(input)?;
    let post = normalize(&raw);
    tracing::debug!(post_type = %post.post_type(), "Normalized post");
    println!("{}", render_post(&post, compact)?);
    Ok(())
}
