//! Patch-and-renormalize updates.
//!
//! Callers never assign post fields directly. They describe a change as a
//! partial JSON document, merge it onto the current post and normalize the
//! result, so every edit lands back in canonical shape.

use crate::defaults::{REELS_AD_FORMAT, REELS_AD_TYPE};
use crate::{Post, normalize};
use serde_json::{Map, Value};
use tracing::{debug, instrument};

/// Merge `patch` onto `post` and normalize the result.
///
/// Objects merge recursively; every other value, including `null` and
/// arrays, replaces what was there. Brand identity follows whichever of
/// `brandId` or `brand.id` the patch sets. Clearing `isReel` without naming
/// a type lets the type be inferred again and restores the default aspect
/// ratio and ad tags the Reels format had forced.
///
/// # Examples
///
/// ```
/// use mockdeck_core::{apply_patch, empty_post, PostType};
/// use serde_json::json;
///
/// let post = apply_patch(empty_post(), &json!({ "videoSrc": "clip.mp4", "isReel": true }));
/// assert_eq!(*post.post_type(), PostType::Reel);
///
/// let post = apply_patch(&post, &json!({ "isReel": false }));
/// assert_eq!(*post.post_type(), PostType::Video);
/// ```
#[instrument(level = "debug", skip_all)]
pub fn apply_patch(post: &Post, patch: &Value) -> Post {
    let Value::Object(changes) = patch else {
        debug!("Ignoring non-object patch");
        return post.clone();
    };

    let mut merged = post.to_value();
    merge(&mut merged, patch);

    if let Value::Object(doc) = &mut merged {
        reconcile_brand_id(doc, changes);
        release_reel_type(doc, changes);
    }

    normalize(&merged)
}

impl Post {
    /// Method form of [`apply_patch`].
    pub fn with_patch(&self, patch: &Value) -> Post {
        apply_patch(self, patch)
    }

    /// Select the slide at `index`, clamped into range.
    pub fn select_media(&self, index: usize) -> Post {
        apply_patch(self, &serde_json::json!({ "activeIndex": index }))
    }

    /// Append a media reference with empty overlay text.
    ///
    /// Adding past the media limit leaves the list unchanged.
    pub fn push_media(&self, reference: impl Into<String>) -> Post {
        let mut media: Vec<Value> = self.media().iter().cloned().map(Value::String).collect();
        media.push(Value::String(reference.into()));
        let mut meta: Vec<Value> = self
            .media_meta()
            .iter()
            .map(|m| serde_json::json!({ "headline": m.headline(), "subhead": m.subhead() }))
            .collect();
        meta.push(serde_json::json!({ "headline": "", "subhead": "" }));
        apply_patch(self, &serde_json::json!({ "media": media, "mediaMeta": meta }))
    }

    /// Remove the media entry at `index` together with its overlay text.
    pub fn remove_media(&self, index: usize) -> Post {
        if index >= self.media().len() {
            return self.clone();
        }
        let mut media = self.media().clone();
        media.remove(index);
        let mut meta = self.media_meta().clone();
        meta.remove(index);
        let active = match *self.active_index() {
            current if current > index => current - 1,
            current => current,
        };
        apply_patch(
            self,
            &serde_json::json!({ "media": media, "mediaMeta": meta, "activeIndex": active }),
        )
    }
}

/// Recursively merge `patch` into `target`.
pub fn merge(target: &mut Value, patch: &Value) {
    match (target, patch) {
        (Value::Object(target), Value::Object(patch)) => {
            for (key, value) in patch {
                match target.get_mut(key) {
                    Some(existing) if existing.is_object() && value.is_object() => {
                        merge(existing, value)
                    }
                    _ => {
                        target.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (target, patch) => *target = patch.clone(),
    }
}

fn reconcile_brand_id(doc: &mut Map<String, Value>, changes: &Map<String, Value>) {
    let patched_brand_id = changes.get("brandId");
    let patched_nested_id = changes
        .get("brand")
        .and_then(Value::as_object)
        .and_then(|brand| brand.get("id"));

    match (patched_brand_id, patched_nested_id) {
        (Some(id), None) => {
            if let Some(Value::Object(brand)) = doc.get_mut("brand") {
                brand.insert("id".to_string(), id.clone());
            }
        }
        (None, Some(id)) => {
            doc.insert("brandId".to_string(), id.clone());
        }
        _ => {}
    }
}

// Leaving Reels also drops the forced Reels formatting, unless the patch
// sets those fields itself.
fn release_reel_type(doc: &mut Map<String, Value>, changes: &Map<String, Value>) {
    let clears_reel = changes
        .get("isReel")
        .is_some_and(|v| !crate::is_truthy(v));
    if !clears_reel || changes.contains_key("type") {
        return;
    }
    doc.remove("type");

    let forced = [
        ("fbAspectRatio", "9:16"),
        ("fbAdFormat", REELS_AD_FORMAT),
        ("fbAdType", REELS_AD_TYPE),
        ("igAdFormat", REELS_AD_FORMAT),
        ("igAdType", REELS_AD_TYPE),
    ];
    for (field, reels_value) in forced {
        let still_forced = doc.get(field).and_then(Value::as_str) == Some(reels_value);
        if still_forced && !changes.contains_key(field) {
            doc.remove(field);
        }
    }
}
