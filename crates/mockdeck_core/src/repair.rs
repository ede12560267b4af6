//! Field-level diff between a raw document and its normalized post.

use crate::{Post, normalize};
use serde::Serialize;
use serde_json::Value;

/// One top-level field the normalizer changed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldRepair {
    /// Field name as stored
    pub field: String,
    /// Value in the raw document, if the field was present
    pub before: Option<Value>,
    /// Canonical value, or `None` for legacy fields that were dropped
    pub after: Option<Value>,
}

/// Normalize `input` and list the top-level fields that differ from it.
///
/// An empty list means the document was already canonical.
///
/// # Examples
///
/// ```
/// use mockdeck_core::{diff_repairs, empty_post};
/// use serde_json::json;
///
/// let (_, repairs) = diff_repairs(&empty_post().to_value());
/// assert!(repairs.is_empty());
///
/// let (_, repairs) = diff_repairs(&json!({ "fbSquare": true }));
/// assert!(repairs.iter().any(|r| r.field == "fbSquare" && r.after.is_none()));
/// ```
pub fn diff_repairs(input: &Value) -> (Post, Vec<FieldRepair>) {
    let post = normalize(input);
    let canonical = post.to_value();
    let mut repairs = Vec::new();

    let source = input.as_object();
    if let Value::Object(fields) = &canonical {
        for (field, after) in fields {
            let before = source.and_then(|s| s.get(field));
            if before != Some(after) {
                repairs.push(FieldRepair {
                    field: field.clone(),
                    before: before.cloned(),
                    after: Some(after.clone()),
                });
            }
        }
        for (field, before) in source.into_iter().flatten() {
            if !fields.contains_key(field) {
                repairs.push(FieldRepair {
                    field: field.clone(),
                    before: Some(before.clone()),
                    after: None,
                });
            }
        }
    }

    (post, repairs)
}
