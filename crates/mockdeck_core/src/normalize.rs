//! Post shape normalization.
//!
//! [`normalize`] is total: any JSON value, however malformed or stale, comes
//! out as a [`Post`] that satisfies every shape invariant. Field rules are
//! applied independently, then derived state (post type, Reels forcing) is
//! settled from the already-normalized fields.

use crate::defaults::{
    DEFAULT_BRAND_NAME, DEFAULT_BRAND_USERNAME, DEFAULT_CAPTION, DEFAULT_FB_AD_FORMAT,
    DEFAULT_FB_AD_TYPE, DEFAULT_IG_AD_FORMAT, DEFAULT_IG_AD_TYPE, DEFAULT_METRICS, MAX_MEDIA,
    REELS_AD_FORMAT, REELS_AD_TYPE, empty_brand, empty_link,
};
use crate::post::PostParts;
use crate::{
    AspectRatio, Brand, CallToAction, Identifier, Link, MediaMeta, Metrics, Platform, Post,
    PostType,
};
use serde_json::{Map, Value};
use std::str::FromStr;
use tracing::{debug, instrument, trace};

/// Normalize any JSON value into a canonical [`Post`].
///
/// Never fails. Non-object input is treated as an empty object, invalid
/// fields fall back to their defaults, and derived fields are inferred.
/// Normalizing the serialized form of a normalized post yields the same
/// post.
///
/// # Examples
///
/// ```
/// use mockdeck_core::{normalize, AspectRatio, PostType};
/// use serde_json::json;
///
/// let post = normalize(&json!({ "media": ["a.png", "b.png", "c.png"] }));
/// assert_eq!(*post.post_type(), PostType::Carousel);
/// assert_eq!(post.media_meta().len(), 3);
///
/// let legacy = normalize(&json!({ "fbSquare": false }));
/// assert_eq!(*legacy.fb_aspect_ratio(), AspectRatio::Landscape);
///
/// // Garbage in, defaults out.
/// let post = normalize(&json!(42));
/// assert_eq!(*post.post_type(), PostType::Single);
/// ```
#[instrument(level = "trace", skip_all)]
pub fn normalize(input: &Value) -> Post {
    let empty = Map::new();
    let src = match input {
        Value::Object(map) => map,
        other => {
            debug!(kind = value_kind(other), "Post input is not an object, using defaults");
            &empty
        }
    };

    let platform = src
        .get("platform")
        .and_then(Value::as_str)
        .and_then(|s| Platform::from_str(s).ok())
        .unwrap_or_default();
    let is_reel = src.get("isReel").is_some_and(is_truthy);
    let caption = match src.get("caption") {
        Some(Value::String(s)) => s.clone(),
        _ => DEFAULT_CAPTION.to_string(),
    };

    let media = normalize_media(src.get("media"));
    let media_meta = normalize_media_meta(src.get("mediaMeta"), media.len());
    let active_index = normalize_active_index(src.get("activeIndex"), media.len());
    let video_src = string_or(src.get("videoSrc"), "");

    let mut parts = PostParts {
        id: parse_identifier(src.get("id")),
        platform,
        post_type: PostType::Single,
        is_reel,
        caption,
        media,
        media_meta,
        video_src,
        muted: src.get("muted").and_then(Value::as_bool).unwrap_or(true),
        playing: src.get("playing").and_then(Value::as_bool).unwrap_or(false),
        active_index,
        fb_aspect_ratio: normalize_aspect_ratio(src.get("fbAspectRatio"), src.get("fbSquare")),
        fb_ad_format: tag_or(src.get("fbAdFormat"), DEFAULT_FB_AD_FORMAT),
        fb_ad_type: tag_or(src.get("fbAdType"), DEFAULT_FB_AD_TYPE),
        ig_ad_format: tag_or(src.get("igAdFormat"), DEFAULT_IG_AD_FORMAT),
        ig_ad_type: tag_or(src.get("igAdType"), DEFAULT_IG_AD_TYPE),
        link: normalize_link(src.get("link")),
        brand: normalize_brand(src.get("brand"), src.get("brandId")),
        metrics: normalize_metrics(src.get("metrics")),
    };

    parts.post_type = match src
        .get("type")
        .and_then(Value::as_str)
        .and_then(|s| PostType::from_str(s).ok())
    {
        Some(explicit) => explicit,
        None => {
            let inferred = infer_post_type(&ShapeFacts::of(&parts));
            trace!(post_type = %inferred, "Inferred post type");
            inferred
        }
    };

    apply_reel_format(&mut parts);
    Post::from(parts)
}

impl Post {
    /// Return the canonical form of this post.
    ///
    /// A post that already satisfies every invariant is returned unchanged;
    /// anything else goes through [`normalize`] again.
    pub fn normalized(self) -> Post {
        if self.is_canonical() {
            self
        } else {
            normalize(&self.to_value())
        }
    }
}

/// Shape facts the post type is inferred from.
#[derive(Debug, Clone, Copy)]
pub struct ShapeFacts {
    /// Reels flag after coercion
    pub is_reel: bool,
    /// Whether a video source is present
    pub has_video: bool,
    /// Media count after filtering and truncation
    pub media_len: usize,
}

impl ShapeFacts {
    fn of(parts: &PostParts) -> Self {
        Self {
            is_reel: parts.is_reel,
            has_video: !parts.video_src.is_empty(),
            media_len: parts.media.len(),
        }
    }
}

/// One entry in the post type decision table.
struct TypeRule {
    post_type: PostType,
    applies: fn(&ShapeFacts) -> bool,
}

/// Ordered inference rules; the first match wins.
///
/// The order decides ambiguous legacy data, e.g. a post holding both a video
/// and several images resolves to video.
const TYPE_RULES: [TypeRule; 4] = [
    TypeRule {
        post_type: PostType::Reel,
        applies: |f| f.is_reel && f.has_video,
    },
    TypeRule {
        post_type: PostType::Video,
        applies: |f| f.has_video,
    },
    TypeRule {
        post_type: PostType::Carousel,
        applies: |f| f.media_len > 1,
    },
    TypeRule {
        post_type: PostType::Single,
        applies: |_| true,
    },
];

/// Infer a post type from shape facts.
///
/// # Examples
///
/// ```
/// use mockdeck_core::{infer_post_type, PostType, ShapeFacts};
///
/// let facts = ShapeFacts { is_reel: false, has_video: true, media_len: 2 };
/// assert_eq!(infer_post_type(&facts), PostType::Video);
/// ```
pub fn infer_post_type(facts: &ShapeFacts) -> PostType {
    TYPE_RULES
        .iter()
        .find(|rule| (rule.applies)(facts))
        .map(|rule| rule.post_type)
        .unwrap_or_default()
}

/// Force Reels format onto a post flagged as a Reel.
///
/// Only the post's own platform gets the Reels ad tags; the other platform's
/// tags keep their normalized values.
fn apply_reel_format(parts: &mut PostParts) {
    if !parts.is_reel && parts.post_type != PostType::Reel {
        return;
    }
    parts.is_reel = true;
    parts.post_type = PostType::Reel;
    parts.fb_aspect_ratio = AspectRatio::Vertical;
    match parts.platform {
        Platform::Facebook => {
            parts.fb_ad_format = REELS_AD_FORMAT.to_string();
            parts.fb_ad_type = REELS_AD_TYPE.to_string();
        }
        Platform::Instagram => {
            parts.ig_ad_format = REELS_AD_FORMAT.to_string();
            parts.ig_ad_type = REELS_AD_TYPE.to_string();
        }
    }
}

fn normalize_media(value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    let media: Vec<String> = items
        .iter()
        .filter_map(|item| match item {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            _ => None,
        })
        .collect();
    if media.len() > MAX_MEDIA {
        debug!(
            count = media.len(),
            max = MAX_MEDIA,
            "Dropping media entries past the limit"
        );
    }
    media.into_iter().take(MAX_MEDIA).collect()
}

// Sized from the final media list; source entries are matched by index.
fn normalize_media_meta(value: Option<&Value>, media_len: usize) -> Vec<MediaMeta> {
    let source = match value {
        Some(Value::Array(items)) => items.as_slice(),
        _ => &[],
    };
    (0..media_len)
        .map(|i| match source.get(i) {
            Some(Value::Object(entry)) => MediaMeta::new(
                string_or(entry.get("headline"), ""),
                string_or(entry.get("subhead"), ""),
            ),
            _ => MediaMeta::default(),
        })
        .collect()
}

fn normalize_active_index(value: Option<&Value>, media_len: usize) -> usize {
    let max = media_len.saturating_sub(1);
    match value.and_then(Value::as_f64) {
        Some(n) if n.is_finite() && n > 0.0 => (n.floor() as usize).min(max),
        _ => 0,
    }
}

fn normalize_aspect_ratio(value: Option<&Value>, legacy_square: Option<&Value>) -> AspectRatio {
    if let Some(ratio) = value
        .and_then(Value::as_str)
        .and_then(|s| AspectRatio::from_str(s).ok())
    {
        return ratio;
    }
    match legacy_square.and_then(Value::as_bool) {
        Some(true) => AspectRatio::Square,
        Some(false) => {
            debug!("Migrating legacy fbSquare=false to 16:9");
            AspectRatio::Landscape
        }
        None => AspectRatio::Square,
    }
}

fn normalize_link(value: Option<&Value>) -> Link {
    let Some(Value::Object(src)) = value else {
        return empty_link();
    };
    let cta = match src.get("cta").and_then(Value::as_str) {
        Some(label) => CallToAction::from_str(label).unwrap_or_else(|_| {
            debug!(cta = label, "Unknown call to action, using the first option");
            CallToAction::default()
        }),
        None => CallToAction::default(),
    };
    Link::new(
        string_or(src.get("headline"), ""),
        string_or(src.get("subhead"), ""),
        string_or(src.get("url"), "").trim().to_string(),
        cta,
    )
}

// The brand object's own id wins, then the top-level brandId.
fn normalize_brand(value: Option<&Value>, brand_id: Option<&Value>) -> Brand {
    let top_level_id = parse_identifier(brand_id);
    let Some(Value::Object(src)) = value else {
        return empty_brand().with_id(top_level_id);
    };
    Brand::new(
        parse_identifier(src.get("id")).or(top_level_id),
        string_or(src.get("name"), DEFAULT_BRAND_NAME),
        string_or(src.get("username"), DEFAULT_BRAND_USERNAME),
        string_or(src.get("profileSrc"), ""),
        src.get("verified").is_some_and(is_truthy),
    )
}

fn normalize_metrics(value: Option<&Value>) -> Metrics {
    let src = match value {
        Some(Value::Object(map)) => Some(map),
        _ => None,
    };
    let field = |key: &str, default: f64| {
        src.and_then(|m| m.get(key))
            .and_then(Value::as_f64)
            .filter(|n| n.is_finite())
            .unwrap_or(default)
    };
    let [likes, comments, shares, saves, views] = DEFAULT_METRICS;
    Metrics::new(
        field("likes", likes),
        field("comments", comments),
        field("shares", shares),
        field("saves", saves),
        field("views", views),
    )
}

/// Parse an opaque identifier: non-blank strings and integers.
pub fn parse_identifier(value: Option<&Value>) -> Option<Identifier> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(Identifier::Text(s.clone())),
        Value::Number(n) => n.as_i64().map(Identifier::Number),
        _ => None,
    }
}

/// JSON truthiness: `null`, `false`, `0`, and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn string_or(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        _ => default.to_string(),
    }
}

fn tag_or(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        _ => default.to_string(),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
