//! Canonical post types.
//!
//! Every field is private: a [`Post`] is only produced by the normalizer
//! (directly, through [`crate::empty_post`], or through
//! [`Post::with_patch`]), so a value of this type always satisfies the
//! shape invariants.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Opaque identifier for posts and brands.
///
/// Stored documents carry either numeric database keys or string ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(untagged)]
pub enum Identifier {
    /// Integer key
    #[display("{}", _0)]
    Number(i64),
    /// String key (never empty)
    #[display("{}", _0)]
    Text(String),
}

impl Identifier {
    /// Returns true when the identifier carries a usable value.
    pub fn is_valid(&self) -> bool {
        match self {
            Identifier::Number(_) => true,
            Identifier::Text(s) => !s.trim().is_empty(),
        }
    }
}

/// Platform the mockup renders for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumString,
    strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Platform {
    /// Facebook feed
    #[default]
    Facebook,
    /// Instagram feed
    Instagram,
}

/// Post format.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumString,
    strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PostType {
    /// One image
    #[default]
    Single,
    /// Two to five images
    Carousel,
    /// Feed video
    Video,
    /// Vertical Reels video
    Reel,
}

/// Facebook creative aspect ratio.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumString,
    strum::Display, strum::EnumIter,
)]
pub enum AspectRatio {
    /// Square
    #[default]
    #[serde(rename = "1:1")]
    #[strum(serialize = "1:1")]
    Square,
    /// Portrait feed
    #[serde(rename = "4:5")]
    #[strum(serialize = "4:5")]
    Portrait,
    /// Full-screen vertical
    #[serde(rename = "9:16")]
    #[strum(serialize = "9:16")]
    Vertical,
    /// Widescreen
    #[serde(rename = "16:9")]
    #[strum(serialize = "16:9")]
    Landscape,
    /// Link-ad landscape
    #[serde(rename = "1.91:1")]
    #[strum(serialize = "1.91:1")]
    Link,
}

/// Call-to-action button label.
///
/// The declaration order is the option list shown in the editor; the first
/// entry is the fallback for unknown labels.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumString,
    strum::Display, strum::EnumIter,
)]
pub enum CallToAction {
    #[default]
    #[serde(rename = "Learn More")]
    #[strum(serialize = "Learn More")]
    LearnMore,
    #[serde(rename = "Shop Now")]
    #[strum(serialize = "Shop Now")]
    ShopNow,
    #[serde(rename = "Sign Up")]
    #[strum(serialize = "Sign Up")]
    SignUp,
    #[serde(rename = "Book Now")]
    #[strum(serialize = "Book Now")]
    BookNow,
    #[serde(rename = "Contact Us")]
    #[strum(serialize = "Contact Us")]
    ContactUs,
    #[serde(rename = "Download")]
    #[strum(serialize = "Download")]
    Download,
    #[serde(rename = "Get Offer")]
    #[strum(serialize = "Get Offer")]
    GetOffer,
    #[serde(rename = "Get Quote")]
    #[strum(serialize = "Get Quote")]
    GetQuote,
    #[serde(rename = "Subscribe")]
    #[strum(serialize = "Subscribe")]
    Subscribe,
    #[serde(rename = "Watch More")]
    #[strum(serialize = "Watch More")]
    WatchMore,
    #[serde(rename = "Apply Now")]
    #[strum(serialize = "Apply Now")]
    ApplyNow,
    #[serde(rename = "Order Now")]
    #[strum(serialize = "Order Now")]
    OrderNow,
    #[serde(rename = "Send Message")]
    #[strum(serialize = "Send Message")]
    SendMessage,
}

/// Per-slide overlay text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Getters, Serialize)]
pub struct MediaMeta {
    headline: String,
    subhead: String,
}

impl MediaMeta {
    pub(crate) fn new(headline: String, subhead: String) -> Self {
        Self { headline, subhead }
    }
}

/// Link preview and CTA button under the creative.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize)]
pub struct Link {
    headline: String,
    subhead: String,
    /// Destination URL, trimmed but otherwise unvalidated
    url: String,
    cta: CallToAction,
}

impl Link {
    pub(crate) fn new(headline: String, subhead: String, url: String, cta: CallToAction) -> Self {
        Self {
            headline,
            subhead,
            url,
            cta,
        }
    }
}

/// The page or account the post appears to come from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    id: Option<Identifier>,
    name: String,
    username: String,
    profile_src: String,
    verified: bool,
}

impl Brand {
    pub(crate) fn new(
        id: Option<Identifier>,
        name: String,
        username: String,
        profile_src: String,
        verified: bool,
    ) -> Self {
        Self {
            id,
            name,
            username,
            profile_src,
            verified,
        }
    }

    pub(crate) fn with_id(mut self, id: Option<Identifier>) -> Self {
        self.id = id;
        self
    }
}

/// Engagement counters shown on the mockup.
#[derive(Debug, Clone, Copy, PartialEq, Getters, Serialize)]
pub struct Metrics {
    #[serde(serialize_with = "serialize_count")]
    likes: f64,
    #[serde(serialize_with = "serialize_count")]
    comments: f64,
    #[serde(serialize_with = "serialize_count")]
    shares: f64,
    #[serde(serialize_with = "serialize_count")]
    saves: f64,
    #[serde(serialize_with = "serialize_count")]
    views: f64,
}

// Whole counts are written as integers, matching hand-written documents.
fn serialize_count<S: serde::Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < 9.0e15 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

impl Metrics {
    pub(crate) fn new(likes: f64, comments: f64, shares: f64, saves: f64, views: f64) -> Self {
        Self {
            likes,
            comments,
            shares,
            saves,
            views,
        }
    }

    /// All counters in declaration order.
    pub fn values(&self) -> [f64; 5] {
        [self.likes, self.comments, self.shares, self.saves, self.views]
    }
}

/// A single social post mockup in canonical shape.
///
/// Serializes with the camelCase field names used by stored documents, so
/// a serialized post normalizes back to itself. Deserializing always runs
/// the normalizer, so no un-normalized `Post` can be read from JSON.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "serde_json::Value")]
pub struct Post {
    id: Option<Identifier>,
    platform: Platform,
    #[serde(rename = "type")]
    post_type: PostType,
    is_reel: bool,
    caption: String,
    media: Vec<String>,
    media_meta: Vec<MediaMeta>,
    video_src: String,
    muted: bool,
    playing: bool,
    active_index: usize,
    fb_aspect_ratio: AspectRatio,
    fb_ad_format: String,
    fb_ad_type: String,
    ig_ad_format: String,
    ig_ad_type: String,
    link: Link,
    brand: Brand,
    metrics: Metrics,
    brand_id: Option<Identifier>,
}

/// Field values gathered by the normalizer before derived state is applied.
#[derive(Debug)]
pub(crate) struct PostParts {
    pub id: Option<Identifier>,
    pub platform: Platform,
    pub post_type: PostType,
    pub is_reel: bool,
    pub caption: String,
    pub media: Vec<String>,
    pub media_meta: Vec<MediaMeta>,
    pub video_src: String,
    pub muted: bool,
    pub playing: bool,
    pub active_index: usize,
    pub fb_aspect_ratio: AspectRatio,
    pub fb_ad_format: String,
    pub fb_ad_type: String,
    pub ig_ad_format: String,
    pub ig_ad_type: String,
    pub link: Link,
    pub brand: Brand,
    pub metrics: Metrics,
}

impl From<PostParts> for Post {
    fn from(parts: PostParts) -> Self {
        let brand_id = parts.brand.id.clone();
        Self {
            id: parts.id,
            platform: parts.platform,
            post_type: parts.post_type,
            is_reel: parts.is_reel,
            caption: parts.caption,
            media: parts.media,
            media_meta: parts.media_meta,
            video_src: parts.video_src,
            muted: parts.muted,
            playing: parts.playing,
            active_index: parts.active_index,
            fb_aspect_ratio: parts.fb_aspect_ratio,
            fb_ad_format: parts.fb_ad_format,
            fb_ad_type: parts.fb_ad_type,
            ig_ad_format: parts.ig_ad_format,
            ig_ad_type: parts.ig_ad_type,
            link: parts.link,
            brand: parts.brand,
            metrics: parts.metrics,
            brand_id,
        }
    }
}

impl Post {
    /// Returns true when the post carries a video source.
    pub fn has_video(&self) -> bool {
        !self.video_src.is_empty()
    }

    /// Media reference at the active index, if any.
    pub fn active_media(&self) -> Option<&str> {
        self.media.get(self.active_index).map(String::as_str)
    }

    /// Ad format/type tags for the post's own platform.
    pub fn ad_tags(&self) -> (&str, &str) {
        match self.platform {
            Platform::Facebook => (&self.fb_ad_format, &self.fb_ad_type),
            Platform::Instagram => (&self.ig_ad_format, &self.ig_ad_type),
        }
    }

    /// Serializes the post to the stored JSON shape.
    pub fn to_value(&self) -> serde_json::Value {
        // All map keys are strings, so serializing into a Value cannot fail.
        serde_json::to_value(self).expect("Post serializes to a JSON value")
    }
}

impl From<serde_json::Value> for Post {
    fn from(value: serde_json::Value) -> Self {
        crate::normalize(&value)
    }
}

impl Default for Post {
    fn default() -> Self {
        crate::empty_post().clone()
    }
}
