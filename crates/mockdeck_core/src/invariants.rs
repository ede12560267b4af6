//! Shape invariant checks.
//!
//! A [`Post`] produced by this crate always passes these checks. They exist
//! for tests and for persistence guards that want to assert every mutation
//! path went through the normalizer.

use crate::defaults::{MAX_MEDIA, REELS_AD_FORMAT, REELS_AD_TYPE};
use crate::{AspectRatio, Platform, Post, PostType};

/// A broken shape invariant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum InvariantViolation {
    /// More media than a post can hold
    #[display("media has {} entries, over the limit", _0)]
    TooManyMedia(usize),
    /// An empty media reference survived filtering
    #[display("media entry {} is empty", _0)]
    EmptyMedia(usize),
    /// Overlay text list does not match the media list
    #[display("mediaMeta has {} entries for {} media", meta, media)]
    MetaLength {
        /// Overlay entries
        meta: usize,
        /// Media entries
        media: usize,
    },
    /// Active slide points past the media list
    #[display("activeIndex {} is out of range for {} media", index, media)]
    ActiveIndex {
        /// Active index
        index: usize,
        /// Media entries
        media: usize,
    },
    /// Brand id and top-level brandId disagree
    #[display("brand.id and brandId differ")]
    BrandIdMismatch,
    /// An identifier holds a blank string
    #[display("{} is a blank identifier", _0)]
    BlankIdentifier(&'static str),
    /// Reels flag and type disagree
    #[display("isReel={} with type {}", is_reel, post_type)]
    ReelType {
        /// Reels flag
        is_reel: bool,
        /// Post type
        post_type: PostType,
    },
    /// Reel without the vertical aspect ratio
    #[display("reel with aspect ratio {}", _0)]
    ReelAspect(AspectRatio),
    /// Reel without Reels ad tags on its own platform
    #[display("reel on {} has ad tags {}/{}", platform, format, ad_type)]
    ReelTags {
        /// Post platform
        platform: Platform,
        /// Ad format tag
        format: String,
        /// Ad type tag
        ad_type: String,
    },
    /// Link URL carries surrounding whitespace
    #[display("link url is not trimmed")]
    UntrimmedUrl,
    /// Ad format or type tag is blank
    #[display("ad tag {} is blank", _0)]
    BlankTag(&'static str),
    /// Metric is NaN or infinite
    #[display("metric {} is not finite", _0)]
    NonFiniteMetric(&'static str),
}

/// Check every shape invariant of a post.
///
/// Returns an empty list for canonical posts.
///
/// # Examples
///
/// ```
/// use mockdeck_core::{check_invariants, normalize};
/// use serde_json::json;
///
/// let post = normalize(&json!({ "media": ["a", "b"], "activeIndex": 9 }));
/// assert!(check_invariants(&post).is_empty());
/// ```
pub fn check_invariants(post: &Post) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let media = post.media();

    if media.len() > MAX_MEDIA {
        violations.push(InvariantViolation::TooManyMedia(media.len()));
    }
    for (i, entry) in media.iter().enumerate() {
        if entry.is_empty() {
            violations.push(InvariantViolation::EmptyMedia(i));
        }
    }
    if post.media_meta().len() != media.len() {
        violations.push(InvariantViolation::MetaLength {
            meta: post.media_meta().len(),
            media: media.len(),
        });
    }
    if *post.active_index() > media.len().saturating_sub(1) {
        violations.push(InvariantViolation::ActiveIndex {
            index: *post.active_index(),
            media: media.len(),
        });
    }

    if post.brand().id() != post.brand_id() {
        violations.push(InvariantViolation::BrandIdMismatch);
    }
    if post.id().as_ref().is_some_and(|id| !id.is_valid()) {
        violations.push(InvariantViolation::BlankIdentifier("id"));
    }
    if post.brand_id().as_ref().is_some_and(|id| !id.is_valid()) {
        violations.push(InvariantViolation::BlankIdentifier("brandId"));
    }

    check_reel(post, &mut violations);

    if post.link().url().trim() != post.link().url() {
        violations.push(InvariantViolation::UntrimmedUrl);
    }
    let tags = [
        ("fbAdFormat", post.fb_ad_format()),
        ("fbAdType", post.fb_ad_type()),
        ("igAdFormat", post.ig_ad_format()),
        ("igAdType", post.ig_ad_type()),
    ];
    for (name, tag) in tags {
        if tag.trim().is_empty() {
            violations.push(InvariantViolation::BlankTag(name));
        }
    }

    let names = ["likes", "comments", "shares", "saves", "views"];
    for (name, value) in names.into_iter().zip(post.metrics().values()) {
        if !value.is_finite() {
            violations.push(InvariantViolation::NonFiniteMetric(name));
        }
    }

    violations
}

fn check_reel(post: &Post, violations: &mut Vec<InvariantViolation>) {
    let is_reel = *post.is_reel();
    let typed_reel = *post.post_type() == PostType::Reel;
    if is_reel != typed_reel {
        violations.push(InvariantViolation::ReelType {
            is_reel,
            post_type: *post.post_type(),
        });
    }
    if !is_reel && !typed_reel {
        return;
    }
    if *post.fb_aspect_ratio() != AspectRatio::Vertical {
        violations.push(InvariantViolation::ReelAspect(*post.fb_aspect_ratio()));
    }
    let (format, ad_type) = post.ad_tags();
    if format != REELS_AD_FORMAT || ad_type != REELS_AD_TYPE {
        violations.push(InvariantViolation::ReelTags {
            platform: *post.platform(),
            format: format.to_string(),
            ad_type: ad_type.to_string(),
        });
    }
}

impl Post {
    /// Method form of [`check_invariants`].
    pub fn check_invariants(&self) -> Vec<InvariantViolation> {
        check_invariants(self)
    }

    /// Returns true when no shape invariant is broken.
    pub fn is_canonical(&self) -> bool {
        check_invariants(self).is_empty()
    }
}
