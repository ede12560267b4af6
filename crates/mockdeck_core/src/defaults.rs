//! Default values and the empty post template.

use crate::{
    AspectRatio, Brand, CallToAction, Link, Metrics, Platform, Post, PostType,
    post::PostParts,
};
use std::sync::LazyLock;

/// Maximum number of media entries a post keeps.
pub const MAX_MEDIA: usize = 5;

/// Caption used when a post has none.
pub const DEFAULT_CAPTION: &str = "Write your caption here...";

/// Default Facebook ad format tag.
pub const DEFAULT_FB_AD_FORMAT: &str = "feed";
/// Default Facebook ad type tag.
pub const DEFAULT_FB_AD_TYPE: &str = "image";
/// Default Instagram ad format tag.
pub const DEFAULT_IG_AD_FORMAT: &str = "feed";
/// Default Instagram ad type tag.
pub const DEFAULT_IG_AD_TYPE: &str = "image";

/// Ad format tag forced onto Reels posts.
pub const REELS_AD_FORMAT: &str = "reels-9:16";
/// Ad type tag forced onto Reels posts.
pub const REELS_AD_TYPE: &str = "reels";

/// Brand name shown before one is picked.
pub const DEFAULT_BRAND_NAME: &str = "Your Brand";
/// Brand handle shown before one is picked.
pub const DEFAULT_BRAND_USERNAME: &str = "yourbrand";

/// Default engagement counters: likes, comments, shares, saves, views.
pub const DEFAULT_METRICS: [f64; 5] = [248.0, 36.0, 12.0, 18.0, 4200.0];

/// Brand used when a post has none.
pub fn empty_brand() -> Brand {
    Brand::new(
        None,
        DEFAULT_BRAND_NAME.to_string(),
        DEFAULT_BRAND_USERNAME.to_string(),
        String::new(),
        false,
    )
}

/// Link block used when a post has none.
pub fn empty_link() -> Link {
    Link::new(
        String::new(),
        String::new(),
        String::new(),
        CallToAction::default(),
    )
}

/// Metrics used when a post has none.
pub fn default_metrics() -> Metrics {
    let [likes, comments, shares, saves, views] = DEFAULT_METRICS;
    Metrics::new(likes, comments, shares, saves, views)
}

static EMPTY_POST: LazyLock<Post> = LazyLock::new(|| {
    Post::from(PostParts {
        id: None,
        platform: Platform::Facebook,
        post_type: PostType::Single,
        is_reel: false,
        caption: DEFAULT_CAPTION.to_string(),
        media: Vec::new(),
        media_meta: Vec::new(),
        video_src: String::new(),
        muted: true,
        playing: false,
        active_index: 0,
        fb_aspect_ratio: AspectRatio::Square,
        fb_ad_format: DEFAULT_FB_AD_FORMAT.to_string(),
        fb_ad_type: DEFAULT_FB_AD_TYPE.to_string(),
        ig_ad_format: DEFAULT_IG_AD_FORMAT.to_string(),
        ig_ad_type: DEFAULT_IG_AD_TYPE.to_string(),
        link: empty_link(),
        brand: empty_brand(),
        metrics: default_metrics(),
    })
});

/// The shared template every new post starts from.
///
/// Derive new posts by cloning and patching; the template itself never
/// changes.
///
/// # Examples
///
/// ```
/// use mockdeck_core::{empty_post, normalize, PostType};
/// use serde_json::json;
///
/// assert_eq!(*empty_post().post_type(), PostType::Single);
/// assert_eq!(&normalize(&json!({})), empty_post());
/// ```
pub fn empty_post() -> &'static Post {
    &EMPTY_POST
}
