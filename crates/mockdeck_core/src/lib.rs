//! Core post model for the mockdeck toolkit.
//!
//! This crate owns the canonical [`Post`] shape and the normalizer that
//! produces it. Everything that crosses a boundary (file load, paste, deck
//! fetch, share fetch, partial edit) goes through [`normalize`] or
//! [`apply_patch`], so rendering and persistence only ever see canonical
//! posts.

mod defaults;
mod invariants;
mod normalize;
mod observability;
mod patch;
mod post;
mod repair;

pub use defaults::{
    DEFAULT_BRAND_NAME, DEFAULT_BRAND_USERNAME, DEFAULT_CAPTION, DEFAULT_FB_AD_FORMAT,
    DEFAULT_FB_AD_TYPE, DEFAULT_IG_AD_FORMAT, DEFAULT_IG_AD_TYPE, DEFAULT_METRICS, MAX_MEDIA,
    REELS_AD_FORMAT, REELS_AD_TYPE, default_metrics, empty_brand, empty_link, empty_post,
};
pub use invariants::{InvariantViolation, check_invariants};
pub use normalize::{ShapeFacts, infer_post_type, is_truthy, normalize, parse_identifier};
pub use observability::init_tracing;
pub use patch::{apply_patch, merge};
pub use post::{
    AspectRatio, Brand, CallToAction, Identifier, Link, MediaMeta, Metrics, Platform, Post,
    PostType,
};
pub use repair::{FieldRepair, diff_repairs};
