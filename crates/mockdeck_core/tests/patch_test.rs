//! Tests for patch-and-renormalize updates.

use mockdeck_core::{
    AspectRatio, Identifier, PostType, apply_patch, check_invariants, diff_repairs, empty_post,
    merge, normalize,
};
use serde_json::json;

#[test]
fn test_patch_merges_nested_objects() {
    let post = normalize(&json!({ "link": { "headline": "Sale", "url": "https://a.example" } }));
    let patched = apply_patch(&post, &json!({ "link": { "cta": "Shop Now" } }));

    assert_eq!(patched.link().headline(), "Sale");
    assert_eq!(patched.link().url(), "https://a.example");
    assert_eq!(patched.link().cta().to_string(), "Shop Now");
}

#[test]
fn test_patch_renormalizes() {
    let post = empty_post().with_patch(&json!({
        "media": ["a", "b", "c", "d", "e", "f", "g"],
        "activeIndex": 40
    }));
    assert_eq!(post.media().len(), 5);
    assert_eq!(*post.active_index(), 4);
    assert!(check_invariants(&post).is_empty());
}

#[test]
fn test_patch_does_not_touch_template() {
    let before = empty_post().clone();
    let _ = apply_patch(empty_post(), &json!({ "caption": "Changed" }));
    assert_eq!(&before, empty_post());
}

#[test]
fn test_non_object_patch_is_ignored() {
    let post = normalize(&json!({ "caption": "Keep me" }));
    assert_eq!(apply_patch(&post, &json!(["nope"])), post);
    assert_eq!(apply_patch(&post, &json!(null)), post);
}

#[test]
fn test_patched_brand_id_wins() {
    let post = normalize(&json!({ "brand": { "id": "old", "name": "Old Co" } }));

    let patched = apply_patch(&post, &json!({ "brandId": "new" }));
    assert_eq!(*patched.brand_id(), Some(Identifier::Text("new".to_string())));
    assert_eq!(patched.brand().id(), patched.brand_id());
    assert_eq!(patched.brand().name(), "Old Co");

    let patched = apply_patch(&post, &json!({ "brand": { "id": 5 } }));
    assert_eq!(*patched.brand_id(), Some(Identifier::Number(5)));

    let cleared = apply_patch(&post, &json!({ "brandId": null }));
    assert_eq!(*cleared.brand_id(), None);
    assert_eq!(*cleared.brand().id(), None);
}

#[test]
fn test_toggle_reel_on_and_off() {
    let video = empty_post().with_patch(&json!({ "type": "video", "videoSrc": "clip.mp4" }));
    assert_eq!(*video.post_type(), PostType::Video);

    let reel = video.with_patch(&json!({ "isReel": true }));
    assert_eq!(*reel.post_type(), PostType::Reel);
    assert_eq!(*reel.fb_aspect_ratio(), AspectRatio::Vertical);

    let back = reel.with_patch(&json!({ "isReel": false }));
    assert_eq!(*back.post_type(), PostType::Video);
    assert!(!*back.is_reel());
    assert_eq!(*back.fb_aspect_ratio(), AspectRatio::Square);
    assert_eq!(back.ad_tags(), ("feed", "image"));
}

#[test]
fn test_leaving_reels_keeps_explicit_formatting() {
    let reel = normalize(&json!({
        "platform": "instagram",
        "videoSrc": "clip.mp4",
        "isReel": true,
        "fbAdFormat": "stories",
    }));
    assert_eq!(reel.ad_tags(), ("reels-9:16", "reels"));

    let back = reel.with_patch(&json!({ "isReel": false, "fbAspectRatio": "9:16" }));
    assert_eq!(*back.post_type(), PostType::Video);
    assert_eq!(*back.fb_aspect_ratio(), AspectRatio::Vertical);
    assert_eq!(back.ad_tags(), ("feed", "image"));
    assert_eq!(back.fb_ad_format(), "stories");
}

#[test]
fn test_select_media_clamps() {
    let post = normalize(&json!({ "media": ["a", "b", "c"] }));
    assert_eq!(*post.select_media(2).active_index(), 2);
    assert_eq!(*post.select_media(99).active_index(), 2);
    assert_eq!(post.select_media(1).active_media(), Some("b"));
}

#[test]
fn test_push_and_remove_media() {
    let post = normalize(&json!({
        "media": ["a", "b"],
        "mediaMeta": [{ "headline": "A" }, { "headline": "B" }],
        "activeIndex": 1
    }));

    let grown = post.push_media("c");
    assert_eq!(grown.media(), &vec!["a", "b", "c"]);
    assert_eq!(grown.media_meta()[1].headline(), "B");
    assert_eq!(grown.media_meta()[2].headline(), "");

    let shrunk = grown.remove_media(0);
    assert_eq!(shrunk.media(), &vec!["b", "c"]);
    assert_eq!(shrunk.media_meta()[0].headline(), "B");
    assert_eq!(*shrunk.active_index(), 0);

    assert_eq!(shrunk.remove_media(7), shrunk);
}

#[test]
fn test_push_media_respects_limit() {
    let full = normalize(&json!({ "media": ["1", "2", "3", "4", "5"] }));
    let same = full.push_media("6");
    assert_eq!(same.media(), full.media());
}

#[test]
fn test_merge_replaces_arrays_and_scalars() {
    let mut doc = json!({ "media": ["a", "b"], "brand": { "name": "X", "id": 1 } });
    merge(&mut doc, &json!({ "media": ["c"], "brand": { "name": "Y" } }));
    assert_eq!(doc, json!({ "media": ["c"], "brand": { "name": "Y", "id": 1 } }));
}

#[test]
fn test_diff_repairs_reports_changes() {
    let input = json!({
        "media": ["a", "", "b"],
        "fbSquare": false,
        "caption": "Hi"
    });
    let (post, repairs) = diff_repairs(&input);
    assert_eq!(post.media().len(), 2);

    let fields: Vec<&str> = repairs.iter().map(|r| r.field.as_str()).collect();
    assert!(fields.contains(&"media"));
    assert!(fields.contains(&"fbSquare"));
    assert!(fields.contains(&"fbAspectRatio"));
    assert!(!fields.contains(&"caption"));
}

#[test]
fn test_diff_repairs_empty_for_canonical() {
    let post = normalize(&json!({ "media": ["a", "b"], "metrics": { "likes": 3 } }));
    let (again, repairs) = diff_repairs(&post.to_value());
    assert_eq!(again, post);
    assert!(repairs.is_empty(), "unexpected repairs: {:?}", repairs);
}
