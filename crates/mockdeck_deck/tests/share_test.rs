//! Tests for share links, comments and export.

use mockdeck_core::PostType;
use mockdeck_deck::{DeckExport, DeckRepository, InMemoryDeckRepository, ShareRegistry, export_deck};
use mockdeck_error::DeckErrorKind;
use serde_json::{Value, json};
use uuid::Uuid;

#[tokio::test]
async fn test_share_link_resolves_until_revoked() {
    let repo = InMemoryDeckRepository::new();
    let deck = repo.create_deck("Client review").await.unwrap();
    let shares = ShareRegistry::new();

    let link = shares.create(*deck.id()).await;
    assert_eq!(link.token().len(), 32);
    assert_eq!(shares.resolve(link.token()).await.unwrap(), *deck.id());

    shares.revoke(link.token()).await.unwrap();
    let err = shares.resolve(link.token()).await.unwrap_err();
    assert!(matches!(err.deck_kind(), Some(DeckErrorKind::ShareRevoked(_))));

    let err = shares.resolve("missing").await.unwrap_err();
    assert!(matches!(err.deck_kind(), Some(DeckErrorKind::ShareNotFound(_))));

    assert_eq!(shares.links_for(*deck.id()).await.len(), 1);
}

#[tokio::test]
async fn test_open_shared_deck() {
    let repo = InMemoryDeckRepository::new();
    let deck = repo.create_deck("Client review").await.unwrap();
    repo.add_item(*deck.id(), &json!({ "media": ["a", "b"] })).await.unwrap();
    let shares = ShareRegistry::new();
    let link = shares.create(*deck.id()).await;

    let view = shares.open(&repo, link.token()).await.unwrap();
    assert_eq!(view.deck_name(), "Client review");
    assert_eq!(view.items().len(), 1);
    assert_eq!(*view.items()[0].post().post_type(), PostType::Carousel);
}

#[tokio::test]
async fn test_comments() {
    let repo = InMemoryDeckRepository::new();
    let deck = repo.create_deck("Client review").await.unwrap();
    let item = repo.add_item(*deck.id(), &json!({})).await.unwrap();
    let shares = ShareRegistry::new();
    let link = shares.create(*deck.id()).await;

    let comment = shares
        .add_comment(&repo, link.token(), *item.id(), "  ", "  Love the second slide  ")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(comment.author(), "Guest");
    assert_eq!(comment.body(), "Love the second slide");

    let blank = shares
        .add_comment(&repo, link.token(), *item.id(), "Dana", "   ")
        .await
        .unwrap();
    assert!(blank.is_none());

    shares
        .add_comment(&repo, link.token(), *item.id(), "Dana", "Approved")
        .await
        .unwrap();
    let comments = shares.comments_for(link.token()).await.unwrap();
    let bodies: Vec<&str> = comments.iter().map(|c| c.body().as_str()).collect();
    assert_eq!(bodies, vec!["Love the second slide", "Approved"]);

    let err = shares
        .add_comment(&repo, link.token(), Uuid::new_v4(), "Dana", "Wrong deck")
        .await
        .unwrap_err();
    assert!(matches!(err.deck_kind(), Some(DeckErrorKind::ItemNotFound(_))));

    let other = repo.create_deck("Other client").await.unwrap();
    let foreign = repo.add_item(*other.id(), &json!({})).await.unwrap();
    assert!(
        shares
            .add_comment(&repo, link.token(), *foreign.id(), "Dana", "Not mine")
            .await
            .is_err()
    );
    assert_eq!(shares.comments_for(link.token()).await.unwrap().len(), 2);

    shares.revoke(link.token()).await.unwrap();
    assert!(
        shares
            .add_comment(&repo, link.token(), *item.id(), "Dana", "Late")
            .await
            .is_err()
    );
}

#[tokio::test]
async fn test_export_deck() {
    let repo = InMemoryDeckRepository::new();
    let deck = repo.create_deck("Delivery").await.unwrap();
    repo.add_item(*deck.id(), &json!({ "caption": "first" })).await.unwrap();
    repo.add_item(*deck.id(), &json!({ "caption": "second", "videoSrc": "v.mp4" }))
        .await
        .unwrap();
    let deck = repo.load_deck(*deck.id()).await.unwrap();

    let export = DeckExport::from_deck(&deck);
    assert_eq!(export.posts.len(), 2);

    let rendered = export_deck(&deck, false).unwrap();
    let parsed: Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(parsed["name"], "Delivery");
    assert_eq!(parsed["posts"][0]["caption"], "first");
    assert_eq!(parsed["posts"][1]["type"], "video");
    assert_eq!(parsed["posts"][1]["mediaMeta"], json!([]));
}
