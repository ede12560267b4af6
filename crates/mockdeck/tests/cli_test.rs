//! Tests for CLI parsing and command handlers.

use clap::Parser;
use mockdeck::cli::{
    CheckOutputFormat, Cli, Commands, DeckCommands, format_repairs, handle_check_command,
    handle_deck_command, read_document, render_post,
};
use mockdeck::{
    DeckRepository, JsonFileDeckRepository, MockdeckConfig, diff_repairs, empty_post, normalize,
};
use serde_json::{Value, json};

#[test]
fn test_parse_commands() {
    let cli = Cli::try_parse_from(["mockdeck", "normalize", "post.json", "--compact"]).unwrap();
    assert!(cli.config.is_none());
    assert!(matches!(
        cli.command,
        Commands::Normalize { ref input, compact: true } if input == "post.json"
    ));

    let cli = Cli::try_parse_from(["mockdeck", "check", "-", "--format", "json"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Check { format: CheckOutputFormat::Json, .. }
    ));

    let cli = Cli::try_parse_from(["mockdeck", "deck", "list", "--config", "m.toml"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("m.toml")));
    assert!(matches!(
        cli.command,
        Commands::Deck { command: DeckCommands::List }
    ));
}

#[test]
fn test_deck_add_requires_uuid() {
    assert!(Cli::try_parse_from(["mockdeck", "deck", "add", "not-a-uuid", "post.json"]).is_err());
}

#[test]
fn test_read_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("post.json");
    std::fs::write(&path, r#"{ "caption": "hi" }"#).unwrap();
    let value = read_document(path.to_str().unwrap()).unwrap();
    assert_eq!(value, json!({ "caption": "hi" }));

    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "{ nope").unwrap();
    assert!(read_document(bad.to_str().unwrap()).is_err());
    assert!(read_document("/nonexistent/post.json").is_err());
}

#[test]
fn test_render_post() {
    let post = normalize(&json!({ "caption": "hi" }));
    let compact = render_post(&post, true).unwrap();
    assert!(!compact.contains('\n'));
    let parsed: Value = serde_json::from_str(&compact).unwrap();
    assert_eq!(parsed["caption"], "hi");
    assert!(render_post(&post, false).unwrap().contains('\n'));
}

#[test]
fn test_check_reports_repairs() {
    let dir = tempfile::tempdir().unwrap();
    let canonical = dir.path().join("canonical.json");
    std::fs::write(&canonical, empty_post().to_value().to_string()).unwrap();
    assert!(handle_check_command(canonical.to_str().unwrap(), CheckOutputFormat::Human).unwrap());

    let legacy = dir.path().join("legacy.json");
    std::fs::write(&legacy, r#"{ "fbSquare": false }"#).unwrap();
    assert!(!handle_check_command(legacy.to_str().unwrap(), CheckOutputFormat::Json).unwrap());
}

#[test]
fn test_format_repairs() {
    let (_, repairs) = diff_repairs(&json!({ "fbSquare": true, "activeIndex": 3 }));

    let human = format_repairs(&repairs, CheckOutputFormat::Human).unwrap();
    assert!(human.contains("fbSquare: dropped"));
    assert!(human.contains("activeIndex: 3 -> 0"));

    let parsed: Value =
        serde_json::from_str(&format_repairs(&repairs, CheckOutputFormat::Json).unwrap()).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), repairs.len());

    let clean = format_repairs(&[], CheckOutputFormat::Human).unwrap();
    assert!(clean.contains("canonical"));
}

#[tokio::test]
async fn test_deck_commands_use_configured_store() {
    let dir = tempfile::tempdir().unwrap();
    let config = MockdeckConfig::from_toml(&format!(
        "[store]\ndirectory = {:?}\n",
        dir.path().join("decks").to_str().unwrap()
    ))
    .unwrap();

    handle_deck_command(
        DeckCommands::Create {
            name: "Launch".to_string(),
        },
        &config,
    )
    .await
    .unwrap();

    let repo = JsonFileDeckRepository::new(config.store().directory());
    let decks = repo.list_decks().await.unwrap();
    assert_eq!(decks.len(), 1);
    let deck_id = *decks[0].id();

    let post = dir.path().join("post.json");
    std::fs::write(&post, r#"{ "media": ["a", "b"], "activeIndex": 7 }"#).unwrap();
    handle_deck_command(
        DeckCommands::Add {
            deck_id,
            input: post.to_str().unwrap().to_string(),
        },
        &config,
    )
    .await
    .unwrap();

    let out = dir.path().join("export.json");
    handle_deck_command(
        DeckCommands::Export {
            deck_id,
            output: Some(out.clone()),
        },
        &config,
    )
    .await
    .unwrap();

    let exported: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(exported["name"], "Launch");
    assert_eq!(exported["posts"][0]["type"], "carousel");
    assert_eq!(exported["posts"][0]["activeIndex"], 1);
}
