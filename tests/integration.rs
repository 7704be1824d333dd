//! Integration tests for whole-folder conversion with real files

use chatscroll::batch::{FolderOutcome, convert_all};
use chatscroll::core::{Content, DELETED_USER};
use chatscroll::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Fixtures
// ============================================================================

const DIRECT_MESSAGES: &str = r#"{
  "messages": [
    {
      "creator": {"name": "Alice Smith", "email": "alice@example.com", "user_type": "Human"},
      "created_date": "Monday, January 1, 2024 at 9:15:00 AM UTC",
      "text": "Morning! Agenda attached.",
      "topic_id": "t1"
    },
    {
      "creator": {"name": "Alice Smith", "email": "alice@example.com", "user_type": "Human"},
      "created_date": "Monday, January 1, 2024 at 9:16:10 AM UTC",
      "attached_files": [
        {"original_name": "agenda.pdf", "export_name": "agenda.pdf"},
        {"original_name": "whiteboard.PNG", "export_name": "whiteboard.PNG"}
      ]
    },
    {
      "creator": {"name": "Bob", "email": "bob@example.com", "user_type": "Human"},
      "created_date": "Monday, January 1, 2024 at 9:20:00 AM UTC",
      "text": "Thanks <b>Alice</b>"
    },
    {
      "creator": {"name": "Bob", "email": "bob@example.com", "user_type": "Human"},
      "created_date": "Monday, January 1, 2024 at 9:21:00 AM UTC",
      "message_state": "DELETED"
    },
    {
      "creator": {"name": "Calendar", "user_type": "Bot"},
      "created_date": "Monday, January 1, 2024 at 9:30:00 AM UTC",
      "text": "Meeting starts now"
    },
    {
      "creator": {"name": "Bob", "email": "bob@example.com", "user_type": "Human"},
      "created_date": "Monday, January 1, 2024 at 9:31:00 AM UTC"
    }
  ]
}"#;

const DIRECT_GROUP: &str = r#"{
  "members": [
    {"name": "Alice Smith", "email": "alice@example.com", "user_type": "Human"},
    {"name": "Bob", "email": "bob@example.com", "user_type": "Human"}
  ]
}"#;

fn write_conversation(dir: &Path, messages: &str, group_info: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join("messages.json"), messages).unwrap();
    fs::write(dir.join("group_info.json"), group_info).unwrap();
}

fn setup_export() -> TempDir {
    let root = tempdir().unwrap();
    let groups = root.path().join("Google Chat").join("Groups");
    write_conversation(&groups.join("DM abc123"), DIRECT_MESSAGES, DIRECT_GROUP);
    root
}

fn converted_folders(summary: &RunSummary) -> Vec<&Path> {
    summary
        .outcomes
        .iter()
        .filter_map(|o| match o {
            FolderOutcome::Converted { folder, .. } => Some(folder.as_path()),
            _ => None,
        })
        .collect()
}

// ============================================================================
// End-to-end
// ============================================================================

#[test]
fn test_direct_message_conversion() {
    let root = setup_export();
    let groups = root.path().join("Google Chat").join("Groups");

    let summary = convert_all(root.path(), &ConvertConfig::default()).unwrap();
    assert_eq!(summary.converted(), 1);
    assert!(summary.is_success());

    let folder = groups.join("Alice_Smith_Bob");
    assert_eq!(converted_folders(&summary), vec![folder.as_path()]);
    assert!(!groups.join("DM abc123").exists());

    let html = fs::read_to_string(folder.join("Alice_Smith_Bob_Chat.html")).unwrap();
    assert!(html.contains("<title>Alice Smith, Bob</title>"));
    assert!(html.contains("Morning! Agenda attached."));
    assert!(html.contains(r#"src="whiteboard.PNG""#));
    assert!(html.contains(r#"href="agenda.pdf" download>"#));
    assert!(html.contains("Thanks &lt;b&gt;Alice&lt;"));
    assert!(html.contains("Meeting starts now"));
    // documents stay next to the transcript
    assert!(folder.join("messages.json").is_file());
}

#[test]
fn test_stats_reflect_dropped_messages() {
    let root = setup_export();
    let summary = convert_all(root.path(), &ConvertConfig::default()).unwrap();
    let totals = summary.totals();

    assert_eq!(totals.total, 6);
    assert_eq!(totals.deleted, 1);
    assert_eq!(totals.empty, 1);
    assert_eq!(totals.bots, 0);
    // text, images, files, text, bot text
    assert_eq!(totals.entries, 5);
}

#[test]
fn test_bot_filter() {
    let root = setup_export();
    let config = ConvertConfig::new().with_skip_bots(true);
    let summary = convert_all(root.path(), &config).unwrap();

    assert_eq!(summary.totals().bots, 1);
    let folder = converted_folders(&summary)[0].to_path_buf();
    let html = fs::read_to_string(folder.join("Alice_Smith_Bob_Chat.html")).unwrap();
    assert!(!html.contains("Meeting starts now"));
}

#[test]
fn test_identity_alignment() {
    let root = setup_export();
    let config = ConvertConfig::new().with_identity("bob@example.com");
    let summary = convert_all(root.path(), &config).unwrap();

    let folder = converted_folders(&summary)[0].to_path_buf();
    let html = fs::read_to_string(folder.join("Alice_Smith_Bob_Chat.html")).unwrap();
    assert_eq!(html.matches(r#"class="message right""#).count(), 1);
    assert_eq!(html.matches(r#"class="message left""#).count(), 4);
}

#[test]
fn test_group_member_without_name() {
    let root = tempdir().unwrap();
    let dir = root.path().join("Space xyz");
    write_conversation(
        &dir,
        r#"{"messages": [{
            "creator": {"name": "Dana", "email": "dana@x.com", "user_type": "Human"},
            "created_date": "Tuesday, February 6, 2024 at 4:00:00 PM CET",
            "text": "hello team"
        }]}"#,
        r#"{"members": [{"user_type": "Group", "email": "team@x.com"}]}"#,
    );

    let summary = convert_all(root.path(), &ConvertConfig::default()).unwrap();
    assert_eq!(summary.converted(), 1);

    let expected = format!("team_{DELETED_USER}");
    let folder = root.path().join(&expected);
    assert!(folder.is_dir());
    assert!(folder.join(format!("{expected}_Chat.html")).is_file());
}

#[test]
fn test_declared_name_is_sanitized() {
    let root = tempdir().unwrap();
    write_conversation(
        &root.path().join("Space 1"),
        r#"{"messages": []}"#,
        r#"{"name": "Q1: Plans / Risks?", "members": []}"#,
    );

    convert_all(root.path(), &ConvertConfig::default()).unwrap();
    let folder = root.path().join("Q1__Plans___Risks_");
    assert!(folder.join("Q1__Plans___Risks__Chat.html").is_file());
}

#[test]
fn test_folders_without_documents_are_ignored() {
    let root = setup_export();
    let lonely = root.path().join("only-messages");
    fs::create_dir_all(&lonely).unwrap();
    fs::write(lonely.join("messages.json"), DIRECT_MESSAGES).unwrap();

    let summary = convert_all(root.path(), &ConvertConfig::default()).unwrap();
    assert_eq!(summary.converted(), 1);
    assert_eq!(summary.outcomes.len(), 1);
    assert!(lonely.is_dir());
}

#[test]
fn test_malformed_conversation_keeps_original_folder() {
    let root = tempdir().unwrap();
    let dir = root.path().join("DM broken");
    write_conversation(
        &dir,
        r#"{"messages": [{
            "creator": {"name": "Eve", "email": "eve@x.com"},
            "created_date": "sometime last week",
            "text": "?"
        }]}"#,
        DIRECT_GROUP,
    );

    let summary = convert_all(root.path(), &ConvertConfig::default()).unwrap();
    assert_eq!(summary.failed(), 1);
    match &summary.outcomes[0] {
        FolderOutcome::Failed { error, .. } => assert!(error.is_malformed()),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(dir.is_dir());
    assert!(!dir.join("Alice_Smith_Bob_Chat.html").exists());
}

#[test]
fn test_malformed_skip_policy_converts_rest() {
    let root = tempdir().unwrap();
    write_conversation(
        &root.path().join("DM partial"),
        r#"{"messages": [
            {"creator": {"name": "Eve"}, "created_date": "sometime", "text": "lost"},
            {"creator": {"name": "Bob", "email": "bob@example.com"},
             "created_date": "Monday, January 1, 2024 at 9:20:00 AM UTC", "text": "kept"}
        ]}"#,
        DIRECT_GROUP,
    );

    let config = ConvertConfig::new().with_malformed(MalformedPolicy::Skip);
    let summary = convert_all(root.path(), &config).unwrap();
    assert_eq!(summary.converted(), 1);
    assert_eq!(summary.totals().malformed, 1);

    let html = fs::read_to_string(
        root.path()
            .join("Alice_Smith_Bob")
            .join("Alice_Smith_Bob_Chat.html"),
    )
    .unwrap();
    assert!(html.contains("kept"));
    assert!(!html.contains("lost"));
}

#[test]
fn test_second_run_is_stable() {
    let root = setup_export();
    convert_all(root.path(), &ConvertConfig::default()).unwrap();
    let summary = convert_all(root.path(), &ConvertConfig::default()).unwrap();

    let groups = root.path().join("Google Chat").join("Groups");
    assert_eq!(summary.converted(), 1);
    assert!(groups.join("Alice_Smith_Bob").is_dir());
    assert!(!groups.join("Alice_Smith_Bob_1").exists());
}

// ============================================================================
// Library pipeline without the filesystem
// ============================================================================

#[test]
fn test_text_entries_match_text_messages() {
    let conversation = Conversation::from_json(DIRECT_MESSAGES, DIRECT_GROUP).unwrap();
    let transcript = convert(&conversation, &ConvertConfig::default()).unwrap();

    let expected = conversation
        .messages
        .iter()
        .filter(|m| !m.is_deleted() && m.text_body().is_some())
        .count();
    let actual = transcript
        .messages
        .iter()
        .filter(|m| m.content.is_text())
        .count();
    assert_eq!(actual, expected);
}

#[test]
fn test_mixed_attachment_entries_share_sender_and_time() {
    let conversation = Conversation::from_json(DIRECT_MESSAGES, DIRECT_GROUP).unwrap();
    let transcript = convert(&conversation, &ConvertConfig::default()).unwrap();

    let images = &transcript.messages[1];
    let files = &transcript.messages[2];
    assert_eq!(images.content, Content::Images(vec!["whiteboard.PNG".into()]));
    assert_eq!(files.content, Content::Files(vec!["agenda.pdf".into()]));
    assert_eq!(images.sender, files.sender);
    assert_eq!(images.timestamp, "01/January/2024 09:16:10");
    assert_eq!(images.timestamp, files.timestamp);
}
