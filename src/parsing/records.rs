//! Raw record types for the export's JSON documents.
//!
//! Only the fields the pipeline reads are declared; everything else in the
//! export (topic ids, annotations, reactions) is ignored by serde. Every field
//! is optional at this level so that a missing value surfaces as a
//! [`MalformedRecord`](crate::ChatscrollError::MalformedRecord) for the one
//! message that lacks it instead of a parse failure for the whole document.

use serde::{Deserialize, Serialize};

/// Kind of a roster member or message creator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MemberKind {
    /// An individual account. Exports spell this `Human`.
    #[serde(alias = "Human", alias = "human", alias = "person")]
    Person,

    /// A group (mailing list or space) participating as a member.
    #[serde(alias = "group")]
    Group,

    /// An app or bot account.
    #[serde(alias = "bot")]
    Bot,

    /// Anything else, including a missing `user_type`.
    #[default]
    #[serde(other)]
    Unknown,
}

/// A roster entry, also used for a message's `creator`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Member kind as exported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<MemberKind>,
    /// Display name (absent for deleted accounts)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact identifier, usually an email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Member {
    /// Creates a person with a name and email.
    pub fn person(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_type: Some(MemberKind::Person),
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// Creates a group member identified by its email.
    pub fn group(email: impl Into<String>) -> Self {
        Self {
            user_type: Some(MemberKind::Group),
            name: None,
            email: Some(email.into()),
        }
    }

    /// Returns the member kind, `Unknown` when not exported.
    pub fn kind(&self) -> MemberKind {
        self.user_type.unwrap_or_default()
    }
}

/// An attachment descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachedFile {
    /// File name of the attachment inside the conversation folder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_name: Option<String>,
}

impl AttachedFile {
    pub fn new(export_name: impl Into<String>) -> Self {
        Self {
            export_name: Some(export_name.into()),
        }
    }
}

/// One entry of `messages.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMessage {
    /// Human-readable creation time, e.g. `Monday, January 1, 2024 at 1:02:03 PM UTC`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
    /// Author of the message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<Member>,
    /// Lifecycle flag; `DELETED` marks removed messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_state: Option<String>,
    /// Plain text body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Attachments, in export order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attached_files: Option<Vec<AttachedFile>>,
}

impl RawMessage {
    /// Returns `true` if the message was deleted before the export.
    pub fn is_deleted(&self) -> bool {
        self.message_state
            .as_deref()
            .is_some_and(|state| state.eq_ignore_ascii_case("deleted"))
    }

    /// Returns `true` if the creator is a bot account.
    pub fn is_from_bot(&self) -> bool {
        self.creator
            .as_ref()
            .is_some_and(|creator| creator.kind() == MemberKind::Bot)
    }

    /// Returns the text body if it is present and non-empty.
    pub fn text_body(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.is_empty())
    }
}

/// `messages.json` wrapper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageLog {
    #[serde(default)]
    pub messages: Vec<RawMessage>,
}

/// `group_info.json` contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupInfo {
    /// Declared space name (absent for direct messages)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Roster in export order
    #[serde(default)]
    pub members: Vec<Member>,
}

impl GroupInfo {
    /// Returns the declared group name if it is non-empty.
    pub fn declared_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_kind_aliases() {
        let kinds: Vec<MemberKind> =
            serde_json::from_str(r#"["Human", "Person", "Group", "Bot", "Robot"]"#).unwrap();
        assert_eq!(
            kinds,
            vec![
                MemberKind::Person,
                MemberKind::Person,
                MemberKind::Group,
                MemberKind::Bot,
                MemberKind::Unknown
            ]
        );
    }

    #[test]
    fn test_member_missing_fields() {
        let member: Member = serde_json::from_str("{}").unwrap();
        assert_eq!(member.kind(), MemberKind::Unknown);
        assert!(member.name.is_none());

        let member: Member = serde_json::from_str(r#"{"user_type": null}"#).unwrap();
        assert_eq!(member.kind(), MemberKind::Unknown);
    }

    #[test]
    fn test_raw_message_deserialize() {
        let msg: RawMessage = serde_json::from_str(
            r#"{
                "creator": {"name": "Alice", "email": "alice@example.com", "user_type": "Human"},
                "created_date": "Monday, January 1, 2024 at 1:02:03 PM UTC",
                "text": "Hello",
                "topic_id": "abc123",
                "attached_files": [{"original_name": "a.png", "export_name": "a.png"}]
            }"#,
        )
        .unwrap();

        assert_eq!(msg.text_body(), Some("Hello"));
        assert_eq!(
            msg.attached_files.as_ref().unwrap()[0].export_name.as_deref(),
            Some("a.png")
        );
        assert!(!msg.is_deleted());
    }

    #[test]
    fn test_deleted_state_case_insensitive() {
        let msg = RawMessage {
            message_state: Some("DELETED".into()),
            ..RawMessage::default()
        };
        assert!(msg.is_deleted());

        let msg = RawMessage {
            message_state: Some("deleted".into()),
            ..RawMessage::default()
        };
        assert!(msg.is_deleted());
    }

    #[test]
    fn test_empty_text_is_not_a_body() {
        let msg = RawMessage {
            text: Some(String::new()),
            ..RawMessage::default()
        };
        assert!(msg.text_body().is_none());
    }

    #[test]
    fn test_bot_creator() {
        let msg = RawMessage {
            creator: Some(Member {
                user_type: Some(MemberKind::Bot),
                name: Some("Meet".into()),
                email: None,
            }),
            ..RawMessage::default()
        };
        assert!(msg.is_from_bot());
    }

    #[test]
    fn test_group_info_declared_name() {
        let info: GroupInfo = serde_json::from_str(r#"{"name": "  ", "members": []}"#).unwrap();
        assert!(info.declared_name().is_none());

        let info: GroupInfo = serde_json::from_str(r#"{"members": []}"#).unwrap();
        assert!(info.declared_name().is_none());
    }
}
