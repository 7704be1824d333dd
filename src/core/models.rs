//! Core data models for normalized transcripts.

use serde::Serialize;

/// Resolved author of a message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Sender {
    /// Display name
    pub name: String,
    /// Contact identifier, `unknown@deleted` when the export has none
    pub email: String,
}

impl Sender {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Typed content of one transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Content {
    /// Plain text body, verbatim
    Text(String),
    /// Image attachments rendered as inline previews
    Images(Vec<String>),
    /// Other attachments rendered as download links
    Files(Vec<String>),
}

impl Content {
    /// Returns `true` for a text entry.
    pub fn is_text(&self) -> bool {
        matches!(self, Content::Text(_))
    }
}

/// One rendered block of a transcript.
///
/// A single export message may yield two of these (images, then files)
/// sharing the same sender and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedMessage {
    /// Timestamp formatted as `DD/Month/YYYY HH:MM:SS`
    pub timestamp: String,
    /// Resolved author
    pub sender: Sender,
    /// What to show
    pub content: Content,
}

impl NormalizedMessage {
    pub fn new(timestamp: impl Into<String>, sender: Sender, content: Content) -> Self {
        Self {
            timestamp: timestamp.into(),
            sender,
            content,
        }
    }
}

/// Counters collected while converting one conversation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConversationStats {
    /// Messages in the export log
    pub total: usize,
    /// Messages flagged as deleted
    pub deleted: usize,
    /// Messages dropped by the bot filter
    pub bots: usize,
    /// Messages with neither text nor attachments
    pub empty: usize,
    /// Malformed messages dropped under the skip policy
    pub malformed: usize,
    /// Transcript entries produced
    pub entries: usize,
}

impl ConversationStats {
    /// Messages that did not make it into the transcript.
    pub fn dropped(&self) -> usize {
        self.deleted + self.bots + self.empty + self.malformed
    }
}
