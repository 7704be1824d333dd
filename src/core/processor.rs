//! Conversion pipeline: raw conversation in, rendered transcript out.
//!
//! Nothing here touches the filesystem; [`crate::batch`] applies the result.

use tracing::{debug, warn};

use super::classify::classify;
use super::colors::{assign_colors, distinct_senders};
use super::identity::{resolve_sender, roster_names};
use super::models::{ConversationStats, NormalizedMessage};
use super::naming::{html_file_name, output_name};
use super::output::HtmlRenderer;
use super::timestamp::format_timestamp;
use crate::config::{ConvertConfig, MalformedPolicy};
use crate::error::{ChatscrollError, Result};
use crate::parsing::{Conversation, RawMessage};

/// A rendered conversation, ready to be written.
#[derive(Debug, Clone)]
pub struct Transcript {
    /// Filesystem-safe base name for the HTML file and the folder
    pub output_name: String,
    /// Human-readable heading of the document
    pub title: String,
    /// Complete HTML document
    pub html: String,
    /// Entries that were rendered
    pub messages: Vec<NormalizedMessage>,
    /// Counters for this conversation
    pub stats: ConversationStats,
}

impl Transcript {
    /// File name of the HTML document, `<output_name>_Chat.html`.
    pub fn html_file_name(&self) -> String {
        html_file_name(&self.output_name)
    }
}

/// Normalizes one message that survived filtering.
fn normalize_message(msg: &RawMessage, index: usize) -> Result<Vec<NormalizedMessage>> {
    let creator = msg
        .creator
        .as_ref()
        .ok_or_else(|| ChatscrollError::malformed_record(index, "creator"))?;
    let created = msg
        .created_date
        .as_deref()
        .ok_or_else(|| ChatscrollError::malformed_record(index, "created_date"))?;

    let timestamp = format_timestamp(created)?;
    let sender = resolve_sender(creator);
    classify(msg, index, &sender, &timestamp)
}

/// Filters and normalizes the message log, in export order.
///
/// Deleted messages are always dropped, bot messages when
/// [`ConvertConfig::skip_bots`] is set. Messages without text or attachments
/// are dropped and counted as empty.
///
/// # Errors
///
/// A malformed message fails the conversation under
/// [`MalformedPolicy::Abort`]; under [`MalformedPolicy::Skip`] it is dropped.
pub fn normalize(
    conversation: &Conversation,
    config: &ConvertConfig,
) -> Result<(Vec<NormalizedMessage>, ConversationStats)> {
    let mut stats = ConversationStats {
        total: conversation.messages.len(),
        ..ConversationStats::default()
    };
    let mut normalized = Vec::with_capacity(conversation.messages.len());

    for (index, msg) in conversation.messages.iter().enumerate() {
        if msg.is_deleted() {
            stats.deleted += 1;
            continue;
        }
        if config.skip_bots && msg.is_from_bot() {
            stats.bots += 1;
            continue;
        }

        match normalize_message(msg, index) {
            Ok(entries) if entries.is_empty() => {
                debug!(index, "dropping message without text or attachments");
                stats.empty += 1;
            }
            Ok(entries) => normalized.extend(entries),
            Err(e) if e.is_malformed() && config.malformed == MalformedPolicy::Skip => {
                warn!(index, error = %e, "skipping malformed message");
                stats.malformed += 1;
            }
            Err(e) => return Err(e),
        }
    }

    stats.entries = normalized.len();
    Ok((normalized, stats))
}

/// Heading shown at the top of the transcript.
fn title(conversation: &Conversation, roster: &[String]) -> String {
    match conversation.group.declared_name() {
        Some(name) => name.trim().to_string(),
        None if roster.is_empty() => super::naming::FALLBACK_NAME.to_string(),
        None => roster.join(", "),
    }
}

/// Runs the whole pipeline with an existing renderer.
pub fn convert_with(
    renderer: &HtmlRenderer,
    conversation: &Conversation,
    config: &ConvertConfig,
) -> Result<Transcript> {
    let roster = roster_names(&conversation.group.members);
    let (messages, stats) = normalize(conversation, config)?;
    let colors = assign_colors(distinct_senders(&messages), config.palette.colors());

    let title = title(conversation, &roster);
    let html = renderer.render(&title, &messages, &colors, config.identity.as_deref())?;

    Ok(Transcript {
        output_name: output_name(&conversation.group, &roster),
        title,
        html,
        messages,
        stats,
    })
}

/// Runs the whole pipeline.
///
/// # Example
///
/// ```rust
/// use chatscroll::config::ConvertConfig;
/// use chatscroll::core::processor::convert;
/// use chatscroll::parsing::Conversation;
///
/// # fn main() -> chatscroll::Result<()> {
/// let conversation = Conversation::from_json(
///     r#"{"messages": [{"creator": {"name": "Alice", "email": "a@x.com", "user_type": "Human"},
///                      "created_date": "Monday, January 1, 2024 at 1:02:03 PM UTC",
///                      "text": "Hi"}]}"#,
///     r#"{"members": [{"name": "Alice", "email": "a@x.com", "user_type": "Human"}]}"#,
/// )?;
///
/// let transcript = convert(&conversation, &ConvertConfig::default())?;
/// assert_eq!(transcript.output_name, "Alice_DeletedUser");
/// assert_eq!(transcript.html_file_name(), "Alice_DeletedUser_Chat.html");
/// # Ok(())
/// # }
/// ```
pub fn convert(conversation: &Conversation, config: &ConvertConfig) -> Result<Transcript> {
    convert_with(&HtmlRenderer::new()?, conversation, config)
}
