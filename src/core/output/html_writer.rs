//! HTML transcript writer.

use std::fs;
use std::path::Path;

use minijinja::{Environment, context};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::Serialize;

use crate::core::colors::ColorAssignment;
use crate::core::models::{Content, NormalizedMessage};
use crate::error::Result;

// The `.html` suffix turns on minijinja's HTML auto-escaping.
const TEMPLATE_NAME: &str = "transcript.html";
const TEMPLATE: &str = include_str!("transcript.html");

/// Background for senders missing from the color assignment.
const FALLBACK_COLOR: &str = "rgba(211, 211, 211, 0.8)";

// Characters that break a relative URL to an attachment.
const ATTACHMENT_PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Attachment as seen by the template.
#[derive(Serialize)]
struct AttachmentView<'a> {
    name: &'a str,
    href: String,
}

impl<'a> AttachmentView<'a> {
    fn new(name: &'a str) -> Self {
        Self {
            name,
            href: utf8_percent_encode(name, ATTACHMENT_PATH).to_string(),
        }
    }
}

/// Transcript entry as seen by the template.
#[derive(Serialize)]
struct MessageView<'a> {
    sender: &'a str,
    timestamp: &'a str,
    color: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    align: Option<&'static str>,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    attachments: Vec<AttachmentView<'a>>,
}

impl<'a> MessageView<'a> {
    fn from_message(
        msg: &'a NormalizedMessage,
        colors: &ColorAssignment,
        identity: Option<&str>,
    ) -> Self {
        let align = identity.map(|me| {
            if msg.sender.email.eq_ignore_ascii_case(me) {
                "right"
            } else {
                "left"
            }
        });

        let (kind, text, attachments) = match &msg.content {
            Content::Text(text) => ("text", Some(text.as_str()), Vec::new()),
            Content::Images(names) => ("images", None, attachment_views(names)),
            Content::Files(names) => ("files", None, attachment_views(names)),
        };

        Self {
            sender: &msg.sender.name,
            timestamp: &msg.timestamp,
            color: colors.get(&msg.sender.name).unwrap_or(FALLBACK_COLOR),
            align,
            kind,
            text,
            attachments,
        }
    }
}

fn attachment_views(names: &[String]) -> Vec<AttachmentView<'_>> {
    names.iter().map(|name| AttachmentView::new(name)).collect()
}

/// Renders transcripts from the embedded template.
///
/// Every interpolated value is HTML-escaped; attachment URLs are
/// percent-encoded first.
///
/// # Example
///
/// ```rust
/// use chatscroll::core::colors::assign_colors;
/// use chatscroll::core::models::{Content, NormalizedMessage, Sender};
/// use chatscroll::core::output::HtmlRenderer;
/// use chatscroll::config::Palette;
///
/// # fn main() -> chatscroll::Result<()> {
/// let messages = vec![NormalizedMessage::new(
///     "01/January/2024 13:02:03",
///     Sender::new("Alice", "alice@example.com"),
///     Content::Text("Hello!".into()),
/// )];
/// let colors = assign_colors(["Alice"], Palette::Classic.colors());
///
/// let html = HtmlRenderer::new()?.render("Alice_Bob", &messages, &colors, None)?;
/// assert!(html.contains("Hello!"));
/// # Ok(())
/// # }
/// ```
pub struct HtmlRenderer {
    env: Environment<'static>,
}

impl HtmlRenderer {
    /// Creates a renderer with the transcript template loaded.
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template(TEMPLATE_NAME, TEMPLATE)?;
        Ok(Self { env })
    }

    /// Renders a complete HTML document.
    ///
    /// With `identity`, messages whose sender email matches it (ASCII
    /// case-insensitive) are right-aligned and all others left-aligned.
    /// Without it every message sits in one column.
    pub fn render(
        &self,
        title: &str,
        messages: &[NormalizedMessage],
        colors: &ColorAssignment,
        identity: Option<&str>,
    ) -> Result<String> {
        let views: Vec<MessageView<'_>> = messages
            .iter()
            .map(|msg| MessageView::from_message(msg, colors, identity))
            .collect();

        let template = self.env.get_template(TEMPLATE_NAME)?;
        Ok(template.render(context! { title, messages => views })?)
    }
}

/// Renders messages to an HTML string.
///
/// Same output as [`write_html`], returned instead of written.
pub fn to_html(
    title: &str,
    messages: &[NormalizedMessage],
    colors: &ColorAssignment,
    identity: Option<&str>,
) -> Result<String> {
    HtmlRenderer::new()?.render(title, messages, colors, identity)
}

/// Renders messages and writes the document to `output_path`.
pub fn write_html(
    title: &str,
    messages: &[NormalizedMessage],
    colors: &ColorAssignment,
    identity: Option<&str>,
    output_path: &Path,
) -> Result<()> {
    let html = to_html(title, messages, colors, identity)?;
    fs::write(output_path, html)?;
    Ok(())
}
