//! Splitting export messages into typed transcript entries.

use std::path::Path;

use crate::core::models::{Content, NormalizedMessage, Sender};
use crate::error::{ChatscrollError, Result};
use crate::parsing::RawMessage;

/// Extensions rendered as inline previews (compared case-insensitively).
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// Returns `true` if the file name has an image extension.
///
/// ```
/// use chatscroll::core::classify::is_image;
///
/// assert!(is_image("IMG_0001.JPG"));
/// assert!(!is_image("notes.pdf"));
/// assert!(!is_image("png"));
/// ```
pub fn is_image(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|image| ext.eq_ignore_ascii_case(image))
        })
}

/// Classifies one surviving message.
///
/// - A non-empty text body yields a single [`Content::Text`] entry; any
///   attachments on the same message are not shown.
/// - Otherwise attachments yield [`Content::Images`] then [`Content::Files`],
///   each only when non-empty.
/// - A message with neither yields nothing.
///
/// `index` is the message's position in the log, used for error reporting.
///
/// # Errors
///
/// Returns [`ChatscrollError::MalformedRecord`] if an attachment has no
/// `export_name`.
pub fn classify(
    msg: &RawMessage,
    index: usize,
    sender: &Sender,
    timestamp: &str,
) -> Result<Vec<NormalizedMessage>> {
    let entry = |content| NormalizedMessage::new(timestamp, sender.clone(), content);

    if let Some(text) = msg.text_body() {
        return Ok(vec![entry(Content::Text(text.to_string()))]);
    }

    let Some(files) = msg.attached_files.as_deref() else {
        return Ok(Vec::new());
    };

    let mut images = Vec::new();
    let mut others = Vec::new();
    for file in files {
        let name = file
            .export_name
            .as_deref()
            .ok_or_else(|| ChatscrollError::malformed_record(index, "attached_files.export_name"))?;
        if is_image(name) {
            images.push(name.to_string());
        } else {
            others.push(name.to_string());
        }
    }

    let mut entries = Vec::with_capacity(2);
    if !images.is_empty() {
        entries.push(entry(Content::Images(images)));
    }
    if !others.is_empty() {
        entries.push(entry(Content::Files(others)));
    }
    Ok(entries)
}
