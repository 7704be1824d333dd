//! Human-readable, filesystem-safe names for converted conversations.
//!
//! The same base name is used for the HTML file (`<name>_Chat.html`) and the
//! renamed folder. Only the folder gets a numeric suffix on collision.

use std::path::Path;

use crate::parsing::GroupInfo;

/// Name used when nothing usable can be derived.
pub const FALLBACK_NAME: &str = "Conversation";

/// Suffix appended to the base name for the HTML file.
pub const HTML_SUFFIX: &str = "_Chat.html";

const RESERVED: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Replaces whitespace, control characters and `<>:"/\|?*` with `_`.
///
/// Leading and trailing dots are removed. A result without any character
/// other than `_` falls back to [`FALLBACK_NAME`].
///
/// ```
/// use chatscroll::core::naming::sanitize;
///
/// assert_eq!(sanitize("Q3 plans: draft/final?"), "Q3_plans__draft_final_");
/// ```
pub fn sanitize(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| {
            if c.is_whitespace() || c.is_control() || RESERVED.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect();

    let trimmed = replaced.trim_matches('.');
    if trimmed.chars().all(|c| c == '_') {
        FALLBACK_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Chooses the base output name of a conversation.
///
/// The declared group name wins; otherwise the roster names are joined with
/// `_`.
///
/// # Example
///
/// ```
/// use chatscroll::core::naming::output_name;
/// use chatscroll::parsing::GroupInfo;
///
/// let group = GroupInfo::default();
/// let roster = vec!["Alice Smith".to_string(), "Bob".to_string()];
/// assert_eq!(output_name(&group, &roster), "Alice_Smith_Bob");
/// ```
pub fn output_name(group: &GroupInfo, roster: &[String]) -> String {
    match group.declared_name() {
        Some(name) => sanitize(name),
        None => sanitize(&roster.join("_")),
    }
}

/// File name of the transcript for a base output name.
pub fn html_file_name(output_name: &str) -> String {
    format!("{output_name}{HTML_SUFFIX}")
}

/// Returns `candidate`, or `candidate_1`, `candidate_2`, … whichever does not
/// yet exist in `parent`.
///
/// The check is not atomic: a sibling created between this call and the
/// rename still collides.
pub fn unique_name(parent: &Path, candidate: &str) -> String {
    unique_name_by(candidate, |name| parent.join(name).exists())
}

/// Like [`unique_name`], with `taken` deciding which names are in use.
pub fn unique_name_by<F>(candidate: &str, mut taken: F) -> String
where
    F: FnMut(&str) -> bool,
{
    if !taken(candidate) {
        return candidate.to_string();
    }

    (1..)
        .map(|n| format!("{candidate}_{n}"))
        .find(|name| !taken(name))
        .unwrap_or_else(|| candidate.to_string())
}

/// Returns `true` if `name` is `base` or one of the `base_<n>` names
/// [`unique_name`] hands out.
///
/// ```
/// use chatscroll::core::naming::is_variant_of;
///
/// assert!(is_variant_of("Same_2", "Same"));
/// assert!(!is_variant_of("Same_draft", "Same"));
/// ```
pub fn is_variant_of(name: &str, base: &str) -> bool {
    if name == base {
        return true;
    }
    name.strip_prefix(base)
        .and_then(|rest| rest.strip_prefix('_'))
        .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
}
