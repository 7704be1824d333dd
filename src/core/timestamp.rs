//! Conversion of the export's human-readable dates.
//!
//! Exports write creation times like `Monday, January 1, 2024 at 1:02:03 PM UTC`.
//! Transcripts show them as `01/January/2024 13:02:03`. The timezone token is
//! dropped, not converted.

use chrono::NaiveDateTime;

use crate::error::{ChatscrollError, Result};

const INPUT_FORMAT: &str = "%B %d, %Y at %I:%M:%S %p";
const OUTPUT_FORMAT: &str = "%d/%B/%Y %H:%M:%S";

/// Parses an export timestamp, ignoring the trailing timezone token.
///
/// The leading weekday name must be present but is not checked against the
/// date.
///
/// # Errors
///
/// Returns [`ChatscrollError::MalformedTimestamp`] if the string does not
/// match the export format.
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime> {
    let malformed = || ChatscrollError::malformed_timestamp(input);

    // Newer exports put U+202F before AM/PM.
    let normalized: String = input
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect();

    let (weekday, rest) = normalized.trim().split_once(", ").ok_or_else(malformed)?;
    if weekday.is_empty() || !weekday.chars().all(char::is_alphabetic) {
        return Err(malformed());
    }

    let (datetime, _timezone) = rest.rsplit_once(' ').ok_or_else(malformed)?;

    NaiveDateTime::parse_from_str(datetime.trim_end(), INPUT_FORMAT).map_err(|_| malformed())
}

/// Reformats an export timestamp as `DD/Month/YYYY HH:MM:SS`.
///
/// # Example
///
/// ```
/// use chatscroll::core::timestamp::format_timestamp;
///
/// let ts = format_timestamp("Monday, January 1, 2024 at 01:02:03 PM UTC")?;
/// assert_eq!(ts, "01/January/2024 13:02:03");
/// # Ok::<(), chatscroll::ChatscrollError>(())
/// ```
pub fn format_timestamp(input: &str) -> Result<String> {
    Ok(parse_timestamp(input)?.format(OUTPUT_FORMAT).to_string())
}
