//! Unified error types for chatscroll.
//!
//! This module provides a single [`ChatscrollError`] enum that covers all error
//! cases in the library.
//!
//! # Severity
//!
//! Errors differ in how far they reach:
//!
//! | Error | Effect |
//! |-------|--------|
//! | [`MissingInput`](ChatscrollError::MissingInput) | Folder is skipped silently |
//! | [`MalformedRecord`](ChatscrollError::MalformedRecord), [`MalformedTimestamp`](ChatscrollError::MalformedTimestamp) | Conversation fails (or the message is skipped under [`MalformedPolicy::Skip`](crate::config::MalformedPolicy::Skip)) |
//! | [`Io`](ChatscrollError::Io), [`Rename`](ChatscrollError::Rename), [`Template`](ChatscrollError::Template) | Conversation fails |

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatscroll operations.
///
/// # Example
///
/// ```rust
/// use chatscroll::error::Result;
///
/// fn my_function() -> Result<Vec<String>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatscrollError>;

/// The error type for all chatscroll operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatscrollError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - A document cannot be read
    /// - Permission denied while writing the HTML file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A conversation document is not valid JSON or does not have the
    /// expected shape.
    #[error("Failed to parse {document}{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// Which document was being parsed (e.g., "messages.json")
        document: &'static str,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// A candidate folder lacks one of the required documents.
    ///
    /// Not fatal: the batch driver skips such folders.
    #[error("Missing {missing} in {}", folder.display())]
    MissingInput {
        /// Folder that was inspected
        folder: PathBuf,
        /// Name of the first missing document
        missing: &'static str,
    },

    /// A message lacks a field every surviving message needs.
    #[error("Malformed message #{index}: missing '{field}'")]
    MalformedRecord {
        /// Zero-based position of the message in the log
        index: usize,
        /// Name of the missing field
        field: &'static str,
    },

    /// A `created_date` value does not match the export's date-time format.
    #[error("Malformed timestamp '{input}'. Expected format: {expected}")]
    MalformedTimestamp {
        /// The offending timestamp string
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// The HTML template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Renaming a conversation folder failed.
    #[error("Failed to rename {} to {}: {source}", from.display(), to.display())]
    Rename {
        /// Original folder path
        from: PathBuf,
        /// Requested destination
        to: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatscrollError {
    /// Creates a parse error for one of the conversation documents.
    pub fn parse(document: &'static str, source: serde_json::Error, path: Option<PathBuf>) -> Self {
        ChatscrollError::Parse {
            document,
            source,
            path,
        }
    }

    /// Creates a missing input error.
    pub fn missing_input(folder: impl Into<PathBuf>, missing: &'static str) -> Self {
        ChatscrollError::MissingInput {
            folder: folder.into(),
            missing,
        }
    }

    /// Creates a malformed record error.
    pub fn malformed_record(index: usize, field: &'static str) -> Self {
        ChatscrollError::MalformedRecord { index, field }
    }

    /// Creates a malformed timestamp error.
    pub fn malformed_timestamp(input: impl Into<String>) -> Self {
        ChatscrollError::MalformedTimestamp {
            input: input.into(),
            expected: "<Weekday>, <Month> <Day>, <Year> at <h>:<mm>:<ss> <AM|PM> <TZ>",
        }
    }

    /// Creates a rename error.
    pub fn rename(from: impl Into<PathBuf>, to: impl Into<PathBuf>, source: io::Error) -> Self {
        ChatscrollError::Rename {
            from: from.into(),
            to: to.into(),
            source,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatscrollError::Io(_))
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, ChatscrollError::Parse { .. })
    }

    /// Returns `true` if a required document was absent.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, ChatscrollError::MissingInput { .. })
    }

    /// Returns `true` if a single message was malformed (missing field or
    /// unparsable timestamp).
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            ChatscrollError::MalformedRecord { .. } | ChatscrollError::MalformedTimestamp { .. }
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
