//! Configuration types for the conversion pipeline.
//!
//! This module provides clean configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! # Example
//!
//! ```rust
//! use chatscroll::config::{ConvertConfig, MalformedPolicy, Palette};
//!
//! let config = ConvertConfig::new()
//!     .with_identity("me@example.com")
//!     .with_skip_bots(true)
//!     .with_palette(Palette::Classic)
//!     .with_malformed(MalformedPolicy::Skip);
//!
//! assert!(config.skip_bots);
//! ```

use serde::{Deserialize, Serialize};

/// Color palette used to tell senders apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    /// Seven pastel colors.
    Classic,

    /// Thirty-one distinct colors (default).
    #[default]
    Extended,
}

impl Palette {
    /// Returns the ordered RGBA color strings of this palette.
    pub fn colors(&self) -> &'static [&'static str] {
        match self {
            Palette::Classic => crate::core::colors::CLASSIC_PALETTE,
            Palette::Extended => crate::core::colors::EXTENDED_PALETTE,
        }
    }
}

impl std::fmt::Display for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Palette::Classic => write!(f, "classic"),
            Palette::Extended => write!(f, "extended"),
        }
    }
}

impl std::str::FromStr for Palette {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "classic" => Ok(Palette::Classic),
            "extended" => Ok(Palette::Extended),
            _ => Err(format!(
                "Unknown palette: '{}'. Expected one of: classic, extended",
                s
            )),
        }
    }
}

/// What to do with a message that lacks a required field or carries an
/// unparsable timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Fail the whole conversation (default).
    #[default]
    Abort,

    /// Drop the offending message and keep going.
    Skip,
}

/// Configuration for converting conversations to HTML.
///
/// # Example
///
/// ```rust
/// use chatscroll::config::ConvertConfig;
///
/// let config = ConvertConfig::default();
/// assert!(config.identity.is_none());
/// assert!(!config.dry_run);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Contact identifier of the person running the conversion. When set,
    /// their messages are right-aligned and everybody else's left-aligned.
    pub identity: Option<String>,

    /// Drop messages whose creator is a bot (default: false)
    pub skip_bots: bool,

    /// Sender color palette (default: extended)
    pub palette: Palette,

    /// Handling of malformed messages (default: abort)
    pub malformed: MalformedPolicy,

    /// Stop the batch at the first failed conversation (default: false)
    pub fail_fast: bool,

    /// Render without writing files or renaming folders (default: false)
    pub dry_run: bool,
}

impl ConvertConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the identity used for left/right alignment.
    #[must_use]
    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    /// Sets whether bot messages are dropped.
    #[must_use]
    pub fn with_skip_bots(mut self, skip: bool) -> Self {
        self.skip_bots = skip;
        self
    }

    /// Sets the sender color palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Sets the malformed message policy.
    #[must_use]
    pub fn with_malformed(mut self, policy: MalformedPolicy) -> Self {
        self.malformed = policy;
        self
    }

    /// Sets whether the batch stops at the first failure.
    #[must_use]
    pub fn with_fail_fast(mut self, enabled: bool) -> Self {
        self.fail_fast = enabled;
        self
    }

    /// Enables or disables dry-run mode.
    #[must_use]
    pub fn with_dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }
}
