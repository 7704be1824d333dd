//! # Chatscroll
//!
//! A Rust library and CLI for turning exported chat archives into static,
//! self-contained HTML transcripts.
//!
//! ## Overview
//!
//! An export holds one folder per conversation, each with a `messages.json`
//! log and a `group_info.json` roster. Chatscroll:
//!
//! - finds every such folder under a root directory,
//! - resolves senders (group participants, deleted accounts),
//! - splits messages into text, image and file entries,
//! - gives every sender a stable color,
//! - renders one HTML page per conversation with inline images and download
//!   links,
//! - renames the folder after the conversation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatscroll::prelude::*;
//! use std::path::Path;
//!
//! fn main() -> Result<()> {
//!     let config = ConvertConfig::new().with_identity("me@example.com");
//!     let summary = convert_all(Path::new("Takeout/Google Chat/Groups"), &config)?;
//!     println!("{} conversations converted", summary.converted());
//!     Ok(())
//! }
//! ```
//!
//! ## Single Conversation
//!
//! The pipeline itself never touches the filesystem:
//!
//! ```rust,no_run
//! use chatscroll::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let conversation = ConversationSource::open("export/DM abc")?.load()?;
//! let transcript = convert(&conversation, &ConvertConfig::default())?;
//! println!("{} -> {}", transcript.title, transcript.html_file_name());
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`] - JSON records and conversation folder loading
//! - [`core`] - Normalization, colors, naming and HTML rendering
//!   - [`core::processor`] - [`convert`](core::convert), [`Transcript`](core::Transcript)
//!   - [`core::output`] - [`HtmlRenderer`](core::HtmlRenderer)
//! - [`batch`] - Folder discovery, writing and renaming
//! - [`config`] - [`ConvertConfig`](config::ConvertConfig)
//! - [`error`] - Unified error types ([`ChatscrollError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

pub mod batch;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{ChatscrollError, Result};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatscroll::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{ChatscrollError, Result};

    // Configuration
    pub use crate::config::{ConvertConfig, MalformedPolicy, Palette};

    // Loading
    pub use crate::parsing::{Conversation, ConversationSource, GroupInfo, Member, RawMessage};

    // Pipeline
    pub use crate::core::{
        Content, ConversationStats, HtmlRenderer, NormalizedMessage, Sender, Transcript, convert,
    };

    // Batch
    pub use crate::batch::{FolderOutcome, RunSummary, convert_all, convert_all_with};
}
