//! Core transformation logic for chatscroll.
//!
//! This module contains:
//! - [`models`] - Normalized messages, senders and statistics
//! - [`identity`] - Display name resolution
//! - [`colors`] - Deterministic sender colors
//! - [`classify`] - Text / image / file classification
//! - [`timestamp`] - Export date parsing and formatting
//! - [`naming`] - Output names and collision handling
//! - [`output`] - HTML rendering
//! - [`processor`] - The full pipeline
//!
//! # Quick Start
//!
//! ```rust
//! use chatscroll::core::{
//!     ConvertConfig, Transcript, convert, format_timestamp, roster_names,
//! };
//! ```

pub mod classify;
pub mod colors;
pub mod identity;
pub mod models;
pub mod naming;
pub mod output;
pub mod processor;
pub mod timestamp;

// Re-export main types for convenience
pub use classify::{classify, is_image};
pub use colors::{ColorAssignment, assign_colors, distinct_senders};
pub use identity::{DELETED_USER, UNKNOWN_EMAIL, resolve_sender, roster_names};
pub use models::{Content, ConversationStats, NormalizedMessage, Sender};
pub use naming::{is_variant_of, output_name, sanitize, unique_name, unique_name_by};
pub use output::{HtmlRenderer, to_html, write_html};
pub use processor::{Transcript, convert, convert_with, normalize};
pub use timestamp::format_timestamp;

pub use crate::config::ConvertConfig;
