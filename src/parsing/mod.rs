//! Record parsing for chat archive folders.
//!
//! This module contains:
//! - [`records`] - serde types for `messages.json` and `group_info.json`
//! - [`source`] - locating and loading a conversation folder

pub mod records;
pub mod source;

// Re-export commonly used items
pub use records::{AttachedFile, GroupInfo, Member, MemberKind, MessageLog, RawMessage};
pub use source::{Conversation, ConversationSource, GROUP_INFO_FILE, MESSAGES_FILE};
