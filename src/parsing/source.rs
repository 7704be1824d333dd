//! Loading a conversation folder from disk.

use std::fs;
use std::path::{Path, PathBuf};

use super::records::{GroupInfo, MessageLog, RawMessage};
use crate::error::{ChatscrollError, Result};

/// File name of the message log inside a conversation folder.
pub const MESSAGES_FILE: &str = "messages.json";

/// File name of the group metadata inside a conversation folder.
pub const GROUP_INFO_FILE: &str = "group_info.json";

/// A directory that holds both conversation documents.
///
/// # Example
///
/// ```rust,no_run
/// use chatscroll::parsing::ConversationSource;
///
/// # fn main() -> chatscroll::Result<()> {
/// let source = ConversationSource::open("Takeout/Google Chat/Groups/DM abc")?;
/// let conversation = source.load()?;
/// println!("{} messages", conversation.messages.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationSource {
    dir: PathBuf,
}

impl ConversationSource {
    /// Opens a conversation folder.
    ///
    /// # Errors
    ///
    /// Returns [`ChatscrollError::MissingInput`] if either document is absent.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        for required in [MESSAGES_FILE, GROUP_INFO_FILE] {
            if !dir.join(required).is_file() {
                return Err(ChatscrollError::missing_input(dir, required));
            }
        }
        Ok(Self { dir })
    }

    /// Returns `true` if `dir` holds both documents.
    pub fn is_conversation_dir(dir: &Path) -> bool {
        dir.join(MESSAGES_FILE).is_file() && dir.join(GROUP_INFO_FILE).is_file()
    }

    /// Folder this source reads from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Reads and parses both documents.
    pub fn load(&self) -> Result<Conversation> {
        let messages_path = self.dir.join(MESSAGES_FILE);
        let group_path = self.dir.join(GROUP_INFO_FILE);

        let log: MessageLog = read_document(&messages_path, MESSAGES_FILE)?;
        let group: GroupInfo = read_document(&group_path, GROUP_INFO_FILE)?;

        Ok(Conversation {
            messages: log.messages,
            group,
        })
    }
}

fn read_document<T: serde::de::DeserializeOwned>(path: &Path, document: &'static str) -> Result<T> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| ChatscrollError::parse(document, e, Some(path.to_path_buf())))
}

/// In-memory contents of one conversation folder.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    /// Message log in export order
    pub messages: Vec<RawMessage>,
    /// Group metadata and roster
    pub group: GroupInfo,
}

impl Conversation {
    /// Parses a conversation from the two documents' contents.
    ///
    /// Useful when the documents do not live on disk.
    pub fn from_json(messages: &str, group_info: &str) -> Result<Self> {
        let log: MessageLog = serde_json::from_str(messages)
            .map_err(|e| ChatscrollError::parse(MESSAGES_FILE, e, None))?;
        let group: GroupInfo = serde_json::from_str(group_info)
            .map_err(|e| ChatscrollError::parse(GROUP_INFO_FILE, e, None))?;
        Ok(Self {
            messages: log.messages,
            group,
        })
    }
}
