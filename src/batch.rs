//! Batch conversion of every conversation folder under a root directory.
//!
//! Work happens in two passes:
//!
//! 1. [`discover`] walks the tree once and lists conversation folders,
//!    descendants before ancestors.
//! 2. Each folder is converted ([`crate::core::convert_with`]) and then
//!    [`apply`]-ed: the HTML is written inside the folder first, the folder
//!    is renamed second.
//!
//! Because the listing is complete before anything is renamed, and a folder
//! is only renamed after all of its descendants were handled, no pending path
//! is ever invalidated by a rename.
//!
//! # Example
//!
//! ```rust,no_run
//! use chatscroll::batch::convert_all;
//! use chatscroll::config::ConvertConfig;
//! use std::path::Path;
//!
//! # fn main() -> chatscroll::Result<()> {
//! let summary = convert_all(Path::new("Takeout/Google Chat/Groups"), &ConvertConfig::default())?;
//! println!("{} converted, {} failed", summary.converted(), summary.failed());
//! # Ok(())
//! # }
//! ```

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

use crate::config::ConvertConfig;
use crate::core::models::ConversationStats;
use crate::core::naming::{is_variant_of, unique_name, unique_name_by};
use crate::core::output::HtmlRenderer;
use crate::core::processor::{Transcript, convert_with};
use crate::error::{ChatscrollError, Result};
use crate::parsing::ConversationSource;

/// Lists conversation folders under `root` (including `root` itself).
///
/// Descendants come before their ancestors. Unreadable directories are
/// logged and skipped.
pub fn discover(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .contents_first(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| entry.into_path())
        .filter(|path| ConversationSource::is_conversation_dir(path))
        .collect()
}

/// Where a transcript ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedOutput {
    /// Folder after the rename
    pub folder: PathBuf,
    /// Path of the written HTML file, inside `folder`
    pub html_path: PathBuf,
}

/// Folder name a transcript would be moved to, or `None` when the folder
/// stays where it is.
///
/// A folder that already carries the output name, or a numbered variant of
/// it from an earlier collision, keeps it. Converting twice therefore moves
/// nothing.
pub fn planned_folder(dir: &Path, transcript: &Transcript) -> Option<PathBuf> {
    let parent = rename_parent(dir, transcript)?;
    Some(parent.join(unique_name(parent, &transcript.output_name)))
}

/// Parent of `dir`, or `None` when `dir` must not be renamed.
fn rename_parent<'a>(dir: &'a Path, transcript: &Transcript) -> Option<&'a Path> {
    let current = dir.file_name()?.to_str();
    let parent = dir.parent()?;
    if current.is_some_and(|name| is_variant_of(name, &transcript.output_name)) {
        return None;
    }
    Some(parent)
}

/// Renames a dry run would have made so far.
///
/// The tree is never touched in a dry run, so later folders have to see the
/// names claimed and freed by earlier ones.
#[derive(Debug, Default)]
struct DryRunPlan {
    claimed: HashSet<PathBuf>,
    vacated: HashSet<PathBuf>,
}

impl DryRunPlan {
    fn plan(&mut self, dir: &Path, transcript: &Transcript) -> PathBuf {
        let Some(parent) = rename_parent(dir, transcript) else {
            self.claimed.insert(dir.to_path_buf());
            return dir.to_path_buf();
        };

        let name = unique_name_by(&transcript.output_name, |name| {
            let path = parent.join(name);
            self.claimed.contains(&path) || (path.exists() && !self.vacated.contains(&path))
        });
        let target = parent.join(name);

        self.vacated.insert(dir.to_path_buf());
        self.claimed.insert(target.clone());
        target
    }
}

/// Writes the transcript into `dir`, then renames `dir` to a unique variant of
/// the output name.
///
/// If the rename fails the HTML file is already in place under the original
/// folder name, so the conversion can simply be retried.
pub fn apply(dir: &Path, transcript: &Transcript) -> Result<AppliedOutput> {
    let file_name = transcript.html_file_name();
    fs::write(dir.join(&file_name), &transcript.html)?;

    let folder = match planned_folder(dir, transcript) {
        Some(target) => {
            fs::rename(dir, &target).map_err(|e| ChatscrollError::rename(dir, &target, e))?;
            target
        }
        None => {
            debug!(folder = %dir.display(), "folder keeps its name");
            dir.to_path_buf()
        }
    };

    Ok(AppliedOutput {
        html_path: folder.join(&file_name),
        folder,
    })
}

/// Result of handling one discovered folder.
#[derive(Debug)]
pub enum FolderOutcome {
    /// Transcript rendered (and written, unless dry-run).
    Converted {
        /// Folder as discovered
        source: PathBuf,
        /// Folder after the rename (the planned one in dry-run mode)
        folder: PathBuf,
        /// HTML file path
        html_path: PathBuf,
        /// Per-conversation counters
        stats: ConversationStats,
    },
    /// Folder lost one of its documents after discovery.
    Skipped {
        /// Folder as discovered
        source: PathBuf,
        /// The missing-document error
        reason: ChatscrollError,
    },
    /// Conversion or filesystem update failed.
    Failed {
        /// Folder as discovered, left under its original name
        source: PathBuf,
        /// What went wrong
        error: ChatscrollError,
    },
}

impl FolderOutcome {
    /// Folder as discovered.
    pub fn source(&self) -> &Path {
        match self {
            FolderOutcome::Converted { source, .. }
            | FolderOutcome::Skipped { source, .. }
            | FolderOutcome::Failed { source, .. } => source,
        }
    }
}

/// Outcomes of a whole run, in processing order.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<FolderOutcome>,
    /// `true` when the run stopped early because of `fail_fast`
    pub aborted: bool,
}

impl RunSummary {
    pub fn converted(&self) -> usize {
        self.count(|o| matches!(o, FolderOutcome::Converted { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, FolderOutcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FolderOutcome::Failed { .. }))
    }

    /// Returns `true` if no conversation failed.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Sum of per-conversation counters.
    pub fn totals(&self) -> ConversationStats {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                FolderOutcome::Converted { stats, .. } => Some(stats),
                _ => None,
            })
            .fold(ConversationStats::default(), |acc, s| ConversationStats {
                total: acc.total + s.total,
                deleted: acc.deleted + s.deleted,
                bots: acc.bots + s.bots,
                empty: acc.empty + s.empty,
                malformed: acc.malformed + s.malformed,
                entries: acc.entries + s.entries,
            })
    }

    fn count(&self, pred: impl Fn(&FolderOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}

/// Converts one folder and applies the result.
fn process_folder(
    dir: &Path,
    renderer: &HtmlRenderer,
    config: &ConvertConfig,
    dry_run: &mut DryRunPlan,
) -> Result<FolderOutcome> {
    let conversation = ConversationSource::open(dir)?.load()?;
    let transcript = convert_with(renderer, &conversation, config)?;

    let (folder, html_path) = if config.dry_run {
        let folder = dry_run.plan(dir, &transcript);
        let html_path = folder.join(transcript.html_file_name());
        (folder, html_path)
    } else {
        let applied = apply(dir, &transcript)?;
        (applied.folder, applied.html_path)
    };

    info!(
        source = %dir.display(),
        folder = %folder.display(),
        entries = transcript.stats.entries,
        "converted conversation"
    );

    Ok(FolderOutcome::Converted {
        source: dir.to_path_buf(),
        folder,
        html_path,
        stats: transcript.stats,
    })
}

/// Converts every conversation under `root`, calling `on_outcome` after each
/// folder.
///
/// # Errors
///
/// Fails only if `root` is not a directory; per-folder errors are recorded in
/// the [`RunSummary`].
pub fn convert_all_with<F>(root: &Path, config: &ConvertConfig, mut on_outcome: F) -> Result<RunSummary>
where
    F: FnMut(&FolderOutcome),
{
    if !root.is_dir() {
        return Err(ChatscrollError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} is not a directory", root.display()),
        )));
    }

    let renderer = HtmlRenderer::new()?;
    let folders = discover(root);
    debug!(count = folders.len(), root = %root.display(), "discovered conversation folders");

    let mut summary = RunSummary::default();
    let mut dry_run = DryRunPlan::default();
    for dir in folders {
        let outcome = match process_folder(&dir, &renderer, config, &mut dry_run) {
            Ok(outcome) => outcome,
            Err(e) if e.is_missing_input() => {
                debug!(folder = %dir.display(), "skipping folder without conversation documents");
                FolderOutcome::Skipped {
                    source: dir,
                    reason: e,
                }
            }
            Err(e) => {
                error!(folder = %dir.display(), error = %e, "conversation failed");
                FolderOutcome::Failed {
                    source: dir,
                    error: e,
                }
            }
        };

        on_outcome(&outcome);
        let failed = matches!(outcome, FolderOutcome::Failed { .. });
        summary.outcomes.push(outcome);

        if failed && config.fail_fast {
            summary.aborted = true;
            break;
        }
    }

    Ok(summary)
}

/// Converts every conversation under `root`.
pub fn convert_all(root: &Path, config: &ConvertConfig) -> Result<RunSummary> {
    convert_all_with(root, config, |_| {})
}
