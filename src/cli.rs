//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`PaletteArg`] - Palette choice, converted into [`Palette`]

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::config::{ConvertConfig, MalformedPolicy, Palette};

/// Convert exported chat folders into static HTML transcripts and rename
/// each folder after its conversation.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatscroll")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatscroll
    chatscroll ~/Takeout/Google\\ Chat/Groups
    chatscroll export --email me@example.com --skip-bots
    chatscroll export --dry-run -v")]
pub struct Args {
    /// Root directory to scan for conversation folders
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Your email address; your messages are right-aligned
    #[arg(short, long, value_name = "EMAIL")]
    pub email: Option<String>,

    /// Drop messages sent by bots
    #[arg(long)]
    pub skip_bots: bool,

    /// Sender color palette
    #[arg(short, long, value_enum, default_value = "extended")]
    pub palette: PaletteArg,

    /// Skip malformed messages instead of failing their conversation
    #[arg(long)]
    pub skip_malformed: bool,

    /// Stop at the first conversation that fails
    #[arg(long)]
    pub fail_fast: bool,

    /// Render everything but do not write files or rename folders
    #[arg(long)]
    pub dry_run: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Builds the library configuration from the parsed arguments.
    pub fn to_config(&self) -> ConvertConfig {
        let mut config = ConvertConfig::new()
            .with_skip_bots(self.skip_bots)
            .with_palette(self.palette.into())
            .with_fail_fast(self.fail_fast)
            .with_dry_run(self.dry_run);

        if let Some(email) = self.email.as_deref().map(str::trim).filter(|e| !e.is_empty()) {
            config = config.with_identity(email);
        }
        if self.skip_malformed {
            config = config.with_malformed(MalformedPolicy::Skip);
        }
        config
    }

    /// Default log directive when `RUST_LOG` is not set.
    pub fn log_directive(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "chatscroll=error",
            (false, 0) => "chatscroll=warn",
            (false, 1) => "chatscroll=debug",
            (false, _) => "chatscroll=trace",
        }
    }
}

/// Palette choice on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum PaletteArg {
    /// Seven pastel colors
    Classic,

    /// Thirty-one colors (default)
    #[default]
    Extended,
}

impl From<PaletteArg> for Palette {
    fn from(arg: PaletteArg) -> Palette {
        match arg {
            PaletteArg::Classic => Palette::Classic,
            PaletteArg::Extended => Palette::Extended,
        }
    }
}
