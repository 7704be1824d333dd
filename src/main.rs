//! # chatscroll CLI
//!
//! Command-line interface for the chatscroll library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatscroll::ChatscrollError;
use chatscroll::batch::{FolderOutcome, convert_all_with};
use chatscroll::cli::Args;

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            process::exit(1);
        }
    }
}

fn init_logging(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Returns `Ok(false)` when at least one conversation failed.
fn run() -> Result<bool, ChatscrollError> {
    let start = Instant::now();
    let args = <Args as ClapParser>::parse();
    init_logging(&args);
    let config = args.to_config();

    if !args.quiet {
        println!("📜 chatscroll v{}", env!("CARGO_PKG_VERSION"));
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("📂 Root:    {}", args.root.display());
        if let Some(ref identity) = config.identity {
            println!("👤 You:     {}", identity);
        }
        println!("🎨 Palette: {}", config.palette);
        if config.skip_bots {
            println!("🤖 Bots:    skipped");
        }
        if config.dry_run {
            println!("🧪 Mode:    Dry run (nothing is written)");
        }
        println!();
    }

    let quiet = args.quiet;
    let summary = convert_all_with(&args.root, &config, |outcome| match outcome {
        FolderOutcome::Converted { folder, stats, .. } if !quiet => {
            println!("✅ Processed: {} ({} entries)", folder.display(), stats.entries);
        }
        FolderOutcome::Failed { source, error } => {
            eprintln!("❌ Failed:    {}: {}", source.display(), error);
        }
        _ => {}
    })?;

    if !args.quiet {
        let totals = summary.totals();
        println!();
        println!("📊 Summary:");
        println!("   Converted: {} conversations", summary.converted());
        if summary.skipped() > 0 {
            println!("   Skipped:   {} folders", summary.skipped());
        }
        if summary.failed() > 0 {
            println!("   Failed:    {} conversations", summary.failed());
        }
        println!("   Messages:  {} read, {} rendered entries", totals.total, totals.entries);
        if totals.dropped() > 0 {
            println!(
                "   Dropped:   {} deleted, {} bot, {} empty, {} malformed",
                totals.deleted, totals.bots, totals.empty, totals.malformed
            );
        }
        if summary.aborted {
            println!("   Stopped early (--fail-fast)");
        }
        println!();
        println!("⚡ Done in {:.2}s", start.elapsed().as_secs_f64());
    }

    Ok(summary.is_success())
}
