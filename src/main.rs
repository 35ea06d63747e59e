//! # Formforge - A Visual Form Builder
//!
//! Compose forms by dragging field types onto a canvas and editing their
//! properties.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start with an empty form
//! cargo run
//!
//! # Start with a title and verbose logging
//! cargo run -- --title "Customer Feedback" -vv
//! ```

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use formforge_core::Config;
use formforge_ui::{run, Flags};

/// Formforge - a visual form builder
#[derive(Parser, Debug)]
#[command(name = "formforge")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Title of the new form
    #[arg(short, long)]
    title: Option<String>,

    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    tracing::info!("Starting Formforge v{}", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => Config::load_from(path)
            .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", path.display(), e))?,
        None => Config::load(),
    };

    let flags = Flags {
        config,
        title: args.title,
    };

    run(flags).map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
