//! # Typst Studio
//!
//! A local Typst document studio built in Rust.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the studio
//! cargo run
//!
//! # Run with debug logging
//! cargo run -- -vv
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use studio_core::Config;
use studio_ui::{run, Flags};

/// Typst Studio - a local Typst document studio
#[derive(Parser, Debug)]
#[command(name = "typst-studio")]
#[command(author, version, about, long_about = None)]
struct Args {
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

    tracing::info!("Starting Typst Studio v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load();

    run(Flags { config }).map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
