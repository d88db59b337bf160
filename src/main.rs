//! SoftSub CLI
//!
//! Soft-embed subtitle files into video containers as independent,
//! selectable tracks using the system FFmpeg.
//!
//! # Usage
//!
//! ```bash
//! softsub video.mp4 english.srt:eng:English spanish.srt:spa:Spanish
//! softsub video.mp4 sub.srt:eng -o output.mp4
//! softsub video.mp4 sub.srt --no-copy-video
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;

use softsub_cli::cli::{commands, Cli};

/// Main entry point for the SoftSub CLI application
fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let cli = Cli::parse();

    commands::embed(cli)?;

    info!("SoftSub CLI completed successfully");
    Ok(())
}
