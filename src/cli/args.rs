//! Command-line argument definitions

use clap::Parser;

/// SoftSub - Embed subtitle files as soft subtitle tracks
///
/// Subtitles are stored as independent, selectable streams, never burned
/// into the picture. Each subtitle argument uses the form
/// `file[:language[:title]]`, e.g. `english.srt:eng:English`.
#[derive(Parser, Debug)]
#[command(name = "softsub")]
#[command(about = "Embed subtitle files as soft (selectable) tracks in a video")]
#[command(version)]
pub struct Cli {
    /// Input video file (mp4, mkv, avi, mov, m4v)
    pub video: String,

    /// Subtitle specs in the form file[:language[:title]]
    #[arg(required = true)]
    pub subtitles: Vec<String>,

    /// Output video file (default: {input}_subtitled.{ext})
    #[arg(short, long)]
    pub output: Option<String>,

    /// Re-encode video instead of copying (slower)
    #[arg(long)]
    pub no_copy_video: bool,

    /// Re-encode audio instead of copying
    #[arg(long)]
    pub no_copy_audio: bool,

    /// Print the resolved plan as JSON without running ffmpeg
    #[arg(long)]
    pub dry_run: bool,
}
