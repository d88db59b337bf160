//! Multiplex planning module
//!
//! Turns a validated video plus an ordered subtitle track list into a
//! fully-resolved, immutable remux plan. The executor reads the plan and
//! needs no additional lookups.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub mod builder;

pub use builder::PlanBuilder;

/// Stream class selected by a mapping directive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StreamKind {
    Video,
    Audio,
    Subtitle,
}

/// One stream-mapping directive: which streams of which input to keep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamMap {
    /// Input slot index (0 = video, subtitle inputs start at 1)
    pub input: usize,
    /// Stream class to select from that input
    pub kind: StreamKind,
    /// Whether absence of matching streams is tolerated
    pub optional: bool,
}

impl StreamMap {
    /// Render as an ffmpeg `-map` selector, e.g. `0:v`, `0:a?`, `2:s`
    pub fn selector(&self) -> String {
        let class = match self.kind {
            StreamKind::Video => "v",
            StreamKind::Audio => "a",
            StreamKind::Subtitle => "s",
        };
        if self.optional {
            format!("{}:{}?", self.input, class)
        } else {
            format!("{}:{}", self.input, class)
        }
    }
}

/// Video codec choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VideoCodec {
    /// Pass the encoded stream through unchanged
    Copy,
    /// Re-encode with libx264 (slower, more compatible)
    Reencode,
}

impl VideoCodec {
    pub fn as_ffmpeg_arg(&self) -> &'static str {
        match self {
            VideoCodec::Copy => "copy",
            VideoCodec::Reencode => "libx264",
        }
    }
}

/// Audio codec choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioCodec {
    Copy,
    /// Re-encode with AAC
    Reencode,
}

impl AudioCodec {
    pub fn as_ffmpeg_arg(&self) -> &'static str {
        match self {
            AudioCodec::Copy => "copy",
            AudioCodec::Reencode => "aac",
        }
    }
}

/// Subtitle codec choice, driven by the output container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubtitleCodec {
    Copy,
    /// Text conversion for the MP4 container family
    MovText,
}

impl SubtitleCodec {
    /// Select the codec for an output container extension
    ///
    /// MP4-family containers cannot carry most native subtitle codecs, so
    /// subtitle streams are converted to `mov_text` there and copied
    /// everywhere else.
    pub fn for_container(extension: &str) -> Self {
        match extension {
            "mp4" | "m4v" => SubtitleCodec::MovText,
            _ => SubtitleCodec::Copy,
        }
    }

    pub fn as_ffmpeg_arg(&self) -> &'static str {
        match self {
            SubtitleCodec::Copy => "copy",
            SubtitleCodec::MovText => "mov_text",
        }
    }
}

/// Metadata attached to one output subtitle stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackMetadata {
    /// ISO 639-2 language tag, always emitted
    pub language: String,
    /// Display title, omitted from the output when empty
    pub title: String,
}

/// Fully-resolved remux specification handed to the executor
///
/// Never mutated after construction. Subtitle mapping directive `i` always
/// corresponds to `track_metadata[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiplexPlan {
    /// Primary video input (input slot 0)
    pub video_input: PathBuf,
    /// Subtitle inputs in output track order (slots 1..)
    pub subtitle_inputs: Vec<PathBuf>,
    /// Stream-mapping directives in output order
    pub stream_maps: Vec<StreamMap>,
    pub video_codec: VideoCodec,
    pub audio_codec: AudioCodec,
    pub subtitle_codec: SubtitleCodec,
    /// Per-track metadata indexed by output subtitle stream
    pub track_metadata: Vec<TrackMetadata>,
    /// Resolved output path
    pub output: PathBuf,
}

impl MultiplexPlan {
    /// Number of subtitle tracks carried by this plan
    pub fn subtitle_track_count(&self) -> usize {
        self.track_metadata.len()
    }
}
