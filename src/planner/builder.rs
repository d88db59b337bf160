//! Plan construction from validated inputs

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::model::SubtitleTrackSpec;
use crate::error::{EmbedError, EmbedResult};
use crate::planner::{
    AudioCodec, MultiplexPlan, StreamKind, StreamMap, SubtitleCodec, TrackMetadata, VideoCodec,
};
use crate::probe::{validate, FileRole, VideoDescriptor};

/// Builds a [`MultiplexPlan`] from user inputs
pub struct PlanBuilder;

impl PlanBuilder {
    /// Create a new plan builder
    pub fn new() -> Self {
        Self
    }

    /// Build a fully-resolved plan
    ///
    /// Validation is fail-fast: the first invalid input aborts construction
    /// and no partial plan is ever returned. Given identical inputs the
    /// result is structurally identical, so callers may rebuild freely.
    pub fn build(
        &self,
        video_path: &str,
        tracks: &[SubtitleTrackSpec],
        output_path: Option<&str>,
        copy_video: bool,
        copy_audio: bool,
    ) -> EmbedResult<MultiplexPlan> {
        if tracks.is_empty() {
            return Err(EmbedError::InvalidSpec {
                spec: String::new(),
                message: "at least one subtitle track is required".to_string(),
            });
        }

        let video = VideoDescriptor::from_path(video_path)?;

        let mut subtitle_inputs = Vec::with_capacity(tracks.len());
        for track in tracks {
            let validated = validate(&track.file, FileRole::Subtitle)?;
            subtitle_inputs.push(validated.path);
        }

        let output = match output_path {
            Some(path) => PathBuf::from(path),
            None => default_output_path(&video),
        };

        // Fixed directive order: all video streams, all audio streams
        // (optional, a silent video is not a failure), then one subtitle
        // map per input slot starting at 1.
        let mut stream_maps = vec![
            StreamMap {
                input: 0,
                kind: StreamKind::Video,
                optional: false,
            },
            StreamMap {
                input: 0,
                kind: StreamKind::Audio,
                optional: true,
            },
        ];
        for slot in 1..=tracks.len() {
            stream_maps.push(StreamMap {
                input: slot,
                kind: StreamKind::Subtitle,
                optional: false,
            });
        }

        let subtitle_codec = SubtitleCodec::for_container(&container_extension(&output));

        let track_metadata = tracks
            .iter()
            .map(|track| TrackMetadata {
                language: track.language.clone(),
                title: track.title.clone(),
            })
            .collect();

        debug!(
            "Planned {} subtitle track(s) into {}",
            tracks.len(),
            output.display()
        );

        Ok(MultiplexPlan {
            video_input: video.path,
            subtitle_inputs,
            stream_maps,
            video_codec: if copy_video {
                VideoCodec::Copy
            } else {
                VideoCodec::Reencode
            },
            audio_codec: if copy_audio {
                AudioCodec::Copy
            } else {
                AudioCodec::Reencode
            },
            subtitle_codec,
            track_metadata,
            output,
        })
    }
}

impl Default for PlanBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive `{stem}_subtitled.{ext}` beside the input video
///
/// The suffix guarantees the default output never overwrites the input or
/// an unrelated file sharing its exact name.
fn default_output_path(video: &VideoDescriptor) -> PathBuf {
    let file_name = format!("{}_subtitled.{}", video.stem, video.extension);
    match video.path.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Lower-cased extension of the resolved output path
fn container_extension(output: &Path) -> String {
    output
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}
