//! Media file validation utilities

use std::fmt;
use std::path::PathBuf;

use crate::error::{EmbedError, EmbedResult};

/// Video container extensions accepted as primary input
pub const SUPPORTED_VIDEO_FORMATS: &[&str] = &["mp4", "mkv", "avi", "mov", "m4v"];

/// Subtitle file extensions accepted as track sources
pub const SUPPORTED_SUBTITLE_FORMATS: &[&str] = &["srt", "ass", "ssa", "vtt"];

/// Role a file plays in an embedding job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    Video,
    Subtitle,
}

impl FileRole {
    /// Supported extension set for this role
    pub fn supported_formats(&self) -> &'static [&'static str] {
        match self {
            FileRole::Video => SUPPORTED_VIDEO_FORMATS,
            FileRole::Subtitle => SUPPORTED_SUBTITLE_FORMATS,
        }
    }
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileRole::Video => write!(f, "video"),
            FileRole::Subtitle => write!(f, "subtitle"),
        }
    }
}

/// A path whose existence and extension have been confirmed for a role
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedPath {
    pub path: PathBuf,
    /// Lower-cased extension without the leading dot
    pub extension: String,
}

/// Validate that a file exists and carries a supported extension for its role
///
/// Extension matching ignores case. The only side effect is a filesystem
/// existence check.
pub fn validate(path: &str, role: FileRole) -> EmbedResult<ValidatedPath> {
    let path_buf = PathBuf::from(path);

    if path.is_empty() || !path_buf.exists() {
        return Err(EmbedError::NotFound {
            role,
            path: path.to_string(),
        });
    }

    let extension = path_buf
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if !role.supported_formats().contains(&extension.as_str()) {
        return Err(EmbedError::UnsupportedFormat {
            role,
            extension,
            supported: role.supported_formats().join(", "),
        });
    }

    Ok(ValidatedPath {
        path: path_buf,
        extension,
    })
}

/// Primary video input, validated and immutable
#[derive(Debug, Clone, PartialEq)]
pub struct VideoDescriptor {
    pub path: PathBuf,
    /// Lower-cased container extension
    pub extension: String,
    /// File name without extension, used to derive the default output name
    pub stem: String,
}

impl VideoDescriptor {
    /// Validate a video path and derive its descriptor
    pub fn from_path(path: &str) -> EmbedResult<Self> {
        let validated = validate(path, FileRole::Video)?;
        let stem = validated
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            path: validated.path,
            extension: validated.extension,
            stem,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) -> String {
        let path = dir.path().join(name);
        fs::write(&path, b"data").unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_validate_supported_video_formats() {
        let dir = TempDir::new().unwrap();
        for ext in SUPPORTED_VIDEO_FORMATS {
            let path = touch(&dir, &format!("movie.{}", ext));
            let validated = validate(&path, FileRole::Video).unwrap();
            assert_eq!(validated.extension, *ext);
        }
    }

    #[test]
    fn test_validate_supported_subtitle_formats() {
        let dir = TempDir::new().unwrap();
        for ext in SUPPORTED_SUBTITLE_FORMATS {
            let path = touch(&dir, &format!("track.{}", ext));
            assert!(validate(&path, FileRole::Subtitle).is_ok());
        }
    }

    #[test]
    fn test_validate_extension_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let path = touch(&dir, "Movie.MKV");
        let validated = validate(&path, FileRole::Video).unwrap();
        assert_eq!(validated.extension, "mkv");
    }

    #[test]
    fn test_validate_missing_file() {
        let result = validate("/nonexistent/movie.mp4", FileRole::Video);
        assert!(matches!(result, Err(EmbedError::NotFound { .. })));
    }

    #[test]
    fn test_validate_empty_path() {
        let result = validate("", FileRole::Video);
        assert!(matches!(result, Err(EmbedError::NotFound { .. })));
    }

    #[test]
    fn test_validate_unsupported_format() {
        let dir = TempDir::new().unwrap();
        let path = touch(&dir, "movie.wmv");
        let result = validate(&path, FileRole::Video);
        assert!(matches!(result, Err(EmbedError::UnsupportedFormat { .. })));
    }

    #[test]
    fn test_validate_role_sets_are_disjoint() {
        let dir = TempDir::new().unwrap();
        let srt = touch(&dir, "track.srt");
        let mp4 = touch(&dir, "movie.mp4");
        assert!(validate(&srt, FileRole::Video).is_err());
        assert!(validate(&mp4, FileRole::Subtitle).is_err());
    }

    #[test]
    fn test_video_descriptor_fields() {
        let dir = TempDir::new().unwrap();
        let path = touch(&dir, "episode.mp4");
        let video = VideoDescriptor::from_path(&path).unwrap();
        assert_eq!(video.extension, "mp4");
        assert_eq!(video.stem, "episode");
    }
}
