// Domain models - Core types and data structures

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EmbedError, EmbedResult};

/// One subtitle track requested by the user
///
/// Parsed from the colon-delimited CLI form `file[:language[:title]]`.
/// The position of the spec in the input list determines the output track
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtitleTrackSpec {
    /// Source subtitle file path
    pub file: String,
    /// ISO 639-2 language code, `"und"` when unspecified
    pub language: String,
    /// Display title, the file stem when unspecified
    pub title: String,
}

impl SubtitleTrackSpec {
    /// Parse a raw `file[:language[:title]]` argument
    ///
    /// Segments past the second are rejoined with `:` so titles may
    /// contain colons. This is a pure transform; file existence is checked
    /// later by the validator.
    pub fn parse(raw: &str) -> EmbedResult<Self> {
        let parts: Vec<&str> = raw.split(':').collect();
        let file = parts[0];

        if file.is_empty() {
            return Err(EmbedError::InvalidSpec {
                spec: raw.to_string(),
                message: "subtitle file path is empty".to_string(),
            });
        }

        let language = if parts.len() > 1 {
            parts[1].to_string()
        } else {
            "und".to_string()
        };

        let title = if parts.len() > 2 {
            parts[2..].join(":")
        } else {
            Path::new(file)
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default()
        };

        Ok(Self {
            file: file.to_string(),
            language,
            title,
        })
    }
}
