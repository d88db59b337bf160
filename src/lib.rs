//! SoftSub CLI Library
//!
//! A command-line tool for embedding subtitles into video files as soft
//! (independent, selectable) tracks, delegating the actual remux to the
//! system FFmpeg.

pub mod cli;
pub mod domain;
pub mod engine;
pub mod error;
pub mod planner;
pub mod probe;

// Re-export commonly used types
pub use domain::model::SubtitleTrackSpec;
pub use error::{EmbedError, EmbedResult};
pub use planner::{MultiplexPlan, PlanBuilder};
pub use probe::{validate, FileRole, ValidatedPath, VideoDescriptor};
