//! Remux execution engine
//!
//! Thin wrapper around the external `ffmpeg` binary. The planner never
//! spawns processes; everything process-shaped lives here.

pub mod ffmpeg;

pub use ffmpeg::{command_args, FfmpegExecutor};
