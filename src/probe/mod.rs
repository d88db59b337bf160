//! Input validation module
//!
//! Leaf component with no dependencies on the planner: checks that input
//! files exist and carry a supported extension for their role before any
//! plan is built.

pub mod validator;

pub use validator::{
    validate, FileRole, ValidatedPath, VideoDescriptor, SUPPORTED_SUBTITLE_FORMATS,
    SUPPORTED_VIDEO_FORMATS,
};
