//! FFmpeg child-process invocation

use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::error::{EmbedError, EmbedResult};
use crate::planner::MultiplexPlan;

/// Name of the external remuxing binary, resolved via PATH
const FFMPEG_BINARY: &str = "ffmpeg";

/// Serialize a plan into the ffmpeg argument vector
///
/// Argument order matters to ffmpeg: inputs first, then mapping
/// directives, codec flags per stream class, per-track metadata keyed by
/// output subtitle index, and finally the output path.
pub fn command_args(plan: &MultiplexPlan) -> Vec<String> {
    let mut args = vec!["-i".to_string(), plan.video_input.display().to_string()];

    for subtitle in &plan.subtitle_inputs {
        args.push("-i".to_string());
        args.push(subtitle.display().to_string());
    }

    for map in &plan.stream_maps {
        args.push("-map".to_string());
        args.push(map.selector());
    }

    args.push("-c:v".to_string());
    args.push(plan.video_codec.as_ffmpeg_arg().to_string());
    args.push("-c:a".to_string());
    args.push(plan.audio_codec.as_ffmpeg_arg().to_string());
    args.push("-c:s".to_string());
    args.push(plan.subtitle_codec.as_ffmpeg_arg().to_string());

    for (index, metadata) in plan.track_metadata.iter().enumerate() {
        args.push(format!("-metadata:s:s:{}", index));
        args.push(format!("language={}", metadata.language));
        if !metadata.title.is_empty() {
            args.push(format!("-metadata:s:s:{}", index));
            args.push(format!("title={}", metadata.title));
        }
    }

    args.push(plan.output.display().to_string());
    args
}

/// Executes multiplex plans with the system ffmpeg
pub struct FfmpegExecutor;

impl FfmpegExecutor {
    /// Create a new executor
    pub fn new() -> Self {
        Self
    }

    /// Check that ffmpeg is installed and runnable
    ///
    /// Performed once by the host application before a job; plan
    /// construction itself never depends on the tool being present.
    pub fn preflight(&self) -> EmbedResult<()> {
        let status = Command::new(FFMPEG_BINARY)
            .arg("-version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) if status.success() => Ok(()),
            _ => Err(EmbedError::ToolMissing),
        }
    }

    /// Run the plan to completion, capturing diagnostics
    ///
    /// Blocks until ffmpeg exits. A non-zero status surfaces as
    /// [`EmbedError::ExecutionFailure`] carrying the captured stderr.
    pub fn execute(&self, plan: &MultiplexPlan) -> EmbedResult<()> {
        let args = command_args(plan);
        debug!("ffmpeg {}", args.join(" "));

        let output = Command::new(FFMPEG_BINARY).args(&args).output()?;

        if output.status.success() {
            info!("FFmpeg completed successfully");
            Ok(())
        } else {
            Err(EmbedError::ExecutionFailure {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            })
        }
    }
}

impl Default for FfmpegExecutor {
    fn default() -> Self {
        Self::new()
    }
}
