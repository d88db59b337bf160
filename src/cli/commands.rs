//! Command implementations

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::Cli;
use crate::domain::model::SubtitleTrackSpec;
use crate::engine::FfmpegExecutor;
use crate::planner::{MultiplexPlan, PlanBuilder};

/// Execute the embed operation end to end
pub fn embed(cli: Cli) -> Result<()> {
    info!("Starting embed operation");
    info!("Input: {}", cli.video);
    info!("Subtitle tracks: {}", cli.subtitles.len());

    // Parse subtitle specs
    let tracks = cli
        .subtitles
        .iter()
        .map(|raw| SubtitleTrackSpec::parse(raw))
        .collect::<Result<Vec<_>, _>>()?;

    // Build the multiplex plan
    let plan = PlanBuilder::new().build(
        &cli.video,
        &tracks,
        cli.output.as_deref(),
        !cli.no_copy_video,
        !cli.no_copy_audio,
    )?;

    info!("Output: {}", plan.output.display());

    if cli.dry_run {
        let json = serde_json::to_string_pretty(&plan)
            .context("Failed to serialize plan to JSON")?;
        println!("{}", json);
        return Ok(());
    }

    // Pre-flight tool check, then hand the plan to the executor
    let executor = FfmpegExecutor::new();
    executor.preflight()?;

    display_plan_summary(&plan);

    executor.execute(&plan)?;

    println!("Subtitles embedded successfully.");
    println!("Output saved to: {}", plan.output.display());

    info!("Embed operation completed successfully");
    Ok(())
}

/// Display the run summary in human-readable format
fn display_plan_summary(plan: &MultiplexPlan) {
    println!("Embedding subtitles into: {}", display_name(&plan.video_input));
    println!("Subtitle tracks: {}", plan.subtitle_track_count());
    for (i, metadata) in plan.track_metadata.iter().enumerate() {
        println!("  {}. {} [{}]", i + 1, metadata.title, metadata.language);
    }
    println!("Output: {}", display_name(&plan.output));
    println!();
}

/// File name component for display, falling back to the full path
fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
