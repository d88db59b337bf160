//! End-to-end CLI tests for validation and planning error paths
//!
//! These exercise the binary without requiring ffmpeg to be installed:
//! validation failures and --dry-run both return before any process is
//! spawned.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn softsub() -> Command {
    Command::cargo_bin("softsub").unwrap()
}

fn touch(dir: &TempDir, name: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, b"data").unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_missing_video_exits_with_error() {
    softsub()
        .args(["/nonexistent/movie.mp4", "sub.srt"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("video file not found"));
}

#[test]
fn test_unsupported_video_format() {
    let dir = TempDir::new().unwrap();
    let video = touch(&dir, "movie.wmv");
    let sub = touch(&dir, "sub.srt");

    softsub()
        .args([&video, &sub])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unsupported video format"));
}

#[test]
fn test_missing_subtitle_file() {
    let dir = TempDir::new().unwrap();
    let video = touch(&dir, "movie.mkv");

    softsub()
        .args([video.as_str(), "/nonexistent/sub.srt:eng"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("subtitle file not found"));
}

#[test]
fn test_malformed_subtitle_spec() {
    let dir = TempDir::new().unwrap();
    let video = touch(&dir, "movie.mkv");

    softsub()
        .args([video.as_str(), ":eng:Title"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid subtitle spec"));
}

#[test]
fn test_requires_at_least_one_subtitle() {
    let dir = TempDir::new().unwrap();
    let video = touch(&dir, "movie.mkv");

    softsub().arg(&video).assert().failure();
}

#[test]
fn test_dry_run_prints_plan_json() {
    let dir = TempDir::new().unwrap();
    let video = touch(&dir, "movie.mkv");
    let sub = touch(&dir, "english.srt");

    let spec = format!("{}:eng:English", sub);

    let assert = softsub()
        .args([video.as_str(), spec.as_str(), "--dry-run"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let plan: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(plan["track_metadata"][0]["language"], "eng");
    assert_eq!(plan["track_metadata"][0]["title"], "English");
    assert_eq!(plan["subtitle_codec"], "Copy");
    assert!(plan["output"]
        .as_str()
        .unwrap()
        .ends_with("movie_subtitled.mkv"));
}

#[test]
fn test_dry_run_mp4_selects_mov_text() {
    let dir = TempDir::new().unwrap();
    let video = touch(&dir, "movie.mp4");
    let sub = touch(&dir, "english.srt");

    let assert = softsub()
        .args([video.as_str(), sub.as_str(), "--dry-run"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let plan: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(plan["subtitle_codec"], "MovText");
    assert_eq!(plan["track_metadata"][0]["language"], "und");
}
