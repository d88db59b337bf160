//! CLI module for SoftSub
//!
//! This module handles command-line argument parsing and command execution.

pub mod args;
pub mod commands;

pub use args::Cli;
