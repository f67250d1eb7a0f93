//! Command-line interface for signscribe
//!
//! Provides argument parsing using clap derive macros.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sign-language typing for the desktop
#[derive(Parser, Debug)]
#[command(name = "signscribe", version, about = "Sign-language typing for the desktop")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress per-tick output (quiet mode)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Word dictionary file (word per line, first CSV column)
    #[arg(long, value_name = "PATH")]
    pub dictionary: Option<PathBuf>,

    /// Classifier artifact path (searched before the configured paths)
    #[arg(long, value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Seconds a sign must hold before it is confirmed
    #[arg(long, value_name = "SECONDS")]
    pub hold_secs: Option<f32>,

    /// Confirm after N consecutive frames instead of a hold time
    #[arg(long, value_name = "N")]
    pub frames: Option<u32>,

    /// Replay labels from a file instead of a camera (one label per line,
    /// blank line = no hand)
    #[arg(long, value_name = "FILE")]
    pub replay: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check classifier artifact and dictionary availability
    Check,
}
