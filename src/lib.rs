//! signscribe - Sign-language typing for the desktop
//!
//! Single-hand gestures to editable text, with dictionary-backed word
//! suggestions.

// Enforce error handling discipline
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod camera;
pub mod classify;
#[cfg(feature = "cli")]
pub mod cli;
pub mod composer;
pub mod config;
pub mod debounce;
pub mod defaults;
pub mod detect;
#[cfg(feature = "cli")]
pub mod diagnostics;
pub mod dictionary;
pub mod error;
pub mod landmark;
pub mod pipeline;
pub mod transcript;

// Core traits (frame → pose → label)
pub use camera::{Frame, FrameSource};
pub use classify::Classifier;
pub use detect::HandDetector;

// Pipeline
pub use pipeline::{CommandSender, Pipeline, PipelineConfig, TickOutput, UserCommand};

// Text assembly
pub use composer::Composer;
pub use transcript::{SPACE_TOKEN, Transcript};

// Error handling
pub use error::{Result, SignscribeError};

// Config
pub use config::Config;

/// Build version string with optional git commit hash.
///
/// Returns `"0.1.0+abc1234"` when git hash is available, `"0.1.0"` otherwise.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("{}+{}", version, hash),
        _ => version.to_string(),
    }
}
