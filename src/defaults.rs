//! Default configuration constants for signscribe.
//!
//! This module provides shared constants used across different configuration types
//! to ensure consistency and eliminate duplication.

use std::time::Duration;

/// Number of keypoints in a detected hand pose.
///
/// Fixed by the anatomical hand-landmark indexing: the wrist plus four
/// joints per finger. Detectors that report anything else are rejected.
pub const KEYPOINTS_PER_HAND: usize = 21;

/// Length of the classifier feature vector.
///
/// Each of the 21 keypoints contributes a translation-normalized (x, y) pair.
pub const FEATURE_LEN: usize = 2 * KEYPOINTS_PER_HAND;

/// Default hold duration before a raw label is confirmed.
///
/// Classifiers are frame-noisy; requiring 3 seconds of sustained agreement
/// avoids spurious single-frame misfires while keeping latency bounded.
pub const HOLD_SECS: f32 = 3.0;

/// Default consecutive-frame count before a raw label is confirmed.
///
/// Used when the debouncer runs in frame-count mode instead of wall-clock
/// mode. 15 frames at the default tick interval is roughly half a second.
pub const FRAME_COUNT_THRESHOLD: u32 = 15;

/// Default interval between pipeline ticks.
///
/// The host event loop schedules ticks at this cadence; skipped ticks are
/// acceptable and never corrupt pipeline state.
pub const TICK_INTERVAL: Duration = Duration::from_millis(30);

/// Maximum number of hands the detector is asked for. Fixed at one — the
/// pipeline only ever consumes the first detected hand.
pub const MAX_HANDS: u32 = 1;

/// Maximum number of word suggestions shown for the current buffer.
pub const SUGGESTION_LIMIT: usize = 5;

/// Default path of the word-per-line dictionary source file.
pub const WORDS_CSV_PATH: &str = "./data/words.csv";

/// Search paths for the pretrained classifier artifact, tried in order.
/// The first existing path wins; if none exists the pipeline runs in
/// detection-only mode.
pub const MODEL_SEARCH_PATHS: &[&str] = &["./models/model.bin", "./model.bin", "model.bin"];

/// Default camera device index.
pub const CAMERA_INDEX: u32 = 0;

/// Default capture resolution.
pub const FRAME_WIDTH: u32 = 640;
pub const FRAME_HEIGHT: u32 = 480;
