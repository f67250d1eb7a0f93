//! Hand-landmark detector collaborator interface.
//!
//! Pose estimation runs in an external service; the pipeline only consumes
//! its 21-keypoint result. The timestamp lets video-mode detectors order
//! frames monotonically.

use std::collections::VecDeque;

use crate::camera::Frame;
use crate::error::{Result, SignscribeError};
use crate::landmark::HandPose;

/// Trait for hand-landmark extraction.
pub trait HandDetector: Send {
    /// Detects at most one hand in the frame.
    ///
    /// `Ok(None)` means no hand this frame. Errors are per-frame and the
    /// pipeline degrades them to "no hand".
    fn detect(&mut self, frame: &Frame, timestamp_us: i64) -> Result<Option<HandPose>>;
}

/// Detector for testing that replays a scripted sequence of results.
///
/// Once the script is exhausted every further call reports no hand.
pub struct ScriptedDetector {
    script: VecDeque<Option<HandPose>>,
    fail_always: bool,
    timestamps: Vec<i64>,
}

impl ScriptedDetector {
    /// Replays the given detections in order.
    pub fn new(script: Vec<Option<HandPose>>) -> Self {
        Self {
            script: script.into(),
            fail_always: false,
            timestamps: Vec::new(),
        }
    }

    /// Configures the detector to fail on every call.
    pub fn with_failure() -> Self {
        Self {
            script: VecDeque::new(),
            fail_always: true,
            timestamps: Vec::new(),
        }
    }

    /// Timestamps observed so far, in call order.
    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }
}

impl HandDetector for ScriptedDetector {
    fn detect(&mut self, _frame: &Frame, timestamp_us: i64) -> Result<Option<HandPose>> {
        self.timestamps.push(timestamp_us);
        if self.fail_always {
            return Err(SignscribeError::Detection {
                message: "scripted detection failure".to_string(),
            });
        }
        Ok(self.script.pop_front().flatten())
    }
}
