//! Frame pipeline orchestrator.
//!
//! One `tick()` runs the whole chain — frame acquisition, hand detection,
//! landmark normalization, classification, debouncing, buffer update — to
//! completion before the next begins. The host event loop schedules ticks at
//! a fixed cadence; the core makes no scheduling or threading decisions.
//! User commands arrive through a channel and are drained at the tick
//! boundary, so commands and ticks never interleave mid-mutation.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::camera::{Frame, FrameSource};
use crate::classify::Classifier;
use crate::composer::Composer;
use crate::debounce::{Clock, DebounceMode, Debouncer, SystemClock};
use crate::defaults;
use crate::detect::HandDetector;
use crate::dictionary::Dictionary;
use crate::landmark::HandPose;
use crate::transcript::Transcript;

/// Discrete user-triggered commands, serialized into the tick boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCommand {
    AcceptSuggestion(usize),
    CommitSpace,
    Backspace,
    Clear,
}

/// Cloneable handle for submitting user commands from UI threads.
///
/// Commands queue until the next tick drains them.
#[derive(Debug, Clone)]
pub struct CommandSender {
    tx: Sender<UserCommand>,
}

impl CommandSender {
    pub fn accept_suggestion(&self, index: usize) {
        self.tx.send(UserCommand::AcceptSuggestion(index)).ok();
    }

    pub fn commit_space(&self) {
        self.tx.send(UserCommand::CommitSpace).ok();
    }

    pub fn backspace(&self) {
        self.tx.send(UserCommand::Backspace).ok();
    }

    pub fn clear(&self) {
        self.tx.send(UserCommand::Clear).ok();
    }
}

/// Render-ready result of one tick.
///
/// Frame and pose are ephemeral collaborator data passed through for display;
/// they are never retained by the pipeline.
#[derive(Debug, Clone, Default)]
pub struct TickOutput {
    /// Unfiltered classifier output for this frame (empty = no hand / no
    /// confident symbol).
    pub raw_label: String,
    /// Debounced confirmed label (empty while nothing is confirmed).
    pub confirmed: String,
    /// Hold progress in [0, 1], for feedback display.
    pub hold_progress: f32,
    /// Detected hand pose, for skeleton rendering.
    pub pose: Option<HandPose>,
    /// The frame that was processed, for display.
    pub frame: Option<Frame>,
}

impl TickOutput {
    fn empty() -> Self {
        Self::default()
    }
}

/// Pipeline configuration. All values are startup-time constants.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Debounce hold threshold and mode.
    pub debounce: DebounceMode,
    /// Maximum suggestions shown for the word buffer.
    pub suggestion_limit: usize,
    /// Rewrites applied to raw classifier labels before debouncing
    /// (compound labels like "dd" map to their display symbol "đ").
    pub labels_map: HashMap<String, String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            debounce: DebounceMode::default(),
            suggestion_limit: defaults::SUGGESTION_LIMIT,
            labels_map: default_labels_map(),
        }
    }
}

/// Default label rewrites: identity except for the đ compound.
pub fn default_labels_map() -> HashMap<String, String> {
    HashMap::from([("dd".to_string(), "đ".to_string())])
}

/// Gesture-to-text pipeline: FrameSource → HandDetector → Classifier →
/// Debouncer → Composer → Transcript.
///
/// Owns all mutable pipeline state; single-threaded and tick-driven. A host
/// that reads state from another thread must wrap the whole pipeline in a
/// mutex — the core assumes no concurrent access.
pub struct Pipeline<C: Clock + Clone = SystemClock> {
    source: Box<dyn FrameSource>,
    detector: Box<dyn HandDetector>,
    classifier: Option<Box<dyn Classifier>>,
    debouncer: Debouncer<C>,
    composer: Composer,
    labels_map: HashMap<String, String>,
    commands_tx: Sender<UserCommand>,
    commands_rx: Receiver<UserCommand>,
    clock: C,
    started: Instant,
}

impl Pipeline<SystemClock> {
    /// Creates a pipeline with the system clock.
    ///
    /// `classifier` is `None` in detection-only mode (artifact missing).
    pub fn new(
        config: PipelineConfig,
        source: Box<dyn FrameSource>,
        detector: Box<dyn HandDetector>,
        classifier: Option<Box<dyn Classifier>>,
        dictionary: Arc<Dictionary>,
    ) -> Self {
        Self::with_clock(config, source, detector, classifier, dictionary, SystemClock)
    }
}

impl<C: Clock + Clone> Pipeline<C> {
    /// Creates a pipeline with a custom clock (for deterministic testing).
    pub fn with_clock(
        config: PipelineConfig,
        source: Box<dyn FrameSource>,
        detector: Box<dyn HandDetector>,
        classifier: Option<Box<dyn Classifier>>,
        dictionary: Arc<Dictionary>,
        clock: C,
    ) -> Self {
        let (commands_tx, commands_rx) = unbounded();
        let started = clock.now();
        Self {
            source,
            detector,
            classifier,
            debouncer: Debouncer::with_clock(config.debounce, clock.clone()),
            composer: Composer::new(dictionary).with_suggestion_limit(config.suggestion_limit),
            labels_map: config.labels_map,
            commands_tx,
            commands_rx,
            clock,
            started,
        }
    }

    /// Runs one tick to completion and returns the render-ready result.
    ///
    /// Collaborator failures degrade to "no hand" for this tick; buffer and
    /// transcript are left exactly as before, except for the documented
    /// empty-detection debouncer reset.
    pub fn tick(&mut self) -> TickOutput {
        self.drain_commands();

        let Some(frame) = self.source.next_frame() else {
            return TickOutput::empty();
        };

        let timestamp_us = self
            .clock
            .now()
            .duration_since(self.started)
            .as_micros() as i64;

        let pose = match self.detector.detect(&frame, timestamp_us) {
            Ok(pose) => pose,
            Err(e) => {
                eprintln!("signscribe: {e}");
                None
            }
        };

        let raw_label = match &pose {
            Some(pose) => self.classify(pose),
            None => String::new(),
        };

        let confirmed = self.debouncer.update(&raw_label).to_string();
        if !confirmed.is_empty() {
            self.composer.on_confirmed(&confirmed);
        }

        TickOutput {
            raw_label,
            confirmed,
            hold_progress: self.debouncer.progress(),
            pose,
            frame: Some(frame),
        }
    }

    fn classify(&self, pose: &HandPose) -> String {
        let Some(classifier) = &self.classifier else {
            return String::new();
        };
        match classifier.classify(&pose.features()) {
            Ok(label) => self
                .labels_map
                .get(&label)
                .cloned()
                .unwrap_or(label),
            Err(e) => {
                eprintln!("signscribe: {e}");
                String::new()
            }
        }
    }

    fn drain_commands(&mut self) {
        while let Ok(command) = self.commands_rx.try_recv() {
            self.handle_command(command);
        }
    }

    /// Applies one user command. Also invoked directly by hosts that call
    /// between ticks from the same thread.
    pub fn handle_command(&mut self, command: UserCommand) {
        match command {
            UserCommand::AcceptSuggestion(index) => self.composer.accept_suggestion(index),
            UserCommand::CommitSpace => self.composer.commit_space(),
            UserCommand::Backspace => self.composer.backspace(),
            UserCommand::Clear => self.composer.clear(),
        }
    }

    /// Handle for submitting commands from other threads.
    pub fn command_sender(&self) -> CommandSender {
        CommandSender {
            tx: self.commands_tx.clone(),
        }
    }

    // ── Synchronous command handlers (between-tick use) ──────────────────

    pub fn accept_suggestion(&mut self, index: usize) {
        self.handle_command(UserCommand::AcceptSuggestion(index));
    }

    pub fn commit_space(&mut self) {
        self.handle_command(UserCommand::CommitSpace);
    }

    pub fn backspace(&mut self) {
        self.handle_command(UserCommand::Backspace);
    }

    pub fn clear(&mut self) {
        self.handle_command(UserCommand::Clear);
    }

    // ── Read-only state for render/TTS consumers ─────────────────────────

    pub fn transcript(&self) -> &Transcript {
        self.composer.transcript()
    }

    pub fn transcript_text(&self) -> String {
        self.composer.transcript_text()
    }

    pub fn buffer_text(&self) -> &str {
        self.composer.buffer_text()
    }

    pub fn suggestions(&self) -> &[String] {
        self.composer.suggestions()
    }

    pub fn hold_progress(&self) -> f32 {
        self.debouncer.progress()
    }

    /// True when no classifier artifact was found at startup.
    pub fn detection_only(&self) -> bool {
        self.classifier.is_none()
    }
}
