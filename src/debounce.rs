//! Stability debouncer for per-frame classifier labels.
//!
//! Raw classifier output is frame-noisy. A label is only confirmed after it
//! has been observed continuously for a hold threshold — either a wall-clock
//! duration or a consecutive-frame count. Any label change or loss of the
//! hand resets the accumulation.

use crate::defaults;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Trait for time operations, allowing mock time in tests.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// Real system clock using `std::time::Instant::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Mock clock for testing that allows manual time advancement.
#[derive(Debug, Clone)]
pub struct MockClock {
    current: Arc<Mutex<Instant>>,
}

impl MockClock {
    /// Creates a new mock clock starting at the current instant.
    pub fn new() -> Self {
        Self {
            current: Arc::new(Mutex::new(Instant::now())),
        }
    }

    /// Advances the mock clock by the given duration.
    pub fn advance(&self, duration: Duration) {
        #[allow(clippy::unwrap_used)]
        let mut current = self.current.lock().unwrap();
        *current += duration;
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MockClock {
    fn now(&self) -> Instant {
        #[allow(clippy::unwrap_used)]
        *self.current.lock().unwrap()
    }
}

/// How long a raw label must hold before it is confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceMode {
    /// Confirm after the same label has held for a wall-clock duration.
    HoldTime(Duration),
    /// Confirm after the same label has held for N consecutive ticks.
    FrameCount(u32),
}

impl Default for DebounceMode {
    fn default() -> Self {
        DebounceMode::HoldTime(Duration::from_secs_f32(defaults::HOLD_SECS))
    }
}

/// Current state of the debouncer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceState {
    /// No label is being held.
    Idle,
    /// A label is held but has not reached the threshold yet.
    Accumulating,
    /// The held label has reached the threshold.
    Confirmed,
}

/// Label stability state machine.
///
/// Confirmation is sticky: once a label is confirmed it stays confirmed on
/// every subsequent tick while the same label holds. Consumers are expected
/// to deduplicate (see `Composer::on_confirmed`).
pub struct Debouncer<C: Clock = SystemClock> {
    mode: DebounceMode,
    clock: C,
    last_label: String,
    hold_start: Option<Instant>,
    frames_held: u32,
    confirmed: String,
}

impl<C: Clock> Debouncer<C> {
    /// Creates a debouncer with the given mode and clock.
    pub fn with_clock(mode: DebounceMode, clock: C) -> Self {
        Self {
            mode,
            clock,
            last_label: String::new(),
            hold_start: None,
            frames_held: 0,
            confirmed: String::new(),
        }
    }

    /// Feeds one per-tick raw label (empty = no hand / no confident symbol).
    ///
    /// Returns the confirmed label, or the empty string while nothing is
    /// confirmed. Must be called exactly once per tick.
    pub fn update(&mut self, raw_label: &str) -> &str {
        if raw_label.is_empty() {
            self.reset();
            return &self.confirmed;
        }

        if raw_label != self.last_label {
            self.last_label = raw_label.to_string();
            self.hold_start = Some(self.clock.now());
            self.frames_held = 1;
            self.confirmed.clear();
            // A one-frame threshold confirms on this very tick
            if self.threshold_reached() {
                self.confirmed = raw_label.to_string();
            }
            return &self.confirmed;
        }

        // Same non-empty label still held
        self.frames_held = self.frames_held.saturating_add(1);
        if self.threshold_reached() && self.confirmed.is_empty() {
            self.confirmed = raw_label.to_string();
        }
        &self.confirmed
    }

    fn threshold_reached(&self) -> bool {
        match self.mode {
            DebounceMode::HoldTime(threshold) => self
                .hold_start
                .is_some_and(|start| self.clock.now().duration_since(start) >= threshold),
            DebounceMode::FrameCount(frames) => self.frames_held >= frames,
        }
    }

    /// The currently confirmed label, empty while nothing is confirmed.
    pub fn confirmed(&self) -> &str {
        &self.confirmed
    }

    /// The raw label currently accumulating (for display), empty when idle.
    pub fn current_label(&self) -> &str {
        &self.last_label
    }

    /// Hold progress in [0, 1] toward confirmation. 0 when idle.
    pub fn progress(&self) -> f32 {
        if self.last_label.is_empty() {
            return 0.0;
        }
        match self.mode {
            DebounceMode::HoldTime(threshold) => self
                .hold_start
                .map(|start| {
                    let elapsed = self.clock.now().duration_since(start).as_secs_f32();
                    (elapsed / threshold.as_secs_f32()).min(1.0)
                })
                .unwrap_or(0.0),
            DebounceMode::FrameCount(frames) => {
                (self.frames_held as f32 / frames.max(1) as f32).min(1.0)
            }
        }
    }

    /// Returns the current debounce state.
    pub fn state(&self) -> DebounceState {
        if !self.confirmed.is_empty() {
            DebounceState::Confirmed
        } else if !self.last_label.is_empty() {
            DebounceState::Accumulating
        } else {
            DebounceState::Idle
        }
    }

    /// Resets to idle: clears the held label, accumulation and confirmation.
    pub fn reset(&mut self) {
        self.last_label.clear();
        self.hold_start = None;
        self.frames_held = 0;
        self.confirmed.clear();
    }
}

impl Debouncer<SystemClock> {
    /// Creates a debouncer with the given mode using the system clock.
    pub fn new(mode: DebounceMode) -> Self {
        Self::with_clock(mode, SystemClock)
    }
}
