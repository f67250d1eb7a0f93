//! Buffer/suggestion engine: assembles confirmed symbols into words.
//!
//! Confirmed symbols accumulate in a word buffer. Every buffer mutation
//! recomputes the suggestion list from the dictionary. Commit and edit
//! operations move buffer content into the transcript.

use std::sync::Arc;

use crate::defaults;
use crate::dictionary::{Dictionary, strip_diacritics};
use crate::transcript::{SPACE_TOKEN, Transcript};

/// Word buffer, suggestion list and transcript, mutated only through the
/// operations below. Owned exclusively by the pipeline; all mutation happens
/// inside a tick or a command handler.
pub struct Composer {
    dictionary: Arc<Dictionary>,
    buffer: String,
    suggestions: Vec<String>,
    transcript: Transcript,
    suggestion_limit: usize,
    /// Last symbol appended in this buffering session. Sticky debouncer
    /// confirmation repeats the same label every tick; appending is gated on
    /// this so each confirmation lands exactly once. The latch survives hand
    /// loss — only a different-symbol append or a buffer clear re-arms it, so
    /// the same letter cannot be typed twice in a row.
    last_appended: String,
}

impl Composer {
    /// Creates a composer over the given dictionary.
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self {
            dictionary,
            buffer: String::new(),
            suggestions: Vec::new(),
            transcript: Transcript::new(),
            suggestion_limit: defaults::SUGGESTION_LIMIT,
            last_appended: String::new(),
        }
    }

    /// Overrides the maximum number of suggestions.
    pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit;
        self
    }

    /// Accepts a confirmed symbol into the word buffer.
    ///
    /// Appends only when the symbol differs from the last symbol appended in
    /// this buffering session, so a sticky confirmation held across many
    /// ticks lands once. Withdrawing the hand does not re-arm the latch; a
    /// doubled letter needs an intervening different symbol or a commit.
    pub fn on_confirmed(&mut self, symbol: &str) {
        if symbol.is_empty() || symbol == self.last_appended {
            return;
        }
        self.buffer.push_str(symbol);
        self.last_appended = symbol.to_string();
        self.refresh_suggestions();
    }

    /// The in-progress, uncommitted word.
    pub fn buffer_text(&self) -> &str {
        &self.buffer
    }

    /// Current dictionary suggestions for the buffer, best-first.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Commits the chosen suggestion plus a trailing space to the transcript
    /// and clears the buffer. Out-of-range index is a no-op.
    pub fn accept_suggestion(&mut self, index: usize) {
        let Some(word) = self.suggestions.get(index).cloned() else {
            return;
        };
        self.transcript.append(word);
        self.transcript.append(SPACE_TOKEN);
        self.clear_buffer();
    }

    /// Commits the buffer (if any) followed by a space token.
    ///
    /// With an empty buffer, inserts a bare space — idempotent against an
    /// immediately preceding space token.
    pub fn commit_space(&mut self) {
        if self.buffer.is_empty() {
            if self.transcript.last() != Some(SPACE_TOKEN) {
                self.transcript.append(SPACE_TOKEN);
            }
            return;
        }
        let word = std::mem::take(&mut self.buffer);
        self.transcript.append(word);
        self.transcript.append(SPACE_TOKEN);
        self.clear_buffer();
    }

    /// Removes the last buffer character; with an empty buffer, removes the
    /// last transcript token instead.
    pub fn backspace(&mut self) {
        if self.buffer.pop().is_some() {
            self.refresh_suggestions();
        } else {
            self.transcript.delete_last();
        }
    }

    /// Empties buffer, suggestions and transcript.
    pub fn clear(&mut self) {
        self.transcript.clear();
        self.clear_buffer();
    }

    /// The committed document.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Rendered transcript text.
    pub fn transcript_text(&self) -> String {
        self.transcript.render()
    }

    fn clear_buffer(&mut self) {
        self.buffer.clear();
        self.suggestions.clear();
        self.last_appended.clear();
    }

    fn refresh_suggestions(&mut self) {
        self.suggestions.clear();
        if self.buffer.is_empty() {
            return;
        }
        let key = strip_diacritics(&self.buffer);
        self.suggestions.extend(
            self.dictionary
                .lookup_exact(&key)
                .iter()
                .take(self.suggestion_limit)
                .cloned(),
        );
    }
}
