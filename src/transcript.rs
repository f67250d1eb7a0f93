//! Transcript document: the committed, user-visible output text.
//!
//! An ordered token sequence (word strings and single-space tokens), mutated
//! only through the operations below. Durable for the session only — no disk
//! persistence.

/// The single-space token committed between words.
pub const SPACE_TOKEN: &str = " ";

/// Ordered sequence of committed tokens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    tokens: Vec<String>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one token.
    pub fn append(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
    }

    /// Removes and returns the last token. No-op on an empty transcript.
    pub fn delete_last(&mut self) -> Option<String> {
        self.tokens.pop()
    }

    /// Removes all tokens.
    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// The last committed token, if any.
    pub fn last(&self) -> Option<&str> {
        self.tokens.last().map(String::as_str)
    }

    /// Number of committed tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true when no tokens are committed.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token concatenation, for display and TTS playback.
    pub fn render(&self) -> String {
        self.tokens.concat()
    }
}
