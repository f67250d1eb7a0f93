//! Word-completion dictionary.
//!
//! Built once at startup from a word-per-line source file (first CSV column).
//! Lookup is by exact key match on the diacritic-stripped lowercase form of
//! a word — no prefix or fuzzy search. Users typically sign every base
//! character of a word before picking a completion, so exact-key lookup on
//! the stripped form is the useful query.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::error::{Result, SignscribeError};

/// Strips diacritics and lowercases, producing a dictionary lookup key.
///
/// Unicode NFD decomposition followed by dropping combining marks, then the
/// đ/Đ special case (a base letter, not covered by decomposition), then
/// lowercasing. Example: "Trường" → "truong".
pub fn strip_diacritics(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| match c {
            'đ' => 'd',
            'Đ' => 'D',
            other => other,
        })
        .collect::<String>()
        .to_lowercase()
}

/// Diacritic-keyed word dictionary.
///
/// Maps each stripped key to the original-form words sharing it, preserving
/// source-file insertion order.
#[derive(Debug, Default)]
pub struct Dictionary {
    entries: HashMap<String, Vec<String>>,
    word_count: usize,
}

impl Dictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a dictionary from a word-per-line file.
    ///
    /// Each line contributes its first comma-separated field, trimmed.
    /// Blank lines and blank fields are skipped.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SignscribeError::DictionaryNotFound {
                path: path.display().to_string(),
            });
        }
        let contents = fs::read_to_string(path)?;
        let mut dictionary = Self::new();
        for line in contents.lines() {
            let word = line.split(',').next().unwrap_or("").trim();
            if !word.is_empty() {
                dictionary.insert(word);
            }
        }
        Ok(dictionary)
    }

    /// Loads a dictionary, degrading to an empty one when the file is
    /// missing or unreadable. The absence is surfaced once here, not per
    /// lookup.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(dictionary) => dictionary,
            Err(e) => {
                eprintln!("signscribe: {e}; word suggestions disabled");
                Self::new()
            }
        }
    }

    /// Inserts one original-form word under its stripped key.
    pub fn insert(&mut self, word: &str) {
        let key = strip_diacritics(word);
        self.entries.entry(key).or_default().push(word.to_string());
        self.word_count += 1;
    }

    /// Returns the original-form words for an exact stripped key, in
    /// insertion order. Empty slice when the key is unknown.
    pub fn lookup_exact(&self, key: &str) -> &[String] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of words loaded.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Returns true if no words are loaded.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_strip_diacritics_vietnamese() {
        assert_eq!(strip_diacritics("Trường"), "truong");
        assert_eq!(strip_diacritics("Trưởng"), "truong");
        assert_eq!(strip_diacritics("tiếng"), "tieng");
    }

    #[test]
    fn test_strip_diacritics_d_bar() {
        // đ/Đ do not decompose; the explicit mapping handles them
        assert_eq!(strip_diacritics("đường"), "duong");
        assert_eq!(strip_diacritics("Đà Nẵng"), "da nang");
    }

    #[test]
    fn test_strip_diacritics_plain_ascii_unchanged() {
        assert_eq!(strip_diacritics("hello"), "hello");
        assert_eq!(strip_diacritics("ABC"), "abc");
    }

    #[test]
    fn test_strip_diacritics_empty() {
        assert_eq!(strip_diacritics(""), "");
    }

    #[test]
    fn test_lookup_preserves_insertion_order() {
        let mut dictionary = Dictionary::new();
        dictionary.insert("Trường");
        dictionary.insert("Trưởng");

        assert_eq!(
            dictionary.lookup_exact("truong"),
            &["Trường".to_string(), "Trưởng".to_string()]
        );
    }

    #[test]
    fn test_lookup_unknown_key_is_empty() {
        let dictionary = Dictionary::new();
        assert!(dictionary.lookup_exact("xyz").is_empty());
    }

    #[test]
    fn test_lookup_is_exact_key_only() {
        let mut dictionary = Dictionary::new();
        dictionary.insert("trường");

        // No prefix search: a shorter key does not match
        assert!(dictionary.lookup_exact("truon").is_empty());
        assert_eq!(dictionary.lookup_exact("truong").len(), 1);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "trường").unwrap();
        writeln!(file, "trưởng,noun").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  đèn  ").unwrap();

        let dictionary = Dictionary::load(file.path()).unwrap();
        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.lookup_exact("truong").len(), 2);
        assert_eq!(dictionary.lookup_exact("den"), &["đèn".to_string()]);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let result = Dictionary::load(Path::new("/nonexistent/words.csv"));
        assert!(matches!(
            result,
            Err(SignscribeError::DictionaryNotFound { .. })
        ));
    }

    #[test]
    fn test_load_or_empty_degrades() {
        let dictionary = Dictionary::load_or_empty(Path::new("/nonexistent/words.csv"));
        assert!(dictionary.is_empty());
        assert!(dictionary.lookup_exact("truong").is_empty());
    }
}
