//! Startup diagnostics.
//!
//! Verifies that the classifier artifact and word dictionary are present, so
//! a user can tell why the pipeline would run in a degraded mode.

use std::path::Path;

use crate::classify;
use crate::config::Config;
use crate::dictionary::Dictionary;

/// Result of a single resource check.
#[derive(Debug, PartialEq)]
pub enum CheckResult {
    /// Resource is present and usable
    Ok(String),
    /// Resource is missing
    NotFound(String),
}

/// Check whether a classifier artifact exists on the configured search paths.
pub fn check_classifier(model_paths: &[String]) -> CheckResult {
    match classify::find_artifact(model_paths) {
        Ok(path) => CheckResult::Ok(path.display().to_string()),
        Err(_) => CheckResult::NotFound(model_paths.join(", ")),
    }
}

/// Check whether the word dictionary loads, reporting its word count.
pub fn check_dictionary(path: &Path) -> CheckResult {
    match Dictionary::load(path) {
        Ok(dictionary) => CheckResult::Ok(format!(
            "{} ({} words)",
            path.display(),
            dictionary.len()
        )),
        Err(_) => CheckResult::NotFound(path.display().to_string()),
    }
}

/// Run all resource checks and print results.
pub fn check_resources(config: &Config) {
    println!("Checking signscribe resources...\n");

    print!("classifier artifact: ");
    match check_classifier(&config.vision.model_paths) {
        CheckResult::Ok(path) => println!("✓ OK ({})", path),
        CheckResult::NotFound(searched) => {
            println!("✗ NOT FOUND");
            println!("  Searched: {}", searched);
            println!("  Without it, signscribe runs in detection-only mode.");
        }
    }

    print!("word dictionary: ");
    match check_dictionary(Path::new(&config.suggest.dictionary_path)) {
        CheckResult::Ok(detail) => println!("✓ OK ({})", detail),
        CheckResult::NotFound(path) => {
            println!("✗ NOT FOUND");
            println!("  Expected at: {}", path);
            println!("  Without it, word suggestions are disabled.");
        }
    }

    print!("config file: ");
    let config_path = Config::default_path();
    if config_path.exists() {
        println!("✓ OK ({})", config_path.display());
    } else {
        println!("- not present (defaults in use)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_check_classifier_found() {
        let file = NamedTempFile::new().unwrap();
        let paths = vec![file.path().display().to_string()];
        match check_classifier(&paths) {
            CheckResult::Ok(found) => assert_eq!(found, paths[0]),
            other => panic!("Expected Ok, got {:?}", other),
        }
    }

    #[test]
    fn test_check_classifier_missing() {
        let paths = vec!["/nonexistent/model.bin".to_string()];
        assert!(matches!(
            check_classifier(&paths),
            CheckResult::NotFound(_)
        ));
    }

    #[test]
    fn test_check_dictionary_reports_word_count() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "trường").unwrap();
        writeln!(file, "đèn").unwrap();

        match check_dictionary(file.path()) {
            CheckResult::Ok(detail) => assert!(detail.contains("2 words")),
            other => panic!("Expected Ok, got {:?}", other),
        }
    }

    #[test]
    fn test_check_dictionary_missing() {
        assert!(matches!(
            check_dictionary(Path::new("/nonexistent/words.csv")),
            CheckResult::NotFound(_)
        ));
    }

    #[test]
    fn test_check_resources_runs_without_panic() {
        // Just verify it doesn't panic
        check_resources(&Config::default());
    }
}
