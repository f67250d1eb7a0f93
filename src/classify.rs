//! Gesture classifier collaborator interface.
//!
//! The classifier is a pretrained, frozen artifact loaded once at startup.
//! If no artifact exists on the configured search paths, the pipeline runs
//! in detection-only mode and the classifier is never invoked.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::defaults::FEATURE_LEN;
use crate::error::{Result, SignscribeError};

/// Trait for gesture classification.
///
/// This trait allows swapping implementations (real model vs mock).
pub trait Classifier: Send + Sync {
    /// Classifies one translation-normalized feature vector into a label.
    fn classify(&self, features: &[f32; FEATURE_LEN]) -> Result<String>;

    /// Name of the loaded artifact, for diagnostics.
    fn name(&self) -> &str;
}

/// Returns the first existing classifier artifact path, or an error naming
/// every path searched.
pub fn find_artifact<P: AsRef<Path>>(search_paths: &[P]) -> Result<PathBuf> {
    for path in search_paths {
        if path.as_ref().exists() {
            return Ok(path.as_ref().to_path_buf());
        }
    }
    Err(SignscribeError::ClassifierArtifactNotFound {
        searched: search_paths
            .iter()
            .map(|p| p.as_ref().display().to_string())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// Mock classifier for testing.
///
/// Returns either a fixed response or a scripted per-call sequence. Interior
/// mutability keeps `classify(&self)` shareable across the pipeline.
pub struct MockClassifier {
    name: String,
    response: String,
    script: Mutex<VecDeque<String>>,
    should_fail: bool,
}

impl MockClassifier {
    /// Creates a mock that always answers with the empty label.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            response: String::new(),
            script: Mutex::new(VecDeque::new()),
            should_fail: false,
        }
    }

    /// Configures a fixed response for every call.
    pub fn with_response(mut self, response: &str) -> Self {
        self.response = response.to_string();
        self
    }

    /// Configures a per-call script; after it is exhausted the fixed
    /// response (default empty) applies.
    pub fn with_script<S: Into<String>>(self, labels: Vec<S>) -> Self {
        {
            #[allow(clippy::unwrap_used)]
            let mut script = self.script.lock().unwrap();
            script.extend(labels.into_iter().map(Into::into));
        }
        self
    }

    /// Configures the mock to fail on classify.
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }
}

impl Classifier for MockClassifier {
    fn classify(&self, _features: &[f32; FEATURE_LEN]) -> Result<String> {
        if self.should_fail {
            return Err(SignscribeError::Classification {
                message: "mock classification failure".to_string(),
            });
        }
        #[allow(clippy::unwrap_used)]
        let mut script = self.script.lock().unwrap();
        Ok(script.pop_front().unwrap_or_else(|| self.response.clone()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
