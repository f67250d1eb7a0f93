//! Error types for signscribe.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignscribeError {
    // Configuration errors
    #[error("Configuration file not found at {path}")]
    ConfigFileNotFound { path: String },

    #[error("Invalid configuration value for {key}: {message}")]
    ConfigInvalidValue { key: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    // Landmark errors
    #[error("Expected {expected} hand keypoints, got {actual}")]
    InvalidKeypointCount { expected: usize, actual: usize },

    // Collaborator errors
    #[error("Hand detection failed: {message}")]
    Detection { message: String },

    #[error("Classifier artifact not found (searched: {searched})")]
    ClassifierArtifactNotFound { searched: String },

    #[error("Classification failed: {message}")]
    Classification { message: String },

    #[error("Dictionary file not found at {path}")]
    DictionaryNotFound { path: String },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, SignscribeError>;
