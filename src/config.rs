use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::debounce::DebounceMode;
use crate::defaults;
use crate::error::{Result, SignscribeError};
use crate::pipeline::default_labels_map;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub debounce: DebounceConfig,
    pub vision: VisionConfig,
    pub suggest: SuggestConfig,
    /// Raw classifier label rewrites, e.g. "dd" → "đ"
    pub labels: LabelsConfig,
}

/// Label hold / confirmation configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebounceConfig {
    pub mode: DebounceModeName,
    pub hold_secs: f32,
    pub frame_count: u32,
}

/// Debounce mode enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DebounceModeName {
    HoldTime,
    FrameCount,
}

/// Camera and detection configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VisionConfig {
    pub camera_index: u32,
    pub frame_width: u32,
    pub frame_height: u32,
    pub max_hands: u32,
    /// Classifier artifact search paths, first existing wins
    pub model_paths: Vec<String>,
}

/// Word suggestion configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SuggestConfig {
    pub dictionary_path: String,
    pub limit: usize,
}

/// Label rewrite table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LabelsConfig {
    pub map: HashMap<String, String>,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            mode: DebounceModeName::HoldTime,
            hold_secs: defaults::HOLD_SECS,
            frame_count: defaults::FRAME_COUNT_THRESHOLD,
        }
    }
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            camera_index: defaults::CAMERA_INDEX,
            frame_width: defaults::FRAME_WIDTH,
            frame_height: defaults::FRAME_HEIGHT,
            max_hands: defaults::MAX_HANDS,
            model_paths: defaults::MODEL_SEARCH_PATHS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            dictionary_path: defaults::WORDS_CSV_PATH.to_string(),
            limit: defaults::SUGGESTION_LIMIT,
        }
    }
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            map: default_labels_map(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file is missing or contains invalid TOML.
    /// Missing fields will use default values.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SignscribeError::ConfigFileNotFound {
                path: path.display().to_string(),
            });
        }
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if file doesn't exist
    ///
    /// Only returns defaults if the file is missing.
    /// Panics on invalid TOML.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(SignscribeError::ConfigFileNotFound { .. }) => Self::default(),
            Err(e) => panic!("Failed to load config from {}: {}", path.display(), e),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - SIGNSCRIBE_DICTIONARY → suggest.dictionary_path
    /// - SIGNSCRIBE_MODEL → vision.model_paths (prepended)
    /// - SIGNSCRIBE_CAMERA → vision.camera_index
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(dictionary) = std::env::var("SIGNSCRIBE_DICTIONARY")
            && !dictionary.is_empty()
        {
            self.suggest.dictionary_path = dictionary;
        }

        if let Ok(model) = std::env::var("SIGNSCRIBE_MODEL")
            && !model.is_empty()
        {
            self.vision.model_paths.insert(0, model);
        }

        if let Ok(camera) = std::env::var("SIGNSCRIBE_CAMERA")
            && let Ok(index) = camera.parse()
        {
            self.vision.camera_index = index;
        }

        self
    }

    /// Validate configuration values that serde cannot check
    pub fn validate(&self) -> Result<()> {
        if self.debounce.hold_secs <= 0.0 {
            return Err(SignscribeError::ConfigInvalidValue {
                key: "debounce.hold_secs".to_string(),
                message: format!("must be positive, got {}", self.debounce.hold_secs),
            });
        }
        if self.debounce.frame_count == 0 {
            return Err(SignscribeError::ConfigInvalidValue {
                key: "debounce.frame_count".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.suggest.limit == 0 {
            return Err(SignscribeError::ConfigInvalidValue {
                key: "suggest.limit".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.vision.max_hands != 1 {
            return Err(SignscribeError::ConfigInvalidValue {
                key: "vision.max_hands".to_string(),
                message: "only single-hand tracking is supported".to_string(),
            });
        }
        Ok(())
    }

    /// The debounce mode selected by this configuration
    pub fn to_debounce_mode(&self) -> DebounceMode {
        match self.debounce.mode {
            DebounceModeName::HoldTime => {
                DebounceMode::HoldTime(std::time::Duration::from_secs_f32(self.debounce.hold_secs))
            }
            DebounceModeName::FrameCount => DebounceMode::FrameCount(self.debounce.frame_count),
        }
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/signscribe/config.toml on Linux
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .expect("Could not determine config directory")
            .join("signscribe")
            .join("config.toml")
    }
}
