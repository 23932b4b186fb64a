use crate::error::{Result, SlimError};
use crate::options::{
    CompressionLevel, LogOptions, SlimOptions, DEFAULT_PRESERVE_KEYS, DEFAULT_PRESERVE_PATTERNS,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// User-facing configuration. Unset numeric limits fall back to the
/// presets of `compression_level`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SlimmerConfig {
    pub compression_level: CompressionLevel,
    pub max_array_samples: Option<usize>,
    pub preserve_keys: Vec<String>,
    pub preserve_patterns: Vec<String>,
    pub max_stack_depth: Option<usize>,
    pub log_level: Option<String>,
}

impl Default for SlimmerConfig {
    fn default() -> Self {
        Self {
            compression_level: CompressionLevel::default(),
            max_array_samples: None,
            preserve_keys: DEFAULT_PRESERVE_KEYS.iter().map(|s| s.to_string()).collect(),
            preserve_patterns: DEFAULT_PRESERVE_PATTERNS.iter().map(|s| s.to_string()).collect(),
            max_stack_depth: None,
            log_level: None,
        }
    }
}

impl SlimmerConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| SlimError::Config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), level = %config.compression_level, "loaded config");
        Ok(config)
    }

    pub fn slim_options(&self) -> SlimOptions {
        let level = self.compression_level;
        SlimOptions::new(level)
            .with_max_array_samples(
                self.max_array_samples
                    .unwrap_or_else(|| level.default_array_samples()),
            )
            .with_preserve_keys(self.preserve_keys.iter().cloned())
    }

    pub fn log_options(&self) -> LogOptions {
        let level = self.compression_level;
        LogOptions::new(level)
            .with_max_stack_depth(
                self.max_stack_depth
                    .unwrap_or_else(|| level.default_stack_depth()),
            )
            .with_preserve_patterns(self.preserve_patterns.iter().cloned())
    }
}
