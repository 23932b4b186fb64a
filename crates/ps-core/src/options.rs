//! Compression levels and engine options.

use crate::error::SlimError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// How much noise and duplication an engine may discard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionLevel {
    Low,
    #[default]
    Medium,
    Aggressive,
}

impl CompressionLevel {
    pub const ALL: [CompressionLevel; 3] = [Self::Low, Self::Medium, Self::Aggressive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::Aggressive => "aggressive",
        }
    }

    /// Representatives kept per array.
    pub fn default_array_samples(&self) -> usize {
        match self {
            Self::Low => 5,
            Self::Medium => 3,
            Self::Aggressive => 2,
        }
    }

    /// Application frames kept per error group.
    pub fn default_stack_depth(&self) -> usize {
        match self {
            Self::Low => 10,
            Self::Medium => 6,
            Self::Aggressive => 3,
        }
    }
}

impl fmt::Display for CompressionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompressionLevel {
    type Err = SlimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "aggressive" => Ok(Self::Aggressive),
            other => Err(SlimError::InvalidLevel(other.to_string())),
        }
    }
}

/// Keys kept by default since they identify a record.
pub const DEFAULT_PRESERVE_KEYS: &[&str] = &["id", "name", "type", "status", "error", "message"];

/// Substrings that keep a log line regardless of level.
pub const DEFAULT_PRESERVE_PATTERNS: &[&str] = &["error", "exception", "failed", "warning"];

/// Options for the JSON structural slimmer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlimOptions {
    pub compression_level: CompressionLevel,
    pub max_array_samples: usize,
    pub preserve_keys: BTreeSet<String>,
}

impl SlimOptions {
    pub fn new(compression_level: CompressionLevel) -> Self {
        Self {
            compression_level,
            max_array_samples: compression_level.default_array_samples(),
            preserve_keys: BTreeSet::new(),
        }
    }

    /// Preset used by the front end: level-derived sample bound plus the
    /// default identifying keys.
    pub fn for_level(compression_level: CompressionLevel) -> Self {
        Self::new(compression_level)
            .with_preserve_keys(DEFAULT_PRESERVE_KEYS.iter().copied())
    }

    pub fn with_max_array_samples(mut self, max: usize) -> Self {
        self.max_array_samples = max;
        self
    }

    pub fn with_preserve_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preserve_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn preserves(&self, key: &str) -> bool {
        self.preserve_keys.contains(key)
    }
}

impl Default for SlimOptions {
    fn default() -> Self {
        Self::for_level(CompressionLevel::default())
    }
}

/// Options for the log filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogOptions {
    pub compression_level: CompressionLevel,
    pub preserve_patterns: Vec<String>,
    pub max_stack_depth: usize,
}

impl LogOptions {
    pub fn new(compression_level: CompressionLevel) -> Self {
        Self {
            compression_level,
            preserve_patterns: Vec::new(),
            max_stack_depth: compression_level.default_stack_depth(),
        }
    }

    pub fn for_level(compression_level: CompressionLevel) -> Self {
        Self::new(compression_level)
            .with_preserve_patterns(DEFAULT_PRESERVE_PATTERNS.iter().copied())
    }

    pub fn with_max_stack_depth(mut self, depth: usize) -> Self {
        self.max_stack_depth = depth;
        self
    }

    pub fn with_preserve_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for p in patterns {
            let p = p.into();
            if !self.preserve_patterns.contains(&p) {
                self.preserve_patterns.push(p);
            }
        }
        self
    }

    /// Substring match against any preserve pattern. Empty patterns never match.
    pub fn preserves(&self, line: &str) -> bool {
        self.preserve_patterns
            .iter()
            .any(|p| !p.is_empty() && line.contains(p.as_str()))
    }
}

impl Default for LogOptions {
    fn default() -> Self {
        Self::for_level(CompressionLevel::default())
    }
}
