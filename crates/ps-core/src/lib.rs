//! Prompt Slimmer core: shared primitives for the slimming engines.
//!
//! - Estimator: token count approximation from character length
//! - Compression levels and per-engine options with level presets
//! - Common result shape with before/after sizing
//! - Error type and JSON-backed configuration

pub mod canonical;
pub mod config;
pub mod error;
pub mod estimator;
pub mod options;
pub mod result;

pub use canonical::{canonical_json, normalize, normalize_number};
pub use config::SlimmerConfig;
pub use error::{Result, SlimError};
pub use estimator::{estimate_size, reduction_ratio};
pub use options::{CompressionLevel, LogOptions, SlimOptions};
pub use result::SlimResult;
