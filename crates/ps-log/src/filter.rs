//! Line selection and the `slim_log` entry point.

use crate::classify::{classify, LineKind};
use crate::cleanup::{clean_line, dedup_consecutive};
use crate::patterns::has_aggressive_keyword;
use ps_core::{CompressionLevel, LogOptions, SlimResult};

/// Emitted once when an error group exceeds the stack depth.
pub const TRUNCATION_MARKER: &str = "    ... (remaining stack trace truncated)";

/// State of the current error group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorGroup {
    #[default]
    NoErrorSeen,
    InError { depth: usize },
    /// Marker emitted; frames are dropped until the next primary error.
    Truncated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameAction {
    Keep,
    EmitMarker,
    Drop,
}

impl ErrorGroup {
    pub fn open(&mut self) {
        *self = ErrorGroup::InError { depth: 0 };
    }

    /// Advance on a non-noise frame.
    pub fn on_frame(&mut self, max_depth: usize) -> FrameAction {
        match *self {
            ErrorGroup::NoErrorSeen => FrameAction::Keep,
            ErrorGroup::InError { depth } if depth < max_depth => {
                *self = ErrorGroup::InError { depth: depth + 1 };
                FrameAction::Keep
            }
            ErrorGroup::InError { .. } => {
                *self = ErrorGroup::Truncated;
                FrameAction::EmitMarker
            }
            ErrorGroup::Truncated => FrameAction::Drop,
        }
    }

    pub fn has_error(&self) -> bool {
        !matches!(self, ErrorGroup::NoErrorSeen)
    }
}

/// Select relevant lines (trimmed, not yet cleaned).
pub fn select_lines(text: &str, options: &LogOptions) -> Vec<String> {
    let level = options.compression_level;
    let mut group = ErrorGroup::default();
    let mut kept = Vec::new();
    let mut dropped_frames = 0usize;

    for raw in text.split('\n') {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let class = classify(line);
        match class.kind {
            LineKind::PrimaryError => {
                group.open();
                kept.push(line.to_string());
            }
            LineKind::StackFrame => {
                if !group.has_error() {
                    kept.push(line.to_string());
                    continue;
                }
                if level != CompressionLevel::Low && class.framework_noise {
                    dropped_frames += 1;
                    continue;
                }
                match group.on_frame(options.max_stack_depth) {
                    FrameAction::Keep => kept.push(line.to_string()),
                    FrameAction::EmitMarker => kept.push(TRUNCATION_MARKER.to_string()),
                    FrameAction::Drop => dropped_frames += 1,
                }
            }
            LineKind::Other => {
                let keep = options.preserves(line)
                    || match level {
                        CompressionLevel::Aggressive => has_aggressive_keyword(line),
                        CompressionLevel::Medium => !class.framework_noise,
                        CompressionLevel::Low => true,
                    };
                if keep {
                    kept.push(line.to_string());
                }
            }
        }
    }

    tracing::debug!(kept = kept.len(), dropped_frames, "log lines selected");
    kept
}

/// Filter and clean log text. Never fails; empty input gives empty output.
pub fn slim_log(text: &str, options: &LogOptions) -> SlimResult {
    let cleaned: Vec<String> = select_lines(text, options)
        .iter()
        .map(|line| clean_line(line))
        .filter(|line| !line.is_empty())
        .collect();
    let output = dedup_consecutive(cleaned).join("\n");
    let result = SlimResult::new(text, output);
    tracing::debug!(
        level = %options.compression_level,
        original = result.original_size,
        slimmed = result.transformed_size,
        "log slimmed"
    );
    result
}
