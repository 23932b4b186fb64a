//! Per-line classification.

use crate::patterns::{any_match, ERROR_PREFIX, FRAMEWORK_NOISE, STACK_FRAME};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Opens a new error group.
    PrimaryError,
    /// Stack frame or source file/line marker.
    StackFrame,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass {
    pub kind: LineKind,
    pub framework_noise: bool,
}

/// Classify a trimmed line. A frame that also carries an error prefix
/// (e.g. `at fail (Error: boom.js:1:2)`) stays a frame.
pub fn classify(line: &str) -> LineClass {
    let framework_noise = any_match(&FRAMEWORK_NOISE, line);
    let kind = if any_match(&STACK_FRAME, line) {
        LineKind::StackFrame
    } else if any_match(&ERROR_PREFIX, line) {
        LineKind::PrimaryError
    } else {
        LineKind::Other
    };
    LineClass { kind, framework_noise }
}
