//! Log relevance filter.
//!
//! Lines are classified against ordered pattern tables (primary error,
//! stack frame, framework noise), selected by a per-error-group state
//! machine that caps stack depth, then cleaned of timestamps, redundant
//! whitespace and consecutive repeats.

pub mod classify;
pub mod cleanup;
pub mod filter;
pub mod patterns;

pub use classify::{classify, LineClass, LineKind};
pub use cleanup::{clean_line, dedup_consecutive, strip_timestamp};
pub use filter::{select_lines, slim_log, ErrorGroup, FrameAction, TRUNCATION_MARKER};
