//! Structural JSON slimmer.
//!
//! Arrays keep one representative per shape signature (sorted key list for
//! objects, type plus value for scalars) and summarize the rest with a count.
//! Aggressive slimming also drops noisy keys such as `metadata` or `_links`.

pub mod signature;
pub mod slimmer;

pub use signature::{representatives, shape_signature};
pub use slimmer::{more_items_marker, slim, slim_value, NOISE_KEYS};
