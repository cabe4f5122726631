//! User-facing output.

pub mod formatter;

pub use formatter::{display_error, display_outcome, display_success};
