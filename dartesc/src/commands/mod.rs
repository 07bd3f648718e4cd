//! Commands module - CLI command implementations.

mod escape;

pub use escape::{run_escape, EscapeOptions, FileRecord, RunSummary};
