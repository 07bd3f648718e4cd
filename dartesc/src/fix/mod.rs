//! Span splicing for rewritten literals.
//!
//! The core component is `ByteRangeRewriter`, which applies
//! edits using byte offsets so untouched text is copied through unchanged.

mod rewriter;

pub use rewriter::{ByteRangeRewriter, Edit, RewriteError};
