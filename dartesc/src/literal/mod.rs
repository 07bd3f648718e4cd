//! String literal scanning and rewriting.
//!
//! This is the pure text-to-text core of the tool:
//! - `locator` finds literal spans in a buffer
//! - `escape` turns one literal into its escaped form
//!
//! `transform_source` ties them together with the byte-range rewriter.

mod escape;
mod locator;

pub use escape::{escape_non_ascii, rewrite_literal};
pub use locator::{locate_literals, LiteralLocator, LiteralMatch};

use crate::fix::{ByteRangeRewriter, Edit, RewriteError};
use std::borrow::Cow;

/// Rewrite every non-raw literal of `source`, escaping non-ASCII characters.
///
/// Returns the input borrowed when no literal changed.
///
/// # Errors
///
/// Returns an error if the collected edits are inconsistent, which the
/// locator's non-overlapping spans rule out in practice.
pub fn transform_source(source: &str) -> Result<Cow<'_, str>, RewriteError> {
    transform_source_counted(source).map(|(text, _)| text)
}

/// Like `transform_source`, but also reports how many literals were rewritten.
///
/// # Errors
///
/// See `transform_source`.
pub fn transform_source_counted(source: &str) -> Result<(Cow<'_, str>, usize), RewriteError> {
    let mut rewriter = ByteRangeRewriter::new(source);
    rewriter.add_edits(LiteralLocator::new(source).filter_map(|literal| {
        match rewrite_literal(source, &literal) {
            Cow::Owned(replacement) => Some(Edit::new(literal.start, literal.end, replacement)),
            Cow::Borrowed(_) => None,
        }
    }));

    let count = rewriter.edit_count();
    if count == 0 {
        return Ok((Cow::Borrowed(source), 0));
    }
    rewriter.apply().map(|text| (Cow::Owned(text), count))
}
