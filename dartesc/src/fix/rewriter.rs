//! Byte-range safe text rewriter.
//!
//! Splices replacement text into a borrowed source buffer by byte range.
//! Edits are validated up front: they must lie inside the buffer, start and
//! end on UTF-8 character boundaries, and never overlap.
//!
//! # Usage
//!
//! ```
//! use dartesc::fix::{ByteRangeRewriter, Edit};
//!
//! let source = "var s = 'caf\u{e9}';";
//! let mut rewriter = ByteRangeRewriter::new(source);
//! rewriter.add_edit(Edit::new(8, 15, "'cafe'"));
//! let fixed = rewriter.apply().expect("should apply");
//! assert_eq!(fixed, "var s = 'cafe';");
//! ```

use std::fmt;

/// A single replacement over `start_byte..end_byte`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Start byte offset (inclusive)
    pub start_byte: usize,
    /// End byte offset (exclusive)
    pub end_byte: usize,
    /// Replacement content
    pub replacement: String,
}

impl Edit {
    /// Create a new edit
    #[must_use]
    pub fn new(start_byte: usize, end_byte: usize, replacement: impl Into<String>) -> Self {
        Self {
            start_byte,
            end_byte,
            replacement: replacement.into(),
        }
    }

    /// Check if this edit overlaps with another
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start_byte < other.end_byte && other.start_byte < self.end_byte
    }
}

/// Error during rewriting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteError {
    /// Two edits have overlapping ranges
    OverlappingEdits {
        /// Start byte of the earlier edit
        first_start: usize,
        /// Start byte of the later edit
        second_start: usize,
    },
    /// Edit range is out of bounds or reversed
    OutOfBounds {
        /// Start byte of the edit
        start_byte: usize,
        /// End byte of the edit
        end_byte: usize,
        /// Length of the source
        source_len: usize,
    },
    /// Edit boundary falls inside a multi-byte character
    NotCharBoundary {
        /// The offending byte offset
        offset: usize,
    },
}

impl fmt::Display for RewriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OverlappingEdits {
                first_start,
                second_start,
            } => {
                write!(
                    f,
                    "Overlapping edits starting at bytes {first_start} and {second_start}"
                )
            }
            Self::OutOfBounds {
                start_byte,
                end_byte,
                source_len,
            } => {
                write!(
                    f,
                    "Edit {start_byte}..{end_byte} out of bounds for source length {source_len}"
                )
            }
            Self::NotCharBoundary { offset } => {
                write!(f, "Edit boundary {offset} is not on a character boundary")
            }
        }
    }
}

impl std::error::Error for RewriteError {}

/// Safe text rewriter using byte ranges
///
/// Edits are sorted by start offset and the output is assembled in a single
/// forward pass, so the cost is linear in the source plus replacement sizes.
#[derive(Debug, Clone)]
pub struct ByteRangeRewriter<'a> {
    /// Original source text
    source: &'a str,
    /// Pending edits
    edits: Vec<Edit>,
}

impl<'a> ByteRangeRewriter<'a> {
    /// Create a new rewriter for the given source
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            edits: Vec::new(),
        }
    }

    /// Add an edit to the pending list
    pub fn add_edit(&mut self, edit: Edit) {
        self.edits.push(edit);
    }

    /// Add multiple edits
    pub fn add_edits(&mut self, edits: impl IntoIterator<Item = Edit>) {
        self.edits.extend(edits);
    }

    /// Get the number of pending edits
    #[must_use]
    pub fn edit_count(&self) -> usize {
        self.edits.len()
    }


    fn validate_sorted(&self, sorted: &[&Edit]) -> Result<(), RewriteError> {
        for edit in sorted {
            if edit.start_byte > edit.end_byte || edit.end_byte > self.source.len() {
                return Err(RewriteError::OutOfBounds {
                    start_byte: edit.start_byte,
                    end_byte: edit.end_byte,
                    source_len: self.source.len(),
                });
            }
            for offset in [edit.start_byte, edit.end_byte] {
                if !self.source.is_char_boundary(offset) {
                    return Err(RewriteError::NotCharBoundary { offset });
                }
            }
        }

        for pair in sorted.windows(2) {
            if pair[0].overlaps(pair[1]) {
                return Err(RewriteError::OverlappingEdits {
                    first_start: pair[0].start_byte,
                    second_start: pair[1].start_byte,
                });
            }
        }

        Ok(())
    }

    /// Apply all edits and return the modified source
    ///
    /// # Errors
    /// Returns error if edits overlap, are out of bounds, or split a character
    pub fn apply(self) -> Result<String, RewriteError> {
        let mut sorted: Vec<&Edit> = self.edits.iter().collect();
        sorted.sort_by_key(|edit| edit.start_byte);
        self.validate_sorted(&sorted)?;

        let grown: usize = sorted.iter().map(|edit| edit.replacement.len()).sum();
        let mut result = String::with_capacity(self.source.len() + grown);
        let mut cursor = 0;
        for edit in sorted {
            result.push_str(&self.source[cursor..edit.start_byte]);
            result.push_str(&edit.replacement);
            cursor = edit.end_byte;
        }
        result.push_str(&self.source[cursor..]);

        Ok(result)
    }
}
