//! Left-to-right string literal scanner.
//!
//! Recognises single- and double-quoted literals with an optional `r`/`R`
//! raw marker directly before the opening quote. A backslash and the character
//! after it form one unit, so `\'` never closes a `'...'` literal. Newlines are
//! ordinary body characters.
//!
//! Triple-quoted literals are not special: `'''a'''` scans as `''`, `'a'`
//! and `''`. A stray quote with a matching quote far later in the buffer
//! swallows everything in between.

use crate::constants::{ESCAPE, QUOTES, RAW_PREFIXES};

/// One located literal, as byte offsets into the scanned buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralMatch {
    /// Offset of the raw marker if present, otherwise of the opening quote.
    pub start: usize,
    /// Offset one past the closing quote.
    pub end: usize,
    /// Raw marker (`r` or `R`) directly preceding the quote.
    pub prefix: Option<char>,
    /// The quote character that opened (and closes) the literal.
    pub quote: char,
    /// Offset of the first body byte.
    pub body_start: usize,
    /// Offset of the closing quote.
    pub body_end: usize,
}

impl LiteralMatch {
    /// The full literal text, prefix and quotes included.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }

    /// The text between the quotes.
    #[must_use]
    pub fn body<'a>(&self, source: &'a str) -> &'a str {
        &source[self.body_start..self.body_end]
    }

    /// Whether the literal carries a raw marker.
    #[must_use]
    pub fn is_raw(&self) -> bool {
        self.prefix.is_some_and(|p| p.eq_ignore_ascii_case(&'r'))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Outside,
    InLiteral { opener: usize, quote: u8 },
    InEscape { opener: usize, quote: u8 },
}

/// Lazy iterator over the literals of a buffer.
///
/// Each call to `next` resumes where the previous literal closed, so matches
/// come out in order and never overlap. Build a new locator to rescan.
#[derive(Debug, Clone)]
pub struct LiteralLocator<'a> {
    source: &'a str,
    pos: usize,
    /// Per quote kind: for each offset inside a body, where that body closes.
    closes: [Vec<Option<usize>>; 2],
}

/// Offset of the quote that closes a body starting at each position.
///
/// Filled right to left: a matching quote closes at itself, a backslash skips
/// the byte after it, anything else defers to the next byte.
fn closing_table(bytes: &[u8], quote: u8) -> Vec<Option<usize>> {
    let mut table = vec![None; bytes.len() + 2];
    for i in (0..bytes.len()).rev() {
        table[i] = match bytes[i] {
            b if b == quote => Some(i),
            ESCAPE => table[i + 2],
            _ => table[i + 1],
        };
    }
    table
}

impl<'a> LiteralLocator<'a> {
    /// Create a locator positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        let bytes = source.as_bytes();
        Self {
            source,
            pos: 0,
            closes: QUOTES.map(|q| closing_table(bytes, q)),
        }
    }

    /// Whether an opener at `opener` has a closing quote anywhere after it.
    fn can_close(&self, quote: u8, opener: usize) -> bool {
        QUOTES
            .iter()
            .position(|&q| q == quote)
            .and_then(|kind| self.closes[kind][opener + 1])
            .is_some()
    }

    fn build_match(
        &self,
        scan_start: usize,
        opener: usize,
        quote: u8,
        close: usize,
    ) -> LiteralMatch {
        let bytes = self.source.as_bytes();
        let prefix = (opener > scan_start && RAW_PREFIXES.contains(&bytes[opener - 1]))
            .then(|| char::from(bytes[opener - 1]));
        LiteralMatch {
            start: if prefix.is_some() { opener - 1 } else { opener },
            end: close + 1,
            prefix,
            quote: char::from(quote),
            body_start: opener + 1,
            body_end: close,
        }
    }
}

impl Iterator for LiteralLocator<'_> {
    type Item = LiteralMatch;

    fn next(&mut self) -> Option<Self::Item> {
        // Quotes, backslashes and raw markers are all ASCII, so scanning bytes
        // never lands inside a multi-byte character at a decision point.
        let bytes = self.source.as_bytes();
        let mut scan_start = self.pos;
        let mut state = ScanState::Outside;

        for (i, &b) in bytes.iter().enumerate().skip(self.pos) {
            state = match state {
                ScanState::Outside if QUOTES.contains(&b) => {
                    if self.can_close(b, i) {
                        ScanState::InLiteral { opener: i, quote: b }
                    } else {
                        // Unterminated: the scan restarts right after it.
                        scan_start = i + 1;
                        ScanState::Outside
                    }
                }
                ScanState::Outside => ScanState::Outside,
                ScanState::InLiteral { opener, quote } if b == ESCAPE => {
                    ScanState::InEscape { opener, quote }
                }
                ScanState::InLiteral { opener, quote } if b == quote => {
                    self.pos = i + 1;
                    return Some(self.build_match(scan_start, opener, quote, i));
                }
                in_literal @ ScanState::InLiteral { .. } => in_literal,
                ScanState::InEscape { opener, quote } => {
                    ScanState::InLiteral { opener, quote }
                }
            };
        }

        self.pos = bytes.len();
        None
    }
}

/// Collect every literal in `source`.
#[must_use]
pub fn locate_literals(source: &str) -> Vec<LiteralMatch> {
    LiteralLocator::new(source).collect()
}
