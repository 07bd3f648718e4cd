//! Non-ASCII escaping for located literals.

use std::borrow::Cow;
use std::fmt::Write;

use super::locator::LiteralMatch;

/// Replace every non-ASCII character of a literal body with `\uXXXX`.
///
/// A backslash and the character after it are copied as they are, so
/// existing escapes (including `\uXXXX` from an earlier run) survive untouched.
/// A lone trailing backslash is copied as well. Hex digits are lowercase and
/// zero-padded to four; scalars above U+FFFF produce more digits rather than a
/// surrogate pair.
///
/// Returns the input borrowed when nothing needed escaping.
#[must_use]
pub fn escape_non_ascii(body: &str) -> Cow<'_, str> {
    if body.is_ascii() {
        return Cow::Borrowed(body);
    }

    let mut out = String::with_capacity(body.len() + body.len() / 2);
    let mut escaped_any = false;
    let mut chars = body.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            out.push(ch);
            if let Some(next) = chars.next() {
                out.push(next);
            }
            continue;
        }
        if ch.is_ascii() {
            out.push(ch);
        } else {
            escaped_any = true;
            let _ = write!(out, "\\u{:04x}", u32::from(ch));
        }
    }

    if escaped_any {
        Cow::Owned(out)
    } else {
        Cow::Borrowed(body)
    }
}

/// Produce the replacement text for one literal.
///
/// Raw literals are returned verbatim. Otherwise the body is escaped and the
/// literal reassembled as prefix, quote, body, quote.
#[must_use]
pub fn rewrite_literal<'a>(source: &'a str, literal: &LiteralMatch) -> Cow<'a, str> {
    let original = literal.text(source);
    if literal.is_raw() {
        return Cow::Borrowed(original);
    }

    match escape_non_ascii(literal.body(source)) {
        Cow::Borrowed(_) => Cow::Borrowed(original),
        Cow::Owned(body) => {
            let mut out = String::with_capacity(body.len() + 3);
            if let Some(prefix) = literal.prefix {
                out.push(prefix);
            }
            out.push(literal.quote);
            out.push_str(&body);
            out.push(literal.quote);
            Cow::Owned(out)
        }
    }
}
