//! Comment blanking.
//!
//! Comment bytes are overwritten with spaces one for one, so every newline and
//! every byte offset after a comment stays where it was.

use std::sync::LazyLock;

use regex::Regex;

use super::pattern::{Pattern, Rewrite};
use crate::diagnostic::ReportError;

pub const MALFORMED_BLOCK_COMMENT: &str = "Malformed multi-line comment.";
pub const MALFORMED_LINE_COMMENT: &str = "Malformed single line comment, missing newline.";

static TRAILING_SPACES: Pattern = LazyLock::new(|| Regex::new(r" +\n").unwrap());
static STRIP_TRAILING_SPACES: Rewrite = Rewrite::new(&TRAILING_SPACES, "\n");

/// Blank out `/* */` and `//` comments.
///
/// An unterminated comment is reported against the input text and the
/// partially blanked text is returned as-is; the caller keeps going with it.
pub fn strip_comments(src: &str, report: &mut impl ReportError) -> String {
    let mut out = src.as_bytes().to_vec();

    if blank_block_comments(&mut out).is_err() {
        report.report(src, None, MALFORMED_BLOCK_COMMENT);
        return into_text(out);
    }
    if blank_line_comments(&mut out).is_err() {
        report.report(src, None, MALFORMED_LINE_COMMENT);
        return into_text(out);
    }

    STRIP_TRAILING_SPACES.apply(&into_text(out))
}

struct Unterminated;

fn blank_block_comments(text: &mut [u8]) -> Result<(), Unterminated> {
    let mut from = 0;
    while let Some(start) = find(text, b"/*", from) {
        // The first closer ends the comment; nesting is not recognized.
        let Some(close) = find(text, b"*/", start + 2) else {
            return Err(Unterminated);
        };
        for b in &mut text[start..close + 2] {
            if *b != b'\n' {
                *b = b' ';
            }
        }
        from = close;
    }
    Ok(())
}

fn blank_line_comments(text: &mut [u8]) -> Result<(), Unterminated> {
    let mut from = 0;
    while let Some(start) = find(text, b"//", from) {
        let Some(newline) = find(text, b"\n", start + 2) else {
            return Err(Unterminated);
        };
        text[start..newline].fill(b' ');
        from = newline;
    }
    Ok(())
}

fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    haystack
        .get(from..)?
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|i| i + from)
}

// Blanked regions always start and end on ASCII delimiters and every byte
// inside them becomes ASCII, so the buffer stays valid UTF-8.
fn into_text(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}
