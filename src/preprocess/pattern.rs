//! Find-next-match / replace / advance over raw text.
//!
//! Every textual pass is a `Rewrite` (pattern + replacement template) or a
//! scan over successive non-overlapping matches. Each search resumes where the
//! previous match ended, so a scan always terminates.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::span::Span;

/// A compiled pattern, built on first use.
pub(crate) type Pattern = LazyLock<Regex>;

/// A declarative pattern → replacement pair.
///
/// The template uses `${n}` group references.
pub(crate) struct Rewrite {
    pub pattern: &'static Pattern,
    pub template: &'static str,
}

impl Rewrite {
    pub const fn new(pattern: &'static Pattern, template: &'static str) -> Self {
        Self { pattern, template }
    }

    /// Replace every match in `text`, returning the new text.
    pub fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, self.template).into_owned()
    }

    /// Number of places `apply` would rewrite.
    pub fn count(&self, text: &str) -> usize {
        self.pattern.find_iter(text).count()
    }
}

/// One match of a scan: the whole-match span plus its capture groups.
pub(crate) struct Hit<'t> {
    pub span: Span,
    caps: Captures<'t>,
}

impl<'t> Hit<'t> {
    /// Text of capture group `i`, or `""` when the group did not participate.
    pub fn group(&self, i: usize) -> &'t str {
        self.caps.get(i).map_or("", |m| m.as_str())
    }
}

/// Successive non-overlapping matches of `pattern` in `text`.
pub(crate) fn scan<'r, 't>(pattern: &'r Regex, text: &'t str) -> impl Iterator<Item = Hit<'t>> + 'r
where
    't: 'r,
{
    pattern.captures_iter(text).filter_map(|caps| {
        let whole = caps.get(0)?;
        Some(Hit {
            span: Span::from_match(&whole),
            caps,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    static WORD_PAIR: Pattern = LazyLock::new(|| Regex::new(r"(\w+)=(\w+)").unwrap());
    static SWAP: Rewrite = Rewrite::new(&WORD_PAIR, "${2}=${1}");

    #[test]
    fn test_apply_uses_braced_groups() {
        assert_eq!(SWAP.apply("a=b, c=d"), "b=a, d=c");
        assert_eq!(SWAP.count("a=b, c=d"), 2);
    }

    #[test]
    fn test_apply_without_match_is_identity() {
        assert_eq!(SWAP.apply("nothing here"), "nothing here");
        assert_eq!(SWAP.count("nothing here"), 0);
    }

    #[test]
    fn test_scan_advances_past_each_match() {
        let text = "x=1 y=2 z=3";
        let hits: Vec<_> = scan(&WORD_PAIR, text).collect();
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[1].group(1), "y");
        assert_eq!(hits[1].group(2), "2");
        assert_eq!(hits[2].span, Span::new(8, 11));
        assert_eq!(hits[0].group(7), "");
    }
}
