use std::ops::Range;

/// A byte offset range into one snapshot of shader text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn from_match(m: &regex::Match<'_>) -> Self {
        Self::new(m.start(), m.end())
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The slice of `text` this span covers, if it lies on char boundaries.
    pub fn slice<'t>(&self, text: &'t str) -> Option<&'t str> {
        text.get(self.range())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice() {
        let text = "void main() {\n  mat4 m = mat4(x);\n}\n";
        let start = text.find("mat4(x)").unwrap();
        let span = Span::new(start, start + "mat4(x)".len());
        assert_eq!(span.slice(text), Some("mat4(x)"));
        assert_eq!(span.range(), start..start + 7);
    }

    #[test]
    fn test_slice_out_of_bounds() {
        assert_eq!(Span::new(2, 9).slice("abc"), None);
    }

    #[test]
    fn test_slice_inside_multibyte_char() {
        assert_eq!(Span::new(1, 2).slice("é"), None);
    }
}
