//! Constructor syntax that does not translate to every backend.
//!
//! Both checks are best effort: they report what they see and leave the text
//! alone. Anything they miss is left to the backend shader compilers.

use std::sync::LazyLock;

use regex::Regex;

use super::pattern::{scan, Pattern};
use crate::diagnostic::ReportError;

pub const MATRIX_CONSTRUCTOR: &str = "Matrix constructor is not cross API compatible. \
     Use to_floatNxM to reshape the matrix or use other constructors instead.";
pub const ARRAY_CONSTRUCTOR: &str =
    "Array constructor is not cross API compatible. Use type_array instead of type[].";

/// `mat4(other)`: a single argument with no comma, space or digit is most
/// likely another matrix being reshaped.
static MATRIX_RESHAPE: Pattern = LazyLock::new(|| {
    Regex::new(r"\b(mat(?:\d|\dx\d)|float\dx\d)\([^,\s\d]+\)").unwrap()
});

/// `= float[2](`
pub(crate) static ARRAY_CONSTRUCTOR_CALL: Pattern =
    LazyLock::new(|| Regex::new(r"=\s*(\w+)\s*\[[^\]]*\]\s*\(").unwrap());

/// Which checks run when linting is enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LintSet {
    pub matrix_constructor: bool,
    pub array_constructor: bool,
}

impl LintSet {
    pub const ALL: LintSet = LintSet {
        matrix_constructor: true,
        array_constructor: true,
    };

    pub const NONE: LintSet = LintSet {
        matrix_constructor: false,
        array_constructor: false,
    };

    /// Look a check up by its configuration name.
    pub fn enable(&mut self, name: &str) -> bool {
        match name {
            "matrix-constructor" => self.matrix_constructor = true,
            "array-constructor" => self.array_constructor = true,
            _ => return false,
        }
        true
    }
}

impl Default for LintSet {
    fn default() -> Self {
        Self::ALL
    }
}

/// Run the enabled checks over `text`. Spans index into `text`.
pub(crate) fn lint_constructors(text: &str, lints: LintSet, report: &mut impl ReportError) {
    if lints.matrix_constructor {
        lint_matrix_constructors(text, report);
    }
    if lints.array_constructor {
        lint_array_constructors(text, report);
    }
}

fn lint_matrix_constructors(text: &str, report: &mut impl ReportError) {
    for hit in scan(&MATRIX_RESHAPE, text) {
        log::trace!("matrix reshape at {:?}", hit.span);
        report.report(text, Some(hit.span), MATRIX_CONSTRUCTOR);
    }
}

fn lint_array_constructors(text: &str, report: &mut impl ReportError) {
    for hit in scan(&ARRAY_CONSTRUCTOR_CALL, text) {
        log::trace!("array constructor at {:?}", hit.span);
        report.report(text, Some(hit.span), ARRAY_CONSTRUCTOR);
    }
}
