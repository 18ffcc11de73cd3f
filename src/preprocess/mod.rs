//! Cross-API shader source preprocessing.
//!
//! Rewrites one GLSL-dialect source so every GPU backend can consume it:
//! comments are blanked, `#include`/`#pragma once` are disabled, qualified
//! declarations get sentinel tokens, array constructors become macro pairs,
//! and group-shared variables are collected into a macro suffix for the
//! backend wrapper generator. Constructs that cannot be fixed mechanically
//! are reported through a [`ReportError`] sink.
//!
//! This is pattern matching over raw text, not a parser. Comment markers in
//! string literals, for instance, are not recognized.

mod comments;
mod lint;
mod pattern;
mod rewrite;
mod shared;
mod suffix;


pub use comments::{strip_comments, MALFORMED_BLOCK_COMMENT, MALFORMED_LINE_COMMENT};
pub use lint::{LintSet, ARRAY_CONSTRUCTOR, MATRIX_CONSTRUCTOR};
pub use shared::{extract_shared_vars, SharedVar};
pub use suffix::{shared_vars_suffix, ARGS_MACRO, ASSIGN_MACRO, DECLARE_MACRO, PASS_MACRO};

use crate::diagnostic::{NoReport, ReportError};

/// Feature toggles for one run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreprocessOptions {
    /// Run the constructor checks in `lints`.
    pub linting: bool,
    /// Reserved; no pass reads it yet.
    pub string_mutation: bool,
    /// Reserved; include directives are always disabled.
    pub include_mutation: bool,
    pub lints: LintSet,
}

impl PreprocessOptions {
    /// Options for strictly checked sources: every lint enabled.
    pub fn strict() -> Self {
        Self {
            linting: true,
            string_mutation: true,
            include_mutation: true,
            lints: LintSet::ALL,
        }
    }

    fn active_lints(&self) -> LintSet {
        if self.linting {
            self.lints
        } else {
            LintSet::NONE
        }
    }
}

/// Relaxed profile, for sources authored at runtime.
impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            linting: false,
            string_mutation: false,
            include_mutation: false,
            lints: LintSet::ALL,
        }
    }
}

/// State owned by a single run. Built fresh by every [`process`] call.
struct PipelineContext {
    source: String,
    shared_vars: Vec<SharedVar>,
}

impl PipelineContext {
    fn new(source: String) -> Self {
        Self {
            source,
            shared_vars: Vec::new(),
        }
    }

    /// Replace the current text with the output of a rewriting pass.
    fn rewrite(&mut self, pass: &str, f: impl FnOnce(&str) -> String) {
        let next = f(&self.source);
        log::debug!("{}: {} -> {} bytes", pass, self.source.len(), next.len());
        self.source = next;
    }

    fn finish(self) -> String {
        let mut out = self.source;
        out.push_str(&shared_vars_suffix(&self.shared_vars));
        out
    }
}

/// Run the whole pipeline over `source`.
///
/// Always returns text. Diagnostics go to `report` and never stop the run;
/// whether any of them is fatal is up to the caller.
pub fn process(source: &str, options: &PreprocessOptions, report: &mut impl ReportError) -> String {
    let mut ctx = PipelineContext::new(comments::strip_comments(source, report));

    // Extraction must see `shared` declarations before they are decorated.
    ctx.shared_vars = extract_shared_vars(&ctx.source);
    log::debug!("found {} shared variables", ctx.shared_vars.len());

    lint::lint_constructors(&ctx.source, options.active_lints(), report);

    ctx.rewrite("directives", rewrite::disable_include_directives);
    ctx.rewrite("qualifiers", rewrite::decorate_qualified_names);
    ctx.rewrite("array constructors", rewrite::inject_array_constructor_macros);

    ctx.finish()
}

/// [`process`] with linting off and diagnostics discarded.
pub fn process_relaxed(source: &str) -> String {
    process(source, &PreprocessOptions::default(), &mut NoReport)
}
