//! Textual rewrites that turn backend-specific syntax into macro hooks.

use std::sync::LazyLock;

use regex::Regex;

use super::lint::ARRAY_CONSTRUCTOR_CALL;
use super::pattern::{Pattern, Rewrite};

static INCLUDE_DIRECTIVE: Pattern =
    LazyLock::new(|| Regex::new(r"#\s*(include|pragma once)").unwrap());

/// `#include "deps.glsl"` > `//include "deps.glsl"`
static DISABLE_INCLUDES: Rewrite = Rewrite::new(&INCLUDE_DIRECTIVE, "//${1}");

static QUALIFIED_DECL: Pattern =
    LazyLock::new(|| Regex::new(r"\b(out|inout|in|shared)\s+(\w+)\s+(\w+)").unwrap());

/// `out float var[2]` > `out float _out_sta var _out_end[2]`
static DECORATE_QUALIFIED: Rewrite =
    Rewrite::new(&QUALIFIED_DECL, "${1} ${2} _${1}_sta ${3} _${1}_end");

/// `= float[2](0.0, 0.0)` > `= ARRAY_T(float) ARRAY_V(0.0, 0.0)`
static ARRAY_CONSTRUCTOR_MACROS: Rewrite =
    Rewrite::new(&ARRAY_CONSTRUCTOR_CALL, "= ARRAY_T(${1}) ARRAY_V(");

/// Comment out `#include` and `#pragma once`; other directives pass through.
pub(crate) fn disable_include_directives(text: &str) -> String {
    log::trace!("disabling {} directives", DISABLE_INCLUDES.count(text));
    DISABLE_INCLUDES.apply(text)
}

/// Wrap the identifier after `in`/`out`/`inout`/`shared <type>` in
/// qualifier-specific sentinel tokens.
pub(crate) fn decorate_qualified_names(text: &str) -> String {
    log::trace!("decorating {} names", DECORATE_QUALIFIED.count(text));
    DECORATE_QUALIFIED.apply(text)
}

/// Split `= T[size](` into the `ARRAY_T(T) ARRAY_V(` macro pair.
pub(crate) fn inject_array_constructor_macros(text: &str) -> String {
    log::trace!(
        "rewriting {} array constructors",
        ARRAY_CONSTRUCTOR_MACROS.count(text)
    );
    ARRAY_CONSTRUCTOR_MACROS.apply(text)
}
