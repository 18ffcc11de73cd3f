//! Group-shared (`threadgroup`) variable extraction.

use std::sync::LazyLock;

use regex::Regex;

use super::pattern::{scan, Pattern};

static SHARED_DECL: Pattern =
    LazyLock::new(|| Regex::new(r"\bshared\s+(\w+)\s+(\w+)([^;]*);").unwrap());

/// One `shared <type> <name><array>;` declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SharedVar {
    pub ty: String,
    pub name: String,
    /// Raw text between the name and the `;`, e.g. `[10]`. Empty for scalars.
    pub array: String,
}

impl SharedVar {
    pub fn new(ty: &str, name: &str, array: &str) -> Self {
        Self {
            ty: ty.to_string(),
            name: name.to_string(),
            array: array.to_string(),
        }
    }
}

/// Every shared declaration in `text`, in source order. Duplicates are kept.
pub fn extract_shared_vars(text: &str) -> Vec<SharedVar> {
    scan(&SHARED_DECL, text)
        .map(|hit| {
            let var = SharedVar::new(hit.group(1), hit.group(2), hit.group(3));
            log::trace!("shared var {} {}{}", var.ty, var.name, var.array);
            var
        })
        .collect()
}
