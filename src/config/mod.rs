//! Project configuration.

pub mod project;
