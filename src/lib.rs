pub mod config;
pub mod diagnostic;
pub mod preprocess;
pub mod span;

// Re-exports: `glsl_xapi::process()` etc. for callers that only need the pipeline
pub use config::project;
pub use diagnostic::{Diagnostic, NoReport, ReportError, Severity};
pub use preprocess::{process, process_relaxed, PreprocessOptions};
