use std::ops::Range;

use crate::span::Span;

/// A preprocessor diagnostic, owned so it can outlive the run that produced it.
///
/// The pipeline itself never classifies findings; `severity` starts out as
/// `Warning` and the caller raises it when its policy says so.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub span: Option<Span>,
    /// The text the reporting pass was looking at. `span` indexes into this.
    pub snapshot: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Diagnostic {
    pub fn new(snapshot: &str, span: Option<Span>, message: &str) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.to_string(),
            span,
            snapshot: snapshot.to_string(),
        }
    }

    /// An error that is not tied to any shader text (I/O, configuration).
    pub fn error(message: String) -> Self {
        Self {
            severity: Severity::Error,
            message,
            span: None,
            snapshot: String::new(),
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// The matched text, when the diagnostic carries a span.
    pub fn matched(&self) -> Option<&str> {
        self.span.and_then(|s| s.slice(&self.snapshot))
    }

    /// Render the diagnostic to stderr using ariadne.
    pub fn render(&self, filename: &str) {
        use ariadne::{Color, Label, Report, ReportKind, Source};

        if self.span.is_none() && self.snapshot.is_empty() {
            let label = match self.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            eprintln!("{}: {}", label, self.message);
            return;
        }

        let (kind, color) = match self.severity {
            Severity::Error => (ReportKind::Error, Color::Red),
            Severity::Warning => (ReportKind::Warning, Color::Yellow),
        };

        let offset = self.span.map_or(0, |s| s.start);
        let mut report = Report::<(&str, Range<usize>)>::build(kind, filename, offset)
            .with_message(&self.message);
        if let Some(span) = self.span {
            report = report.with_label(
                Label::new((filename, span.range()))
                    .with_message(&self.message)
                    .with_color(color),
            );
        }

        if let Err(e) = report
            .finish()
            .eprint((filename, Source::from(self.snapshot.as_str())))
        {
            log::warn!("cannot render diagnostic for '{}': {}", filename, e);
        }
    }
}

/// Render a list of diagnostics.
pub fn render_diagnostics(diagnostics: &[Diagnostic], filename: &str) {
    for diag in diagnostics {
        diag.render(filename);
    }
}

/// Capability the pipeline uses to hand out findings.
///
/// Reporting is side-effect only: there is no return value, so a sink has no
/// way to stop a run.
pub trait ReportError {
    fn report(&mut self, snapshot: &str, span: Option<Span>, message: &str);
}

impl<F> ReportError for F
where
    F: FnMut(&str, Option<Span>, &str),
{
    fn report(&mut self, snapshot: &str, span: Option<Span>, message: &str) {
        self(snapshot, span, message)
    }
}

impl ReportError for Vec<Diagnostic> {
    fn report(&mut self, snapshot: &str, span: Option<Span>, message: &str) {
        self.push(Diagnostic::new(snapshot, span, message));
    }
}

/// Sink that drops everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoReport;

impl ReportError for NoReport {
    fn report(&mut self, _snapshot: &str, _span: Option<Span>, _message: &str) {}
}
