//! Diagnostic rendering for failed validations.
//!
//! Turns a [`ValidationFailure`] into the numbered, human-readable
//! remediation text shown to the user. Rendering is pure and deterministic:
//! the same failure and options always produce byte-identical output, and it
//! never fails. An empty failure list renders as just the header. The
//! library returns the string; printing it is the caller's business.

use crate::validator::ValidationFailure;

mod default;

pub use default::DefaultDiagnosticFormatter;

/// Rendering options for diagnostics.
///
/// The default (everything off) is the canonical output used for comparison
/// in tests and by the CLI when stdout is not a terminal.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Whether to describe each parameter's fallback expression after the
    /// `-OR-` separator instead of leaving the alternative implicit.
    pub include_expressions: bool,
    /// Whether to use ANSI color in the output.
    pub use_color: bool,
}

/// Trait for rendering a validation failure into user-facing text.
pub trait DiagnosticFormatter {
    /// Renders with explicit options.
    fn format_failure(&self, failure: &ValidationFailure<'_>, options: &FormatOptions) -> String;

    /// Renders with default options.
    fn format(&self, failure: &ValidationFailure<'_>) -> String {
        self.format_failure(failure, &FormatOptions::default())
    }
}
