//! Diagnostics raised while matching an argument vector.

use crate::{DiagnosticKind, DiagnosticsFormatter, Span};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// The command line is invalid.
    Warning,
    /// Advisory only; the command line stays valid.
    Notice,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    pub message: String,
    pub code: Option<&'static str>,
    pub suggestion: Option<String>,
    pub span: Option<Span>,
    pub help: Option<String>,
}

impl Diagnostic {
    /// Build a diagnostic with the severity and code implied by `kind`.
    pub fn new(kind: DiagnosticKind, span: Option<Span>) -> Self {
        Self {
            severity: kind.severity(),
            message: DiagnosticsFormatter::format(&kind),
            code: Some(kind.code()),
            kind,
            suggestion: None,
            span,
            help: None,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.kind.is_fatal()
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

pub mod codes {
    pub const UNKNOWN_OPTION: &str = "E0001";
    pub const MISSING_ARGUMENT: &str = "E0002";
    pub const AMBIGUOUS_OPTION: &str = "E0003";
    pub const SUPERFLUOUS_ARGUMENT: &str = "N0001";
}
