use crate::Severity;
use crate::diagnostic::codes;

/// Everything the parser can complain about while walking an argument vector.
///
/// Option payloads are the word as the user typed it, dashes included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    UnknownOption(String),
    AmbiguousOption {
        option: String,
        candidates: Vec<String>,
    },
    MissingArgument(String),
    SuperfluousArgument(String),
}

impl DiagnosticKind {
    /// Fatal kinds mark the whole command line invalid.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, DiagnosticKind::SuperfluousArgument(_))
    }

    pub fn severity(&self) -> Severity {
        if self.is_fatal() {
            Severity::Warning
        } else {
            Severity::Notice
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::UnknownOption(_) => codes::UNKNOWN_OPTION,
            DiagnosticKind::MissingArgument(_) => codes::MISSING_ARGUMENT,
            DiagnosticKind::AmbiguousOption { .. } => codes::AMBIGUOUS_OPTION,
            DiagnosticKind::SuperfluousArgument(_) => codes::SUPERFLUOUS_ARGUMENT,
        }
    }
}

pub struct DiagnosticsFormatter;

impl DiagnosticsFormatter {
    pub fn format(kind: &DiagnosticKind) -> String {
        match kind {
            DiagnosticKind::UnknownOption(opt) => format!("Invalid parameter given: {opt}"),
            DiagnosticKind::AmbiguousOption { option, candidates } => format!(
                "Ambiguous parameter given: {option} (could be {})",
                candidates.join(", ")
            ),
            DiagnosticKind::MissingArgument(opt) => format!("Missing argument for {opt}"),
            DiagnosticKind::SuperfluousArgument(arg) => format!("Superfluous argument: {arg}"),
        }
    }
}
