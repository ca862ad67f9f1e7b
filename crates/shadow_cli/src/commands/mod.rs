use serde_json::json;
use shadow_syntax::{CommandLine, Diagnostic, Severity, render_diagnostic};

pub(crate) mod common;
pub(crate) mod grammar;
pub(crate) mod parse;
pub(crate) mod tokens;

pub(crate) fn emit_diagnostics(line: &CommandLine, diagnostics: &[Diagnostic]) {
    for d in diagnostics {
        eprintln!("{}", render_diagnostic(line, d));
    }
}

pub(crate) fn diagnostic_json(d: &Diagnostic) -> serde_json::Value {
    let span = d.span.map(|s| json!({ "start": s.start.0, "end": s.end.0 }));
    json!({
        "severity": match d.severity { Severity::Warning => "warning", Severity::Notice => "notice" },
        "fatal": d.is_fatal(),
        "code": d.code,
        "message": d.message,
        "suggestion": d.suggestion,
        "span": span,
    })
}
