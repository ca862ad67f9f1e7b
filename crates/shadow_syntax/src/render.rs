use crate::{CommandLine, Diagnostic};

/// Render one diagnostic, pointing a caret run at the offending word.
///
/// ```text
/// Warning [E0001]: prog: Invalid parameter given: -x
///   | prog -a -x
///   |         ^^
/// ```
pub fn render_diagnostic(line: &CommandLine, diag: &Diagnostic) -> String {
    let program = line.program().unwrap_or("<argv>");
    let code_str = diag.code.map(|c| format!(" [{c}]")).unwrap_or_default();
    let mut out = format!(
        "{:?}{}: {}: {}",
        diag.severity, code_str, program, diag.message
    );

    if let Some(span) = diag.span {
        let col = line.column(span.start.0) as usize;
        let width = line.slice(span).chars().count().max(1);
        out.push('\n');
        out.push_str("  | ");
        out.push_str(line.as_str());
        out.push('\n');
        out.push_str("  | ");
        out.extend(std::iter::repeat_n(' ', col));
        out.extend(std::iter::repeat_n('^', width));
    }
    if let Some(s) = &diag.suggestion {
        out.push('\n');
        out.push_str("  = suggestion: ");
        out.push_str(s);
    }
    if let Some(h) = &diag.help {
        out.push('\n');
        out.push_str("  = help: ");
        out.push_str(h);
    }
    out
}

pub fn render_diagnostics(line: &CommandLine, diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| render_diagnostic(line, d))
        .collect::<Vec<_>>()
        .join("\n")
}
