use shadow_syntax::{
    CommandLine, Diagnostic, DiagnosticKind, Severity, edit_distance, find_best_match,
    render_diagnostic,
};

#[test]
fn spans_cover_rendered_words() {
    let line = CommandLine::new(["prog", "-a", "", "it's"]);
    assert_eq!(line.as_str(), "prog -a '' 'it'\\''s'");
    assert_eq!(line.slice(line.span(1).unwrap()), "-a");
    assert_eq!(line.slice(line.span(2).unwrap()), "''");
    assert_eq!(line.arg(3), Some("it's"));
    assert_eq!(line.span(4), None);
}

#[test]
fn columns_count_chars_not_bytes() {
    let line = CommandLine::new(["prög", "-x"]);
    let span = line.span(1).unwrap();
    assert_eq!(span.start.0, 6);
    assert_eq!(line.column(span.start.0), 5);
}

#[test]
fn diagnostic_kind_drives_severity_and_message() {
    let fatal = Diagnostic::new(DiagnosticKind::MissingArgument("-a".into()), None);
    assert_eq!(fatal.severity, Severity::Warning);
    assert!(fatal.is_fatal());
    assert_eq!(fatal.message, "Missing argument for -a");

    let advisory = Diagnostic::new(DiagnosticKind::SuperfluousArgument("x".into()), None);
    assert_eq!(advisory.severity, Severity::Notice);
    assert!(!advisory.is_fatal());
}

#[test]
fn render_without_span_is_one_line_plus_notes() {
    let line = CommandLine::new(["prog"]);
    let diag = Diagnostic::new(DiagnosticKind::UnknownOption("-ab".into()), None)
        .with_help("short options cannot be grouped; pass each one separately");
    assert_eq!(
        render_diagnostic(&line, &diag),
        "Warning [E0001]: prog: Invalid parameter given: -ab\n  = help: short options cannot be grouped; pass each one separately"
    );
}

#[test]
fn best_match_respects_distance_limit() {
    assert_eq!(edit_distance("second", "secnod"), 2);
    assert_eq!(edit_distance("", "abc"), 3);
    let names = ["first", "second", "verbose"];
    assert_eq!(find_best_match("verbos", names.into_iter()), Some("verbose"));
    assert_eq!(find_best_match("zzz", names.into_iter()), None);
}
