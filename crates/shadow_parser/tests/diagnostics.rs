use shadow_parser::Parser;
use shadow_syntax::{Severity, codes};

#[test]
fn severities_and_codes() {
    let parser = Parser::from_spec("a:", ["out:"]).unwrap();
    let out = parser.parse(["prog", "loose", "-x", "-a"]);

    let summary: Vec<_> = out
        .diagnostics
        .iter()
        .map(|d| (d.severity, d.code))
        .collect();
    assert_eq!(
        summary,
        [
            (Severity::Notice, Some(codes::SUPERFLUOUS_ARGUMENT)),
            (Severity::Warning, Some(codes::UNKNOWN_OPTION)),
            (Severity::Warning, Some(codes::MISSING_ARGUMENT)),
        ]
    );
    assert_eq!(out.fatal().count(), 2);
}

#[test]
fn superfluous_top_level_word_is_advisory() {
    let parser = Parser::from_spec("a", Vec::<&str>::new()).unwrap();
    let out = parser.parse(["prog", "loose"]);
    assert!(out.ast.is_empty());
    assert!(!out.is_invalid_commandline());
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(out.diagnostics[0].message, "Superfluous argument: loose");
}

#[test]
fn rendered_diagnostic_points_at_word() {
    let parser = Parser::from_spec("a", Vec::<&str>::new()).unwrap();
    let out = parser.parse(["prog", "-a", "-x"]);
    let rendered = out.render_diagnostics();
    assert_eq!(
        rendered,
        "Warning [E0001]: prog: Invalid parameter given: -x\n  | prog -a -x\n  |         ^^"
    );
}

#[test]
fn rendered_diagnostic_includes_suggestion() {
    let parser = Parser::from_spec("", ["verbose"]).unwrap();
    let out = parser.parse(["prog", "--verbos"]);
    let rendered = out.render_diagnostics();
    assert!(rendered.contains("Invalid parameter given: --verbos"), "{rendered}");
    assert!(rendered.contains("  = suggestion: --verbose"), "{rendered}");
}

#[test]
fn quoted_words_keep_caret_alignment() {
    let parser = Parser::from_spec("a:", Vec::<&str>::new()).unwrap();
    let out = parser.parse(["prog", "-a", "x", "two words"]);
    let rendered = out.render_diagnostics();
    assert!(rendered.contains("  | prog -a x 'two words'"), "{rendered}");
    assert!(rendered.ends_with("  |           ^^^^^^^^^^^"), "{rendered}");
}

#[cfg(unix)]
#[test]
fn non_utf8_argument_fails_fast() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    use shadow_parser::ArgvError;

    let parser = Parser::from_spec("a", Vec::<&str>::new()).unwrap();
    let args = vec![
        OsString::from("prog"),
        OsString::from_vec(vec![b'-', 0xff]),
    ];
    let err = parser.parse_os(args).unwrap_err();
    assert_eq!(
        err,
        ArgvError::NotUnicode {
            index: 1,
            lossy: "-\u{FFFD}".into()
        }
    );
}
