use shadow_parser::{Grammar, ParseOutcome, Parser, ParserConfig};
use shadow_syntax::DiagnosticKind;

const LONG: [&str; 5] = ["first", "second:", "select", "range::;", "third;;"];

fn parser(allow_abbreviations: bool) -> Parser {
    let grammar = Grammar::new("a", LONG).unwrap();
    Parser::with_config(
        grammar,
        ParserConfig {
            allow_abbreviations,
            ..ParserConfig::default()
        },
    )
}

fn parse(args: &[&str]) -> ParseOutcome {
    parser(false).parse(args.iter().copied())
}

#[test]
fn long_required_argument() {
    let out = parse(&["prog", "--second", "val"]);
    assert!(!out.is_invalid_commandline());
    assert_eq!(out.ast.value("second"), Some("val"));
}

#[test]
fn long_flag_without_arguments() {
    let out = parse(&["prog", "--first"]);
    assert!(!out.is_invalid_commandline());
    assert_eq!(out.ast.get("first"), Some(&[][..]));
}

#[test]
fn long_chain_with_optional_tail() {
    let out = parse(&["prog", "--range", "1", "2", "3"]);
    assert!(!out.is_invalid_commandline());
    assert_eq!(
        out.ast.get("range").map(<[String]>::to_vec),
        Some(vec!["1".to_string(), "2".to_string(), "3".to_string()])
    );

    let out = parse(&["prog", "--range", "1"]);
    assert!(out.is_invalid_commandline());
    assert_eq!(
        out.diagnostics[0].kind,
        DiagnosticKind::MissingArgument("--range".into())
    );
}

#[test]
fn long_and_short_mix() {
    let out = parse(&["prog", "--third", "x", "-a", "--second", "y"]);
    assert!(!out.is_invalid_commandline());
    let keys: Vec<_> = out.ast.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["third", "a", "second"]);
    assert_eq!(out.ast.value("third"), Some("x"));
}

#[test]
fn declaration_text_is_not_an_option_name() {
    let out = parse(&["prog", "--second:", "val"]);
    assert!(out.is_invalid_commandline());
    assert!(!out.ast.contains("second"));
}

#[test]
fn unknown_long_option_suggests_close_name() {
    let out = parse(&["prog", "--secnd", "val"]);
    assert!(out.is_invalid_commandline());
    assert!(out.ast.is_empty());
    let diag = &out.diagnostics[0];
    assert_eq!(diag.kind, DiagnosticKind::UnknownOption("--secnd".into()));
    assert_eq!(diag.suggestion.as_deref(), Some("--second"));
    assert_eq!(
        out.diagnostics[1].kind,
        DiagnosticKind::SuperfluousArgument("val".into())
    );
}

#[test]
fn long_name_with_single_dash_is_pointed_out() {
    let out = parse(&["prog", "-first"]);
    assert!(out.is_invalid_commandline());
    assert_eq!(out.diagnostics[0].suggestion.as_deref(), Some("--first"));
}

#[test]
fn abbreviations_are_off_by_default() {
    let out = parse(&["prog", "--sec", "val"]);
    assert!(out.is_invalid_commandline());
    assert!(!out.ast.contains("second"));
}

#[test]
fn unique_prefix_resolves_to_declared_name() {
    let out = parser(true).parse(["prog", "--sec", "val", "--f"]);
    assert!(!out.is_invalid_commandline());
    assert_eq!(out.ast.value("second"), Some("val"));
    assert!(out.ast.contains("first"));
    assert!(!out.ast.contains("sec"));
}

#[test]
fn shared_prefix_is_ambiguous() {
    let out = parser(true).parse(["prog", "--se", "val"]);
    assert!(out.is_invalid_commandline());
    assert!(out.ast.is_empty());
    assert_eq!(
        out.diagnostics[0].kind,
        DiagnosticKind::AmbiguousOption {
            option: "--se".into(),
            candidates: vec!["--second".into(), "--select".into()],
        }
    );
    assert_eq!(
        out.diagnostics[0].message,
        "Ambiguous parameter given: --se (could be --second, --select)"
    );
}

#[test]
fn missing_argument_names_the_declared_option() {
    let out = parser(true).parse(["prog", "--seco"]);
    assert_eq!(
        out.diagnostics[0].kind,
        DiagnosticKind::MissingArgument("--second".into())
    );
}
