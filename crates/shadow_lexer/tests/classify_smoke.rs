use shadow_lexer::Lexer;
use shadow_syntax::{CommandLine, TokenKind};

#[test]
fn classify_smoke_mixed_vector() {
    let line = CommandLine::new(["prog", "-a", "value", "--second", "", "-", "--"]);
    let result = Lexer::new(&line).lex();
    let kinds: Vec<_> = result.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::Value,
            TokenKind::Short,
            TokenKind::Value,
            TokenKind::Long,
            TokenKind::Value,
            TokenKind::Short,
            TokenKind::Long,
        ]
    );
}

#[test]
fn names_strip_option_dashes() {
    let line = CommandLine::new(["prog", "-a", "--second", "-", "--", "---x"]);
    let result = Lexer::new(&line).lex();
    let names: Vec<_> = result.tokens.iter().map(|t| t.name(&line)).collect();
    assert_eq!(names, ["prog", "a", "second", "", "", "-x"]);
}

#[test]
fn tokens_carry_index_and_span() {
    let line = CommandLine::new(["prog", "-a", "two words"]);
    let result = Lexer::new(&line).lex();
    let tok = result.get(2).unwrap();
    assert_eq!(tok.index, 2);
    assert_eq!(tok.kind, TokenKind::Value);
    assert_eq!(line.slice(tok.span), "'two words'");
    assert_eq!(tok.text(&line), "two words");
}

#[test]
fn empty_vector_yields_no_tokens() {
    let line = CommandLine::new(Vec::<String>::new());
    assert!(Lexer::new(&line).lex().tokens.is_empty());
}
