//! Classifier implementation.
//!
//! Every word is classified on its own: `--name` is a long option, `-x` a
//! short option, anything else a value. Classification never consults the
//! grammar, so it is safe to use as a lookahead while consuming arguments.
//!
//! Related: `shadow_syntax::{Token, TokenKind}`.
use shadow_syntax::{CommandLine, Token, TokenKind};

/// Lexing result.
pub struct LexResult {
    pub tokens: Vec<Token>,
}

impl LexResult {
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }
}

/// Classify a single word.
///
/// ```
/// use shadow_lexer::classify;
/// use shadow_syntax::TokenKind;
///
/// assert_eq!(classify("--out"), TokenKind::Long);
/// assert_eq!(classify("-o"), TokenKind::Short);
/// assert_eq!(classify("out"), TokenKind::Value);
/// assert_eq!(classify(""), TokenKind::Value);
/// ```
pub fn classify(word: &str) -> TokenKind {
    if word.starts_with("--") {
        TokenKind::Long
    } else if word.starts_with('-') {
        TokenKind::Short
    } else {
        TokenKind::Value
    }
}

/// Argument vector classifier.
pub struct Lexer<'a> {
    line: &'a CommandLine,
}

impl<'a> Lexer<'a> {
    pub fn new(line: &'a CommandLine) -> Self {
        Self { line }
    }

    /// Classify every word, program name included; one token per index.
    pub fn lex(self) -> LexResult {
        let tokens = self
            .line
            .args()
            .iter()
            .enumerate()
            .map(|(index, word)| Token {
                kind: classify(word),
                index,
                span: self.line.span(index).unwrap_or_default(),
            })
            .collect();
        LexResult { tokens }
    }
}
