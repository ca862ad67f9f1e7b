//! Parser.
//!
//! `Parser` holds the immutable grammar and configuration. Each call to
//! `parse` builds a fresh `Run` (consumed set, AST, diagnostics, error flag),
//! drives it over the argument vector and hands the results back by value, so
//! repeated parses never share state.
use std::ffi::OsString;

use shadow_grammar::{Ast, Grammar, GrammarError};
use shadow_lexer::Lexer;
use shadow_syntax::{CommandLine, Diagnostic, DiagnosticKind, Span, Token, TokenKind};
use thiserror::Error;

use crate::ParserConfig;

/// The argument vector itself is unusable. Unlike diagnostics this points at
/// the environment, not at what the user typed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ArgvError {
    #[error("command line argument {index} is not valid UTF-8: {lossy}")]
    NotUnicode { index: usize, lossy: String },
}

/// Result of one parse.
#[derive(Clone, Debug)]
pub struct ParseOutcome {
    pub ast: Ast,
    pub diagnostics: Vec<Diagnostic>,
    pub command_line: CommandLine,
    invalid: bool,
}

impl ParseOutcome {
    /// Whether at least one fatal mismatch occurred. The AST may still hold
    /// the options matched before and after it.
    pub fn is_invalid_commandline(&self) -> bool {
        self.invalid
    }

    pub fn fatal(&self) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.diagnostics.iter().filter(|d| d.is_fatal())
    }

    pub fn render_diagnostics(&self) -> String {
        shadow_syntax::render_diagnostics(&self.command_line, &self.diagnostics)
    }
}

/// Chained-arity command-line parser.
#[derive(Clone, Debug)]
pub struct Parser {
    grammar: Grammar,
    config: ParserConfig,
}

impl Parser {
    pub fn new(grammar: Grammar) -> Self {
        Self::with_config(grammar, ParserConfig::default())
    }

    pub fn with_config(grammar: Grammar, config: ParserConfig) -> Self {
        Self { grammar, config }
    }

    /// Shorthand for `Grammar::new` followed by `Parser::new`.
    pub fn from_spec<I, S>(short: &str, long: I) -> Result<Self, GrammarError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::new(Grammar::new(short, long)?))
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse an argument vector; index 0 is the program name.
    pub fn parse<I, S>(&self, args: I) -> ParseOutcome
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parse_line(CommandLine::new(args))
    }

    pub fn parse_line(&self, line: CommandLine) -> ParseOutcome {
        let lexed = Lexer::new(&line).lex();
        let mut run = Run::new(&self.grammar, &self.config, &line, &lexed.tokens);
        run.drive();
        let (ast, diagnostics, invalid) = run.finish();
        ParseOutcome {
            ast,
            diagnostics,
            command_line: line,
            invalid,
        }
    }

    /// Parse OS strings, failing fast on the first argument that is not UTF-8.
    pub fn parse_os<I>(&self, args: I) -> Result<ParseOutcome, ArgvError>
    where
        I: IntoIterator<Item = OsString>,
    {
        let args = args
            .into_iter()
            .enumerate()
            .map(|(index, arg)| {
                arg.into_string().map_err(|os| ArgvError::NotUnicode {
                    index,
                    lossy: os.to_string_lossy().into_owned(),
                })
            })
            .collect::<Result<Vec<String>, _>>()?;
        Ok(self.parse(args))
    }

    /// Parse the arguments of the current process.
    pub fn parse_env(&self) -> Result<ParseOutcome, ArgvError> {
        self.parse_os(std::env::args_os())
    }
}

/// Indices already matched as an option or absorbed as an argument.
pub(crate) struct ConsumedSet {
    seen: Vec<bool>,
}

impl ConsumedSet {
    fn with_len(len: usize) -> Self {
        Self {
            seen: vec![false; len],
        }
    }

    pub(crate) fn insert(&mut self, index: usize) {
        if let Some(slot) = self.seen.get_mut(index) {
            *slot = true;
        }
    }

    pub(crate) fn contains(&self, index: usize) -> bool {
        self.seen.get(index).copied().unwrap_or(false)
    }
}

/// State of a single parse.
pub(crate) struct Run<'p> {
    pub(crate) grammar: &'p Grammar,
    pub(crate) config: &'p ParserConfig,
    pub(crate) line: &'p CommandLine,
    pub(crate) tokens: &'p [Token],
    pub(crate) consumed: ConsumedSet,
    pub(crate) ast: Ast,
    diagnostics: Vec<Diagnostic>,
    invalid: bool,
}

impl<'p> Run<'p> {
    pub(crate) fn new(
        grammar: &'p Grammar,
        config: &'p ParserConfig,
        line: &'p CommandLine,
        tokens: &'p [Token],
    ) -> Self {
        Self {
            grammar,
            config,
            line,
            tokens,
            consumed: ConsumedSet::with_len(tokens.len()),
            ast: Ast::new(),
            diagnostics: Vec::new(),
            invalid: false,
        }
    }

    fn drive(&mut self) {
        let start = usize::from(self.config.skip_program_name);
        let tokens = self.tokens;
        for token in tokens.iter().skip(start) {
            if self.consumed.contains(token.index) {
                continue;
            }
            self.consumed.insert(token.index);
            match token.kind {
                TokenKind::Short => self.match_short(token),
                TokenKind::Long => self.match_long(token),
                TokenKind::Value => {
                    let word = token.text(self.line).to_string();
                    self.report(Diagnostic::new(
                        DiagnosticKind::SuperfluousArgument(word),
                        Some(token.span),
                    ));
                }
            }
        }
    }

    fn finish(self) -> (Ast, Vec<Diagnostic>, bool) {
        (self.ast, self.diagnostics, self.invalid)
    }

    pub(crate) fn span_of(&self, index: usize) -> Option<Span> {
        self.tokens.get(index).map(|t| t.span)
    }

    /// Record a diagnostic and mirror it to the log. Fatal kinds set the
    /// error flag, which is never cleared for the rest of the run.
    pub(crate) fn report(&mut self, diag: Diagnostic) {
        if diag.is_fatal() {
            self.invalid = true;
            log::warn!("{}", diag.message);
        } else {
            log::info!("{}", diag.message);
        }
        self.diagnostics.push(diag);
    }
}
