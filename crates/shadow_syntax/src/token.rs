//! Token definitions.
//!
//! A token is one word of the argument vector together with the category the
//! classifier assigned to it.
use crate::{CommandLine, Span};

/// Token kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `-x`: a single dash followed by the option name.
    Short,
    /// `--name`: two dashes followed by the option name.
    Long,
    /// Anything that does not start with a dash, including the empty word.
    Value,
}

impl TokenKind {
    /// Number of leading dashes that are not part of the name.
    pub fn prefix_len(self) -> usize {
        match self {
            TokenKind::Short => 1,
            TokenKind::Long => 2,
            TokenKind::Value => 0,
        }
    }

    pub fn is_option(self) -> bool {
        !matches!(self, TokenKind::Value)
    }
}

/// Token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    /// Token kind.
    pub kind: TokenKind,
    /// Position in the argument vector.
    pub index: usize,
    /// Span in the rendered command line.
    pub span: Span,
}

impl Token {
    /// The raw word as it appeared in the argument vector.
    pub fn text<'a>(&self, line: &'a CommandLine) -> &'a str {
        line.arg(self.index).unwrap_or_default()
    }

    /// The word with its option dashes stripped.
    pub fn name<'a>(&self, line: &'a CommandLine) -> &'a str {
        let text = self.text(line);
        text.get(self.kind.prefix_len()..).unwrap_or_default()
    }
}
