//! shadow_lexer: token classifier.
//!
//! Splits an argument vector into short options, long options and values.
//! Entry points: `Lexer::new(&line).lex()` and `classify`.
mod lexer;

pub use lexer::{LexResult, Lexer, classify};
