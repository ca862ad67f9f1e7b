//! shadow_grammar: declared option grammar and the parse output type.
//!
//! A grammar is built once from a short-option spec string (`"ab:c;"`) and a
//! list of long-option declarations (`"second:"`) and is immutable afterwards.
mod ast;
mod error;
mod grammar;
mod marker;

pub use ast::Ast;
pub use error::GrammarError;
pub use grammar::{Grammar, OptionSpec};
pub use marker::{Marker, Markers};
