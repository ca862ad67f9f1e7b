//! shadow_parser: chained-arity command-line parser.
//!
//! Walks an argument vector, matches each option against a `Grammar` and
//! pulls the following words into the option's argument list according to its
//! arity markers.
//!
//! ```
//! use shadow_grammar::Grammar;
//! use shadow_parser::Parser;
//!
//! let grammar = Grammar::new("ab::", ["second:"]).unwrap();
//! let parser = Parser::new(grammar);
//! let outcome = parser.parse(["prog", "-b", "x", "y", "--second", "val", "-a"]);
//!
//! assert!(!outcome.is_invalid_commandline());
//! assert_eq!(outcome.ast.get("b"), Some(&["x".to_string(), "y".to_string()][..]));
//! assert_eq!(outcome.ast.value("second"), Some("val"));
//! assert_eq!(outcome.ast.get("a"), Some(&[][..]));
//! ```
mod config;
mod consumer;
mod matcher;
mod parser;

pub use config::ParserConfig;
pub use parser::{ArgvError, ParseOutcome, Parser};
pub use shadow_grammar::{Ast, Grammar, GrammarError};
