//! shadow_syntax: shared vocabulary of the command-line parser.
//!
//! Holds the rendered command line, token kinds, diagnostics and their
//! rendering. Every other crate in the workspace builds on these types.
mod diagnostic;
mod loc;
mod render;
mod source;
mod span;
mod token;
mod util;

pub use diagnostic::{Diagnostic, Severity, codes};
pub use loc::{DiagnosticKind, DiagnosticsFormatter};
pub use render::{render_diagnostic, render_diagnostics};
pub use source::CommandLine;
pub use span::{ByteIndex, Span};
pub use token::{Token, TokenKind};
pub use util::{edit_distance, find_best_match};
