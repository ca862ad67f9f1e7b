//! Argument consumption.
//!
//! Walks an option's marker sequence once, taking at most one following word
//! per marker, so the number of steps is bounded by the marker count.
use shadow_grammar::Marker;
use shadow_lexer::classify;
use shadow_syntax::{Diagnostic, DiagnosticKind, TokenKind};

use crate::parser::Run;

impl<'p> Run<'p> {
    /// Pull the words following the option at `index` into `key`'s argument
    /// list. `display` is the option as shown in diagnostics (`-a`, `--out`).
    pub(crate) fn consume_arguments(
        &mut self,
        key: &str,
        display: &str,
        index: usize,
        markers: &[Marker],
    ) {
        if markers.is_empty() {
            self.reject_trailing_value(index + 1);
            return;
        }

        let mut next = index + 1;
        for (step, &current) in markers.iter().enumerate() {
            let Some(value) = self.candidate(next) else {
                if current.is_required() {
                    let span = self.span_of(index);
                    self.report(Diagnostic::new(
                        DiagnosticKind::MissingArgument(display.to_string()),
                        span,
                    ));
                }
                return;
            };

            self.ast.push(key, value);
            self.consumed.insert(next);
            next += 1;

            match markers.get(step + 1) {
                Some(&following) if current.chains_into(following) => {}
                _ => return,
            }
        }
    }

    /// The word at `index` if it can serve as an option argument: present,
    /// not yet consumed, non-empty and not shaped like an option.
    fn candidate(&self, index: usize) -> Option<&'p str> {
        if self.consumed.contains(index) {
            return None;
        }
        let line = self.line;
        let word = line.arg(index)?;
        (!word.is_empty() && classify(word) == TokenKind::Value).then_some(word)
    }

    /// A plain word right after an option that takes no arguments is reported
    /// once here and then skipped by the driver. Option-shaped words are left
    /// for the driver to match.
    fn reject_trailing_value(&mut self, index: usize) {
        let line = self.line;
        let Some(word) = line.arg(index) else {
            return;
        };
        if self.consumed.contains(index) || classify(word) != TokenKind::Value {
            return;
        }
        self.consumed.insert(index);
        let span = self.span_of(index);
        self.report(Diagnostic::new(
            DiagnosticKind::SuperfluousArgument(word.to_string()),
            span,
        ));
    }
}
