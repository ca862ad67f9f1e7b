//! Short/long option resolution.
use shadow_grammar::Marker;
use shadow_syntax::{Diagnostic, DiagnosticKind, Token, find_best_match};

use crate::parser::Run;

/// Outcome of looking up a long option name.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum LongMatch<'g> {
    Found(&'g str, &'g [Marker]),
    Ambiguous(Vec<&'g str>),
    Unknown,
}

impl<'p> Run<'p> {
    pub(crate) fn match_short(&mut self, token: &Token) {
        let line = self.line;
        let grammar = self.grammar;
        let name = token.name(line);

        let mut chars = name.chars();
        let found = match (chars.next(), chars.next()) {
            (Some(c), None) => grammar.short(c),
            _ => None,
        };
        let Some(markers) = found else {
            self.unknown_short(token, name);
            return;
        };

        log::trace!("matched -{name} at {} ({} markers)", token.index, markers.len());
        self.ast.open(name);
        self.consume_arguments(name, token.text(line), token.index, markers);
    }

    pub(crate) fn match_long(&mut self, token: &Token) {
        let line = self.line;
        let name = token.name(line);

        match self.resolve_long(name) {
            LongMatch::Found(canonical, markers) => {
                log::trace!(
                    "matched --{canonical} at {} ({} markers)",
                    token.index,
                    markers.len()
                );
                self.ast.open(canonical);
                let display = format!("--{canonical}");
                self.consume_arguments(canonical, &display, token.index, markers);
            }
            LongMatch::Ambiguous(candidates) => {
                let kind = DiagnosticKind::AmbiguousOption {
                    option: token.text(line).to_string(),
                    candidates: candidates.iter().map(|c| format!("--{c}")).collect(),
                };
                self.report(Diagnostic::new(kind, Some(token.span)));
            }
            LongMatch::Unknown => {
                let mut diag = Diagnostic::new(
                    DiagnosticKind::UnknownOption(token.text(line).to_string()),
                    Some(token.span),
                );
                if let Some(best) = find_best_match(name, self.grammar.long_names()) {
                    diag = diag.with_suggestion(format!("--{best}"));
                }
                self.report(diag);
            }
        }
    }

    /// Exact names win. Prefixes only count when abbreviations are enabled
    /// and must then be unique.
    pub(crate) fn resolve_long(&self, name: &str) -> LongMatch<'p> {
        let grammar = self.grammar;
        if name.is_empty() {
            return LongMatch::Unknown;
        }
        if let Some((canonical, markers)) = grammar.long_entries().find(|(n, _)| *n == name) {
            return LongMatch::Found(canonical, markers);
        }
        if !self.config.allow_abbreviations {
            return LongMatch::Unknown;
        }

        let mut prefixed: Vec<(&'p str, &'p [Marker])> = grammar
            .long_entries()
            .filter(|(n, _)| n.starts_with(name))
            .collect();
        match prefixed.len() {
            0 => LongMatch::Unknown,
            1 => {
                let (canonical, markers) = prefixed.remove(0);
                LongMatch::Found(canonical, markers)
            }
            _ => LongMatch::Ambiguous(prefixed.into_iter().map(|(n, _)| n).collect()),
        }
    }

    fn unknown_short(&mut self, token: &Token, name: &str) {
        let grammar = self.grammar;
        let mut diag = Diagnostic::new(
            DiagnosticKind::UnknownOption(token.text(self.line).to_string()),
            Some(token.span),
        );
        if name.chars().count() > 1 {
            if grammar.long(name).is_some() {
                diag = diag.with_suggestion(format!("--{name}"));
            } else if name.chars().all(|c| grammar.short(c).is_some()) {
                diag = diag.with_help("short options cannot be grouped; pass each one separately");
            }
        }
        self.report(diag);
    }
}
