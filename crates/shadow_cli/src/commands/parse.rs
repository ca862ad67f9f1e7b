use serde_json::json;
use shadow_parser::{Parser, ParserConfig};

use super::common::{build_grammar, command_line, print_json, write_lines};
use super::{diagnostic_json, emit_diagnostics};
use crate::args::CliArgs;

pub(crate) fn run(args: &CliArgs) -> i32 {
    let grammar = match build_grammar(args) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("{e}");
            return 2;
        }
    };
    let config = ParserConfig {
        allow_abbreviations: args.abbrev,
        ..ParserConfig::default()
    };
    let parser = Parser::with_config(grammar, config);
    let outcome = parser.parse_line(command_line(args));
    log::debug!(
        "parsed {} words into {} options",
        outcome.command_line.len(),
        outcome.ast.len()
    );

    if args.json_out {
        let diagnostics: Vec<_> = outcome.diagnostics.iter().map(diagnostic_json).collect();
        print_json(json!({
            "valid": !outcome.is_invalid_commandline(),
            "options": outcome.ast,
            "diagnostics": diagnostics,
        }));
    } else {
        if !args.no_diags {
            emit_diagnostics(&outcome.command_line, &outcome.diagnostics);
        }
        let lines = outcome
            .ast
            .iter()
            .map(|(name, values)| format!("{name} = {values:?}"));
        if let Err(e) = write_lines(lines) {
            eprintln!("{e}");
            return 2;
        }
    }

    i32::from(outcome.is_invalid_commandline())
}
