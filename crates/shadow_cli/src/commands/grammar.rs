use serde_json::json;

use super::common::{build_grammar, print_json, write_lines};
use crate::args::CliArgs;

/// Validate a grammar and list its declarations with their arity bounds.
pub(crate) fn run(args: &CliArgs) -> i32 {
    let grammar = match build_grammar(args) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("{e}");
            return 2;
        }
    };
    // `options()` yields short declarations first.
    let short_count = grammar.short_names().count();
    let flag = |idx: usize, name: &str| {
        if idx < short_count {
            format!("-{name}")
        } else {
            format!("--{name}")
        }
    };

    if args.json_out {
        let options: Vec<_> = grammar
            .options()
            .enumerate()
            .map(|(idx, spec)| {
                json!({
                    "option": flag(idx, &spec.name),
                    "declaration": spec.to_string(),
                    "min_args": spec.min_args(),
                    "max_args": spec.max_args(),
                })
            })
            .collect();
        print_json(json!(options));
        return 0;
    }

    let lines = grammar.options().enumerate().map(|(idx, spec)| {
        format!(
            "{}\t{}\t{}..{}",
            flag(idx, &spec.name),
            spec,
            spec.min_args(),
            spec.max_args()
        )
    });
    match write_lines(lines) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{e}");
            2
        }
    }
}
