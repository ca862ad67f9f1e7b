use serde_json::json;
use shadow_lexer::Lexer;

use super::common::{command_line, print_json, write_lines};
use crate::args::CliArgs;

/// Print how each word of the vector is classified, program name included.
pub(crate) fn run(args: &CliArgs) -> i32 {
    let line = command_line(args);
    let lexed = Lexer::new(&line).lex();

    if args.json_out {
        let tokens: Vec<_> = lexed
            .tokens
            .iter()
            .map(|t| {
                json!({
                    "index": t.index,
                    "kind": format!("{:?}", t.kind),
                    "text": t.text(&line),
                    "name": t.name(&line),
                })
            })
            .collect();
        print_json(json!(tokens));
        return 0;
    }

    let lines = lexed
        .tokens
        .iter()
        .map(|t| format!("{}\t{:?}\t{}", t.index, t.kind, line.slice(t.span)));
    match write_lines(lines) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{e}");
            2
        }
    }
}
