use std::io::Write;

use shadow_grammar::Grammar;
use shadow_syntax::CommandLine;

use crate::args::CliArgs;

pub fn build_grammar(args: &CliArgs) -> Result<Grammar, String> {
    Grammar::new(&args.short, &args.long).map_err(|e| format!("Invalid grammar: {e}"))
}

/// The vector under test, with the configured program name at index 0.
pub fn command_line(args: &CliArgs) -> CommandLine {
    CommandLine::new(std::iter::once(args.prog.as_str()).chain(args.argv.iter().map(String::as_str)))
}

pub fn print_json(obj: serde_json::Value) {
    println!("{obj}");
}

/// Write lines to stdout; a closed pipe ends output quietly.
pub fn write_lines(lines: impl IntoIterator<Item = String>) -> Result<(), String> {
    let mut out = std::io::stdout().lock();
    for line in lines {
        if let Err(e) = writeln!(out, "{line}") {
            if e.kind() == std::io::ErrorKind::BrokenPipe {
                return Ok(());
            }
            return Err(format!("stdout error: {e}"));
        }
    }
    Ok(())
}
