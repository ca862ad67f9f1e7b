//! Parser configuration.

/// Parser configuration options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParserConfig {
    /// Accept a unique prefix of a long option name (`--sec` for `--second`).
    /// An exact name always wins; several prefix matches are reported as
    /// ambiguous.
    pub allow_abbreviations: bool,
    /// Treat index 0 as the program name and never classify it.
    pub skip_program_name: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            allow_abbreviations: false,
            skip_program_name: true,
        }
    }
}
