use thiserror::Error;

/// A grammar that cannot be used. These are caller defects, not user input
/// errors, so construction fails instead of producing diagnostics.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GrammarError {
    #[error("arity marker '{marker}' at position {position} of {spec:?} does not follow an option")]
    MarkerWithoutOption {
        spec: String,
        marker: char,
        position: usize,
    },
    #[error("'{0}' cannot be used as a short option")]
    InvalidShortOption(char),
    #[error("long option declaration {0:?} has no name")]
    EmptyLongName(String),
    #[error("long option name {0:?} must be declared without dashes or whitespace")]
    InvalidLongName(String),
    #[error("unexpected text after arity markers in {0:?}")]
    TrailingText(String),
    #[error("option '{0}' is declared more than once")]
    DuplicateOption(String),
}
