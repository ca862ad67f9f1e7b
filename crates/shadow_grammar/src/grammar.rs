//! Grammar representation.
//!
//! Short options live in a char-keyed map, long options in a name-keyed map;
//! both keep declaration order so lookups and error messages are stable.
use std::fmt;

use indexmap::IndexMap;

use crate::{GrammarError, Marker, Markers};

/// One declared option: its name and the arity markers that follow it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionSpec {
    pub name: String,
    pub markers: Markers,
}

impl OptionSpec {
    /// Parse a long-option declaration such as `"second:"` or `"third::;"`.
    pub fn parse_long(decl: &str) -> Result<Self, GrammarError> {
        let name_end = decl.find(|c| Marker::from_char(c).is_some()).unwrap_or(decl.len());
        let (name, rest) = decl.split_at(name_end);

        if name.is_empty() {
            return match rest.chars().next() {
                Some(marker) => Err(GrammarError::MarkerWithoutOption {
                    spec: decl.to_string(),
                    marker,
                    position: 0,
                }),
                None => Err(GrammarError::EmptyLongName(decl.to_string())),
            };
        }
        if name.starts_with('-') || name.chars().any(char::is_whitespace) {
            return Err(GrammarError::InvalidLongName(name.to_string()));
        }

        let markers = rest
            .chars()
            .map(Marker::from_char)
            .collect::<Option<Markers>>()
            .ok_or_else(|| GrammarError::TrailingText(decl.to_string()))?;

        Ok(Self {
            name: name.to_string(),
            markers,
        })
    }

    /// Arguments that must be present for the option to be valid.
    pub fn min_args(&self) -> usize {
        self.markers.iter().take_while(|m| m.is_required()).count()
    }

    pub fn max_args(&self) -> usize {
        self.markers.len()
    }
}

impl fmt::Display for OptionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for m in &self.markers {
            write!(f, "{}", m.as_char())?;
        }
        Ok(())
    }
}

/// The declared set of valid short and long options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grammar {
    short: IndexMap<char, Markers>,
    long: IndexMap<String, Markers>,
}

impl Grammar {
    /// Build a grammar from a short-option spec string and long declarations.
    ///
    /// ```
    /// use shadow_grammar::Grammar;
    ///
    /// let grammar = Grammar::new("ab:c;", ["first", "second:"]).unwrap();
    /// assert_eq!(grammar.short('b').map(|m| m.len()), Some(1));
    /// assert!(grammar.long("second").is_some());
    /// ```
    pub fn new<I, S>(short: &str, long: I) -> Result<Self, GrammarError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut grammar = Self {
            short: parse_short_spec(short)?,
            long: IndexMap::new(),
        };
        for decl in long {
            let spec = OptionSpec::parse_long(decl.as_ref())?;
            if grammar.long.contains_key(&spec.name) {
                return Err(GrammarError::DuplicateOption(spec.name));
            }
            grammar.long.insert(spec.name, spec.markers);
        }
        Ok(grammar)
    }

    pub fn short(&self, option: char) -> Option<&[Marker]> {
        self.short.get(&option).map(|m| m.as_slice())
    }

    pub fn long(&self, name: &str) -> Option<&[Marker]> {
        self.long.get(name).map(|m| m.as_slice())
    }

    pub fn short_names(&self) -> impl Iterator<Item = char> + '_ {
        self.short.keys().copied()
    }

    pub fn long_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.long.keys().map(String::as_str)
    }

    pub fn long_entries(&self) -> impl Iterator<Item = (&str, &[Marker])> + '_ {
        self.long.iter().map(|(n, m)| (n.as_str(), m.as_slice()))
    }

    /// All declarations, short options first, in declaration order.
    pub fn options(&self) -> impl Iterator<Item = OptionSpec> + '_ {
        let short = self.short.iter().map(|(c, m)| OptionSpec {
            name: c.to_string(),
            markers: m.clone(),
        });
        let long = self.long.iter().map(|(n, m)| OptionSpec {
            name: n.clone(),
            markers: m.clone(),
        });
        short.chain(long)
    }

    pub fn is_empty(&self) -> bool {
        self.short.is_empty() && self.long.is_empty()
    }
}

fn parse_short_spec(spec: &str) -> Result<IndexMap<char, Markers>, GrammarError> {
    let mut short: IndexMap<char, Markers> = IndexMap::new();
    let mut current: Option<char> = None;

    for (position, c) in spec.chars().enumerate() {
        if let Some(marker) = Marker::from_char(c) {
            let Some(option) = current else {
                return Err(GrammarError::MarkerWithoutOption {
                    spec: spec.to_string(),
                    marker: c,
                    position,
                });
            };
            if let Some(markers) = short.get_mut(&option) {
                markers.push(marker);
            }
            continue;
        }
        if c == '-' || c.is_whitespace() {
            return Err(GrammarError::InvalidShortOption(c));
        }
        if short.insert(c, Markers::new()).is_some() {
            return Err(GrammarError::DuplicateOption(c.to_string()));
        }
        current = Some(c);
    }

    Ok(short)
}
