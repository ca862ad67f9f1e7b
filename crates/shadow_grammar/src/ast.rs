use indexmap::IndexMap;
use serde::Serialize;

/// Parse output: option name (without dashes) to the arguments consumed for it.
///
/// Entries keep the order in which options were first matched. An empty list
/// means the option was given without arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Ast(IndexMap<String, Vec<String>>);

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the argument list of a matched option.
    ///
    /// A repeated option keeps the position of its first match but drops the
    /// arguments collected for the earlier occurrence.
    pub fn open(&mut self, name: &str) {
        match self.0.get_mut(name) {
            Some(values) => values.clear(),
            None => {
                self.0.insert(name.to_string(), Vec::new());
            }
        }
    }

    /// Append an argument to an option opened earlier; unknown names are ignored.
    pub fn push(&mut self, name: &str, value: impl Into<String>) {
        if let Some(values) = self.0.get_mut(name) {
            values.push(value.into());
        }
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.0.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// First argument of an option, the common case for single-value options.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|v| v.first()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn into_inner(self) -> IndexMap<String, Vec<String>> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Ast {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = indexmap::map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
