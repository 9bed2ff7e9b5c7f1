//! Directive element nodes
//!
//! A directive is a named block-level extension point: an invocation line
//! with an optional single-line argument, recovered options, and a body that
//! is either recursively parsed or preserved verbatim. The front end builds
//! the same node shape for every name, known or not; consumers that care
//! about a particular directive inspect `name` and take it from there.

use super::super::range::Location;
use super::Node;
use std::fmt;

/// Ordered option mapping recovered from a directive block.
///
/// Entries keep their insertion order. Writing to an existing key overwrites
/// the value in place, so a duplicated key keeps its original position with
/// the last value written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Options {
    entries: Vec<(String, String)>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, (key, value)) in self.entries.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        write!(f, "}}")
    }
}

/// Verbatim text holder for directives that own their body grammar.
#[derive(Debug, Clone, PartialEq)]
pub struct RawContent {
    pub text: String,
    pub location: Location,
}

/// The inline-parsed argument of a directive invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectiveArgument {
    /// Argument text as written on the invocation line.
    pub text: String,
    /// Inline parse of the argument text.
    pub children: Vec<Node>,
    pub location: Location,
}

/// The body of a directive: one verbatim holder or recursively parsed
/// children, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectiveBody {
    Raw(RawContent),
    Children(Vec<Node>),
}

impl DirectiveBody {
    /// Parsed child nodes; empty for a verbatim body.
    pub fn children(&self) -> &[Node] {
        match self {
            DirectiveBody::Raw(_) => &[],
            DirectiveBody::Children(children) => children,
        }
    }

    /// Verbatim body text, if this body is one.
    pub fn raw_text(&self) -> Option<&str> {
        match self {
            DirectiveBody::Raw(raw) => Some(raw.text.as_str()),
            DirectiveBody::Children(_) => None,
        }
    }
}

/// A named block-level extension point.
#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    pub name: String,
    pub argument: Option<DirectiveArgument>,
    pub options: Options,
    pub body: DirectiveBody,
    pub location: Location,
}

impl Directive {
    /// A directive with no argument, no options, and an empty parsed body.
    pub fn new(name: impl Into<String>, location: Location) -> Self {
        Self {
            name: name.into(),
            argument: None,
            options: Options::new(),
            body: DirectiveBody::Children(Vec::new()),
            location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_keep_insertion_order() {
        let mut options = Options::new();
        options.insert("hidden", "true");
        options.insert("tabset", "platforms");
        let keys: Vec<&str> = options.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["hidden", "tabset"]);
    }

    #[test]
    fn test_duplicate_key_overwrites_in_place() {
        let mut options = Options::new();
        options.insert("language", "python");
        options.insert("caption", "Example");
        options.insert("language", "rust");
        let entries: Vec<(&str, &str)> = options.iter().collect();
        assert_eq!(entries, vec![("language", "rust"), ("caption", "Example")]);
    }

    #[test]
    fn test_options_display() {
        let mut options = Options::new();
        options.insert("hidden", "true");
        options.insert("tabset", "platforms");
        assert_eq!(options.to_string(), "{hidden=true, tabset=platforms}");
    }
}
