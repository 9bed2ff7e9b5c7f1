//! Document loading utilities
//!
//! This module provides `DocumentLoader` - a utility for loading source text
//! from files or strings and parsing it. It is used by both production code
//! and tests.
//!
//! # Example
//!
//! ```rust
//! use stanza::stanza::loader::DocumentLoader;
//!
//! // From file
//! let document = DocumentLoader::from_path("guide.txt").unwrap().parse();
//!
//! // From string
//! let document = DocumentLoader::from_string(".. note:: Careful now\n").parse();
//! ```

use super::parsing::{Document, Parser};
use super::resolution::Resolver;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Error that can occur when loading documents
#[derive(Debug, Clone)]
pub enum LoaderError {
    /// IO error when reading a file
    Io(String),
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderError::Io(message) => write!(f, "IO error: {}", message),
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::Io(err.to_string())
    }
}

/// Document loader bound to a source path or an in-memory string.
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    source: PathBuf,
    text: String,
}

impl DocumentLoader {
    /// Load source text from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Ok(Self {
            source: path.to_path_buf(),
            text,
        })
    }

    /// Wrap in-memory source text; attribution uses `<string>`.
    pub fn from_string(text: impl Into<String>) -> Self {
        Self {
            source: PathBuf::from("<string>"),
            text: text.into(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Parse with the default resolution strategy.
    pub fn parse(&self) -> Document {
        self.parse_with(&Parser::new())
    }

    /// Parse with a caller-configured parser.
    pub fn parse_with<R: Resolver>(&self, parser: &Parser<R>) -> Document {
        parser.parse(&self.source, &self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string_attribution() {
        let document = DocumentLoader::from_string("A paragraph.\n").parse();
        assert_eq!(document.source.as_ref(), Path::new("<string>"));
        assert_eq!(document.children.len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = DocumentLoader::from_path("no/such/file.txt").unwrap_err();
        assert!(matches!(err, LoaderError::Io(_)));
    }
}
