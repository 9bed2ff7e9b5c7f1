//! Source position tracking for node attribution
//!
//! This module defines the location data attached to every node. The front
//! end attributes everything to whole lines: the finer column bookkeeping of
//! the base grammar never reaches the extension surfaces, and error messages
//! only ever name a source and a line.
//!
//! ## Key Design
//!
//! - **Mandatory locations**: every node carries a required `Location`.
//! - **No null locations**: builders that have nothing better use line 1 of
//!   the owning source.
//! - **Cheap to share**: the source identifier is reference-counted, so a
//!   location costs one pointer and one integer per node, and documents stay
//!   `Send` for parallel parsing of independent files.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// A source location: the originating document plus a 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    /// Identifier of the originating document, used solely for attribution.
    pub source: Arc<Path>,
    /// 1-based line number in the originating document.
    pub line: usize,
}

impl Location {
    pub fn new(source: Arc<Path>, line: usize) -> Self {
        Self { source, line }
    }

    /// Same source, different line.
    pub fn at_line(&self, line: usize) -> Self {
        Self {
            source: Arc::clone(&self.source),
            line,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source.display(), self.line)
    }
}
