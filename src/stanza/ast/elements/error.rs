//! Error marker node
//!
//! When a directive's embedded legacy data fails validation, the directive
//! collapses to a single marker node and the rest of the document is left
//! alone. The marker keeps the failure visible to tree consumers; the
//! matching diagnostic carries the same message at the document level.

use super::super::range::Location;

/// The single-node remnant of a directive that failed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorMarker {
    pub message: String,
    pub location: Location,
}
