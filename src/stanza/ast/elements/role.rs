//! Role element nodes
//!
//! A role is a named inline extension point. Its text may carry an explicit
//! target suffix, ``Some Label <some-target>``; when it does, the label and
//! target are split apart, otherwise the whole text serves as both.

use super::super::range::Location;
use super::text::Text;

/// Label of a role: the raw text verbatim, or an inline-parseable text node
/// carrying the invocation's source line when an explicit target was split
/// off.
#[derive(Debug, Clone, PartialEq)]
pub enum RoleLabel {
    Plain(String),
    Inline(Text),
}

impl RoleLabel {
    pub fn text(&self) -> &str {
        match self {
            RoleLabel::Plain(text) => text,
            RoleLabel::Inline(inline) => &inline.value,
        }
    }
}

/// A named inline extension point.
#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    pub name: String,
    /// Invocation text as written, untouched.
    pub raw: String,
    pub label: RoleLabel,
    pub target: String,
    pub location: Location,
}
