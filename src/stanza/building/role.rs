//! Role node construction
//!
//! Role text may carry an explicit target: ``Some Label <some-target>``.
//! The split point is the last `<` not preceded by the escape marker, and
//! the remainder must end in `>` with a non-empty target between the
//! delimiters. Anything else (no angle brackets, an escaped `<`, an empty
//! target) degrades to the whole text serving as both label and target.
//! Construction never fails.

use crate::stanza::ast::{Location, Role, RoleLabel, Text};

/// Build a role node from its name and raw invocation text.
///
/// When the explicit-target form matches, the label becomes an
/// inline-parseable text node carrying the invocation's source line;
/// otherwise label and target are both the raw text.
pub fn build_role(name: &str, text: &str, location: Location) -> Role {
    let (label, target) = match split_explicit_target(text) {
        Some((label, target)) => (
            RoleLabel::Inline(Text {
                value: label.to_string(),
                location: location.clone(),
            }),
            target.to_string(),
        ),
        None => (RoleLabel::Plain(text.to_string()), text.to_string()),
    };

    Role {
        name: name.to_string(),
        raw: text.to_string(),
        label,
        target,
        location,
    }
}

/// Split `label <target>` at the last unescaped `<`.
///
/// A backslash immediately before `<` suppresses the split at that
/// position. The target and the whitespace-trimmed label must both be
/// non-empty for the split to count.
fn split_explicit_target(text: &str) -> Option<(&str, &str)> {
    let body = text.strip_suffix('>')?;

    let mut split = None;
    for (index, ch) in body.char_indices() {
        if ch == '<' && !body[..index].ends_with('\\') {
            split = Some(index);
        }
    }
    let index = split?;

    let target = &body[index + 1..];
    let label = text[..index].trim_end();
    if target.is_empty() || label.is_empty() {
        return None;
    }
    Some((label, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_at_last_unescaped_angle() {
        assert_eq!(
            split_explicit_target("a <b> c <d>"),
            Some(("a <b> c", "d"))
        );
    }

    #[test]
    fn test_escaped_angle_suppresses_split() {
        assert_eq!(split_explicit_target("all one \\<text>"), None);
    }

    #[test]
    fn test_empty_target_rejected() {
        assert_eq!(split_explicit_target("label <>"), None);
    }

    #[test]
    fn test_no_trailing_angle_rejected() {
        assert_eq!(split_explicit_target("no target here"), None);
    }
}
