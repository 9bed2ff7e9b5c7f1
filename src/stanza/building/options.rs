//! Schema-less recovery of directive options
//!
//! The base grammar only parses directive options whose names are declared
//! ahead of time. This front end accepts every directive name, so no option
//! schema is ever available; instead, options are recovered after the fact
//! from the directive's raw block text.
//!
//! Recovery walks the block line by line. The invocation line is ignored.
//! The indentation of the first non-blank line becomes the block's base
//! indentation. A `:key:` field-marker line starts a new key and takes the
//! rest of the line as the initial value fragment; a deeper line extends the
//! active key's value on a new line, its own indentation stripped; blank
//! lines are skipped without resetting the active key. The first non-field
//! line at base indentation ends recovery, so options always occupy a
//! contiguous prefix of the block. Lines seen before any key is active that
//! sit at some other indentation are dropped without being classified as
//! option or content.
//!
//! There are no error states: a block without field markers yields an empty
//! mapping.

use crate::stanza::ast::Options;
use once_cell::sync::Lazy;
use regex::Regex;

/// Field marker at the start of a stripped line: `:key:` followed by
/// whitespace or end of line. The key may contain escaped colons but may not
/// start with `:` or a space.
static FIELD_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^:(?:\\.|[^ :\\])(?:\\.|[^:\\])*:(?:\s+|$)").unwrap());

/// Whether a stripped line opens a field option.
pub(crate) fn is_field_marker(stripped: &str) -> bool {
    FIELD_MARKER.is_match(stripped)
}

/// Recover `:key: value` options embedded in a directive's raw block text.
///
/// `block_text` is the directive's full block: the invocation line plus the
/// indented block that follows it, original indentation intact. Values may
/// span multiple lines. Duplicate keys keep their first position with the
/// last value written.
pub fn recover_options(block_text: &str) -> Options {
    let mut options = Options::new();
    let mut current_key: Option<String> = None;
    let mut base_indentation: Option<usize> = None;

    for line in block_text.split('\n').skip(1) {
        let stripped = line.trim();
        if stripped.is_empty() {
            continue;
        }

        let indentation = leading_spaces(line);
        let base = *base_indentation.get_or_insert(indentation);

        if let Some(marker) = FIELD_MARKER.find(stripped) {
            let key = marker.as_str().trim().trim_matches(':').to_string();
            let value = stripped[marker.end()..].to_string();
            options.insert(key.clone(), value);
            current_key = Some(key);
            continue;
        }

        if indentation == base {
            break;
        } else if let Some(key) = &current_key {
            let extended = format!(
                "{}\n{}",
                options.get(key).unwrap_or(""),
                &line[indentation..]
            );
            options.insert(key.clone(), extended);
        }
    }

    options
}

fn leading_spaces(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_marker_requires_separator() {
        assert!(is_field_marker(":caption: Example"));
        assert!(is_field_marker(":linenos:"));
        assert!(!is_field_marker(":no:space"));
        assert!(!is_field_marker("not an option"));
        assert!(!is_field_marker(":: empty"));
    }

    #[test]
    fn test_inline_value_fragment() {
        let options = recover_options(".. figure:: chart.png\n   :alt: A chart\n");
        assert_eq!(options.get("alt"), Some("A chart"));
    }

    #[test]
    fn test_marker_without_value() {
        let options = recover_options(".. code-block:: python\n   :linenos:\n");
        assert_eq!(options.get("linenos"), Some(""));
    }
}
