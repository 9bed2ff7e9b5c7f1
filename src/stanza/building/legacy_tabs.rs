//! Legacy tab syntax migration
//!
//! The tabbed-content extension has had two authoring syntaxes. The current
//! one is plain markup: a `tabs` directive holding `tab` directives. The
//! superseded one embedded a structured-data document in the directive body:
//!
//! ```text
//! .. tabs-platforms::
//!
//!    hidden: true
//!    tabs:
//!      - id: linux
//!        content: |
//!          Linux instructions.
//! ```
//!
//! Both must come out as the same tree shape so that consumers never care
//! which syntax an author used. This module detects the old form (some
//! content line equal to `tabs:`, exactly), decodes and validates it, and
//! rewrites it through the same primitives the generic builder uses.
//!
//! Validation failure collapses the whole directive to a single error
//! marker; sibling content in the document is unaffected.

use super::directive::DirectiveInvocation;
use super::normalize::rebase_indentation;
use super::BuildContext;
use crate::stanza::ast::{
    Diagnostic, Directive, DirectiveArgument, DirectiveBody, ErrorMarker, Location, Node,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::sync::Arc;

/// The content line that identifies the legacy syntax. Exact-line match;
/// prefix matches do not count.
const LEGACY_MARKER: &str = "tabs:";

/// Start of a block-sequence item: optional indentation, `-`, whitespace or
/// end of line.
static ITEM_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^( *)-(?:\s|$)").unwrap());

/// One tab entry in the legacy structured-data syntax.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LegacyTabDefinition {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
}

/// The legacy structured-data shape: an optional hidden flag plus an ordered
/// tab list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LegacyTabsDefinition {
    #[serde(default)]
    pub hidden: Option<bool>,
    pub tabs: Vec<LegacyTabDefinition>,
}

/// Whether a directive body uses the legacy syntax.
pub fn has_legacy_tabs_marker(content: &str) -> bool {
    content.lines().any(|line| line == LEGACY_MARKER)
}

/// Rewrite a legacy tab definition into the current tree shape.
///
/// On a schema or type mismatch, one document-level error is reported at the
/// offending line and the directive yields a single error marker, never a
/// partial tree.
pub fn migrate_legacy_tabs(
    ctx: &mut dyn BuildContext,
    invocation: &DirectiveInvocation,
) -> Vec<Node> {
    let location = Location::new(Arc::clone(ctx.source()), invocation.line);

    let loaded: LegacyTabsDefinition = match serde_yaml::from_str(&invocation.content) {
        Ok(loaded) => loaded,
        Err(err) => {
            let line = invocation.line + err.location().map_or(1, |at| at.line());
            let message = format!("invalid legacy tabs definition: {}", err);
            ctx.report(Diagnostic::error(line, message.clone()));
            return vec![Node::ErrorMarker(ErrorMarker {
                message,
                location: location.at_line(line),
            })];
        }
    };

    // Tabset identifier from the invoked name's suffix; the generic family
    // name carries no identifier.
    let tabset = invocation
        .name
        .split_once('-')
        .map_or(invocation.name.as_str(), |(_, suffix)| suffix);

    let mut node = Directive::new("tabs", location);
    if loaded.hidden.unwrap_or(false) {
        node.options.insert("hidden", "true");
    }
    if !tabset.is_empty() && tabset != "tabs" {
        node.options.insert("tabset", tabset);
    }

    let offsets = item_line_offsets(&invocation.content);
    let mut children = Vec::with_capacity(loaded.tabs.len());
    for (index, tab) in loaded.tabs.iter().enumerate() {
        let offset = offsets.get(index).copied().unwrap_or(0);
        children.push(make_tab_node(ctx, tab, invocation.line + offset));
    }
    node.body = DirectiveBody::Children(children);

    vec![Node::Directive(node)]
}

/// Build one `tab` child in the same shape the generic builder produces for
/// the current syntax: inline-parsed id argument, no options, recursively
/// parsed content.
fn make_tab_node(ctx: &mut dyn BuildContext, tab: &LegacyTabDefinition, line: usize) -> Node {
    let location = Location::new(Arc::clone(ctx.source()), line);
    let mut node = Directive::new("tab", location.clone());

    let children = ctx.inline_text(&tab.id, line);
    node.argument = Some(DirectiveArgument {
        text: tab.id.clone(),
        children,
        location,
    });

    let content = rebase_indentation(&tab.content);
    node.body = DirectiveBody::Children(ctx.nested_parse(&content, line));

    Node::Directive(node)
}

/// Content-relative line offset of each tab item.
///
/// The decoder validates types but reports no positions on success, so item
/// positions come from scanning the raw block: the shallowest block-sequence
/// items after the `tabs:` marker line, in order.
fn item_line_offsets(content: &str) -> Vec<usize> {
    let lines: Vec<&str> = content.split('\n').collect();
    let Some(marker_index) = lines.iter().position(|line| *line == LEGACY_MARKER) else {
        return Vec::new();
    };

    let mut candidates: Vec<(usize, usize)> = Vec::new();
    for (index, line) in lines.iter().enumerate().skip(marker_index + 1) {
        if let Some(captures) = ITEM_LINE.captures(line) {
            candidates.push((captures[1].len(), index));
        }
    }

    let Some(item_indent) = candidates.iter().map(|(indent, _)| *indent).min() else {
        return Vec::new();
    };
    candidates
        .into_iter()
        .filter(|(indent, _)| *indent == item_indent)
        .map(|(_, index)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_must_match_whole_line() {
        assert!(has_legacy_tabs_marker("hidden: true\ntabs:\n  - id: x\n"));
        assert!(!has_legacy_tabs_marker("tabs: inline value\n"));
        assert!(!has_legacy_tabs_marker(".. tab:: x\n"));
    }

    #[test]
    fn test_item_offsets_track_shallowest_items() {
        let content = "tabs:\n  - id: x\n    content: |\n      - not an item\n  - id: y\n";
        assert_eq!(item_line_offsets(content), vec![1, 4]);
    }

    #[test]
    fn test_item_offsets_without_marker() {
        assert_eq!(item_line_offsets("no marker here\n"), Vec::<usize>::new());
    }
}
