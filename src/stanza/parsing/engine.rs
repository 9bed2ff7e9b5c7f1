//! Baseline block and inline grammar
//!
//!     The engine implements just enough of the baseline grammar to drive
//!     the extension surfaces: directive invocations with their indented
//!     blocks, comment blocks, paragraphs, and inline roles. Richer
//!     structure (lists, emphasis, section nesting) belongs to the full
//!     grammar and is deliberately absent here.
//!
//!     Block parsing is line based. A line matching the invocation pattern
//!     opens an explicit-markup block that extends over every following line
//!     that is blank or indented; the block's body is dedented, its
//!     field-option prefix located, and the remainder handed to the
//!     resolver as the directive's content. Explicit-markup starts that are
//!     not invocations are comments and are consumed silently. Any other
//!     run of non-blank lines is a paragraph.
//!
//!     Nested parses re-enter the same routines against an independent
//!     sub-document slice; only the diagnostic sink and the source
//!     identifier are shared, never cursor state.

use crate::stanza::ast::{Diagnostic, Location, Node, Paragraph, Text};
use crate::stanza::building::directive::DirectiveInvocation;
use crate::stanza::building::options::is_field_marker;
use crate::stanza::building::BuildContext;
use crate::stanza::resolution::Resolver;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use std::sync::Arc;

/// Directive invocation line: marker, name, `::`, optional argument.
static DIRECTIVE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\.\.[ \t]+([A-Za-z][\w.+-]*(?::[\w.+-]+)*)::(?:[ \t]+(.*))?$").unwrap()
});

/// Explicit-markup start that is not an invocation: a comment block.
static COMMENT_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\.\.(?:[ \t]|$)").unwrap());

/// Inline role invocation wrapping backtick-quoted text.
static ROLE_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":([A-Za-z][\w.+-]*(?::[\w.+-]+)*):`([^`]+)`").unwrap());

/// One document-level parse session.
///
/// Owns the diagnostic sink for the whole document and implements the
/// [BuildContext] recursion surface the node builders call back into.
pub(crate) struct Session<'a> {
    source: Arc<Path>,
    resolver: &'a dyn Resolver,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Session<'a> {
    pub(crate) fn new(source: Arc<Path>, resolver: &'a dyn Resolver) -> Self {
        Self {
            source,
            resolver,
            diagnostics: Vec::new(),
        }
    }

    /// Parse block text whose first line sits at `first_line`.
    pub(crate) fn parse_text(&mut self, text: &str, first_line: usize) -> Vec<Node> {
        let lines: Vec<&str> = text.split('\n').collect();
        self.parse_lines(&lines, first_line)
    }

    /// Retained diagnostics: the severe tier only, in report order.
    pub(crate) fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
            .into_iter()
            .filter(|diagnostic| diagnostic.severity.is_severe())
            .collect()
    }

    fn parse_lines(&mut self, lines: &[&str], first_line: usize) -> Vec<Node> {
        let mut nodes = Vec::new();
        let mut index = 0;

        while index < lines.len() {
            let line = lines[index];
            if is_blank(line) {
                index += 1;
                continue;
            }

            if let Some(captures) = DIRECTIVE_LINE.captures(line) {
                let end = self.block_end(lines, index, first_line);
                let invocation =
                    extract_invocation(&captures, &lines[index..end], first_line + index);
                let resolver = self.resolver;
                nodes.extend(resolver.directive(self, &invocation));
                index = end;
            } else if COMMENT_LINE.is_match(line) {
                index = self.block_end(lines, index, first_line);
            } else {
                let start = index;
                while index < lines.len()
                    && !is_blank(lines[index])
                    && !DIRECTIVE_LINE.is_match(lines[index])
                    && !COMMENT_LINE.is_match(lines[index])
                {
                    index += 1;
                }
                let text = lines[start..index].join("\n");
                let location = self.location(first_line + start);
                let children = self.inline_text(&text, first_line + start);
                nodes.push(Node::Paragraph(Paragraph { children, location }));
            }
        }

        nodes
    }

    /// End of the explicit-markup block opened at `start`: the opening line
    /// plus every following line that is blank or indented.
    fn block_end(&mut self, lines: &[&str], start: usize, first_line: usize) -> usize {
        let mut end = start + 1;
        while end < lines.len() && (is_blank(lines[end]) || leading_indent(lines[end]) > 0) {
            end += 1;
        }
        if end < lines.len() && end > start + 1 && !is_blank(lines[end - 1]) {
            self.report(Diagnostic::warning(
                first_line + end,
                "block ends without a blank line",
            ));
        }
        end
    }

    fn location(&self, line: usize) -> Location {
        Location::new(Arc::clone(&self.source), line)
    }
}

impl BuildContext for Session<'_> {
    fn nested_parse(&mut self, text: &str, first_line: usize) -> Vec<Node> {
        self.parse_text(text, first_line)
    }

    fn inline_text(&mut self, text: &str, line: usize) -> Vec<Node> {
        let mut nodes = Vec::new();
        let mut cursor = 0;
        let resolver = self.resolver;

        for captures in ROLE_SPAN.captures_iter(text) {
            let span = captures.get(0).unwrap();
            if span.start() > cursor {
                nodes.push(Node::Text(Text {
                    value: text[cursor..span.start()].to_string(),
                    location: self.location(line),
                }));
            }
            nodes.push(resolver.role(self, &captures[1], &captures[2], line));
            cursor = span.end();
        }

        if cursor < text.len() {
            nodes.push(Node::Text(Text {
                value: text[cursor..].to_string(),
                location: self.location(line),
            }));
        }
        nodes
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    fn source(&self) -> &Arc<Path> {
        &self.source
    }
}

/// Assemble the invocation data the resolver and builders consume.
fn extract_invocation(
    captures: &regex::Captures<'_>,
    block: &[&str],
    line: usize,
) -> DirectiveInvocation {
    let name = captures[1].to_string();
    let argument = captures
        .get(2)
        .map(|m| m.as_str().trim_end().to_string())
        .filter(|argument| !argument.is_empty());

    let body = &block[1..];
    let indent = body
        .iter()
        .filter(|body_line| !is_blank(body_line))
        .map(|body_line| leading_indent(body_line))
        .min();

    let (content, content_offset) = match indent {
        Some(indent) => split_content(body, indent),
        None => (String::new(), 0),
    };

    DirectiveInvocation {
        name,
        argument,
        block_text: block.join("\n"),
        content,
        line,
        content_line: line + 1 + content_offset,
    }
}

/// Split a dedented directive body into its field-option prefix and its
/// content. Returns the content text and the body-relative offset of the
/// first content line.
fn split_content(body: &[&str], indent: usize) -> (String, usize) {
    let dedented: Vec<&str> = body.iter().map(|line| dedent(line, indent)).collect();

    let mut index = 0;
    while index < dedented.len() && is_blank(dedented[index]) {
        index += 1;
    }
    while index < dedented.len() && is_field_marker(dedented[index]) {
        index += 1;
        // Continuation lines of a multi-line option value.
        while index < dedented.len()
            && !is_blank(dedented[index])
            && leading_indent(dedented[index]) > 0
        {
            index += 1;
        }
    }
    while index < dedented.len() && is_blank(dedented[index]) {
        index += 1;
    }

    let mut content: Vec<&str> = dedented[index..].to_vec();
    while content.last().is_some_and(|line| is_blank(line)) {
        content.pop();
    }
    (content.join("\n"), index)
}

fn dedent(line: &str, indent: usize) -> &str {
    if is_blank(line) {
        ""
    } else {
        &line[indent.min(line.len())..]
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn leading_indent(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_line_pattern() {
        assert!(DIRECTIVE_LINE.is_match(".. note:: Take care"));
        assert!(DIRECTIVE_LINE.is_match(".. code-block:: python"));
        assert!(DIRECTIVE_LINE.is_match(".. tabs-platforms::"));
        assert!(!DIRECTIVE_LINE.is_match(".. just a comment"));
        assert!(!DIRECTIVE_LINE.is_match("plain text"));
    }

    #[test]
    fn test_role_span_pattern() {
        let captures = ROLE_SPAN.captures(":manual:`Some Label <some-target>`").unwrap();
        assert_eq!(&captures[1], "manual");
        assert_eq!(&captures[2], "Some Label <some-target>");

        let captures = ROLE_SPAN.captures("see :py:func:`len`").unwrap();
        assert_eq!(&captures[1], "py:func");
    }

    #[test]
    fn test_split_content_skips_option_prefix() {
        let body = ["   :alt: A chart", "", "   Body text."];
        let (content, offset) = split_content(&body, 3);
        assert_eq!(content, "Body text.");
        assert_eq!(offset, 2);
    }

    #[test]
    fn test_split_content_without_options() {
        let body = ["", "   tabs:", "     - id: x"];
        let (content, offset) = split_content(&body, 3);
        assert_eq!(content, "tabs:\n  - id: x");
        assert_eq!(offset, 1);
    }
}
