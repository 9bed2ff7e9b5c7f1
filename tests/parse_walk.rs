//! Integration tests for the parse entry point and tree traversal
//!
//! One call parses one document; the walker then visits every node on entry
//! and on departure. Diagnostics below the severe tier never surface.

use stanza::stanza::ast::Node;
use stanza::stanza::building::directive::DirectiveInvocation;
use stanza::stanza::building::BuildContext;
use stanza::stanza::parsing::Parser;
use stanza::stanza::resolution::{GenericResolver, Resolver};
use stanza::stanza::testing::{assert_tree, EventLog};
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn test_parse_01_entry_and_departure_order() {
    let source = ".. note:: Heads up\n\n   Body text.\n";
    let mut log = EventLog::new();
    Parser::new().parse_into("doc.txt", source, &mut log);

    assert_eq!(
        log.events,
        vec![
            "enter document",
            "enter directive note",
            "enter argument",
            "enter text",
            "leave text",
            "leave argument",
            "enter paragraph",
            "enter text",
            "leave text",
            "leave paragraph",
            "leave directive note",
            "leave document",
        ]
    );
}

#[test]
fn test_parse_02_raw_bodies_visited_as_raw() {
    let source = ".. code-block:: python\n\n   print(1)\n";
    let mut log = EventLog::new();
    Parser::new().parse_into("doc.txt", source, &mut log);

    assert!(log.events.contains(&"enter raw".to_string()));
    assert!(!log.events.contains(&"enter paragraph".to_string()));
}

#[test]
fn test_parse_03_warnings_are_discarded() {
    // The block below ends without a blank line before the unindented
    // paragraph: a warning-level problem, dropped by policy. Both nodes
    // still come out.
    let source = ".. note:: x\n   body line\nunindented line\n";
    let document = Parser::new().parse("doc.txt", source);

    assert_tree(&document).item_count(2).diagnostic_count(0);
}

#[test]
fn test_parse_04_severe_diagnostics_survive() {
    let source = "\
.. tabs::

   hidden: not-a-bool
   tabs:
     - id: x
       content: |
         Text.
";
    let document = Parser::new().parse("doc.txt", source);

    assert_eq!(document.diagnostics.len(), 1);
    assert!(document.diagnostics[0].severity.is_severe());
    assert!(document.diagnostics[0]
        .message
        .contains("invalid legacy tabs definition"));
}

#[test]
fn test_parse_05_empty_document() {
    let document = Parser::new().parse("doc.txt", "");
    assert_tree(&document).item_count(0).diagnostic_count(0);
}

#[test]
fn test_parse_06_source_attribution_shared_by_nodes() {
    let document = Parser::new().parse("guide/install.txt", "A paragraph.\n");
    assert_eq!(document.source.to_str(), Some("guide/install.txt"));

    let Node::Paragraph(paragraph) = &document.children[0] else {
        panic!("expected paragraph");
    };
    assert_eq!(paragraph.location.source, document.source);
    assert_eq!(paragraph.location.line, 1);
}

#[test]
fn test_parse_07_concurrent_parses_share_one_parser() {
    let parser = Parser::new();
    let first_source = ".. note::\n\n   First document body.\n";
    let second_source = "Second document paragraph.\n";

    std::thread::scope(|scope| {
        let first = scope.spawn(|| parser.parse("first.txt", first_source));
        let second = scope.spawn(|| parser.parse("second.txt", second_source));
        let first = first.join().expect("first parse");
        let second = second.join().expect("second parse");

        assert_tree(&first).item_count(1);
        assert_tree(&second).item_count(1);
    });
}

/// Counts directive resolutions while delegating to the default strategy.
struct CountingResolver<'a> {
    inner: GenericResolver,
    directives: &'a AtomicUsize,
}

impl Resolver for CountingResolver<'_> {
    fn directive(
        &self,
        ctx: &mut dyn BuildContext,
        invocation: &DirectiveInvocation,
    ) -> Vec<Node> {
        self.directives.fetch_add(1, Ordering::Relaxed);
        self.inner.directive(ctx, invocation)
    }

    fn role(&self, ctx: &mut dyn BuildContext, name: &str, text: &str, line: usize) -> Node {
        self.inner.role(ctx, name, text, line)
    }
}

#[test]
fn test_parse_08_resolver_strategy_is_injectable() {
    let count = AtomicUsize::new(0);
    let parser = Parser::with_resolver(CountingResolver {
        inner: GenericResolver::new(),
        directives: &count,
    });

    let source = ".. outer::\n\n   .. inner::\n\n      Text.\n";
    let document = parser.parse("doc.txt", source);

    assert_tree(&document).item_count(1);
    // Both the outer directive and the nested one went through the
    // injected strategy.
    assert_eq!(count.load(Ordering::Relaxed), 2);
}

#[test]
fn test_parse_09_multiple_documents_independent() {
    let parser = Parser::new();
    let first = parser.parse("a.txt", ".. note::\n\n   Alpha.\n");
    let second = parser.parse("b.txt", ".. note::\n\n   Beta.\n");

    assert_tree(&first).item_count(1);
    assert_tree(&second).item_count(1);
    assert_ne!(first.source, second.source);
}
