//! # stanza
//!
//! A parser front end for directive-extensible markup.
//!
//! Markup documents extend their base grammar through named block directives
//! and named inline roles. The base grammar cannot know every name that
//! authors and extensions will use, so this crate resolves *every* name to a
//! generic, uniform node: downstream consumers walk one tree shape and decide
//! for themselves which names they care about.
//!
//! The front end also reconciles the two authoring syntaxes of the
//! tabbed-content extension: the superseded data-embedded form is detected
//! and migrated into the same tree shape the current form produces, so
//! consumers never see the difference.
//!
//! For testing guidelines, see the [testing module](stanza::testing).
//! Tests assert tree structure through the shared fluent helpers rather than
//! ad-hoc pattern matches.

#![allow(rustdoc::invalid_html_tags)]

pub mod stanza;
