// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Structural tests against the public `parse`/`parse_fragment` entry
//! points, checking the shape of the resulting `RcDom` tree rather than
//! re-deriving the insertion-mode algorithm.

use std::rc::Rc;

use html5tree::errors::ErrorCode;
use html5tree::interface::QualName;
use html5tree::rcdom::{Handle, NodeEnum};
use html5tree::{parse, parse_fragment, Namespace, OptionsError, ParseOpts};

fn children(handle: &Handle) -> Vec<Handle> {
    handle.children.borrow().clone()
}

fn find_element(handle: &Handle, name: &str) -> Option<Handle> {
    if let NodeEnum::Element(ref qname, ..) = handle.node {
        if &*qname.local == name {
            return Some(handle.clone());
        }
    }
    for child in children(handle).iter() {
        if let Some(found) = find_element(child, name) {
            return Some(found);
        }
    }
    None
}

fn text_content(handle: &Handle) -> String {
    let mut out = String::new();
    collect_text(handle, &mut out);
    out
}

fn collect_text(handle: &Handle, out: &mut String) {
    if let NodeEnum::Text(ref text) = handle.node {
        out.push_str(&text.borrow());
    }
    for child in children(handle).iter() {
        collect_text(child, out);
    }
}

fn element_name(handle: &Handle) -> Option<String> {
    match handle.node {
        NodeEnum::Element(ref qname, ..) => Some(qname.local.to_string()),
        _ => None,
    }
}

#[test]
fn empty_input_yields_empty_head_and_body() {
    let output = parse("", ParseOpts::default());
    let html = find_element(&output.document, "html").expect("html element");
    let head = find_element(&html, "head").expect("head element");
    let body = find_element(&html, "body").expect("body element");
    assert!(children(&head).is_empty());
    assert!(children(&body).is_empty());
}

#[test]
fn dangling_less_than_at_eof_is_a_text_node_with_an_error() {
    let output = parse("<", ParseOpts::default());
    let html = find_element(&output.document, "html").expect("html element");
    let body = find_element(&html, "body").expect("body element");
    assert_eq!(text_content(&body), "<");
    assert!(output
        .errors
        .iter()
        .any(|e| e.code == ErrorCode::EofBeforeTagName));
}

#[test]
fn paragraphs_implicitly_close() {
    let output = parse("<p>one<p>two", ParseOpts::default());
    let body = find_element(&output.document, "body").expect("body element");
    let paragraphs: Vec<_> = children(&body)
        .into_iter()
        .filter(|c| element_name(c).as_deref() == Some("p"))
        .collect();
    assert_eq!(paragraphs.len(), 2);
    assert_eq!(text_content(&paragraphs[0]), "one");
    assert_eq!(text_content(&paragraphs[1]), "two");
}

#[test]
fn stray_table_text_is_foster_parented() {
    let output = parse("<table>lost<tr><td>cell</td></tr></table>", ParseOpts::default());
    let body = find_element(&output.document, "body").expect("body element");
    let table = find_element(&body, "table").expect("table element");

    // The foster-parented "lost" text becomes a sibling of <table> inside
    // <body>, not a child of <table>.
    assert!(children(&body).iter().any(|c| Rc::ptr_eq(c, &table)));
    assert!(!text_content(&table).contains("lost"));
    assert!(text_content(&body).contains("lost"));

    let td = find_element(&table, "td").expect("td element");
    assert_eq!(text_content(&td), "cell");
}

#[test]
fn adoption_agency_reparents_misnested_formatting() {
    // <b> is still open when </i> closes; the adoption agency algorithm
    // must leave both the text and both elements present in the tree.
    let output = parse("<b>B<i>I</b>after</i>", ParseOpts::default());
    let body = find_element(&output.document, "body").expect("body element");
    assert!(text_content(&body).contains('B'));
    assert!(text_content(&body).contains('I'));
    assert!(text_content(&body).contains("after"));
    assert!(find_element(&body, "b").is_some());
    assert!(find_element(&body, "i").is_some());
}

#[test]
fn doctype_is_appended_directly_to_the_document() {
    let output = parse("<!DOCTYPE html><p>x", ParseOpts::default());
    let doctype = output
        .document
        .children
        .borrow()
        .iter()
        .find(|c| matches!(c.node, NodeEnum::Doctype(..)))
        .cloned()
        .expect("doctype node");
    match doctype.node {
        NodeEnum::Doctype(ref name, ..) => assert!(name.eq_ignore_ascii_case("html")),
        _ => unreachable!(),
    }
}

#[test]
fn template_contents_are_a_separate_document() {
    let output = parse("<template><span>hi</span></template>", ParseOpts::default());
    let body = find_element(&output.document, "body").expect("body element");
    let template = find_element(&body, "template").expect("template element");
    // The <span> lives in the template's content document, not as a direct
    // child of <template> in the main tree.
    assert!(children(&template).is_empty());
}

#[test]
fn foreign_content_switches_namespace() {
    let output = parse(r#"<svg><circle r="1"/></svg>"#, ParseOpts::default());
    let body = find_element(&output.document, "body").expect("body element");
    let svg = find_element(&body, "svg").expect("svg element");
    match svg.node {
        NodeEnum::Element(ref qname, ..) => assert_eq!(qname.ns, Some(Namespace::Svg)),
        _ => panic!("not an element"),
    }
}

#[test]
fn fragment_parsing_respects_context_element() {
    let output = parse_fragment("<td>cell</td>", QualName::html("tr"), ParseOpts::default())
        .expect("valid fragment context");
    assert_eq!(output.nodes.len(), 1);
    assert_eq!(element_name(&output.nodes[0]).as_deref(), Some("td"));
}

#[test]
fn fragment_parsing_rejects_nameless_context() {
    let bad = QualName::new(None, None, "".into());
    let err = parse_fragment("x", bad, ParseOpts::default()).unwrap_err();
    match err {
        OptionsError::InvalidFragmentContext(_) => {},
        other => panic!("expected InvalidFragmentContext, got {other:?}"),
    }
}
