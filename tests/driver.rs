// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::borrow::Cow;
use std::cell::{Cell, RefCell};

use html5tree::errors::{ErrorCode, SinkError};
use html5tree::interface::{Attribute, EncodingIndicator, NodeOrText, QuirksMode, TreeSink};
use html5tree::tendril::StrTendril;
use html5tree::{parse, QualName};

#[test]
fn repeated_meta_charset_does_not_hang_or_panic() {
    // https://github.com/servo/html5ever/issues/716 — two identical <meta
    // charset> tags used to confuse the old driver's script-pause handling.
    let input = "<meta charset=\"UTF-8\" /><meta charset=\"UTF-8\" /> other stuff";
    let output = parse(input, Default::default());
    assert!(output.errors.is_empty());
}

/// A minimal handle-counting sink, just enough to exercise the `TreeSink`
/// contract outside of `RcDom`: every handle is an incrementing integer id,
/// with a side table for the few calls that need an element's name.
#[derive(Default)]
struct IdSink {
    next_id: Cell<usize>,
    names: RefCell<Vec<(usize, QualName)>>,
    positions: RefCell<Vec<(u64, u64)>>,
    encoding_indicators: RefCell<Vec<EncodingIndicator>>,
}

impl IdSink {
    fn fresh_id(&self) -> usize {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

impl TreeSink for IdSink {
    type Handle = usize;

    fn parse_error(&mut self, _code: ErrorCode, _msg: Cow<'static, str>) {}

    fn note_position(&mut self, pos: html5tree::buffer_queue::Pos) {
        self.positions.borrow_mut().push((pos.line, pos.col));
    }

    fn encoding_indicator(&mut self, indicator: EncodingIndicator) {
        self.encoding_indicators.borrow_mut().push(indicator);
    }

    fn get_document(&mut self) -> usize {
        0
    }

    fn elem_name(&self, target: &usize) -> QualName {
        self.names
            .borrow()
            .iter()
            .find(|(id, _)| id == target)
            .map(|(_, name)| name.clone())
            .expect("not an element")
    }

    fn create_element(&mut self, name: QualName, _attrs: Vec<Attribute>) -> usize {
        let id = self.fresh_id();
        self.names.borrow_mut().push((id, name));
        id
    }

    fn create_comment(&mut self, _text: StrTendril) -> usize {
        self.fresh_id()
    }

    fn create_doctype(&mut self, _name: StrTendril, _public_id: StrTendril, _system_id: StrTendril) -> usize {
        self.fresh_id()
    }

    fn append(&mut self, _parent: &usize, _child: NodeOrText<usize>) {}

    fn insert_before(&mut self, _sibling: &usize, _child: NodeOrText<usize>) {}

    fn append_doctype_to_document(&mut self, _name: StrTendril, _public_id: StrTendril, _system_id: StrTendril) {}

    fn detach(&mut self, _target: &usize) {}

    fn reparent_children(&mut self, _node: &usize, _new_parent: &usize) -> Result<(), SinkError> {
        Ok(())
    }

    fn add_attrs_if_missing(&mut self, _target: &usize, _attrs: Vec<Attribute>) {}

    fn same_node(&self, a: &usize, b: &usize) -> bool {
        a == b
    }

    fn parent_of(&self, _node: &usize) -> Option<usize> {
        None
    }

    fn set_quirks_mode(&mut self, _mode: QuirksMode) {}

    fn get_template_contents(&mut self, target: &usize) -> usize {
        target + 1
    }

    fn mark_script_already_started(&mut self, _target: &usize) {}

    fn is_mathml_annotation_xml_integration_point(&self, _target: &usize) -> bool {
        false
    }
}

#[test]
fn custom_sink_sees_note_position_before_each_token() {
    use html5tree::tokenizer::{Tokenizer, TokenizerOpts};
    use html5tree::tree_builder::{TreeBuilder, TreeBuilderOpts};
    use html5tree::buffer_queue::BufferQueue;

    let sink = IdSink::default();
    let tb = TreeBuilder::new(sink, TreeBuilderOpts::default());
    let tok = Tokenizer::new(tb, TokenizerOpts::default());
    let buffer = BufferQueue::new();
    buffer.push_back(StrTendril::from_slice("<p>hi</p>"));
    loop {
        match tok.feed(&buffer) {
            html5tree::tokenizer::TokenizerResult::Done => break,
            html5tree::tokenizer::TokenizerResult::Script(_) => unreachable!("no scripts here"),
        }
    }
    tok.end();

    let sink = tok.sink.sink.into_inner();
    assert!(!sink.positions.borrow().is_empty());
}

#[test]
fn custom_sink_receives_meta_charset_indicator() {
    use html5tree::tokenizer::{Tokenizer, TokenizerOpts};
    use html5tree::tree_builder::{TreeBuilder, TreeBuilderOpts};
    use html5tree::buffer_queue::BufferQueue;

    let sink = IdSink::default();
    let tb = TreeBuilder::new(sink, TreeBuilderOpts::default());
    let tok = Tokenizer::new(tb, TokenizerOpts::default());
    let buffer = BufferQueue::new();
    buffer.push_back(StrTendril::from_slice("<meta charset=\"utf-8\">"));
    loop {
        match tok.feed(&buffer) {
            html5tree::tokenizer::TokenizerResult::Done => break,
            html5tree::tokenizer::TokenizerResult::Script(_) => unreachable!("no scripts here"),
        }
    }
    tok.end();

    let sink = tok.sink.sink.into_inner();
    assert_eq!(sink.encoding_indicators.borrow().len(), 1);
    match &sink.encoding_indicators.borrow()[0] {
        EncodingIndicator::Charset(value) => assert!(value.eq_ignore_ascii_case("utf-8")),
        other => panic!("expected Charset, got {other:?}"),
    }
}
