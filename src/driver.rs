// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The default entry points: feed a complete string through the tokenizer
//! and tree builder, using [`RcDom`] as the sink.
//!
//! A caller that wants a different tree sink drives [`tokenizer::Tokenizer`]
//! and [`tree_builder::TreeBuilder`] directly; these two functions are only
//! the convenience path.

use crate::buffer_queue::BufferQueue;
use crate::errors::{OptionsError, ParseError};
use crate::interface::{QualName, TreeSink};
use crate::rcdom::{Handle, RcDom};
use crate::tendril::StrTendril;
use crate::tokenizer::{Tokenizer, TokenizerOpts, TokenizerResult};
use crate::tree_builder::{TreeBuilder, TreeBuilderOpts};

/// Options controlling a parse, independent of the tree sink in use.
///
/// Field names and defaults match the library-level contract: scripting is
/// off by default (so `<noscript>` contents parse as a normal subtree),
/// error locations are tracked by default, and node source spans are not.
#[derive(Clone, Copy, Debug)]
pub struct ParseOpts {
    /// Whether `<noscript>` contents are treated as a single text node
    /// (scripting enabled) or a normal subtree (scripting disabled).
    pub scripting_enabled: bool,
    /// Whether `ParseError::location` is populated. Disabling this skips
    /// the per-token position bookkeeping a sink would otherwise do.
    pub track_error_locations: bool,
    /// Whether a sink should record the source span each node was created
    /// from. `RcDom` does not act on this; a sink that wants spans reads
    /// the position a `note_position` call preceding each `create_*` call
    /// reported and correlates it itself.
    pub track_node_source_spans: bool,
}

impl Default for ParseOpts {
    fn default() -> ParseOpts {
        ParseOpts {
            scripting_enabled: false,
            track_error_locations: true,
            track_node_source_spans: false,
        }
    }
}

impl ParseOpts {
    fn tokenizer_opts(&self) -> TokenizerOpts {
        TokenizerOpts::default()
    }

    fn tree_builder_opts(&self) -> TreeBuilderOpts {
        TreeBuilderOpts {
            scripting_enabled: self.scripting_enabled,
            ..Default::default()
        }
    }
}

/// The result of [`parse`].
pub struct ParseOutput {
    /// The document root.
    pub document: Handle,
    /// Parse errors encountered, in document order.
    pub errors: Vec<ParseError>,
}

/// The result of [`parse_fragment`].
pub struct ParseFragmentOutput {
    /// The fragment's top-level nodes, in document order.
    pub nodes: Vec<Handle>,
    /// Parse errors encountered, in document order.
    pub errors: Vec<ParseError>,
}

/// Parse a complete HTML document into an [`RcDom`] tree.
pub fn parse(input: &str, opts: ParseOpts) -> ParseOutput {
    let sink = RcDom::new(opts.track_error_locations);
    let tb = TreeBuilder::new(sink, opts.tree_builder_opts());
    let tok = Tokenizer::new(tb, opts.tokenizer_opts());

    let buffer = BufferQueue::new();
    buffer.push_back(StrTendril::from_slice(input));
    drive_tokenizer(&tok, &buffer);
    tok.end();

    let sink = tok.sink.sink.into_inner();
    ParseOutput {
        document: sink.document,
        errors: sink.errors.into_inner(),
    }
}

/// Parse an HTML fragment as it would appear as the contents of
/// `context_element`, e.g. `QualName::html("td")` for fragment parsing in
/// a table-cell context.
///
/// Returns [`OptionsError::InvalidFragmentContext`] if `context_element`
/// has no local name.
pub fn parse_fragment(
    input: &str,
    context_element: QualName,
    opts: ParseOpts,
) -> Result<ParseFragmentOutput, OptionsError> {
    if context_element.local.is_empty() {
        return Err(OptionsError::InvalidFragmentContext(format!("{:?}", context_element)));
    }

    let context_local_name = context_element.local.clone();
    let mut sink = RcDom::new(opts.track_error_locations);
    let context_handle = sink.create_element(context_element, vec![]);

    let tb = TreeBuilder::new_for_fragment(
        sink,
        context_handle,
        None,
        opts.tree_builder_opts(),
    );
    let initial_state = tb.tokenizer_state_for_context_elem(opts.scripting_enabled);

    let mut tok_opts = opts.tokenizer_opts();
    tok_opts.initial_state = Some(initial_state);
    tok_opts.last_start_tag_name = Some(context_local_name.to_string());
    let tok = Tokenizer::new(tb, tok_opts);

    let buffer = BufferQueue::new();
    buffer.push_back(StrTendril::from_slice(input));
    drive_tokenizer(&tok, &buffer);
    tok.end();

    let sink = tok.sink.sink.into_inner();
    // The fragment algorithm parses into a synthetic `html` root (see
    // `TreeBuilder::new_for_fragment`); the fragment's own nodes are that
    // root's children, not the root itself.
    let root = sink.document.children.borrow()[0].clone();
    let nodes = root.children.borrow().clone();
    Ok(ParseFragmentOutput {
        nodes,
        errors: sink.errors.into_inner(),
    })
}

/// Feed `buffer` to `tok` to exhaustion, acknowledging any script element
/// the tree builder pauses on. Script execution is out of scope, so this
/// treats every script as having already run by the time tokenization
/// resumes.
fn drive_tokenizer(tok: &Tokenizer<TreeBuilder<Handle, RcDom>>, buffer: &BufferQueue) {
    loop {
        match tok.feed(buffer) {
            TokenizerResult::Done => break,
            TokenizerResult::Script(node) => {
                tok.sink.sink.borrow_mut().mark_script_already_started(&node);
            },
        }
    }
}
