// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A spec-faithful WHATWG HTML5 tree-construction parser.
//!
//! Feeds a stream of Unicode scalar values through the tokenizer state
//! machine and the tree construction insertion-mode dispatcher, producing
//! a DOM-like tree through a caller-supplied [`interface::TreeSink`] and a
//! list of [`errors::ParseError`]s. See [`driver::parse`] and
//! [`driver::parse_fragment`] for the entry points, and [`rcdom`] for a
//! ready-made reference-counted tree sink.

#![forbid(unsafe_code)]
#![cfg_attr(test, deny(warnings))]
#![allow(unused_parens)]

#[macro_use]
extern crate log;

#[macro_use]
mod macros;

#[macro_use]
pub mod util;

pub mod buffer_queue;
pub mod driver;
mod encoding;
pub mod errors;
pub mod interface;
pub mod rcdom;
pub mod tokenizer;
pub mod tree_builder;

pub use driver::{parse, parse_fragment, ParseFragmentOutput, ParseOpts, ParseOutput};
pub use errors::{ErrorCode, OptionsError, ParseError, SinkError};
pub use interface::{
    Attribute, ExpandedName, LocalName, Namespace, NodeOrText, QualName, QuirksMode, TreeSink,
};

/// Re-export of the tendril crate, used throughout for zero-copy-friendly
/// string accumulation.
pub mod tendril {
    pub use tendril::*;
}
