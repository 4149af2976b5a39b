// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::borrow::Cow;

use crate::buffer_queue::Pos;
use crate::errors::ErrorCode;
use crate::interface::{Attribute, LocalName, Namespace};
use crate::tendril::StrTendril;
use crate::tokenizer::states;

pub use self::TagKind::{EndTag, StartTag};
pub use self::Token::{CharacterTokens, CommentToken, DoctypeToken, TagToken};
pub use self::Token::{EofToken, NullCharacterToken, ParseErrorToken};

/// A `DOCTYPE` token.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct Doctype {
    pub name: Option<StrTendril>,
    pub public_id: Option<StrTendril>,
    pub system_id: Option<StrTendril>,
    pub force_quirks: bool,
}

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum TagKind {
    StartTag,
    EndTag,
}

/// A tag token.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Tag {
    pub kind: TagKind,
    pub name: LocalName,
    pub self_closing: bool,
    pub attrs: Vec<Attribute>,
}

impl Tag {
    /// Are the tags equivalent when we don't care about attribute order?
    /// Also ignores the self-closing flag.
    pub fn equiv_modulo_attr_order(&self, other: &Tag) -> bool {
        if (self.kind != other.kind) || (self.name != other.name) {
            return false;
        }

        let mut self_attrs = self.attrs.clone();
        let mut other_attrs = other.attrs.clone();
        self_attrs.sort_by(|a, b| a.name.local.cmp(&b.name.local));
        other_attrs.sort_by(|a, b| a.name.local.cmp(&b.name.local));

        self_attrs == other_attrs
    }

    pub(crate) fn get_attribute(&self, name: &str) -> Option<StrTendril> {
        self.attrs
            .iter()
            .find(|attribute| {
                attribute.name.ns == Some(Namespace::Html) && &attribute.name.local[..] == name
            })
            .map(|attribute| attribute.value.clone())
    }
}

#[derive(PartialEq, Eq, Debug)]
pub enum Token {
    DoctypeToken(Doctype),
    TagToken(Tag),
    CommentToken(StrTendril),
    CharacterTokens(StrTendril),
    NullCharacterToken,
    EofToken,
    ParseErrorToken(ErrorCode, Cow<'static, str>),
}

#[derive(Debug, PartialEq)]
#[must_use]
pub enum TokenSinkResult<Handle> {
    Continue,
    Script(Handle),
    Plaintext,
    RawData(states::RawKind),
    /// The document indicated that the given encoding should be used to parse it.
    ///
    /// Parsing the label itself (per the WHATWG Encoding Standard) and acting on it
    /// is out of scope; the label is passed through unvalidated for a caller that
    /// cares about it.
    EncodingIndicator(StrTendril),
}

/// Types which can receive tokens from the tokenizer.
///
/// Implemented by [`crate::tree_builder::TreeBuilder`]; the tokenizer holds its
/// sink by shared reference (`&Self`, via `Cell`/`RefCell` fields) rather than
/// `&mut Self`, since the tree builder in turn needs to reach back into the
/// tokenizer to switch its state mid-token (RCDATA/RAWTEXT/script data/plaintext
/// switches driven by the start tag the tree builder just inserted).
pub trait TokenSink {
    type Handle;

    /// Process a token, reporting the input position at which it started.
    fn process_token(&self, token: Token, pos: Pos) -> TokenSinkResult<Self::Handle>;

    /// Signal sink that tokenization reached the end.
    fn end(&self) {}

    /// Used in the markup declaration open state. By default, this always
    /// returns false and thus all CDATA sections are tokenized as bogus
    /// comments.
    /// <https://html.spec.whatwg.org/multipage/#markup-declaration-open-state>
    fn adjusted_current_node_present_but_not_in_html_namespace(&self) -> bool {
        false
    }
}
