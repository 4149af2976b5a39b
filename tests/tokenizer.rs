// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tokenizer-level tests: feed strings directly through `Tokenizer` with a
//! capturing `TokenSink`, independent of tree construction.

use std::cell::RefCell;

use html5tree::buffer_queue::BufferQueue;
use html5tree::errors::ErrorCode;
use html5tree::tendril::StrTendril;
use html5tree::tokenizer::{Tag, TagKind, Token, Tokenizer, TokenizerOpts, TokenizerResult};
use html5tree::tokenizer::{TokenSink, TokenSinkResult};

#[derive(Default)]
struct CapturingSink {
    tokens: RefCell<Vec<Token>>,
}

impl TokenSink for CapturingSink {
    type Handle = ();

    fn process_token(&self, token: Token, _pos: html5tree::buffer_queue::Pos) -> TokenSinkResult<()> {
        self.tokens.borrow_mut().push(token);
        TokenSinkResult::Continue
    }
}

fn tokenize(input: &str) -> Vec<Token> {
    tokenize_with_opts(input, TokenizerOpts::default())
}

fn tokenize_with_opts(input: &str, opts: TokenizerOpts) -> Vec<Token> {
    let tok = Tokenizer::new(CapturingSink::default(), opts);
    let buffer = BufferQueue::new();
    buffer.push_back(StrTendril::from_slice(input));
    loop {
        match tok.feed(&buffer) {
            TokenizerResult::Done => break,
            TokenizerResult::Script(()) => {},
        }
    }
    tok.end();
    tok.sink.tokens.into_inner()
}

fn tag_names(tokens: &[Token]) -> Vec<(TagKind, String)> {
    tokens
        .iter()
        .filter_map(|t| match t {
            Token::TagToken(Tag { kind, name, .. }) => Some((*kind, name.to_string())),
            _ => None,
        })
        .collect()
}

#[test]
fn simple_start_and_end_tags() {
    let tokens = tokenize("<p>hello</p>");
    let tags = tag_names(&tokens);
    assert_eq!(tags, vec![(TagKind::StartTag, "p".to_string()), (TagKind::EndTag, "p".to_string())]);
    assert!(tokens
        .iter()
        .any(|t| matches!(t, Token::CharacterTokens(text) if &**text == "hello")));
}

#[test]
fn attributes_are_collected_on_the_tag() {
    let tokens = tokenize(r#"<a href="/x" class='y'>"#);
    let tag = tokens
        .into_iter()
        .find_map(|t| match t {
            Token::TagToken(tag) if &*tag.name == "a" => Some(tag),
            _ => None,
        })
        .expect("an <a> tag token");
    assert_eq!(tag.attrs.len(), 2);
    assert!(tag
        .attrs
        .iter()
        .any(|a| &*a.name.local == "href" && &*a.value == "/x"));
    assert!(tag
        .attrs
        .iter()
        .any(|a| &*a.name.local == "class" && &*a.value == "y"));
}

#[test]
fn named_character_reference_is_decoded() {
    let tokens = tokenize("&amp;&lt;&gt;");
    let text: String = tokens
        .iter()
        .filter_map(|t| match t {
            Token::CharacterTokens(s) => Some(s.to_string()),
            _ => None,
        })
        .collect();
    assert_eq!(text, "&<>");
}

#[test]
fn unterminated_numeric_reference_reports_an_error() {
    let tokens = tokenize("&#x41");
    assert!(tokens.iter().any(|t| matches!(
        t,
        Token::ParseErrorToken(ErrorCode::MissingSemicolonAfterCharacterReference, _)
    )));
    let text: String = tokens
        .iter()
        .filter_map(|t| match t {
            Token::CharacterTokens(s) => Some(s.to_string()),
            _ => None,
        })
        .collect();
    assert_eq!(text, "A");
}

#[test]
fn comments_are_tokenized() {
    let tokens = tokenize("<!-- a comment -->");
    assert!(tokens
        .iter()
        .any(|t| matches!(t, Token::CommentToken(text) if &**text == " a comment ")));
}

#[test]
fn doctype_name_is_captured() {
    let tokens = tokenize("<!DOCTYPE html>");
    let doctype = tokens
        .into_iter()
        .find_map(|t| match t {
            Token::DoctypeToken(dt) => Some(dt),
            _ => None,
        })
        .expect("a doctype token");
    assert_eq!(doctype.name.as_deref(), Some("html"));
    assert!(!doctype.force_quirks);
}

#[test]
fn null_characters_are_replaced_with_a_dedicated_token() {
    let tokens = tokenize("a\0b");
    assert!(matches!(tokens[1], Token::NullCharacterToken));
    assert!(tokens
        .iter()
        .any(|t| matches!(t, Token::ParseErrorToken(ErrorCode::UnexpectedNullCharacter, _))));
}

#[test]
fn eof_in_the_middle_of_a_tag_name_is_an_error() {
    let tokens = tokenize("<di");
    assert!(tokens
        .iter()
        .any(|t| matches!(t, Token::ParseErrorToken(ErrorCode::EofInTag, _))));
    assert!(matches!(tokens.last(), Some(Token::EofToken)));
}

#[test]
fn raw_text_mode_does_not_tokenize_tags_inside_script() {
    use html5tree::tokenizer::states::{RawData, ScriptData};

    let mut opts = TokenizerOpts::default();
    opts.initial_state = Some(RawData(ScriptData));
    opts.last_start_tag_name = Some("script".to_string());
    let tokens = tokenize_with_opts("var x = 1 < 2;</script>", opts);

    let text: String = tokens
        .iter()
        .filter_map(|t| match t {
            Token::CharacterTokens(s) => Some(s.to_string()),
            _ => None,
        })
        .collect();
    assert_eq!(text, "var x = 1 < 2;");
    assert!(tag_names(&tokens).contains(&(TagKind::EndTag, "script".to_string())));
}
