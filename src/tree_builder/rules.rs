// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// The tree builder rules, as a single, enormous nested match expression.

use crate::interface::Quirks;
use crate::tokenizer::states::{Rawtext, Rcdata, ScriptData};
use crate::tokenizer::{EndTag, StartTag};
use crate::tree_builder::tag_sets::*;
use crate::tree_builder::types::*;
use crate::tree_builder::{
    create_element, html_elem, NodeOrText::AppendNode, StrTendril, Tag, TreeBuilder, TreeSink,
};
use crate::{ExpandedName, Namespace, QualName};
use std::borrow::Cow::Borrowed;

use crate::tendril::SliceExt;

fn any_not_whitespace(x: &StrTendril) -> bool {
    // FIXME: this might be much faster as a byte scan
    x.chars().any(|c| !c.is_ascii_whitespace())
}

fn current_node<Handle>(open_elems: &[Handle]) -> &Handle {
    open_elems.last().expect("no current element")
}

#[doc(hidden)]
impl<Handle, Sink> TreeBuilder<Handle, Sink>
where
    Handle: Clone,
    Sink: TreeSink<Handle = Handle>,
{
    pub(crate) fn step(&self, mode: InsertionMode, token: Token) -> ProcessResult<Handle> {
        self.debug_step(mode, &token);

        match mode {
            //§ the-initial-insertion-mode
            InsertionMode::Initial => match token {
                Token::Characters(SplitStatus::NotSplit, text) => {
                    ProcessResult::SplitWhitespace(text)
                },
                Token::Characters(SplitStatus::Whitespace, _) => ProcessResult::Done,
                Token::Comment(text) => self.append_comment_to_doc(text),
                token => {
                    if !self.opts.iframe_srcdoc {
                        self.unexpected(&token);
                        self.set_quirks_mode(Quirks);
                    }
                    ProcessResult::Reprocess(InsertionMode::BeforeHtml, token)
                },
            },

            //§ the-before-html-insertion-mode
            InsertionMode::BeforeHtml => match token {
                Token::Characters(SplitStatus::NotSplit, text) => {
                    ProcessResult::SplitWhitespace(text)
                },
                Token::Characters(SplitStatus::Whitespace, _) => ProcessResult::Done,
                Token::Comment(text) => self.append_comment_to_doc(text),

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "html" => {
                    self.create_root(tag.attrs);
                    self.mode.set(InsertionMode::BeforeHead);
                    ProcessResult::Done
                },

                token @ Token::Tag(Tag { kind: EndTag, ref name, .. })
                    if matches!(&**name, "head" | "body" | "html" | "br") =>
                {
                    self.create_root(vec![]);
                    ProcessResult::Reprocess(InsertionMode::BeforeHead, token)
                },

                Token::Tag(tag) if tag.kind == EndTag => self.unexpected(&tag),

                token => {
                    self.create_root(vec![]);
                    ProcessResult::Reprocess(InsertionMode::BeforeHead, token)
                },
            },

            //§ the-before-head-insertion-mode
            InsertionMode::BeforeHead => match token {
                Token::Characters(SplitStatus::NotSplit, text) => {
                    ProcessResult::SplitWhitespace(text)
                },
                Token::Characters(SplitStatus::Whitespace, _) => ProcessResult::Done,
                Token::Comment(text) => self.append_comment(text),

                token @ Token::Tag(Tag { kind: StartTag, ref name, .. }) if &**name == "html" => {
                    self.step(InsertionMode::InBody, token)
                },

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "head" => {
                    *self.head_elem.borrow_mut() = Some(self.insert_element_for(tag));
                    self.mode.set(InsertionMode::InHead);
                    ProcessResult::Done
                },

                token @ Token::Tag(Tag { kind: EndTag, ref name, .. })
                    if matches!(&**name, "head" | "body" | "html" | "br") =>
                {
                    *self.head_elem.borrow_mut() = Some(self.insert_phantom("head".into()));
                    ProcessResult::Reprocess(InsertionMode::InHead, token)
                },

                Token::Tag(tag) if tag.kind == EndTag => self.unexpected(&tag),

                token => {
                    *self.head_elem.borrow_mut() = Some(self.insert_phantom("head".into()));
                    ProcessResult::Reprocess(InsertionMode::InHead, token)
                },
            },

            //§ parsing-main-inhead
            // https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inhead
            InsertionMode::InHead => match token {
                Token::Characters(SplitStatus::NotSplit, text) => {
                    ProcessResult::SplitWhitespace(text)
                },
                Token::Characters(SplitStatus::Whitespace, text) => self.append_text(text),
                Token::Comment(text) => self.append_comment(text),

                token @ Token::Tag(Tag { kind: StartTag, ref name, .. }) if &**name == "html" => {
                    self.step(InsertionMode::InBody, token)
                },

                Token::Tag(tag)
                    if tag.kind == StartTag
                        && matches!(&*tag.name, "base" | "basefont" | "bgsound" | "link" | "meta") =>
                {
                    if &*tag.name == "meta" {
                        if let Some(indicator) = self.meta_encoding_indicator(&tag) {
                            self.sink.borrow_mut().encoding_indicator(indicator);
                        }
                    }
                    self.insert_and_pop_element_for(tag);
                    ProcessResult::DoneAckSelfClosing
                },

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "title" => {
                    self.parse_raw_data(tag, Rcdata)
                },

                Token::Tag(tag)
                    if tag.kind == StartTag
                        && matches!(&*tag.name, "noframes" | "style" | "noscript") =>
                {
                    if !self.opts.scripting_enabled && &*tag.name == "noscript" {
                        self.insert_element_for(tag);
                        self.mode.set(InsertionMode::InHeadNoscript);
                        ProcessResult::Done
                    } else {
                        self.parse_raw_data(tag, Rawtext)
                    }
                },

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "script" => {
                    let elem = create_element(&self.sink, QualName::html("script"), tag.attrs);
                    if self.is_fragment() {
                        self.sink.borrow_mut().mark_script_already_started(&elem);
                    }
                    self.insert_appropriately(AppendNode(elem.clone()), None);
                    self.open_elems.borrow_mut().push(elem);
                    self.to_raw_text_mode(ScriptData)
                },

                Token::Tag(tag) if tag.kind == EndTag && &*tag.name == "head" => {
                    self.pop();
                    self.mode.set(InsertionMode::AfterHead);
                    ProcessResult::Done
                },

                token @ Token::Tag(Tag { kind: EndTag, ref name, .. })
                    if matches!(&**name, "body" | "html" | "br") =>
                {
                    self.pop();
                    ProcessResult::Reprocess(InsertionMode::AfterHead, token)
                },

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "template" => {
                    self.active_formatting.borrow_mut().push(FormatEntry::Marker);
                    self.frameset_ok.set(false);
                    self.mode.set(InsertionMode::InTemplate);
                    self.template_modes.borrow_mut().push(InsertionMode::InTemplate);
                    self.insert_element_for(tag);
                    ProcessResult::Done
                },

                Token::Tag(tag) if tag.kind == EndTag && &*tag.name == "template" => {
                    if !self.in_html_elem_named("template") {
                        self.unexpected(&tag);
                    } else {
                        self.generate_implied_end_tags(thorough_implied_end);
                        self.expect_to_close("template");
                        self.clear_active_formatting_to_marker();
                        self.template_modes.borrow_mut().pop();
                        self.mode.set(self.reset_insertion_mode());
                    }
                    ProcessResult::Done
                },

                token @ Token::Tag(Tag { kind: StartTag, ref name, .. }) if &**name == "head" => {
                    self.unexpected(&token)
                },
                Token::Tag(tag) if tag.kind == EndTag => self.unexpected(&tag),

                token => {
                    self.pop();
                    ProcessResult::Reprocess(InsertionMode::AfterHead, token)
                },
            },

            //§ parsing-main-inheadnoscript
            InsertionMode::InHeadNoscript => match token {
                token @ Token::Tag(Tag { kind: StartTag, ref name, .. }) if &**name == "html" => {
                    self.step(InsertionMode::InBody, token)
                },

                Token::Tag(tag) if tag.kind == EndTag && &*tag.name == "noscript" => {
                    self.pop();
                    self.mode.set(InsertionMode::InHead);
                    ProcessResult::Done
                },

                Token::Characters(SplitStatus::NotSplit, text) => {
                    ProcessResult::SplitWhitespace(text)
                },
                token @ Token::Characters(SplitStatus::Whitespace, _) => {
                    self.step(InsertionMode::InHead, token)
                },

                token @ Token::Comment(_) => self.step(InsertionMode::InHead, token),

                token @ Token::Tag(Tag { kind: StartTag, ref name, .. })
                    if matches!(
                        &**name,
                        "basefont" | "bgsound" | "link" | "meta" | "noframes" | "style"
                    ) =>
                {
                    self.step(InsertionMode::InHead, token)
                },

                token @ Token::Tag(Tag { kind: EndTag, ref name, .. }) if &**name == "br" => {
                    self.unexpected(&token);
                    self.pop();
                    ProcessResult::Reprocess(InsertionMode::InHead, token)
                },

                token @ Token::Tag(Tag { kind: StartTag, ref name, .. })
                    if matches!(&**name, "head" | "noscript") =>
                {
                    self.unexpected(&token)
                },
                Token::Tag(tag) if tag.kind == EndTag => self.unexpected(&tag),

                token => {
                    self.unexpected(&token);
                    self.pop();
                    ProcessResult::Reprocess(InsertionMode::InHead, token)
                },
            },

            //§ the-after-head-insertion-mode
            InsertionMode::AfterHead => match token {
                Token::Characters(SplitStatus::NotSplit, text) => {
                    ProcessResult::SplitWhitespace(text)
                },
                Token::Characters(SplitStatus::Whitespace, text) => self.append_text(text),
                Token::Comment(text) => self.append_comment(text),

                token @ Token::Tag(Tag { kind: StartTag, ref name, .. }) if &**name == "html" => {
                    self.step(InsertionMode::InBody, token)
                },

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "body" => {
                    self.insert_element_for(tag);
                    self.frameset_ok.set(false);
                    self.mode.set(InsertionMode::InBody);
                    ProcessResult::Done
                },

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "frameset" => {
                    self.insert_element_for(tag);
                    self.mode.set(InsertionMode::InFrameset);
                    ProcessResult::Done
                },

                token @ Token::Tag(Tag { kind: StartTag, ref name, .. })
                    if matches!(
                        &**name,
                        "base" | "basefont" | "bgsound" | "link" | "meta" | "noframes"
                            | "script" | "style" | "template" | "title"
                    ) =>
                {
                    self.unexpected(&token);
                    let head = self.head_elem.borrow().as_ref().expect("no head element").clone();
                    self.push(&head);
                    let result = self.step(InsertionMode::InHead, token);
                    self.remove_from_stack(&head);
                    result
                },

                token @ Token::Tag(Tag { kind: EndTag, ref name, .. }) if &**name == "template" => {
                    self.step(InsertionMode::InHead, token)
                },

                token @ Token::Tag(Tag { kind: EndTag, ref name, .. })
                    if matches!(&**name, "body" | "html" | "br") =>
                {
                    self.insert_phantom("body".into());
                    ProcessResult::Reprocess(InsertionMode::InBody, token)
                },

                token @ Token::Tag(Tag { kind: StartTag, ref name, .. }) if &**name == "head" => {
                    self.unexpected(&token)
                },
                Token::Tag(tag) if tag.kind == EndTag => self.unexpected(&tag),

                token => {
                    self.insert_phantom("body".into());
                    ProcessResult::Reprocess(InsertionMode::InBody, token)
                },
            },

            //§ parsing-main-inbody
            InsertionMode::InBody => match token {
                Token::NullCharacter => self.unexpected(&token),

                Token::Characters(_, text) => {
                    self.reconstruct_active_formatting_elements();
                    if any_not_whitespace(&text) {
                        self.frameset_ok.set(false);
                    }
                    self.append_text(text)
                },

                Token::Comment(text) => self.append_comment(text),

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "html" => {
                    self.unexpected(&tag);
                    if !self.in_html_elem_named("template") {
                        let open_elems = self.open_elems.borrow();
                        let top = html_elem(&open_elems);
                        self.sink.borrow_mut().add_attrs_if_missing(top, tag.attrs);
                    }
                    ProcessResult::Done
                },

                token @ Token::Tag(Tag { kind, ref name, .. })
                    if (kind == StartTag
                        && matches!(
                            &**name,
                            "base" | "basefont" | "bgsound" | "link" | "meta" | "noframes"
                                | "script" | "style" | "template" | "title"
                        ))
                        || (kind == EndTag && &**name == "template") =>
                {
                    self.step(InsertionMode::InHead, token)
                },

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "body" => {
                    self.unexpected(&tag);
                    let body_elem = self.body_elem().as_deref().cloned();
                    match body_elem {
                        Some(ref node)
                            if self.open_elems.borrow().len() != 1
                                && !self.in_html_elem_named("template") =>
                        {
                            self.frameset_ok.set(false);
                            self.sink.borrow_mut().add_attrs_if_missing(node, tag.attrs)
                        },
                        _ => {},
                    }
                    ProcessResult::Done
                },

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "frameset" => {
                    self.unexpected(&tag);
                    if !self.frameset_ok.get() {
                        return ProcessResult::Done;
                    }

                    let Some(body) = self.body_elem().map(|b| b.clone()) else {
                        return ProcessResult::Done;
                    };
                    self.sink.borrow_mut().detach(&body);

                    // FIXME: can we get here in the fragment case?
                    // What to do with the first element then?
                    self.open_elems.borrow_mut().truncate(1);
                    self.insert_element_for(tag);
                    self.mode.set(InsertionMode::InFrameset);
                    ProcessResult::Done
                },

                Token::Eof => {
                    if !self.template_modes.borrow().is_empty() {
                        self.step(InsertionMode::InTemplate, token)
                    } else {
                        self.check_body_end();
                        self.stop_parsing()
                    }
                },

                Token::Tag(tag) if tag.kind == EndTag && &*tag.name == "body" => {
                    if self.in_scope_named(default_scope, "body") {
                        self.check_body_end();
                        self.mode.set(InsertionMode::AfterBody);
                    } else {
                        self.sink.borrow_mut().parse_error(
                            crate::errors::ErrorCode::GenericParseError,
                            Borrowed("</body> with no <body> in scope"),
                        );
                    }
                    ProcessResult::Done
                },

                token @ Token::Tag(Tag { kind: EndTag, ref name, .. }) if &**name == "html" => {
                    if self.in_scope_named(default_scope, "body") {
                        self.check_body_end();
                        ProcessResult::Reprocess(InsertionMode::AfterBody, token)
                    } else {
                        self.sink.borrow_mut().parse_error(
                            crate::errors::ErrorCode::GenericParseError,
                            Borrowed("</html> with no <body> in scope"),
                        );
                        ProcessResult::Done
                    }
                },

                Token::Tag(tag)
                    if tag.kind == StartTag
                        && matches!(
                            &*tag.name,
                            "address" | "article" | "aside" | "blockquote" | "center" | "details"
                                | "dialog" | "dir" | "div" | "dl" | "fieldset" | "figcaption"
                                | "figure" | "footer" | "header" | "hgroup" | "main" | "nav"
                                | "ol" | "p" | "search" | "section" | "summary" | "ul"
                        ) =>
                {
                    self.close_p_element_in_button_scope();
                    self.insert_element_for(tag);
                    ProcessResult::Done
                },

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "menu" => {
                    self.close_p_element_in_button_scope();
                    self.insert_element_for(tag);
                    ProcessResult::Done
                },

                Token::Tag(tag)
                    if tag.kind == StartTag
                        && matches!(&*tag.name, "h1" | "h2" | "h3" | "h4" | "h5" | "h6") =>
                {
                    self.close_p_element_in_button_scope();
                    if self.current_node_in(heading_tag) {
                        self.sink.borrow_mut().parse_error(
                            crate::errors::ErrorCode::GenericParseError,
                            Borrowed("nested heading tags"),
                        );
                        self.pop();
                    }
                    self.insert_element_for(tag);
                    ProcessResult::Done
                },

                Token::Tag(tag)
                    if tag.kind == StartTag && matches!(&*tag.name, "pre" | "listing") =>
                {
                    self.close_p_element_in_button_scope();
                    self.insert_element_for(tag);
                    self.ignore_lf.set(true);
                    self.frameset_ok.set(false);
                    ProcessResult::Done
                },

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "form" => {
                    if self.form_elem.borrow().is_some() && !self.in_html_elem_named("template") {
                        self.sink.borrow_mut().parse_error(
                            crate::errors::ErrorCode::GenericParseError,
                            Borrowed("nested forms"),
                        );
                    } else {
                        self.close_p_element_in_button_scope();
                        let elem = self.insert_element_for(tag);
                        if !self.in_html_elem_named("template") {
                            *self.form_elem.borrow_mut() = Some(elem);
                        }
                    }
                    ProcessResult::Done
                },

                Token::Tag(tag)
                    if tag.kind == StartTag && matches!(&*tag.name, "li" | "dd" | "dt") =>
                {
                    declare_tag_set!(close_list = "li");
                    declare_tag_set!(close_defn = "dd" "dt");
                    declare_tag_set!(extra_special = [special_tag] - "address" "div" "p");
                    let list = match &*tag.name {
                        "li" => true,
                        "dd" | "dt" => false,
                        _ => unreachable!(),
                    };

                    self.frameset_ok.set(false);

                    let mut to_close = None;
                    for node in self.open_elems.borrow().iter().rev() {
                        let elem_name = self.sink.borrow().elem_name(node);
                        let name = elem_name.expanded();
                        let can_close = if list {
                            close_list(name)
                        } else {
                            close_defn(name)
                        };
                        if can_close {
                            to_close = Some(name.local.to_owned());
                            break;
                        }
                        if extra_special(name) {
                            break;
                        }
                    }

                    if let Some(name) = to_close {
                        self.generate_implied_end_except(&name);
                        self.expect_to_close(&name);
                    }

                    self.close_p_element_in_button_scope();
                    self.insert_element_for(tag);
                    ProcessResult::Done
                },

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "plaintext" => {
                    self.close_p_element_in_button_scope();
                    self.insert_element_for(tag);
                    ProcessResult::ToPlaintext
                },

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "button" => {
                    if self.in_scope_named(default_scope, "button") {
                        self.sink.borrow_mut().parse_error(
                            crate::errors::ErrorCode::GenericParseError,
                            Borrowed("nested buttons"),
                        );
                        self.generate_implied_end_tags(cursory_implied_end);
                        self.pop_until_named("button");
                    }
                    self.reconstruct_active_formatting_elements();
                    self.insert_element_for(tag);
                    self.frameset_ok.set(false);
                    ProcessResult::Done
                },

                Token::Tag(tag)
                    if tag.kind == EndTag
                        && matches!(
                            &*tag.name,
                            "address" | "article" | "aside" | "blockquote" | "button" | "center"
                                | "details" | "dialog" | "dir" | "div" | "dl" | "fieldset"
                                | "figcaption" | "figure" | "footer" | "header" | "hgroup"
                                | "listing" | "main" | "menu" | "nav" | "ol" | "pre" | "search"
                                | "section" | "summary" | "ul"
                        ) =>
                {
                    if !self.in_scope_named(default_scope, &tag.name) {
                        self.unexpected(&tag);
                    } else {
                        self.generate_implied_end_tags(cursory_implied_end);
                        self.expect_to_close(&tag.name);
                    }
                    ProcessResult::Done
                },

                Token::Tag(tag) if tag.kind == EndTag && &*tag.name == "form" => {
                    if !self.in_html_elem_named("template") {
                        let Some(node) = self.form_elem.take() else {
                            self.sink.borrow_mut().parse_error(
                                crate::errors::ErrorCode::GenericParseError,
                                Borrowed("Null form element pointer on </form>"),
                            );
                            return ProcessResult::Done;
                        };
                        if !self.in_scope(default_scope, |n| self.sink.borrow().same_node(&node, &n)) {
                            self.sink.borrow_mut().parse_error(
                                crate::errors::ErrorCode::GenericParseError,
                                Borrowed("Form element not in scope on </form>"),
                            );
                            return ProcessResult::Done;
                        }
                        self.generate_implied_end_tags(cursory_implied_end);
                        let current = self.current_node().clone();
                        self.remove_from_stack(&node);
                        if !self.sink.borrow().same_node(&current, &node) {
                            self.sink.borrow_mut().parse_error(
                                crate::errors::ErrorCode::GenericParseError,
                                Borrowed("Bad open element on </form>"),
                            );
                        }
                    } else {
                        if !self.in_scope_named(default_scope, "form") {
                            self.sink.borrow_mut().parse_error(
                                crate::errors::ErrorCode::GenericParseError,
                                Borrowed("Form element not in scope on </form>"),
                            );
                            return ProcessResult::Done;
                        }
                        self.generate_implied_end_tags(cursory_implied_end);
                        if !self.current_node_named("form") {
                            self.sink.borrow_mut().parse_error(
                                crate::errors::ErrorCode::GenericParseError,
                                Borrowed("Bad open element on </form>"),
                            );
                        }
                        self.pop_until_named("form");
                    }
                    ProcessResult::Done
                },

                Token::Tag(tag) if tag.kind == EndTag && &*tag.name == "p" => {
                    if !self.in_scope_named(button_scope, "p") {
                        self.sink.borrow_mut().parse_error(
                            crate::errors::ErrorCode::GenericParseError,
                            Borrowed("No <p> tag to close"),
                        );
                        self.insert_phantom("p".into());
                    }
                    self.close_p_element();
                    ProcessResult::Done
                },

                Token::Tag(tag)
                    if tag.kind == EndTag && matches!(&*tag.name, "li" | "dd" | "dt") =>
                {
                    let in_scope = if &*tag.name == "li" {
                        self.in_scope_named(list_item_scope, &tag.name)
                    } else {
                        self.in_scope_named(default_scope, &tag.name)
                    };
                    if in_scope {
                        self.generate_implied_end_except(&tag.name);
                        self.expect_to_close(&tag.name);
                    } else {
                        self.sink.borrow_mut().parse_error(
                            crate::errors::ErrorCode::GenericParseError,
                            Borrowed("No matching tag to close"),
                        );
                    }
                    ProcessResult::Done
                },

                Token::Tag(tag)
                    if tag.kind == EndTag
                        && matches!(&*tag.name, "h1" | "h2" | "h3" | "h4" | "h5" | "h6") =>
                {
                    if self.in_scope(default_scope, |n| self.elem_in(&n, heading_tag)) {
                        self.generate_implied_end_tags(cursory_implied_end);
                        if !self.current_node_named(&tag.name) {
                            self.sink.borrow_mut().parse_error(
                                crate::errors::ErrorCode::GenericParseError,
                                Borrowed("Closing wrong heading tag"),
                            );
                        }
                        self.pop_until(heading_tag);
                    } else {
                        self.sink.borrow_mut().parse_error(
                            crate::errors::ErrorCode::GenericParseError,
                            Borrowed("No heading tag to close"),
                        );
                    }
                    ProcessResult::Done
                },

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "a" => {
                    self.handle_misnested_a_tags(&tag);
                    self.reconstruct_active_formatting_elements();
                    self.create_formatting_element_for(tag);
                    ProcessResult::Done
                },

                Token::Tag(tag)
                    if tag.kind == StartTag
                        && matches!(
                            &*tag.name,
                            "b" | "big" | "code" | "em" | "font" | "i" | "s" | "small"
                                | "strike" | "strong" | "tt" | "u"
                        ) =>
                {
                    self.reconstruct_active_formatting_elements();
                    self.create_formatting_element_for(tag);
                    ProcessResult::Done
                },

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "nobr" => {
                    self.reconstruct_active_formatting_elements();
                    if self.in_scope_named(default_scope, "nobr") {
                        self.sink.borrow_mut().parse_error(
                            crate::errors::ErrorCode::GenericParseError,
                            Borrowed("Nested <nobr>"),
                        );
                        self.adoption_agency("nobr");
                        self.reconstruct_active_formatting_elements();
                    }
                    self.create_formatting_element_for(tag);
                    ProcessResult::Done
                },

                Token::Tag(tag)
                    if tag.kind == EndTag
                        && matches!(
                            &*tag.name,
                            "a" | "b" | "big" | "code" | "em" | "font" | "i" | "nobr" | "s"
                                | "small" | "strike" | "strong" | "tt" | "u"
                        ) =>
                {
                    self.adoption_agency(&tag.name);
                    ProcessResult::Done
                },

                Token::Tag(tag)
                    if tag.kind == StartTag
                        && matches!(&*tag.name, "applet" | "marquee" | "object") =>
                {
                    self.reconstruct_active_formatting_elements();
                    self.insert_element_for(tag);
                    self.active_formatting.borrow_mut().push(FormatEntry::Marker);
                    self.frameset_ok.set(false);
                    ProcessResult::Done
                },

                Token::Tag(tag)
                    if tag.kind == EndTag
                        && matches!(&*tag.name, "applet" | "marquee" | "object") =>
                {
                    if !self.in_scope_named(default_scope, &tag.name) {
                        self.unexpected(&tag);
                    } else {
                        self.generate_implied_end_tags(cursory_implied_end);
                        self.expect_to_close(&tag.name);
                        self.clear_active_formatting_to_marker();
                    }
                    ProcessResult::Done
                },

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "table" => {
                    if self.quirks_mode.get() != Quirks {
                        self.close_p_element_in_button_scope();
                    }
                    self.insert_element_for(tag);
                    self.frameset_ok.set(false);
                    self.mode.set(InsertionMode::InTable);
                    ProcessResult::Done
                },

                Token::Tag(tag) if tag.kind == EndTag && &*tag.name == "br" => {
                    self.unexpected(&tag);
                    self.step(
                        InsertionMode::InBody,
                        Token::Tag(Tag {
                            kind: StartTag,
                            attrs: vec![],
                            ..tag
                        }),
                    )
                },

                Token::Tag(tag)
                    if tag.kind == StartTag
                        && matches!(
                            &*tag.name,
                            "area" | "br" | "embed" | "img" | "keygen" | "wbr" | "input"
                        ) =>
                {
                    let keep_frameset_ok = match &*tag.name {
                        "input" => self.is_type_hidden(&tag),
                        _ => false,
                    };
                    self.reconstruct_active_formatting_elements();
                    self.insert_and_pop_element_for(tag);
                    if !keep_frameset_ok {
                        self.frameset_ok.set(false);
                    }
                    ProcessResult::DoneAckSelfClosing
                },

                Token::Tag(tag)
                    if tag.kind == StartTag
                        && matches!(&*tag.name, "param" | "source" | "track") =>
                {
                    self.insert_and_pop_element_for(tag);
                    ProcessResult::DoneAckSelfClosing
                },

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "hr" => {
                    self.close_p_element_in_button_scope();
                    self.insert_and_pop_element_for(tag);
                    self.frameset_ok.set(false);
                    ProcessResult::DoneAckSelfClosing
                },

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "image" => {
                    self.unexpected(&tag);
                    self.step(
                        InsertionMode::InBody,
                        Token::Tag(Tag {
                            name: "img".into(),
                            ..tag
                        }),
                    )
                },

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "textarea" => {
                    self.ignore_lf.set(true);
                    self.frameset_ok.set(false);
                    self.parse_raw_data(tag, Rcdata)
                },

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "xmp" => {
                    self.close_p_element_in_button_scope();
                    self.reconstruct_active_formatting_elements();
                    self.frameset_ok.set(false);
                    self.parse_raw_data(tag, Rawtext)
                },

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "iframe" => {
                    self.frameset_ok.set(false);
                    self.parse_raw_data(tag, Rawtext)
                },

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "noembed" => {
                    self.parse_raw_data(tag, Rawtext)
                },

                // <noscript> handled in wildcard case below
                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "select" => {
                    self.reconstruct_active_formatting_elements();
                    self.insert_element_for(tag);
                    self.frameset_ok.set(false);
                    // NB: mode == InBody but possibly self.mode != mode, if
                    // we're processing "as in the rules for InBody".
                    self.mode.set(match self.mode.get() {
                        InsertionMode::InTable
                        | InsertionMode::InCaption
                        | InsertionMode::InTableBody
                        | InsertionMode::InRow
                        | InsertionMode::InCell => InsertionMode::InSelectInTable,
                        _ => InsertionMode::InSelect,
                    });
                    ProcessResult::Done
                },

                Token::Tag(tag)
                    if tag.kind == StartTag && matches!(&*tag.name, "optgroup" | "option") =>
                {
                    if self.current_node_named("option") {
                        self.pop();
                    }
                    self.reconstruct_active_formatting_elements();
                    self.insert_element_for(tag);
                    ProcessResult::Done
                },

                Token::Tag(tag)
                    if tag.kind == StartTag && matches!(&*tag.name, "rb" | "rtc") =>
                {
                    if self.in_scope_named(default_scope, "ruby") {
                        self.generate_implied_end_tags(cursory_implied_end);
                    }
                    if !self.current_node_named("ruby") {
                        self.unexpected(&tag);
                    }
                    self.insert_element_for(tag);
                    ProcessResult::Done
                },

                Token::Tag(tag)
                    if tag.kind == StartTag && matches!(&*tag.name, "rp" | "rt") =>
                {
                    if self.in_scope_named(default_scope, "ruby") {
                        self.generate_implied_end_except("rtc");
                    }
                    if !self.current_node_named("rtc") && !self.current_node_named("ruby") {
                        self.unexpected(&tag);
                    }
                    self.insert_element_for(tag);
                    ProcessResult::Done
                },

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "math" => {
                    self.enter_foreign(tag, Namespace::MathMl)
                },

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "svg" => {
                    self.enter_foreign(tag, Namespace::Svg)
                },

                token @ Token::Tag(Tag { kind: StartTag, ref name, .. })
                    if matches!(
                        &**name,
                        "caption" | "col" | "colgroup" | "frame" | "head" | "tbody" | "td"
                            | "tfoot" | "th" | "thead" | "tr"
                    ) =>
                {
                    self.unexpected(&token);
                    ProcessResult::Done
                },

                Token::Tag(tag) if tag.kind == StartTag => {
                    if self.opts.scripting_enabled && &*tag.name == "noscript" {
                        self.parse_raw_data(tag, Rawtext)
                    } else {
                        self.reconstruct_active_formatting_elements();
                        self.insert_element_for(tag);
                        ProcessResult::Done
                    }
                },

                Token::Tag(tag) if tag.kind == EndTag => {
                    self.process_end_tag_in_body(tag);
                    ProcessResult::Done
                },

                // FIXME: This should be unreachable, but an exhaustive catch-all
                // keeps the match total over `Token`.
                _ => unreachable!("impossible case in InBody mode"),
            },

            //§ parsing-main-incdata
            InsertionMode::Text => match token {
                Token::Characters(_, text) => self.append_text(text),

                Token::Eof => {
                    self.unexpected(&token);
                    if self.current_node_named("script") {
                        let open_elems = self.open_elems.borrow();
                        let current = current_node(&open_elems);
                        self.sink.borrow_mut().mark_script_already_started(current);
                    }
                    self.pop();
                    ProcessResult::Reprocess(self.orig_mode.take().unwrap(), token)
                },

                Token::Tag(tag) if tag.kind == EndTag => {
                    let node = self.pop();
                    self.mode.set(self.orig_mode.take().unwrap());
                    if &*tag.name == "script" {
                        return ProcessResult::Script(node);
                    }
                    ProcessResult::Done
                },

                // The spec doesn't say what to do here.
                // Other tokens are impossible?
                _ => unreachable!("impossible case in Text mode"),
            },

            //§ parsing-main-intable
            InsertionMode::InTable => match token {
                Token::NullCharacter => self.process_chars_in_table(token),

                Token::Characters(..) => self.process_chars_in_table(token),

                Token::Comment(text) => self.append_comment(text),

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "caption" => {
                    self.pop_until_current(table_scope);
                    self.active_formatting.borrow_mut().push(FormatEntry::Marker);
                    self.insert_element_for(tag);
                    self.mode.set(InsertionMode::InCaption);
                    ProcessResult::Done
                },

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "colgroup" => {
                    self.pop_until_current(table_scope);
                    self.insert_element_for(tag);
                    self.mode.set(InsertionMode::InColumnGroup);
                    ProcessResult::Done
                },

                token @ Token::Tag(Tag { kind: StartTag, ref name, .. }) if &**name == "col" => {
                    self.pop_until_current(table_scope);
                    self.insert_phantom("colgroup".into());
                    ProcessResult::Reprocess(InsertionMode::InColumnGroup, token)
                },

                Token::Tag(tag)
                    if tag.kind == StartTag
                        && matches!(&*tag.name, "tbody" | "tfoot" | "thead") =>
                {
                    self.pop_until_current(table_scope);
                    self.insert_element_for(tag);
                    self.mode.set(InsertionMode::InTableBody);
                    ProcessResult::Done
                },

                token @ Token::Tag(Tag { kind: StartTag, ref name, .. })
                    if matches!(&**name, "td" | "th" | "tr") =>
                {
                    self.pop_until_current(table_scope);
                    self.insert_phantom("tbody".into());
                    ProcessResult::Reprocess(InsertionMode::InTableBody, token)
                },

                token @ Token::Tag(Tag { kind: StartTag, ref name, .. }) if &**name == "table" => {
                    self.unexpected(&token);
                    if self.in_scope_named(table_scope, "table") {
                        self.pop_until_named("table");
                        ProcessResult::Reprocess(self.reset_insertion_mode(), token)
                    } else {
                        ProcessResult::Done
                    }
                },

                token @ Token::Tag(Tag { kind: EndTag, ref name, .. }) if &**name == "table" => {
                    if self.in_scope_named(table_scope, "table") {
                        self.pop_until_named("table");
                        self.mode.set(self.reset_insertion_mode());
                    } else {
                        self.unexpected(&token);
                    }
                    ProcessResult::Done
                },

                token @ Token::Tag(Tag { kind: EndTag, ref name, .. })
                    if matches!(
                        &**name,
                        "body" | "caption" | "col" | "colgroup" | "html" | "tbody" | "td"
                            | "tfoot" | "th" | "thead" | "tr"
                    ) =>
                {
                    self.unexpected(&token)
                },

                token @ Token::Tag(Tag { kind, ref name, .. })
                    if (kind == StartTag && matches!(&**name, "style" | "script" | "template"))
                        || (kind == EndTag && &**name == "template") =>
                {
                    self.step(InsertionMode::InHead, token)
                },

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "input" => {
                    self.unexpected(&tag);
                    if self.is_type_hidden(&tag) {
                        self.insert_and_pop_element_for(tag);
                        ProcessResult::DoneAckSelfClosing
                    } else {
                        self.foster_parent_in_body(Token::Tag(tag))
                    }
                },

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "form" => {
                    self.unexpected(&tag);
                    if !self.in_html_elem_named("template") && self.form_elem.borrow().is_none() {
                        *self.form_elem.borrow_mut() = Some(self.insert_and_pop_element_for(tag));
                    }
                    ProcessResult::Done
                },

                Token::Eof => self.step(InsertionMode::InBody, token),

                token => {
                    self.unexpected(&token);
                    self.foster_parent_in_body(token)
                },
            },

            //§ parsing-main-intabletext
            InsertionMode::InTableText => match token {
                Token::NullCharacter => self.unexpected(&token),

                Token::Characters(split, text) => {
                    self.pending_table_text.borrow_mut().push((split, text));
                    ProcessResult::Done
                },

                token => {
                    let pending = self.pending_table_text.take();
                    let contains_nonspace = pending.iter().any(|&(split, ref text)| match split {
                        SplitStatus::Whitespace => false,
                        SplitStatus::NotWhitespace => true,
                        SplitStatus::NotSplit => any_not_whitespace(text),
                    });

                    if contains_nonspace {
                        self.sink.borrow_mut().parse_error(
                            crate::errors::ErrorCode::GenericParseError,
                            Borrowed("Non-space table text"),
                        );
                        for (split, text) in pending.into_iter() {
                            match self.foster_parent_in_body(Token::Characters(split, text)) {
                                ProcessResult::Done => (),
                                _ => panic!("not prepared to handle this!"),
                            }
                        }
                    } else {
                        for (_, text) in pending.into_iter() {
                            self.append_text(text);
                        }
                    }

                    ProcessResult::Reprocess(self.orig_mode.take().unwrap(), token)
                },
            },

            //§ parsing-main-incaption
            InsertionMode::InCaption => match token {
                Token::Tag(tag)
                    if matches!(
                        (tag.kind, &*tag.name),
                        (StartTag, "caption")
                            | (StartTag, "col")
                            | (StartTag, "colgroup")
                            | (StartTag, "tbody")
                            | (StartTag, "td")
                            | (StartTag, "tfoot")
                            | (StartTag, "th")
                            | (StartTag, "thead")
                            | (StartTag, "tr")
                            | (EndTag, "table")
                            | (EndTag, "caption")
                    ) =>
                {
                    if self.in_scope_named(table_scope, "caption") {
                        self.generate_implied_end_tags(cursory_implied_end);
                        self.expect_to_close("caption");
                        self.clear_active_formatting_to_marker();
                        match tag {
                            Tag { kind: EndTag, ref name, .. } if &**name == "caption" => {
                                self.mode.set(InsertionMode::InTable);
                                ProcessResult::Done
                            },
                            _ => ProcessResult::Reprocess(InsertionMode::InTable, Token::Tag(tag)),
                        }
                    } else {
                        self.unexpected(&tag);
                        ProcessResult::Done
                    }
                },

                token @ Token::Tag(Tag { kind: EndTag, ref name, .. })
                    if matches!(
                        &**name,
                        "body" | "col" | "colgroup" | "html" | "tbody" | "td" | "tfoot" | "th"
                            | "thead" | "tr"
                    ) =>
                {
                    self.unexpected(&token)
                },

                token => self.step(InsertionMode::InBody, token),
            },

            //§ parsing-main-incolgroup
            InsertionMode::InColumnGroup => match token {
                Token::Characters(SplitStatus::NotSplit, text) => {
                    ProcessResult::SplitWhitespace(text)
                },
                Token::Characters(SplitStatus::Whitespace, text) => self.append_text(text),
                Token::Comment(text) => self.append_comment(text),

                token @ Token::Tag(Tag { kind: StartTag, ref name, .. }) if &**name == "html" => {
                    self.step(InsertionMode::InBody, token)
                },

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "col" => {
                    self.insert_and_pop_element_for(tag);
                    ProcessResult::DoneAckSelfClosing
                },

                token @ Token::Tag(Tag { kind: EndTag, ref name, .. }) if &**name == "colgroup" => {
                    if self.current_node_named("colgroup") {
                        self.pop();
                        self.mode.set(InsertionMode::InTable);
                    } else {
                        self.unexpected(&token);
                    }
                    ProcessResult::Done
                },

                token @ Token::Tag(Tag { kind: EndTag, ref name, .. }) if &**name == "col" => {
                    self.unexpected(&token)
                },

                token @ Token::Tag(Tag { kind, ref name, .. })
                    if &**name == "template" && (kind == StartTag || kind == EndTag) =>
                {
                    self.step(InsertionMode::InHead, token)
                },

                Token::Eof => self.step(InsertionMode::InBody, token),

                token => {
                    if self.current_node_named("colgroup") {
                        self.pop();
                        ProcessResult::Reprocess(InsertionMode::InTable, token)
                    } else {
                        self.unexpected(&token)
                    }
                },
            },

            //§ parsing-main-intbody
            InsertionMode::InTableBody => match token {
                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "tr" => {
                    self.pop_until_current(table_body_context);
                    self.insert_element_for(tag);
                    self.mode.set(InsertionMode::InRow);
                    ProcessResult::Done
                },

                token @ Token::Tag(Tag { kind: StartTag, ref name, .. })
                    if matches!(&**name, "th" | "td") =>
                {
                    self.unexpected(&token);
                    self.pop_until_current(table_body_context);
                    self.insert_phantom("tr".into());
                    ProcessResult::Reprocess(InsertionMode::InRow, token)
                },

                Token::Tag(tag)
                    if tag.kind == EndTag
                        && matches!(&*tag.name, "tbody" | "tfoot" | "thead") =>
                {
                    if self.in_scope_named(table_scope, &tag.name) {
                        self.pop_until_current(table_body_context);
                        self.pop();
                        self.mode.set(InsertionMode::InTable);
                    } else {
                        self.unexpected(&tag);
                    }
                    ProcessResult::Done
                },

                token @ Token::Tag(Tag { kind: StartTag, ref name, .. })
                    if matches!(
                        &**name,
                        "caption" | "col" | "colgroup" | "tbody" | "tfoot" | "thead"
                    ) =>
                {
                    declare_tag_set!(table_outer = "table" "tbody" "tfoot");
                    if self.in_scope(table_scope, |e| self.elem_in(&e, table_outer)) {
                        self.pop_until_current(table_body_context);
                        self.pop();
                        ProcessResult::Reprocess(InsertionMode::InTable, token)
                    } else {
                        self.unexpected(&token)
                    }
                },

                token @ Token::Tag(Tag { kind: EndTag, ref name, .. }) if &**name == "table" => {
                    declare_tag_set!(table_outer = "table" "tbody" "tfoot");
                    if self.in_scope(table_scope, |e| self.elem_in(&e, table_outer)) {
                        self.pop_until_current(table_body_context);
                        self.pop();
                        ProcessResult::Reprocess(InsertionMode::InTable, token)
                    } else {
                        self.unexpected(&token)
                    }
                },

                token @ Token::Tag(Tag { kind: EndTag, ref name, .. })
                    if matches!(
                        &**name,
                        "body" | "caption" | "col" | "colgroup" | "html" | "td" | "th" | "tr"
                    ) =>
                {
                    self.unexpected(&token)
                },

                token => self.step(InsertionMode::InTable, token),
            },

            //§ parsing-main-intr
            InsertionMode::InRow => match token {
                Token::Tag(tag)
                    if tag.kind == StartTag && matches!(&*tag.name, "th" | "td") =>
                {
                    self.pop_until_current(table_row_context);
                    self.insert_element_for(tag);
                    self.mode.set(InsertionMode::InCell);
                    self.active_formatting.borrow_mut().push(FormatEntry::Marker);
                    ProcessResult::Done
                },

                token @ Token::Tag(Tag { kind: EndTag, ref name, .. }) if &**name == "tr" => {
                    if self.in_scope_named(table_scope, "tr") {
                        self.pop_until_current(table_row_context);
                        let node = self.pop();
                        self.assert_named(&node, "tr".into());
                        self.mode.set(InsertionMode::InTableBody);
                    } else {
                        self.unexpected(&token);
                    }
                    ProcessResult::Done
                },

                token @ Token::Tag(Tag { kind: StartTag, ref name, .. })
                    if matches!(
                        &**name,
                        "caption" | "col" | "colgroup" | "tbody" | "tfoot" | "thead" | "tr"
                    ) =>
                {
                    if self.in_scope_named(table_scope, "tr") {
                        self.pop_until_current(table_row_context);
                        let node = self.pop();
                        self.assert_named(&node, "tr".into());
                        ProcessResult::Reprocess(InsertionMode::InTableBody, token)
                    } else {
                        self.unexpected(&token)
                    }
                },

                token @ Token::Tag(Tag { kind: EndTag, ref name, .. }) if &**name == "table" => {
                    if self.in_scope_named(table_scope, "tr") {
                        self.pop_until_current(table_row_context);
                        let node = self.pop();
                        self.assert_named(&node, "tr".into());
                        ProcessResult::Reprocess(InsertionMode::InTableBody, token)
                    } else {
                        self.unexpected(&token)
                    }
                },

                Token::Tag(tag)
                    if tag.kind == EndTag && matches!(&*tag.name, "tbody" | "tfoot" | "thead") =>
                {
                    if self.in_scope_named(table_scope, &tag.name) {
                        if self.in_scope_named(table_scope, "tr") {
                            self.pop_until_current(table_row_context);
                            let node = self.pop();
                            self.assert_named(&node, "tr".into());
                            ProcessResult::Reprocess(InsertionMode::InTableBody, Token::Tag(tag))
                        } else {
                            ProcessResult::Done
                        }
                    } else {
                        self.unexpected(&tag)
                    }
                },

                token @ Token::Tag(Tag { kind: EndTag, ref name, .. })
                    if matches!(
                        &**name,
                        "body" | "caption" | "col" | "colgroup" | "html" | "td" | "th"
                    ) =>
                {
                    self.unexpected(&token)
                },

                token => self.step(InsertionMode::InTable, token),
            },

            //§ parsing-main-intd
            InsertionMode::InCell => match token {
                Token::Tag(tag)
                    if tag.kind == EndTag && matches!(&*tag.name, "td" | "th") =>
                {
                    if self.in_scope_named(table_scope, &tag.name) {
                        self.generate_implied_end_tags(cursory_implied_end);
                        self.expect_to_close(&tag.name);
                        self.clear_active_formatting_to_marker();
                        self.mode.set(InsertionMode::InRow);
                    } else {
                        self.unexpected(&tag);
                    }
                    ProcessResult::Done
                },

                token @ Token::Tag(Tag { kind: StartTag, ref name, .. })
                    if matches!(
                        &**name,
                        "caption" | "col" | "colgroup" | "tbody" | "td" | "tfoot" | "th"
                            | "thead" | "tr"
                    ) =>
                {
                    if self.in_scope(table_scope, |n| self.elem_in(&n, td_th)) {
                        self.close_the_cell();
                        ProcessResult::Reprocess(InsertionMode::InRow, token)
                    } else {
                        self.unexpected(&token)
                    }
                },

                token @ Token::Tag(Tag { kind: EndTag, ref name, .. })
                    if matches!(&**name, "body" | "caption" | "col" | "colgroup" | "html") =>
                {
                    self.unexpected(&token)
                },

                Token::Tag(tag)
                    if tag.kind == EndTag
                        && matches!(&*tag.name, "table" | "tbody" | "tfoot" | "thead" | "tr") =>
                {
                    if self.in_scope_named(table_scope, &tag.name) {
                        self.close_the_cell();
                        ProcessResult::Reprocess(InsertionMode::InRow, Token::Tag(tag))
                    } else {
                        self.unexpected(&tag)
                    }
                },

                token => self.step(InsertionMode::InBody, token),
            },

            //§ parsing-main-inselect
            InsertionMode::InSelect => match token {
                Token::NullCharacter => self.unexpected(&token),
                Token::Characters(_, text) => self.append_text(text),
                Token::Comment(text) => self.append_comment(text),

                token @ Token::Tag(Tag { kind: StartTag, ref name, .. }) if &**name == "html" => {
                    self.step(InsertionMode::InBody, token)
                },

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "option" => {
                    if self.current_node_named("option") {
                        self.pop();
                    }
                    self.insert_element_for(tag);
                    ProcessResult::Done
                },

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "optgroup" => {
                    if self.current_node_named("option") {
                        self.pop();
                    }
                    if self.current_node_named("optgroup") {
                        self.pop();
                    }
                    self.insert_element_for(tag);
                    ProcessResult::Done
                },

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "hr" => {
                    if self.current_node_named("option") {
                        self.pop();
                    }
                    if self.current_node_named("optgroup") {
                        self.pop();
                    }
                    self.insert_element_for(tag);
                    self.pop();
                    ProcessResult::DoneAckSelfClosing
                },

                token @ Token::Tag(Tag { kind: EndTag, ref name, .. }) if &**name == "optgroup" => {
                    if self.open_elems.borrow().len() >= 2
                        && self.current_node_named("option")
                        && self.html_elem_named(
                            &self.open_elems.borrow()[self.open_elems.borrow().len() - 2],
                            "optgroup",
                        )
                    {
                        self.pop();
                    }
                    if self.current_node_named("optgroup") {
                        self.pop();
                    } else {
                        self.unexpected(&token);
                    }
                    ProcessResult::Done
                },

                token @ Token::Tag(Tag { kind: EndTag, ref name, .. }) if &**name == "option" => {
                    if self.current_node_named("option") {
                        self.pop();
                    } else {
                        self.unexpected(&token);
                    }
                    ProcessResult::Done
                },

                Token::Tag(tag) if &*tag.name == "select" => {
                    let in_scope = self.in_scope_named(select_scope, "select");

                    if !in_scope || tag.kind == StartTag {
                        self.unexpected(&tag);
                    }

                    if in_scope {
                        self.pop_until_named("select");
                        self.mode.set(self.reset_insertion_mode());
                    }
                    ProcessResult::Done
                },

                token @ Token::Tag(Tag { kind: StartTag, ref name, .. })
                    if matches!(&**name, "input" | "keygen" | "textarea") =>
                {
                    self.unexpected(&token);
                    if self.in_scope_named(select_scope, "select") {
                        self.pop_until_named("select");
                        ProcessResult::Reprocess(self.reset_insertion_mode(), token)
                    } else {
                        ProcessResult::Done
                    }
                },

                token @ Token::Tag(Tag { kind, ref name, .. })
                    if (kind == StartTag && matches!(&**name, "script" | "template"))
                        || (kind == EndTag && &**name == "template") =>
                {
                    self.step(InsertionMode::InHead, token)
                },

                Token::Eof => self.step(InsertionMode::InBody, token),

                token => self.unexpected(&token),
            },

            //§ parsing-main-inselectintable
            InsertionMode::InSelectInTable => match token {
                token @ Token::Tag(Tag { kind: StartTag, ref name, .. })
                    if matches!(
                        &**name,
                        "caption" | "table" | "tbody" | "tfoot" | "thead" | "tr" | "td" | "th"
                    ) =>
                {
                    self.unexpected(&token);
                    self.pop_until_named("select");
                    ProcessResult::Reprocess(self.reset_insertion_mode(), token)
                },

                Token::Tag(tag)
                    if tag.kind == EndTag
                        && matches!(
                            &*tag.name,
                            "caption" | "table" | "tbody" | "tfoot" | "thead" | "tr" | "td" | "th"
                        ) =>
                {
                    self.unexpected(&tag);
                    if self.in_scope_named(table_scope, &tag.name) {
                        self.pop_until_named("select");
                        ProcessResult::Reprocess(self.reset_insertion_mode(), Token::Tag(tag))
                    } else {
                        ProcessResult::Done
                    }
                },

                token => self.step(InsertionMode::InSelect, token),
            },

            //§ parsing-main-intemplate
            InsertionMode::InTemplate => match token {
                Token::Characters(_, _) => self.step(InsertionMode::InBody, token),
                Token::Comment(_) => self.step(InsertionMode::InBody, token),

                token @ Token::Tag(Tag { kind, ref name, .. })
                    if (kind == StartTag
                        && matches!(
                            &**name,
                            "base" | "basefont" | "bgsound" | "link" | "meta" | "noframes"
                                | "script" | "style" | "template" | "title"
                        ))
                        || (kind == EndTag && &**name == "template") =>
                {
                    self.step(InsertionMode::InHead, token)
                },

                token @ Token::Tag(Tag { kind: StartTag, ref name, .. })
                    if matches!(&**name, "caption" | "colgroup" | "tbody" | "tfoot" | "thead") =>
                {
                    self.template_modes.borrow_mut().pop();
                    self.template_modes.borrow_mut().push(InsertionMode::InTable);
                    ProcessResult::Reprocess(InsertionMode::InTable, token)
                },

                token @ Token::Tag(Tag { kind: StartTag, ref name, .. }) if &**name == "col" => {
                    self.template_modes.borrow_mut().pop();
                    self.template_modes.borrow_mut().push(InsertionMode::InColumnGroup);
                    ProcessResult::Reprocess(InsertionMode::InColumnGroup, token)
                },

                token @ Token::Tag(Tag { kind: StartTag, ref name, .. }) if &**name == "tr" => {
                    self.template_modes.borrow_mut().pop();
                    self.template_modes.borrow_mut().push(InsertionMode::InTableBody);
                    ProcessResult::Reprocess(InsertionMode::InTableBody, token)
                },

                token @ Token::Tag(Tag { kind: StartTag, ref name, .. })
                    if matches!(&**name, "td" | "th") =>
                {
                    self.template_modes.borrow_mut().pop();
                    self.template_modes.borrow_mut().push(InsertionMode::InRow);
                    ProcessResult::Reprocess(InsertionMode::InRow, token)
                },

                Token::Eof => {
                    if !self.in_html_elem_named("template") {
                        self.stop_parsing()
                    } else {
                        self.unexpected(&token);
                        self.pop_until_named("template");
                        self.clear_active_formatting_to_marker();
                        self.template_modes.borrow_mut().pop();
                        self.mode.set(self.reset_insertion_mode());
                        ProcessResult::Reprocess(self.reset_insertion_mode(), token)
                    }
                },

                Token::Tag(tag) if tag.kind == StartTag => {
                    self.template_modes.borrow_mut().pop();
                    self.template_modes.borrow_mut().push(InsertionMode::InBody);
                    ProcessResult::Reprocess(InsertionMode::InBody, Token::Tag(tag))
                },

                token => self.unexpected(&token),
            },

            //§ parsing-main-afterbody
            InsertionMode::AfterBody => match token {
                Token::Characters(SplitStatus::NotSplit, text) => {
                    ProcessResult::SplitWhitespace(text)
                },
                token @ Token::Characters(SplitStatus::Whitespace, _) => {
                    self.step(InsertionMode::InBody, token)
                },
                Token::Comment(text) => self.append_comment_to_html(text),

                token @ Token::Tag(Tag { kind: StartTag, ref name, .. }) if &**name == "html" => {
                    self.step(InsertionMode::InBody, token)
                },

                Token::Tag(tag) if tag.kind == EndTag && &*tag.name == "html" => {
                    if self.is_fragment() {
                        self.unexpected(&tag);
                    } else {
                        self.mode.set(InsertionMode::AfterAfterBody);
                    }
                    ProcessResult::Done
                },

                Token::Eof => self.stop_parsing(),

                token => {
                    self.unexpected(&token);
                    ProcessResult::Reprocess(InsertionMode::InBody, token)
                },
            },

            //§ parsing-main-inframeset
            InsertionMode::InFrameset => match token {
                Token::Characters(SplitStatus::NotSplit, text) => {
                    ProcessResult::SplitWhitespace(text)
                },
                Token::Characters(SplitStatus::Whitespace, text) => self.append_text(text),
                Token::Comment(text) => self.append_comment(text),

                token @ Token::Tag(Tag { kind: StartTag, ref name, .. }) if &**name == "html" => {
                    self.step(InsertionMode::InBody, token)
                },

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "frameset" => {
                    self.insert_element_for(tag);
                    ProcessResult::Done
                },

                token @ Token::Tag(Tag { kind: EndTag, ref name, .. }) if &**name == "frameset" => {
                    if self.open_elems.borrow().len() == 1 {
                        self.unexpected(&token);
                    } else {
                        self.pop();
                        if !self.is_fragment() && !self.current_node_named("frameset") {
                            self.mode.set(InsertionMode::AfterFrameset);
                        }
                    }
                    ProcessResult::Done
                },

                Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "frame" => {
                    self.insert_and_pop_element_for(tag);
                    ProcessResult::DoneAckSelfClosing
                },

                token @ Token::Tag(Tag { kind: StartTag, ref name, .. }) if &**name == "noframes" => {
                    self.step(InsertionMode::InHead, token)
                },

                Token::Eof => {
                    if self.open_elems.borrow().len() != 1 {
                        self.unexpected(&token);
                    }
                    self.stop_parsing()
                },

                token => self.unexpected(&token),
            },

            //§ parsing-main-afterframeset
            InsertionMode::AfterFrameset => match token {
                Token::Characters(SplitStatus::NotSplit, text) => {
                    ProcessResult::SplitWhitespace(text)
                },
                Token::Characters(SplitStatus::Whitespace, text) => self.append_text(text),
                Token::Comment(text) => self.append_comment(text),

                token @ Token::Tag(Tag { kind: StartTag, ref name, .. }) if &**name == "html" => {
                    self.step(InsertionMode::InBody, token)
                },

                Token::Tag(tag) if tag.kind == EndTag && &*tag.name == "html" => {
                    self.mode.set(InsertionMode::AfterAfterFrameset);
                    ProcessResult::Done
                },

                token @ Token::Tag(Tag { kind: StartTag, ref name, .. }) if &**name == "noframes" => {
                    self.step(InsertionMode::InHead, token)
                },

                Token::Eof => self.stop_parsing(),

                token => self.unexpected(&token),
            },

            //§ the-after-after-body-insertion-mode
            InsertionMode::AfterAfterBody => match token {
                Token::Characters(SplitStatus::NotSplit, text) => {
                    ProcessResult::SplitWhitespace(text)
                },
                token @ Token::Characters(SplitStatus::Whitespace, _) => {
                    self.step(InsertionMode::InBody, token)
                },
                Token::Comment(text) => self.append_comment_to_doc(text),

                token @ Token::Tag(Tag { kind: StartTag, ref name, .. }) if &**name == "html" => {
                    self.step(InsertionMode::InBody, token)
                },

                Token::Eof => self.stop_parsing(),

                token => {
                    self.unexpected(&token);
                    ProcessResult::Reprocess(InsertionMode::InBody, token)
                },
            },

            //§ the-after-after-frameset-insertion-mode
            InsertionMode::AfterAfterFrameset => match token {
                Token::Characters(SplitStatus::NotSplit, text) => {
                    ProcessResult::SplitWhitespace(text)
                },
                token @ Token::Characters(SplitStatus::Whitespace, _) => {
                    self.step(InsertionMode::InBody, token)
                },
                Token::Comment(text) => self.append_comment_to_doc(text),

                token @ Token::Tag(Tag { kind: StartTag, ref name, .. }) if &**name == "html" => {
                    self.step(InsertionMode::InBody, token)
                },

                Token::Eof => self.stop_parsing(),

                token @ Token::Tag(Tag { kind: StartTag, ref name, .. }) if &**name == "noframes" => {
                    self.step(InsertionMode::InHead, token)
                },

                token => self.unexpected(&token),
            },
            //§ END
        }
    }

    pub(crate) fn step_foreign(&self, token: Token) -> ProcessResult<Handle> {
        match token {
            Token::NullCharacter => {
                self.unexpected(&token);
                self.append_text("\u{fffd}".to_tendril())
            },

            Token::Characters(_, text) => {
                if any_not_whitespace(&text) {
                    self.frameset_ok.set(false);
                }
                self.append_text(text)
            },

            Token::Comment(text) => self.append_comment(text),

            Token::Tag(tag)
                if matches!(
                    (tag.kind, &*tag.name),
                    (StartTag, "b")
                        | (StartTag, "big")
                        | (StartTag, "blockquote")
                        | (StartTag, "body")
                        | (StartTag, "br")
                        | (StartTag, "center")
                        | (StartTag, "code")
                        | (StartTag, "dd")
                        | (StartTag, "div")
                        | (StartTag, "dl")
                        | (StartTag, "dt")
                        | (StartTag, "em")
                        | (StartTag, "embed")
                        | (StartTag, "h1")
                        | (StartTag, "h2")
                        | (StartTag, "h3")
                        | (StartTag, "h4")
                        | (StartTag, "h5")
                        | (StartTag, "h6")
                        | (StartTag, "head")
                        | (StartTag, "hr")
                        | (StartTag, "i")
                        | (StartTag, "img")
                        | (StartTag, "li")
                        | (StartTag, "listing")
                        | (StartTag, "menu")
                        | (StartTag, "meta")
                        | (StartTag, "nobr")
                        | (StartTag, "ol")
                        | (StartTag, "p")
                        | (StartTag, "pre")
                        | (StartTag, "ruby")
                        | (StartTag, "s")
                        | (StartTag, "small")
                        | (StartTag, "span")
                        | (StartTag, "strong")
                        | (StartTag, "strike")
                        | (StartTag, "sub")
                        | (StartTag, "sup")
                        | (StartTag, "table")
                        | (StartTag, "tt")
                        | (StartTag, "u")
                        | (StartTag, "ul")
                        | (StartTag, "var")
                        | (EndTag, "br")
                        | (EndTag, "p")
                ) =>
            {
                self.unexpected_start_tag_in_foreign_content(tag)
            },

            Token::Tag(tag) if tag.kind == StartTag && &*tag.name == "font" => {
                let unexpected = tag.attrs.iter().any(|attr| {
                    matches!(
                        attr.name.expanded(),
                        ExpandedName { ns: None, local: "color" }
                            | ExpandedName { ns: None, local: "face" }
                            | ExpandedName { ns: None, local: "size" }
                    )
                });
                if unexpected {
                    self.unexpected_start_tag_in_foreign_content(tag)
                } else {
                    self.foreign_start_tag(tag)
                }
            },

            Token::Tag(tag) if tag.kind == StartTag => self.foreign_start_tag(tag),

            // FIXME(#118): </script> in SVG
            Token::Tag(tag) if tag.kind == EndTag => {
                let mut first = true;
                let mut stack_idx = self.open_elems.borrow().len() - 1;
                loop {
                    if stack_idx == 0 {
                        return ProcessResult::Done;
                    }

                    let html;
                    let eq;
                    {
                        let open_elems = self.open_elems.borrow();
                        let node_name = self.sink.borrow().elem_name(&open_elems[stack_idx]);
                        html = node_name.ns == Some(Namespace::Html);
                        eq = node_name.local.eq_ignore_ascii_case(&tag.name);
                    }
                    if !first && html {
                        let mode = self.mode.get();
                        return self.step(mode, Token::Tag(tag));
                    }

                    if eq {
                        self.open_elems.borrow_mut().truncate(stack_idx);
                        return ProcessResult::Done;
                    }

                    if first {
                        self.unexpected(&tag);
                        first = false;
                    }
                    stack_idx -= 1;
                }
            },

            // FIXME: This should be unreachable, but an exhaustive catch-all
            // keeps the match total over `Token`.
            _ => unreachable!("impossible case in foreign content"),
        }
    }
}
