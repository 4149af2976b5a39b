// Copyright 2014 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A simple reference-counted DOM, and a `TreeSink` implementation over it.
//!
//! This is sufficient as a static parse tree, but don't build a web browser
//! using it.

use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::buffer_queue::Pos;
use crate::errors::{ErrorCode, ParseError, SinkError};
use crate::interface::{Attribute, ExpandedName, NodeOrText, QuirksMode, TreeSink};
use crate::tendril::StrTendril;
use crate::{Namespace, QualName};

pub use self::ElementEnum::{AnnotationXml, Normal, Script, Template};
pub use self::NodeEnum::{Comment, Doctype, Document, Element, Text};

/// The different kinds of elements the sink distinguishes by more than
/// their tag name.
#[derive(Debug)]
pub enum ElementEnum {
    Normal,
    /// A script element and its "already started" flag.
    /// <https://html.spec.whatwg.org/multipage/#already-started>
    Script(Cell<bool>),
    /// A template element and its template contents pseudo-document.
    /// <https://html.spec.whatwg.org/multipage/#template-contents>
    Template(Handle),
    /// A MathML `annotation-xml` element and whether its `encoding`
    /// attribute makes it an HTML integration point.
    /// <https://html.spec.whatwg.org/multipage/embedded-content-other-elements.html#math:annotation-xml>
    AnnotationXml(bool),
}

/// The different kinds of nodes in the DOM.
#[derive(Debug)]
pub enum NodeEnum {
    /// The `Document` itself.
    Document,

    /// A `DOCTYPE` with name, public id, and system id.
    Doctype(StrTendril, StrTendril, StrTendril),

    /// A text node.
    Text(RefCell<StrTendril>),

    /// A comment.
    Comment(StrTendril),

    /// An element with attributes.
    Element(QualName, ElementEnum, RefCell<Vec<Attribute>>),
}

/// A DOM node.
#[derive(Debug)]
pub struct Node {
    pub node: NodeEnum,
    pub parent: RefCell<Option<WeakHandle>>,
    pub children: RefCell<Vec<Handle>>,
}

impl Node {
    fn new(node: NodeEnum) -> Rc<Node> {
        Rc::new(Node {
            node,
            parent: RefCell::new(None),
            children: RefCell::new(vec![]),
        })
    }
}

/// Reference to a DOM node.
pub type Handle = Rc<Node>;

/// Weak reference to a DOM node, used for parent pointers.
pub type WeakHandle = Weak<Node>;

fn same_node(x: &Handle, y: &Handle) -> bool {
    Rc::ptr_eq(x, y)
}

fn append(new_parent: &Handle, child: Handle) {
    let mut parent_of_child = child.parent.borrow_mut();
    assert!(parent_of_child.is_none());
    *parent_of_child = Some(Rc::downgrade(new_parent));
    drop(parent_of_child);
    new_parent.children.borrow_mut().push(child);
}

fn get_parent_and_index(target: &Handle) -> Option<(Handle, usize)> {
    let parent = target.parent.borrow().as_ref()?.upgrade().expect("dangling weak pointer");
    let i = parent
        .children
        .borrow()
        .iter()
        .position(|child| same_node(child, target))
        .expect("have parent but couldn't find in parent's children");
    Some((parent, i))
}

fn append_to_existing_text(prev: &Handle, text: &str) -> bool {
    match prev.node {
        NodeEnum::Text(ref existing) => {
            existing.borrow_mut().push_slice(text);
            true
        },
        _ => false,
    }
}

fn detach(target: &Handle) {
    let Some((parent, i)) = get_parent_and_index(target) else {
        return;
    };
    parent.children.borrow_mut().remove(i);
    *target.parent.borrow_mut() = None;
}

/// A reference-counted DOM; the default result of parsing.
pub struct RcDom {
    /// The `Document` itself.
    pub document: Handle,

    /// Errors that occurred during parsing.
    pub errors: RefCell<Vec<ParseError>>,

    /// The document's quirks mode.
    pub quirks_mode: Cell<QuirksMode>,

    /// Whether `errors` should carry source positions, per
    /// `ParseOpts::track_error_locations`.
    pub track_error_locations: bool,

    /// The position of the token currently being processed, cached from
    /// `note_position` for the next `parse_error` call.
    last_pos: Cell<Pos>,
}

impl RcDom {
    pub fn new(track_error_locations: bool) -> RcDom {
        RcDom {
            document: Node::new(NodeEnum::Document),
            errors: RefCell::new(vec![]),
            quirks_mode: Cell::new(QuirksMode::NoQuirks),
            track_error_locations,
            last_pos: Cell::new(Pos::default()),
        }
    }
}

impl Default for RcDom {
    fn default() -> RcDom {
        RcDom::new(true)
    }
}

impl TreeSink for RcDom {
    type Handle = Handle;

    fn parse_error(&mut self, code: ErrorCode, msg: Cow<'static, str>) {
        let location = self.track_error_locations.then(|| {
            let pos = self.last_pos.get();
            (pos.line, pos.col)
        });
        self.errors.borrow_mut().push(ParseError {
            code,
            location,
            message: msg,
        });
    }

    fn note_position(&mut self, pos: Pos) {
        self.last_pos.set(pos);
    }

    fn get_document(&mut self) -> Handle {
        self.document.clone()
    }

    fn elem_name(&self, target: &Handle) -> QualName {
        match target.node {
            NodeEnum::Element(ref name, _, _) => name.clone(),
            _ => panic!("not an element!"),
        }
    }

    fn create_element(&mut self, name: QualName, attrs: Vec<Attribute>) -> Handle {
        let info = match name.expanded() {
            ExpandedName { ns: Some(Namespace::Html), local: "script" } => Script(Cell::new(false)),
            ExpandedName { ns: Some(Namespace::Html), local: "template" } => {
                Template(Node::new(NodeEnum::Document))
            },
            ExpandedName { ns: Some(Namespace::MathMl), local: "annotation-xml" } => {
                AnnotationXml(attrs.iter().any(|attr| {
                    attr.name.expanded() == (ExpandedName { ns: None, local: "encoding" })
                        && (attr.value.eq_ignore_ascii_case("text/html")
                            || attr.value.eq_ignore_ascii_case("application/xhtml+xml"))
                }))
            },
            _ => Normal,
        };
        Node::new(NodeEnum::Element(name, info, RefCell::new(attrs)))
    }

    fn create_comment(&mut self, text: StrTendril) -> Handle {
        Node::new(NodeEnum::Comment(text))
    }

    fn create_doctype(
        &mut self,
        name: StrTendril,
        public_id: StrTendril,
        system_id: StrTendril,
    ) -> Handle {
        Node::new(NodeEnum::Doctype(name, public_id, system_id))
    }

    fn append(&mut self, parent: &Handle, child: NodeOrText<Handle>) {
        if let NodeOrText::AppendText(ref text) = child {
            if let Some(h) = parent.children.borrow().last() {
                if append_to_existing_text(h, text) {
                    return;
                }
            }
        }

        append(
            parent,
            match child {
                NodeOrText::AppendText(text) => Node::new(NodeEnum::Text(RefCell::new(text))),
                NodeOrText::AppendNode(node) => node,
            },
        );
    }

    fn insert_before(&mut self, sibling: &Handle, child: NodeOrText<Handle>) {
        let (parent, i) =
            get_parent_and_index(sibling).expect("insert_before called on node without parent");

        let child = match (child, i) {
            (NodeOrText::AppendText(text), 0) => Node::new(NodeEnum::Text(RefCell::new(text))),

            (NodeOrText::AppendText(text), i) => {
                let prev = parent.children.borrow()[i - 1].clone();
                if append_to_existing_text(&prev, &text) {
                    return;
                }
                Node::new(NodeEnum::Text(RefCell::new(text)))
            },

            // The tree builder promises we won't have a text node after
            // the insertion point.
            (NodeOrText::AppendNode(node), _) => node,
        };

        if child.parent.borrow().is_some() {
            detach(&child);
        }

        *child.parent.borrow_mut() = Some(Rc::downgrade(&parent));
        parent.children.borrow_mut().insert(i, child);
    }

    fn append_doctype_to_document(
        &mut self,
        name: StrTendril,
        public_id: StrTendril,
        system_id: StrTendril,
    ) {
        append(
            &self.document,
            Node::new(NodeEnum::Doctype(name, public_id, system_id)),
        );
    }

    fn detach(&mut self, target: &Handle) {
        detach(target);
    }

    fn reparent_children(&mut self, node: &Handle, new_parent: &Handle) -> Result<(), SinkError> {
        let children = std::mem::take(&mut *node.children.borrow_mut());
        for child in &children {
            *child.parent.borrow_mut() = Some(Rc::downgrade(new_parent));
        }
        new_parent.children.borrow_mut().extend(children);
        Ok(())
    }

    fn add_attrs_if_missing(&mut self, target: &Handle, attrs: Vec<Attribute>) {
        let NodeEnum::Element(_, _, ref existing) = target.node else {
            panic!("not an element");
        };
        let mut existing = existing.borrow_mut();
        let existing_names = existing.iter().map(|e| e.name.clone()).collect::<HashSet<_>>();
        existing.extend(attrs.into_iter().filter(|attr| !existing_names.contains(&attr.name)));
    }

    fn same_node(&self, a: &Handle, b: &Handle) -> bool {
        same_node(a, b)
    }

    fn parent_of(&self, node: &Handle) -> Option<Handle> {
        node.parent.borrow().as_ref().and_then(Weak::upgrade)
    }

    fn set_quirks_mode(&mut self, mode: QuirksMode) {
        self.quirks_mode.set(mode);
    }

    fn get_template_contents(&mut self, target: &Handle) -> Handle {
        match target.node {
            NodeEnum::Element(_, Template(ref contents), _) => contents.clone(),
            _ => panic!("not a template element!"),
        }
    }

    fn mark_script_already_started(&mut self, target: &Handle) {
        match target.node {
            NodeEnum::Element(_, Script(ref started), _) => started.set(true),
            _ => panic!("not a script element!"),
        }
    }

    fn is_mathml_annotation_xml_integration_point(&self, target: &Handle) -> bool {
        match target.node {
            NodeEnum::Element(_, AnnotationXml(is_integration_point), _) => is_integration_point,
            _ => unreachable!("not an annotation-xml element"),
        }
    }
}

impl fmt::Debug for RcDom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RcDom")
            .field("quirks_mode", &self.quirks_mode.get())
            .field("errors", &self.errors.borrow().len())
            .finish()
    }
}
