//! Shared data model: qualified names, attributes, and the `TreeSink`
//! contract the tree constructor drives to build a DOM.
//!
//! Names here are a closed, plain enum rather than the teacher's interned
//! `Atom`/`string_cache` stack: HTML parsing only ever produces names from
//! six fixed namespaces, so there is nothing for an interner to buy us.

use std::borrow::Cow;
use tendril::StrTendril;

use crate::buffer_queue::Pos;
use crate::errors::{ErrorCode, SinkError};

/// One of the six namespaces the tree construction algorithm ever assigns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Namespace {
    Html,
    MathMl,
    Svg,
    XLink,
    Xml,
    XmlNs,
}

impl Namespace {
    pub fn url(&self) -> &'static str {
        match *self {
            Namespace::Html => "http://www.w3.org/1999/xhtml",
            Namespace::MathMl => "http://www.w3.org/1998/Math/MathML",
            Namespace::Svg => "http://www.w3.org/2000/svg",
            Namespace::XLink => "http://www.w3.org/1999/xlink",
            Namespace::Xml => "http://www.w3.org/XML/1998/namespace",
            Namespace::XmlNs => "http://www.w3.org/2000/xmlns/",
        }
    }
}

/// A local name, e.g. `div` or `encoding`. Kept as a `StrTendril` rather
/// than an interned atom: tags and attributes are short-lived strings that
/// tendril already shares cheaply when cloned from the source buffer.
pub type LocalName = StrTendril;

/// An optional namespace prefix, e.g. `xlink` in `xlink:href`.
pub type Prefix = StrTendril;

/// A fully qualified name: optional prefix, optional namespace, local name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QualName {
    pub prefix: Option<Prefix>,
    pub ns: Option<Namespace>,
    pub local: LocalName,
}

impl QualName {
    pub fn new(prefix: Option<Prefix>, ns: Option<Namespace>, local: LocalName) -> QualName {
        QualName { prefix, ns, local }
    }

    /// An unprefixed, unnamespaced name — the common case for HTML tags
    /// and attributes before foreign-content namespace adjustment.
    pub fn html(local: impl Into<LocalName>) -> QualName {
        QualName {
            prefix: None,
            ns: Some(Namespace::Html),
            local: local.into(),
        }
    }

    pub fn expanded(&self) -> ExpandedName<'_> {
        ExpandedName {
            ns: self.ns,
            local: &self.local,
        }
    }
}

/// A borrowed `(namespace, local name)` pair, cheap to construct for
/// comparisons against tag-set predicates (`expanded_name!(html "div")`).
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ExpandedName<'a> {
    pub ns: Option<Namespace>,
    pub local: &'a str,
}

/// Build an `ExpandedName` for comparison, e.g. `expanded_name!(html "div")`.
macro_rules! expanded_name {
    (html $local:expr) => {
        $crate::interface::ExpandedName {
            ns: Some($crate::interface::Namespace::Html),
            local: $local,
        }
    };
    (mathml $local:expr) => {
        $crate::interface::ExpandedName {
            ns: Some($crate::interface::Namespace::MathMl),
            local: $local,
        }
    };
    (svg $local:expr) => {
        $crate::interface::ExpandedName {
            ns: Some($crate::interface::Namespace::Svg),
            local: $local,
        }
    };
}
pub(crate) use expanded_name;

/// An attribute as produced by the tokenizer: a qualified name and a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub name: QualName,
    pub value: StrTendril,
}

/// Quirks mode, set once from the DOCTYPE token (or its absence) and never
/// revisited afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuirksMode {
    Quirks,
    LimitedQuirks,
    NoQuirks,
}
pub use QuirksMode::{LimitedQuirks, NoQuirks, Quirks};

/// Either a text run to possibly coalesce with a trailing text node, or an
/// already-built node, as the thing being appended to the tree.
pub enum NodeOrText<Handle> {
    AppendNode(Handle),
    AppendText(StrTendril),
}
pub use NodeOrText::{AppendNode, AppendText};

/// Advisory signal that the tree builder noticed something relevant to
/// encoding sniffing (`<meta charset>` or `<meta http-equiv=content-type>`).
/// Detecting or acting on an encoding is out of scope; this is passed
/// through for a caller that wants it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EncodingIndicator {
    /// `<meta charset="...">`.
    Charset(StrTendril),
    /// `<meta http-equiv="content-type" content="...">`.
    HttpEquiv(StrTendril),
}

/// The abstract DOM collaborator the tree constructor drives to build a
/// tree. `Handle` is an opaque reference to a node (e.g. `Rc<Node>` for
/// [`crate::rcdom::RcDom`]); the tree constructor never looks inside it.
///
/// All operations are infallible except cycle creation (`reparent_children`
/// moving a node into its own descendant), which a well-behaved sink must
/// reject by returning a [`SinkError`]; the tree constructor guarantees it
/// never actually requests one, so sinks that can't detect cycles cheaply
/// may simply never return `Err`.
pub trait TreeSink {
    type Handle: Clone;

    /// Report a recoverable parse error: a stable [`ErrorCode`] plus the
    /// message text a caller would display alongside it.
    fn parse_error(&mut self, code: ErrorCode, msg: Cow<'static, str>);

    /// The document's root handle. Always the same handle across a parse.
    fn get_document(&mut self) -> Self::Handle;

    /// The name of an element handle. Panics if `target` is not an element.
    fn elem_name(&self, target: &Self::Handle) -> QualName;

    fn create_element(&mut self, name: QualName, attrs: Vec<Attribute>) -> Self::Handle;
    fn create_comment(&mut self, text: StrTendril) -> Self::Handle;
    fn create_doctype(
        &mut self,
        name: StrTendril,
        public_id: StrTendril,
        system_id: StrTendril,
    ) -> Self::Handle;

    /// Append `child` as the last child of `parent`. If `child` is a text
    /// run and `parent`'s last child is already a text node, the sink
    /// should coalesce rather than create a new node.
    fn append(&mut self, parent: &Self::Handle, child: NodeOrText<Self::Handle>);

    /// Insert `child` immediately before `sibling`, which must have a parent.
    fn insert_before(&mut self, sibling: &Self::Handle, child: NodeOrText<Self::Handle>);

    /// Append a `DOCTYPE` node directly under the document.
    fn append_doctype_to_document(
        &mut self,
        name: StrTendril,
        public_id: StrTendril,
        system_id: StrTendril,
    );

    /// Detach `target` from its parent. A no-op if it has none.
    fn detach(&mut self, target: &Self::Handle);

    /// Move all children of `node` to the end of `new_parent`'s children,
    /// in order. Returns an error if this would create a cycle.
    fn reparent_children(
        &mut self,
        node: &Self::Handle,
        new_parent: &Self::Handle,
    ) -> Result<(), SinkError>;

    /// Add attributes present on the token but not already on `target`
    /// (used when the parser sees a second `<html>`/`<body>` start tag).
    fn add_attrs_if_missing(&mut self, target: &Self::Handle, attrs: Vec<Attribute>);

    /// Two handles refer to the same node.
    fn same_node(&self, a: &Self::Handle, b: &Self::Handle) -> bool;

    /// The parent of `node`, if any.
    fn parent_of(&self, node: &Self::Handle) -> Option<Self::Handle>;

    fn set_quirks_mode(&mut self, mode: QuirksMode);

    /// The template contents pseudo-document of a `<template>` element.
    /// Panics if `target` is not a template element.
    fn get_template_contents(&mut self, target: &Self::Handle) -> Self::Handle;

    /// Mark a `<script>` element's "already started" flag, so a later
    /// insertion of the same node (e.g. via `document.write`, out of
    /// scope here) would not re-run it.
    fn mark_script_already_started(&mut self, target: &Self::Handle);

    /// Whether `handle` is a MathML `annotation-xml` element whose
    /// `encoding` attribute makes it an HTML integration point.
    fn is_mathml_annotation_xml_integration_point(&self, handle: &Self::Handle) -> bool;

    /// Advisory encoding signal; the default implementation ignores it.
    fn encoding_indicator(&mut self, _indicator: EncodingIndicator) {}

    /// The source position of the token currently being processed, called
    /// once per token before any `parse_error` it may trigger. Default
    /// no-op; a sink that populates `ParseError::location` overrides this
    /// to cache the position for its next `parse_error` call.
    fn note_position(&mut self, _pos: Pos) {}
}

/// Lets a garbage-collected `TreeSink` tell its collector about every
/// `Handle` the tree builder is currently holding onto.
pub trait Tracer {
    type Handle;

    fn trace_handle(&self, node: &Self::Handle);
}
