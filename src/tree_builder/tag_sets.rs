//! Named predicates over element names, used by the "has an element in
//! the specific scope" family of algorithms and by the various
//! "generate implied end tags" / "special" category checks.
//!
//! Grounded in the WHATWG HTML parsing spec's stack-of-open-elements
//! scope definitions (§13.2.4.2); the predicate shape (`Fn(ExpandedName)
//! -> bool`, built via `declare_tag_set!`) matches how the teacher's
//! tree builder calls into `in_scope`/`in_scope_named`/`pop_until`.

use crate::interface::{ExpandedName, Namespace};

/// Declare a named predicate matching HTML elements with one of the
/// given local names, or (the `[base] - ...` form) every name `base`
/// matches except the given ones.
macro_rules! declare_tag_set {
    ($name:ident = $($tag:expr)+) => {
        #[allow(non_snake_case)]
        pub(crate) fn $name(name: $crate::interface::ExpandedName) -> bool {
            name.ns == Some($crate::interface::Namespace::Html)
                && matches!(name.local, $($tag)|+)
        }
    };
    ($name:ident = [$base:ident] - $($tag:expr)+) => {
        #[allow(non_snake_case)]
        pub(crate) fn $name(name: $crate::interface::ExpandedName) -> bool {
            $base(name) && !matches!(name.local, $($tag)|+)
        }
    };
}
pub(crate) use declare_tag_set;

declare_tag_set!(heading_tag = "h1" "h2" "h3" "h4" "h5" "h6");

declare_tag_set!(td_th = "td" "th");

declare_tag_set!(table_scope = "html" "table" "template");

declare_tag_set!(table_body_context = "tbody" "tfoot" "thead" "template" "html");

declare_tag_set!(table_row_context = "tr" "template" "html");

declare_tag_set!(cursory_implied_end =
    "dd" "dt" "li" "optgroup" "option" "p" "rb" "rp" "rt" "rtc");

declare_tag_set!(thorough_implied_end =
    "caption" "colgroup" "dd" "dt" "li" "optgroup" "option" "p" "rb" "rp"
    "rt" "rtc" "tbody" "td" "tfoot" "th" "thead" "tr");

declare_tag_set!(special_tag_html =
    "address" "applet" "area" "article" "aside" "base" "basefont"
    "bgsound" "blockquote" "body" "br" "button" "caption" "center" "col"
    "colgroup" "dd" "details" "dir" "div" "dl" "dt" "embed" "fieldset"
    "figcaption" "figure" "footer" "form" "frame" "frameset" "h1" "h2"
    "h3" "h4" "h5" "h6" "head" "header" "hgroup" "hr" "html" "iframe"
    "img" "input" "keygen" "li" "link" "listing" "main" "marquee" "menu"
    "meta" "nav" "noembed" "noframes" "noscript" "object" "ol" "p"
    "param" "plaintext" "pre" "script" "search" "section" "select"
    "source" "style" "summary" "table" "tbody" "td" "template" "textarea"
    "tfoot" "th" "thead" "title" "tr" "track" "ul" "wbr" "xmp");

fn special_tag_any_ns(name: ExpandedName) -> bool {
    special_tag_html(name)
        || matches!(
            name,
            ExpandedName { ns: Some(Namespace::MathMl), local: "mi" }
                | ExpandedName { ns: Some(Namespace::MathMl), local: "mo" }
                | ExpandedName { ns: Some(Namespace::MathMl), local: "mn" }
                | ExpandedName { ns: Some(Namespace::MathMl), local: "ms" }
                | ExpandedName { ns: Some(Namespace::MathMl), local: "mtext" }
                | ExpandedName { ns: Some(Namespace::MathMl), local: "annotation-xml" }
                | ExpandedName { ns: Some(Namespace::Svg), local: "foreignObject" }
                | ExpandedName { ns: Some(Namespace::Svg), local: "desc" }
                | ExpandedName { ns: Some(Namespace::Svg), local: "title" }
        )
}

fn default_scope_any_ns(name: ExpandedName) -> bool {
    matches!(name.ns, Some(Namespace::Html))
        && matches!(
            name.local,
            "applet" | "caption" | "html" | "table" | "td" | "th" | "marquee" | "object"
                | "template"
        )
        || matches!(
            name,
            ExpandedName { ns: Some(Namespace::MathMl), local: "mi" }
                | ExpandedName { ns: Some(Namespace::MathMl), local: "mo" }
                | ExpandedName { ns: Some(Namespace::MathMl), local: "mn" }
                | ExpandedName { ns: Some(Namespace::MathMl), local: "ms" }
                | ExpandedName { ns: Some(Namespace::MathMl), local: "mtext" }
                | ExpandedName { ns: Some(Namespace::MathMl), local: "annotation-xml" }
                | ExpandedName { ns: Some(Namespace::Svg), local: "foreignObject" }
                | ExpandedName { ns: Some(Namespace::Svg), local: "desc" }
                | ExpandedName { ns: Some(Namespace::Svg), local: "title" }
        )
}

/// "Has a particular element in *scope*" — the default boundary set.
pub(crate) fn default_scope(name: ExpandedName) -> bool {
    default_scope_any_ns(name)
}

/// "Has a particular element in *button* scope" — default scope plus `button`.
pub(crate) fn button_scope(name: ExpandedName) -> bool {
    default_scope_any_ns(name) || name == (ExpandedName { ns: Some(Namespace::Html), local: "button" })
}

/// "Has a particular element in *list item* scope" — default scope plus `ol`/`ul`.
pub(crate) fn list_item_scope(name: ExpandedName) -> bool {
    default_scope_any_ns(name)
        || matches!(
            name,
            ExpandedName { ns: Some(Namespace::Html), local: "ol" }
                | ExpandedName { ns: Some(Namespace::Html), local: "ul" }
        )
}

/// "Has a particular element in *select* scope" — every element except
/// `optgroup`/`option` is a boundary.
pub(crate) fn select_scope(name: ExpandedName) -> bool {
    !matches!(name.local, "optgroup" | "option")
}

/// The "special" category used by the generic end-tag closing algorithm,
/// across all three namespaces it is defined for.
pub(crate) fn special_tag(name: ExpandedName) -> bool {
    special_tag_any_ns(name)
}

pub(crate) fn mathml_text_integration_point(name: ExpandedName) -> bool {
    name.ns == Some(Namespace::MathMl) && matches!(name.local, "mi" | "mo" | "mn" | "ms" | "mtext")
}

pub(crate) fn svg_html_integration_point(name: ExpandedName) -> bool {
    name.ns == Some(Namespace::Svg) && matches!(name.local, "foreignObject" | "desc" | "title")
}
