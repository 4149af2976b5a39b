// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The DOCTYPE-to-quirks-mode table: <https://html.spec.whatwg.org/#the-doctype-token>.

use crate::interface::QuirksMode;
use crate::interface::QuirksMode::{LimitedQuirks, NoQuirks, Quirks};
use crate::tokenizer::Doctype;

use std::borrow::Cow::{self, Borrowed};
use std::ops::Deref;

fn is_ascii_insensitive_prefix(prefix: &str, target: &str) -> bool {
    target.len() >= prefix.len() && target[..prefix.len()].eq_ignore_ascii_case(prefix)
}

const QUIRKY_PUBLIC_PREFIXES: &[&str] = &[
    "-//advasoft ltd//dtd html 3.0 aswedit + extensions//",
    "-//as//dtd html 3.0 aswedit + extensions//",
    "-//ietf//dtd html 2.0 level 1//",
    "-//ietf//dtd html 2.0 level 2//",
    "-//ietf//dtd html 2.0 strict level 1//",
    "-//ietf//dtd html 2.0 strict level 2//",
    "-//ietf//dtd html 2.0 strict//",
    "-//ietf//dtd html 2.0//",
    "-//ietf//dtd html 2.1e//",
    "-//ietf//dtd html 3.0//",
    "-//ietf//dtd html 3.2 final//",
    "-//ietf//dtd html 3.2//",
    "-//ietf//dtd html 3//",
    "-//ietf//dtd html level 0//",
    "-//ietf//dtd html level 1//",
    "-//ietf//dtd html level 2//",
    "-//ietf//dtd html level 3//",
    "-//ietf//dtd html strict level 0//",
    "-//ietf//dtd html strict level 1//",
    "-//ietf//dtd html strict level 2//",
    "-//ietf//dtd html strict level 3//",
    "-//ietf//dtd html strict//",
    "-//ietf//dtd html//",
    "-//metrius//dtd metrius presentational//",
    "-//microsoft//dtd internet explorer 2.0 html strict//",
    "-//microsoft//dtd internet explorer 2.0 html//",
    "-//microsoft//dtd internet explorer 2.0 tables//",
    "-//microsoft//dtd internet explorer 3.0 html strict//",
    "-//microsoft//dtd internet explorer 3.0 html//",
    "-//microsoft//dtd internet explorer 3.0 tables//",
    "-//netscape comm. corp.//dtd html//",
    "-//netscape comm. corp.//dtd strict html//",
    "-//o'reilly and associates//dtd html 2.0//",
    "-//o'reilly and associates//dtd html extended 1.0//",
    "-//o'reilly and associates//dtd html extended relaxed 1.0//",
    "-//softquad software//dtd hotmetal pro 6.0::19990601::extensions to html 4.0//",
    "-//softquad//dtd hotmetal pro 4.0::19971010::extensions to html 4.0//",
    "-//spyglass//dtd html 2.0 extended//",
    "-//sq//dtd html 2.0 hotmetal + extensions//",
    "-//sun microsystems corp.//dtd hotjava html//",
    "-//sun microsystems corp.//dtd hotjava strict html//",
    "-//w3c//dtd html 3 1995-03-24//",
    "-//w3c//dtd html 3.2 draft//",
    "-//w3c//dtd html 3.2 final//",
    "-//w3c//dtd html 3.2//",
    "-//w3c//dtd html 3.2s draft//",
    "-//w3c//dtd html 4.0 frameset//",
    "-//w3c//dtd html 4.0 transitional//",
    "-//w3c//dtd html experimental 19960712//",
    "-//w3c//dtd html experimental 970421//",
    "-//w3c//dtd w3 html//",
    "-//w3o//dtd w3 html 3.0//",
    "-//webtechs//dtd mozilla html 2.0//",
    "-//webtechs//dtd mozilla html//",
];

const QUIRKY_PUBLIC_MATCHES: &[&str] = &[
    "-//w3o//dtd w3 html strict 3.0//en//",
    "-/w3c/dtd html 4.0 transitional/en",
    "html",
];

const QUIRKY_SYSTEM_MATCH: &str = "http://www.ibm.com/data/dtd/v11/ibmxhtml1-transitional.dtd";

const LIMITED_QUIRKY_PUBLIC_PREFIXES: &[&str] = &[
    "-//w3c//dtd xhtml 1.0 frameset//",
    "-//w3c//dtd xhtml 1.0 transitional//",
];

const LIMITED_QUIRKY_PUBLIC_PREFIXES_WITH_SYSTEM: &[&str] = &[
    "-//w3c//dtd html 4.01 frameset//",
    "-//w3c//dtd html 4.01 transitional//",
];

/// `trim_end` that operates on an ASCII-lowercased view without allocating
/// unless necessary.
fn lower(s: &str) -> Cow<'_, str> {
    if s.bytes().all(|b| !b.is_ascii_uppercase()) {
        Borrowed(s)
    } else {
        s.to_ascii_lowercase().into()
    }
}

/// Determine whether a `<!DOCTYPE>` token triggers a parse error, and which
/// quirks mode it selects: <https://html.spec.whatwg.org/#parsing-main-initial>.
pub(crate) fn doctype_error_and_quirks(
    doctype: &Doctype,
    iframe_srcdoc: bool,
) -> (bool, QuirksMode) {
    let name = doctype.name.as_ref().map(|n| lower(n));
    let public = doctype.public_id.as_ref().map(|p| lower(p));
    let system = doctype.system_id.as_ref().map(|s| lower(s));

    let err = match (&name, &public, &system) {
        (&Some(ref name), &None, &None) if &***name == "html" => false,
        (&Some(ref name), &Some(ref pub_id), ref sys_id)
            if &***name == "html"
                && ((&***pub_id == "-//w3c//dtd html 4.0 transitional//en"
                    && sys_id.is_none())
                    || (&***pub_id == "-//w3c//dtd html 4.01 transitional//en"
                        && sys_id.is_none())
                    || (&***pub_id == "-//w3c//dtd xhtml 1.0 transitional//en")) =>
        {
            false
        },
        _ => true,
    };

    if iframe_srcdoc {
        return (err, NoQuirks);
    }

    let quirk = if matches!(&name, Some(n) if &***n != "html") {
        Quirks
    } else if let Some(ref pub_id) = public {
        let pub_id: &str = pub_id.deref();
        if QUIRKY_PUBLIC_MATCHES.iter().any(|&m| pub_id == m)
            || QUIRKY_PUBLIC_PREFIXES
                .iter()
                .any(|&p| is_ascii_insensitive_prefix(p, pub_id))
        {
            Quirks
        } else if let Some(ref sys_id) = system {
            if is_ascii_insensitive_prefix(QUIRKY_SYSTEM_MATCH, sys_id) {
                Quirks
            } else if LIMITED_QUIRKY_PUBLIC_PREFIXES
                .iter()
                .any(|&p| is_ascii_insensitive_prefix(p, pub_id))
                || LIMITED_QUIRKY_PUBLIC_PREFIXES_WITH_SYSTEM
                    .iter()
                    .any(|&p| is_ascii_insensitive_prefix(p, pub_id))
            {
                LimitedQuirks
            } else {
                NoQuirks
            }
        } else if LIMITED_QUIRKY_PUBLIC_PREFIXES
            .iter()
            .any(|&p| is_ascii_insensitive_prefix(p, pub_id))
        {
            LimitedQuirks
        } else {
            NoQuirks
        }
    } else if let Some(ref sys_id) = system {
        if is_ascii_insensitive_prefix(QUIRKY_SYSTEM_MATCH, sys_id) {
            Quirks
        } else {
            NoQuirks
        }
    } else {
        NoQuirks
    };

    (err, quirk)
}
