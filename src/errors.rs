//! The three error kinds described by the crate's error model: parse
//! errors (recoverable, collected as data), sink errors (fatal,
//! abort the parse), and options errors (rejected before parsing starts).

use std::borrow::Cow;
use std::fmt;

/// A recoverable parse error, recorded for the caller rather than acted on.
///
/// The tokenizer and tree builder run the WHATWG error-recovery algorithm
/// regardless of whether any particular error is collected; `ParseError`
/// exists to tell the caller what happened, not to change what happens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    /// A short, stable, spec-derived identifier such as
    /// `unexpected-null-character` or `end-tag-with-attributes`.
    pub code: ErrorCode,
    /// 1-based line and column of the input character that triggered
    /// the error, when `ParseOpts::track_error_locations` is set.
    pub location: Option<(u64, u64)>,
    /// A human-readable message, suitable for display but not for matching.
    pub message: Cow<'static, str>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location {
            Some((line, col)) => write!(f, "{}:{}: {} ({})", line, col, self.message, self.code),
            None => write!(f, "{} ({})", self.message, self.code),
        }
    }
}

/// Stable identifiers for the errors the tokenizer and tree builder raise.
///
/// Non-exhaustive: new error codes may be added as the recovery algorithm
/// is extended without it being a breaking change for callers that match
/// on specific variants.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    UnexpectedNullCharacter,
    UnexpectedQuestionMarkInsteadOfTagName,
    EofBeforeTagName,
    InvalidFirstCharacterOfTagName,
    MissingEndTagName,
    EofInTag,
    EofInScriptHtmlCommentLikeText,
    UnexpectedEqualsSignBeforeAttributeName,
    UnexpectedCharacterInAttributeName,
    MissingAttributeValue,
    UnexpectedCharacterInUnquotedAttributeValue,
    MissingWhitespaceBetweenAttributes,
    UnexpectedSolidusInTag,
    CdataInHtmlContent,
    IncorrectlyOpenedComment,
    EofInComment,
    EofInDoctype,
    NestedComment,
    AbruptClosingOfEmptyComment,
    EofInCdata,
    AbruptDoctypePublicIdentifier,
    AbruptDoctypeSystemIdentifier,
    MissingWhitespaceAfterDoctypePublicKeyword,
    MissingWhitespaceAfterDoctypeSystemKeyword,
    MissingWhitespaceBeforeDoctypeName,
    MissingDoctypeName,
    MissingDoctypePublicIdentifier,
    MissingDoctypeSystemIdentifier,
    MissingQuoteBeforeDoctypePublicIdentifier,
    MissingQuoteBeforeDoctypeSystemIdentifier,
    MissingSemicolonAfterCharacterReference,
    UnknownNamedCharacterReference,
    AbsenceOfDigitsInNumericCharacterReference,
    ControlCharacterReference,
    NullCharacterReference,
    CharacterReferenceOutsideUnicodeRange,
    SurrogateCharacterReference,
    NoncharacterCharacterReference,
    EndTagWithAttributes,
    EndTagWithTrailingSolidus,
    UnexpectedTokenInForeignContent,
    NonVoidHtmlElementStartTagWithTrailingSolidus,
    MisplacedStartTagForHeadElement,
    MisplacedDoctype,
    UnexpectedStartTagIgnored,
    UnexpectedEndTag,
    ClosedElementsWithCellOpen,
    StrayStartTag,
    StrayEndTag,
    UnclosedElements,
    UnclosedElementsCell,
    UnclosedElementsLine,
    UnclosedElementsBr,
    DuplicateAttribute,
    IncorrectlyClosedComment,
    InvalidCharacterSequenceAfterDoctypeName,
    UnexpectedCharacterAfterDoctypeSystemIdentifier,
    GenericParseError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Render variant names the way the spec identifiers look: kebab-case.
        let name = format!("{:?}", self);
        let mut out = String::with_capacity(name.len() + 8);
        for (i, c) in name.char_indices() {
            if c.is_uppercase() {
                if i != 0 {
                    out.push('-');
                }
                out.extend(c.to_lowercase());
            } else {
                out.push(c);
            }
        }
        f.write_str(&out)
    }
}

/// A fatal error raised by a `TreeSink` collaborator. Unlike `ParseError`,
/// this aborts the parse: the tree builder has no recovery algorithm for
/// "the DOM rejected this mutation".
#[derive(thiserror::Error, Debug)]
pub enum SinkError {
    #[error("tree sink rejected mutation: {0}")]
    Rejected(Cow<'static, str>),
    #[error("tree sink would create a cycle: cannot make {child:?} a descendant of itself")]
    Cycle { child: String },
}

/// An invalid combination of options or arguments, surfaced before any
/// input is consumed rather than threaded through the parse as a `ParseError`.
#[derive(thiserror::Error, Debug)]
pub enum OptionsError {
    #[error("fragment parsing requires a context element")]
    MissingFragmentContext,
    #[error("context element {0:?} is not a valid fragment parsing context")]
    InvalidFragmentContext(String),
    #[error("iframe srcdoc fragment parsing is not supported by this tree sink")]
    UnsupportedIframeSrcdoc,
}
