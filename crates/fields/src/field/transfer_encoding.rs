//! The typed `Transfer-Encoding` header field.
//!
//! The field value is an ordered, comma separated list of transfer-coding
//! tokens as specified in
//! [RFC 2616 Section 3.6](https://tools.ietf.org/html/rfc2616#section-3.6):
//! the literal `chunked`, or an extension token with optional `;name=value`
//! parameter suffixes. Each coding is kept as one whole unit, parameters
//! included, so `gzip;q=1` is a single coding.
//!
//! Parsing is permissive: a value that does not match the grammar yields a
//! field whose coding list is empty, never an error. Callers cannot
//! distinguish "empty" from "unparseable" through the typed accessor; the
//! raw bytes remain available for those that care.

use std::hash::{Hash, Hasher};

use bytes::Bytes;
use field_grammar::{
    any, capture, comma_separated_list, concat, literal, match_entire, or, quoted_string, token, MatchOutcome,
    Pattern,
};
use http::HeaderName;
use once_cell::sync::Lazy;
use tracing::trace;

use super::HttpField;
use crate::text;

const TRANSFER_CODING_GROUP: &str = "transfer-coding";

/// The field-value grammar, built once and shared by every parse:
///
/// ```text
/// value              = token | quoted-string
/// parameter          = token "=" value
/// transfer-extension = token *( ";" parameter )
/// transfer-coding    = "chunked" | transfer-extension
/// field-value        = 1#transfer-coding   ; anchored, whole input
/// ```
static VALUE_GRAMMAR: Lazy<Pattern> = Lazy::new(|| {
    let value = or([token(), quoted_string()]);
    let parameter = concat([token(), literal("="), value]);
    let transfer_extension = concat([token(), any(concat([literal(";"), parameter]))]);
    let transfer_coding = capture(or([literal("chunked"), transfer_extension]), TRANSFER_CODING_GROUP);
    match_entire(comma_separated_list(transfer_coding, 1))
});

/// A typed `Transfer-Encoding` header field.
///
/// Holds the raw wire bytes alongside the decoded, ordered list of
/// transfer-coding tokens. Instances are immutable after construction; the
/// coding list is exposed only as a read-only slice.
///
/// Equality and hashing consider the coding list only, so a field built
/// from typed codings compares equal to one parsed from equivalent raw
/// bytes even though their raw representations differ.
#[derive(Debug, Clone, Eq)]
pub struct TransferEncodingField {
    raw: Bytes,
    codings: Vec<String>,
}

impl TransferEncodingField {
    /// The field's header name: `Transfer-Encoding`.
    pub const NAME: HeaderName = http::header::TRANSFER_ENCODING;

    /// Creates a field from already-structured coding tokens.
    ///
    /// This is the trusted construction path used when building an outgoing
    /// message: the codings are not validated against the field grammar.
    /// The raw value is the comma-joined form of the codings as given;
    /// the stored list is then normalized (see [`codings`]).
    ///
    /// [`codings`]: TransferEncodingField::codings
    pub fn new<I>(codings: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let codings: Vec<String> = codings.into_iter().map(Into::into).collect();
        let raw = Bytes::from(codings.join(","));
        Self { raw, codings: normalize(codings) }
    }

    /// Creates a field from the raw value bytes of an intercepted header.
    ///
    /// The bytes are decoded to text and matched against the anchored field
    /// grammar. On a match, every captured transfer-coding is taken in
    /// left-to-right order and the list is normalized. On a mismatch the
    /// coding list is left empty; a malformed optional header must not
    /// abort dissection of the whole message, so no error is raised.
    pub fn from_raw_value(raw: Bytes) -> Self {
        let value = text::decode(&raw);

        let codings = match VALUE_GRAMMAR.match_text(&value) {
            MatchOutcome::Matched(captures) => {
                normalize(captures.all(TRANSFER_CODING_GROUP).map(str::to_owned).collect())
            }
            MatchOutcome::NoMatch => {
                trace!(value = %value, "transfer-encoding value did not match the field grammar");
                Vec::new()
            }
        };

        Self { raw, codings }
    }

    /// Returns the transfer codings in the order they appeared.
    ///
    /// The list is lower-cased as a whole if any coding contained an
    /// upper-case ASCII letter, and left untouched otherwise. An empty
    /// slice means the field was absent, empty, or unparseable; these are
    /// indistinguishable here.
    pub fn codings(&self) -> &[String] {
        &self.codings
    }
}

/// Lower-cases every coding if any coding contains upper-case ASCII.
///
/// The normalization is deliberately all-or-nothing over the whole list,
/// not per element: one mixed-case coding lower-cases its neighbors too.
/// An already-lower-case list is returned as-is.
fn normalize(codings: Vec<String>) -> Vec<String> {
    if codings.iter().any(|coding| coding.bytes().any(|byte| byte.is_ascii_uppercase())) {
        codings.into_iter().map(|coding| coding.to_ascii_lowercase()).collect()
    } else {
        codings
    }
}

impl HttpField for TransferEncodingField {
    fn name(&self) -> HeaderName {
        Self::NAME
    }

    fn raw_value(&self) -> &Bytes {
        &self.raw
    }

    /// Renders the codings joined by single commas, with no whitespace.
    ///
    /// An empty coding list renders as the empty string. For any list
    /// produced by a successful parse this output reparses to an equal
    /// field; the original whitespace around commas is not preserved.
    fn render_value(&self) -> String {
        self.codings.join(",")
    }
}

impl PartialEq for TransferEncodingField {
    fn eq(&self, other: &Self) -> bool {
        self.codings == other.codings
    }
}

impl Hash for TransferEncodingField {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.codings.hash(state);
    }
}
