//! The typed `Content-Length` header field.

use std::hash::{Hash, Hasher};

use bytes::Bytes;
use field_grammar::{capture, digits, match_entire, MatchOutcome, Pattern};
use http::HeaderName;
use once_cell::sync::Lazy;
use tracing::trace;

use super::HttpField;
use crate::text;

const LENGTH_GROUP: &str = "length";

/// The field-value grammar: the whole value is one run of digits.
static VALUE_GRAMMAR: Lazy<Pattern> = Lazy::new(|| match_entire(capture(digits(), LENGTH_GROUP)));

/// A typed `Content-Length` header field.
///
/// A value that is not a plain decimal number, or that overflows `u64`,
/// degrades to [`length`](ContentLengthField::length) returning `None` in
/// the same present-but-unparseable posture the other fields follow.
/// Equality and hashing consider the parsed length only.
#[derive(Debug, Clone, Eq)]
pub struct ContentLengthField {
    raw: Bytes,
    length: Option<u64>,
}

impl ContentLengthField {
    /// The field's header name: `Content-Length`.
    pub const NAME: HeaderName = http::header::CONTENT_LENGTH;

    /// Creates a field from an already-known length. Trusted path, no
    /// grammar validation.
    pub fn new(length: u64) -> Self {
        Self { raw: Bytes::from(length.to_string()), length: Some(length) }
    }

    /// Creates a field from the raw value bytes of an intercepted header.
    pub fn from_raw_value(raw: Bytes) -> Self {
        let value = text::decode(&raw);

        let length = match VALUE_GRAMMAR.match_text(&value) {
            MatchOutcome::Matched(captures) => captures.first(LENGTH_GROUP).and_then(|text| text.parse().ok()),
            MatchOutcome::NoMatch => {
                trace!(value = %value, "content-length value did not match the field grammar");
                None
            }
        };

        Self { raw, length }
    }

    /// Returns the parsed length, or `None` if the value was unparseable.
    pub fn length(&self) -> Option<u64> {
        self.length
    }
}

impl HttpField for ContentLengthField {
    fn name(&self) -> HeaderName {
        Self::NAME
    }

    fn raw_value(&self) -> &Bytes {
        &self.raw
    }

    fn render_value(&self) -> String {
        self.length.map(|length| length.to_string()).unwrap_or_default()
    }
}

impl PartialEq for ContentLengthField {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length
    }
}

impl Hash for ContentLengthField {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_value() {
        let field = ContentLengthField::from_raw_value(Bytes::from_static(b"42"));
        assert_eq!(field.length(), Some(42));
    }

    #[test]
    fn malformed_value_degrades_to_none() {
        let field = ContentLengthField::from_raw_value(Bytes::from_static(b"abc"));
        assert_eq!(field.length(), None);

        let field = ContentLengthField::from_raw_value(Bytes::from_static(b""));
        assert_eq!(field.length(), None);
    }

    #[test]
    fn trailing_garbage_degrades_to_none() {
        let field = ContentLengthField::from_raw_value(Bytes::from_static(b"123 bytes"));
        assert_eq!(field.length(), None);
    }

    #[test]
    fn overflowing_value_degrades_to_none() {
        let field = ContentLengthField::from_raw_value(Bytes::from_static(b"99999999999999999999999999"));
        assert_eq!(field.length(), None);
    }

    #[test]
    fn round_trips_through_rendered_value() {
        let first = ContentLengthField::new(1024);
        let reparsed = ContentLengthField::from_raw_value(Bytes::from(first.render_value()));
        assert_eq!(first, reparsed);
    }

    #[test]
    fn equality_ignores_raw_representation() {
        let built = ContentLengthField::new(7);
        let parsed = ContentLengthField::from_raw_value(Bytes::from_static(b"7"));
        assert_eq!(built, parsed);
    }

    #[test]
    fn unparseable_value_renders_as_empty_string() {
        let field = ContentLengthField::from_raw_value(Bytes::from_static(b"abc"));
        assert_eq!(field.render_value(), "");
    }
}
