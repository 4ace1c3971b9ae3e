//! The typed `Content-Type` header field.
//!
//! The value is a media type (`type "/" subtype`) with optional
//! `;name=value` parameters. Parameters are kept as whole `name=value`
//! units, the same way transfer-codings keep their parameter suffixes.

use std::hash::{Hash, Hasher};

use bytes::Bytes;
use field_grammar::{
    any, capture, concat, literal, match_entire, optional_spaces, or, quoted_string, token, MatchOutcome, Pattern,
};
use http::HeaderName;
use once_cell::sync::Lazy;
use tracing::trace;

use super::HttpField;
use crate::text;

const TYPE_GROUP: &str = "type";
const SUBTYPE_GROUP: &str = "subtype";
const PARAMETER_GROUP: &str = "parameter";

/// The field-value grammar:
///
/// ```text
/// parameter   = token "=" ( token | quoted-string )
/// field-value = token "/" token *( ";" OWS parameter )   ; anchored
/// ```
static VALUE_GRAMMAR: Lazy<Pattern> = Lazy::new(|| {
    let parameter = concat([token(), literal("="), or([token(), quoted_string()])]);
    match_entire(concat([
        capture(token(), TYPE_GROUP),
        literal("/"),
        capture(token(), SUBTYPE_GROUP),
        any(concat([literal(";"), optional_spaces(), capture(parameter, PARAMETER_GROUP)])),
    ]))
});

/// A typed `Content-Type` header field.
///
/// An unparseable value leaves the media type absent and the parameter
/// list empty. Equality and hashing consider the typed content only, never
/// the raw bytes.
#[derive(Debug, Clone, Eq)]
pub struct ContentTypeField {
    raw: Bytes,
    media_type: Option<String>,
    media_subtype: Option<String>,
    parameters: Vec<String>,
}

impl ContentTypeField {
    /// The field's header name: `Content-Type`.
    pub const NAME: HeaderName = http::header::CONTENT_TYPE;

    /// Creates a field from already-structured parts. Trusted path, no
    /// grammar validation.
    pub fn new<I>(media_type: impl Into<String>, media_subtype: impl Into<String>, parameters: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let media_type = media_type.into();
        let media_subtype = media_subtype.into();
        let parameters: Vec<String> = parameters.into_iter().map(Into::into).collect();

        let raw = Bytes::from(render(&media_type, &media_subtype, &parameters));
        Self { raw, media_type: Some(media_type), media_subtype: Some(media_subtype), parameters }
    }

    /// Creates a field from the raw value bytes of an intercepted header.
    pub fn from_raw_value(raw: Bytes) -> Self {
        let value = text::decode(&raw);

        match VALUE_GRAMMAR.match_text(&value) {
            MatchOutcome::Matched(captures) => Self {
                raw,
                media_type: captures.first(TYPE_GROUP).map(str::to_owned),
                media_subtype: captures.first(SUBTYPE_GROUP).map(str::to_owned),
                parameters: captures.all(PARAMETER_GROUP).map(str::to_owned).collect(),
            },
            MatchOutcome::NoMatch => {
                trace!(value = %value, "content-type value did not match the field grammar");
                Self { raw, media_type: None, media_subtype: None, parameters: Vec::new() }
            }
        }
    }

    /// Returns the media type (`text` in `text/html`), if parsed.
    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    /// Returns the media subtype (`html` in `text/html`), if parsed.
    pub fn media_subtype(&self) -> Option<&str> {
        self.media_subtype.as_deref()
    }

    /// Returns the parameters as whole `name=value` units, in order.
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }
}

fn render(media_type: &str, media_subtype: &str, parameters: &[String]) -> String {
    let mut rendered = format!("{media_type}/{media_subtype}");
    for parameter in parameters {
        rendered.push(';');
        rendered.push_str(parameter);
    }
    rendered
}

impl HttpField for ContentTypeField {
    fn name(&self) -> HeaderName {
        Self::NAME
    }

    fn raw_value(&self) -> &Bytes {
        &self.raw
    }

    fn render_value(&self) -> String {
        match (&self.media_type, &self.media_subtype) {
            (Some(media_type), Some(media_subtype)) => render(media_type, media_subtype, &self.parameters),
            _ => String::new(),
        }
    }
}

impl PartialEq for ContentTypeField {
    fn eq(&self, other: &Self) -> bool {
        self.media_type == other.media_type
            && self.media_subtype == other.media_subtype
            && self.parameters == other.parameters
    }
}

impl Hash for ContentTypeField {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.media_type.hash(state);
        self.media_subtype.hash(state);
        self.parameters.hash(state);
    }
}
