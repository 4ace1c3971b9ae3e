//! Fallback field for headers without a typed implementation.

use std::hash::{Hash, Hasher};

use bytes::Bytes;
use http::HeaderName;

use super::HttpField;
use crate::text;

/// A header field with no registered typed implementation.
///
/// Keeps the name and raw bytes so the header still round-trips through
/// dissection; the value is exposed as decoded text only. Unlike the typed
/// fields, equality includes the name, since one `UnknownField` type stands
/// in for many different headers.
#[derive(Debug, Clone, Eq)]
pub struct UnknownField {
    name: HeaderName,
    raw: Bytes,
    value: String,
}

impl UnknownField {
    pub fn new(name: HeaderName, raw: Bytes) -> Self {
        let value = text::decode(&raw);
        Self { name, raw, value }
    }

    /// Returns the decoded field value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl HttpField for UnknownField {
    fn name(&self) -> HeaderName {
        self.name.clone()
    }

    fn raw_value(&self) -> &Bytes {
        &self.raw
    }

    fn render_value(&self) -> String {
        self.value.clone()
    }
}

impl PartialEq for UnknownField {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.value == other.value
    }
}

impl Hash for UnknownField {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.value.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_name_and_decoded_value() {
        let name = HeaderName::from_static("x-trace");
        let field = UnknownField::new(name.clone(), Bytes::from_static(b"abc123"));

        assert_eq!(field.name(), name);
        assert_eq!(field.value(), "abc123");
        assert_eq!(field.render_value(), "abc123");
    }

    #[test]
    fn equality_includes_the_name() {
        let first = UnknownField::new(HeaderName::from_static("x-a"), Bytes::from_static(b"v"));
        let second = UnknownField::new(HeaderName::from_static("x-b"), Bytes::from_static(b"v"));
        assert_ne!(first, second);
    }
}
