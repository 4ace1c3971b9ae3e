//! Typed header field abstractions and implementations.
//!
//! Every concrete field type pairs the raw wire bytes of a header value
//! with a strongly-typed, normalized representation, and follows the same
//! contract:
//!
//! - a trusted constructor from typed data (building an outgoing message)
//! - a permissive constructor from raw bytes (dissecting an incoming
//!   message) that degrades to an empty typed value instead of failing
//! - value equality over the typed representation only, so fields built on
//!   either path compare equal when they mean the same thing
//!
//! [`TypedField`] is the dissection entry point: given a header name and
//! raw value bytes it picks the matching implementation, falling back to
//! [`UnknownField`] for names without one. Comparing two `TypedField`
//! values of different variants is always unequal; there is no
//! heterogeneous equality across field kinds.

use bytes::Bytes;
use http::{header, HeaderName};

use crate::error::FieldError;

mod content_length;
pub use content_length::ContentLengthField;

mod content_type;
pub use content_type::ContentTypeField;

mod transfer_encoding;
pub use transfer_encoding::TransferEncodingField;

mod unknown;
pub use unknown::UnknownField;

/// The capability every concrete header field supplies.
///
/// Implementations are immutable after construction and store their raw
/// wire bytes alongside the typed value; `render_value` produces an
/// equivalent (not necessarily byte-identical) wire form.
pub trait HttpField {
    /// The field's header name.
    fn name(&self) -> HeaderName;

    /// The raw value bytes this field was built from or serialized to.
    fn raw_value(&self) -> &Bytes;

    /// Renders the typed value back to its wire form.
    fn render_value(&self) -> String;
}

/// A header field dispatched to its typed implementation by name.
///
/// The derived equality compares the variant tag first, so fields of
/// different kinds are never equal; within a variant it delegates to the
/// concrete type's structural equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypedField {
    TransferEncoding(TransferEncodingField),
    ContentLength(ContentLengthField),
    ContentType(ContentTypeField),
    Unknown(UnknownField),
}

impl TypedField {
    /// Builds the typed field for a header line of an incoming message.
    ///
    /// The name is matched case-insensitively against the known header
    /// names. Values never fail to parse (an unparseable value degrades to
    /// an empty typed value inside the field); the only error is a
    /// syntactically invalid header name.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidName`] if `name` is not a valid header
    /// name.
    pub fn parse(name: &str, value: Bytes) -> Result<Self, FieldError> {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        Ok(Self::from_parts(name, value))
    }

    /// Builds the typed field for an already-validated header name.
    pub fn from_parts(name: HeaderName, value: Bytes) -> Self {
        if name == header::TRANSFER_ENCODING {
            Self::TransferEncoding(TransferEncodingField::from_raw_value(value))
        } else if name == header::CONTENT_LENGTH {
            Self::ContentLength(ContentLengthField::from_raw_value(value))
        } else if name == header::CONTENT_TYPE {
            Self::ContentType(ContentTypeField::from_raw_value(value))
        } else {
            Self::Unknown(UnknownField::new(name, value))
        }
    }
}

impl HttpField for TypedField {
    fn name(&self) -> HeaderName {
        match self {
            Self::TransferEncoding(field) => field.name(),
            Self::ContentLength(field) => field.name(),
            Self::ContentType(field) => field.name(),
            Self::Unknown(field) => field.name(),
        }
    }

    fn raw_value(&self) -> &Bytes {
        match self {
            Self::TransferEncoding(field) => field.raw_value(),
            Self::ContentLength(field) => field.raw_value(),
            Self::ContentType(field) => field.raw_value(),
            Self::Unknown(field) => field.raw_value(),
        }
    }

    fn render_value(&self) -> String {
        match self {
            Self::TransferEncoding(field) => field.render_value(),
            Self::ContentLength(field) => field.render_value(),
            Self::ContentType(field) => field.render_value(),
            Self::Unknown(field) => field.render_value(),
        }
    }
}

impl From<TransferEncodingField> for TypedField {
    fn from(field: TransferEncodingField) -> Self {
        Self::TransferEncoding(field)
    }
}

impl From<ContentLengthField> for TypedField {
    fn from(field: ContentLengthField) -> Self {
        Self::ContentLength(field)
    }
}

impl From<ContentTypeField> for TypedField {
    fn from(field: ContentTypeField) -> Self {
        Self::ContentType(field)
    }
}

impl From<UnknownField> for TypedField {
    fn from(field: UnknownField) -> Self {
        Self::Unknown(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_transfer_encoding_by_name() {
        let field = TypedField::parse("Transfer-Encoding", Bytes::from_static(b"gzip, chunked")).unwrap();

        match field {
            TypedField::TransferEncoding(field) => assert_eq!(field.codings(), ["gzip", "chunked"]),
            other => panic!("expected a transfer-encoding field, got {other:?}"),
        }
    }

    #[test]
    fn dispatch_is_case_insensitive() {
        let field = TypedField::parse("TRANSFER-ENCODING", Bytes::from_static(b"chunked")).unwrap();
        assert!(matches!(field, TypedField::TransferEncoding(_)));

        let field = TypedField::parse("content-length", Bytes::from_static(b"10")).unwrap();
        assert!(matches!(field, TypedField::ContentLength(_)));
    }

    #[test]
    fn unregistered_name_builds_unknown_field() {
        let field = TypedField::parse("X-Trace", Bytes::from_static(b"abc123")).unwrap();

        match field {
            TypedField::Unknown(field) => assert_eq!(field.value(), "abc123"),
            other => panic!("expected an unknown field, got {other:?}"),
        }
    }

    #[test]
    fn invalid_name_is_the_only_error() {
        let result = TypedField::parse("bad name", Bytes::from_static(b"x"));
        assert!(matches!(result, Err(FieldError::InvalidName { .. })));

        // a malformed VALUE is not an error
        let field = TypedField::parse("Transfer-Encoding", Bytes::from_static(b",,,")).unwrap();
        match field {
            TypedField::TransferEncoding(field) => assert!(field.codings().is_empty()),
            other => panic!("expected a transfer-encoding field, got {other:?}"),
        }
    }

    #[test]
    fn different_variants_are_never_equal() {
        let transfer = TypedField::parse("Transfer-Encoding", Bytes::from_static(b"chunked")).unwrap();
        let length = TypedField::parse("Content-Length", Bytes::from_static(b"7")).unwrap();
        assert_ne!(transfer, length);
    }

    #[test]
    fn same_variant_delegates_to_structural_equality() {
        let built: TypedField = TransferEncodingField::new(["a", "b"]).into();
        let parsed = TypedField::parse("Transfer-Encoding", Bytes::from_static(b"a,b")).unwrap();
        assert_eq!(built, parsed);
    }

    #[test]
    fn typed_field_renders_through_delegation() {
        let field = TypedField::parse("Transfer-Encoding", Bytes::from_static(b"gzip , chunked")).unwrap();
        assert_eq!(field.render_value(), "gzip,chunked");
        assert_eq!(field.name(), header::TRANSFER_ENCODING);
        assert_eq!(field.raw_value().as_ref(), b"gzip , chunked");
    }
}
