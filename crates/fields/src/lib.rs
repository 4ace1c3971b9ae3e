//! Typed HTTP header fields for protocol dissection.
//!
//! A raw HTTP message carries header fields as `Name: value` byte
//! sequences. This crate decodes those values into structured, comparable,
//! round-trippable objects: each field type declares its value grammar once
//! (via the `field-grammar` combinators), parses raw bytes against it,
//! normalizes semantically-insensitive casing, and re-serializes to an
//! equivalent wire form.
//!
//! # Features
//!
//! - Declarative, build-once field-value grammars
//! - Permissive parsing: a malformed value yields a field with an empty
//!   typed value instead of an error, so one bad header never aborts
//!   dissection of a message
//! - Value equality over the typed content only, usable in sets and maps
//! - Name-based dispatch to typed implementations via [`TypedField`], with
//!   [`UnknownField`] as the fallback
//!
//! # Example
//!
//! ```
//! use bytes::Bytes;
//! use http_fields::{HttpField, TransferEncodingField};
//!
//! // dissecting an intercepted header value
//! let field = TransferEncodingField::from_raw_value(Bytes::from_static(b"Gzip, chunked"));
//! assert_eq!(field.codings(), ["gzip", "chunked"]);
//!
//! // building the same field from typed data compares equal
//! let built = TransferEncodingField::new(["gzip", "chunked"]);
//! assert_eq!(built, field);
//! assert_eq!(built.render_value(), "gzip,chunked");
//! ```
//!
//! # Architecture
//!
//! - [`field`]: the [`HttpField`] capability, the concrete field types, and
//!   the [`TypedField`] dispatcher
//! - [`text`]: decoding of raw value bytes into text
//!
//! Field instances are immutable after construction and safe to share
//! read-only across threads; the grammar objects behind them are built once
//! per process and matched reentrantly.

pub mod field;
pub mod text;

mod error;
pub use error::FieldError;

pub use field::ContentLengthField;
pub use field::ContentTypeField;
pub use field::HttpField;
pub use field::TransferEncodingField;
pub use field::TypedField;
pub use field::UnknownField;
