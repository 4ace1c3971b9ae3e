//! Dissects the header section of a raw HTTP request into typed fields.

use std::mem::MaybeUninit;

use bytes::Bytes;
use http_fields::{HttpField, TypedField};
use indoc::indoc;

fn dissect(raw: &str) -> Vec<TypedField> {
    let mut parsed_req = httparse::Request::new(&mut []);
    let mut headers: [MaybeUninit<httparse::Header>; 16] = unsafe { MaybeUninit::uninit().assume_init() };

    parsed_req.parse_with_uninit_headers(raw.as_bytes(), &mut headers).unwrap();

    parsed_req
        .headers
        .iter()
        .map(|header| TypedField::parse(header.name, Bytes::copy_from_slice(header.value)).unwrap())
        .collect()
}

#[test]
fn dissects_request_headers_into_typed_fields() {
    let raw = indoc! {r##"
    POST /upload HTTP/1.1
    Host: 127.0.0.1:8080
    Transfer-Encoding: Gzip, chunked
    Content-Type: text/html; charset=utf-8
    X-Trace: abc123

    "##};

    let fields = dissect(raw);
    assert_eq!(fields.len(), 4);

    match &fields[1] {
        TypedField::TransferEncoding(field) => {
            // mixed case anywhere lower-cases the whole list
            assert_eq!(field.codings(), ["gzip", "chunked"]);
            assert_eq!(field.render_value(), "gzip,chunked");
        }
        other => panic!("expected a transfer-encoding field, got {other:?}"),
    }

    match &fields[2] {
        TypedField::ContentType(field) => {
            assert_eq!(field.media_type(), Some("text"));
            assert_eq!(field.media_subtype(), Some("html"));
            assert_eq!(field.parameters(), ["charset=utf-8"]);
        }
        other => panic!("expected a content-type field, got {other:?}"),
    }

    match &fields[3] {
        TypedField::Unknown(field) => assert_eq!(field.value(), "abc123"),
        other => panic!("expected an unknown field, got {other:?}"),
    }
}

#[test]
fn malformed_header_does_not_abort_dissection() {
    let raw = indoc! {r##"
    POST /upload HTTP/1.1
    Transfer-Encoding: ,,,
    Content-Length: 42

    "##};

    let fields = dissect(raw);
    assert_eq!(fields.len(), 2);

    // the malformed field is present with an empty typed value
    match &fields[0] {
        TypedField::TransferEncoding(field) => {
            assert!(field.codings().is_empty());
            assert_eq!(field.raw_value().as_ref(), b",,,");
        }
        other => panic!("expected a transfer-encoding field, got {other:?}"),
    }

    // and its neighbor still parses
    match &fields[1] {
        TypedField::ContentLength(field) => assert_eq!(field.length(), Some(42)),
        other => panic!("expected a content-length field, got {other:?}"),
    }
}
