//! Truncation and corruption detection: every short field is an error,
//! never a silently short record.

use flowstream::codec::{write_field_length, write_magic, write_string, write_u64};
use flowstream::{FlowFile, FlowFileReader, FlowStreamError};
use std::io::Cursor;

/// One well-formed record: {"abc": "bca"} + b"Hello World!".
fn singleton_bytes() -> Vec<u8> {
    let mut buf = Vec::new();
    write_magic(&mut buf).unwrap();
    write_field_length(&mut buf, 1).unwrap();
    write_string(&mut buf, "abc").unwrap();
    write_string(&mut buf, "bca").unwrap();
    write_u64(&mut buf, 12).unwrap();
    buf.extend_from_slice(b"Hello World!");
    buf
}

fn read_first(bytes: Vec<u8>) -> flowstream::Result<Option<FlowFile>> {
    FlowFileReader::new(Cursor::new(bytes)).read()
}

#[test]
fn truncated_inside_magic() {
    let err = read_first(singleton_bytes()[..3].to_vec()).unwrap_err();
    assert!(matches!(
        err,
        FlowStreamError::Truncated { field: "magic header", expected: 7, actual: 3 }
    ));
}

#[test]
fn truncated_inside_attribute_count() {
    // Magic alone, then one byte of the two-byte count.
    for cut in [7, 8] {
        let err = read_first(singleton_bytes()[..cut].to_vec()).unwrap_err();
        assert!(matches!(
            err,
            FlowStreamError::Truncated { field: "field length", .. }
        ));
    }
}

#[test]
fn truncated_inside_key_string() {
    // Key length says 3 bytes but only "ab" is present.
    let err = read_first(singleton_bytes()[..13].to_vec()).unwrap_err();
    assert!(matches!(
        err,
        FlowStreamError::Truncated { field: "attribute key", expected: 3, actual: 2 }
    ));
}

#[test]
fn truncated_inside_content_length() {
    // Attributes complete, then half of the eight-byte content length.
    let err = read_first(singleton_bytes()[..23].to_vec()).unwrap_err();
    assert!(matches!(
        err,
        FlowStreamError::Truncated { field: "content length", expected: 8, actual: 4 }
    ));
}

#[test]
fn truncated_inside_content() {
    let full = singleton_bytes();
    let err = read_first(full[..full.len() - 5].to_vec()).unwrap_err();
    assert!(matches!(
        err,
        FlowStreamError::Truncated { field: "content", expected: 12, actual: 7 }
    ));
}

#[test]
fn malformed_header_fails_before_any_attribute_data() {
    let mut bytes = b"NOTFF3!".to_vec();
    // Trailing garbage that must never be consumed as attributes.
    bytes.extend_from_slice(&[0xAA; 32]);
    let err = read_first(bytes).unwrap_err();
    assert!(matches!(err, FlowStreamError::BadMagic { found } if &found == b"NOTFF3!"));
}

#[test]
fn corrupt_lookahead_surfaces_as_error_not_silent_stop() {
    // A valid record followed by a partial marker: the record read itself
    // fails, because the lookahead finds a torn boundary.
    let mut bytes = singleton_bytes();
    bytes.extend_from_slice(b"NiF");
    let err = read_first(bytes).unwrap_err();
    assert!(matches!(
        err,
        FlowStreamError::Truncated { field: "magic header", expected: 7, actual: 3 }
    ));
}

#[test]
fn garbage_after_valid_record_is_bad_magic() {
    let mut bytes = singleton_bytes();
    bytes.extend_from_slice(b"garbage");
    let err = read_first(bytes).unwrap_err();
    assert!(matches!(err, FlowStreamError::BadMagic { found } if &found == b"garbage"));
}

#[test]
fn invalid_utf8_attribute_key_is_rejected() {
    let mut buf = Vec::new();
    write_magic(&mut buf).unwrap();
    write_field_length(&mut buf, 1).unwrap();
    // Two bytes that are not valid UTF-8 where the key should be.
    write_field_length(&mut buf, 2).unwrap();
    buf.extend_from_slice(&[0xFF, 0xFE]);
    write_string(&mut buf, "value").unwrap();
    write_u64(&mut buf, 0).unwrap();

    let err = read_first(buf).unwrap_err();
    assert!(matches!(
        err,
        FlowStreamError::InvalidUtf8 { field: "attribute key" }
    ));
}

#[test]
fn two_records_with_torn_second_body() {
    // First record intact, second cut inside its attribute block: the
    // first read succeeds (lookahead only consumed the second magic), the
    // second read reports truncation.
    let mut bytes = singleton_bytes();
    let second = singleton_bytes();
    bytes.extend_from_slice(&second[..9]);

    let mut reader = FlowFileReader::new(Cursor::new(bytes));
    let first = reader.read().unwrap().unwrap();
    assert_eq!(first.content(), b"Hello World!");
    assert!(reader.read().is_err());
}
