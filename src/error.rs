//! Error types for the FlowFile stream codec and transport glue.

use thiserror::Error;

/// Result alias for codec and transport operations.
pub type Result<T> = std::result::Result<T, FlowStreamError>;

/// Errors that can occur while encoding, decoding, or routing FlowFiles.
///
/// Clean end-of-stream is not an error and is modeled as `Ok(None)` by the
/// reading APIs; every variant here is fatal to the operation that raised it.
#[derive(Error, Debug)]
pub enum FlowStreamError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Truncated {field}: expected {expected} bytes, got {actual}")]
    Truncated {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Not in FlowFile-v3 format: expected magic header, found {found:?}")]
    BadMagic { found: [u8; 7] },

    #[error("Invalid UTF-8 in {field}")]
    InvalidUtf8 { field: &'static str },

    #[error("Field length {value} does not fit in 32 bits")]
    FieldOverflow { value: u64 },

    #[error("Stream is closed")]
    Closed,

    #[error("Invalid open mode: {0}")]
    InvalidMode(String),

    #[error("Codec error: {0}")]
    Codec(String),

    #[error("Queue error: {0}")]
    Queue(String),
}
