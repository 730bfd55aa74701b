//! Flowstream: FlowFile Stream v3 record container with incremental
//! reader/writer and queue-transport glue.
//!
//! A stream is zero or more records back-to-back, each framed as a 7-byte
//! magic marker, an ordered attribute map, and an opaque content payload.
//! The codec is synchronous and single-pass; end-of-stream is detected by
//! one-record lookahead at record boundaries, never by an end marker.

pub mod attributes;
pub mod codec;
pub mod error;
pub mod stream;
pub mod transport;
pub mod types;

pub use attributes::AttributeMap;
pub use error::{FlowStreamError, Result};
pub use stream::{
    open, open_reader, open_writer, FlowFileReader, FlowFileStream, FlowFileWriter, OpenMode,
};
pub use transport::{CodecRegistry, FlowFileStreamCodec, FlowQueue, StreamCodec};
pub use types::FlowFile;
