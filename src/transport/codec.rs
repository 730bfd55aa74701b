//! Transport-boundary codecs: a batch of FlowFiles to one opaque blob.
//!
//! Transports carry the blob as text (base64), byte-for-byte; any routing
//! metadata travels out-of-band and is invisible to the codec.

use crate::error::{FlowStreamError, Result};
use crate::stream::{FlowFileReader, FlowFileWriter};
use crate::types::FlowFile;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Arc;

/// Content-type label for the FlowFile Stream v3 codec.
pub const FLOWFILE_CODEC_TYPE: &str = "flowfile-v3";

/// Serialize a finite ordered batch of FlowFiles to one opaque text blob,
/// and back. Implementations are keyed by a content-type label.
pub trait StreamCodec: Send + Sync {
    fn content_type(&self) -> &'static str;

    fn serialize(&self, flowfiles: &[FlowFile]) -> Result<String>;

    fn deserialize(&self, blob: &str) -> Result<Vec<FlowFile>>;
}

/// The v3 stream codec: records framed back-to-back, base64-encoded.
#[derive(Debug, Default)]
pub struct FlowFileStreamCodec;

impl StreamCodec for FlowFileStreamCodec {
    fn content_type(&self) -> &'static str {
        FLOWFILE_CODEC_TYPE
    }

    fn serialize(&self, flowfiles: &[FlowFile]) -> Result<String> {
        let mut buf = Vec::new();
        let mut writer = FlowFileWriter::new(&mut buf);
        writer.write_all(flowfiles)?;
        writer.close()?;
        Ok(BASE64.encode(&buf))
    }

    fn deserialize(&self, blob: &str) -> Result<Vec<FlowFile>> {
        let bytes = BASE64
            .decode(blob)
            .map_err(|e| FlowStreamError::Codec(format!("invalid base64 blob: {}", e)))?;
        FlowFileReader::new(Cursor::new(bytes)).collect()
    }
}

/// Explicit mapping from content-type label to codec. Built by the caller
/// and handed to the transport layer; there is no process-wide registry.
#[derive(Clone, Default)]
pub struct CodecRegistry {
    codecs: HashMap<&'static str, Arc<dyn StreamCodec>>,
}

impl CodecRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the v3 stream codec pre-registered.
    pub fn with_default_codec() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(FlowFileStreamCodec));
        registry
    }

    pub fn register(&mut self, codec: Arc<dyn StreamCodec>) {
        self.codecs.insert(codec.content_type(), codec);
    }

    pub fn get(&self, content_type: &str) -> Option<Arc<dyn StreamCodec>> {
        self.codecs.get(content_type).cloned()
    }
}
