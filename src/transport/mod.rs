//! Queue-transport boundary: blob codecs and port-routed delivery.
//!
//! The core codec exposes exactly two entry points to any transport:
//! serialize a batch of records to one opaque blob, and deserialize a blob
//! back. The transport preserves that blob byte-for-byte.

mod codec;
mod queue;

pub use codec::{CodecRegistry, FlowFileStreamCodec, StreamCodec, FLOWFILE_CODEC_TYPE};
pub use queue::{FlowQueue, Processor, QueueMessage};
