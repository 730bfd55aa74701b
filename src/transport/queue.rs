//! In-process flow queue: serialized FlowFile batches routed to named
//! input ports.

use super::codec::{CodecRegistry, FLOWFILE_CODEC_TYPE};
use crate::error::{FlowStreamError, Result};
use crate::types::FlowFile;
use parking_lot::{Mutex, RwLock};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tracing::{debug, warn};

/// One queued message: the opaque serialized blob plus out-of-band routing
/// metadata. The codec never sees the metadata.
#[derive(Debug, Clone)]
pub struct QueueMessage {
    pub body: String,
    pub content_type: String,
    pub input_port_id: String,
    pub response_queue: Option<String>,
    pub response_port_prefix: Option<String>,
}

/// Handler attached to one input port.
pub trait Processor: Send + Sync {
    fn process(&self, flowfiles: Vec<FlowFile>) -> Result<()>;
}

impl<F> Processor for F
where
    F: Fn(Vec<FlowFile>) -> Result<()> + Send + Sync,
{
    fn process(&self, flowfiles: Vec<FlowFile>) -> Result<()> {
        self(flowfiles)
    }
}

/// Queue of serialized FlowFile batches with per-port dispatch.
///
/// Producers serialize through the caller-supplied codec registry and
/// enqueue; `process_next` dequeues, routes by input port id, deserializes,
/// and invokes the connected processor. Internally synchronized so
/// independent producers may enqueue concurrently.
pub struct FlowQueue {
    name: String,
    registry: CodecRegistry,
    processors: RwLock<HashMap<String, Arc<dyn Processor>>>,
    messages: Mutex<VecDeque<QueueMessage>>,
}

impl FlowQueue {
    pub fn new(name: impl Into<String>, registry: CodecRegistry) -> Self {
        Self {
            name: name.into(),
            registry,
            processors: RwLock::new(HashMap::new()),
            messages: Mutex::new(VecDeque::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Connect a processor to an input port, replacing any previous one.
    pub fn connect_processor(&self, port_id: impl Into<String>, processor: Arc<dyn Processor>) {
        let port_id = port_id.into();
        debug!(queue = %self.name, port_id = %port_id, "connect processor");
        self.processors.write().insert(port_id, processor);
    }

    /// Serialize one FlowFile and enqueue it for the given input port.
    pub fn add_flowfile(&self, port_id: impl Into<String>, flowfile: FlowFile) -> Result<()> {
        self.add_flowfiles(port_id, vec![flowfile], None, None)
    }

    /// Serialize a batch and enqueue it, optionally attaching reply-to
    /// metadata (response queue name and port prefix).
    pub fn add_flowfiles(
        &self,
        port_id: impl Into<String>,
        flowfiles: Vec<FlowFile>,
        response_queue: Option<String>,
        response_port_prefix: Option<String>,
    ) -> Result<()> {
        let codec = self.registry.get(FLOWFILE_CODEC_TYPE).ok_or_else(|| {
            FlowStreamError::Queue(format!("no codec registered for {}", FLOWFILE_CODEC_TYPE))
        })?;
        let body = codec.serialize(&flowfiles)?;
        let message = QueueMessage {
            body,
            content_type: FLOWFILE_CODEC_TYPE.to_string(),
            input_port_id: port_id.into(),
            response_queue: response_queue.or_else(|| {
                response_port_prefix.is_some().then(|| self.name.clone())
            }),
            response_port_prefix,
        };
        debug!(
            queue = %self.name,
            port_id = %message.input_port_id,
            flowfiles = flowfiles.len(),
            "enqueue"
        );
        self.messages.lock().push_back(message);
        Ok(())
    }

    /// Dequeue and dispatch one message. Returns `Ok(false)` when the
    /// queue is empty; an unconnected port or unknown content type is an
    /// error, and the message is dropped either way.
    pub fn process_next(&self) -> Result<bool> {
        let Some(message) = self.messages.lock().pop_front() else {
            return Ok(false);
        };
        let processor = self.processors.read().get(&message.input_port_id).cloned();
        let Some(processor) = processor else {
            warn!(
                queue = %self.name,
                port_id = %message.input_port_id,
                "no processor connected to port"
            );
            return Err(FlowStreamError::Queue(format!(
                "no processor connected to port {}",
                message.input_port_id
            )));
        };
        let codec = self.registry.get(&message.content_type).ok_or_else(|| {
            FlowStreamError::Queue(format!(
                "no codec registered for {}",
                message.content_type
            ))
        })?;
        let flowfiles = codec.deserialize(&message.body)?;
        processor.process(flowfiles)?;
        Ok(true)
    }

    /// Process until the queue is empty; returns how many messages were
    /// dispatched.
    pub fn drain(&self) -> Result<usize> {
        let mut processed = 0;
        while self.process_next()? {
            processed += 1;
        }
        Ok(processed)
    }

    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }
}
