//! Streaming reader with one-record lookahead.

use crate::codec::{read_magic, read_record_body};
use crate::error::{FlowStreamError, Result};
use crate::types::FlowFile;
use std::io::Read;

/// Where the reader stands relative to the underlying byte source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReaderState {
    /// Nothing read yet.
    Idle,
    /// The next record's magic marker has been consumed and validated; its
    /// body has not been read.
    HasLookahead,
    /// Clean end-of-stream detected at a record boundary.
    Exhausted,
}

/// Reader for a FlowFile Stream v3 byte source.
///
/// After each record is produced, the reader speculatively consumes the
/// next record's magic marker. That one-record lookahead is what lets
/// iteration detect end-of-stream without pulling application data past
/// the last record boundary. Single-pass: iterating does not rewind the
/// source.
pub struct FlowFileReader<R: Read> {
    source: Option<R>,
    state: ReaderState,
}

impl<R: Read> FlowFileReader<R> {
    /// Wrap a byte source. The reader releases the source on `close` (or
    /// drop); pass `&mut source` to keep the underlying value alive.
    pub fn new(source: R) -> Self {
        Self {
            source: Some(source),
            state: ReaderState::Idle,
        }
    }

    /// Whether another record may remain. True until clean end-of-stream
    /// has been observed.
    pub fn has_more(&self) -> bool {
        self.state != ReaderState::Exhausted
    }

    /// Read the next record, or `Ok(None)` on clean end-of-stream. An
    /// empty stream yields `Ok(None)` on the first call; a partial or
    /// foreign marker anywhere is an error, never a silent stop.
    pub fn read(&mut self) -> Result<Option<FlowFile>> {
        match self.state {
            ReaderState::Exhausted => return Ok(None),
            ReaderState::Idle => {
                if !read_magic(self.source_mut()?)? {
                    self.state = ReaderState::Exhausted;
                    return Ok(None);
                }
            }
            // Marker already consumed by the previous call's lookahead.
            ReaderState::HasLookahead => {}
        }
        let source = self.source_mut()?;
        let flowfile = read_record_body(source)?;
        self.state = if read_magic(source)? {
            ReaderState::HasLookahead
        } else {
            ReaderState::Exhausted
        };
        Ok(Some(flowfile))
    }

    /// Release the underlying source. Idempotent: repeated calls are
    /// no-ops after the first.
    pub fn close(&mut self) {
        self.source.take();
    }

    fn source_mut(&mut self) -> Result<&mut R> {
        self.source.as_mut().ok_or(FlowStreamError::Closed)
    }
}

impl<R: Read> Iterator for FlowFileReader<R> {
    type Item = Result<FlowFile>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read() {
            Ok(Some(flowfile)) => Some(Ok(flowfile)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
