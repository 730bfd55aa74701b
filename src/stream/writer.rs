//! Streaming writer: one record per call, in caller order.

use crate::codec::write_record;
use crate::error::{FlowStreamError, Result};
use crate::types::FlowFile;
use std::borrow::Borrow;
use std::io::Write;

/// Writer for a FlowFile Stream v3 byte sink.
///
/// Records are framed straight onto the sink with no reordering or
/// batching; when bytes reach durable storage is the sink's own
/// flush/close contract.
pub struct FlowFileWriter<W: Write> {
    sink: Option<W>,
}

impl<W: Write> FlowFileWriter<W> {
    /// Wrap a byte sink. The writer releases the sink on `close` (or
    /// drop); pass `&mut sink` to keep the underlying value alive.
    pub fn new(sink: W) -> Self {
        Self { sink: Some(sink) }
    }

    /// Write one record.
    pub fn write(&mut self, flowfile: &FlowFile) -> Result<()> {
        write_record(self.sink_mut()?, flowfile)
    }

    /// Write every record of a sequence in iteration order, stopping at
    /// the first error. Prior writes stay in the sink; there is no
    /// rollback.
    pub fn write_all<I>(&mut self, flowfiles: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Borrow<FlowFile>,
    {
        for flowfile in flowfiles {
            self.write(flowfile.borrow())?;
        }
        Ok(())
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        self.sink_mut()?.flush()?;
        Ok(())
    }

    /// Flush and release the underlying sink. Idempotent: repeated calls
    /// are no-ops after the first.
    pub fn close(&mut self) -> Result<()> {
        if let Some(mut sink) = self.sink.take() {
            sink.flush()?;
        }
        Ok(())
    }

    fn sink_mut(&mut self) -> Result<&mut W> {
        self.sink.as_mut().ok_or(FlowStreamError::Closed)
    }
}
