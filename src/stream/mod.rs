//! Stream reader/writer and the file-open convenience interface.

mod reader;
mod writer;

pub use reader::FlowFileReader;
pub use writer::FlowFileWriter;

use crate::error::{FlowStreamError, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::str::FromStr;

/// How to open a FlowFile stream file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    Read,
    /// Create or truncate.
    Write,
    /// Create or append.
    Append,
}

impl FromStr for OpenMode {
    type Err = FlowStreamError;

    /// Parse a mode token ("r", "w", "a"). An unknown token is rejected
    /// immediately, before any file is touched.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "r" => Ok(OpenMode::Read),
            "w" => Ok(OpenMode::Write),
            "a" => Ok(OpenMode::Append),
            other => Err(FlowStreamError::InvalidMode(format!(
                "mode must be 'r', 'w', or 'a', got {:?}",
                other
            ))),
        }
    }
}

/// A stream opened from a path: a reader in read mode, a writer otherwise.
pub enum FlowFileStream {
    Reader(FlowFileReader<File>),
    Writer(FlowFileWriter<File>),
}

/// Open a FlowFile stream file in the given mode. The returned
/// reader/writer owns the file and releases it on close or drop.
pub fn open(path: impl AsRef<Path>, mode: OpenMode) -> Result<FlowFileStream> {
    match mode {
        OpenMode::Read => open_reader(path).map(FlowFileStream::Reader),
        OpenMode::Write | OpenMode::Append => open_writer(path, mode).map(FlowFileStream::Writer),
    }
}

/// Open a stream file for reading.
pub fn open_reader(path: impl AsRef<Path>) -> Result<FlowFileReader<File>> {
    let file = File::open(path)?;
    Ok(FlowFileReader::new(file))
}

/// Open a stream file for writing (`Write` truncates, `Append` extends).
pub fn open_writer(path: impl AsRef<Path>, mode: OpenMode) -> Result<FlowFileWriter<File>> {
    let file = match mode {
        OpenMode::Read => {
            return Err(FlowStreamError::InvalidMode(
                "cannot open a writer in read mode".to_string(),
            ))
        }
        OpenMode::Write => OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?,
        OpenMode::Append => OpenOptions::new().append(true).create(true).open(path)?,
    };
    Ok(FlowFileWriter::new(file))
}
