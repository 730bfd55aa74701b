//! One-record framing over the wire primitives.

use super::primitives::{
    read_exact_field, read_field_length, read_magic, read_string, read_u64, write_field_length,
    write_magic, write_string, write_u64,
};
use crate::attributes::AttributeMap;
use crate::error::Result;
use crate::types::FlowFile;
use std::io::{Read, Write};

/// Write the attribute block: count (field length), then each key/value
/// pair in map iteration order.
pub fn write_attributes<W: Write>(writer: &mut W, attributes: &AttributeMap) -> Result<()> {
    write_field_length(writer, attributes.len() as u64)?;
    for (key, value) in attributes.iter() {
        write_string(writer, key)?;
        write_string(writer, value)?;
    }
    Ok(())
}

/// Read the attribute block. A repeated key resolves to its last
/// occurrence, as ordinary map construction would.
pub fn read_attributes<R: Read>(reader: &mut R) -> Result<AttributeMap> {
    let count = read_field_length(reader)?;
    let mut attributes = AttributeMap::new();
    for _ in 0..count {
        let key = read_string(reader, "attribute key")?;
        let value = read_string(reader, "attribute value")?;
        attributes.insert(key, value);
    }
    Ok(attributes)
}

/// Write one record: magic, attributes, content length, content bytes.
/// Fields are streamed to the sink in wire order with no extra buffering.
pub fn write_record<W: Write>(writer: &mut W, flowfile: &FlowFile) -> Result<()> {
    write_magic(writer)?;
    write_attributes(writer, flowfile.attributes())?;
    let content = flowfile.content();
    write_u64(writer, content.len() as u64)?;
    writer.write_all(content)?;
    Ok(())
}

/// Read one record, or `Ok(None)` on clean end-of-stream at the magic
/// position.
pub fn read_record<R: Read>(reader: &mut R) -> Result<Option<FlowFile>> {
    if !read_magic(reader)? {
        return Ok(None);
    }
    read_record_body(reader).map(Some)
}

/// Read the record body after the magic marker has been consumed.
pub(crate) fn read_record_body<R: Read>(reader: &mut R) -> Result<FlowFile> {
    let attributes = read_attributes(reader)?;
    let content_length = read_u64(reader, "content length")? as usize;
    let mut content = vec![0u8; content_length];
    read_exact_field(reader, &mut content, "content")?;
    Ok(FlowFile::new(attributes, content))
}
