//! Atomic wire primitives: field lengths, strings, fixed u64, magic marker.

use crate::error::{FlowStreamError, Result};
use std::io::{ErrorKind, Read, Write};

/// Record start marker, fixed across the v3 format.
pub const MAGIC_HEADER: &[u8; 7] = b"NiFiFF3";

/// A 2-byte field length of 0xFFFF means a 4-byte length follows.
const MAX_VALUE_2_BYTES: u16 = u16::MAX;

/// Read exactly `buf.len()` bytes; a short source yields `Truncated` with
/// the byte counts, any other IO failure passes through unmodified.
pub(crate) fn read_exact_field<R: Read>(
    reader: &mut R,
    buf: &mut [u8],
    field: &'static str,
) -> Result<()> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(FlowStreamError::Truncated {
                    field,
                    expected: buf.len(),
                    actual: filled,
                })
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// Write a field length: 2 bytes BE below 0xFFFF, else the 0xFFFF sentinel
/// followed by 4 bytes BE. Lengths past 32 bits do not fit the format.
pub fn write_field_length<W: Write>(writer: &mut W, length: u64) -> Result<()> {
    if length < MAX_VALUE_2_BYTES as u64 {
        writer.write_all(&(length as u16).to_be_bytes())?;
    } else {
        if length > u32::MAX as u64 {
            return Err(FlowStreamError::FieldOverflow { value: length });
        }
        writer.write_all(&MAX_VALUE_2_BYTES.to_be_bytes())?;
        writer.write_all(&(length as u32).to_be_bytes())?;
    }
    Ok(())
}

pub fn read_field_length<R: Read>(reader: &mut R) -> Result<u64> {
    let mut short = [0u8; 2];
    read_exact_field(reader, &mut short, "field length")?;
    let value = u16::from_be_bytes(short);
    if value == MAX_VALUE_2_BYTES {
        let mut wide = [0u8; 4];
        read_exact_field(reader, &mut wide, "extended field length")?;
        Ok(u32::from_be_bytes(wide) as u64)
    } else {
        Ok(value as u64)
    }
}

/// Write a string as its UTF-8 byte length (field length) then the bytes.
pub fn write_string<W: Write>(writer: &mut W, value: &str) -> Result<()> {
    write_field_length(writer, value.len() as u64)?;
    writer.write_all(value.as_bytes())?;
    Ok(())
}

pub fn read_string<R: Read>(reader: &mut R, field: &'static str) -> Result<String> {
    let length = read_field_length(reader)? as usize;
    let mut buf = vec![0u8; length];
    read_exact_field(reader, &mut buf, field)?;
    String::from_utf8(buf).map_err(|_| FlowStreamError::InvalidUtf8 { field })
}

/// Fixed 8-byte big-endian unsigned integer (content lengths).
pub fn write_u64<W: Write>(writer: &mut W, value: u64) -> Result<()> {
    writer.write_all(&value.to_be_bytes())?;
    Ok(())
}

pub fn read_u64<R: Read>(reader: &mut R, field: &'static str) -> Result<u64> {
    let mut buf = [0u8; 8];
    read_exact_field(reader, &mut buf, field)?;
    Ok(u64::from_be_bytes(buf))
}

pub fn write_magic<W: Write>(writer: &mut W) -> Result<()> {
    writer.write_all(MAGIC_HEADER)?;
    Ok(())
}

/// Consume and validate the 7-byte magic marker.
///
/// Returns `Ok(false)` for clean end-of-stream: zero bytes available at the
/// very start of the call. A partial marker is `Truncated`; seven bytes
/// that are not the marker are `BadMagic`.
pub fn read_magic<R: Read>(reader: &mut R) -> Result<bool> {
    let mut buf = [0u8; 7];
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) if filled == 0 => return Ok(false),
            Ok(0) => {
                return Err(FlowStreamError::Truncated {
                    field: "magic header",
                    expected: buf.len(),
                    actual: filled,
                })
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    if &buf != MAGIC_HEADER {
        return Err(FlowStreamError::BadMagic { found: buf });
    }
    Ok(true)
}
