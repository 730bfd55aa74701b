//! Wire codec for the FlowFile Stream v3 format.
//!
//! Layout: magic (7 bytes "NiFiFF3") | attribute count (field length) |
//! per attribute: key string, value string | content length (8 bytes BE) |
//! content bytes. Field lengths are 2 bytes BE, or a 0xFFFF sentinel
//! followed by 4 bytes BE once the value reaches 0xFFFF. Big-endian
//! throughout, no padding, no footer.

mod frame;
mod primitives;

pub use frame::{read_attributes, read_record, write_attributes, write_record};
pub use primitives::{
    read_field_length, read_magic, read_string, read_u64, write_field_length, write_magic,
    write_string, write_u64, MAGIC_HEADER,
};

pub(crate) use frame::read_record_body;
