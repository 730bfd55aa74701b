//! Core record type: one attribute map paired with one content payload.

use crate::attributes::{default_attributes, AttributeMap};
use bytes::Bytes;

/// One FlowFile: an immutable pairing of attributes and opaque content.
///
/// Mutation is copy-on-write: every `with_*`/`without_*` call returns a new
/// FlowFile and re-stamps the auto-populated core attributes (fresh `uuid`,
/// default `path` and `filename`). The codec only ever serializes a
/// snapshot; reading a stream reproduces attributes exactly as written,
/// with no re-stamping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowFile {
    attributes: AttributeMap,
    content: Bytes,
}

impl FlowFile {
    /// Construct from explicit attributes; nothing is auto-populated.
    pub fn new(attributes: AttributeMap, content: impl Into<Bytes>) -> Self {
        Self {
            attributes,
            content: content.into(),
        }
    }

    /// Construct from content alone, stamping the default core attributes.
    pub fn from_content(content: impl Into<Bytes>) -> Self {
        Self {
            attributes: default_attributes(),
            content: content.into(),
        }
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key)
    }

    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn into_parts(self) -> (AttributeMap, Bytes) {
        (self.attributes, self.content)
    }

    /// Return a new FlowFile with one attribute added or overwritten.
    pub fn with_attribute(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_attributes([(key.into(), value.into())])
    }

    /// Return a new FlowFile with the given attributes merged in. The
    /// default core attributes are re-stamped last, so each mutation
    /// carries a fresh uuid.
    pub fn with_attributes<I>(&self, entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut attributes = self.attributes.clone();
        attributes.extend(entries);
        attributes.extend(default_attributes());
        Self {
            attributes,
            content: self.content.clone(),
        }
    }

    /// Return a new FlowFile with the named attributes removed (missing
    /// keys are ignored), then the default core attributes re-stamped.
    pub fn without_attributes<'a, I>(&self, keys: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut attributes = self.attributes.clone();
        for key in keys {
            attributes.remove(key);
        }
        attributes.extend(default_attributes());
        Self {
            attributes,
            content: self.content.clone(),
        }
    }
}
