//! Attribute maps and the well-known attribute namespaces.
//!
//! The codec treats attributes as an opaque ordered string-to-string map;
//! the constants below are a naming convention consumed by construction and
//! packing layers, never by the wire format itself.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Core attributes populated on every freshly constructed FlowFile.
pub mod core {
    pub const PATH: &str = "path";
    pub const ABSOLUTE_PATH: &str = "absolute.path";
    pub const FILENAME: &str = "filename";
    pub const UUID: &str = "uuid";
    pub const PRIORITY: &str = "priority";
    pub const MIME_TYPE: &str = "mime.type";
    pub const DISCARD_REASON: &str = "discard.reason";
    pub const ALTERNATE_IDENTIFIER: &str = "alternate.identifier";
}

/// Attributes describing one fragment of a split stream.
pub mod fragment {
    pub const FRAGMENT_SIZE: &str = "fragment.size";
    pub const FRAGMENT_ID: &str = "fragment.id";
    pub const FRAGMENT_INDEX: &str = "fragment.index";
    pub const FRAGMENT_COUNT: &str = "fragment.count";
    pub const SEGMENT_ORIGINAL_FILENAME: &str = "segment.original.filename";
}

/// Site-to-site routing attributes.
pub mod site_to_site {
    pub const S2S_HOST: &str = "s2s.host";
    pub const S2S_ADDRESS: &str = "s2s.address";
    pub const S2S_PORT_ID: &str = "s2s.port.id";
}

/// Ordered string-to-string attribute map.
///
/// Insertion order is preserved on the wire. Keys are unique: inserting an
/// existing key overwrites its value and keeps the key's original position,
/// so a duplicate key read from a stream resolves to the last occurrence.
/// Equality compares key/value pairs without regard to order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeMap(IndexMap<String, String>);

impl AttributeMap {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Insert a key/value pair; an existing key is overwritten (last write
    /// wins) without changing its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Remove a key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

impl Extend<(String, String)> for AttributeMap {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl IntoIterator for AttributeMap {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Attributes stamped onto a FlowFile at construction and on every
/// attribute mutation: a fresh `uuid`, `path` of `./`, and a `filename`
/// equal to the uuid.
pub fn default_attributes() -> AttributeMap {
    let uuid = Uuid::new_v4().to_string();
    let mut attrs = AttributeMap::new();
    attrs.insert(core::UUID, uuid.clone());
    attrs.insert(core::PATH, "./");
    attrs.insert(core::FILENAME, uuid);
    attrs
}
