//! Vertex representation

use crate::identity::{Disposable, IdGenerator, Identifiable, Tagged, UuidIds};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Unique identifier for a vertex
///
/// Serializes as a plain string. This is the handle every secondary index
/// stores; the vertex itself lives only in the engine's vertex index.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(String);

impl VertexId {
    /// Create a new random VertexId (UUID-based)
    pub fn new() -> Self {
        Self(UuidIds.next_id())
    }

    /// Create a VertexId from a string
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for VertexId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VertexId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for VertexId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A vertex: an id plus an optional tag, an optional payload and scratch
/// slots for algorithms (`color`, `index`, `weight`)
///
/// Equality and hashing look at the id only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex<V = ()> {
    id: VertexId,
    tag: Option<String>,
    data: Option<V>,
    /// Scratch slot for search colorings
    pub color: i32,
    /// Scratch slot for positional bookkeeping
    pub index: i32,
    /// Scratch slot for vertex-weighted algorithms
    pub weight: f32,
}

impl<V> Vertex<V> {
    pub const NO_COLOR: i32 = 0;
    pub const NO_INDEX: i32 = -1;
    pub const NO_WEIGHT: f32 = 0.0;

    /// Create a detached vertex with the given id
    pub fn new(id: impl Into<VertexId>) -> Self {
        Self {
            id: id.into(),
            tag: None,
            data: None,
            color: Self::NO_COLOR,
            index: Self::NO_INDEX,
            weight: Self::NO_WEIGHT,
        }
    }

    /// Create a detached vertex with an id drawn from `ids`
    pub fn generated(ids: &mut dyn IdGenerator) -> Self {
        Self::new(VertexId::from_string(ids.next_id()))
    }

    /// Set the tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Attach a payload
    pub fn with_data(mut self, data: V) -> Self {
        self.data = Some(data);
        self
    }

    pub fn vertex_id(&self) -> &VertexId {
        &self.id
    }

    pub fn data(&self) -> Option<&V> {
        self.data.as_ref()
    }

    pub fn data_mut(&mut self) -> Option<&mut V> {
        self.data.as_mut()
    }

    /// Replace the payload, returning the previous one
    pub fn set_data(&mut self, data: Option<V>) -> Option<V> {
        std::mem::replace(&mut self.data, data)
    }
}

impl Default for Vertex<()> {
    fn default() -> Self {
        Self::new(VertexId::new())
    }
}

impl<V> PartialEq for Vertex<V> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<V> Eq for Vertex<V> {}

impl<V> Hash for Vertex<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<V> Identifiable for Vertex<V> {
    fn id(&self) -> Option<&str> {
        Some(self.id.as_str())
    }
}

impl<V> Tagged for Vertex<V> {
    fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    fn set_tag(&mut self, tag: Option<String>) {
        self.tag = tag;
    }
}

impl<V> Disposable for Vertex<V> {
    fn dispose(&mut self) {
        self.data = None;
    }
}

impl<V> std::fmt::Display for Vertex<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.tag_or(self.id.as_str()))
    }
}
